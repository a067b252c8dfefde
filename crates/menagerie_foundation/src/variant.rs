//! Animal variants and the lineage between them.
//!
//! Every variant is a (family, stage) pair except the fused terminal kind,
//! which belongs to no family:
//!
//! ```text
//! Fish  ── upgrade ──▶ BetterFish  ──┐
//! Bird  ── upgrade ──▶ BetterBird  ──┼── fuse ──▶ Monster
//! Mouse ── upgrade ──▶ BetterMouse ──┘
//!       ◀─ downgrade ─
//! ```

use std::fmt;

// =============================================================================
// Family
// =============================================================================

/// The three animal families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// Fish and `BetterFish`.
    Fish,
    /// Bird and `BetterBird`.
    Bird,
    /// Mouse and `BetterMouse`.
    Mouse,
}

impl Family {
    /// The base variant of this family.
    #[must_use]
    pub const fn base(self) -> Variant {
        match self {
            Self::Fish => Variant::Fish,
            Self::Bird => Variant::Bird,
            Self::Mouse => Variant::Mouse,
        }
    }

    /// The upgraded variant of this family.
    #[must_use]
    pub const fn better(self) -> Variant {
        match self {
            Self::Fish => Variant::BetterFish,
            Self::Bird => Variant::BetterBird,
            Self::Mouse => Variant::BetterMouse,
        }
    }
}

// =============================================================================
// Stage
// =============================================================================

/// How far along the lineage a variant is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Plain animal, never treated.
    Base,
    /// Treated once.
    Better,
    /// Terminal fused form.
    Fused,
}

// =============================================================================
// Variant
// =============================================================================

/// The closed set of animal kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// `F`
    Fish,
    /// `BF`
    BetterFish,
    /// `B`
    Bird,
    /// `BB`
    BetterBird,
    /// `M`
    Mouse,
    /// `BM`
    BetterMouse,
    /// `MON`
    Monster,
}

impl Variant {
    /// Every variant, in declaration order.
    pub const ALL: [Variant; 7] = [
        Self::Fish,
        Self::BetterFish,
        Self::Bird,
        Self::BetterBird,
        Self::Mouse,
        Self::BetterMouse,
        Self::Monster,
    ];

    /// Parses a protocol type code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// The protocol type code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fish => "F",
            Self::BetterFish => "BF",
            Self::Bird => "B",
            Self::BetterBird => "BB",
            Self::Mouse => "M",
            Self::BetterMouse => "BM",
            Self::Monster => "MON",
        }
    }

    /// The variant's proper name, as used in attack announcements.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fish => "Fish",
            Self::BetterFish => "BetterFish",
            Self::Bird => "Bird",
            Self::BetterBird => "BetterBird",
            Self::Mouse => "Mouse",
            Self::BetterMouse => "BetterMouse",
            Self::Monster => "Monster",
        }
    }

    /// The family this variant belongs to, `None` for the fused kind.
    #[must_use]
    pub const fn family(self) -> Option<Family> {
        match self {
            Self::Fish | Self::BetterFish => Some(Family::Fish),
            Self::Bird | Self::BetterBird => Some(Family::Bird),
            Self::Mouse | Self::BetterMouse => Some(Family::Mouse),
            Self::Monster => None,
        }
    }

    /// The lineage stage of this variant.
    #[must_use]
    pub const fn stage(self) -> Stage {
        match self {
            Self::Fish | Self::Bird | Self::Mouse => Stage::Base,
            Self::BetterFish | Self::BetterBird | Self::BetterMouse => Stage::Better,
            Self::Monster => Stage::Fused,
        }
    }

    /// The variant one substance application produces, if it is an upgrade.
    ///
    /// Only base variants upgrade; better variants fuse instead.
    #[must_use]
    pub fn upgraded(self) -> Option<Self> {
        match self.stage() {
            Stage::Base => self.family().map(Family::better),
            Stage::Better | Stage::Fused => None,
        }
    }

    /// The variant substance removal produces. Only better variants downgrade.
    #[must_use]
    pub fn downgraded(self) -> Option<Self> {
        match self.stage() {
            Stage::Better => self.family().map(Family::base),
            Stage::Base | Stage::Fused => None,
        }
    }

    /// The terminal variant every lineage ends in.
    #[must_use]
    pub const fn fused(self) -> Self {
        Self::Monster
    }

    /// Whether the protocol's CREATE command may produce this variant.
    #[must_use]
    pub const fn is_creatable(self) -> bool {
        !matches!(self, Self::Monster)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
