//! Container kinds and the policy each one enforces.

use std::fmt;

use crate::variant::{Family, Stage, Variant};

/// The three container policies.
///
/// | kind     | accepts                    | substance | attack |
/// |----------|----------------------------|-----------|--------|
/// | Cage     | birds and mice             | yes       | yes    |
/// | Aquarium | fish and mice              | yes       | yes    |
/// | Freedom  | everything, Monster incl.  | no        | no     |
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerKind {
    /// Restricted to birds and mice.
    Cage,
    /// Restricted to fish and mice.
    Aquarium,
    /// Unrestricted, but no substances and no fighting.
    Freedom,
}

impl ContainerKind {
    /// Every kind, in declaration order.
    pub const ALL: [ContainerKind; 3] = [Self::Cage, Self::Aquarium, Self::Freedom];

    /// Parses a protocol container name (case-sensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// The protocol container name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cage => "Cage",
            Self::Aquarium => "Aquarium",
            Self::Freedom => "Freedom",
        }
    }

    /// Whether a container of this kind may hold `variant`.
    #[must_use]
    pub fn accepts(self, variant: Variant) -> bool {
        match self {
            Self::Freedom => true,
            Self::Cage => matches!(variant.family(), Some(Family::Bird | Family::Mouse)),
            Self::Aquarium => matches!(variant.family(), Some(Family::Fish | Family::Mouse)),
        }
    }

    /// Whether substances may be applied or removed here.
    #[must_use]
    pub const fn permits_substance(self) -> bool {
        !matches!(self, Self::Freedom)
    }

    /// Whether animals here may attack each other.
    #[must_use]
    pub const fn permits_attack(self) -> bool {
        !matches!(self, Self::Freedom)
    }

    /// Variants this kind keeps in dedicated per-variant containers.
    ///
    /// Restricted kinds keep one container per accepted family member;
    /// Freedom keeps a single mixed container and returns nothing here.
    pub fn segregated_variants(self) -> impl Iterator<Item = Variant> {
        Variant::ALL
            .into_iter()
            .filter(move |v| self != Self::Freedom && v.stage() != Stage::Fused && self.accepts(*v))
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
