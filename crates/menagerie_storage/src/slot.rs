//! Container addresses.
//!
//! Restricted kinds keep one container per variant (a Cage holds its mice
//! apart from its better mice), so a container is named by the pair
//! (kind, variant). Freedom has a single mixed container and no variant.

use std::fmt;

use menagerie_foundation::{ContainerKind, Error, Result, Stage, Variant};

/// Names exactly one container in the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    kind: ContainerKind,
    variant: Option<Variant>,
}

impl Slot {
    /// The single unrestricted container.
    pub const FREEDOM: Slot = Slot {
        kind: ContainerKind::Freedom,
        variant: None,
    };

    /// Every slot, in the order periods visit them.
    pub const ALL: [Slot; 9] = [
        Slot::enclosure(ContainerKind::Cage, Variant::Bird),
        Slot::enclosure(ContainerKind::Cage, Variant::BetterBird),
        Slot::enclosure(ContainerKind::Cage, Variant::Mouse),
        Slot::enclosure(ContainerKind::Cage, Variant::BetterMouse),
        Slot::enclosure(ContainerKind::Aquarium, Variant::Fish),
        Slot::enclosure(ContainerKind::Aquarium, Variant::BetterFish),
        Slot::enclosure(ContainerKind::Aquarium, Variant::Mouse),
        Slot::enclosure(ContainerKind::Aquarium, Variant::BetterMouse),
        Slot::FREEDOM,
    ];

    /// A per-variant container of a restricted kind.
    ///
    /// The pair is not validated here; [`Slot::resolve`] does that.
    #[must_use]
    pub const fn enclosure(kind: ContainerKind, variant: Variant) -> Self {
        Self {
            kind,
            variant: Some(variant),
        }
    }

    /// Builds and validates a slot from protocol arguments.
    ///
    /// # Errors
    ///
    /// Returns `NoSuchSlot` if no container exists for the pair, e.g.
    /// Cage/Fish, or a variant given for Freedom.
    pub fn resolve(kind: ContainerKind, variant: Option<Variant>) -> Result<Self> {
        let slot = Self { kind, variant };
        if slot.is_valid() {
            Ok(slot)
        } else {
            Err(Error::no_such_slot(kind, variant))
        }
    }

    /// The slot a freshly created animal of `variant` lands in.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the kind's policy refuses the variant.
    pub fn for_animal(kind: ContainerKind, variant: Variant) -> Result<Self> {
        if !kind.accepts(variant) {
            return Err(Error::type_mismatch(variant, kind));
        }
        match kind {
            ContainerKind::Freedom => Ok(Self::FREEDOM),
            _ => Self::resolve(kind, Some(variant)),
        }
    }

    /// The container kind.
    #[must_use]
    pub const fn kind(self) -> ContainerKind {
        self.kind
    }

    /// The variant held here, `None` for the mixed Freedom container.
    #[must_use]
    pub const fn variant(self) -> Option<Variant> {
        self.variant
    }

    /// Whether the pair names a real container.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match (self.kind, self.variant) {
            (ContainerKind::Freedom, None) => true,
            (ContainerKind::Freedom, Some(_)) | (_, None) => false,
            (kind, Some(variant)) => variant.stage() != Stage::Fused && kind.accepts(variant),
        }
    }

    /// Whether an animal of `variant` may be stored here.
    #[must_use]
    pub fn accepts(self, variant: Variant) -> bool {
        match self.variant {
            None => self.kind.accepts(variant),
            Some(held) => held == variant,
        }
    }

    /// The sibling slot holding the upgraded form, same kind.
    #[must_use]
    pub fn upgraded(self) -> Option<Self> {
        let variant = self.variant?.upgraded()?;
        Some(Self::enclosure(self.kind, variant))
    }

    /// The sibling slot holding the base form, same kind.
    #[must_use]
    pub fn downgraded(self) -> Option<Self> {
        let variant = self.variant?.downgraded()?;
        Some(Self::enclosure(self.kind, variant))
    }

    /// Position of this slot in [`Slot::ALL`].
    #[must_use]
    pub fn index(self) -> Option<usize> {
        Self::ALL.iter().position(|s| *s == self)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(variant) => write!(f, "{}/{}", self.kind, variant),
            None => write!(f, "{}", self.kind),
        }
    }
}
