//! Scalar types and lifecycle constants shared by every layer.

/// Days an animal has lived.
pub type Days = u32;

/// A position inside a container.
///
/// Signed because positions arrive straight from protocol input; anything
/// outside `0..len` is out of range, negatives included.
pub type Position = i64;

/// Age an animal is set to when it loses a fight.
pub const DEFEATED_DAYS: Days = 11;

/// Oldest age an animal survives a period with.
pub const MAX_DAYS: Days = 10;

/// Age every fused animal starts at.
pub const FUSED_DAYS: Days = 1;
