//! Group actions.
use crate::error::PermError;

/// Left action on `T`.
///
/// Elements of implementing types act on `T` values on the left. Acting fails when the value
/// doesn't fit the acting element, e.g. for a sequence whose length differs from a permutation's
/// order.
pub trait LeftAction<T> {
    /// Type of the values produced by the action.
    type Output;

    /// Act on a value on the left.
    fn left_apply(&self, value: T) -> Result<Self::Output, PermError>;
}

/// Right action on `T`.
///
/// Elements of implementing types act on `T` values on the right.
pub trait RightAction<T> {
    /// Type of the values produced by the action.
    type Output;

    /// Act on a value on the right.
    fn right_apply(&self, value: T) -> Result<Self::Output, PermError>;
}
