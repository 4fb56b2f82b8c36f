//! Errors used by the `Board`'s strict constructor.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::ships::Placement;

/// Reason why a placement could not be accepted by
/// [`Board::try_new`][crate::board::Board::try_new].
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Start and end differ in both row and column.
    #[error("the span is not a straight horizontal or vertical run")]
    NotAxisAligned,
    /// The span extends beyond the board.
    #[error("the span extends beyond the board")]
    OutOfBounds,
    /// The span covers a cell already claimed by an earlier placement.
    #[error("the span overlaps a previously placed ship")]
    AlreadyOccupied,
}

/// Error caused when a placement fails strict validation.
#[derive(Error)]
#[error("could not place ship on {placement:?}: {reason:?}")]
pub struct PlaceError {
    /// Reason why the placement was rejected.
    #[source]
    reason: CannotPlaceReason,

    /// The placement that was rejected.
    placement: Placement,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected
    /// placement.
    pub(super) fn new(reason: CannotPlaceReason, placement: Placement) -> Self {
        Self { reason, placement }
    }

    /// Get the reason the placement was rejected.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the [`Placement`] that was rejected.
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Extract the rejected [`Placement`] from this error.
    pub fn into_placement(self) -> Placement {
        self.placement
    }
}

impl From<PlaceError> for Placement {
    /// Allows retrieving the rejected placement from the error with into.
    fn from(err: PlaceError) -> Self {
        err.into_placement()
    }
}
