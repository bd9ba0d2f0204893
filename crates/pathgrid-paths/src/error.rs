//! Error type for path searches.

use std::fmt;

use pathgrid_core::{MapError, Point};
use thiserror::Error;

/// Which end of the requested path an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Reasons a search can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Every reachable cell was expanded without reaching the goal.
    #[error("no path between start and goal")]
    NoPath,

    /// No path of at most `capacity` steps exists.
    #[error("no path fits in {capacity} output slots")]
    CapacityExceeded { capacity: usize },

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("{endpoint} {point} lies outside the map")]
    OutOfBounds { endpoint: Endpoint, point: Point },

    #[error("declared capacity {capacity} does not fit an output buffer of {len} slots")]
    InvalidCapacity { capacity: i32, len: usize },
}

impl PathError {
    /// Whether the caller supplied arguments the search could not run on, as
    /// opposed to a search that ran and found nothing that fits.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PathError::Map(_) | PathError::OutOfBounds { .. } | PathError::InvalidCapacity { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_input_errors() {
        assert!(!PathError::NoPath.is_invalid_input());
        assert!(!PathError::CapacityExceeded { capacity: 3 }.is_invalid_input());
        assert!(
            PathError::Map(MapError::InvalidDimensions {
                width: 0,
                height: 1
            })
            .is_invalid_input()
        );
        assert!(
            PathError::InvalidCapacity {
                capacity: -1,
                len: 0
            }
            .is_invalid_input()
        );
    }

    #[test]
    fn messages_name_the_endpoint() {
        let e = PathError::OutOfBounds {
            endpoint: Endpoint::Goal,
            point: Point::new(9, -1),
        };
        assert_eq!(e.to_string(), "goal (9, -1) lies outside the map");
    }
}
