//! **pathgrid-core** — core types for grid pathfinding.
//!
//! This crate provides the pieces shared across the *pathgrid* workspace:
//! geometry primitives, row-major position identifiers and the read-only
//! passability map contract consumed by the search.

pub mod geom;
pub mod map;

pub use geom::{Point, Range};
pub use map::{ByteMap, MapError, Passability, PosId};
