//! Shortest-path search on 4-connected grids.
//!
//! This crate finds a shortest path between two cells of a fixed-size map
//! whose cells are either passable or blocked, moving one orthogonal step at
//! a time at uniform cost:
//!
//! - **A\*** search with a Manhattan heuristic ([`astar_path`])
//! - a buffer-based entry point writing cell identifiers into a caller-owned
//!   slice ([`find_path`], [`try_find_path`])
//! - **BFS** unit-cost distance maps, useful as a reference ([`bfs_distances`])
//!
//! Every search owns its node arena, frontier and visited set for the
//! duration of the call only; nothing is cached between calls.
//!
//! # Search pieces
//!
//! | Piece | Role |
//! |---|---|
//! | node registry | arena of search nodes, parent links as indices |
//! | frontier | binary min-heap on `f` with position lookup and decrease-key |
//! | visited set | positions already expanded, never reopened |

mod astar;
mod bfs;
mod distance;
mod error;
mod findpath;
mod frontier;
mod neighbors;
mod registry;
mod visited;

pub use astar::{Path, SearchStats, astar_path, astar_path_with_stats, path_exists};
pub use bfs::{DistanceMap, UNREACHABLE, bfs_distances};
pub use distance::manhattan;
pub use error::{Endpoint, PathError, Result};
pub use findpath::{find_path, try_find_path};
pub use neighbors::Neighbors;
