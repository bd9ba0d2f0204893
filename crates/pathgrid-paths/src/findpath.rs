//! Buffer-based entry point.
//!
//! [`find_path`] takes the map as a raw row-major byte slice and writes the
//! path as cell identifiers into a caller-owned buffer, returning the number
//! of steps or `-1`.

use log::{debug, warn};
use pathgrid_core::{ByteMap, Passability, Point};

use crate::astar::astar_path;
use crate::error::{PathError, Result};

/// Find a shortest path from `(start_x, start_y)` to `(target_x, target_y)`.
///
/// `map` holds `map_width * map_height` cells in row-major order; `0` is
/// blocked, anything else passable. On success the first `n` slots of
/// `out_buffer` hold the identifiers (`x + y * map_width`) of the cells
/// entered after the start, ending with the target, and `n` is returned.
/// When start and target coincide, slot 0 holds their identifier and `0` is
/// returned.
///
/// Returns `-1` if there is no path, if the path needs more than
/// `out_buffer_capacity` slots, or if the arguments are invalid. Slots past
/// the returned length are never written.
#[allow(clippy::too_many_arguments)]
pub fn find_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    map: &[u8],
    map_width: i32,
    map_height: i32,
    out_buffer: &mut [i32],
    out_buffer_capacity: i32,
) -> i32 {
    match try_find_path(
        start_x,
        start_y,
        target_x,
        target_y,
        map,
        map_width,
        map_height,
        out_buffer,
        out_buffer_capacity,
    ) {
        // Bounded by the capacity, which is itself an i32.
        Ok(len) => len as i32,
        Err(e) if e.is_invalid_input() => {
            warn!("find_path rejected its arguments: {e}");
            -1
        }
        Err(e) => {
            debug!("find_path failed: {e}");
            -1
        }
    }
}

/// [`find_path`] reporting why a search failed.
#[allow(clippy::too_many_arguments)]
pub fn try_find_path(
    start_x: i32,
    start_y: i32,
    target_x: i32,
    target_y: i32,
    map: &[u8],
    map_width: i32,
    map_height: i32,
    out_buffer: &mut [i32],
    out_buffer_capacity: i32,
) -> Result<usize> {
    let grid = ByteMap::new(map, map_width, map_height)?;

    let capacity = usize::try_from(out_buffer_capacity)
        .ok()
        .filter(|&c| c <= out_buffer.len())
        .ok_or(PathError::InvalidCapacity {
            capacity: out_buffer_capacity,
            len: out_buffer.len(),
        })?;

    let path = astar_path(
        &grid,
        Point::new(start_x, start_y),
        Point::new(target_x, target_y),
        capacity,
    )?;
    path.write_ids(&mut out_buffer[..capacity], grid.width())?;
    Ok(path.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathgrid_core::MapError;

    #[test]
    fn single_cell_map() {
        let mut out = [-1; 1];
        assert_eq!(find_path(0, 0, 0, 0, &[1], 1, 1, &mut out, 1), 0);
        assert_eq!(out, [0]);
    }

    #[test]
    fn trivial_path_needs_one_slot() {
        let mut out = [-1; 1];
        assert_eq!(
            try_find_path(0, 0, 0, 0, &[1], 1, 1, &mut out, 0),
            Err(PathError::CapacityExceeded { capacity: 0 })
        );
        assert_eq!(out, [-1]);
    }

    #[test]
    fn rejects_invalid_arguments() {
        let map = [1u8; 6];
        let mut out = [0; 8];

        assert_eq!(
            try_find_path(0, 0, 1, 1, &map, 0, 2, &mut out, 8),
            Err(PathError::Map(MapError::InvalidDimensions {
                width: 0,
                height: 2
            }))
        );
        assert!(matches!(
            try_find_path(0, 0, 1, 1, &map, 4, 2, &mut out, 8),
            Err(PathError::Map(MapError::MapTooShort { .. }))
        ));
        assert!(matches!(
            try_find_path(3, 0, 1, 1, &map, 3, 2, &mut out, 8),
            Err(PathError::OutOfBounds { .. })
        ));
        assert_eq!(
            try_find_path(0, 0, 1, 1, &map, 3, 2, &mut out, 9),
            Err(PathError::InvalidCapacity {
                capacity: 9,
                len: 8
            })
        );
        assert_eq!(
            try_find_path(0, 0, 1, 1, &map, 3, 2, &mut out, -2),
            Err(PathError::InvalidCapacity {
                capacity: -2,
                len: 8
            })
        );
        assert_eq!(find_path(0, 0, 1, 1, &map, 3, 2, &mut out, -2), -1);
        assert_eq!(out, [0; 8]);
    }

    #[test]
    fn writes_only_the_path_prefix() {
        let map = [1u8; 9];
        let mut out = [99; 6];
        let n = find_path(0, 0, 2, 0, &map, 3, 3, &mut out, 6);
        assert_eq!(n, 2);
        assert_eq!(out, [1, 2, 99, 99, 99, 99]);
    }
}
