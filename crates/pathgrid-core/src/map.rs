//! Read-only passability maps.
//!
//! [`Passability`] is the contract the search needs from a map: its bounds and
//! whether a cell can be entered. [`ByteMap`] implements it over a borrowed
//! row-major byte slice where `0` is blocked and any other value is passable.

use std::fmt;

use thiserror::Error;

use crate::geom::{Point, Range};

/// Row-major identifier of a cell: `y * width + x`.
///
/// Identifiers are only meaningful together with the width of the map that
/// produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PosId(pub i32);

impl PosId {
    /// Identifier of `p` on a map `width` cells wide.
    #[inline]
    pub const fn of(p: Point, width: i32) -> Self {
        Self(p.y * width + p.x)
    }

    /// Inverse of [`PosId::of`].
    #[inline]
    pub const fn point(self, width: i32) -> Point {
        Point::new(self.0 % width, self.0 / width)
    }

    /// The raw identifier, as written into output buffers.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<PosId> for i32 {
    fn from(id: PosId) -> Self {
        id.0
    }
}

impl fmt::Display for PosId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised while building a map view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("map holds {actual} cells, expected at least {expected}")]
    MapTooShort { expected: usize, actual: usize },
}

/// Grid accessor used by the search.
pub trait Passability {
    /// The cells addressable on this map. Identifiers are computed relative
    /// to a range starting at the origin.
    fn bounds(&self) -> Range;

    /// Whether `p` is in bounds and can be entered.
    fn passable(&self, p: Point) -> bool;

    /// Map width, the stride of [`PosId`].
    #[inline]
    fn width(&self) -> i32 {
        self.bounds().width()
    }

    /// Identifier of `p`, or `None` if it lies outside the map.
    #[inline]
    fn id(&self, p: Point) -> Option<PosId> {
        self.bounds()
            .contains(p)
            .then(|| PosId::of(p, self.width()))
    }
}

/// Borrowed row-major view over a byte map.
#[derive(Copy, Clone, Debug)]
pub struct ByteMap<'a> {
    cells: &'a [u8],
    width: i32,
    height: i32,
}

impl<'a> ByteMap<'a> {
    /// Wrap `cells` as a `width` x `height` map.
    ///
    /// Dimensions must be positive and `cells` must hold at least
    /// `width * height` bytes. Extra trailing bytes are ignored.
    pub fn new(cells: &'a [u8], width: i32, height: i32) -> Result<Self, MapError> {
        let expected = Self::cell_count(width, height)
            .ok_or(MapError::InvalidDimensions { width, height })?;
        if cells.len() < expected {
            return Err(MapError::MapTooShort {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            cells: &cells[..expected],
            width,
            height,
        })
    }

    /// Number of cells of a `width` x `height` map, or `None` if the
    /// dimensions are not positive or identifiers would overflow `i32`.
    pub fn cell_count(width: i32, height: i32) -> Option<usize> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let n = width.checked_mul(height)?;
        Some(n as usize)
    }

    /// Map height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Raw cell value at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u8> {
        let id = self.id(p)?;
        Some(self.cells[id.0 as usize])
    }
}

impl Passability for ByteMap<'_> {
    #[inline]
    fn bounds(&self) -> Range {
        Range::sized(self.width, self.height)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        matches!(self.at(p), Some(v) if v != 0)
    }

    #[inline]
    fn width(&self) -> i32 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_id_round_trip() {
        let p = Point::new(3, 2);
        let id = PosId::of(p, 4);
        assert_eq!(id, PosId(11));
        assert_eq!(id.point(4), p);
        assert_eq!(i32::from(id), 11);
    }

    #[test]
    fn byte_map_passability() {
        #[rustfmt::skip]
        let cells = [
            1, 1, 0,
            1, 0, 1,
        ];
        let m = ByteMap::new(&cells, 3, 2).unwrap();
        assert!(m.passable(Point::new(0, 0)));
        assert!(!m.passable(Point::new(2, 0)));
        assert!(!m.passable(Point::new(1, 1)));
        assert!(m.passable(Point::new(2, 1)));
        assert!(!m.passable(Point::new(3, 0)));
        assert!(!m.passable(Point::new(0, -1)));
        assert_eq!(m.at(Point::new(2, 1)), Some(1));
        assert_eq!(m.at(Point::new(0, 2)), None);
    }

    #[test]
    fn nonzero_bytes_are_passable() {
        let cells = [0, 7, 255];
        let m = ByteMap::new(&cells, 3, 1).unwrap();
        assert!(!m.passable(Point::new(0, 0)));
        assert!(m.passable(Point::new(1, 0)));
        assert!(m.passable(Point::new(2, 0)));
    }

    #[test]
    fn id_respects_bounds() {
        let cells = [1; 6];
        let m = ByteMap::new(&cells, 3, 2).unwrap();
        assert_eq!(m.id(Point::new(2, 1)), Some(PosId(5)));
        assert_eq!(m.id(Point::new(3, 1)), None);
    }

    #[test]
    fn rejects_bad_dimensions() {
        let cells = [1; 4];
        assert_eq!(
            ByteMap::new(&cells, 0, 4).unwrap_err(),
            MapError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
        assert!(ByteMap::new(&cells, 2, -1).is_err());
        assert!(ByteMap::new(&cells, i32::MAX, 2).is_err());
    }

    #[test]
    fn rejects_short_map_and_trims_long_one() {
        let cells = [1; 5];
        assert_eq!(
            ByteMap::new(&cells, 3, 2).unwrap_err(),
            MapError::MapTooShort {
                expected: 6,
                actual: 5
            }
        );
        let m = ByteMap::new(&cells, 2, 2).unwrap();
        assert_eq!(m.at(Point::new(1, 1)), Some(1));
        assert_eq!(m.at(Point::new(0, 2)), None);
    }
}
