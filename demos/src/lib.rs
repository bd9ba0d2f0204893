//! Shared helpers for the pathgrid demos: ASCII map loading, rendering and
//! cross-checking results against breadth-first search.

use std::str::FromStr;

use pathgrid_core::{ByteMap, MapError, Point, PosId};
use pathgrid_paths::{PathError, UNREACHABLE};
use thiserror::Error;

/// Cell characters understood by [`AsciiMap`].
pub const WALL: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const STEP: char = '*';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("map is empty")]
    Empty,

    #[error("row {row} has {len} cells, expected {width}")]
    Ragged { row: usize, len: usize, width: usize },

    #[error("map is too large")]
    TooLarge,
}

/// A passability map read from text, one row per line.
///
/// `#` is blocked; every other character is passable. `S` and `G` mark an
/// optional start and goal.
#[derive(Debug, Clone)]
pub struct AsciiMap {
    cells: Vec<u8>,
    width: i32,
    height: i32,
    start: Option<Point>,
    goal: Option<Point>,
}

impl FromStr for AsciiMap {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim_end).filter(|l| !l.is_empty()).collect();
        let width = rows.first().map(|r| r.chars().count()).ok_or(ParseError::Empty)?;

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(ParseError::Ragged { row: y, len, width });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    START => start = Some(p),
                    GOAL => goal = Some(p),
                    _ => {}
                }
                cells.push(u8::from(ch != WALL));
            }
        }

        let width = i32::try_from(width).map_err(|_| ParseError::TooLarge)?;
        let height = i32::try_from(rows.len()).map_err(|_| ParseError::TooLarge)?;
        if ByteMap::cell_count(width, height).is_none() {
            return Err(ParseError::TooLarge);
        }
        Ok(Self {
            cells,
            width,
            height,
            start,
            goal,
        })
    }
}

impl AsciiMap {
    /// Borrow the map for searching.
    pub fn view(&self) -> Result<ByteMap<'_>, MapError> {
        ByteMap::new(&self.cells, self.width, self.height)
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Position of the `S` marker, if any.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the `G` marker, if any.
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Draw the map with `steps` (cell identifiers) marked along it.
    pub fn render(&self, start: Point, goal: Point, steps: &[i32]) -> String {
        let mut rows: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| {
                        let id = PosId::of(Point::new(x, y), self.width);
                        if self.cells[id.value() as usize] == 0 { WALL } else { '.' }
                    })
                    .collect()
            })
            .collect();

        let mut mark = |p: Point, ch: char| {
            if let Some(cell) = rows.get_mut(p.y as usize).and_then(|r| r.get_mut(p.x as usize)) {
                *cell = ch;
            }
        };
        for &id in steps {
            mark(PosId(id).point(self.width), STEP);
        }
        mark(start, START);
        mark(goal, GOAL);

        let mut out = String::with_capacity(rows.len() * (self.width as usize + 1));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

/// Why a search result could not be confirmed by breadth-first search.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CheckError {
    #[error("nothing to check: {0}")]
    InvalidInput(PathError),

    #[error("breadth-first search disagrees: got {got:?}, expected {expected}")]
    Disagrees {
        got: Result<usize, PathError>,
        expected: i32,
    },
}

/// Compare a search `result` against the breadth-first distance `expected`
/// to the goal and describe the agreement.
pub fn check_length(
    result: &Result<usize, PathError>,
    expected: i32,
    capacity: i32,
) -> Result<String, CheckError> {
    match (result, expected) {
        (Err(e), _) if e.is_invalid_input() => Err(CheckError::InvalidInput(e.clone())),
        (Ok(n), d) if d != UNREACHABLE && i32::try_from(*n) == Ok(d) => {
            Ok(format!("{d} steps"))
        }
        (Err(PathError::NoPath | PathError::CapacityExceeded { .. }), UNREACHABLE) => {
            Ok("goal unreachable".to_string())
        }
        (Err(e @ PathError::CapacityExceeded { .. }), d) if d != UNREACHABLE && d > capacity => {
            Ok(format!("{e}; shortest is {d} steps"))
        }
        (r, d) => Err(CheckError::Disagrees {
            got: r.clone(),
            expected: d,
        }),
    }
}

/// Parse an `x,y` pair.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "\
S..#
.#.#
...G
";

    #[test]
    fn parses_markers_and_walls() {
        let m: AsciiMap = MAZE.parse().unwrap();
        assert_eq!((m.width(), m.height()), (4, 3));
        assert_eq!(m.start(), Some(Point::new(0, 0)));
        assert_eq!(m.goal(), Some(Point::new(3, 2)));
        assert_eq!(m.cells()[3], 0);
        assert_eq!(m.cells()[5], 0);
        assert_eq!(m.cells()[0], 1);
        assert!(m.view().is_ok());
    }

    #[test]
    fn rejects_bad_maps() {
        assert_eq!("".parse::<AsciiMap>().unwrap_err(), ParseError::Empty);
        assert_eq!(
            "...\n..\n".parse::<AsciiMap>().unwrap_err(),
            ParseError::Ragged {
                row: 1,
                len: 2,
                width: 3
            }
        );
    }

    #[test]
    fn renders_path() {
        let m: AsciiMap = MAZE.parse().unwrap();
        // (1,0) (2,0) (2,1) (2,2) (3,2)
        let drawn = m.render(Point::new(0, 0), Point::new(3, 2), &[1, 2, 6, 10, 11]);
        assert_eq!(drawn, "S**#\n.#*#\n..*G\n");
    }

    #[test]
    fn check_accepts_agreeing_results() {
        assert_eq!(check_length(&Ok(5), 5, 10).unwrap(), "5 steps");
        assert_eq!(
            check_length(&Err(PathError::NoPath), UNREACHABLE, 10).unwrap(),
            "goal unreachable"
        );
        let cut = Err(PathError::CapacityExceeded { capacity: 3 });
        assert!(check_length(&cut, 5, 3).is_ok());
        assert!(check_length(&cut, UNREACHABLE, 3).is_ok());
    }

    #[test]
    fn check_rejects_disagreement() {
        assert_eq!(
            check_length(&Ok(6), 5, 10).unwrap_err(),
            CheckError::Disagrees {
                got: Ok(6),
                expected: 5
            }
        );
        let cut = Err(PathError::CapacityExceeded { capacity: 5 });
        assert!(matches!(
            check_length(&cut, 5, 5),
            Err(CheckError::Disagrees { .. })
        ));
    }

    #[test]
    fn check_reports_invalid_input_separately() {
        let bad = PathError::InvalidCapacity {
            capacity: -1,
            len: 0,
        };
        assert_eq!(
            check_length(&Err(bad.clone()), 5, -1).unwrap_err(),
            CheckError::InvalidInput(bad)
        );
    }

    #[test]
    fn point_arguments() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 1 , 2 "), Ok(Point::new(1, 2)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }
}
