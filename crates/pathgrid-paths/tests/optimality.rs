//! Property tests: A* paths are walkable and as short as breadth-first search
//! says they can be.

use pathgrid_core::{ByteMap, Passability, Point, PosId};
use pathgrid_paths::{UNREACHABLE, bfs_distances, find_path};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Case {
    width: i32,
    height: i32,
    cells: Vec<u8>,
    start: Point,
    goal: Point,
}

fn arb_case() -> impl Strategy<Value = Case> {
    (1i32..9, 1i32..9).prop_flat_map(|(width, height)| {
        let n = (width * height) as usize;
        (
            proptest::collection::vec(proptest::bool::weighted(0.7), n),
            0..width,
            0..height,
            0..width,
            0..height,
        )
            .prop_map(move |(open, sx, sy, gx, gy)| Case {
                width,
                height,
                cells: open.into_iter().map(u8::from).collect(),
                start: Point::new(sx, sy),
                goal: Point::new(gx, gy),
            })
    })
}

fn run(case: &Case, capacity: i32) -> (i32, Vec<i32>) {
    let mut out = vec![-1; case.cells.len()];
    let n = find_path(
        case.start.x,
        case.start.y,
        case.goal.x,
        case.goal.y,
        &case.cells,
        case.width,
        case.height,
        &mut out,
        capacity,
    );
    (n, out)
}

proptest! {
    #[test]
    fn matches_breadth_first_distance(case in arb_case()) {
        let map = ByteMap::new(&case.cells, case.width, case.height).unwrap();
        let expected = bfs_distances(&map, case.start).at(case.goal);
        let (n, out) = run(&case, case.cells.len() as i32);

        if expected == UNREACHABLE {
            prop_assert_eq!(n, -1);
            return Ok(());
        }
        prop_assert_eq!(n, expected);

        if n == 0 {
            prop_assert_eq!(out[0], PosId::of(case.goal, case.width).value());
            return Ok(());
        }
        let mut prev = case.start;
        for &id in &out[..n as usize] {
            let p = PosId(id).point(case.width);
            prop_assert!(prev.is_adjacent(p));
            prop_assert!(map.passable(p));
            prev = p;
        }
        prop_assert_eq!(prev, case.goal);
        prop_assert!(out[n as usize..].iter().all(|&v| v == -1));
    }

    #[test]
    fn never_truncates_to_fit(case in arb_case()) {
        let map = ByteMap::new(&case.cells, case.width, case.height).unwrap();
        let expected = bfs_distances(&map, case.start).at(case.goal);
        prop_assume!(expected != UNREACHABLE && expected > 0);

        let (n, out) = run(&case, expected - 1);
        prop_assert_eq!(n, -1);
        prop_assert!(out.iter().all(|&v| v == -1));

        let (n, _) = run(&case, expected);
        prop_assert_eq!(n, expected);
    }

    #[test]
    fn deterministic(case in arb_case()) {
        let capacity = case.cells.len() as i32;
        prop_assert_eq!(run(&case, capacity), run(&case, capacity));
    }
}
