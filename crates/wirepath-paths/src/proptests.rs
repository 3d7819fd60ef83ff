//! Property tests over random boards.

use proptest::prelude::*;
use wirepath_core::{Board, Range, Tile};

use crate::{CARDINALS, Router, manhattan};

fn arb_board() -> impl Strategy<Value = Board> {
    (2i32..10)
        .prop_flat_map(|size| {
            let n = (size * size) as usize;
            (
                Just(size),
                proptest::collection::vec(prop::bool::weighted(0.3), n),
                0..n,
                0..n - 1,
            )
        })
        .prop_map(|(size, walls, si, ti)| {
            let ti = if ti >= si { ti + 1 } else { ti };
            let rng = Range::square(size);
            let mut b = Board::new(size, rng.point(si), rng.point(ti));
            for (i, &wall) in walls.iter().enumerate() {
                if wall && i != si && i != ti {
                    b.set_blocked(rng.point(i));
                }
            }
            b
        })
}

/// Start-to-target distance by repeated edge relaxation until nothing
/// changes. Slow, but shares no code with the queue-based searches.
fn relaxed_distance(b: &Board) -> Option<usize> {
    let rng = b.bounds();
    let mut dist = vec![usize::MAX; rng.len()];
    dist[rng.index(b.start())?] = 0;

    let mut changed = true;
    while changed {
        changed = false;
        for i in 0..dist.len() {
            if dist[i] == usize::MAX {
                continue;
            }
            let p = rng.point(i);
            for d in CARDINALS {
                let q = p + d;
                if !b.is_traversable(q) {
                    continue;
                }
                let Some(qi) = rng.index(q) else {
                    continue;
                };
                if dist[qi] > dist[i] + 1 {
                    dist[qi] = dist[i] + 1;
                    changed = true;
                }
            }
        }
    }

    let d = dist[rng.index(b.target())?];
    (d != usize::MAX).then_some(d)
}

proptest! {
    #[test]
    fn route_length_is_graph_distance(b in arb_board()) {
        let found = Router::new().find(&b).ok().map(|r| r.steps());
        prop_assert_eq!(found, relaxed_distance(&b));
    }

    #[test]
    fn route_length_matches_distance_map(b in arb_board()) {
        let mut router = Router::new();
        let dm = router.distance_map(&b, b.bounds(), b.start());
        let found = router.find(&b).ok().map(|r| r.steps() as u32);
        prop_assert_eq!(found, dm.at(b.target()));
    }

    #[test]
    fn route_marks_a_connected_path(b in arb_board()) {
        let mut routed = b.clone();
        match Router::new().route(&mut routed) {
            Ok(route) => {
                prop_assert_eq!(route.start(), b.start());
                prop_assert_eq!(route.target(), b.target());
                for w in route.points().windows(2) {
                    prop_assert_eq!(manhattan(w[0], w[1]), 1);
                }
                prop_assert_eq!(routed.count(Tile::Path), route.interior().len());
                for &p in route.interior() {
                    prop_assert_eq!(b.cell_state(p), Tile::Empty);
                    prop_assert_eq!(routed.cell_state(p), Tile::Path);
                }
                prop_assert_eq!(routed.cell_state(b.start()), Tile::Start);
                prop_assert_eq!(routed.cell_state(b.target()), Tile::Target);
                routed.clear_path();
                prop_assert_eq!(&routed, &b);
            }
            Err(_) => prop_assert_eq!(&routed, &b),
        }
    }

    #[test]
    fn route_is_deterministic(b in arb_board()) {
        let mut router = Router::new();
        let first = router.find(&b);
        let second = router.find(&b);
        prop_assert_eq!(first, second);
    }
}
