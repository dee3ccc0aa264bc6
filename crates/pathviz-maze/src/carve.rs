use std::collections::HashSet;

use pathviz_core::{Bounds, Point};
use pathviz_search::manhattan;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Carve a random self-avoiding walk from `start` to `end` inside `bounds`.
///
/// Each move picks an unvisited in-bounds neighbour at random, with
/// neighbours that get closer to `end` weighted twice as heavily. When the
/// walk is stuck it backtracks one cell; cells stay marked as tried, so the
/// walk always terminates. Returns the cells of the final walk, `start`
/// first. If `end` cannot be reached only `[start]` is returned.
pub fn carve_winding_path<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    start: Point,
    end: Point,
) -> Vec<Point> {
    let mut path = vec![start];
    let mut seen: HashSet<Point> = HashSet::from([start]);
    let mut options: Vec<Point> = Vec::with_capacity(8);
    let mut cur = start;

    while cur != end {
        options.clear();
        let d_now = manhattan(cur, end);
        for n in cur.neighbors_4() {
            if !bounds.contains(n) || seen.contains(&n) {
                continue;
            }
            let weight = if manhattan(n, end) < d_now { 2 } else { 1 };
            for _ in 0..weight {
                options.push(n);
            }
        }

        let Some(&next) = options.choose(rng) else {
            if path.len() > 1 {
                path.pop();
                cur = path[path.len() - 1];
                continue;
            }
            break;
        };

        path.push(next);
        seen.insert(next);
        cur = next;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn walk_connects_start_to_end() {
        let bounds = Bounds::new(20, 15);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (start, end) = (Point::new(0, 0), Point::new(19, 14));
            let path = carve_winding_path(&mut rng, bounds, start, end);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert!(path.len() >= 34);
            for w in path.windows(2) {
                assert!(w[0].is_adjacent_4(w[1]));
            }
            let unique: HashSet<_> = path.iter().collect();
            assert_eq!(unique.len(), path.len());
            assert!(path.iter().all(|&p| bounds.contains(p)));
        }
    }

    #[test]
    fn start_equals_end_is_single_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = Point::new(2, 2);
        assert_eq!(carve_winding_path(&mut rng, Bounds::new(5, 5), p, p), vec![p]);
    }

    #[test]
    fn unreachable_end_degenerates_to_start() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Point::new(1, 1);
        let path = carve_winding_path(&mut rng, Bounds::new(4, 4), start, Point::new(9, 9));
        assert_eq!(path, vec![start]);
    }
}
