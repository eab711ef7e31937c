//! Best-effort path thinning.

use waygrid_core::Point;

/// Drop the intermediate points of straight runs, keeping the endpoints and
/// every point where the direction of travel changes.
///
/// No line-of-sight test is made, so the result is only as walkable as the
/// input: consecutive returned points are joined by a straight, axis-aligned
/// or 45° run of the input path.
pub fn simplify(points: &[Point]) -> Vec<Point> {
    let [first, .., last] = points else {
        return points.to_vec();
    };

    let dir = |a: Point, b: Point| Point::new((b.x - a.x).signum(), (b.y - a.y).signum());
    let mut out = vec![*first];
    for w in points.windows(3) {
        if dir(w[0], w[1]) != dir(w[1], w[2]) {
            out.push(w[1]);
        }
    }
    out.push(*last);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn short_paths_unchanged() {
        assert!(simplify(&[]).is_empty());
        assert_eq!(simplify(&pts(&[(1, 1)])), pts(&[(1, 1)]));
        assert_eq!(simplify(&pts(&[(1, 1), (2, 1)])), pts(&[(1, 1), (2, 1)]));
    }

    #[test]
    fn straight_run_collapses() {
        let path = pts(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(simplify(&path), pts(&[(0, 0), (3, 0)]));
    }

    #[test]
    fn corners_are_kept() {
        let path = pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (3, 3), (4, 4)]);
        assert_eq!(simplify(&path), pts(&[(0, 0), (2, 0), (2, 2), (4, 4)]));
    }

    #[test]
    fn staircase_keeps_every_turn() {
        let path = pts(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        assert_eq!(simplify(&path), path);
    }
}
