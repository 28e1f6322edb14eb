use super::{Point2, Vector2};

/// How the intersection kernel decides that two directions are parallel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DeterminantTest {
    /// Only an exactly zero determinant is parallel.
    ///
    /// Nearly parallel directions still produce (possibly huge) parameters.
    #[default]
    Exact,
    /// Any determinant with `|det| < eps` is treated as parallel.
    Tolerance(f64),
}

impl DeterminantTest {
    /// Returns `true` if `det` should be treated as a parallel configuration.
    #[must_use]
    pub fn is_parallel(self, det: f64) -> bool {
        match self {
            #[allow(clippy::float_cmp)]
            Self::Exact => det == 0.0,
            Self::Tolerance(eps) => det.abs() < eps,
        }
    }
}

/// Parametric intersection of an edge line with a probe line.
///
/// Solves `edge_start + t * edge_dir = origin + u * dir` with Cramer's rule.
/// `t` runs along the edge (`[0, 1]` covers the edge itself) and `u` runs
/// along the probe. Returns `None` when the determinant
/// `-edge_dir.x * dir.y + edge_dir.y * dir.x` is parallel under `test`.
#[must_use]
pub fn ray_segment_intersect_2d(
    edge_start: &Point2,
    edge_dir: &Vector2,
    origin: &Point2,
    dir: &Vector2,
    test: DeterminantTest,
) -> Option<(f64, f64)> {
    let det = -edge_dir.x * dir.y + edge_dir.y * dir.x;
    if test.is_parallel(det) {
        return None;
    }
    let dx = origin.x - edge_start.x;
    let dy = origin.y - edge_start.y;
    let t = (-dx * dir.y + dir.x * dy) / det;
    let u = (edge_dir.x * dy - edge_dir.y * dx) / det;
    Some((t, u))
}

/// Returns `true` if the probe ray from `origin` along `dir` crosses the
/// segment `a → b` (`t ∈ [0, 1]`, `u ≥ 0`).
#[must_use]
pub fn ray_crosses_segment(
    a: &Point2,
    b: &Point2,
    origin: &Point2,
    dir: &Vector2,
    test: DeterminantTest,
) -> bool {
    ray_segment_intersect_2d(a, &(b - a), origin, dir, test)
        .is_some_and(|(t, u)| (0.0..=1.0).contains(&t) && u >= 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn leftward_probe_hits_vertical_edge() {
        let start = Point2::new(2.0, 6.0);
        let dir = Vector2::new(0.0, -4.0);
        let origin = Point2::new(3.5, 4.5);
        let probe = Vector2::new(-1.0, 0.0);
        let (t, u) =
            ray_segment_intersect_2d(&start, &dir, &origin, &probe, DeterminantTest::Exact)
                .unwrap();
        assert_relative_eq!(t, 0.375);
        assert_relative_eq!(u, 1.5);
    }

    #[test]
    fn parameters_locate_the_same_point() {
        let start = Point2::new(1.0, 1.0);
        let dir = Vector2::new(4.0, 3.0);
        let origin = Point2::new(5.0, 0.0);
        let probe = Vector2::new(-1.0, 2.0);
        let (t, u) =
            ray_segment_intersect_2d(&start, &dir, &origin, &probe, DeterminantTest::Exact)
                .unwrap();
        let on_edge = start + dir * t;
        let on_probe = origin + probe * u;
        assert_relative_eq!(on_edge.x, on_probe.x, epsilon = 1e-12);
        assert_relative_eq!(on_edge.y, on_probe.y, epsilon = 1e-12);
    }

    #[test]
    fn parallel_returns_none() {
        let start = Point2::new(2.0, 2.0);
        let dir = Vector2::new(4.0, 0.0);
        let origin = Point2::new(3.5, 2.0);
        let probe = Vector2::new(-1.0, 0.0);
        assert!(
            ray_segment_intersect_2d(&start, &dir, &origin, &probe, DeterminantTest::Exact)
                .is_none()
        );
    }

    #[test]
    fn exact_test_accepts_nearly_parallel() {
        let start = Point2::new(0.0, 0.0);
        let dir = Vector2::new(1.0, 1e-14);
        let origin = Point2::new(5.0, 1.0);
        let probe = Vector2::new(-1.0, 0.0);
        assert!(
            ray_segment_intersect_2d(&start, &dir, &origin, &probe, DeterminantTest::Exact)
                .is_some()
        );
        assert!(ray_segment_intersect_2d(
            &start,
            &dir,
            &origin,
            &probe,
            DeterminantTest::Tolerance(1e-9)
        )
        .is_none());
    }

    #[test]
    fn probe_behind_origin_does_not_cross() {
        let a = Point2::new(6.0, 2.0);
        let b = Point2::new(6.0, 6.0);
        let probe = Vector2::new(-1.0, 0.0);
        assert!(!ray_crosses_segment(
            &a,
            &b,
            &Point2::new(3.5, 4.5),
            &probe,
            DeterminantTest::Exact
        ));
        assert!(ray_crosses_segment(
            &a,
            &b,
            &Point2::new(7.5, 4.5),
            &probe,
            DeterminantTest::Exact
        ));
    }

    #[test]
    fn probe_past_segment_extent_does_not_cross() {
        let a = Point2::new(2.0, 2.0);
        let b = Point2::new(2.0, 6.0);
        let probe = Vector2::new(-1.0, 0.0);
        assert!(!ray_crosses_segment(
            &a,
            &b,
            &Point2::new(4.5, 7.5),
            &probe,
            DeterminantTest::Exact
        ));
    }
}
