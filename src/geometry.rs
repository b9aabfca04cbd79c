//! Polygon math shared by every shape.
//!
//! These operate on a plain vertex slice so each shape can call them from its
//! own constructor and accessors.

use std::cmp::Ordering;

use glam::DVec2;
use num_traits::{One, Signed, Zero};

use crate::types::{Point, Scalar, narrow};

/// Arithmetic mean of the vertex coordinates (not area weighted).
///
/// Sums accumulate in [`Scalar::Acc`], so far-from-origin integer vertices
/// do not overflow. Integral coordinates use integer division. An empty
/// slice yields the origin.
pub fn centroid<T: Scalar>(vertices: &[Point<T>]) -> Point<T> {
    if vertices.is_empty() {
        return Point::default();
    }
    let (mut cx, mut cy, mut n) = (T::Acc::zero(), T::Acc::zero(), T::Acc::zero());
    for p in vertices {
        cx += p.x.widen();
        cy += p.y.widen();
        n += T::Acc::one();
    }
    Point::new(narrow(cx / n), narrow(cy / n))
}

fn centroid_f64<T: Scalar>(vertices: &[Point<T>]) -> DVec2 {
    let sum: DVec2 = vertices.iter().map(|p| p.to_dvec2()).sum();
    sum / vertices.len() as f64
}

/// Sort vertices counter-clockwise by their angle around the centroid.
///
/// Angles are four-quadrant arctangents in `[-π, π]`; ties keep their input
/// order. Fewer than three vertices are left untouched.
pub fn canonical_order<T: Scalar>(vertices: &mut [Point<T>]) {
    if vertices.len() < 3 {
        return;
    }
    let c = centroid_f64(vertices);
    let mut keyed: Vec<(f64, Point<T>)> = vertices
        .iter()
        .map(|&p| {
            let d = p.to_dvec2() - c;
            (d.y.atan2(d.x), p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    for (slot, (_, p)) in vertices.iter_mut().zip(keyed) {
        *slot = p;
    }
    crate::log::trace!(count = vertices.len(), "vertices sorted counter-clockwise");
}

/// Shoelace area of a counter-clockwise vertex sequence.
///
/// Returns zero for fewer than three vertices. The result is only the true
/// area when the vertices have gone through [`canonical_order`]. Cross
/// products are taken in [`Scalar::Acc`]; an area beyond `T`'s range
/// saturates to `T::max_value()`.
pub fn shoelace_area<T: Scalar>(vertices: &[Point<T>]) -> T {
    if vertices.len() < 3 {
        return T::zero();
    }
    let mut sum = T::Acc::zero();
    let next = vertices.iter().cycle().skip(1);
    for (a, b) in vertices.iter().zip(next) {
        sum += a.x.widen() * b.y.widen();
        sum -= b.x.widen() * a.y.widen();
    }
    let two = T::Acc::one() + T::Acc::one();
    narrow(sum.abs() / two)
}

/// Lengths of the closing edges `v0v1, v1v2, .., v(n-1)v0`.
pub fn side_lengths<T: Scalar>(vertices: &[Point<T>]) -> Vec<f64> {
    let next = vertices.iter().cycle().skip(1);
    vertices.iter().zip(next).map(|(&a, &b)| a.distance(b)).collect()
}

/// Lengths of the two diagonals `v0v2` and `v1v3` of a quadrilateral.
pub fn diagonal_lengths<T: Scalar>(quad: &[Point<T>; 4]) -> [f64; 2] {
    [quad[0].distance(quad[2]), quad[1].distance(quad[3])]
}

/// Unordered vertex comparison: same count, and every vertex of `a` matches
/// some vertex of `b`.
pub fn same_vertex_set<T: Scalar>(a: &[Point<T>], b: &[Point<T>]) -> bool {
    a.len() == b.len() && a.iter().all(|p| b.iter().any(|q| p == q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn centroid_is_mean() {
        let c = centroid(&pts(&[(0, 0), (4, 0), (4, 2), (0, 2)]));
        assert_eq!(c, Point::new(2, 1));

        let c = centroid(&[Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(0.0, 1.0)]);
        assert_eq!(c, Point::new(1.0, 1.0 / 3.0));
    }

    #[test]
    fn centroid_truncates_for_integers() {
        let c = centroid(&pts(&[(0, 0), (3, 0), (3, 2), (0, 2)]));
        assert_eq!(c, Point::new(1, 1));
    }

    #[test]
    fn centroid_of_nothing_is_origin() {
        assert_eq!(centroid::<f64>(&[]), Point::new(0.0, 0.0));
    }

    #[test]
    fn canonical_order_sorts_by_angle() {
        let mut v = pts(&[(0, 2), (3, 2), (0, 0), (3, 0)]);
        canonical_order(&mut v);
        assert_eq!(v, pts(&[(0, 0), (3, 0), (3, 2), (0, 2)]));
    }

    #[test]
    fn canonical_order_is_idempotent() {
        let mut v = pts(&[(2, 0), (0, 1), (-2, 0), (0, -1)]);
        canonical_order(&mut v);
        let once = v.clone();
        canonical_order(&mut v);
        assert_eq!(v, once);
        assert_eq!(v, pts(&[(0, -1), (2, 0), (0, 1), (-2, 0)]));
    }

    #[test]
    fn canonical_order_ignores_degenerate_input() {
        let mut v = pts(&[(5, 5), (0, 0)]);
        canonical_order(&mut v);
        assert_eq!(v, pts(&[(5, 5), (0, 0)]));
    }

    #[test]
    fn shoelace_on_ordered_vertices() {
        assert_eq!(shoelace_area(&pts(&[(0, 0), (2, 0), (2, 1), (0, 1)])), 2);
        assert_eq!(shoelace_area(&pts(&[(0, 0), (4, 0), (3, 2), (1, 2)])), 6);
    }

    #[test]
    fn shoelace_needs_three_vertices() {
        assert_eq!(shoelace_area(&pts(&[(0, 0), (5, 5)])), 0);
        assert_eq!(shoelace_area::<f64>(&[]), 0.0);
    }

    #[test]
    fn area_invariant_under_rotation() {
        let v = pts(&[(0, 0), (4, 0), (3, 2), (1, 2)]);
        for k in 0..v.len() {
            let mut rotated = v.clone();
            rotated.rotate_left(k);
            assert_eq!(shoelace_area(&rotated), 6, "rotation by {k}");
        }
    }

    #[test]
    fn area_invariant_under_reordering() {
        let mut v = pts(&[(1, 2), (4, 0), (0, 0), (3, 2)]);
        canonical_order(&mut v);
        assert_eq!(shoelace_area(&v), 6);
    }

    #[test]
    fn unordered_vertices_give_wrong_area() {
        // A bow-tie traversal of the 2x1 rectangle cancels out.
        let crossed = pts(&[(0, 0), (2, 1), (2, 0), (0, 1)]);
        assert_ne!(shoelace_area(&crossed), 2);

        let mut fixed = crossed.clone();
        canonical_order(&mut fixed);
        assert_eq!(shoelace_area(&fixed), 2);
    }

    #[test]
    fn far_from_origin_integers() {
        let v = pts(&[(50000, 50000), (50001, 50000), (50001, 50001), (50000, 50001)]);
        assert_eq!(shoelace_area(&v), 1);
        assert_eq!(centroid(&v), Point::new(50000, 50000));

        let big: Vec<Point<i32>> = pts(&[(0, 0), (1, 0), (1, 1), (0, 1)])
            .into_iter()
            .map(|p| Point::new(i32::MAX - 1 + p.x, i32::MAX - 1 + p.y))
            .collect();
        assert_eq!(shoelace_area(&big), 1);
        assert_eq!(centroid(&big), Point::new(i32::MAX - 1, i32::MAX - 1));
    }

    #[test]
    fn small_integer_types_do_not_overflow() {
        let v: Vec<Point<i8>> = [(0, 0), (11, 0), (11, 11), (0, 11)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(shoelace_area(&v), 121);
        assert_eq!(centroid(&v), Point::new(5, 5));

        let v: Vec<Point<i8>> = [(0, 0), (100, 0), (100, 100), (0, 100)]
            .into_iter()
            .map(Point::from)
            .collect();
        assert_eq!(shoelace_area(&v), i8::MAX);
        assert_eq!(centroid(&v), Point::new(50, 50));
    }

    #[test]
    fn lengths() {
        let v = pts(&[(0, 0), (3, 0), (3, 4), (0, 4)]);
        assert_eq!(side_lengths(&v), vec![3.0, 4.0, 3.0, 4.0]);
        assert_eq!(diagonal_lengths(&[v[0], v[1], v[2], v[3]]), [5.0, 5.0]);
    }

    #[test]
    fn vertex_sets() {
        let a = pts(&[(0, 0), (1, 0), (1, 1)]);
        let b = pts(&[(1, 1), (0, 0), (1, 0)]);
        let c = pts(&[(1, 1), (0, 0), (2, 0)]);
        assert!(same_vertex_set(&a, &b));
        assert!(!same_vertex_set(&a, &c));
        assert!(!same_vertex_set(&a, &a[..2]));
    }
}
