//! Numeric primitives for quadra: the `Scalar` coordinate contract and `Point<T>`.
//!
//! Coordinates are generic over the signed integer and floating types. The
//! two families differ in how equality is judged: integers compare exactly,
//! floats within a small tolerance.

use std::fmt;
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;

use glam::{DVec2, dvec2};
use num_traits::{AsPrimitive, Bounded, NumCast, Signed};

use crate::errors::ParseError;

/// Tolerance for comparing floating point coordinates.
pub const POINT_EPSILON: f64 = 1e-6;

/// Tolerance for comparing side and diagonal lengths of floating point shapes.
pub const LENGTH_EPSILON: f64 = 1e-6;

/// A coordinate type a [`Point`] can be built from.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `isize`, `f32` and `f64`.
/// Unsigned types are left out: shoelace sums and coordinate differences go
/// negative.
pub trait Scalar:
    Signed
    + Bounded
    + NumCast
    + AsPrimitive<f64>
    + From<i8>
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr<Err: fmt::Display>
    + AddAssign
    + SubAssign
{
    /// Wide type that sums of coordinates and of their products accumulate
    /// in: `i128` for integers, `f64` for floats.
    type Acc: Signed + NumCast + Copy + PartialOrd + AddAssign + SubAssign;

    /// Lossless conversion into [`Self::Acc`].
    fn widen(self) -> Self::Acc;

    /// Coordinate equality: exact for integers, `|a - b| < POINT_EPSILON` for floats.
    fn coord_eq(self, other: Self) -> bool;

    /// Length equality: exact for integers, `|a - b| <= LENGTH_EPSILON` for floats.
    fn length_eq(a: f64, b: f64) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            type Acc = i128;

            #[inline]
            fn widen(self) -> i128 { AsPrimitive::<i128>::as_(self) }

            #[inline]
            fn coord_eq(self, other: Self) -> bool { self == other }

            #[inline]
            fn length_eq(a: f64, b: f64) -> bool { a == b }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            type Acc = f64;

            #[inline]
            fn widen(self) -> f64 { AsPrimitive::<f64>::as_(self) }

            #[inline]
            fn coord_eq(self, other: Self) -> bool {
                (self.widen() - other.widen()).abs() < POINT_EPSILON
            }

            #[inline]
            fn length_eq(a: f64, b: f64) -> bool { (a - b).abs() <= LENGTH_EPSILON }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, isize);
impl_scalar_float!(f32, f64);

/// Convert an accumulated value back to `T`, saturating at `T`'s bounds.
pub(crate) fn narrow<T: Scalar>(acc: T::Acc) -> T {
    match <T as NumCast>::from(acc) {
        Some(value) => value,
        None if acc.is_negative() => T::min_value(),
        None => T::max_value(),
    }
}

/// Generic 2D point
#[derive(Clone, Copy, Debug, Default)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl<T: Scalar> Point<T> {
    /// Build a point from small integer literals (used by the default figures).
    pub(crate) fn from_i8(x: i8, y: i8) -> Self {
        Point::new(x.into(), y.into())
    }

    /// The point as a double-precision vector for angle and length math.
    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x.as_(), self.y.as_())
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }
}

impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.coord_eq(other.x) && self.y.coord_eq(other.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses exactly one point: two whitespace-separated scalar tokens.
impl<T: Scalar> FromStr for Point<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_point(s)
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}
