//! Shape types for quadra
//!
//! Each shape owns its vertices, kept in counter-clockwise order around
//! their centroid, and knows how to:
//! - Calculate its area and center
//! - Print itself as `"<Type>: (x1, y1) (x2, y2) ..."`
//! - Reject vertex sets that do not satisfy its geometric predicate

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use num_traits::AsPrimitive;

use crate::errors::Error;
use crate::geometry;
use crate::types::{Point, Scalar};

/// Common behavior for all shapes
///
/// Object safe: containers hold `Box<dyn Shape<T>>` or `Rc<dyn Shape<T>>`
/// as readily as concrete shapes.
pub trait Shape<T: Scalar>: fmt::Display {
    /// Fixed label for the concrete kind, e.g. `"Rectangle"`.
    fn type_name(&self) -> &'static str;

    /// Vertices in canonical (counter-clockwise) order.
    fn vertices(&self) -> &[Point<T>];

    /// Non-negative shoelace area; zero with fewer than three vertices.
    fn area(&self) -> T;

    /// Arithmetic mean of the vertices.
    fn center(&self) -> Point<T>;

    /// Write the type label followed by the vertices.
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_figure(out, self.type_name(), self.vertices())
    }

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn vertex(&self, index: usize) -> Result<&Point<T>, Error> {
        let vertices = self.vertices();
        vertices.get(index).ok_or(Error::OutOfRange {
            index,
            len: vertices.len(),
        })
    }

    /// The area widened to `f64`.
    fn to_f64(&self) -> f64 {
        self.area().as_()
    }

    /// Vertex-set equality; the concrete kind is not compared.
    fn same_vertices(&self, other: &dyn Shape<T>) -> bool {
        geometry::same_vertex_set(self.vertices(), other.vertices())
    }
}

fn write_figure<T: Scalar>(out: &mut dyn fmt::Write, name: &str, vertices: &[Point<T>]) -> fmt::Result {
    write!(out, "{name}:")?;
    for p in vertices {
        write!(out, " {p}")?;
    }
    Ok(())
}

macro_rules! forward_shape {
    ($($ptr:ident),*) => {$(
        impl<T: Scalar, S: Shape<T> + ?Sized> Shape<T> for $ptr<S> {
            fn type_name(&self) -> &'static str { (**self).type_name() }
            fn vertices(&self) -> &[Point<T>] { (**self).vertices() }
            fn area(&self) -> T { (**self).area() }
            fn center(&self) -> Point<T> { (**self).center() }
            fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result { (**self).print(out) }
        }
    )*};
}

forward_shape!(Box, Rc, Arc);

impl<T: Scalar> PartialEq for dyn Shape<T> + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.same_vertices(other)
    }
}

/// Copy exactly four points, sort them, and check `holds` on the result.
///
/// The predicates only compare lengths, so four coincident points pass every
/// one of them and give a zero-area figure.
fn checked_quad<T: Scalar>(
    shape: &'static str,
    points: &[Point<T>],
    holds: fn(&[Point<T>; 4]) -> bool,
    reason: &'static str,
) -> Result<Vec<Point<T>>, Error> {
    let mut quad: [Point<T>; 4] = points.try_into().map_err(|_| Error::VertexCount {
        shape,
        got: points.len(),
    })?;
    geometry::canonical_order(&mut quad);
    if !holds(&quad) {
        return Err(Error::NotAShape { shape, reason });
    }
    Ok(quad.to_vec())
}

fn default_quad<T: Scalar>(corners: [(i8, i8); 4]) -> Vec<Point<T>> {
    let mut vertices: Vec<Point<T>> = corners.iter().map(|&(x, y)| Point::from_i8(x, y)).collect();
    geometry::canonical_order(&mut vertices);
    vertices
}

// ============================================================================
// Shape Types
// ============================================================================

/// Four vertices with equal opposite sides and equal diagonals.
#[derive(Debug, Clone)]
pub struct Rectangle<T> {
    vertices: Vec<Point<T>>,
}

impl<T: Scalar> Rectangle<T> {
    pub const NAME: &'static str = "Rectangle";

    /// The 2x1 rectangle `(0,0) (2,0) (2,1) (0,1)`.
    pub fn new() -> Self {
        Self {
            vertices: default_quad([(0, 0), (2, 0), (2, 1), (0, 1)]),
        }
    }

    pub fn from_vertices(points: &[Point<T>]) -> Result<Self, Error> {
        let vertices = checked_quad(
            Self::NAME,
            points,
            is_rectangle,
            "opposite sides or diagonals differ in length",
        )?;
        Ok(Self { vertices })
    }
}

fn is_rectangle<T: Scalar>(q: &[Point<T>; 4]) -> bool {
    let s = geometry::side_lengths(q);
    let [d1, d2] = geometry::diagonal_lengths(q);
    T::length_eq(s[0], s[2]) && T::length_eq(s[1], s[3]) && T::length_eq(d1, d2)
}

impl<T: Scalar> Shape<T> for Rectangle<T> {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    fn area(&self) -> T {
        geometry::shoelace_area(&self.vertices)
    }

    fn center(&self) -> Point<T> {
        geometry::centroid(&self.vertices)
    }
}

/// Four vertices with all sides of equal length.
#[derive(Debug, Clone)]
pub struct Rhombus<T> {
    vertices: Vec<Point<T>>,
}

impl<T: Scalar> Rhombus<T> {
    pub const NAME: &'static str = "Rhombus";

    /// Diagonals along the axes: `(2,0) (0,1) (-2,0) (0,-1)`.
    pub fn new() -> Self {
        Self {
            vertices: default_quad([(2, 0), (0, 1), (-2, 0), (0, -1)]),
        }
    }

    pub fn from_vertices(points: &[Point<T>]) -> Result<Self, Error> {
        let vertices = checked_quad(Self::NAME, points, is_rhombus, "sides differ in length")?;
        Ok(Self { vertices })
    }
}

fn is_rhombus<T: Scalar>(q: &[Point<T>; 4]) -> bool {
    let s = geometry::side_lengths(q);
    s.windows(2).all(|w| T::length_eq(w[0], w[1]))
}

impl<T: Scalar> Shape<T> for Rhombus<T> {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    fn area(&self) -> T {
        geometry::shoelace_area(&self.vertices)
    }

    fn center(&self) -> Point<T> {
        geometry::centroid(&self.vertices)
    }
}

/// An isosceles trapezoid: four vertices whose diagonals have equal length.
#[derive(Debug, Clone)]
pub struct Trapezoid<T> {
    vertices: Vec<Point<T>>,
}

impl<T: Scalar> Trapezoid<T> {
    pub const NAME: &'static str = "Trapezoid";

    /// Bases of length 4 and 2, height 2: `(0,0) (4,0) (3,2) (1,2)`.
    pub fn new() -> Self {
        Self {
            vertices: default_quad([(0, 0), (4, 0), (3, 2), (1, 2)]),
        }
    }

    pub fn from_vertices(points: &[Point<T>]) -> Result<Self, Error> {
        let vertices = checked_quad(
            Self::NAME,
            points,
            is_isosceles_trapezoid,
            "diagonals differ in length",
        )?;
        Ok(Self { vertices })
    }
}

fn is_isosceles_trapezoid<T: Scalar>(q: &[Point<T>; 4]) -> bool {
    let [d1, d2] = geometry::diagonal_lengths(q);
    T::length_eq(d1, d2)
}

impl<T: Scalar> Shape<T> for Trapezoid<T> {
    fn type_name(&self) -> &'static str {
        Self::NAME
    }

    fn vertices(&self) -> &[Point<T>] {
        &self.vertices
    }

    fn area(&self) -> T {
        geometry::shoelace_area(&self.vertices)
    }

    fn center(&self) -> Point<T> {
        geometry::centroid(&self.vertices)
    }
}

macro_rules! impl_common {
    ($($shape:ident),*) => {$(
        impl<T: Scalar> Default for $shape<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: Scalar> fmt::Display for $shape<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.print(f)
            }
        }

        impl<T: Scalar> TryFrom<&[Point<T>]> for $shape<T> {
            type Error = Error;

            fn try_from(points: &[Point<T>]) -> Result<Self, Error> {
                Self::from_vertices(points)
            }
        }

        impl<T: Scalar> TryFrom<[Point<T>; 4]> for $shape<T> {
            type Error = Error;

            fn try_from(points: [Point<T>; 4]) -> Result<Self, Error> {
                Self::from_vertices(&points)
            }
        }

        impl<T: Scalar> From<&$shape<T>> for f64 {
            fn from(shape: &$shape<T>) -> f64 {
                shape.to_f64()
            }
        }

        impl<T: Scalar> From<$shape<T>> for Quad<T> {
            fn from(shape: $shape<T>) -> Self {
                Quad::$shape(shape)
            }
        }
    )*};
}

impl_common!(Rectangle, Rhombus, Trapezoid);

macro_rules! vertex_set_eq {
    ($($lhs:ident => [$($rhs:ident),*]);* $(;)?) => {$($(
        impl<T: Scalar> PartialEq<$rhs<T>> for $lhs<T> {
            fn eq(&self, other: &$rhs<T>) -> bool {
                geometry::same_vertex_set(&self.vertices, &other.vertices)
            }
        }
    )*)*};
}

vertex_set_eq! {
    Rectangle => [Rectangle, Rhombus, Trapezoid];
    Rhombus => [Rectangle, Rhombus, Trapezoid];
    Trapezoid => [Rectangle, Rhombus, Trapezoid];
}

// ============================================================================
// Shape Enum
// ============================================================================

/// The closed set of figure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Rhombus,
    Trapezoid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Rhombus, ShapeKind::Trapezoid];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Trapezoid => "Trapezoid",
        }
    }

    /// Look a kind up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<ShapeKind> {
        Self::ALL.into_iter().find(|k| k.name().eq_ignore_ascii_case(name))
    }

    /// The default figure of this kind.
    pub fn default_figure<T: Scalar>(self) -> Quad<T> {
        match self {
            ShapeKind::Rectangle => Rectangle::new().into(),
            ShapeKind::Rhombus => Rhombus::new().into(),
            ShapeKind::Trapezoid => Trapezoid::new().into(),
        }
    }

    /// Validated construction of a figure of this kind.
    pub fn build<T: Scalar>(self, points: &[Point<T>]) -> Result<Quad<T>, Error> {
        Ok(match self {
            ShapeKind::Rectangle => Rectangle::from_vertices(points)?.into(),
            ShapeKind::Rhombus => Rhombus::from_vertices(points)?.into(),
            ShapeKind::Trapezoid => Trapezoid::from_vertices(points)?.into(),
        })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shape enum wrapping all shape types
///
/// Uniform by-value storage; each variant keeps its own construction rules.
#[derive(Debug, Clone)]
pub enum Quad<T> {
    Rectangle(Rectangle<T>),
    Rhombus(Rhombus<T>),
    Trapezoid(Trapezoid<T>),
}

impl<T: Scalar> Quad<T> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Quad::Rectangle(_) => ShapeKind::Rectangle,
            Quad::Rhombus(_) => ShapeKind::Rhombus,
            Quad::Trapezoid(_) => ShapeKind::Trapezoid,
        }
    }

    fn as_shape(&self) -> &dyn Shape<T> {
        match self {
            Quad::Rectangle(s) => s,
            Quad::Rhombus(s) => s,
            Quad::Trapezoid(s) => s,
        }
    }
}

impl<T: Scalar> Shape<T> for Quad<T> {
    fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    fn vertices(&self) -> &[Point<T>] {
        self.as_shape().vertices()
    }

    fn area(&self) -> T {
        self.as_shape().area()
    }

    fn center(&self) -> Point<T> {
        self.as_shape().center()
    }
}

impl<T: Scalar> fmt::Display for Quad<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl<T: Scalar> PartialEq for Quad<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_vertices(other)
    }
}

impl<T: Scalar> From<&Quad<T>> for f64 {
    fn from(shape: &Quad<T>) -> f64 {
        shape.to_f64()
    }
}

// ============================================================================
// Tests
// ============================================================================
