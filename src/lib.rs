//! A generic growable container and a small family of validated
//! quadrilaterals over any scalar coordinate type.
//!
//! ```
//! use std::rc::Rc;
//! use quadra::{Container, Point, Rectangle, Shape, Trapezoid};
//!
//! let mut figures: Container<Rc<dyn Shape<i32>>> = Container::new();
//! figures.push(Rc::new(Rectangle::<i32>::new()));
//! figures.push(Rc::new(Trapezoid::<i32>::new()));
//!
//! let total: i32 = figures.total_area();
//! assert_eq!(total, 8);
//!
//! let bad = [Point::new(0, 0), Point::new(5, 0), Point::new(6, 3), Point::new(0, 3)];
//! assert!(Rectangle::from_vertices(&bad).is_err());
//! ```

use pest_derive::Parser;

pub mod container;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod parse;
pub mod shapes;
pub mod types;

pub use container::{Container, INITIAL_CAPACITY};
pub use errors::{Error, ErrorKind, ParseError};
pub use parse::{parse_figure, parse_point, parse_points, read_point};
pub use shapes::{Quad, Rectangle, Rhombus, Shape, ShapeKind, Trapezoid};
pub use types::{LENGTH_EPSILON, POINT_EPSILON, Point, Scalar};

#[derive(Parser)]
#[grammar = "quad.pest"]
pub struct QuadParser;

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_point_pair() {
        let input = "1 2";
        let result = QuadParser::parse(Rule::single_point, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_signed_and_exponent_numbers() {
        for input in ["-1", "+2", "3.", ".5", "1e3", "-2.5E-2"] {
            let result = QuadParser::parse(Rule::number, input);
            assert!(result.is_ok(), "Failed to parse {input:?}: {:?}", result.err());
        }
    }

    #[test]
    fn parse_point_list_across_lines() {
        let input = "0 0 4 0\n3 2\n1 2\n";
        let result = QuadParser::parse(Rule::point_list, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_figure_line() {
        let input = "rectangle 0 0 3 0 3 2 0 2";
        let result = QuadParser::parse(Rule::figure, input);
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_figure_kind_any_case() {
        for input in ["RHOMBUS", "Trapezoid", "rectangle"] {
            let result = QuadParser::parse(Rule::figure, input);
            assert!(result.is_ok(), "Failed to parse {input:?}: {:?}", result.err());
        }
    }

    #[test]
    fn reject_unknown_kind() {
        assert!(QuadParser::parse(Rule::figure, "circle 0 0").is_err());
        assert!(QuadParser::parse(Rule::figure, "rectangle2 0 0").is_err());
    }

    #[test]
    fn reject_lone_coordinate() {
        assert!(QuadParser::parse(Rule::single_point, "5").is_err());
        assert!(QuadParser::parse(Rule::point_list, "1 2 3").is_err());
    }
}
