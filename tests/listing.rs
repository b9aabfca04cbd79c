use std::rc::Rc;

use insta::assert_snapshot;
use quadra::{Container, Point, Rectangle, Rhombus, Shape, Trapezoid};

fn defaults() -> Container<Rc<dyn Shape<i32>>> {
    let mut figures: Container<Rc<dyn Shape<i32>>> = Container::new();
    figures.push(Rc::new(Rectangle::<i32>::new()));
    figures.push(Rc::new(Rhombus::<i32>::new()));
    figures.push(Rc::new(Trapezoid::<i32>::new()));
    figures
}

#[test]
fn shared_figures_with_center_and_area() {
    let figures = defaults();
    let mut out = String::new();
    figures.print_figures::<i32>(&mut out).unwrap();
    assert_snapshot!(out.trim_end(), @r"
    0. Rectangle: (0, 0) (2, 0) (2, 1) (0, 1) | Центр: (1, 0) | Площадь: 2
    1. Rhombus: (0, -1) (2, 0) (0, 1) (-2, 0) | Центр: (0, 0) | Площадь: 4
    2. Trapezoid: (0, 0) (4, 0) (3, 2) (1, 2) | Центр: (2, 1) | Площадь: 6
    ");
}

#[test]
fn listing_after_removal() {
    let mut figures = defaults();
    let removed = figures.remove(1).unwrap();
    assert_eq!(removed.type_name(), "Rhombus");

    let mut out = String::new();
    figures.print_all(&mut out).unwrap();
    assert_snapshot!(out.trim_end(), @r"
    0. Rectangle: (0, 0) (2, 0) (2, 1) (0, 1)
    1. Trapezoid: (0, 0) (4, 0) (3, 2) (1, 2)
    ");
}

#[test]
fn boxed_float_figures() {
    let mut figures: Container<Box<dyn Shape<f64>>> = Container::new();
    let rect = Rectangle::from_vertices(&[
        Point::new(3.0, 2.0),
        Point::new(0.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(3.0, 0.0),
    ])
    .unwrap();
    figures.push(Box::new(rect));
    figures.push(Box::new(Rhombus::<f64>::new()));

    let mut out = String::new();
    figures.print_figures::<f64>(&mut out).unwrap();
    assert_snapshot!(out.trim_end(), @r"
    0. Rectangle: (0, 0) (3, 0) (3, 2) (0, 2) | Центр: (1.5, 1) | Площадь: 6
    1. Rhombus: (0, -1) (2, 0) (0, 1) (-2, 0) | Центр: (0, 0) | Площадь: 4
    ");
}

#[test]
fn by_value_rectangles() {
    let mut rects: Container<Rectangle<i32>> = Container::new();
    rects.push(Rectangle::new());
    rects.push(Rectangle::try_from([Point::new(0, 0), Point::new(4, 0), Point::new(4, 4), Point::new(0, 4)]).unwrap());

    let mut out = String::new();
    rects.print_all(&mut out).unwrap();
    assert_snapshot!(out.trim_end(), @r"
    0. Rectangle: (0, 0) (2, 0) (2, 1) (0, 1)
    1. Rectangle: (0, 0) (4, 0) (4, 4) (0, 4)
    ");

    let total: i32 = rects.total_area();
    assert_eq!(total, 18);
}

#[test]
fn plain_points() {
    let points: Container<Point<i32>> = [(1, 2), (-3, 4)].into_iter().map(Point::from).collect();

    let mut out = String::new();
    points.print_all(&mut out).unwrap();
    assert_snapshot!(out.trim_end(), @r"
    0. (1, 2)
    1. (-3, 4)
    ");
}
