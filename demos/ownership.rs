use std::rc::Rc;

use quadra::{Container, Point, Rectangle, Rhombus, Shape, Trapezoid};

/// Shared handles to the trait object, mixing every figure kind.
fn shared_figures() {
    println!("=== Container<Rc<dyn Shape<i32>>> ===");

    let mut figures: Container<Rc<dyn Shape<i32>>> = Container::new();
    figures.push(Rc::new(Rectangle::<i32>::new()));
    figures.push(Rc::new(Trapezoid::<i32>::new()));
    figures.push(Rc::new(Rhombus::<i32>::new()));

    let mut out = String::new();
    figures.print_figures::<i32>(&mut out).expect("Failed to format figures");
    print!("{out}");

    let total: i32 = figures.total_area();
    println!("Total area: {total}");
}

/// Concrete shapes stored by value.
fn concrete_rectangles() {
    println!("\n=== Container<Rectangle<f64>> ===");

    let mut rects: Container<Rectangle<f64>> = Container::new();
    rects.push(Rectangle::new());
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 2.0),
        Point::new(0.0, 2.0),
    ];
    rects.push(Rectangle::try_from(pts).expect("a 3x2 rectangle"));

    let mut out = String::new();
    rects.print_all(&mut out).expect("Failed to format rectangles");
    print!("{out}");
}

/// The same default rectangle over different coordinate types.
fn scalar_types() {
    println!("\n=== Coordinate types ===");

    let r1 = Rectangle::<i32>::new();
    println!("Rectangle<i32>: {r1} | Area: {}", r1.area());

    let r2 = Rectangle::<f32>::new();
    println!("Rectangle<f32>: {r2} | Area: {}", r2.area());

    let r3 = Rectangle::<f64>::new();
    println!("Rectangle<f64>: {r3} | Area: {}", r3.area());
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    shared_figures();
    concrete_rectangles();
    scalar_types();
}
