use std::rc::Rc;

use quadra::{Container, Shape, parse_figure};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let input = std::env::args()
        .nth(1)
        .map(|path| std::fs::read_to_string(&path).expect("Failed to read file"))
        .unwrap_or_else(|| {
            r#"rectangle 0 0 4 0 4 2 0 2
trapezoid 0 0 4 0 3 2 1 2
rhombus 2 0 0 1 -2 0 0 -1
rectangle 0 0 5 0 6 3 0 3
rhombus"#
                .to_string()
        });

    let mut figures: Container<Rc<dyn Shape<f64>>> = Container::new();
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse_figure::<f64>(line) {
            Ok(figure) => {
                println!("Added {} (area {})", figure.type_name(), figure.area());
                figures.push(Rc::new(figure));
            }
            Err(e) => eprintln!("Error: {e:?}"),
        }
    }

    let mut out = String::new();
    figures.print_figures::<f64>(&mut out).expect("Failed to format figures");
    print!("{out}");

    let total: f64 = figures.total_area();
    println!("Total area: {total} ({} figures)", figures.len());

    match figures.remove(0) {
        Ok(removed) => println!("Removed: {removed}; {} left", figures.len()),
        Err(e) => eprintln!("Error: {e}"),
    }
    if let Err(e) = figures.remove(figures.len()) {
        eprintln!("Error: {e}");
    }
}
