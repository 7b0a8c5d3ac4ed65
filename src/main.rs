// main.rs
//
// Walks every default shape through the recognizer, untouched and after a few
// transformations, and prints what comes back. Set RUST_LOG=debug to see the
// recognizer's own logging.

use unistroke::{DefaultTemplate, Point, Recognizer, StrokeOps};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let recognizer = Recognizer::default();
    log::info!(
        "loaded {} templates ({} points, {}x{} square)",
        recognizer.len(),
        recognizer.config().point_count(),
        recognizer.config().square_size(),
        recognizer.config().square_size()
    );

    println!(
        "{:<22} {:>8} {:>8} {:>8} {:>8}",
        "shape", "raw", "x2", "+500", "rot30"
    );
    for shape in DefaultTemplate::ALL {
        let points = shape.points();
        let variants = [
            points.clone(),
            points.scale(2.0),
            points.translate(500.0, 500.0),
            points.rotate(30.0),
        ];
        let cells: Vec<String> = variants
            .iter()
            .map(|v| {
                let result = recognizer.recognize(v);
                if result.name == shape.name() {
                    format!("{:.4}", result.score)
                } else {
                    format!("!{}", result.name)
                }
            })
            .collect();
        println!(
            "{:<22} {:>8} {:>8} {:>8} {:>8}",
            shape.name(),
            cells[0],
            cells[1],
            cells[2],
            cells[3]
        );
    }

    // A rough eight-point loop, drawn by hand.
    let rough_loop = vec![
        Point::new(100.0, 50.0),
        Point::new(150.0, 75.0),
        Point::new(175.0, 125.0),
        Point::new(150.0, 175.0),
        Point::new(100.0, 200.0),
        Point::new(50.0, 175.0),
        Point::new(25.0, 125.0),
        Point::new(50.0, 75.0),
    ];
    println!("\nbest three for a rough eight-point loop:");
    for m in recognizer.rank(&rough_loop, 3) {
        println!("  {:<22} {:.4}", m.name, m.score);
    }

    // A two-sample horizontal tap cannot be normalized.
    let tap = [Point::new(91.0, 185.0), Point::new(93.0, 185.0)];
    let sentinel = recognizer.recognize(&tap);
    println!("\ntap: name={:?} score={}", sentinel.name, sentinel.score);
    if let Err(e) = recognizer.classify(&tap) {
        println!("tap: {}", e);
    }
}
