//! Example: convex hull, closest pair and segment intersections.
//!
//! Run with:
//! `cargo run --example geometry`

use dp_lab::problems::geometry::{
    closest_pair, convex_hull, intersection_point, Point, Segment,
};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let points = [
        Point::new(0.5, 4.0),
        Point::new(1.2, 1.1),
        Point::new(2.5, 2.4),
        Point::new(4.7, 0.3),
        Point::new(3.9, 4.6),
        Point::new(2.6, 2.2),
        Point::new(0.1, 0.2),
    ];
    let segments = [
        Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0)),
        Segment::new(Point::new(0.0, 3.0), Point::new(3.0, 0.0)),
        Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 4.0)),
    ];

    println!("Convex hull:");
    for p in convex_hull(&points) {
        println!("  ({}, {})", p.x, p.y);
    }

    if let Some(best) = closest_pair(&points) {
        println!(
            "Closest pair: ({}, {}) - ({}, {}) at {:.4}",
            best.a.x, best.a.y, best.b.x, best.b.y, best.distance
        );
    }

    println!("Segment intersections:");
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if let Some(p) = intersection_point(&segments[i], &segments[j]) {
                println!("  segments {i} and {j} meet at ({}, {})", p.x, p.y);
            }
        }
    }
}
