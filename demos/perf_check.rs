use std::time::Instant;

use kdsplit::naive::{nearest_scan, range_scan};
use kdsplit::{KdTree, Point, Rectangle};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=kdsplit=debug shows build statistics.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut points = Vec::with_capacity(1000 * 1000);
    for x in 0..1000 {
        for y in 0..1000 {
            points.push(Point::xy(x as f64, y as f64));
        }
    }

    let rectangle = Rectangle::new(Point::xy(500.0, 500.0), Point::xy(504.0, 504.0))?;

    let start = Instant::now();
    let mut naive = range_scan(&points, &rectangle);
    println!("Naive method: {}ms", start.elapsed().as_millis());

    let start = Instant::now();
    let tree = KdTree::build(points.clone())?;
    println!("K-D tree build: {}ms", start.elapsed().as_millis());

    let start = Instant::now();
    let mut indexed = tree.range_query(&rectangle)?;
    println!("K-D tree: {}ms", start.elapsed().as_millis());

    naive.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    indexed.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    assert_eq!(naive, indexed, "Range results differ");

    let query = Point::xy(44.5, 68.7);

    let start = Instant::now();
    let expected = nearest_scan(&points, &query);
    println!("Naive nearest: {}ms", start.elapsed().as_millis());

    let start = Instant::now();
    if let Some(nearest) = tree.nearest_neighbor(&query)? {
        println!("K-D tree nearest: {}ms", start.elapsed().as_millis());
        println!("the nearest point:{},the distance is {}", nearest.point, nearest.distance_squared);
        assert_eq!(Some(nearest.distance_squared), expected.map(|n| n.distance_squared));
    }

    Ok(())
}
