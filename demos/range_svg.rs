use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use kdsplit::{KdTree, Point, Rectangle};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = "kdtree_range.svg";
    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(0.0..100.0, 0.0..100.0)?;

    let bounds = Rectangle::new(Point::xy(0.0, 0.0), Point::xy(100.0, 100.0))?;
    let points = bounds.random_points(1000);
    let tree = KdTree::build(points.clone())?;

    // Splitting lines, clipped to the cell each node partitions
    draw_splits(&mut chart, tree.root(), 0, [0.0, 0.0], [100.0, 100.0])?;

    // All points
    chart.draw_series(points.iter().map(|p| Circle::new((p.x(), p.y()), 2, BLACK.mix(0.4).filled())))?;

    // Range query
    let query = Rectangle::new(Point::xy(20.0, 30.0), Point::xy(55.0, 60.0))?;
    chart.draw_series(std::iter::once(query_area(&query)))?;
    let hits = tree.range_query(&query)?;
    chart.draw_series(hits.iter().map(|p| Circle::new((p.x(), p.y()), 3, BLUE.filled())))?;

    // Nearest neighbor
    let target = Point::xy(80.0, 15.0);
    if let Some(nearest) = tree.nearest_neighbor(&target)? {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(target.x(), target.y()), (nearest.point.x(), nearest.point.y())],
            RED.stroke_width(2),
        )))?;
        chart.draw_series(std::iter::once(Circle::new((target.x(), target.y()), 4, RED.filled())))?;
    }

    root.present()?;
    println!("Output saved to {} ({} of {} points in range)", filename, hits.len(), tree.len());
    Ok(())
}

fn query_area(query: &Rectangle) -> plotters::element::Rectangle<(f64, f64)> {
    let lower = query.lower();
    let upper = query.upper();
    plotters::element::Rectangle::new([(lower.x(), lower.y()), (upper.x(), upper.y())], BLUE.mix(0.1).filled())
}

fn draw_splits(
    chart: &mut ChartContext<'_, SVGBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    node: Option<&kdsplit::KdNode>,
    depth: usize,
    min: [f64; 2],
    max: [f64; 2],
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(node) = node else {
        return Ok(());
    };
    let axis = depth % 2;
    let v = node.location().coord(axis);

    let line = if axis == 0 {
        vec![(v, min[1]), (v, max[1])]
    } else {
        vec![(min[0], v), (max[0], v)]
    };
    chart.draw_series(std::iter::once(PathElement::new(line, BLACK.mix(0.2))))?;

    let mut left_max = max;
    left_max[axis] = v;
    let mut right_min = min;
    right_min[axis] = v;
    draw_splits(chart, node.left(), depth + 1, min, left_max)?;
    draw_splits(chart, node.right(), depth + 1, right_min, max)?;
    Ok(())
}
