use kdsplit::naive::{nearest_scan, range_scan};
use kdsplit::{KdTree, KdTreeError, Point, Rectangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn reference_points() -> Vec<Point> {
    vec![
        Point::xy(7.0, 2.0),
        Point::xy(5.0, 4.0),
        Point::xy(9.0, 6.0),
        Point::xy(4.0, 7.0),
        Point::xy(8.0, 1.0),
        Point::xy(2.0, 3.0),
    ]
}

fn sorted<'a>(mut points: Vec<&'a Point>) -> Vec<&'a Point> {
    points.sort_by(|a, b| a.partial_cmp(b).unwrap());
    points
}

#[test]
fn test_build_reference_points() {
    let tree = KdTree::build(reference_points()).unwrap();

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.dimensions(), 2);
    assert_eq!(tree.height(), 3);

    // Median on x of {2, 4, 5, 7, 8, 9} at index 3.
    let root = tree.root().expect("Tree should have a root");
    assert_eq!(root.location(), &Point::xy(7.0, 2.0));
    assert!(!root.is_leaf());
    assert!(root.left().unwrap().location().x() <= 7.0);
    assert!(root.right().unwrap().location().x() >= 7.0);
}

#[test]
fn test_children_respect_splitting_axis() {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Point> = (0..500)
        .map(|_| Point::xy(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    let tree = KdTree::build(points).unwrap();

    fn check(node: &kdsplit::KdNode, depth: usize) {
        let axis = depth % 2;
        let v = node.location().coord(axis);
        if let Some(left) = node.left() {
            let mut stack = vec![left];
            while let Some(n) = stack.pop() {
                assert!(n.location().coord(axis) <= v, "Left subtree point above split at depth {}", depth);
                stack.extend(n.left());
                stack.extend(n.right());
            }
            check(left, depth + 1);
        }
        if let Some(right) = node.right() {
            let mut stack = vec![right];
            while let Some(n) = stack.pop() {
                assert!(n.location().coord(axis) >= v, "Right subtree point below split at depth {}", depth);
                stack.extend(n.left());
                stack.extend(n.right());
            }
            check(right, depth + 1);
        }
    }

    check(tree.root().unwrap(), 0);
}

#[test]
fn test_empty_tree() {
    let tree = KdTree::build(Vec::new()).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.dimensions(), 0);
    assert!(tree.root().is_none());
    assert_eq!(tree.iter().count(), 0);

    let rect = Rectangle::new(Point::xy(-1e9, -1e9), Point::xy(1e9, 1e9)).unwrap();
    assert!(tree.range_query(&rect).unwrap().is_empty());
    assert!(tree.nearest_neighbor(&Point::xy(0.0, 0.0)).unwrap().is_none());

    // Any dimensionality is fine against an empty tree.
    assert!(tree.nearest_neighbor(&Point::new([1.0, 2.0, 3.0])).unwrap().is_none());
}

#[test]
fn test_height_is_logarithmic() {
    let bounds = Rectangle::new(Point::xy(0.0, 0.0), Point::xy(100.0, 100.0)).unwrap();
    for &n in &[1usize, 2, 3, 7, 8, 100, 1000, 4096] {
        let tree = KdTree::build(bounds.random_points(n)).unwrap();
        let expected = n.ilog2() as usize + 1;
        assert_eq!(tree.height(), expected, "Unexpected height for {} points", n);
    }
}

#[test]
fn test_iter_visits_every_point() {
    let points = reference_points();
    let tree = KdTree::try_from(points.clone()).unwrap();

    let visited = sorted(tree.iter().collect());
    let expected = sorted(points.iter().collect());
    assert_eq!(visited, expected);
    assert_eq!((&tree).into_iter().count(), 6);
}

#[test]
fn test_build_rejects_mixed_dimensions() {
    let points = vec![Point::xy(1.0, 2.0), Point::xy(3.0, 4.0), Point::new([5.0, 6.0, 7.0])];
    let err = KdTree::build(points).unwrap_err();
    assert_eq!(err, KdTreeError::DimensionalityMismatch { expected: 2, found: 3 });
}

#[test]
fn test_build_rejects_zero_dimensional_points() {
    let err = KdTree::build(vec![Point::new(Vec::<f64>::new())]).unwrap_err();
    assert_eq!(err, KdTreeError::ZeroDimensional);
}

#[test]
fn test_build_rejects_nan() {
    let points = vec![Point::xy(1.0, 2.0), Point::xy(3.0, f64::NAN)];
    let err = KdTree::build(points).unwrap_err();
    assert_eq!(err, KdTreeError::NanCoordinate { axis: 1 });
}

#[test]
fn test_queries_reject_mismatched_dimensions() {
    let tree = KdTree::build(reference_points()).unwrap();

    let rect = Rectangle::new(Point::new([0.0, 0.0, 0.0]), Point::new([6.0, 6.0, 6.0])).unwrap();
    assert_eq!(
        tree.range_query(&rect).unwrap_err(),
        KdTreeError::DimensionalityMismatch { expected: 2, found: 3 }
    );

    assert_eq!(
        tree.nearest_neighbor(&Point::new([1.0])).unwrap_err(),
        KdTreeError::DimensionalityMismatch { expected: 2, found: 1 }
    );
}

#[test]
fn test_error_messages() {
    let err = Rectangle::new(Point::xy(5.0, 0.0), Point::xy(1.0, 1.0)).unwrap_err();
    assert_eq!(err.to_string(), "Malformed rectangle: lower bound 5 exceeds upper bound 1 on axis 0");

    let err = KdTreeError::DimensionalityMismatch { expected: 2, found: 3 };
    assert_eq!(err.to_string(), "Dimensionality mismatch: expected 2 coordinates, found 3");
}

#[test]
fn test_three_dimensional_tree_matches_naive() {
    let bounds = Rectangle::new(Point::new([0.0, 0.0, 0.0]), Point::new([10.0, 10.0, 10.0])).unwrap();
    let points = bounds.random_points(2000);
    let tree = KdTree::build(points.clone()).unwrap();
    assert_eq!(tree.dimensions(), 3);

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let a = bounds.random_point(&mut rng);
        let b = bounds.random_point(&mut rng);
        let lower: Vec<f64> = (0..3).map(|i| a.coord(i).min(b.coord(i))).collect();
        let upper: Vec<f64> = (0..3).map(|i| a.coord(i).max(b.coord(i))).collect();
        let rect = Rectangle::new(Point::new(lower), Point::new(upper)).unwrap();

        assert_eq!(sorted(tree.range_query(&rect).unwrap()), sorted(range_scan(&points, &rect)));

        let query = bounds.random_point(&mut rng);
        let found = tree.nearest_neighbor(&query).unwrap().unwrap();
        let expected = nearest_scan(&points, &query).unwrap();
        assert_eq!(found.distance_squared, expected.distance_squared);
    }
}

#[test]
fn test_parallel_batches_match_sequential() {
    let bounds = Rectangle::new(Point::xy(0.0, 0.0), Point::xy(100.0, 100.0)).unwrap();
    let tree = KdTree::build(bounds.random_points(5000)).unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let rectangles: Vec<Rectangle> = (0..64)
        .map(|_| {
            let x = rng.gen_range(0.0..90.0);
            let y = rng.gen_range(0.0..90.0);
            Rectangle::new(Point::xy(x, y), Point::xy(x + 10.0, y + 10.0)).unwrap()
        })
        .collect();
    let queries: Vec<Point> = (0..64).map(|_| bounds.random_point(&mut rng)).collect();

    let batch = tree.par_range_queries(&rectangles).unwrap();
    assert_eq!(batch.len(), rectangles.len());
    for (rect, hits) in rectangles.iter().zip(batch) {
        assert_eq!(hits, tree.range_query(rect).unwrap());
    }

    let batch = tree.par_nearest_neighbors(&queries).unwrap();
    for (query, found) in queries.iter().zip(batch) {
        assert_eq!(found, tree.nearest_neighbor(query).unwrap());
    }
}

#[test]
fn test_parallel_batch_fails_on_invalid_query() {
    let tree = KdTree::build(reference_points()).unwrap();
    let queries = vec![Point::xy(1.0, 1.0), Point::new([1.0, 1.0, 1.0])];
    assert!(matches!(
        tree.par_nearest_neighbors(&queries),
        Err(KdTreeError::DimensionalityMismatch { expected: 2, found: 3 })
    ));
}
