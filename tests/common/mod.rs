#![allow(dead_code)]
use color_mst::{Color, DistinctColors, MstError, MstParams, SpanningTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub(crate) type ComputeFn = fn(&[Color], MstParams) -> Result<SpanningTree<f64>, MstError>;

const EPSILON: f64 = 1e-6;

pub(crate) fn test_known_small_tree(compute_fn: ComputeFn) {
    let colors = [Color::new(0, 0, 0), Color::new(0, 0, 3), Color::new(0, 0, 10)];
    let tree = compute_fn(&colors, MstParams::default()).unwrap();
    assert_eq!(10.0, tree.total_weight());

    let mut edges: Vec<(usize, usize)> = tree
        .edges()
        .iter()
        .map(|edge| (edge.parent.min(edge.child), edge.parent.max(edge.child)))
        .collect();
    edges.sort();
    // A-B and B-C, never the direct A-C edge
    assert_eq!(vec![(0, 1), (1, 2)], edges);
}

pub(crate) fn test_empty_vertex_set(compute_fn: ComputeFn) {
    let tree = compute_fn(&[], MstParams::default()).unwrap();
    assert_eq!(0.0, tree.total_weight());
    assert!(tree.records().is_empty());
    assert!(tree.edges().is_empty());
}

pub(crate) fn test_single_vertex(compute_fn: ComputeFn) {
    let tree = compute_fn(&[Color::new(1, 2, 3)], MstParams::default()).unwrap();
    assert_eq!(0.0, tree.total_weight());
    assert!(tree.edges().is_empty());
    assert_eq!(Some(vec![0]), tree.path_to_root(0));
}

pub(crate) fn test_spanning_property(compute_fn: ComputeFn) {
    let colors = random_colors(300, 11);
    let tree = compute_fn(colors.colors(), MstParams::default()).unwrap();
    assert_spanning_tree(&tree, colors.len());
}

pub(crate) fn test_matches_kruskal(compute_fn: ComputeFn) {
    let colors = random_colors(120, 23);
    let tree = compute_fn(colors.colors(), MstParams::default()).unwrap();
    let expected = kruskal_weight(colors.colors());
    assert!((tree.total_weight() - expected).abs() < EPSILON);
}

pub(crate) fn test_weight_is_deterministic(compute_fn: ComputeFn) {
    let colors = random_colors(200, 5);
    let first = compute_fn(colors.colors(), MstParams::default()).unwrap();
    let second = compute_fn(colors.colors(), MstParams::default()).unwrap();
    assert_eq!(first.total_weight(), second.total_weight());

    let params = MstParams::builder().start_vertex(colors.len() - 1).build();
    let other_root = compute_fn(colors.colors(), params).unwrap();
    assert!((first.total_weight() - other_root.total_weight()).abs() < EPSILON);
}

pub(crate) fn test_no_self_edges(compute_fn: ComputeFn) {
    let colors = random_colors(150, 42);
    let tree = compute_fn(colors.colors(), MstParams::default()).unwrap();
    for edge in tree.edges() {
        assert_ne!(edge.parent, edge.child);
        // Distinct colors are never zero apart
        assert!(edge.distance > 0.0);
    }
}

pub(crate) fn test_beats_insertion_order_chain(compute_fn: ComputeFn) {
    let colors = random_colors(1000, 1234);
    let tree = compute_fn(colors.colors(), MstParams::default()).unwrap();
    let chain_weight: f64 = colors
        .colors()
        .windows(2)
        .map(|pair| color_mst::euclidean_distance::<f64>(&pair[0], &pair[1]))
        .sum();
    assert!(tree.total_weight() < chain_weight);
    assert_spanning_tree(&tree, colors.len());
}

pub(crate) fn test_start_vertex_out_of_bounds(compute_fn: ComputeFn) {
    let colors = [Color::new(0, 0, 0), Color::new(9, 9, 9)];
    let params = MstParams::builder().start_vertex(5).build();
    let result = compute_fn(&colors, params);
    assert!(matches!(result, Err(MstError::StartVertexOutOfBounds { start_vertex: 5, .. })));
}

pub(crate) fn random_colors(n_pixels: usize, seed: u64) -> DistinctColors {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n_pixels)
        .map(|_| Color::new(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

pub(crate) fn assert_spanning_tree(tree: &SpanningTree<f64>, n_vertices: usize) {
    assert_eq!(n_vertices, tree.len());
    let roots: Vec<usize> = tree
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.parent.is_none())
        .map(|(id, _)| id)
        .collect();
    assert_eq!(vec![tree.root().unwrap()], roots);
    assert_eq!(n_vertices - 1, tree.edges().len());

    for id in 0..n_vertices {
        let path = tree.path_to_root(id).expect("parent pointers must reach the root");
        assert_eq!(tree.root(), path.last().copied());
    }

    let summed: f64 = tree.edges().iter().map(|edge| edge.distance).sum();
    assert!((summed - tree.total_weight()).abs() < EPSILON);
}

/// Reference weight from Kruskal's algorithm over the explicit complete graph.
pub(crate) fn kruskal_weight(colors: &[Color]) -> f64 {
    let mut edges = Vec::new();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            edges.push((color_mst::euclidean_distance::<f64>(&colors[i], &colors[j]), i, j));
        }
    }
    edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

    fn find(parent: &mut [usize], node: usize) -> usize {
        let mut current = node;
        while parent[current] != current {
            parent[current] = parent[parent[current]];
            current = parent[current];
        }
        current
    }

    let mut parent: Vec<usize> = (0..colors.len()).collect();
    let mut weight = 0.0;
    for (dist, i, j) in edges {
        let (root_i, root_j) = (find(&mut parent, i), find(&mut parent, j));
        if root_i != root_j {
            parent[root_j] = root_i;
            weight += dist;
        }
    }
    weight
}
