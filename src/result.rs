use crate::data_wrappers::{MstEdge, VertexRecord};
use num_traits::Float;
use std::cmp::Ordering;

/// A finished minimum spanning tree over a set of distinct colors.
///
/// The vertex records are kept exactly as Prim's algorithm left them: every vertex except the
/// root has a parent and the distance of the edge to that parent, and the distances of the
/// non-root vertices sum to `total_weight()`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree<T> {
    total_weight: T,
    records: Vec<VertexRecord<T>>,
    root: Option<usize>,
}

impl<T: Float> SpanningTree<T> {
    pub(crate) fn new(total_weight: T, records: Vec<VertexRecord<T>>, root: usize) -> Self {
        SpanningTree { total_weight, records, root: Some(root) }
    }

    pub(crate) fn empty() -> Self {
        SpanningTree { total_weight: T::zero(), records: Vec::new(), root: None }
    }

    /// Sum of the weights of all tree edges.
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// The vertex records, indexed by vertex id.
    pub fn records(&self) -> &[VertexRecord<T>] {
        &self.records
    }

    /// Consumes the tree, handing the vertex records over to the caller.
    pub fn into_records(self) -> Vec<VertexRecord<T>> {
        self.records
    }

    /// Number of vertices spanned.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The start vertex, which has no parent. `None` only for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn parent_of(&self, id: usize) -> Option<usize> {
        self.records.get(id).and_then(|record| record.parent)
    }

    /// The `V - 1` tree edges, ordered by child vertex id.
    pub fn edges(&self) -> Vec<MstEdge<T>> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(child, record)| {
                record.parent.map(|parent| MstEdge { parent, child, distance: record.distance })
            })
            .collect()
    }

    /// The tree edges ordered from shortest to longest. Removing the last `k - 1` of these
    /// splits the colors into `k` clusters.
    pub fn sorted_edges(&self) -> Vec<MstEdge<T>> {
        let mut edges = self.edges();
        edges.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        edges
    }

    /// Follows parent pointers from `id` up to the root.
    ///
    /// # Returns
    /// * The vertex ids visited, starting with `id` and ending with the root. `None` if `id` is
    ///   not a vertex, or if the walk does not reach the root within `len()` steps.
    pub fn path_to_root(&self, id: usize) -> Option<Vec<usize>> {
        let root = self.root?;
        let mut path = vec![id];
        let mut current = id;
        while current != root {
            current = self.records.get(current)?.parent?;
            path.push(current);
            if path.len() > self.records.len() {
                return None;
            }
        }
        Some(path)
    }
}
