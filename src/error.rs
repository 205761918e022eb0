use thiserror::Error;

/// Errors that arise from malformed pixel grids, bad parameters, or a broken
/// spanning tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MstError {
    /// The pixel buffer does not hold `height * width` pixels.
    #[error("pixel buffer holds {found} pixels but a {height}x{width} grid needs {expected}")]
    GridSizeMismatch {
        height: usize,
        width: usize,
        expected: usize,
        found: usize,
    },
    /// A grid row has a different width from the first row.
    #[error("row {row} has {found} pixels, but row 0 has {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The configured start vertex does not exist in the vertex set.
    #[error("start vertex {start_vertex} is out of bounds for {n_vertices} distinct colors")]
    StartVertexOutOfBounds {
        start_vertex: usize,
        n_vertices: usize,
    },
    /// No unvisited vertex could be reached from the tree. The color graph
    /// is complete, so this is a logic error rather than bad input.
    #[error("spanning tree stalled with {unreached} unreached vertices after {in_tree} were added")]
    Disconnected { in_tree: usize, unreached: usize },
}
