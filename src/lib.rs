//! Minimum spanning trees over the distinct colors of an image, in Rust. The first stage of
//! MST based color quantization. Generic over floating point numeric types.
//!
//! The pipeline runs in one direction:
//!  1. The pixels of an image are scanned and deduplicated into a set of distinct colors. Each
//!     distinct color becomes a vertex with a stable integer id;
//!  2. Every pair of vertices is joined by an edge weighted by the Euclidean distance between
//!     the two colors in RGB space, so the graph is complete; and
//!  3. Prim's algorithm grows a minimum spanning tree over that graph. Because every pair of
//!     vertices is connected, the dense O(V²) variant is used: no priority queue, just a scan
//!     over a flat array of vertex records per round.
//!
//! The resulting tree records a parent and an edge weight for every vertex but the root.
//! Cutting its `k - 1` heaviest edges leaves `k` clusters of similar colors, which is how the
//! downstream quantization step builds its palette.
//!
//! # Examples
//! ```
//!use color_mst::{compute_mst, extract_distinct_colors, Color, PixelGrid};
//!
//!let pixels = [
//!    Color::new(0, 0, 0), Color::new(0, 0, 3),
//!    Color::new(0, 0, 10), Color::new(0, 0, 0),
//!];
//!let grid = PixelGrid::new(&pixels, 2, 2).unwrap();
//!let distinct = extract_distinct_colors(&grid);
//!assert_eq!(3, distinct.len());
//!
//!let tree = compute_mst(&distinct).unwrap();
//!assert_eq!(10.0, tree.total_weight());
//!assert_eq!(2, tree.edges().len());
//! ```

use num_traits::Float;
use tracing::{debug, instrument};

pub use crate::color::Color;
pub use crate::data_wrappers::{MstEdge, VertexRecord};
pub use crate::distance::euclidean_distance;
pub use crate::error::MstError;
pub use crate::extraction::{extract_distinct_colors, DistinctColors, PixelGrid};
pub use crate::params::{MstParams, MstParamsBuilder};
pub use crate::result::SpanningTree;

mod color;
mod data_wrappers;
mod distance;
mod error;
mod extraction;
mod params;
mod prims;
mod result;

/// Builds minimum spanning trees over a set of distinct colors using Prim's algorithm.
#[derive(Debug, Clone)]
pub struct MstBuilder<'a> {
    colors: &'a [Color],
    params: MstParams,
}

impl<'a> MstBuilder<'a> {
    /// Creates a builder over a vertex set with custom parameters.
    ///
    /// # Parameters
    /// * `colors` - the vertex set. Colors are expected to be distinct, and their positions are
    ///              the vertex ids used in the result.
    /// * `params` - the parameter configuration.
    ///
    /// # Returns
    /// * The builder instance.
    ///
    /// # Examples
    /// ```
    ///use color_mst::{Color, MstBuilder, MstParams};
    ///
    ///let colors = [Color::new(0, 0, 0), Color::new(10, 10, 10), Color::new(20, 20, 20)];
    ///let params = MstParams::builder().start_vertex(2).build();
    ///let tree = MstBuilder::new(&colors, params).compute::<f64>().unwrap();
    ///assert_eq!(Some(2), tree.root());
    /// ```
    pub fn new(colors: &'a [Color], params: MstParams) -> Self {
        MstBuilder { colors, params }
    }

    /// Creates a builder over a vertex set with the default parameters. The tree is grown from
    /// vertex 0.
    pub fn default_params(colors: &'a [Color]) -> Self {
        MstBuilder::new(colors, MstParams::default())
    }

    /// Computes the minimum spanning tree on the current thread.
    ///
    /// # Returns
    /// * A result that, if successful, holds the spanning tree: its total weight and one vertex
    ///   record per color. An empty vertex set gives an empty tree of weight zero. An error is
    ///   returned if the configured start vertex does not exist, or if the tree stops growing
    ///   before every vertex is reached, which indicates a bug rather than bad input.
    ///
    /// # Examples
    /// ```
    ///use color_mst::{Color, MstBuilder};
    ///
    ///let colors = [Color::new(0, 0, 0), Color::new(0, 0, 3), Color::new(0, 0, 10)];
    ///let tree = MstBuilder::default_params(&colors).compute::<f32>().unwrap();
    ///assert_eq!(10.0, tree.total_weight());
    ///assert_eq!(Some(1), tree.parent_of(2));
    /// ```
    #[instrument(level = "debug", skip(self), fields(n_vertices = self.colors.len()))]
    pub fn compute<T: Float>(&self) -> Result<SpanningTree<T>, MstError> {
        let tree = prims::serial::PrimsSerial::new(self.colors, &self.params).grow_tree::<T>()?;
        let total_weight = tree.total_weight().to_f64().unwrap_or(f64::NAN);
        debug!(total_weight, "spanning tree complete");
        Ok(tree)
    }

    /// Computes the minimum spanning tree, spreading each round's relaxation scan over the
    /// rayon thread pool. Vertex sets smaller than `MstParams::parallel_threshold` are handled
    /// serially. The result has the same total weight as `compute`.
    #[cfg(feature = "parallel")]
    #[instrument(level = "debug", skip(self), fields(n_vertices = self.colors.len()))]
    pub fn compute_par<T: Float + Send + Sync>(&self) -> Result<SpanningTree<T>, MstError> {
        let tree = prims::parallel::PrimsPar::new(self.colors, &self.params).grow_tree::<T>()?;
        let total_weight = tree.total_weight().to_f64().unwrap_or(f64::NAN);
        debug!(total_weight, "spanning tree complete");
        Ok(tree)
    }
}

/// Computes the minimum spanning tree of a set of extracted colors with default parameters and
/// `f64` weights.
pub fn compute_mst(distinct: &DistinctColors) -> Result<SpanningTree<f64>, MstError> {
    MstBuilder::default_params(distinct.colors()).compute()
}
