use tracing::warn;

// Defaults for parameters
const START_VERTEX_DEFAULT: usize = 0;
const PARALLEL_THRESHOLD_DEFAULT: usize = 1024;

// Valid minimums/left bounds of parameters
const PARALLEL_THRESHOLD_MINIMUM: usize = 1;

/// Tunable settings for building the spanning tree. Only needed to move the start vertex or
/// change when the parallel path kicks in. Otherwise use `MstBuilder::default_params()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstParams {
    pub(crate) start_vertex: usize,
    pub(crate) parallel_threshold: usize,
}

/// Builder object to set custom parameters.
#[derive(Debug, Clone, Default)]
pub struct MstParamsBuilder {
    start_vertex: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl Default for MstParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MstParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the parameter builder
    pub fn builder() -> MstParamsBuilder {
        MstParamsBuilder::default()
    }

    pub fn start_vertex(&self) -> usize {
        self.start_vertex
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl MstParamsBuilder {
    /// Sets the vertex id the tree is grown from. Vertex ids follow the order colors were
    /// first seen in the image, so the default of 0 is the top left pixel's color.
    /// The id is checked against the vertex set when the tree is computed.
    ///
    /// # Parameters
    /// * start_vertex - the id of the first vertex added to the tree
    ///
    /// # Returns
    /// * the parameter builder
    pub fn start_vertex(mut self, start_vertex: usize) -> MstParamsBuilder {
        self.start_vertex = Some(start_vertex);
        self
    }

    /// Sets the smallest number of distinct colors for which `compute_par` spreads the
    /// relaxation scan over threads. Smaller vertex sets fall back to the serial scan, where
    /// thread overhead would outweigh the work. Defaults to 1024.
    ///
    /// # Parameters
    /// * parallel_threshold - the vertex count at which to go parallel
    ///
    /// # Returns
    /// * the parameter builder
    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> MstParamsBuilder {
        let valid_threshold = MstParamsBuilder::validate_input_left_bound(
            parallel_threshold,
            PARALLEL_THRESHOLD_MINIMUM,
            "parallel_threshold",
        );
        self.parallel_threshold = Some(valid_threshold);
        self
    }

    /// Finishes the building of the parameters.
    ///
    /// # Returns
    /// * The completed parameters.
    pub fn build(self) -> MstParams {
        MstParams {
            start_vertex: self.start_vertex.unwrap_or(START_VERTEX_DEFAULT),
            parallel_threshold: self.parallel_threshold.unwrap_or(PARALLEL_THRESHOLD_DEFAULT),
        }
    }

    fn validate_input_left_bound(input_param: usize, left_bound: usize, param: &str) -> usize {
        if input_param < left_bound {
            warn!("{param} ({input_param}) cannot be lower than {left_bound}. Set to {left_bound}.");
            left_bound
        } else {
            input_param
        }
    }
}
