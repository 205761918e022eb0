use crate::Color;
use num_traits::Float;

/// Per vertex state of Prim's algorithm, stored in an arena indexed by vertex id.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexRecord<T> {
    /// The color this vertex stands for.
    pub color: Color,
    /// The tree vertex that currently offers the cheapest connection. `None` until the
    /// vertex is first relaxed, and always `None` for the start vertex.
    pub parent: Option<usize>,
    /// Cheapest known distance to the tree. Infinite until first relaxed.
    pub distance: T,
    pub visited: bool,
}

impl<T: Float> VertexRecord<T> {
    pub(crate) fn new(color: Color) -> Self {
        VertexRecord { color, parent: None, distance: T::infinity(), visited: false }
    }

    /// Offers a connection to `candidate` at `distance`, keeping it only if it is
    /// strictly cheaper than the current best.
    pub(crate) fn relax(&mut self, candidate: usize, distance: T) {
        if distance < self.distance {
            self.distance = distance;
            self.parent = Some(candidate);
        }
    }
}

/// An edge of the finished spanning tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MstEdge<T> {
    pub parent: usize,
    pub child: usize,
    pub distance: T,
}
