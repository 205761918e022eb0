use super::{admit, seed_records, select_nearest};
use crate::distance::euclidean_distance;
use crate::{Color, MstError, MstParams, SpanningTree};
use num_traits::Float;

pub(crate) struct PrimsSerial<'a> {
    colors: &'a [Color],
    start_vertex: usize,
}

impl<'a> PrimsSerial<'a> {
    pub(crate) fn new(colors: &'a [Color], params: &MstParams) -> Self {
        Self { colors, start_vertex: params.start_vertex }
    }

    /// Dense Prim's: each round relaxes every vertex outside the tree against the vertex added
    /// last, then admits the cheapest one.
    pub(crate) fn grow_tree<T: Float>(&self) -> Result<SpanningTree<T>, MstError> {
        let n_vertices = self.colors.len();
        if n_vertices == 0 {
            return Ok(SpanningTree::empty());
        }
        let mut records = seed_records::<T>(self.colors, self.start_vertex)?;
        let mut latest = self.start_vertex;
        let mut total_weight = T::zero();

        for in_tree in 1..n_vertices {
            let latest_color = records[latest].color;
            for (id, record) in records.iter_mut().enumerate() {
                if record.visited || id == latest {
                    continue;
                }
                record.relax(latest, euclidean_distance(&latest_color, &record.color));
            }

            let nearest = select_nearest(&records);
            let (next, min_dist) = admit(&mut records, nearest, in_tree)?;
            total_weight = total_weight + min_dist;
            latest = next;
        }

        Ok(SpanningTree::new(total_weight, records, self.start_vertex))
    }
}
