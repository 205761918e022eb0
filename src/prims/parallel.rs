#![cfg(feature = "parallel")]
use super::serial::PrimsSerial;
use super::{admit, seed_records};
use crate::distance::euclidean_distance;
use crate::{Color, MstError, MstParams, SpanningTree};
use num_traits::Float;
use rayon::prelude::*;
use std::cmp::Ordering;

// Smallest slice of the record arena handed to one worker
const RELAX_CHUNK_MIN: usize = 256;

pub(crate) struct PrimsPar<'a> {
    colors: &'a [Color],
    params: &'a MstParams,
}

impl<'a> PrimsPar<'a> {
    pub(crate) fn new(colors: &'a [Color], params: &'a MstParams) -> Self {
        Self { colors, params }
    }

    /// Same rounds as the serial version, split in two phases. Workers relax disjoint slices
    /// of the arena, then a reduction picks the cheapest unvisited vertex once every write
    /// has landed.
    pub(crate) fn grow_tree<T: Float + Send + Sync>(&self) -> Result<SpanningTree<T>, MstError> {
        let n_vertices = self.colors.len();
        if n_vertices < self.params.parallel_threshold {
            return PrimsSerial::new(self.colors, self.params).grow_tree();
        }
        let start_vertex = self.params.start_vertex;
        let mut records = seed_records::<T>(self.colors, start_vertex)?;
        let mut latest = start_vertex;
        let mut total_weight = T::zero();

        for in_tree in 1..n_vertices {
            let latest_color = records[latest].color;

            records
                .par_iter_mut()
                .enumerate()
                .with_min_len(RELAX_CHUNK_MIN)
                .filter(|(id, record)| !record.visited && *id != latest)
                .for_each(|(_, record)| {
                    record.relax(latest, euclidean_distance(&latest_color, &record.color));
                });

            // min_by keeps the first of equal minima, so ties go to the lowest id
            let next = records
                .par_iter()
                .enumerate()
                .with_min_len(RELAX_CHUNK_MIN)
                .filter(|(_, record)| !record.visited && record.distance.is_finite())
                .min_by(|(_, a), (_, b)| {
                    a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal)
                })
                .map(|(id, record)| (id, record.distance));

            let (next, min_dist) = admit(&mut records, next, in_tree)?;
            total_weight = total_weight + min_dist;
            latest = next;
        }

        Ok(SpanningTree::new(total_weight, records, start_vertex))
    }
}
