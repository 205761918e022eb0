use crate::data_wrappers::VertexRecord;
use crate::{Color, MstError};
use num_traits::Float;

#[cfg(feature = "parallel")]
pub(super) mod parallel;
pub(super) mod serial;

/// Builds the record arena, one unvisited record per color, and seeds the start vertex.
pub(crate) fn seed_records<T: Float>(
    colors: &[Color],
    start_vertex: usize,
) -> Result<Vec<VertexRecord<T>>, MstError> {
    if start_vertex >= colors.len() {
        return Err(MstError::StartVertexOutOfBounds {
            start_vertex,
            n_vertices: colors.len(),
        });
    }
    let mut records: Vec<VertexRecord<T>> =
        colors.iter().map(|color| VertexRecord::new(*color)).collect();
    let start = &mut records[start_vertex];
    start.visited = true;
    start.distance = T::zero();
    Ok(records)
}

/// The cheapest unvisited vertex with a finite distance to the tree. Ties go to the lowest id.
pub(crate) fn select_nearest<T: Float>(records: &[VertexRecord<T>]) -> Option<(usize, T)> {
    let mut nearest: Option<(usize, T)> = None;
    for (id, record) in records.iter().enumerate() {
        if record.visited || !record.distance.is_finite() {
            continue;
        }
        match nearest {
            Some((_, min_dist)) if record.distance >= min_dist => {}
            _ => nearest = Some((id, record.distance)),
        }
    }
    nearest
}

/// Marks the selected vertex as part of the tree. `None` means nothing outside the tree is
/// reachable, which is fatal on a complete graph.
pub(crate) fn admit<T: Float>(
    records: &mut [VertexRecord<T>],
    nearest: Option<(usize, T)>,
    in_tree: usize,
) -> Result<(usize, T), MstError> {
    let (next, distance) = nearest.ok_or(MstError::Disconnected {
        in_tree,
        unreached: records.len() - in_tree,
    })?;
    records[next].visited = true;
    Ok((next, distance))
}
