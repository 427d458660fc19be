use std::collections::{HashMap, HashSet};

use crate::error::TopologyError;
use crate::geometry::Side;
use crate::topology::Face;

/// Traces the closed loop(s) of on-plane vertices where the cut leaves the
/// inside candidate faces open.
///
/// A directed edge of the inside candidates whose twin is missing lies on
/// the plane; the section face runs along it the other way. Walking those
/// reversed edges head to tail closes each loop. Every loop is wound so that
/// it faces along the plane normal when seen from the inside half.
///
/// Loops with fewer than three vertices enclose nothing and are skipped.
pub(super) fn find_sections(
    inside_faces: &[Face],
    values: &[f64],
) -> Result<Vec<Vec<usize>>, TopologyError> {
    let directed: HashSet<(usize, usize)> = inside_faces.iter().flat_map(Face::edges).collect();
    let open: Vec<(usize, usize)> = inside_faces
        .iter()
        .flat_map(Face::edges)
        .filter(|&(a, b)| !directed.contains(&(b, a)))
        .map(|(a, b)| (b, a))
        .collect();
    if open.is_empty() {
        return Err(TopologyError::NoSection);
    }

    let mut outgoing: HashMap<usize, Vec<usize>> = HashMap::new();
    for (k, &(from, _)) in open.iter().enumerate() {
        let value = values[from];
        if Side::of_value(value) != Side::Boundary {
            tracing::error_span!("section", ?open).in_scope(|| {
                tracing::error!(vertex = from, value, "open edge off the cut plane");
            });
            return Err(TopologyError::SectionOffPlane {
                vertex: from,
                value,
            });
        }
        outgoing.entry(from).or_default().push(k);
    }

    let mut used = vec![false; open.len()];
    let mut loops = Vec::new();
    for first in 0..open.len() {
        if used[first] {
            continue;
        }
        used[first] = true;
        let (start, mut cur) = open[first];
        let mut section = vec![start];
        while cur != start {
            section.push(cur);
            let next = outgoing
                .get(&cur)
                .and_then(|edges| edges.iter().copied().find(|&k| !used[k]))
                .ok_or(TopologyError::SectionNotClosed {
                    start,
                    stuck_at: cur,
                })?;
            used[next] = true;
            cur = open[next].1;
        }
        if section.len() < 3 {
            tracing::debug!(?section, "skipping degenerate section loop");
            continue;
        }
        loops.push(section);
    }

    if loops.is_empty() {
        return Err(TopologyError::NoSection);
    }
    Ok(loops)
}
