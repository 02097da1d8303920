//! Local distance check used at every search node.

use super::types::Label;

/// True if edge `i` keeps at least `threshold` distance to every labeled
/// neighbour in `adjacency`. Unlabeled entries impose nothing; the pair is
/// checked again once the later of the two edges gets its label.
#[inline]
pub fn satisfies(
    adjacency: &[Vec<usize>],
    assignment: &[Option<Label>],
    threshold: usize,
    i: usize,
) -> bool {
    let Some(li) = assignment[i] else {
        return true;
    };
    adjacency[i].iter().all(|&j| match assignment[j] {
        Some(lj) => li.abs_diff(lj) >= threshold,
        None => true,
    })
}
