//! Dominance Pruner (C3): drops candidates provably inferior to another
//! candidate starting at the same index, leaving a Pareto front per
//! start index sorted ascending by `start_idx`.

use rustc_hash::FxHashMap;

use crate::candidates::Candidate;

/// `b` weakly dominates `a`: at least as long a span, at least as late an
/// end, at no greater quota cost.
fn weakly_dominates(b: &Candidate, a: &Candidate) -> bool {
    b.end_idx >= a.end_idx && b.cto_used <= a.cto_used && b.total_days >= a.total_days
}

/// Drop candidates whose quota cost exceeds `quota`, then drop any candidate
/// dominated by another candidate sharing its `start_idx`. Ties where two
/// candidates weakly dominate each other are both kept (a strict scan that
/// never drops both sides of a mutual tie).
pub fn prune_dominated(candidates: Vec<Candidate>, quota: u32) -> Vec<Candidate> {
    let affordable: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| c.cto_used <= quota)
        .collect();

    let mut groups: FxHashMap<usize, Vec<Candidate>> = FxHashMap::default();
    for c in affordable {
        groups.entry(c.start_idx).or_default().push(c);
    }

    let mut survivors = Vec::new();
    for group in groups.into_values() {
        for (i, a) in group.iter().enumerate() {
            let mut dominated = false;
            for (j, b) in group.iter().enumerate() {
                if i == j {
                    continue;
                }
                if weakly_dominates(b, a) && !weakly_dominates(a, b) {
                    dominated = true;
                    break;
                }
            }
            if !dominated {
                survivors.push(*a);
            }
        }
    }

    survivors.sort_by_key(|c| c.start_idx);
    survivors
}
