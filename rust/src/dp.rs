//! DP Search (C4): memoised top-down search for a non-overlapping subset of
//! candidates that maximises total days off within quota, honouring the
//! style's spacing rule.

use rustc_hash::FxHashMap;

use crate::candidates::Candidate;

/// Packed, integer memo key per SPEC_FULL.md §4.4's implementation note.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct MemoKey {
    idx: u16,
    last_end: i16,
    used: u16,
}

/// Result of the DP search: the segments chosen (in ascending `start_idx`
/// order) and the totals they imply.
#[derive(Clone, Debug, Default)]
pub struct DpResult {
    pub total_days_off: u32,
    pub segments: Vec<Candidate>,
    pub quota_spent: u32,
}

/// Find the first index at or after `from` whose `start_idx >= required_start`.
fn lower_bound(candidates: &[Candidate], from: usize, required_start: i64) -> usize {
    let mut lo = from;
    let mut hi = candidates.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if (candidates[mid].start_idx as i64) < required_start {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Compute (and memoise) the best achievable total-days-off from state
/// `(idx, last_end, used)`, along with which candidate index (if any) to
/// take to achieve it. Ties are broken in favour of the earlier-starting
/// candidate: the comparison is strict (`>`), so the first candidate
/// (ascending `start_idx`) reaching the optimum is the one recorded.
fn solve(
    idx: usize,
    last_end: i64,
    used: u32,
    candidates: &[Candidate],
    quota: u32,
    spacing: i64,
    memo: &mut FxHashMap<MemoKey, (u32, Option<usize>)>,
) -> (u32, Option<usize>) {
    let key = MemoKey {
        idx: idx as u16,
        last_end: last_end as i16,
        used: used as u16,
    };
    if let Some(&cached) = memo.get(&key) {
        return cached;
    }

    let required_start = if last_end < 0 { 0 } else { last_end + spacing };
    let start_pos = lower_bound(candidates, idx, required_start);

    let mut best_total = 0u32;
    let mut best_choice: Option<usize> = None;

    for k in start_pos..candidates.len() {
        let cand = &candidates[k];
        if (cand.start_idx as i64) < required_start {
            continue;
        }
        if used + cand.cto_used > quota {
            continue;
        }
        let (sub_total, _) = solve(
            k + 1,
            cand.end_idx as i64,
            used + cand.cto_used,
            candidates,
            quota,
            spacing,
            memo,
        );
        let total = cand.total_days + sub_total;
        if total > best_total {
            best_total = total;
            best_choice = Some(k);
        }
    }

    let result = (best_total, best_choice);
    memo.insert(key, result);
    result
}

/// Run the DP search over a pruned, ascending-`start_idx` candidate list.
pub fn dp_search(candidates: &[Candidate], quota: u32, spacing: i64) -> DpResult {
    let mut memo = FxHashMap::default();
    let (total_days_off, _) = solve(0, -1, 0, candidates, quota, spacing, &mut memo);

    let mut segments = Vec::new();
    let mut quota_spent = 0u32;
    let mut idx = 0usize;
    let mut last_end: i64 = -1;
    let mut used = 0u32;

    loop {
        let key = MemoKey {
            idx: idx as u16,
            last_end: last_end as i16,
            used: used as u16,
        };
        let (_, choice) = *memo.get(&key).expect("state was visited during solve()");
        match choice {
            Some(k) => {
                let cand = candidates[k];
                segments.push(cand);
                quota_spent += cand.cto_used;
                idx = k + 1;
                last_end = cand.end_idx as i64;
                used += cand.cto_used;
            }
            None => break,
        }
    }

    DpResult {
        total_days_off,
        segments,
        quota_spent,
    }
}
