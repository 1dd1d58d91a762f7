//! Candidate Generator (C2): enumerates every contiguous window of allowed
//! lengths and scores its quota cost.

use crate::models::Day;

/// A proposed break, before dominance pruning and DP selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub start_idx: usize,
    pub end_idx: usize,
    pub total_days: u32,
    pub cto_used: u32,
    /// Informational only; not consumed by pruning or search.
    pub efficiency: f64,
}

impl Candidate {
    fn new(start_idx: usize, end_idx: usize, cto_used: u32) -> Self {
        let total_days = (end_idx - start_idx + 1) as u32;
        Self {
            start_idx,
            end_idx,
            total_days,
            cto_used,
            efficiency: total_days as f64 / cto_used as f64,
        }
    }
}

/// Generate all candidates of length `L` in `[min_len, max_len]` starting at
/// every index for which the window fits in the day array and spends at
/// least one quota day.
pub fn generate_candidates(days: &[Day], min_len: u32, max_len: u32) -> Vec<Candidate> {
    let n = days.len();
    let mut candidates = Vec::new();

    for len in min_len..=max_len {
        let len_usize = len as usize;
        if len_usize == 0 || len_usize > n {
            continue;
        }
        for start_idx in 0..=(n - len_usize) {
            let end_idx = start_idx + len_usize - 1;
            let cto_used = days[start_idx..=end_idx]
                .iter()
                .filter(|d| !d.is_fixed_off())
                .count() as u32;
            if cto_used == 0 {
                continue;
            }
            candidates.push(Candidate::new(start_idx, end_idx, cto_used));
        }
    }

    candidates
}

/// Generate candidates for every `(min_len, max_len)` window, concatenating
/// the results (used for the `balanced` strategy, which unions four windows).
pub fn generate_candidates_for_windows(days: &[Day], windows: &[(u32, u32)]) -> Vec<Candidate> {
    windows
        .iter()
        .flat_map(|&(min_len, max_len)| generate_candidates(days, min_len, max_len))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_days(n: usize) -> Vec<Day> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let date = start.checked_add_days(chrono::Days::new(i as u64)).unwrap();
                use chrono::Datelike;
                let is_weekend =
                    matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun);
                Day::new(date, is_weekend)
            })
            .collect()
    }

    #[test]
    fn test_generates_expected_count_for_window() {
        let days = make_days(10);
        // len=3: start_idx in 0..=7 -> 8 candidates, all workdays (no weekends
        // flagged on purpose here since make_days uses real dates; just
        // assert cto_used <= total_days invariant holds).
        let candidates = generate_candidates(&days, 3, 3);
        assert_eq!(candidates.len(), 8);
        for c in &candidates {
            assert_eq!(c.total_days, 3);
            assert!(c.cto_used >= 1 && c.cto_used <= c.total_days);
        }
    }

    #[test]
    fn test_drops_all_fixed_off_window() {
        let mut days = make_days(4);
        for day in &mut days {
            day.is_company_off = true;
        }
        let candidates = generate_candidates(&days, 2, 2);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_window_longer_than_horizon_yields_nothing() {
        let days = make_days(3);
        let candidates = generate_candidates(&days, 10, 15);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_balanced_union_concatenates_four_windows() {
        let days = make_days(20);
        let windows: &[(u32, u32)] = &[(3, 4), (5, 6), (7, 9), (10, 15)];
        let all = generate_candidates_for_windows(&days, windows);
        let expected: usize = windows
            .iter()
            .map(|&(min, max)| generate_candidates(&days, min, max).len())
            .sum();
        assert_eq!(all.len(), expected);
    }

    #[test]
    fn test_efficiency_is_informational_ratio() {
        let days = make_days(5);
        let candidates = generate_candidates(&days, 5, 5);
        let c = candidates[0];
        assert!((c.efficiency - (c.total_days as f64 / c.cto_used as f64)).abs() < 1e-9);
    }
}
