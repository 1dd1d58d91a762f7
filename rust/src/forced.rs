//! Forced Extension (C5) and Forced Filler (C6): the two deterministic
//! post-passes that spend whatever quota the DP search left unused.

use chrono::NaiveDate;

use crate::candidates::Candidate;
use crate::models::{Break, Day};

fn day_index(days: &[Day], date: NaiveDate) -> usize {
    (date - days[0].date).num_days() as usize
}

/// Mark the DP's chosen segments as CTO/in-break and build the initial
/// break list from them, in the order C4 returned them.
pub fn mark_chosen_segments(days: &mut [Day], segments: &[Candidate]) -> Vec<Break> {
    let mut breaks = Vec::with_capacity(segments.len());
    for seg in segments {
        let mut segment_days = Vec::with_capacity(seg.total_days as usize);
        for idx in seg.start_idx..=seg.end_idx {
            let day = &mut days[idx];
            day.in_break = true;
            if !day.is_fixed_off() {
                day.is_cto = true;
            }
            segment_days.push(day.clone());
        }
        breaks.push(Break::from_days(segment_days));
    }
    breaks
}

/// C5: for every existing break, walk forward from its end date one working
/// day at a time, converting it to CTO, until the run hits a fixed-off day,
/// a day already claimed by another break, or quota runs out.
fn forced_extension(days: &mut [Day], breaks: &mut [Break], remaining: &mut u32) {
    for brk in breaks.iter_mut() {
        loop {
            if *remaining == 0 {
                break;
            }
            let end_date = match brk.end_date {
                Some(d) => d,
                None => break,
            };
            let next_idx = day_index(days, end_date) + 1;
            if next_idx >= days.len() {
                break;
            }
            if days[next_idx].in_break || days[next_idx].is_fixed_off() {
                break;
            }
            days[next_idx].is_cto = true;
            days[next_idx].in_break = true;
            brk.days.push(days[next_idx].clone());
            brk.recompute_counts();
            *remaining -= 1;
        }
    }
}

/// C6: scan the calendar left to right for runs of days not yet claimed by
/// any break. Any run containing at least one non-fixed-off day is consumed,
/// converting non-fixed-off days to CTO (and sweeping over, but not
/// recording, any fixed-off day caught inside the run) until the run ends or
/// quota is exhausted. Each consumed run becomes a new break whose `days`
/// list holds only the added CTO days.
fn forced_filler(days: &mut [Day], breaks: &mut Vec<Break>, remaining: &mut u32) {
    let mut i = 0;
    while i < days.len() && *remaining > 0 {
        if days[i].in_break {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut run_end = i;
        while run_end < days.len() && !days[run_end].in_break {
            run_end += 1;
        }

        if !days[run_start..run_end].iter().any(|d| !d.is_fixed_off()) {
            i = run_end;
            continue;
        }

        let mut added_days = Vec::new();
        let mut k = run_start;
        while k < run_end && *remaining > 0 {
            if !days[k].is_fixed_off() {
                days[k].is_cto = true;
                days[k].in_break = true;
                added_days.push(days[k].clone());
                *remaining -= 1;
            } else {
                days[k].in_break = true;
            }
            k += 1;
        }

        if !added_days.is_empty() {
            breaks.push(Break::from_days(added_days));
        }
        i = k;
    }
}

/// Run C5 then C6 in a loop until quota is exhausted or a full pass makes no
/// progress (guaranteed to terminate in at most `remaining + 1` iterations).
pub fn run_forced_passes(days: &mut [Day], breaks: &mut Vec<Break>, mut remaining: u32) -> u32 {
    loop {
        let before = remaining;
        forced_extension(days, breaks, &mut remaining);
        forced_filler(days, breaks, &mut remaining);
        if remaining == 0 || remaining == before {
            break;
        }
    }
    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn make_days(n: usize, start: NaiveDate) -> Vec<Day> {
        (0..n)
            .map(|i| {
                let date = start.checked_add_days(Days::new(i as u64)).unwrap();
                Day::new(date, false)
            })
            .collect()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_mark_chosen_segments_sets_cto_and_in_break() {
        let mut days = make_days(10, d(2025, 1, 1));
        let segments = vec![Candidate {
            start_idx: 2,
            end_idx: 4,
            total_days: 3,
            cto_used: 3,
            efficiency: 1.0,
        }];
        let breaks = mark_chosen_segments(&mut days, &segments);
        assert_eq!(breaks.len(), 1);
        assert_eq!(breaks[0].cto_days, 3);
        assert!(days[2].is_cto && days[2].in_break);
        assert!(days[3].is_cto && days[3].in_break);
        assert!(days[4].is_cto && days[4].in_break);
        assert!(!days[0].in_break);
    }

    #[test]
    fn test_forced_extension_extends_until_fixed_off() {
        let mut days = make_days(10, d(2025, 1, 1));
        days[5].is_weekend = true; // blocks extension at index 5
        let segments = vec![Candidate {
            start_idx: 0,
            end_idx: 2,
            total_days: 3,
            cto_used: 3,
            efficiency: 1.0,
        }];
        let mut breaks = mark_chosen_segments(&mut days, &segments);
        let mut remaining = 5;
        forced_extension(&mut days, &mut breaks, &mut remaining);
        // Extends idx 3, 4, then stops at idx 5 (weekend).
        assert_eq!(remaining, 3);
        assert_eq!(breaks[0].cto_days, 5);
        assert!(days[4].is_cto);
        assert!(!days[5].is_cto);
    }

    #[test]
    fn test_forced_filler_skips_fixed_off_and_builds_break() {
        let mut days = make_days(6, d(2025, 1, 1));
        days[2].is_company_off = true; // interstitial fixed-off day
        let mut breaks = Vec::new();
        let mut remaining = 3;
        forced_filler(&mut days, &mut breaks, &mut remaining);
        assert_eq!(remaining, 0);
        assert_eq!(breaks.len(), 1);
        // Only the 3 non-fixed-off days are recorded, even though the break
        // spans across the swept interstitial company-off day.
        assert_eq!(breaks[0].days.len(), 3);
        assert_eq!(breaks[0].cto_days, 3);
        assert_eq!(breaks[0].total_days, 3);
        assert_eq!(breaks[0].public_holidays, 0);
        assert_eq!(breaks[0].weekends, 0);
        assert_eq!(breaks[0].company_days_off, 0);
        assert!(days[2].in_break);
        assert!(!days[2].is_cto);
    }

    #[test]
    fn test_forced_filler_stops_when_quota_exhausted_mid_run() {
        let mut days = make_days(10, d(2025, 1, 1));
        let mut breaks = Vec::new();
        let mut remaining = 2;
        forced_filler(&mut days, &mut breaks, &mut remaining);
        assert_eq!(remaining, 0);
        assert_eq!(breaks[0].cto_days, 2);
        assert!(!days[2].in_break);
    }

    #[test]
    fn test_run_forced_passes_terminates_on_no_progress() {
        // A single-day calendar entirely fixed-off: no segments, no CTO possible.
        let mut days = make_days(1, d(2025, 1, 1));
        days[0].is_weekend = true;
        let mut breaks = Vec::new();
        let remaining = run_forced_passes(&mut days, &mut breaks, 10);
        assert_eq!(remaining, 10);
        assert!(breaks.is_empty());
    }

    #[test]
    fn test_run_forced_passes_exhausts_all_quota_when_room_available() {
        let mut days = make_days(20, d(2025, 1, 1));
        let mut breaks = Vec::new();
        let remaining = run_forced_passes(&mut days, &mut breaks, 15);
        assert_eq!(remaining, 0);
        let total_cto: u32 = breaks.iter().map(|b| b.cto_days).sum();
        assert_eq!(total_cto, 15);
    }
}
