//! Statistics & Assembly (C7): orders the final break list and rolls up
//! totals.

use crate::models::{Break, Stats};

/// Sort breaks by `start_date` and sum their per-category counters into a
/// `Stats` record.
///
/// `total_extended_weekends` is a known quirk (SPEC_FULL.md §9): it mirrors
/// `total_cto_days` rather than measuring anything distinct, and is kept
/// bug-compatible rather than removed or renamed.
pub fn assemble(mut breaks: Vec<Break>) -> (Vec<Break>, Stats) {
    breaks.sort_by_key(|b| b.start_date);

    let mut stats = Stats::default();
    for brk in &breaks {
        stats.total_cto_days += brk.cto_days;
        stats.total_public_holidays += brk.public_holidays;
        stats.total_weekends += brk.weekends;
        stats.total_company_days_off += brk.company_days_off;
        stats.total_days_off += brk.total_days;
    }
    stats.total_extended_weekends = stats.total_cto_days;

    (breaks, stats)
}
