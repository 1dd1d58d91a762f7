//! Calendar Builder (C1): materialises the planning horizon as an ordered
//! day array with weekend/holiday/company-off flags resolved.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{CompanyOffRule, Day, Holiday};

/// Build the day array covering `[start_date, Dec 31 of year]` inclusive.
///
/// Holiday and company-off lookups are first-match: the first entry in each
/// list whose date/rule matches wins, and later matching entries are
/// silently ignored. A recurring rule with an inverted interval
/// (`start_date > end_date`) matches nothing.
pub fn build_calendar(
    start_date: NaiveDate,
    year: i32,
    holidays: &[Holiday],
    company_off: &[CompanyOffRule],
) -> Vec<Day> {
    let end_date = NaiveDate::from_ymd_opt(year, 12, 31).expect("valid year");

    let mut days = Vec::new();
    let mut cursor = start_date;
    while cursor <= end_date {
        let is_weekend = matches!(cursor.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun);
        let mut day = Day::new(cursor, is_weekend);

        if let Some(holiday) = holidays.iter().find(|h| h.date == cursor) {
            day.is_public_holiday = true;
            day.holiday_name = Some(holiday.name.clone());
        }

        if let Some(name) = resolve_company_off(cursor, company_off) {
            day.is_company_off = true;
            day.company_name = Some(name);
        }

        days.push(day);
        cursor = cursor.checked_add_days(Days::new(1)).expect("in range");
    }

    days
}

fn resolve_company_off(date: NaiveDate, rules: &[CompanyOffRule]) -> Option<String> {
    for rule in rules {
        match rule {
            CompanyOffRule::Single { date: d, name } if *d == date => {
                return Some(name.clone());
            }
            CompanyOffRule::Recurring {
                weekday,
                start_date,
                end_date,
                name,
            } if start_date <= end_date
                && *start_date <= date
                && date <= *end_date
                && date.weekday() == *weekday =>
            {
                return Some(name.clone());
            }
            _ => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_full_year_length() {
        let days = build_calendar(d(2025, 1, 1), 2025, &[], &[]);
        assert_eq!(days.len(), 365);
        assert_eq!(days[0].date, d(2025, 1, 1));
        assert_eq!(days.last().unwrap().date, d(2025, 12, 31));
    }

    #[test]
    fn test_truncated_start_for_current_year() {
        let days = build_calendar(d(2025, 6, 15), 2025, &[], &[]);
        assert_eq!(days[0].date, d(2025, 6, 15));
        assert_eq!(days.last().unwrap().date, d(2025, 12, 31));
    }

    #[test]
    fn test_weekend_flag() {
        let days = build_calendar(d(2025, 1, 1), 2025, &[], &[]);
        // 2025-01-04 is a Saturday.
        let sat = days.iter().find(|day| day.date == d(2025, 1, 4)).unwrap();
        assert!(sat.is_weekend);
        let wed = days.iter().find(|day| day.date == d(2025, 1, 1)).unwrap();
        assert!(!wed.is_weekend);
    }

    #[test]
    fn test_holiday_first_match_wins() {
        let holidays = vec![
            Holiday::new(d(2025, 7, 4), "Independence Day".to_string()),
            Holiday::new(d(2025, 7, 4), "Duplicate Entry".to_string()),
        ];
        let days = build_calendar(d(2025, 1, 1), 2025, &holidays, &[]);
        let day = days.iter().find(|day| day.date == d(2025, 7, 4)).unwrap();
        assert!(day.is_public_holiday);
        assert_eq!(day.holiday_name.as_deref(), Some("Independence Day"));
    }

    #[test]
    fn test_weekend_and_holiday_both_set() {
        // 2025-11-01 is a Saturday.
        let holidays = vec![Holiday::new(d(2025, 11, 1), "Made Up".to_string())];
        let days = build_calendar(d(2025, 1, 1), 2025, &holidays, &[]);
        let day = days.iter().find(|day| day.date == d(2025, 11, 1)).unwrap();
        assert!(day.is_weekend);
        assert!(day.is_public_holiday);
        assert!(day.is_fixed_off());
        assert!(!day.is_cto);
    }

    #[test]
    fn test_recurring_company_off_matches_weekday_in_range() {
        // Every Friday in January 2025: 3, 10, 17, 24, 31.
        let rules = vec![CompanyOffRule::Recurring {
            weekday: chrono::Weekday::Fri,
            start_date: d(2025, 1, 1),
            end_date: d(2025, 1, 31),
            name: "Summer Fridays".to_string(),
        }];
        let days = build_calendar(d(2025, 1, 1), 2025, &[], &rules);
        let fridays: Vec<_> = days
            .iter()
            .filter(|day| day.is_company_off)
            .map(|day| day.date)
            .collect();
        assert_eq!(
            fridays,
            vec![d(2025, 1, 3), d(2025, 1, 10), d(2025, 1, 17), d(2025, 1, 24), d(2025, 1, 31)]
        );
    }

    #[test]
    fn test_recurring_inverted_range_matches_nothing() {
        let rules = vec![CompanyOffRule::Recurring {
            weekday: chrono::Weekday::Fri,
            start_date: d(2025, 1, 31),
            end_date: d(2025, 1, 1),
            name: "Broken Rule".to_string(),
        }];
        let days = build_calendar(d(2025, 1, 1), 2025, &[], &rules);
        assert!(days.iter().all(|day| !day.is_company_off));
    }

    #[test]
    fn test_single_company_off_exact_match() {
        let rules = vec![CompanyOffRule::Single {
            date: d(2025, 12, 24),
            name: "Office Closure".to_string(),
        }];
        let days = build_calendar(d(2025, 1, 1), 2025, &[], &rules);
        let day = days.iter().find(|day| day.date == d(2025, 12, 24)).unwrap();
        assert!(day.is_company_off);
        assert_eq!(day.company_name.as_deref(), Some("Office Closure"));
    }
}
