use chrono::{Datelike, NaiveDate};
use shared_types::Slot;
use web::booking::{prepare_submission, ConfirmedSelections};
use web::calendar::{build_month_grid, shift_month};
use web::error::BookingError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Every month from 2023 through 2027.
fn months() -> impl Iterator<Item = NaiveDate> {
    (0..60).map(|offset| shift_month(date(2023, 1, 1), offset))
}

#[test]
fn grid_length_is_always_a_multiple_of_seven() {
    let today = date(2026, 10, 18);
    for month in months() {
        let days = build_month_grid(today, month, &[]);
        assert_eq!(days.len() % 7, 0, "{}", month);
        assert!(days.len() >= 28 && days.len() <= 42, "{}", month);
        assert_eq!(days[0].date.weekday().num_days_from_sunday(), 0, "{}", month);
    }
}

#[test]
fn grid_is_contiguous_and_covers_the_month() {
    for month in months() {
        let days = build_month_grid(date(2025, 1, 1), month, &[]);
        for pair in days.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        let in_month: Vec<_> = days.iter().filter(|d| d.is_current_month).collect();
        assert_eq!(in_month.first().map(|d| d.number), Some(1));
        assert!(in_month.iter().all(|d| d.date.month() == month.month()));
    }
}

#[test]
fn exactly_one_focus_when_today_is_visible() {
    for month in months() {
        for today in [date(2024, 2, 29), date(2025, 12, 31), date(2026, 1, 1), date(2026, 10, 18)] {
            let days = build_month_grid(today, month, &[]);
            let visible = days.first().unwrap().date <= today && today <= days.last().unwrap().date;
            let focused = days.iter().filter(|d| d.is_focus).count();
            assert_eq!(focused, usize::from(visible), "month {} today {}", month, today);
        }
    }
}

#[test]
fn slot_appears_only_under_its_own_day() {
    let slots = vec![
        Slot {
            id: 1,
            start_time: "2025-12-31T18:00:00".into(),
            end_time: "2025-12-31T18:30:00".into(),
        },
        Slot {
            id: 2,
            start_time: "2026-01-01T09:00:00".into(),
            end_time: "2026-01-01T09:30:00".into(),
        },
    ];

    for month in [date(2025, 12, 1), date(2026, 1, 1)] {
        let days = build_month_grid(date(2025, 12, 1), month, &slots);
        for day in &days {
            let labels: Vec<_> = day.available_hours.iter().map(|h| h.label()).collect();
            if day.date == date(2025, 12, 31) {
                assert_eq!(labels, vec!["18:00-18:30"]);
            } else if day.date == date(2026, 1, 1) {
                assert_eq!(labels, vec!["09:00-09:30"]);
            } else {
                assert!(labels.is_empty(), "{}", day.date);
                assert!(!day.is_available);
            }
        }
    }
}

#[test]
fn nothing_confirmed_means_nothing_to_send() {
    let slots = vec![Slot {
        id: 9,
        start_time: "2026-10-20T10:00:00".into(),
        end_time: "2026-10-20T10:30:00".into(),
    }];
    assert_eq!(
        prepare_submission(&ConfirmedSelections::new(), &slots, 1),
        Err(BookingError::NothingToSubmit)
    );

    let mut selections = ConfirmedSelections::new();
    selections.confirm(date(2026, 10, 20), "10:00-10:30");
    let pending = prepare_submission(&selections, &slots, 1).unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].request.id, 9);
    assert_eq!(pending[0].request.start_time, "2026-10-20T10:00:00.000");
}
