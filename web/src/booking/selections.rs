use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use shared_types::Slot;

use crate::calendar::slot_day_and_hours;

/// Hour ranges the user confirmed in the slot popup, keyed by calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmedSelections {
    by_day: BTreeMap<NaiveDate, Vec<String>>,
}

impl ConfirmedSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the range was already confirmed for that day.
    pub fn confirm(&mut self, day: NaiveDate, hours_label: impl Into<String>) -> bool {
        let hours_label = hours_label.into();
        let labels = self.by_day.entry(day).or_default();
        if labels.contains(&hours_label) {
            return false;
        }
        labels.push(hours_label);
        true
    }

    pub fn remove(&mut self, day: NaiveDate, hours_label: &str) -> bool {
        let Some(labels) = self.by_day.get_mut(&day) else {
            return false;
        };
        let before = labels.len();
        labels.retain(|label| label != hours_label);
        let removed = labels.len() != before;
        if labels.is_empty() {
            self.by_day.remove(&day);
        }
        removed
    }

    pub fn for_day(&self, day: NaiveDate) -> &[String] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of confirmed hour ranges across all days.
    pub fn len(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_day.clear();
    }

    /// Keeps only the ranges some slot still offers. Returns how many were dropped.
    pub fn retain_available(&mut self, slots: &[Slot]) -> usize {
        let offered: HashSet<(NaiveDate, String)> = slots
            .iter()
            .filter_map(|slot| slot_day_and_hours(slot).ok())
            .map(|(day, hours)| (day, hours.label()))
            .collect();

        let before = self.len();
        self.by_day.retain(|day, labels| {
            labels.retain(|label| offered.contains(&(*day, label.clone())));
            !labels.is_empty()
        });
        before - self.len()
    }

    /// (day, "HH:MM-HH:MM") pairs, days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> + '_ {
        self.by_day
            .iter()
            .flat_map(|(day, labels)| labels.iter().map(move |label| (*day, label.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn confirm_ignores_duplicates() {
        let mut selections = ConfirmedSelections::new();
        assert!(selections.confirm(date(2025, 2, 26), "09:00-10:00"));
        assert!(!selections.confirm(date(2025, 2, 26), "09:00-10:00"));
        assert!(selections.confirm(date(2025, 2, 26), "10:00-10:30"));
        assert_eq!(selections.len(), 2);
        assert_eq!(
            selections.for_day(date(2025, 2, 26)),
            &["09:00-10:00".to_string(), "10:00-10:30".to_string()]
        );
    }

    #[test]
    fn same_day_number_in_different_months_stays_separate() {
        let mut selections = ConfirmedSelections::new();
        selections.confirm(date(2025, 2, 3), "09:00-10:00");
        selections.confirm(date(2025, 3, 3), "09:00-10:00");
        assert_eq!(selections.for_day(date(2025, 2, 3)).len(), 1);
        assert_eq!(selections.for_day(date(2025, 3, 3)).len(), 1);
        assert_eq!(selections.len(), 2);
    }

    #[test]
    fn removing_last_label_drops_the_day() {
        let mut selections = ConfirmedSelections::new();
        selections.confirm(date(2025, 2, 26), "09:00-10:00");
        assert!(!selections.remove(date(2025, 2, 26), "11:00-12:00"));
        assert!(selections.remove(date(2025, 2, 26), "09:00-10:00"));
        assert!(selections.is_empty());
        assert!(selections.for_day(date(2025, 2, 26)).is_empty());
    }

    #[test]
    fn iter_walks_days_in_order() {
        let mut selections = ConfirmedSelections::new();
        selections.confirm(date(2025, 3, 1), "08:00-08:30");
        selections.confirm(date(2025, 2, 27), "09:00-09:30");
        let pairs: Vec<_> = selections.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (date(2025, 2, 27), "09:00-09:30"),
                (date(2025, 3, 1), "08:00-08:30")
            ]
        );
        selections.clear();
        assert_eq!(selections.iter().count(), 0);
    }

    #[test]
    fn new_search_drops_ranges_no_longer_offered() {
        let mut selections = ConfirmedSelections::new();
        selections.confirm(date(2025, 2, 26), "09:00-10:00");
        selections.confirm(date(2025, 2, 26), "11:00-12:00");
        selections.confirm(date(2025, 2, 27), "09:00-10:00");

        let slots = vec![Slot {
            id: 1,
            start_time: "2025-02-26T09:00:00".into(),
            end_time: "2025-02-26T10:00:00".into(),
        }];
        assert_eq!(selections.retain_available(&slots), 2);
        assert_eq!(
            selections.iter().collect::<Vec<_>>(),
            vec![(date(2025, 2, 26), "09:00-10:00")]
        );
        assert_eq!(selections.retain_available(&slots), 0);
        assert_eq!(selections.retain_available(&[]), 1);
        assert!(selections.is_empty());
    }
}
