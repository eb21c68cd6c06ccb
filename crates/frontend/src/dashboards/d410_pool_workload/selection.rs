//! Selection state behind the four synchronized wheels.

use crate::shared::date_utils;
use chrono::NaiveDate;
use contracts::dashboards::d410_pool_workload::PoolWorkloadSlot;
use contracts::shared::schedule::ScheduleConfig;
use std::collections::{BTreeSet, HashSet};

/// Метка часа-перерыва на колесе времени
pub const BREAK_LABEL: &str = "ПЕРЕРЫВ";

/// Domain state of the wheel selector: the loaded slot snapshot, the date
/// index and the selected hour, plus every derived value the wheels render.
///
/// Plain data on purpose: the dashboard keeps it inside an `RwSignal` and
/// mutates it through `update`, so each transition (including hour repair)
/// completes synchronously before the next render reads the getters.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSelection {
    config: ScheduleConfig,
    slots: Vec<PoolWorkloadSlot>,
    dates: Vec<NaiveDate>,
    date_index: usize,
    selected_hour: Option<u32>,
}

impl SlotSelection {
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            dates: Vec::new(),
            date_index: 0,
            selected_hour: None,
        }
    }

    /// Replace the slot set wholesale (every successful fetch does this).
    ///
    /// The hour initializes exactly once, to the smallest hour present across
    /// all loaded slots; afterwards the selection persists across re-fetches
    /// and is only repaired.
    pub fn load_slots(&mut self, slots: Vec<PoolWorkloadSlot>) {
        let mut dates: Vec<NaiveDate> = slots.iter().map(|s| s.date).collect();
        dates.sort();
        dates.dedup();
        self.slots = slots;
        self.dates = dates;

        if self.dates.is_empty() {
            self.date_index = 0;
            self.selected_hour = None;
            return;
        }
        // a shrunken re-fetch must not leave the index past the end
        self.date_index = self.date_index.min(self.dates.len() - 1);
        if self.selected_hour.is_none() {
            self.selected_hour = self.slots.iter().map(|s| s.hour).min();
        }
        self.repair();
    }

    /// Select a date by wheel index. The hour is not touched directly;
    /// repair runs before this returns, so derived state is consistent by
    /// the time the wheels re-render.
    pub fn set_date_index(&mut self, index: usize) {
        if self.dates.is_empty() {
            return;
        }
        let index = index.min(self.dates.len() - 1);
        if index == self.date_index {
            return;
        }
        self.date_index = index;
        self.repair();
    }

    /// Select an hour directly (wheels translate index -> hour beforehand).
    pub fn set_selected_hour(&mut self, hour: u32) {
        if self.selected_hour == Some(hour) {
            return;
        }
        self.selected_hour = Some(hour);
    }

    /// Nearest-hour repair after the selected hour disappears for the
    /// current date. Ascending scan with strict `<` keeps ties on the
    /// smaller hour. A date without any hours leaves the selection in
    /// place; `None` only ever means an empty slot set.
    fn repair(&mut self) {
        let Some(selected) = self.selected_hour else {
            return;
        };
        let available = self.available_hours();
        if available.contains(&selected) {
            return;
        }
        if available.is_empty() {
            if self.slots.is_empty() {
                self.selected_hour = None;
            }
            return;
        }
        let mut nearest = None;
        let mut best = u32::MAX;
        for &hour in &available {
            let diff = selected.abs_diff(hour);
            if diff < best {
                best = diff;
                nearest = Some(hour);
            }
        }
        self.selected_hour = nearest;
    }

    /// Hours present in the data for the current date
    fn available_hours(&self) -> BTreeSet<u32> {
        match self.current_date() {
            Some(date) => self
                .slots
                .iter()
                .filter(|s| s.date == date)
                .map(|s| s.hour)
                .collect(),
            None => BTreeSet::new(),
        }
    }

    fn slot_at(&self, date: NaiveDate, hour: u32) -> Option<&PoolWorkloadSlot> {
        self.slots.iter().find(|s| s.date == date && s.hour == hour)
    }

    // -- derived getters ----------------------------------------------------

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn has_data(&self) -> bool {
        !self.dates.is_empty()
    }

    pub fn date_index(&self) -> usize {
        self.date_index
    }

    pub fn selected_hour(&self) -> Option<u32> {
        self.selected_hour
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.dates.get(self.date_index).copied()
    }

    /// Hour on the axis for a wheel index
    pub fn hour_for_index(&self, index: usize) -> Option<u32> {
        self.config.hours().nth(index)
    }

    /// Position of the selected hour on the fixed axis, 0 when unset or
    /// outside the axis
    pub fn hour_wheel_index(&self) -> usize {
        self.selected_hour
            .and_then(|h| self.config.hour_index(h))
            .unwrap_or(0)
    }

    /// Axis positions with no slot for the current date (all of them when
    /// nothing is loaded). Break status does not factor in here.
    pub fn disabled_indices(&self) -> HashSet<usize> {
        let available = self.available_hours();
        self.config
            .hours()
            .enumerate()
            .filter(|(_, hour)| !available.contains(hour))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Axis positions that are the break hour of the current date
    pub fn break_indices(&self) -> HashSet<usize> {
        match self.current_date() {
            Some(date) => self
                .config
                .hours()
                .enumerate()
                .filter(|&(_, hour)| self.config.is_break(date, hour))
                .map(|(idx, _)| idx)
                .collect(),
            None => HashSet::new(),
        }
    }

    pub fn date_labels(&self) -> Vec<String> {
        self.dates
            .iter()
            .map(|d| date_utils::format_date_ru_long(*d))
            .collect()
    }

    /// Time-wheel labels; the break hour renders as the break marker no
    /// matter what the data says
    pub fn time_labels(&self) -> Vec<String> {
        let date = self.current_date();
        self.config
            .hours()
            .map(|hour| match date {
                Some(d) if self.config.is_break(d, hour) => BREAK_LABEL.to_string(),
                _ => date_utils::format_hour(hour),
            })
            .collect()
    }

    pub fn lane_labels(&self) -> Vec<String> {
        self.count_labels(|slot| slot.free_lanes)
    }

    pub fn place_labels(&self) -> Vec<String> {
        self.count_labels(|slot| slot.free_places)
    }

    /// Per-hour counts aligned to the axis; break hours and missing slots
    /// both render as zero
    fn count_labels(&self, count: impl Fn(&PoolWorkloadSlot) -> u32) -> Vec<String> {
        let date = self.current_date();
        self.config
            .hours()
            .map(|hour| {
                let value = match date {
                    Some(d) if !self.config.is_break(d, hour) => {
                        self.slot_at(d, hour).map(&count).unwrap_or(0)
                    }
                    _ => 0,
                };
                value.to_string()
            })
            .collect()
    }

    /// Slot matching the current date and selected hour, if any
    pub fn active_slot(&self) -> Option<&PoolWorkloadSlot> {
        let date = self.current_date()?;
        let hour = self.selected_hour?;
        self.slot_at(date, hour)
    }

    pub fn selected_is_break(&self) -> bool {
        matches!(
            (self.current_date(), self.selected_hour),
            (Some(date), Some(hour)) if self.config.is_break(date, hour)
        )
    }

    /// Booking is permitted only for a real slot outside the break
    pub fn can_book(&self) -> bool {
        self.active_slot().is_some() && !self.selected_is_break()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(date: &str, hour: u32, free_lanes: u32, free_places: u32) -> PoolWorkloadSlot {
        PoolWorkloadSlot {
            date: date.parse().unwrap(),
            hour,
            current: None,
            free_lanes,
            busy_lanes: 0,
            total_lanes: 10,
            free_places,
            total_places: 120,
        }
    }

    fn selection_with(slots: Vec<PoolWorkloadSlot>) -> SlotSelection {
        let mut selection = SlotSelection::new(ScheduleConfig::default());
        selection.load_slots(slots);
        selection
    }

    #[test]
    fn test_initial_hour_is_smallest_across_all_slots() {
        // 2024-06-04 carries the overall smallest hour, not the first date
        let selection = selection_with(vec![
            slot("2024-06-03", 10, 3, 30),
            slot("2024-06-04", 8, 4, 40),
            slot("2024-06-03", 9, 2, 20),
        ]);
        assert_eq!(selection.date_index(), 0);
        // smallest overall hour is 8, repaired to the nearest on date 0: 9
        assert_eq!(selection.selected_hour(), Some(9));
    }

    #[test]
    fn test_repair_prefers_smaller_hour_on_tie() {
        let mut selection = selection_with(vec![
            slot("2024-06-03", 10, 3, 30),
            slot("2024-06-04", 9, 1, 10),
            slot("2024-06-04", 11, 1, 10),
            slot("2024-06-04", 14, 1, 10),
        ]);
        selection.set_selected_hour(10);
        // date 1 has {9, 11, 14}: both 9 and 11 are at distance 1 from 10
        selection.set_date_index(1);
        assert_eq!(selection.selected_hour(), Some(9));
    }

    #[test]
    fn test_set_date_index_is_idempotent() {
        let mut selection = selection_with(vec![
            slot("2024-06-03", 9, 3, 30),
            slot("2024-06-04", 10, 3, 30),
        ]);
        let before = selection.clone();
        selection.set_date_index(selection.date_index());
        assert_eq!(selection, before);
    }

    #[test]
    fn test_set_selected_hour_is_idempotent() {
        let mut selection = selection_with(vec![slot("2024-06-03", 9, 3, 30)]);
        let before = selection.clone();
        selection.set_selected_hour(9);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_hour_wheel_index_tracks_axis_position() {
        let mut selection = selection_with(vec![
            slot("2024-06-03", 7, 3, 30),
            slot("2024-06-03", 14, 3, 30),
        ]);
        selection.set_selected_hour(14);
        assert_eq!(selection.hour_wheel_index(), 7);
        selection.set_selected_hour(7);
        assert_eq!(selection.hour_wheel_index(), 0);
    }

    #[test]
    fn test_hour_wheel_index_defaults_to_zero() {
        let selection = SlotSelection::new(ScheduleConfig::default());
        assert_eq!(selection.selected_hour(), None);
        assert_eq!(selection.hour_wheel_index(), 0);
    }

    #[test]
    fn test_break_hour_renders_break_despite_slot_data() {
        // 2024-06-03 is a Monday; a slot exists at 12:00 with free lanes
        let mut selection = selection_with(vec![
            slot("2024-06-03", 12, 5, 60),
            slot("2024-06-03", 13, 4, 48),
        ]);
        selection.set_selected_hour(12);

        let break_idx = selection.config().hour_index(12).unwrap();
        assert!(selection.break_indices().contains(&break_idx));
        // present in data, so not disabled; break rendering is separate
        assert!(!selection.disabled_indices().contains(&break_idx));
        assert_eq!(selection.time_labels()[break_idx], BREAK_LABEL);
        assert_eq!(selection.lane_labels()[break_idx], "0");
        assert_eq!(selection.place_labels()[break_idx], "0");
        // slot object exists, booking still refused
        assert!(selection.active_slot().is_some());
        assert!(!selection.can_book());
    }

    #[test]
    fn test_no_break_on_saturday() {
        // 2024-06-08 is a Saturday
        let selection = selection_with(vec![slot("2024-06-08", 12, 5, 60)]);
        assert!(selection.break_indices().is_empty());
        let idx = selection.config().hour_index(12).unwrap();
        assert_eq!(selection.time_labels()[idx], "12:00");
        assert_eq!(selection.lane_labels()[idx], "5");
    }

    #[test]
    fn test_empty_slot_set_disables_everything() {
        let selection = selection_with(vec![]);
        assert!(!selection.has_data());
        assert_eq!(selection.selected_hour(), None);
        assert!(selection.active_slot().is_none());
        assert!(!selection.can_book());
        let disabled = selection.disabled_indices();
        assert_eq!(disabled.len(), selection.config().hour_count());
    }

    #[test]
    fn test_date_round_trip_restores_surviving_hour() {
        let mut selection = selection_with(vec![
            slot("2024-06-03", 9, 3, 30),
            slot("2024-06-03", 14, 3, 30),
            slot("2024-06-04", 10, 3, 30),
            slot("2024-06-05", 14, 3, 30),
            slot("2024-06-05", 15, 3, 30),
        ]);
        selection.set_date_index(2);
        selection.set_selected_hour(14);
        // date 0 also carries 14, so the hour survives the detour
        selection.set_date_index(0);
        assert_eq!(selection.selected_hour(), Some(14));
        selection.set_date_index(2);
        assert_eq!(selection.selected_hour(), Some(14));
    }

    #[test]
    fn test_date_round_trip_repairs_lost_hour() {
        let mut selection = selection_with(vec![
            slot("2024-06-03", 9, 3, 30),
            slot("2024-06-04", 10, 3, 30),
            slot("2024-06-05", 14, 3, 30),
            slot("2024-06-05", 15, 3, 30),
        ]);
        selection.set_date_index(2);
        selection.set_selected_hour(14);
        // date 0 only has 9:00, the selection is pulled there...
        selection.set_date_index(0);
        assert_eq!(selection.selected_hour(), Some(9));
        // ...and coming back repairs to the nearest of {14, 15}
        selection.set_date_index(2);
        assert_eq!(selection.selected_hour(), Some(14));
    }

    #[test]
    fn test_refetch_preserves_selection_and_clamps_date_index() {
        let mut selection = selection_with(vec![
            slot("2024-06-03", 9, 3, 30),
            slot("2024-06-04", 9, 3, 30),
            slot("2024-06-05", 9, 3, 30),
        ]);
        selection.set_date_index(2);
        selection.set_selected_hour(9);

        // re-fetch shrinks the range to two dates
        selection.load_slots(vec![
            slot("2024-06-03", 9, 3, 30),
            slot("2024-06-04", 11, 3, 30),
        ]);
        assert_eq!(selection.date_index(), 1);
        // 9:00 vanished on 06-04, nearest available is 11:00
        assert_eq!(selection.selected_hour(), Some(11));
    }

    #[test]
    fn test_hour_without_slot_renders_unavailable_but_sticks() {
        let mut selection = selection_with(vec![slot("2024-06-04", 10, 3, 30)]);
        selection.set_selected_hour(15);
        // the hour simply renders as unavailable, it is not reset to None
        assert_eq!(selection.selected_hour(), Some(15));
        assert!(selection.active_slot().is_none());
        assert!(!selection.can_book());
        let idx = selection.config().hour_index(15).unwrap();
        assert!(selection.disabled_indices().contains(&idx));
    }

    #[test]
    fn test_labels_align_with_axis() {
        let selection = selection_with(vec![slot("2024-06-08", 7, 5, 60)]);
        let times = selection.time_labels();
        let lanes = selection.lane_labels();
        let places = selection.place_labels();
        assert_eq!(times.len(), selection.config().hour_count());
        assert_eq!(lanes.len(), times.len());
        assert_eq!(places.len(), times.len());
        assert_eq!(times[0], "07:00");
        assert_eq!(lanes[0], "5");
        assert_eq!(places[0], "60");
        // hour without data renders zero but stays on the axis
        assert_eq!(lanes[1], "0");
    }
}
