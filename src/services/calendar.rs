use chrono::{Datelike, NaiveDate};

use crate::models::{Event, EventType};

/// How many events the calendar panel shows by default.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub event_type: Option<EventType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.event_type.map_or(true, |t| event.event_type == t)
            && self.from.map_or(true, |from| event.date >= from)
            && self.to.map_or(true, |to| event.date <= to)
    }
}

#[derive(Debug, Clone)]
pub struct EventCalendar {
    events: Vec<Event>,
}

impl EventCalendar {
    /// Events are kept sorted by date; ties keep their input order.
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|event| event.date);
        Self { events }
    }

    pub fn list(&self, filter: &EventFilter) -> Vec<&Event> {
        self.events.iter().filter(|event| filter.matches(event)).collect()
    }

    /// Events from `today` on, soonest first.
    pub fn upcoming(&self, today: NaiveDate, limit: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date >= today)
            .take(limit)
            .collect()
    }

    pub fn in_month(&self, year: i32, month: u32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.date.year() == year && event.date.month() == month)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn upcoming_skips_past_events() {
        let calendar = EventCalendar::new(seed::events());
        let ids: Vec<&str> = calendar
            .upcoming(date(2024, 9, 20), DEFAULT_UPCOMING_LIMIT)
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "4"]);

        // an event on the day itself still counts
        assert_eq!(calendar.upcoming(date(2024, 10, 20), 5).len(), 1);
        assert!(calendar.upcoming(date(2025, 1, 1), 5).is_empty());
        assert_eq!(calendar.upcoming(date(2024, 1, 1), 2).len(), 2);
    }

    #[test]
    fn sorts_unordered_input() {
        let mut events = seed::events();
        events.reverse();
        let calendar = EventCalendar::new(events);
        assert_eq!(calendar.upcoming(date(2024, 1, 1), 1)[0].id, "1");
    }

    #[test]
    fn filters_by_type_and_range() {
        let calendar = EventCalendar::new(seed::events());
        let holidays = EventFilter { event_type: Some(EventType::Holiday), ..Default::default() };
        assert_eq!(calendar.list(&holidays).len(), 2);

        let october = EventFilter {
            from: Some(date(2024, 10, 1)),
            to: Some(date(2024, 10, 16)),
            ..Default::default()
        };
        let hits = calendar.list(&october);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");

        assert_eq!(calendar.in_month(2024, 9).len(), 2);
        assert!(calendar.in_month(2024, 11).is_empty());
    }
}
