use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub day: Weekday,
    pub starts_at: NaiveTime,
    pub duration_minutes: u32,
    pub description: String,
    pub max_participants: u32,
    pub current_participants: u32,
    pub location: String,
}

impl Class {
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    pub fn spots_left(&self) -> u32 {
        self.max_participants.saturating_sub(self.current_participants)
    }

    pub fn day_name(&self) -> &'static str {
        hebrew_day_name(self.day)
    }
}

/// Hebrew weekday names as used on the schedule board.
pub fn hebrew_day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "ראשון",
        Weekday::Mon => "שני",
        Weekday::Tue => "שלישי",
        Weekday::Wed => "רביעי",
        Weekday::Thu => "חמישי",
        Weekday::Fri => "שישי",
        Weekday::Sat => "שבת",
    }
}

/// Accepts English names (`mon`, `Monday`) as well as the Hebrew board names.
pub fn parse_day(raw: &str) -> Option<Weekday> {
    let trimmed = raw.trim();
    if let Ok(day) = trimmed.parse::<Weekday>() {
        return Some(day);
    }
    [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
    .into_iter()
    .find(|day| hebrew_day_name(*day) == trimmed)
}
