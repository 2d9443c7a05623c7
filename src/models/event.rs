use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Holiday,
    Special,
    Regular,
}

impl EventType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "holiday" => Some(Self::Holiday),
            "special" => Some(Self::Special),
            "regular" => Some(Self::Regular),
            _ => None,
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Self::Holiday => "חג",
            Self::Special => "מיוחד",
            Self::Regular => "רגיל",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// `None` for events that run all day.
    pub time: Option<NaiveTime>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub description: String,
    pub location: Option<String>,
    pub hebrew_date: Option<String>,
}

impl Event {
    pub fn time_label(&self) -> String {
        match self.time {
            Some(time) => time.format("%H:%M").to_string(),
            None => "כל היום".to_string(),
        }
    }
}
