use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimes {
    pub shacharit: NaiveTime,
    pub mincha: NaiveTime,
    pub maariv: NaiveTime,
    pub sunrise: NaiveTime,
    pub sunset: NaiveTime,
}
