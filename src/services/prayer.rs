use chrono::{NaiveDate, NaiveTime};

use crate::models::PrayerTimes;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Fixed schedule. Every date gets the same times.
// TODO: derive sunrise/sunset from the date and the synagogue's coordinates.
pub fn prayer_times(_date: NaiveDate) -> PrayerTimes {
    PrayerTimes {
        shacharit: at(6, 30),
        mincha: at(17, 45),
        maariv: at(19, 30),
        sunrise: at(6, 15),
        sunset: at(18, 0),
    }
}
