//! Built-in community data. The portal has no database: classes, events and
//! announcements are compiled in and reset on every restart.

use chrono::{NaiveDate, NaiveTime, Weekday};

use crate::models::{Class, Event, EventType};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn classes() -> Vec<Class> {
    vec![
        Class {
            id: "1".to_string(),
            title: "גמרא - מסכת ברכות".to_string(),
            instructor: "הרב יוסף כהן".to_string(),
            day: Weekday::Sun,
            starts_at: time(8, 0),
            duration_minutes: 60,
            description: "שיעור בגמרא מסכת ברכות, דף כ\"ח".to_string(),
            max_participants: 25,
            current_participants: 18,
            location: "בית המדרש הגדול".to_string(),
        },
        Class {
            id: "2".to_string(),
            title: "הלכה יומית".to_string(),
            instructor: "הרב דוד לוי".to_string(),
            day: Weekday::Mon,
            starts_at: time(19, 30),
            duration_minutes: 45,
            description: "הלכות תפילה וברכת המזון".to_string(),
            max_participants: 30,
            current_participants: 22,
            location: "בית המדרש הקטן".to_string(),
        },
        Class {
            id: "3".to_string(),
            title: "פרשת השבוע".to_string(),
            instructor: "הרב משה גולדברג".to_string(),
            day: Weekday::Wed,
            starts_at: time(20, 15),
            duration_minutes: 45,
            description: "עיונים בפרשת השבוע עם פירוש רש\"י ורמב\"ן".to_string(),
            max_participants: 40,
            current_participants: 35,
            location: "אולם הרצאות".to_string(),
        },
        Class {
            id: "4".to_string(),
            title: "מוסר ומחשבה".to_string(),
            instructor: "הרב אברהם שמידט".to_string(),
            day: Weekday::Thu,
            starts_at: time(21, 0),
            duration_minutes: 30,
            description: "שיעורי מוסר ומחשבה מתוך ספרי המוסר הקלסיים".to_string(),
            max_participants: 20,
            current_participants: 15,
            location: "בית המדרש הגדול".to_string(),
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "ראש השנה".to_string(),
            date: date(2024, 9, 16),
            time: Some(time(19, 0)),
            event_type: EventType::Holiday,
            description: "תפילות ראש השנה - שחרית ומוסף".to_string(),
            location: Some("בית הכנסת הראשי".to_string()),
            hebrew_date: Some("א' תשרי".to_string()),
        },
        Event {
            id: "2".to_string(),
            title: "יום כיפור".to_string(),
            date: date(2024, 9, 25),
            time: None,
            event_type: EventType::Holiday,
            description: "תפילות יום כיפור - כל נדרי ונעילה".to_string(),
            location: Some("בית הכנסת הראשי".to_string()),
            hebrew_date: Some("י' תשרי".to_string()),
        },
        Event {
            id: "3".to_string(),
            title: "שיעור מיוחד - הרב שטיינמן".to_string(),
            date: date(2024, 10, 15),
            time: Some(time(20, 0)),
            event_type: EventType::Special,
            description: "שיעור מיוחד בהלכה עם הרב שטיינמן".to_string(),
            location: Some("אולם הרצאות".to_string()),
            hebrew_date: None,
        },
        Event {
            id: "4".to_string(),
            title: "מעמד בר מצווה".to_string(),
            date: date(2024, 10, 20),
            time: Some(time(9, 0)),
            event_type: EventType::Special,
            description: "חגיגת בר מצווה של משפחת כהן".to_string(),
            location: Some("בית הכנסת הראשי".to_string()),
            hebrew_date: None,
        },
    ]
}

/// Notice board lines shown under the class schedule.
pub fn announcements() -> Vec<String> {
    [
        "השבוע - שיעור נוסף בהלכה ביום שישי בשעה 10:00",
        "זכרו להירשם מראש לשיעורים עם מקומות מוגבלים",
        "ספרים זמינים להשאלה בספרייה",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
