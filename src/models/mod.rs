pub mod class;
pub mod event;
pub mod prayer;
pub mod seat;

pub use class::Class;
pub use event::{Event, EventType};
pub use prayer::PrayerTimes;
pub use seat::{Seat, SeatCounts, SeatState};
