pub mod calendar;
pub mod cleanup;
pub mod prayer;
pub mod schedule;
pub mod seed;
pub mod sessions;

pub use calendar::{EventCalendar, EventFilter};
pub use schedule::{ClassFilter, ClassSchedule};
pub use sessions::{SessionRegistry, SharedSession};
