pub mod generator;
pub mod layout;
pub mod policy;
pub mod session;

pub use generator::generate;
pub use layout::{SeatLayout, SectionSpec};
pub use policy::{ConsistentPolicy, EmptyPolicy, RandomPolicy, SeatPolicy, SeatPosition};
pub use session::{SeatFilter, SeatingSession, SectionSummary};
