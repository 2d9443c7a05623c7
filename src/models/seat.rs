use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub id: String,
    pub row: u32,
    pub seat_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub is_occupied: bool,
    pub reserved_by: Option<String>,
}

/// Display state of a seat. A reservation wins over plain occupancy, so a
/// seat generated with a holder but without the occupied flag still shows
/// as reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatState {
    Free,
    Occupied,
    Reserved,
}

impl SeatState {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "occupied" => Some(Self::Occupied),
            "reserved" => Some(Self::Reserved),
            _ => None,
        }
    }
}

impl Seat {
    pub fn state(&self) -> SeatState {
        if self.reserved_by.is_some() {
            SeatState::Reserved
        } else if self.is_occupied {
            SeatState::Occupied
        } else {
            SeatState::Free
        }
    }

    /// Only a seat that is neither occupied nor reserved can be picked.
    pub fn is_selectable(&self) -> bool {
        !self.is_occupied && self.reserved_by.is_none()
    }

    /// Hover text of the seat in the Hebrew seating map.
    pub fn label(&self) -> String {
        match (&self.reserved_by, self.is_occupied) {
            (Some(holder), _) => format!("שמור עבור {holder}"),
            (None, true) => "תפוס".to_string(),
            (None, false) => format!("מקום {}", self.id),
        }
    }
}

/// Aggregate statistics over a grid. `occupied` counts the occupied flag
/// only; reserved seats are included there as long as the
/// reservation-implies-occupancy invariant holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCounts {
    pub free: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub total: usize,
}

impl SeatCounts {
    pub fn tally<'a>(seats: impl IntoIterator<Item = &'a Seat>) -> Self {
        seats.into_iter().fold(Self::default(), |mut acc, seat| {
            acc.total += 1;
            if seat.is_selectable() {
                acc.free += 1;
            }
            if seat.is_occupied {
                acc.occupied += 1;
            }
            if seat.reserved_by.is_some() {
                acc.reserved += 1;
            }
            acc
        })
    }

    /// Seats that are occupied, reserved, or both.
    pub fn taken(&self) -> usize {
        self.total - self.free
    }
}
