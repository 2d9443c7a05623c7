use serde::Serialize;
use tracing::debug;

use crate::error::SeatingError;
use crate::models::{Seat, SeatCounts, SeatState};
use crate::seating::generator::generate;
use crate::seating::layout::SeatLayout;
use crate::seating::policy::SeatPolicy;

/// Read-only predicate for [`SeatingSession::list_seats`]. Empty filter
/// matches every seat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatFilter {
    pub section: Option<String>,
    pub state: Option<SeatState>,
    pub row: Option<u32>,
}

impl SeatFilter {
    pub fn matches(&self, seat: &Seat) -> bool {
        self.section
            .as_deref()
            .map_or(true, |section| seat.section.as_deref() == Some(section))
            && self.state.map_or(true, |state| seat.state() == state)
            && self.row.map_or(true, |row| seat.row == row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSummary {
    pub section: String,
    pub total: usize,
    pub counts: SeatCounts,
}

/// Seat grid plus the seat the user is about to reserve, for one visitor.
///
/// Every operation is synchronous and total: refusals are no-ops, and the
/// only errors are references to seats that do not exist.
#[derive(Debug, Clone)]
pub struct SeatingSession {
    seats: Vec<Seat>,
    selected: Option<String>,
}

impl SeatingSession {
    /// Seat ids are assumed unique; [`generate`] guarantees that.
    pub fn new(seats: Vec<Seat>) -> Self {
        Self { seats, selected: None }
    }

    pub fn generate(layout: &SeatLayout, policy: &mut dyn SeatPolicy) -> Result<Self, SeatingError> {
        Ok(Self::new(generate(layout, policy)?))
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn get_seat(&self, id: &str) -> Result<&Seat, SeatingError> {
        self.seats
            .iter()
            .find(|seat| seat.id == id)
            .ok_or_else(|| SeatingError::NotFound(id.to_string()))
    }

    fn seat_mut(&mut self, id: &str) -> Result<&mut Seat, SeatingError> {
        self.seats
            .iter_mut()
            .find(|seat| seat.id == id)
            .ok_or_else(|| SeatingError::NotFound(id.to_string()))
    }

    pub fn list_seats(&self, filter: &SeatFilter) -> Vec<&Seat> {
        self.seats.iter().filter(|seat| filter.matches(seat)).collect()
    }

    /// Always scans the live grid.
    pub fn aggregate_counts(&self) -> SeatCounts {
        SeatCounts::tally(&self.seats)
    }

    /// Counts per section, in the order sections first appear in the grid.
    /// Empty for a plain grid.
    pub fn section_summaries(&self) -> Vec<SectionSummary> {
        let mut order: Vec<&str> = Vec::new();
        for section in self.seats.iter().filter_map(|seat| seat.section.as_deref()) {
            if !order.contains(&section) {
                order.push(section);
            }
        }
        order
            .into_iter()
            .map(|section| {
                let counts = SeatCounts::tally(
                    self.seats.iter().filter(|seat| seat.section.as_deref() == Some(section)),
                );
                SectionSummary { section: section.to_string(), total: counts.total, counts }
            })
            .collect()
    }

    /// Toggles the selection on a free seat. Clicking a taken seat changes
    /// nothing. Returns the selection after the call.
    pub fn select_seat(&mut self, id: &str) -> Result<Option<&str>, SeatingError> {
        let seat = self.get_seat(id)?;
        if !seat.is_selectable() {
            debug!(seat_id = id, state = ?seat.state(), "Ignoring selection of a taken seat");
            return Ok(self.selected());
        }

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            debug!(seat_id = id, "Seat deselected");
        } else {
            self.selected = Some(id.to_string());
            debug!(seat_id = id, "Seat selected");
        }
        Ok(self.selected())
    }

    pub fn cancel_selection(&mut self) -> Option<String> {
        self.selected.take()
    }

    /// Reserves the selected seat for `holder` and clears the selection.
    /// Returns `None` when nothing is selected.
    pub fn confirm_reservation(&mut self, holder: &str) -> Option<Seat> {
        let id = self.selected.take()?;
        let seat = self.seat_mut(&id).ok()?;
        seat.reserved_by = Some(holder.to_string());
        seat.is_occupied = true;
        debug!(seat_id = %seat.id, holder, "Seat reserved");
        Some(seat.clone())
    }

    /// Frees one seat completely, reservation and occupancy both.
    pub fn release_seat(&mut self, id: &str) -> Result<Seat, SeatingError> {
        let seat = self.seat_mut(id)?;
        seat.reserved_by = None;
        seat.is_occupied = false;
        let released = seat.clone();
        debug!(seat_id = id, "Seat released");
        Ok(released)
    }

    /// Drops every holder name but leaves the occupied flags alone, so the
    /// seats stay taken. Returns how many reservations were cleared.
    pub fn release_all_reservations(&mut self) -> usize {
        let mut cleared = 0;
        for seat in self.seats.iter_mut().filter(|seat| seat.reserved_by.is_some()) {
            seat.reserved_by = None;
            cleared += 1;
        }
        debug!(cleared, "Reservations released");
        cleared
    }

    /// Frees the whole grid. Returns the number of seats.
    pub fn reset_all(&mut self) -> usize {
        for seat in &mut self.seats {
            seat.is_occupied = false;
            seat.reserved_by = None;
        }
        self.selected = None;
        debug!(seats = self.seats.len(), "Seat grid reset");
        self.seats.len()
    }
}
