use tracing::debug;

use crate::error::SeatingError;
use crate::models::Seat;
use crate::seating::layout::SeatLayout;
use crate::seating::policy::{SeatPolicy, SeatPosition};

/// Builds the seats of `layout` row-major, sections in declaration order.
///
/// Fails with [`SeatingError::InvalidConfiguration`] before producing
/// anything if the layout has a zero dimension.
pub fn generate(layout: &SeatLayout, policy: &mut dyn SeatPolicy) -> Result<Vec<Seat>, SeatingError> {
    layout.validate()?;

    let mut seats = Vec::with_capacity(layout.capacity());
    match layout {
        SeatLayout::Grid { rows, seats_per_row } => {
            push_block(&mut seats, None, *rows, *seats_per_row, policy);
        }
        SeatLayout::Sectioned { sections } => {
            for section in sections {
                push_block(
                    &mut seats,
                    Some(section.name.as_str()),
                    section.rows,
                    section.seats_per_row,
                    policy,
                );
            }
        }
    }

    debug!(
        seats = seats.len(),
        occupied = seats.iter().filter(|s| s.is_occupied).count(),
        reserved = seats.iter().filter(|s| s.reserved_by.is_some()).count(),
        "Generated seat grid"
    );
    Ok(seats)
}

fn push_block(
    seats: &mut Vec<Seat>,
    section: Option<&str>,
    rows: u32,
    seats_per_row: u32,
    policy: &mut dyn SeatPolicy,
) {
    for row in 1..=rows {
        for seat_number in 1..=seats_per_row {
            let position = SeatPosition { section, row, seat_number };
            let (is_occupied, reserved_by) = policy.initial_state(&position);
            seats.push(Seat {
                id: seat_id(section, row, seat_number),
                row,
                seat_number,
                section: section.map(str::to_string),
                is_occupied,
                reserved_by,
            });
        }
    }
}

pub fn seat_id(section: Option<&str>, row: u32, seat_number: u32) -> String {
    match section {
        Some(section) => format!("{section}-{row}-{seat_number}"),
        None => format!("{row}-{seat_number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seating::layout::SectionSpec;
    use crate::seating::policy::{ConsistentPolicy, EmptyPolicy, RandomPolicy};

    fn ids(seats: &[Seat]) -> Vec<&str> {
        seats.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn grid_is_row_major() {
        let seats = generate(&SeatLayout::grid(2, 2), &mut EmptyPolicy).unwrap();
        assert_eq!(ids(&seats), vec!["1-1", "1-2", "2-1", "2-2"]);
        assert!(seats.iter().all(|s| s.section.is_none() && s.is_selectable()));
        assert_eq!((seats[2].row, seats[2].seat_number), (2, 1));
    }

    #[test]
    fn sections_follow_declaration_order() {
        let layout = SeatLayout::sectioned(vec![
            SectionSpec::new("front", 1, 2),
            SectionSpec::new("back", 1, 2),
        ]);
        let seats = generate(&layout, &mut EmptyPolicy).unwrap();
        assert_eq!(ids(&seats), vec!["front-1-1", "front-1-2", "back-1-1", "back-1-2"]);
        assert_eq!(seats[3].section.as_deref(), Some("back"));
    }

    #[test]
    fn invalid_layout_produces_nothing() {
        let err = generate(&SeatLayout::grid(3, 0), &mut EmptyPolicy).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidConfiguration(_)));
    }

    #[test]
    fn synagogue_grid_has_every_seat() {
        let mut policy = RandomPolicy::seeded(0.3, 0.15, "יוסי כהן", 5).unwrap();
        let seats = generate(&SeatLayout::synagogue(), &mut policy).unwrap();
        assert_eq!(seats.len(), 184);
        assert_eq!(seats.first().map(|s| s.id.as_str()), Some("right-1-1"));
        assert_eq!(seats.last().map(|s| s.id.as_str()), Some("back-6-10"));
    }

    // generation is lenient: a seat may carry a holder with the occupied flag off
    #[test]
    fn random_generation_may_reserve_unoccupied_seats() {
        let mut policy = RandomPolicy::seeded(0.0, 1.0, "יוסי כהן", 9).unwrap();
        let seats = generate(&SeatLayout::grid(2, 3), &mut policy).unwrap();
        assert!(seats.iter().all(|s| s.reserved_by.is_some() && !s.is_occupied));
    }

    #[test]
    fn consistent_generation_keeps_reserved_seats_occupied() {
        let mut policy = ConsistentPolicy::new(RandomPolicy::seeded(0.0, 0.5, "יוסי כהן", 9).unwrap());
        let seats = generate(&SeatLayout::synagogue(), &mut policy).unwrap();
        assert!(seats.iter().all(|s| s.reserved_by.is_none() || s.is_occupied));
    }
}
