use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::Config;

use synagogue_portal::models::SeatCounts;
use synagogue_portal::seating::{
    generate, EmptyPolicy, RandomPolicy, SeatLayout, SeatingSession, SectionSpec,
};

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    Confirm(String),
    Release(usize),
    ReleaseAll,
    Reset,
    Cancel,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..64).prop_map(Op::Select),
        3 => "[a-z]{1,8}".prop_map(Op::Confirm),
        2 => (0usize..64).prop_map(Op::Release),
        1 => Just(Op::ReleaseAll),
        1 => Just(Op::Reset),
        1 => Just(Op::Cancel),
    ]
}

fn layouts() -> impl Strategy<Value = SeatLayout> {
    prop_oneof![
        (1u32..8, 1u32..8).prop_map(|(rows, seats)| SeatLayout::grid(rows, seats)),
        prop::collection::vec((1u32..5, 1u32..6), 1..4).prop_map(|dims| {
            SeatLayout::sectioned(
                dims.into_iter()
                    .enumerate()
                    .map(|(i, (rows, seats))| SectionSpec::new(format!("s{i}"), rows, seats))
                    .collect(),
            )
        }),
    ]
}

fn random_session(layout: &SeatLayout, seed: u64) -> SeatingSession {
    let mut policy = RandomPolicy::seeded(0.3, 0.15, "יוסי כהן", seed).expect("policy");
    SeatingSession::generate(layout, &mut policy).expect("valid layout")
}

fn seat_id(session: &SeatingSession, index: usize) -> String {
    let seats = session.seats();
    seats[index % seats.len()].id.clone()
}

fn apply(session: &mut SeatingSession, op: &Op) {
    match op {
        Op::Select(i) => {
            let id = seat_id(session, *i);
            session.select_seat(&id).expect("seat exists");
        }
        Op::Confirm(holder) => {
            if let Some(seat) = session.confirm_reservation(holder) {
                assert!(seat.is_occupied, "confirmed seat must be occupied");
                assert_eq!(seat.reserved_by.as_deref(), Some(holder.as_str()));
            }
        }
        Op::Release(i) => {
            let id = seat_id(session, *i);
            session.release_seat(&id).expect("seat exists");
        }
        Op::ReleaseAll => {
            session.release_all_reservations();
        }
        Op::Reset => {
            session.reset_all();
        }
        Op::Cancel => {
            session.cancel_selection();
        }
    }
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn generated_ids_are_unique(layout in layouts(), seed in any::<u64>()) {
        let mut policy = RandomPolicy::seeded(0.3, 0.15, "x", seed).expect("policy");
        let seats = generate(&layout, &mut policy).expect("valid layout");
        let ids: HashSet<&str> = seats.iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(ids.len(), seats.len());
        prop_assert_eq!(seats.len(), layout.capacity());
    }

    #[test]
    fn total_is_conserved(
        layout in layouts(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut session = random_session(&layout, seed);
        let total = session.aggregate_counts().total;
        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(session.aggregate_counts().total, total);
        }
    }

    #[test]
    fn selection_always_points_at_a_free_seat(
        layout in layouts(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let mut session = random_session(&layout, seed);
        for op in &ops {
            apply(&mut session, op);
            if let Some(id) = session.selected() {
                prop_assert!(session.get_seat(id).expect("selected seat exists").is_selectable());
            }
        }
    }

    #[test]
    fn blocked_selection_is_a_noop(
        layout in layouts(),
        seed in any::<u64>(),
        pick in any::<usize>(),
        other in any::<usize>(),
    ) {
        let mut session = random_session(&layout, seed);
        let first = seat_id(&session, other);
        session.select_seat(&first).expect("seat exists");
        let before = session.selected().map(str::to_string);

        let taken: Vec<String> = session
            .seats()
            .iter()
            .filter(|s| !s.is_selectable())
            .map(|s| s.id.clone())
            .collect();
        prop_assume!(!taken.is_empty());
        let target = &taken[pick % taken.len()];

        session.select_seat(target).expect("seat exists");
        prop_assert_eq!(session.selected().map(str::to_string), before);
    }

    #[test]
    fn double_select_restores_selection(
        layout in layouts(),
        seed in any::<u64>(),
        pick in any::<usize>(),
        preselect in any::<Option<usize>>(),
    ) {
        let mut session = random_session(&layout, seed);
        if let Some(i) = preselect {
            let id = seat_id(&session, i);
            session.select_seat(&id).expect("seat exists");
        }
        let before = session.selected().map(str::to_string);

        let target = seat_id(&session, pick);
        session.select_seat(&target).expect("seat exists");
        session.select_seat(&target).expect("seat exists");

        let target_selectable = session.get_seat(&target).expect("seat exists").is_selectable();
        if target_selectable && before.as_deref() == Some(target.as_str()) {
            // deselect then reselect lands back on the same seat
            prop_assert_eq!(session.selected(), Some(target.as_str()));
        } else if target_selectable {
            prop_assert_eq!(session.selected(), None);
        } else {
            prop_assert_eq!(session.selected().map(str::to_string), before);
        }
    }

    #[test]
    fn reset_frees_every_seat(
        layout in layouts(),
        seed in any::<u64>(),
        ops in prop::collection::vec(op(), 0..20),
    ) {
        let mut session = random_session(&layout, seed);
        for op in &ops {
            apply(&mut session, op);
        }
        let total = session.reset_all();
        prop_assert_eq!(
            session.aggregate_counts(),
            SeatCounts { free: total, occupied: 0, reserved: 0, total }
        );
        prop_assert_eq!(session.selected(), None);
    }
}

#[test]
fn two_by_two_reservation_scenario() {
    let mut session =
        SeatingSession::generate(&SeatLayout::grid(2, 2), &mut EmptyPolicy).expect("valid layout");
    let ids: Vec<&str> = session.seats().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1-1", "1-2", "2-1", "2-2"]);
    assert_eq!(session.aggregate_counts().free, 4);

    assert_eq!(session.select_seat("1-1").expect("seat exists"), Some("1-1"));
    session.confirm_reservation("Dana").expect("a seat was selected");

    let seat = session.get_seat("1-1").expect("seat exists");
    assert!(seat.is_occupied);
    assert_eq!(seat.reserved_by.as_deref(), Some("Dana"));
    assert_eq!(session.selected(), None);
    assert_eq!(
        session.aggregate_counts(),
        SeatCounts { free: 3, occupied: 1, reserved: 1, total: 4 }
    );
}

#[test]
fn sectioned_front_back_ids() {
    let layout = SeatLayout::sectioned(vec![
        SectionSpec::new("front", 1, 2),
        SectionSpec::new("back", 1, 2),
    ]);
    let seats = generate(&layout, &mut EmptyPolicy).expect("valid layout");
    let ids: Vec<&str> = seats.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["front-1-1", "front-1-2", "back-1-1", "back-1-2"]);
}

// Bulk release keeps seats occupied, so the holder-less seats stay taken.
#[test]
fn bulk_release_leaves_seats_occupied() {
    let mut session =
        SeatingSession::generate(&SeatLayout::grid(1, 3), &mut EmptyPolicy).expect("valid layout");
    for id in ["1-1", "1-3"] {
        session.select_seat(id).expect("seat exists");
        session.confirm_reservation("Dana").expect("a seat was selected");
    }
    assert_eq!(session.release_all_reservations(), 2);
    assert_eq!(
        session.aggregate_counts(),
        SeatCounts { free: 1, occupied: 2, reserved: 0, total: 3 }
    );
}
