//! Initial-state policies for generated seats.
//!
//! The portal has no real occupancy feed, so a fresh grid is seeded with
//! made-up walk-ins and reservations. Tests swap in [`EmptyPolicy`] to get a
//! fully free grid.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SeatingError;

pub const DEFAULT_OCCUPANCY_PROBABILITY: f64 = 0.30;
pub const DEFAULT_RESERVATION_PROBABILITY: f64 = 0.15;
/// The plain grid on the home page is seeded a little fuller than the sanctuary map.
pub const DEFAULT_GRID_RESERVATION_PROBABILITY: f64 = 0.20;
pub const DEFAULT_PLACEHOLDER_HOLDER: &str = "יוסי כהן";

/// Where a seat sits, handed to policies before the seat exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatPosition<'a> {
    pub section: Option<&'a str>,
    pub row: u32,
    pub seat_number: u32,
}

pub trait SeatPolicy {
    fn occupied(&mut self, position: &SeatPosition<'_>) -> bool;

    fn reserved_by(&mut self, position: &SeatPosition<'_>) -> Option<String>;

    /// Occupied flag and holder for a freshly generated seat. The two draws
    /// are independent unless a policy overrides this.
    fn initial_state(&mut self, position: &SeatPosition<'_>) -> (bool, Option<String>) {
        let occupied = self.occupied(position);
        (occupied, self.reserved_by(position))
    }
}

impl<P: SeatPolicy + ?Sized> SeatPolicy for Box<P> {
    fn occupied(&mut self, position: &SeatPosition<'_>) -> bool {
        (**self).occupied(position)
    }

    fn reserved_by(&mut self, position: &SeatPosition<'_>) -> Option<String> {
        (**self).reserved_by(position)
    }

    fn initial_state(&mut self, position: &SeatPosition<'_>) -> (bool, Option<String>) {
        (**self).initial_state(position)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyPolicy;

impl SeatPolicy for EmptyPolicy {
    fn occupied(&mut self, _position: &SeatPosition<'_>) -> bool {
        false
    }

    fn reserved_by(&mut self, _position: &SeatPosition<'_>) -> Option<String> {
        None
    }
}

/// Independent draws for occupancy and reservation, so a seat can come out
/// reserved without being flagged occupied. Wrap in [`ConsistentPolicy`] to
/// rule that out.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    occupancy_probability: f64,
    reservation_probability: f64,
    placeholder_holder: String,
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(
        occupancy_probability: f64,
        reservation_probability: f64,
        placeholder_holder: impl Into<String>,
    ) -> Result<Self, SeatingError> {
        Self::with_rng(
            occupancy_probability,
            reservation_probability,
            placeholder_holder,
            StdRng::from_entropy(),
        )
    }

    pub fn seeded(
        occupancy_probability: f64,
        reservation_probability: f64,
        placeholder_holder: impl Into<String>,
        seed: u64,
    ) -> Result<Self, SeatingError> {
        Self::with_rng(
            occupancy_probability,
            reservation_probability,
            placeholder_holder,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        occupancy_probability: f64,
        reservation_probability: f64,
        placeholder_holder: impl Into<String>,
        rng: StdRng,
    ) -> Result<Self, SeatingError> {
        check_probability("occupancy", occupancy_probability)?;
        check_probability("reservation", reservation_probability)?;
        Ok(Self {
            occupancy_probability,
            reservation_probability,
            placeholder_holder: placeholder_holder.into(),
            rng,
        })
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self {
            occupancy_probability: DEFAULT_OCCUPANCY_PROBABILITY,
            reservation_probability: DEFAULT_RESERVATION_PROBABILITY,
            placeholder_holder: DEFAULT_PLACEHOLDER_HOLDER.to_string(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl SeatPolicy for RandomPolicy {
    fn occupied(&mut self, _position: &SeatPosition<'_>) -> bool {
        self.rng.gen_bool(self.occupancy_probability)
    }

    fn reserved_by(&mut self, _position: &SeatPosition<'_>) -> Option<String> {
        self.rng
            .gen_bool(self.reservation_probability)
            .then(|| self.placeholder_holder.clone())
    }
}

/// Forces the occupied flag on for every seat the inner policy reserves.
#[derive(Debug, Clone)]
pub struct ConsistentPolicy<P> {
    inner: P,
}

impl<P: SeatPolicy> ConsistentPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<P: SeatPolicy> SeatPolicy for ConsistentPolicy<P> {
    fn occupied(&mut self, position: &SeatPosition<'_>) -> bool {
        self.inner.occupied(position)
    }

    fn reserved_by(&mut self, position: &SeatPosition<'_>) -> Option<String> {
        self.inner.reserved_by(position)
    }

    fn initial_state(&mut self, position: &SeatPosition<'_>) -> (bool, Option<String>) {
        let (occupied, holder) = self.inner.initial_state(position);
        (occupied || holder.is_some(), holder)
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), SeatingError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(SeatingError::InvalidConfiguration(format!(
            "{name} probability must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}
