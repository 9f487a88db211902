//! Deterministic doubles for the Sanctum workspace tests: a frozen clock and
//! scripted random numbers for letter shuffles.

mod clock;
mod rng;

pub use clock::{FixedClock, fixed_clock};
pub use rng::{MockRng, SequenceRng};
