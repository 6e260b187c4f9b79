//! Per-step state machines.
//!
//! Each step holds the local form state for one slice of the book record:
//! seeded from whatever the draft already has (back-navigation keeps data),
//! mutated by UI actions, and confirmed by a validate-then-advance call
//! that either yields the step's value or records the failures for inline
//! display.

mod genre;
mod information;
mod new_subgenre;
mod subgenre;

pub use genre::GenreStep;
pub use information::InformationStep;
pub use new_subgenre::NewSubgenreStep;
pub use subgenre::SubgenreStep;
