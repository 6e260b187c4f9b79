//! Screen views - pure functions from state to elements.

mod genre;
mod information;
mod new_subgenre;
mod steps;
mod subgenre;
mod success;

pub use genre::view_genre;
pub use information::view_information;
pub use new_subgenre::view_new_subgenre;
pub use steps::view_steps;
pub use subgenre::view_subgenre;
pub use success::view_success;
