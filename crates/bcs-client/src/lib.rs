//! HTTP collaborators for book intake.
//!
//! Two endpoints exist: a parameterless genre listing
//! (`GET <base>/genres`) and the book creation call
//! (`POST <base>/books`), whose status is inspected for the literal
//! 201 Created.

mod client;
mod error;

pub use client::LibraryClient;
pub use error::{ClientError, Result};
