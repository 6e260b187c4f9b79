//! Book Catalog Studio GUI.
//!
//! An Iced application over the `bcs-wizard` core: the wizard state only
//! changes through its reducer, the handlers translate screen messages
//! into reducer actions, and the two service calls run as tasks.

pub mod app;
pub mod component;
mod handler;
pub mod message;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
