//! Book Catalog Studio - Desktop GUI Application
//!
//! A multi-step wizard for entering a new book's catalog metadata and
//! submitting it to the catalog service.
//!
//! Built with Iced using the Elm architecture (State, Message, Update, View).

use iced::window;
use iced::Size;

use bcs_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Book Catalog Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(760.0, 860.0),
            min_size: Some(Size::new(640.0, 640.0)),
            ..Default::default()
        })
        .run()
}
