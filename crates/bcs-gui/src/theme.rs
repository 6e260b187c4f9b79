//! Flat theme for Book Catalog Studio.
//!
//! Color constants, spacing scale and the widget style functions the views
//! share. Everything is light-mode; the wizard is a single small window.

#![allow(dead_code)]

use iced::widget::{button, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;

pub const GRAY_100: Color = Color::from_rgb(0.96, 0.97, 0.98);
pub const GRAY_200: Color = Color::from_rgb(0.90, 0.91, 0.93);
pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.49);
pub const GRAY_600: Color = Color::from_rgb(0.29, 0.33, 0.39);
pub const GRAY_800: Color = Color::from_rgb(0.12, 0.16, 0.22);
pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);

/// Accent used for primary actions and the active step counter.
pub const PRIMARY_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
pub const PRIMARY_600: Color = Color::from_rgb(0.15, 0.39, 0.92);

pub const SUCCESS: Color = Color::from_rgb(0.09, 0.64, 0.29);
pub const ERROR: Color = Color::from_rgb(0.86, 0.15, 0.15);

// =============================================================================
// SPACING SCALE
// =============================================================================

pub const SPACING_XS: f32 = 4.0;
pub const SPACING_SM: f32 = 8.0;
pub const SPACING_MD: f32 = 16.0;
pub const SPACING_LG: f32 = 24.0;
pub const SPACING_XL: f32 = 32.0;

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 6.0;
/// Fully round - the step counter circles.
pub const BORDER_RADIUS_FULL: f32 = 999.0;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button - Next/Add actions.
pub fn button_primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(PRIMARY_500.into()),
            text_color: WHITE,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(PRIMARY_600.into()),
            text_color: WHITE,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_300.into()),
            text_color: GRAY_500,
            border: Border {
                radius: BORDER_RADIUS_SM.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            shadow: Shadow::default(),
            ..Default::default()
        },
    }
}

/// Secondary button - Back actions.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => GRAY_200,
        _ => GRAY_100,
    };
    button::Style {
        background: Some(background.into()),
        text_color: GRAY_800,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: GRAY_300,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Pick buttons on the genre/subgenre screens, inactive state.
pub fn button_choice(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => PRIMARY_500,
        _ => GRAY_300,
    };
    button::Style {
        background: Some(WHITE.into()),
        text_color: GRAY_800,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: border_color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Pick buttons, highlighted state for the current selection.
pub fn button_choice_active(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(PRIMARY_500.into()),
        text_color: WHITE,
        border: Border {
            radius: BORDER_RADIUS_MD.into(),
            width: 1.0,
            color: PRIMARY_600,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => PRIMARY_500,
        text_input::Status::Hovered => GRAY_500,
        _ => GRAY_300,
    };
    text_input::Style {
        background: WHITE.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: GRAY_500,
        placeholder: GRAY_500,
        value: GRAY_900,
        selection: GRAY_200,
    }
}

/// Text input style for fields whose last validation failed.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let mut style = text_input_default(theme, status);
    style.border.color = ERROR;
    style.border.width = 2.0;
    style
}
