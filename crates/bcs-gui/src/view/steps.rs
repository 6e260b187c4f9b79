//! The step indicator strip.
//!
//! One numbered circle per flow step with its label underneath; the
//! placeholder slot renders "…" so the step count stays stable while
//! later steps are undetermined.

use iced::widget::{column, container, row, text};
use iced::{Alignment, Border, Color, Element};

use bcs_wizard::Flow;

use crate::message::Message;
use crate::theme::{
    BORDER_RADIUS_FULL, GRAY_200, GRAY_500, GRAY_600, PRIMARY_500, SPACING_LG, SPACING_XS, WHITE,
};

/// Render the indicator for the resolved flow and the current 1-based step.
pub fn view_steps<'a>(flow: Flow, current: usize) -> Element<'a, Message> {
    let mut strip = row![].spacing(SPACING_LG);

    for (index, step) in flow.steps().iter().enumerate() {
        let number = index + 1;
        let is_active = !step.is_placeholder() && current == number;

        let counter_label = if step.is_placeholder() {
            "…".to_string()
        } else {
            number.to_string()
        };

        let counter = container(
            text(counter_label)
                .size(14)
                .color(if is_active { WHITE } else { GRAY_600 }),
        )
        .padding([6.0, 12.0])
        .style(move |_theme| container::Style {
            background: Some(if is_active {
                PRIMARY_500.into()
            } else {
                GRAY_200.into()
            }),
            border: Border {
                radius: BORDER_RADIUS_FULL.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        });

        let cell = column![counter, text(step.label()).size(12).color(GRAY_500)]
            .spacing(SPACING_XS)
            .align_x(Alignment::Center);

        strip = strip.push(cell);
    }

    strip.into()
}
