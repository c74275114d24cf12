// SPDX-License-Identifier: MPL-2.0
//! Layout of the dimension editor panel.

use super::{DimensionState, Message, ViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, text, text_input, tooltip, Column, Row};
use iced::{Alignment, Element, Length};

/// Fixed width of each numeric field.
const FIELD_WIDTH: f32 = 112.0;
/// Upper bound for the apply button width.
const APPLY_MAX_WIDTH: f32 = 320.0;

pub fn panel<'a>(dimensions: &DimensionState, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(Alignment::Center)
        .push(text(ctx.i18n.tr("dimension-editor-title")).size(typography::TITLE_SM))
        .push(
            text(ctx.i18n.tr("dimension-editor-subtitle"))
                .size(typography::BODY_SM)
                .style(text::secondary),
        );

    let width_field = dimension_field(
        ctx.i18n.tr("dimension-editor-width-label"),
        dimensions.width,
        Message::WidthInputChanged,
        dimensions.inputs_enabled(ctx.busy),
    );
    let height_field = dimension_field(
        ctx.i18n.tr("dimension-editor-height-label"),
        dimensions.height,
        Message::HeightInputChanged,
        dimensions.inputs_enabled(ctx.busy),
    );

    let dimensions_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::End)
        .push(width_field)
        .push(lock_toggle(
            dimensions.aspect_locked,
            dimensions.lock_toggle_enabled(ctx.busy),
            ctx,
        ))
        .push(height_field);

    let apply_btn = {
        let btn = button(
            text(ctx.i18n.tr("dimension-editor-apply"))
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .center(),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::button::apply);

        // Enabled only when not busy, changed and both values positive
        if dimensions.can_submit(ctx.busy) {
            btn.on_press(Message::ApplyResize)
        } else {
            btn
        }
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(header)
        .push(dimensions_row)
        .push(container(apply_btn).max_width(APPLY_MAX_WIDTH));

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Labelled numeric input. Left without an input handler when disabled, which
/// makes Iced render it as disabled.
fn dimension_field<'a>(
    label: String,
    value: i64,
    on_input: fn(String) -> Message,
    enabled: bool,
) -> Element<'a, Message> {
    let input = text_input(&label, &value.to_string())
        .padding(spacing::XS)
        .size(typography::BODY)
        .align_x(Alignment::Center)
        .width(Length::Fixed(FIELD_WIDTH));
    let input = if enabled { input.on_input(on_input) } else { input };

    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::CAPTION).style(text::secondary))
        .push(input)
        .into()
}

/// Lock toggle with the link glyph.
fn lock_toggle<'a>(locked: bool, enabled: bool, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let (style, hint_key): (fn(&iced::Theme, button::Status) -> button::Style, _) = if locked {
        (styles::button::selected, "dimension-editor-unlock-aspect")
    } else {
        (styles::button::unselected, "dimension-editor-lock-aspect")
    };

    let toggle = button(icons::sized(icons::link(locked), sizing::ICON_SM + 4.0))
        .padding(spacing::XS)
        .style(style)
        .on_press_maybe(enabled.then_some(Message::ToggleLockAspect));

    styles::tooltip::styled(toggle, ctx.i18n.tr(hint_key), tooltip::Position::Top).into()
}
