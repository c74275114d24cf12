// SPDX-License-Identifier: MPL-2.0
//! Root layout: header with the open button, image preview, resize panel and
//! status line.

use super::{Message, Status};
use crate::i18n::fluent::I18n;
use crate::media::ImageDocument;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::dimension_editor::{self, ViewContext as EditorViewContext};
use crate::ui::styles;
use iced::widget::{button, container, image, scrollable, text, Column, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};

/// Maximum height of the preview, in logical pixels.
const PREVIEW_MAX_HEIGHT: f32 = 280.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub document: Option<&'a ImageDocument>,
    pub editor: Option<&'a dimension_editor::State>,
    pub busy: bool,
    pub status: Option<&'a Status>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .max_width(sizing::PANEL_WIDTH)
        .push(header(&ctx));

    match (ctx.document, ctx.editor) {
        (Some(document), Some(editor)) => {
            content = content.push(preview(document, ctx.i18n)).push(
                editor
                    .view(EditorViewContext {
                        i18n: ctx.i18n,
                        busy: ctx.busy,
                    })
                    .map(Message::Editor),
            );
        }
        _ => {
            content = content.push(
                text(ctx.i18n.tr("empty-state-hint"))
                    .size(typography::BODY)
                    .style(text::secondary),
            );
        }
    }

    if let Some(status) = ctx.status {
        content = content.push(status_line(status, ctx.i18n));
    }

    let body = container(content)
        .padding(spacing::LG)
        .center_x(Length::Fill);

    scrollable(body).height(Length::Fill).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let open = button(text(ctx.i18n.tr("open-image-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::selected);
    // No new document while a resize is running
    let open = if ctx.busy {
        open
    } else {
        open.on_press(Message::OpenFileDialog)
    };

    let name = ctx
        .document
        .map(|document| {
            document
                .file_name()
                .unwrap_or_else(|| ctx.i18n.tr("untitled-image"))
        })
        .unwrap_or_default();

    Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .width(Length::Fill)
        .push(text(name).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(open)
        .into()
}

fn preview<'a>(document: &'a ImageDocument, i18n: &I18n) -> Element<'a, Message> {
    let dimensions = document.dimensions();
    let label = i18n.tr_with_args(
        "image-dimensions",
        &[
            ("width", &dimensions.width.to_string()),
            ("height", &dimensions.height.to_string()),
        ],
    );

    Column::new()
        .spacing(spacing::XS)
        .align_x(Alignment::Center)
        .push(
            image(document.handle().clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_MAX_HEIGHT)),
        )
        .push(
            text(label)
                .size(typography::CAPTION)
                .style(text::secondary),
        )
        .into()
}

fn status_line<'a>(status: &Status, i18n: &I18n) -> Element<'a, Message> {
    let color = status.severity.color();
    container(text(i18n.tr(&status.key)).size(typography::BODY_SM).color(color))
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::status(color))
        .into()
}
