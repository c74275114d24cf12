// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! The dimension editor only emits requests; everything with side effects
//! (file dialogs, decoding, resampling) is started here as a `Task`.

use super::config::EditorConfig;
use super::status::Status;
use super::Message;
use crate::error::{Error, Result};
use crate::media::{self, ImageDocument};
use crate::ui::dimension_editor::{self, Event as EditorEvent};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub(super) struct UpdateContext<'a> {
    pub editor_config: &'a EditorConfig,
    pub document: &'a mut Option<ImageDocument>,
    pub editor: &'a mut Option<dimension_editor::State>,
    pub busy: &'a mut bool,
    pub status: &'a mut Option<Status>,
    /// Bumped on every successful load; tags resizes with the document they started from.
    pub generation: &'a mut u64,
}

pub(super) fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: dimension_editor::Message,
) -> Task<Message> {
    let Some(editor) = ctx.editor.as_mut() else {
        return Task::none();
    };

    match editor.update(message) {
        EditorEvent::None => Task::none(),
        EditorEvent::ResizeRequested { width, height } => start_resize(ctx, width, height),
    }
}

fn start_resize(ctx: &mut UpdateContext<'_>, width: u32, height: u32) -> Task<Message> {
    if *ctx.busy {
        log::warn!("ignoring resize to {width}x{height}: a resize is already running");
        return Task::none();
    }
    let Some(document) = ctx.document.clone() else {
        return Task::none();
    };

    let filter = ctx.editor_config.filter();
    let generation = *ctx.generation;
    log::info!("resizing to {width}x{height} with {filter:?}");
    *ctx.busy = true;
    *ctx.status = Some(Status::info("status-resizing"));

    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::resize(&document, width, height, filter))
                .await
                .unwrap_or_else(|err| Err(Error::Image(err.to_string())))
        },
        move |result| Message::ResizeCompleted { generation, result },
    )
}

pub(super) fn handle_resize_completed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<ImageDocument>,
) -> Task<Message> {
    *ctx.busy = false;

    // Another image was loaded while resampling; the result belongs to the old one
    if generation != *ctx.generation {
        log::debug!("discarding resize of a replaced image");
        *ctx.status = None;
        return Task::none();
    }

    match result {
        Ok(document) => {
            let dimensions = document.dimensions();
            log::info!("resize finished: {}x{}", dimensions.width, dimensions.height);
            if let Some(editor) = ctx.editor.as_mut() {
                editor.set_source(dimensions);
            }
            *ctx.document = Some(document);
            *ctx.status = Some(Status::success("status-resized"));
        }
        Err(err) => {
            log::error!("resize failed: {err}");
            *ctx.status = Some(Status::error(err.i18n_key()));
        }
    }
    Task::none()
}

pub(super) fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageDocument>,
) -> Task<Message> {
    match result {
        Ok(document) => {
            let dimensions = document.dimensions();
            match ctx.editor.as_mut() {
                Some(editor) => editor.set_source(dimensions),
                None => {
                    *ctx.editor = Some(dimension_editor::State::with_lock(
                        dimensions,
                        ctx.editor_config.lock_aspect(),
                    ));
                }
            }
            *ctx.document = Some(document);
            *ctx.generation = ctx.generation.wrapping_add(1);
            *ctx.status = None;
        }
        Err(err) => {
            log::error!("failed to load image: {err}");
            *ctx.status = Some(Status::error(err.i18n_key()));
        }
    }
    Task::none()
}

pub(super) fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub(super) fn load_image(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load(&path))
                .await
                .unwrap_or_else(|err| Err(Error::Io(err.to_string())))
        },
        Message::ImageLoaded,
    )
}
