// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageDocument;
use crate::ui::dimension_editor;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(dimension_editor::Message),
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// An image finished loading (or failed to).
    ImageLoaded(Result<ImageDocument, Error>),
    /// A resize requested by the panel finished (or failed to).
    ///
    /// `generation` identifies the document the resize started from.
    ResizeCompleted {
        generation: u64,
        result: Result<ImageDocument, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preload on startup.
    pub file_path: Option<String>,
}
