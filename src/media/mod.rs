// SPDX-License-Identifier: MPL-2.0
//! Image document handed to the resize panel's host.
//!
//! The panel itself never sees pixels. The host keeps the decoded image here,
//! reports its dimensions to the panel, and swaps in a resized copy when a
//! request completes.

pub mod image_transform;

pub use image_transform::{resize, ResizeFilter};

use crate::error::Result;
use crate::ui::dimension_editor::Dimensions;
use iced::widget::image;
use image_rs::DynamicImage;
use std::path::{Path, PathBuf};

/// Image file extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// A decoded image plus a display handle for the preview.
#[derive(Debug, Clone)]
pub struct ImageDocument {
    /// File the image was loaded from, if any.
    pub path: Option<PathBuf>,
    image: DynamicImage,
    handle: image::Handle,
}

impl ImageDocument {
    pub fn new(path: Option<PathBuf>, image: DynamicImage) -> Self {
        let rgba = image.to_rgba8();
        let handle = image::Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw());
        Self {
            path,
            image,
            handle,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.image.width(), self.image.height())
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// File name for the window title, if the document came from disk.
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Opens and decodes an image file.
pub fn load(path: &Path) -> Result<ImageDocument> {
    let image = image_rs::open(path)?;
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(ImageDocument::new(Some(path.to_path_buf()), image))
}
