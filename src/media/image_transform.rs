// SPDX-License-Identifier: MPL-2.0
//! Resize collaborator: delegates resampling to the `image` crate.

use super::ImageDocument;
use crate::error::{Error, Result};
use image_rs::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Resampling filter, selectable from `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Returns a copy of `document` resized to exactly `width` x `height`.
///
/// The aspect ratio is not preserved here; the panel already decided the
/// target. Zero dimensions are rejected.
pub fn resize(
    document: &ImageDocument,
    width: u32,
    height: u32,
    filter: ResizeFilter,
) -> Result<ImageDocument> {
    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "invalid target size {width}x{height}"
        )));
    }

    let resized = document
        .image()
        .resize_exact(width, height, filter.into());
    Ok(ImageDocument::new(document.path.clone(), resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dimension_editor::Dimensions;
    use image_rs::DynamicImage;
    use std::path::PathBuf;

    fn document(width: u32, height: u32) -> ImageDocument {
        ImageDocument::new(
            Some(PathBuf::from("photo.png")),
            DynamicImage::new_rgba8(width, height),
        )
    }

    #[test]
    fn resize_produces_exact_dimensions() {
        let resized = resize(&document(40, 20), 10, 30, ResizeFilter::Triangle).expect("resize");
        assert_eq!(resized.dimensions(), Dimensions::new(10, 30));
    }

    #[test]
    fn resize_keeps_source_path() {
        let resized = resize(&document(8, 8), 4, 4, ResizeFilter::Nearest).expect("resize");
        assert_eq!(resized.path, Some(PathBuf::from("photo.png")));
    }

    #[test]
    fn resize_rejects_zero_dimensions() {
        assert!(matches!(
            resize(&document(8, 8), 0, 4, ResizeFilter::default()),
            Err(Error::Image(_))
        ));
        assert!(matches!(
            resize(&document(8, 8), 4, 0, ResizeFilter::default()),
            Err(Error::Image(_))
        ));
    }

    #[test]
    fn every_filter_maps_to_an_image_filter() {
        for filter in [
            ResizeFilter::Nearest,
            ResizeFilter::Triangle,
            ResizeFilter::CatmullRom,
            ResizeFilter::Gaussian,
            ResizeFilter::Lanczos3,
        ] {
            let resized = resize(&document(6, 6), 3, 3, filter).expect("resize");
            assert_eq!(resized.dimensions(), Dimensions::new(3, 3));
        }
    }
}
