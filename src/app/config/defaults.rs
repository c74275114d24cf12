// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::media::ResizeFilter;

/// Whether the aspect-ratio lock starts engaged for a newly created panel.
pub const DEFAULT_LOCK_ASPECT: bool = true;

/// Resampling filter used when applying a resize.
pub const DEFAULT_RESIZE_FILTER: ResizeFilter = ResizeFilter::Lanczos3;

/// Fallback locale when neither CLI, config nor OS yields a shipped one.
pub const DEFAULT_LOCALE: &str = "en-US";
