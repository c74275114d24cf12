// SPDX-License-Identifier: MPL-2.0
//! `iced_resizer` is a small image resizer built with the Iced GUI framework.
//!
//! Its centerpiece is the [`ui::dimension_editor`] panel: width and height
//! inputs with an aspect-ratio lock, emitting a resize request once the user
//! picks new positive dimensions. The [`app`] module hosts the panel, loads
//! images and applies the requested resize.

#![doc(html_root_url = "https://docs.rs/iced_resizer/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
