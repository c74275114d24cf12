// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the resize panel widgets.

pub mod button;
pub mod container;
pub mod tooltip;
