// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. `.ftl` files under
//! `assets/i18n/` are embedded at compile time; the active locale is picked
//! from the CLI, then the config file, then the OS, falling back to `en-US`.

pub mod fluent;
