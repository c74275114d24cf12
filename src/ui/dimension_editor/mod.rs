// SPDX-License-Identifier: MPL-2.0
//! Dimension editor panel: width/height inputs with an aspect-ratio lock.
//!
//! This module follows the "state down, messages up" pattern used by the rest
//! of the UI. The panel never touches pixels: it only tracks candidate
//! dimensions and hands a [`ResizeRequest`] back to the host through
//! [`Event::ResizeRequested`]. The host owns the `busy` flag and passes it in
//! through [`ViewContext`] while a request is in flight.

mod state;
mod view;

pub use state::{parse_dimension_input, DimensionState, Dimensions, ResizeRequest};

use crate::i18n::fluent::I18n;
use iced::Element;

/// Messages emitted by the panel widgets.
#[derive(Debug, Clone)]
pub enum Message {
    WidthInputChanged(String),
    HeightInputChanged(String),
    ToggleLockAspect,
    ApplyResize,
}

/// Events propagated to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user confirmed new dimensions.
    ResizeRequested { width: u32, height: u32 },
}

impl From<ResizeRequest> for Event {
    fn from(request: ResizeRequest) -> Self {
        Event::ResizeRequested {
            width: request.width,
            height: request.height,
        }
    }
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Host-owned flag; true while a previous request is outstanding.
    pub busy: bool,
}

/// Local UI state for the dimension editor panel.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    dimensions: DimensionState,
}

impl State {
    /// Creates the panel for an image of the given size.
    pub fn new(source: Dimensions) -> Self {
        Self::with_lock(source, true)
    }

    /// Creates the panel with an explicit initial lock state.
    pub fn with_lock(source: Dimensions, aspect_locked: bool) -> Self {
        Self {
            dimensions: DimensionState::new(source, aspect_locked),
        }
    }

    /// Must be called by the host whenever it swaps the active image or the
    /// image size changes; resets the fields when the size differs.
    pub fn set_source(&mut self, source: Dimensions) {
        if self.dimensions.set_source(source) {
            log::debug!(
                "dimension editor synced to {}x{}",
                source.width,
                source.height
            );
        }
    }

    /// Update the state and emit an [`Event`] for the host when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::WidthInputChanged(value) => {
                self.dimensions.edit_width(&value);
                Event::None
            }
            Message::HeightInputChanged(value) => {
                self.dimensions.edit_height(&value);
                Event::None
            }
            Message::ToggleLockAspect => {
                self.dimensions.toggle_lock();
                Event::None
            }
            Message::ApplyResize => self.submit(),
        }
    }

    /// Emits a resize request if both candidates are strictly positive.
    pub fn submit(&self) -> Event {
        match self.dimensions.submit() {
            Some(request) => {
                log::debug!("resize requested: {}x{}", request.width, request.height);
                request.into()
            }
            None => Event::None,
        }
    }

    /// Render the panel.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::panel(&self.dimensions, &ctx)
    }

    pub fn width(&self) -> i64 {
        self.dimensions.width
    }

    pub fn height(&self) -> i64 {
        self.dimensions.height
    }

    pub fn is_aspect_locked(&self) -> bool {
        self.dimensions.aspect_locked
    }

    pub fn source(&self) -> Dimensions {
        self.dimensions.source()
    }

    pub fn has_changed(&self) -> bool {
        self.dimensions.has_changed()
    }

    pub fn inputs_enabled(&self, busy: bool) -> bool {
        self.dimensions.inputs_enabled(busy)
    }

    pub fn lock_toggle_enabled(&self, busy: bool) -> bool {
        self.dimensions.lock_toggle_enabled(busy)
    }

    /// Whether the apply button is enabled.
    pub fn can_submit(&self, busy: bool) -> bool {
        self.dimensions.can_submit(busy)
    }
}

#[cfg(test)]
mod tests;
