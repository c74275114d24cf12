// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the loaded image, the dimension editor panel and the `busy`
//! flag. The panel reports resize requests through its `Event`s; the actual
//! resampling runs on a blocking worker and the result is fed back with
//! `set_source` so the panel resets to the new size.

pub mod config;
mod message;
pub mod paths;
mod status;
mod update;
mod view;

pub use message::{Flags, Message};
pub use status::{Severity, Status};

use crate::i18n::fluent::I18n;
use crate::media::ImageDocument;
use crate::ui::dimension_editor;
use crate::ui::theming::ThemeMode;
use config::EditorConfig;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    editor_config: EditorConfig,
    document: Option<ImageDocument>,
    editor: Option<dimension_editor::State>,
    /// True while a resize is running; disables the panel's apply button.
    busy: bool,
    status: Option<Status>,
    generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_document", &self.document.is_some())
            .field("busy", &self.busy)
            .field("status", &self.status)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            editor_config: EditorConfig::default(),
            document: None,
            editor: None,
            busy: false,
            status: None,
            generation: 0,
        }
    }
}

impl App {
    /// Initializes application state and optionally starts loading the image
    /// passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            theme_mode: config.general.theme_mode,
            editor_config: config.editor,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.status = Some(Status::warning(key));
        }

        let task = match flags.file_path {
            Some(path) => update::load_image(PathBuf::from(path)),
            None => Task::none(),
        };
        (app, task)
    }

    fn title(&self) -> String {
        let Some(document) = &self.document else {
            return self.i18n.tr("app-title");
        };

        let name = document
            .file_name()
            .unwrap_or_else(|| self.i18n.tr("untitled-image"));
        let dimensions = document.dimensions();
        let width = dimensions.width.to_string();
        let height = dimensions.height.to_string();
        self.i18n.tr_with_args(
            "window-title",
            &[("name", &name), ("width", &width), ("height", &height)],
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            editor_config: &self.editor_config,
            document: &mut self.document,
            editor: &mut self.editor,
            busy: &mut self.busy,
            status: &mut self.status,
            generation: &mut self.generation,
        };

        match message {
            Message::Editor(message) => update::handle_editor_message(&mut ctx, message),
            Message::OpenFileDialog => {
                if *ctx.busy {
                    return Task::none();
                }
                update::open_file_dialog()
            }
            Message::OpenFileDialogResult(Some(path)) => update::load_image(path),
            Message::OpenFileDialogResult(None) => Task::none(),
            Message::ImageLoaded(result) => update::handle_image_loaded(&mut ctx, result),
            Message::ResizeCompleted { generation, result } => {
                update::handle_resize_completed(&mut ctx, generation, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            document: self.document.as_ref(),
            editor: self.editor.as_ref(),
            busy: self.busy,
            status: self.status.as_ref(),
        })
    }
}
