//! The outer borderless-window shell: background, border stroke, resize
//! handles, and the platform value handed down to the titlebar.

use egui::{CentralPanel, Color32, Context, Frame, ImageSource, Stroke, Ui};

use crate::menu::{ActionRegistry, MenuEntry};
use crate::titlebar::TitleBar;
use crate::utils::resize_handles::render_resize_handles;

/// Which platform's titlebar conventions to render.
///
/// Chosen once at the frame boundary and passed down read-only; the menu
/// system never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Drawn window controls on the right (also used on Linux).
    Windows,
    /// Traffic light controls on the left.
    Mac,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Windows
        }
    }

    pub(crate) fn title_bar_height(self) -> f32 {
        match self {
            Self::Mac => 28.0,
            Self::Windows => 32.0,
        }
    }
}

/// Borderless-window shell wrapping a [`TitleBar`] and the application
/// content.
///
/// # Examples
///
/// ```no_run
/// use egui_titlebar::{Platform, WindowFrame};
///
/// struct App {
///     frame: WindowFrame,
/// }
///
/// impl eframe::App for App {
///     fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
///         self.frame.show(ctx, |ui| {
///             ui.label("Main content");
///         });
///     }
/// }
/// ```
///
/// The host window must be created without native decorations for the shell
/// to make sense (`ViewportBuilder::default().with_decorations(false)`).
pub struct WindowFrame {
    title_bar: TitleBar,
    fill: Color32,
    border_color: Color32,
    resizable: bool,
    has_icon: bool,
    loaders_installed: bool,
}

impl WindowFrame {
    /// Create a shell for the given platform.
    pub fn new(platform: Platform) -> Self {
        Self {
            title_bar: TitleBar::new().with_platform(platform),
            fill: Color32::from_rgb(24, 24, 24),
            // Subtle default, as borderless windows conventionally carry.
            border_color: Color32::from_rgba_unmultiplied(199, 199, 199, 13),
            resizable: true,
            has_icon: false,
            loaders_installed: false,
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title_bar = self.title_bar.with_title(title);
        self
    }

    /// Set the application icon. Image loaders are installed on first show.
    pub fn with_icon(mut self, icon: ImageSource<'static>) -> Self {
        self.title_bar = self.title_bar.with_icon(icon);
        self.has_icon = true;
        self
    }

    /// Set the menu tree rendered by the titlebar.
    pub fn with_menus(mut self, menus: Vec<MenuEntry>) -> Self {
        self.title_bar = self.title_bar.with_menus(menus);
        self
    }

    /// Set the action registry that menu selections dispatch into.
    pub fn with_actions(mut self, registry: ActionRegistry) -> Self {
        self.title_bar = self.title_bar.with_actions(registry);
        self
    }

    /// Set the content background color.
    pub fn with_fill(mut self, color: Color32) -> Self {
        self.fill = color;
        self
    }

    /// Set the window border color.
    pub fn with_border_color(mut self, color: Color32) -> Self {
        self.border_color = color;
        self
    }

    /// Disable the invisible edge/corner resize handles.
    pub fn fixed_size(mut self) -> Self {
        self.resizable = false;
        self
    }

    /// The wrapped titlebar, for finer configuration.
    pub fn title_bar_mut(&mut self) -> &mut TitleBar {
        &mut self.title_bar
    }

    /// Render the shell: titlebar, bordered content panel, resize handles.
    pub fn show<R>(&mut self, ctx: &Context, content: impl FnOnce(&mut Ui) -> R) {
        if self.has_icon && !self.loaders_installed {
            egui_extras::install_image_loaders(ctx);
            self.loaders_installed = true;
        }

        self.title_bar.show(ctx);

        CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(self.fill)
                    .stroke(Stroke::new(1.0, self.border_color)),
            )
            .show(ctx, content);

        if self.resizable {
            render_resize_handles(ctx);
        }
    }
}
