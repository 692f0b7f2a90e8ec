//! The custom titlebar view: icon, centered title, dropdown menu bar and
//! window controls, rendered into a borderless window.

pub mod control_buttons;
mod render_bar;
mod render_menu;

use egui::{Color32, Id, ImageSource, Rect};

use crate::frame::Platform;
use crate::menu::{ActionRegistry, ActionValue, MenuController, MenuEntry};
use crate::titlebar::control_buttons::WindowControls;

/// Custom titlebar for borderless egui windows.
///
/// The titlebar renders an optional icon, a centered window title, a
/// hidden-by-default dropdown menu bar revealed with Alt, and platform
/// appropriate window controls. All menu interaction state lives in a
/// [`MenuController`]; the titlebar itself is a pure function of that state.
///
/// # Examples
///
/// ```no_run
/// use egui_titlebar::{ActionRegistry, ActionItem, MenuEntry, MenuItem, TitleBar};
///
/// let title_bar = TitleBar::new()
///     .with_title("My App")
///     .with_menus(vec![
///         MenuEntry::new("File")
///             .add_item(ActionItem::new("Open File", "openFile", "").with_shortcut("Ctrl+O"))
///             .add_item(MenuItem::separator())
///             .add_item(ActionItem::new("Exit", "exit", 0)),
///     ])
///     .with_actions(ActionRegistry::new().with_action("exit", |_| std::process::exit(0)));
/// ```
///
/// Then call [`TitleBar::show`] every frame, before the rest of the UI.
pub struct TitleBar {
    pub(crate) id: Id,
    pub(crate) platform: Platform,
    pub(crate) title: Option<String>,
    pub(crate) icon: Option<ImageSource<'static>>,

    pub(crate) menus: Vec<MenuEntry>,
    pub(crate) registry: ActionRegistry,
    pub(crate) controller: MenuController,
    pub(crate) controls: WindowControls,

    pub(crate) background_color: Color32,
    pub(crate) title_color: Color32,
    pub(crate) title_font_size: f32,
    pub(crate) menu_text_color: Color32,
    pub(crate) menu_hover_color: Color32,
    pub(crate) menu_text_size: f32,
    pub(crate) popup_background_color: Color32,
    pub(crate) popup_text_color: Color32,
    pub(crate) popup_hover_color: Color32,
    pub(crate) popup_shortcut_color: Color32,
    pub(crate) popup_border_color: Color32,
    pub(crate) popup_separator_color: Color32,

    // Per-frame geometry the popup overlay and the outside-press test need.
    pub(crate) alt_was_down: bool,
    pub(crate) menu_positions: Vec<f32>,
    pub(crate) menu_bar_rect: Option<Rect>,
    pub(crate) popup_rect: Option<Rect>,
}

impl TitleBar {
    /// Create a titlebar for the current platform with no title, icon or
    /// menus.
    pub fn new() -> Self {
        let platform = Platform::current();
        Self {
            id: Id::new("egui_titlebar"),
            platform,
            title: None,
            icon: None,
            menus: Vec::new(),
            registry: ActionRegistry::new(),
            controller: MenuController::new(0),
            controls: WindowControls::new(platform),
            background_color: Color32::from_rgb(30, 30, 30),
            title_color: Color32::from_rgb(200, 200, 200),
            title_font_size: 13.0,
            menu_text_color: Color32::from_rgb(200, 200, 200),
            menu_hover_color: Color32::from_rgb(50, 50, 50),
            menu_text_size: 14.0,
            popup_background_color: Color32::from_rgb(35, 35, 35),
            popup_text_color: Color32::from_rgb(200, 200, 200),
            popup_hover_color: Color32::from_rgb(55, 55, 55),
            popup_shortcut_color: Color32::from_rgb(140, 140, 140),
            popup_border_color: Color32::from_rgb(70, 70, 70),
            popup_separator_color: Color32::from_rgb(90, 90, 90),
            alt_was_down: false,
            menu_positions: Vec::new(),
            menu_bar_rect: None,
            popup_rect: None,
        }
    }

    /// Set the window title, drawn centered while the menu bar is hidden.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the application icon shown at the left edge.
    ///
    /// The embedding application must have egui image loaders installed for
    /// the icon to decode; [`WindowFrame`](crate::frame::WindowFrame) takes
    /// care of that.
    pub fn with_icon(mut self, icon: ImageSource<'static>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Override the platform whose titlebar conventions are used. Defaults
    /// to [`Platform::current`].
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self.controls = WindowControls::new(platform);
        self
    }

    /// Set the menu tree. Replaces any previous one; an active menu that no
    /// longer exists is closed.
    pub fn with_menus(mut self, menus: Vec<MenuEntry>) -> Self {
        self.controller.set_entry_count(menus.len());
        self.menus = menus;
        self
    }

    /// Set the action registry that menu selections dispatch into.
    pub fn with_actions(mut self, registry: ActionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the titlebar background color.
    pub fn with_background_color(mut self, color: Color32) -> Self {
        self.background_color = color;
        self
    }

    /// Set the color of the centered window title.
    pub fn with_title_color(mut self, color: Color32) -> Self {
        self.title_color = color;
        self
    }

    /// Set the color of menu title text.
    pub fn with_menu_text_color(mut self, color: Color32) -> Self {
        self.menu_text_color = color;
        self
    }

    /// Set the hover/active highlight color for menu titles.
    pub fn with_menu_hover_color(mut self, color: Color32) -> Self {
        self.menu_hover_color = color;
        self
    }

    /// Set the font size of menu title text.
    pub fn with_menu_text_size(mut self, size: f32) -> Self {
        self.menu_text_size = size;
        self
    }

    /// The controller owning all menu interaction state.
    pub fn controller(&self) -> &MenuController {
        &self.controller
    }

    /// Programmatic menu selection, bypassing the popup. Closes any active
    /// menu and dispatches like a click on an actionable row.
    pub fn select(&mut self, action: &str, value: &ActionValue) {
        self.controller.on_item_select(action, value, &self.registry);
    }

    pub(crate) fn should_show_title(&self) -> bool {
        !self.controller.bar_visible()
    }

    pub(crate) fn title_bar_height(&self) -> f32 {
        self.platform.title_bar_height()
    }

    // Reveal/hide the menu bar on the modifier's down-edge. Edge detection
    // doubles as key-repeat filtering.
    pub(crate) fn handle_alt_toggle(&mut self, ctx: &egui::Context) {
        let alt_down = ctx.input(|i| i.modifiers.alt);
        if alt_down && !self.alt_was_down {
            self.controller.on_alt_key_toggle();
        }
        self.alt_was_down = alt_down;
    }
}

impl Default for TitleBar {
    fn default() -> Self {
        Self::new()
    }
}
