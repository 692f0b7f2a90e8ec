//! Custom window titlebar with dropdown menus for borderless egui
//! applications.
//!
//! The crate renders an OS-native-looking titlebar (icon, centered title,
//! Alt-revealed menu bar, window controls) inside a window created without
//! native decorations, and coordinates all keyboard/mouse interaction with
//! the menu bar:
//!
//! - at most one menu is open at a time; clicking its title again closes
//!   it, clicking or hovering another title switches to it;
//! - a press outside the open popup closes it, and the click completing
//!   that gesture is swallowed instead of reopening a menu;
//! - selecting an item closes the menu and dispatches the item's action
//!   identifier and value into an [`ActionRegistry`] supplied by the
//!   embedding application.
//!
//! All interaction state lives in [`MenuController`]; the views render from
//! it and never keep state of their own.
//!
//! # Examples
//!
//! ```no_run
//! use egui_titlebar::{ActionItem, ActionRegistry, MenuEntry, MenuItem, Platform, WindowFrame};
//!
//! struct App {
//!     frame: WindowFrame,
//! }
//!
//! impl eframe::App for App {
//!     fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
//!         self.frame.show(ctx, |ui| {
//!             ui.label("Main content");
//!         });
//!     }
//! }
//!
//! fn main() -> eframe::Result<()> {
//!     let options = eframe::NativeOptions {
//!         viewport: egui::ViewportBuilder::default()
//!             .with_decorations(false)
//!             .with_inner_size([800.0, 600.0]),
//!         ..Default::default()
//!     };
//!
//!     let frame = WindowFrame::new(Platform::current())
//!         .with_title("My App")
//!         .with_menus(vec![
//!             MenuEntry::new("File")
//!                 .add_item(ActionItem::new("Open File", "openFile", "").with_shortcut("Ctrl+O"))
//!                 .add_item(MenuItem::separator())
//!                 .add_item(ActionItem::new("Exit", "exit", 0).with_shortcut("Alt+F4")),
//!         ])
//!         .with_actions(ActionRegistry::new().with_action("exit", |_| std::process::exit(0)));
//!
//!     let app = App { frame };
//!     eframe::run_native(
//!         "My App",
//!         options,
//!         Box::new(move |_cc| Ok(Box::new(app))),
//!     )
//! }
//! ```

pub mod frame;
pub mod menu;
pub mod titlebar;
pub mod utils;

pub use frame::{Platform, WindowFrame};
pub use menu::{
    ActionHandler, ActionItem, ActionRegistry, ActionValue, DispatchError, MenuBarState,
    MenuController, MenuEntry, MenuItem, SEPARATOR_NAME, SUPPRESS_WINDOW_SECS,
};
pub use titlebar::TitleBar;
pub use titlebar::control_buttons::{WindowControlIcon, WindowControls};
pub use utils::resize_handles::render_resize_handles;
