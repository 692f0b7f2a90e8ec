//! Borderless window with a custom titlebar, dropdown menus and window
//! controls. Press Alt to reveal the menu bar.
//!
//! Run with `cargo run --example basic`.

use egui_titlebar::{
    ActionItem, ActionRegistry, ActionValue, MenuEntry, MenuItem, Platform, WindowFrame,
};

fn menus() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("File")
            .add_item(ActionItem::new("Open File", "openFile", "path/to/file").with_shortcut("Ctrl+O"))
            .add_item(MenuItem::separator())
            .add_item(ActionItem::new("Exit", "exit", 0).with_shortcut("Alt+F4")),
        MenuEntry::new("Edit")
            .add_item(ActionItem::new("Undo", "undo", "").with_shortcut("Ctrl+Z"))
            .add_item(ActionItem::new("Redo", "redo", "").with_shortcut("Ctrl+Y")),
        MenuEntry::new("Help").add_item(ActionItem::new("About", "about", "")),
    ]
}

fn actions() -> ActionRegistry {
    ActionRegistry::new()
        .with_action("openFile", |value| {
            if let ActionValue::Text(path) = value {
                println!("open file: {path}");
            }
        })
        .with_action("undo", |_| println!("undo"))
        .with_action("redo", |_| println!("redo"))
        .with_action("about", |_| println!("egui-titlebar demo"))
        .with_action("exit", |_| std::process::exit(0))
}

struct DemoApp {
    frame: WindowFrame,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            frame: WindowFrame::new(Platform::current())
                .with_title("egui-titlebar demo")
                .with_menus(menus())
                .with_actions(actions()),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame.show(ctx, |ui| {
            ui.heading("Borderless window");
            ui.label("Press Alt to reveal the menu bar, then click a menu title.");
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("egui-titlebar demo")
            .with_inner_size([800.0, 600.0])
            .with_decorations(false),
        ..Default::default()
    };

    eframe::run_native(
        "egui-titlebar demo",
        options,
        Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
    )
}
