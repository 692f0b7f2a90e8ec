//! Headless frame-loop tests: drive the views with `Context::run` and
//! observe the controller state they render from.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use egui::{Modifiers, Pos2, RawInput, Rect, Vec2};
use egui_titlebar::{
    ActionItem, ActionRegistry, ActionValue, MenuEntry, MenuItem, Platform, TitleBar, WindowFrame,
};

fn raw_input() -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))),
        ..Default::default()
    }
}

fn menus() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("File")
            .add_item(ActionItem::new("Open File", "openFile", "path/to/x").with_shortcut("Ctrl+O"))
            .add_item(MenuItem::separator())
            .add_item(ActionItem::new("Exit", "exit", 0)),
        MenuEntry::new("Help"),
    ]
}

#[test]
fn bar_starts_hidden_and_alt_reveals_it_once_per_press() {
    let ctx = egui::Context::default();
    let mut title_bar = TitleBar::new()
        .with_platform(Platform::Windows)
        .with_title("Smoke")
        .with_menus(menus());

    let _ = ctx.run(raw_input(), |ctx| title_bar.show(ctx));
    assert!(!title_bar.controller().bar_visible());

    // Holding the modifier across many frames must toggle exactly once.
    let mut held = raw_input();
    held.modifiers = Modifiers {
        alt: true,
        ..Default::default()
    };
    for _ in 0..3 {
        let _ = ctx.run(held.clone(), |ctx| title_bar.show(ctx));
    }
    assert!(title_bar.controller().bar_visible());

    // Release, press again: hidden again.
    let _ = ctx.run(raw_input(), |ctx| title_bar.show(ctx));
    let _ = ctx.run(held, |ctx| title_bar.show(ctx));
    assert!(!title_bar.controller().bar_visible());
}

#[test]
fn mac_and_generic_bars_render_headless() {
    for platform in [Platform::Mac, Platform::Windows] {
        let ctx = egui::Context::default();
        let mut title_bar = TitleBar::new()
            .with_platform(platform)
            .with_title("Smoke")
            .with_menus(menus());
        for _ in 0..2 {
            let _ = ctx.run(raw_input(), |ctx| title_bar.show(ctx));
        }
        assert_eq!(title_bar.controller().active_index(), None);
    }
}

#[test]
fn window_frame_renders_content_and_chrome() {
    let ctx = egui::Context::default();
    let mut frame = WindowFrame::new(Platform::Windows)
        .with_title("Smoke")
        .with_menus(menus());

    let mut content_frames = 0;
    for _ in 0..2 {
        let _ = ctx.run(raw_input(), |ctx| {
            frame.show(ctx, |ui| {
                ui.label("content");
                content_frames += 1;
            });
        });
    }
    assert_eq!(content_frames, 2);
}

#[test]
fn programmatic_selection_dispatches_through_the_registry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let sink = calls.clone();
    let mut title_bar = TitleBar::new()
        .with_platform(Platform::Windows)
        .with_menus(menus())
        .with_actions(ActionRegistry::new().with_action("openFile", move |value| {
            assert_eq!(value, &ActionValue::Text("path/to/x".into()));
            sink.fetch_add(1, Ordering::SeqCst);
        }));

    title_bar.select("openFile", &"path/to/x".into());
    title_bar.select("missing", &ActionValue::default());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(title_bar.controller().active_index(), None);
}
