//! Window-control affordances. These talk directly to the host window
//! manager through viewport commands; the menu system never sees them.

use egui::{
    Color32, Context, CornerRadius, Pos2, Rect, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
    ViewportCommand,
};

use crate::frame::Platform;

/// Glyph drawn on a generic window-control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowControlIcon {
    Minimize,
    Maximize,
    Restore,
    Close,
}

/// Minimize/maximize/close controls in the convention of one platform:
/// traffic lights on the left for mac, drawn-icon buttons on the right
/// otherwise.
pub struct WindowControls {
    platform: Platform,
    tooltips: bool,
    hover_color: Color32,
    close_hover_color: Color32,
    icon_color: Color32,
}

impl WindowControls {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            tooltips: true,
            hover_color: Color32::from_rgb(60, 60, 60),
            close_hover_color: Color32::from_rgb(196, 43, 28),
            icon_color: Color32::from_rgb(200, 200, 200),
        }
    }

    /// Show or hide the hover tooltips ("Close", "Minimize", ...).
    pub fn with_tooltips(mut self, tooltips: bool) -> Self {
        self.tooltips = tooltips;
        self
    }

    /// Render the controls into the current layout and forward clicks to
    /// the window manager.
    pub fn show(&self, ui: &mut Ui, ctx: &Context) {
        match self.platform {
            Platform::Mac => self.show_traffic_lights(ui, ctx),
            Platform::Windows => self.show_generic_buttons(ui, ctx),
        }
    }

    fn show_traffic_lights(&self, ui: &mut Ui, ctx: &Context) {
        let close = self.tooltip(
            Self::traffic_light(ui, Color32::from_rgb(255, 95, 87), 12.0),
            "Close",
        );
        if close.clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        ui.add_space(6.0);

        let minimize = self.tooltip(
            Self::traffic_light(ui, Color32::from_rgb(255, 189, 46), 12.0),
            "Minimize",
        );
        if minimize.clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
        }

        ui.add_space(6.0);

        let is_maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
        let maximize = self.tooltip(
            Self::traffic_light(ui, Color32::from_rgb(40, 201, 55), 12.0),
            if is_maximized { "Restore" } else { "Maximize" },
        );
        if maximize.clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Maximized(!is_maximized));
        }
    }

    // Expects a right-to-left layout, so the close button ends up in the
    // corner.
    fn show_generic_buttons(&self, ui: &mut Ui, ctx: &Context) {
        let close = self.tooltip(
            self.control_button(ui, WindowControlIcon::Close, self.close_hover_color, 16.0),
            "Close",
        );
        if close.clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        let is_maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
        let maximize = self.tooltip(
            self.control_button(
                ui,
                if is_maximized {
                    WindowControlIcon::Restore
                } else {
                    WindowControlIcon::Maximize
                },
                self.hover_color,
                14.0,
            ),
            if is_maximized { "Restore" } else { "Maximize" },
        );
        if maximize.clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Maximized(!is_maximized));
        }

        let minimize = self.tooltip(
            self.control_button(ui, WindowControlIcon::Minimize, self.hover_color, 14.0),
            "Minimize",
        );
        if minimize.clicked() {
            ctx.send_viewport_cmd(ViewportCommand::Minimized(true));
        }
    }

    fn tooltip(&self, response: Response, text: &str) -> Response {
        if self.tooltips {
            response.on_hover_text(text)
        } else {
            response
        }
    }

    fn traffic_light(ui: &mut Ui, color: Color32, diameter: f32) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(diameter), Sense::click());
        ui.painter()
            .circle_filled(rect.center(), diameter / 2.0, color);
        if response.hovered() {
            ui.painter().circle_stroke(
                rect.center(),
                diameter / 2.0,
                Stroke::new(1.0, Color32::from_black_alpha(60)),
            );
        }
        response
    }

    fn control_button(
        &self,
        ui: &mut Ui,
        icon: WindowControlIcon,
        hover_color: Color32,
        icon_size: f32,
    ) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::new(46.0, 32.0), Sense::click());
        if response.hovered() {
            ui.painter()
                .rect_filled(rect, CornerRadius::same(0), hover_color);
        }
        Self::paint_icon(ui, icon, rect.center(), icon_size, self.icon_color);
        response
    }

    fn paint_icon(ui: &Ui, icon: WindowControlIcon, center: Pos2, size: f32, color: Color32) {
        let stroke = Stroke::new(1.0, color);
        let half = size / 2.0;
        match icon {
            WindowControlIcon::Minimize => {
                ui.painter().line_segment(
                    [
                        Pos2::new(center.x - half, center.y),
                        Pos2::new(center.x + half, center.y),
                    ],
                    stroke,
                );
            }
            WindowControlIcon::Maximize => {
                ui.painter().rect_stroke(
                    Rect::from_center_size(center, Vec2::splat(size * 0.7)),
                    CornerRadius::same(1),
                    stroke,
                    StrokeKind::Middle,
                );
            }
            WindowControlIcon::Restore => {
                let side = size * 0.55;
                let offset = size * 0.15;
                ui.painter().rect_stroke(
                    Rect::from_center_size(
                        Pos2::new(center.x + offset, center.y - offset),
                        Vec2::splat(side),
                    ),
                    CornerRadius::same(1),
                    stroke,
                    StrokeKind::Middle,
                );
                ui.painter().rect_stroke(
                    Rect::from_center_size(
                        Pos2::new(center.x - offset, center.y + offset),
                        Vec2::splat(side),
                    ),
                    CornerRadius::same(1),
                    stroke,
                    StrokeKind::Middle,
                );
            }
            WindowControlIcon::Close => {
                ui.painter().line_segment(
                    [
                        Pos2::new(center.x - half, center.y - half),
                        Pos2::new(center.x + half, center.y + half),
                    ],
                    stroke,
                );
                ui.painter().line_segment(
                    [
                        Pos2::new(center.x - half, center.y + half),
                        Pos2::new(center.x + half, center.y - half),
                    ],
                    stroke,
                );
            }
        }
    }
}
