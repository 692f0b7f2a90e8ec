use egui::{
    Align, Context, Frame, Image, Layout, Margin, PointerButton, Pos2, Rect, Sense, TextStyle,
    TopBottomPanel, Vec2, ViewportCommand,
};

use crate::frame::Platform;
use crate::titlebar::TitleBar;

impl TitleBar {
    /// Display the titlebar in the egui context.
    ///
    /// Call once per frame, before the rest of the UI. Renders the bar for
    /// the configured [`Platform`](crate::frame::Platform) (mac traffic
    /// lights on the left, generic window controls on the right), then the
    /// popup overlay for whichever menu is active.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
    ///     self.title_bar.show(ctx);
    ///
    ///     CentralPanel::default().show(ctx, |ui| {
    ///         ui.label("Main content");
    ///     });
    /// }
    /// ```
    pub fn show(&mut self, ctx: &Context) {
        self.handle_alt_toggle(ctx);

        match self.platform {
            Platform::Mac => self.render_mac_title_bar(ctx),
            Platform::Windows => self.render_generic_title_bar(ctx),
        }

        self.render_open_popup(ctx);
    }

    /// Render a macOS-style titlebar with traffic light controls.
    fn render_mac_title_bar(&mut self, ctx: &Context) {
        let content_rect = ctx.content_rect();
        if content_rect.width() < 100.0 || content_rect.height() < 100.0 {
            return;
        }

        let height = self.title_bar_height();
        TopBottomPanel::top(self.id)
            .exact_height(height)
            .frame(
                Frame::new()
                    .fill(self.background_color)
                    .inner_margin(Margin::same(0))
                    .outer_margin(Margin::same(0)),
            )
            .show(ctx, |ui| {
                let title_bar_rect = ui.available_rect_before_wrap();

                if title_bar_rect.width() <= 0.0 || title_bar_rect.height() <= 0.0 {
                    return;
                }

                self.handle_bar_gestures(ctx, ui, title_bar_rect);

                ui.horizontal(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.add_space(8.0);
                        self.controls.show(ui, ctx);
                        ui.add_space(16.0);
                        self.render_menu_titles(ui, ctx);
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.add_space(8.0);
                        self.render_icon(ui);
                    });
                });

                self.render_centered_title(ui, title_bar_rect);
            });
    }

    /// Render a platform-generic titlebar (Windows/Linux-style).
    fn render_generic_title_bar(&mut self, ctx: &Context) {
        let content_rect = ctx.content_rect();
        if content_rect.width() < 100.0 || content_rect.height() < 100.0 {
            return;
        }

        let height = self.title_bar_height();
        TopBottomPanel::top(self.id)
            .exact_height(height)
            .frame(
                Frame::new()
                    .fill(self.background_color)
                    .inner_margin(Margin::same(0))
                    .outer_margin(Margin::same(0)),
            )
            .show(ctx, |ui| {
                let title_bar_rect = ui.available_rect_before_wrap();

                if title_bar_rect.width() <= 0.0 || title_bar_rect.height() <= 0.0 {
                    return;
                }

                self.handle_bar_gestures(ctx, ui, title_bar_rect);

                ui.horizontal(|ui| {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.add_space(6.0);
                        self.render_icon(ui);
                        ui.add_space(8.0);
                        self.render_menu_titles(ui, ctx);
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.spacing_mut().item_spacing = Vec2::ZERO;
                        self.controls.show(ui, ctx);
                    });
                });

                self.render_centered_title(ui, title_bar_rect);
            });
    }

    // Drag-to-move and double-click maximize on the bar background.
    fn handle_bar_gestures(&self, ctx: &Context, ui: &mut egui::Ui, title_bar_rect: Rect) {
        let response = ui.interact(title_bar_rect, self.id.with("bar"), Sense::click_and_drag());

        if response.drag_started_by(PointerButton::Primary) {
            ctx.send_viewport_cmd(ViewportCommand::StartDrag);
        }

        if response.double_clicked() {
            let is_maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
            ctx.send_viewport_cmd(ViewportCommand::Maximized(!is_maximized));
        }
    }

    fn render_icon(&self, ui: &mut egui::Ui) {
        let Some(icon) = self.icon.clone() else {
            return;
        };
        let icon_size = 20.0;
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(icon_size), Sense::hover());
        ui.put(rect, Image::new(icon).fit_to_exact_size(Vec2::splat(icon_size)));
    }

    // The title is painted over the middle of the bar, and only while the
    // menu bar is hidden (the menu bar replaces it).
    fn render_centered_title(&self, ui: &mut egui::Ui, title_bar_rect: Rect) {
        let Some(ref title) = self.title else {
            return;
        };
        if !self.should_show_title() {
            return;
        }

        let font = TextStyle::Body.resolve(ui.style());
        let galley = ui.fonts_mut(|f| f.layout_no_wrap(title.clone(), font, self.title_color));

        let title_pos = Pos2::new(
            title_bar_rect.center().x - galley.size().x / 2.0,
            title_bar_rect.center().y - galley.size().y / 2.0,
        );

        ui.painter().galley(title_pos, galley, self.title_color);
    }
}
