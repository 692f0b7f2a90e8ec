use egui::{
    Align2, Area, Color32, Context, CornerRadius, CursorIcon, FontId, Id, Order, Pos2, Rect, Sense,
    Stroke, StrokeKind, Ui, Vec2,
};

use crate::menu::{ActionValue, MenuEntry, MenuItem};
use crate::titlebar::TitleBar;

const MENU_TITLE_HEIGHT: f32 = 28.0;
const MENU_TITLE_PADDING: f32 = 16.0;
const POPUP_ROW_HEIGHT: f32 = 24.0;
const POPUP_SEPARATOR_HEIGHT: f32 = 7.0;
const POPUP_PADDING: f32 = 8.0;
const POPUP_MIN_WIDTH: f32 = 120.0;

impl TitleBar {
    // The row of top-level menu titles. Only rendered while the bar is
    // revealed; clicks and hovers are forwarded to the controller, which
    // decides every transition.
    pub(crate) fn render_menu_titles(&mut self, ui: &mut Ui, ctx: &Context) {
        self.menu_positions.clear();
        self.menu_bar_rect = None;

        if !self.controller.bar_visible() || self.menus.is_empty() {
            return;
        }

        let now = ctx.input(|i| i.time);

        let widths: Vec<f32> = self
            .menus
            .iter()
            .map(|entry| {
                ui.fonts_mut(|f| {
                    f.layout_no_wrap(
                        entry.name.clone(),
                        FontId::proportional(self.menu_text_size),
                        self.menu_text_color,
                    )
                    .size()
                    .x
                }) + MENU_TITLE_PADDING
            })
            .collect();
        let total_width: f32 = widths.iter().sum();

        let (menu_bar_rect, _) =
            ui.allocate_exact_size(Vec2::new(total_width, MENU_TITLE_HEIGHT), Sense::click());
        self.menu_bar_rect = Some(menu_bar_rect);

        let mut current_x = menu_bar_rect.min.x;
        for (index, width) in widths.into_iter().enumerate() {
            self.menu_positions.push(current_x);

            let menu_rect = Rect::from_min_size(
                Pos2::new(current_x, menu_bar_rect.min.y),
                Vec2::new(width, MENU_TITLE_HEIGHT),
            );
            let response = ui.interact(menu_rect, self.id.with(("menu_title", index)), Sense::click());
            let is_active = self.controller.active_index() == Some(index);

            if response.hovered() || is_active {
                ui.painter()
                    .rect_filled(menu_rect, CornerRadius::same(2), self.menu_hover_color);
            }

            // Hover switches the active menu without a click, but never
            // opens one; then the click is handed over, so a press on the
            // open title still toggles it closed.
            if response.hovered() {
                ctx.set_cursor_icon(CursorIcon::PointingHand);
                self.controller.on_menu_title_hover(index);
            }

            ui.painter().text(
                menu_rect.center(),
                Align2::CENTER_CENTER,
                &self.menus[index].name,
                FontId::proportional(self.menu_text_size),
                self.menu_text_color,
            );

            if response.clicked() {
                self.controller.on_menu_title_click(index, now);
            }

            current_x += width;
        }
    }

    /// Render the popup of the active menu as a foreground overlay, and run
    /// the outside-press check that is only live while a popup is shown.
    pub(crate) fn render_open_popup(&mut self, ctx: &Context) {
        self.popup_rect = None;

        let Some(active) = self.controller.active_index() else {
            return;
        };
        // The title row may not be laid out yet on the very first frame;
        // skip without touching controller state.
        let Some(entry) = self.menus.get(active) else {
            return;
        };
        let Some(&popup_x) = self.menu_positions.get(active) else {
            return;
        };

        let now = ctx.input(|i| i.time);
        let popup_pos = Pos2::new(popup_x, self.title_bar_height());

        let id = self.id;
        let text_size = self.menu_text_size;
        let background = self.popup_background_color;
        let text_color = self.popup_text_color;
        let hover_color = self.popup_hover_color;
        let shortcut_color = self.popup_shortcut_color;
        let border_color = self.popup_border_color;
        let separator_color = self.popup_separator_color;

        let (popup_rect, selected) = Area::new(self.id.with("menu_popup"))
            .fixed_pos(popup_pos)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                Self::render_popup_rows(
                    ui,
                    id,
                    entry,
                    popup_pos,
                    text_size,
                    background,
                    text_color,
                    hover_color,
                    shortcut_color,
                    border_color,
                    separator_color,
                )
            })
            .inner;

        self.popup_rect = Some(popup_rect);

        // Selection implies dismissal; unresolved actions are logged by the
        // controller and the menu closes either way.
        if let Some((action, value)) = selected {
            self.controller
                .on_item_select(&action, &value, &self.registry);
        }

        // Outside-press detection. Presses on the menu-bar row are left to
        // the titles' own click handlers so a click on another title
        // switches menus directly instead of bouncing through a close.
        if ctx.input(|i| i.pointer.primary_pressed()) {
            if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                let in_bar = self.menu_bar_rect.is_some_and(|r| r.contains(pos));
                if !in_bar {
                    self.controller
                        .on_outside_interaction(popup_rect.contains(pos), now);
                }
            }
        }
    }

    // Rows of one popup. Separators render as an inset rule; actionable
    // rows as name + right-aligned shortcut label. Nested items stay
    // unexpanded.
    #[allow(clippy::too_many_arguments)]
    fn render_popup_rows(
        ui: &mut Ui,
        id: Id,
        entry: &MenuEntry,
        position: Pos2,
        text_size: f32,
        background: Color32,
        text_color: Color32,
        hover_color: Color32,
        shortcut_color: Color32,
        border_color: Color32,
        separator_color: Color32,
    ) -> (Rect, Option<(String, ActionValue)>) {
        let mut max_width = POPUP_MIN_WIDTH;
        let mut total_height = 0.0;
        for item in &entry.items {
            match item {
                MenuItem::Separator => total_height += POPUP_SEPARATOR_HEIGHT,
                MenuItem::Action(item) => {
                    total_height += POPUP_ROW_HEIGHT;
                    let name_width = ui.fonts_mut(|f| {
                        f.layout_no_wrap(
                            item.name.clone(),
                            FontId::proportional(text_size),
                            text_color,
                        )
                        .size()
                        .x
                    });
                    let shortcut_width = match &item.shortcut {
                        Some(shortcut) => ui.fonts_mut(|f| {
                            f.layout_no_wrap(
                                shortcut.clone(),
                                FontId::proportional(text_size * 0.9),
                                shortcut_color,
                            )
                            .size()
                            .x
                        }),
                        None => 0.0,
                    };
                    max_width = max_width.max(name_width + shortcut_width + POPUP_PADDING * 3.0);
                }
            }
        }
        total_height = total_height.max(POPUP_PADDING);

        let popup_rect = Rect::from_min_size(position, Vec2::new(max_width, total_height));

        // Keep the popup on screen.
        let content_rect = ui.ctx().content_rect();
        let popup_rect = if popup_rect.max.x > content_rect.max.x {
            Rect::from_min_size(
                Pos2::new(content_rect.max.x - max_width, popup_rect.min.y),
                popup_rect.size(),
            )
        } else {
            popup_rect
        };

        ui.painter()
            .rect_filled(popup_rect, CornerRadius::same(4), background);
        ui.painter().rect_stroke(
            popup_rect,
            CornerRadius::same(4),
            Stroke::new(1.0, border_color),
            StrokeKind::Outside,
        );

        let mut selected = None;
        let mut current_y = popup_rect.min.y;
        for (i, item) in entry.items.iter().enumerate() {
            match item {
                MenuItem::Separator => {
                    let rule = Rect::from_min_size(
                        Pos2::new(
                            popup_rect.min.x + POPUP_PADDING,
                            current_y + POPUP_SEPARATOR_HEIGHT / 2.0,
                        ),
                        Vec2::new(popup_rect.width() - POPUP_PADDING * 2.0, 1.0),
                    );
                    ui.painter()
                        .rect_filled(rule, CornerRadius::same(0), separator_color);
                    current_y += POPUP_SEPARATOR_HEIGHT;
                }
                MenuItem::Action(item) => {
                    let item_rect = Rect::from_min_size(
                        Pos2::new(popup_rect.min.x, current_y),
                        Vec2::new(popup_rect.width(), POPUP_ROW_HEIGHT),
                    );
                    let response =
                        ui.interact(item_rect, id.with(("popup_item", i)), Sense::click());

                    if response.hovered() {
                        ui.painter()
                            .rect_filled(item_rect, CornerRadius::same(2), hover_color);
                        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                    }

                    ui.painter().text(
                        Pos2::new(item_rect.min.x + POPUP_PADDING, item_rect.center().y),
                        Align2::LEFT_CENTER,
                        &item.name,
                        FontId::proportional(text_size),
                        text_color,
                    );

                    if let Some(shortcut) = &item.shortcut {
                        ui.painter().text(
                            Pos2::new(item_rect.max.x - POPUP_PADDING, item_rect.center().y),
                            Align2::RIGHT_CENTER,
                            shortcut,
                            FontId::proportional(text_size * 0.9),
                            shortcut_color,
                        );
                    }

                    if response.clicked() {
                        selected = Some((item.action.clone(), item.value.clone()));
                    }

                    current_y += POPUP_ROW_HEIGHT;
                }
            }
        }

        (popup_rect, selected)
    }
}
