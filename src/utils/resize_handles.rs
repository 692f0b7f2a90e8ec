use egui::{
    Area, Context, CursorIcon, Id, PointerButton, Pos2, Rect, ResizeDirection, Sense, Vec2,
    ViewportCommand,
};

const HANDLE_THICKNESS: f32 = 8.0;

/// Render invisible viewport resize handles along the window edges and
/// corners. Needed because a borderless window has no native frame to grab.
pub fn render_resize_handles(ctx: &Context) {
    let content = ctx.content_rect();
    if content.width() < 100.0 || content.height() < 100.0 {
        return;
    }

    let t = HANDLE_THICKNESS;
    let edges = [
        (
            "north",
            ResizeDirection::North,
            Rect::from_min_size(content.min, Vec2::new(content.width(), t)),
            CursorIcon::ResizeVertical,
        ),
        (
            "south",
            ResizeDirection::South,
            Rect::from_min_size(
                Pos2::new(content.min.x, content.max.y - t),
                Vec2::new(content.width(), t),
            ),
            CursorIcon::ResizeVertical,
        ),
        (
            "west",
            ResizeDirection::West,
            Rect::from_min_size(content.min, Vec2::new(t, content.height())),
            CursorIcon::ResizeHorizontal,
        ),
        (
            "east",
            ResizeDirection::East,
            Rect::from_min_size(
                Pos2::new(content.max.x - t, content.min.y),
                Vec2::new(t, content.height()),
            ),
            CursorIcon::ResizeHorizontal,
        ),
    ];
    for (name, direction, rect, cursor) in edges {
        resize_handle(ctx, name, direction, rect, cursor);
    }

    let c = t * 1.5;
    if content.width() <= c * 2.0 || content.height() <= c * 2.0 {
        return;
    }
    let corners = [
        (
            "north_west",
            ResizeDirection::NorthWest,
            Rect::from_min_size(content.min, Vec2::splat(c)),
            CursorIcon::ResizeNwSe,
        ),
        (
            "north_east",
            ResizeDirection::NorthEast,
            Rect::from_min_size(Pos2::new(content.max.x - c, content.min.y), Vec2::splat(c)),
            CursorIcon::ResizeNeSw,
        ),
        (
            "south_west",
            ResizeDirection::SouthWest,
            Rect::from_min_size(Pos2::new(content.min.x, content.max.y - c), Vec2::splat(c)),
            CursorIcon::ResizeNeSw,
        ),
        (
            "south_east",
            ResizeDirection::SouthEast,
            Rect::from_min_size(
                Pos2::new(content.max.x - c, content.max.y - c),
                Vec2::splat(c),
            ),
            CursorIcon::ResizeNwSe,
        ),
    ];
    for (name, direction, rect, cursor) in corners {
        resize_handle(ctx, name, direction, rect, cursor);
    }
}

fn resize_handle(
    ctx: &Context,
    name: &'static str,
    direction: ResizeDirection,
    rect: Rect,
    cursor: CursorIcon,
) {
    Area::new(Id::new(("resize_handle", name)))
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            ui.set_min_size(rect.size());
            let (_, allocated) = ui.allocate_space(rect.size());
            let response = ui.interact(
                allocated,
                Id::new(("resize_handle_drag", name)),
                Sense::click_and_drag(),
            );

            if response.hovered() {
                ctx.set_cursor_icon(cursor);
            }

            if response.drag_started_by(PointerButton::Primary) {
                ctx.send_viewport_cmd(ViewportCommand::BeginResize(direction));
            }
        });
}
