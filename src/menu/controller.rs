use crate::menu::actions::ActionRegistry;
use crate::menu::model::ActionValue;

/// How long a click that triggered an outside-close keeps being swallowed,
/// in seconds. Covers the press-outside → click-on-title gesture span.
pub const SUPPRESS_WINDOW_SECS: f64 = 0.2;

/// Live menu bar state. Single source of truth: the view renders from this
/// and never keeps interaction state of its own.
///
/// Invariants, upheld by [`MenuController`] for every event sequence:
/// - at most one menu is active at a time;
/// - an active menu implies the bar is visible;
/// - suppression expires on its own after [`SUPPRESS_WINDOW_SECS`].
#[derive(Debug, Clone, PartialEq)]
pub struct MenuBarState {
    bar_visible: bool,
    active_index: Option<usize>,
    suppress_until: Option<f64>,
}

impl MenuBarState {
    fn new() -> Self {
        Self {
            bar_visible: false,
            active_index: None,
            suppress_until: None,
        }
    }

    /// Whether the menu bar currently replaces the window title.
    pub fn bar_visible(&self) -> bool {
        self.bar_visible
    }

    /// Index of the open top-level menu, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether a click arriving at `now` would be swallowed by the
    /// outside-close suppression window.
    pub fn suppress_pending(&self, now: f64) -> bool {
        self.suppress_until.is_some_and(|deadline| now < deadline)
    }
}

impl Default for MenuBarState {
    fn default() -> Self {
        Self::new()
    }
}

/// The menu interaction state machine.
///
/// Owns [`MenuBarState`] and decides every open/close/switch transition. The
/// view forwards raw input here and renders whatever state results; item
/// selection is delegated to the [`ActionRegistry`].
///
/// Timestamps are frame times as reported by `ctx.input(|i| i.time)`. The
/// suppression window is a deadline compared against them: an outside-close
/// overwrites any earlier deadline (last one wins), and an expired deadline
/// can only ever clear the flag, never touch the active menu.
#[derive(Debug)]
pub struct MenuController {
    state: MenuBarState,
    entry_count: usize,
}

impl MenuController {
    /// Create a controller for a menu bar with `entry_count` top-level
    /// entries. Starts closed.
    pub fn new(entry_count: usize) -> Self {
        Self {
            state: MenuBarState::new(),
            entry_count,
        }
    }

    pub fn state(&self) -> &MenuBarState {
        &self.state
    }

    pub fn bar_visible(&self) -> bool {
        self.state.bar_visible
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index
    }

    /// Adjust the number of top-level entries after the menu tree changed.
    /// An active menu that no longer exists is closed.
    pub fn set_entry_count(&mut self, entry_count: usize) {
        self.entry_count = entry_count;
        if self.state.active_index.is_some_and(|i| i >= entry_count) {
            self.close_active_menu();
        }
    }

    /// Modifier toggle for revealing the menu bar. Must be called on the
    /// key's down-edge only; the view filters repeats.
    ///
    /// Any active menu is force-closed first so hiding the bar never leaves
    /// a popup behind. When the bar hides, the title text reappears.
    pub fn on_alt_key_toggle(&mut self) {
        self.close_active_menu();
        self.state.bar_visible = !self.state.bar_visible;
    }

    /// Click on the top-level title at `index`.
    ///
    /// The click is swallowed (and the flag cleared) while an outside-close
    /// suppression window is pending, so the gesture that closed a menu does
    /// not immediately reopen one. Otherwise: clicking the active title
    /// closes it, clicking any other title opens it directly.
    pub fn on_menu_title_click(&mut self, index: usize, now: f64) {
        if self.take_suppression(now) {
            return;
        }
        if index >= self.entry_count {
            return;
        }
        if self.state.active_index == Some(index) {
            self.close_active_menu();
        } else {
            self.state.active_index = Some(index);
            self.state.bar_visible = true;
        }
    }

    /// Hover over the top-level title at `index`. Switches the active menu
    /// without a click, but only while some menu is already open; hovering
    /// alone never opens the bar.
    pub fn on_menu_title_hover(&mut self, index: usize) {
        if self.state.active_index.is_none() || index >= self.entry_count {
            return;
        }
        self.state.active_index = Some(index);
    }

    /// Pointer press observed while a popup is shown. The view reports
    /// whether the press landed inside the active popup; presses on the menu
    /// bar row itself are not reported at all (the titles' own click
    /// handlers deal with those).
    ///
    /// A press outside the popup closes it and arms the suppression window.
    /// A second outside-close reschedules the deadline rather than stacking.
    pub fn on_outside_interaction(&mut self, target_in_popup: bool, now: f64) {
        if self.state.active_index.is_none() || target_in_popup {
            return;
        }
        self.close_active_menu();
        self.state.suppress_until = Some(now + SUPPRESS_WINDOW_SECS);
    }

    /// Selection of an actionable popup row. Closes the menu first
    /// (selection implies dismissal), then dispatches exactly once; an
    /// unresolved action is logged and otherwise ignored.
    ///
    /// Separators never generate this event.
    pub fn on_item_select(&mut self, action: &str, value: &ActionValue, registry: &ActionRegistry) {
        self.close_active_menu();
        if let Err(err) = registry.dispatch(action, value) {
            log::warn!("menu selection dropped: {err}");
        }
    }

    /// Shared close procedure. Idempotent when no menu is active.
    pub fn close_active_menu(&mut self) {
        self.state.active_index = None;
    }

    // Clears any stored deadline; returns true if it was still in the
    // future, i.e. the triggering click must be swallowed.
    fn take_suppression(&mut self, now: f64) -> bool {
        match self.state.suppress_until.take() {
            Some(deadline) => now < deadline,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn open_controller(active: usize) -> MenuController {
        let mut controller = MenuController::new(3);
        controller.on_alt_key_toggle();
        controller.on_menu_title_click(active, 0.0);
        assert_eq!(controller.active_index(), Some(active));
        controller
    }

    #[test]
    fn alt_toggle_reveals_then_hides_the_bar() {
        let mut controller = MenuController::new(3);
        assert!(!controller.bar_visible());

        controller.on_alt_key_toggle();
        assert!(controller.bar_visible());
        assert_eq!(controller.active_index(), None);

        controller.on_alt_key_toggle();
        assert!(!controller.bar_visible());
    }

    #[test]
    fn alt_toggle_force_closes_the_active_menu() {
        let mut controller = open_controller(1);
        controller.on_alt_key_toggle();
        assert_eq!(controller.active_index(), None);
        assert!(!controller.bar_visible());
    }

    #[test]
    fn title_click_opens_a_menu() {
        let mut controller = MenuController::new(3);
        controller.on_alt_key_toggle();
        controller.on_menu_title_click(0, 0.0);
        assert_eq!(controller.active_index(), Some(0));
        assert!(controller.bar_visible());
    }

    #[test]
    fn clicking_the_open_title_again_toggles_it_closed() {
        let mut controller = MenuController::new(3);
        controller.on_alt_key_toggle();
        let before = controller.state().clone();

        controller.on_menu_title_click(1, 0.0);
        controller.on_menu_title_click(1, 0.1);
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn clicking_another_title_switches_directly() {
        let mut controller = open_controller(0);
        controller.on_menu_title_click(2, 0.1);
        assert_eq!(controller.active_index(), Some(2));
    }

    #[test]
    fn hover_switches_only_while_a_menu_is_open() {
        let mut controller = open_controller(0);
        controller.on_menu_title_hover(2);
        assert_eq!(controller.active_index(), Some(2));

        controller.close_active_menu();
        controller.on_menu_title_hover(1);
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn hover_never_reveals_the_bar() {
        let mut controller = MenuController::new(3);
        controller.on_menu_title_hover(0);
        assert!(!controller.bar_visible());
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn outside_press_closes_and_suppresses_the_following_click() {
        let mut controller = open_controller(1);

        controller.on_outside_interaction(false, 0.0);
        assert_eq!(controller.active_index(), None);
        assert!(controller.bar_visible());
        assert!(controller.state().suppress_pending(0.1));

        // The click completing the same gesture is swallowed and clears
        // the flag.
        controller.on_menu_title_click(1, 0.1);
        assert_eq!(controller.active_index(), None);
        assert!(!controller.state().suppress_pending(0.11));

        // The next click acts normally.
        controller.on_menu_title_click(1, 0.15);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn suppression_expires_after_the_window() {
        let mut controller = open_controller(1);
        controller.on_outside_interaction(false, 0.0);

        controller.on_menu_title_click(1, 0.0 + SUPPRESS_WINDOW_SECS + 0.05);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn later_outside_close_reschedules_the_deadline() {
        let mut controller = open_controller(0);
        controller.on_outside_interaction(false, 0.0);

        controller.on_menu_title_click(0, 0.25);
        assert_eq!(controller.active_index(), Some(0));

        controller.on_outside_interaction(false, 0.3);
        assert!(controller.state().suppress_pending(0.45));
        controller.on_menu_title_click(0, 0.45);
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn stale_suppression_never_closes_a_reopened_menu() {
        let mut controller = open_controller(0);
        controller.on_outside_interaction(false, 0.0);

        // Reopened after the window elapsed; the old deadline is gone and
        // has no way to reach the active menu.
        controller.on_menu_title_click(0, 0.3);
        assert_eq!(controller.active_index(), Some(0));
        assert!(!controller.state().suppress_pending(0.31));
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn press_inside_the_popup_does_not_close() {
        let mut controller = open_controller(2);
        controller.on_outside_interaction(true, 0.0);
        assert_eq!(controller.active_index(), Some(2));
    }

    #[test]
    fn outside_press_with_nothing_open_is_a_noop() {
        let mut controller = MenuController::new(3);
        controller.on_alt_key_toggle();
        let before = controller.state().clone();

        controller.on_outside_interaction(false, 0.0);
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn out_of_range_indices_are_noops() {
        let mut controller = MenuController::new(3);
        controller.on_alt_key_toggle();
        controller.on_menu_title_click(7, 0.0);
        assert_eq!(controller.active_index(), None);

        controller.on_menu_title_click(0, 0.1);
        controller.on_menu_title_hover(7);
        assert_eq!(controller.active_index(), Some(0));
    }

    #[test]
    fn shrinking_the_menu_tree_closes_a_dangling_active_menu() {
        let mut controller = open_controller(2);
        controller.set_entry_count(2);
        assert_eq!(controller.active_index(), None);

        controller.on_menu_title_click(1, 0.2);
        assert_eq!(controller.active_index(), Some(1));
    }

    #[test]
    fn selection_closes_the_menu_and_dispatches_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let sink = calls.clone();
        let registry = ActionRegistry::new().with_action("openFile", move |value| {
            assert_eq!(value, &ActionValue::Text("path/to/x".into()));
            sink.fetch_add(1, Ordering::SeqCst);
        });

        let mut controller = open_controller(1);
        controller.on_item_select("openFile", &"path/to/x".into(), &registry);

        assert_eq!(controller.active_index(), None);
        assert!(controller.bar_visible());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unresolved_action_still_closes_the_menu() {
        let registry = ActionRegistry::new();
        let mut controller = open_controller(0);
        controller.on_item_select("missing", &ActionValue::default(), &registry);
        assert_eq!(controller.active_index(), None);
    }

    #[test]
    fn invariants_hold_across_arbitrary_event_sequences() {
        enum Event {
            Alt,
            Click(usize, f64),
            Hover(usize),
            Outside(bool, f64),
            Select,
        }
        use Event::*;

        let registry = ActionRegistry::new().with_action("noop", |_| {});
        let script = [
            Hover(1),
            Alt,
            Click(0, 0.0),
            Hover(2),
            Click(2, 0.1),
            Click(1, 0.2),
            Outside(false, 0.3),
            Click(1, 0.35),
            Click(1, 0.6),
            Select,
            Alt,
            Alt,
            Click(9, 0.7),
            Outside(false, 0.8),
        ];

        let mut controller = MenuController::new(3);
        for event in script {
            match event {
                Alt => controller.on_alt_key_toggle(),
                Click(i, t) => controller.on_menu_title_click(i, t),
                Hover(i) => controller.on_menu_title_hover(i),
                Outside(inside, t) => controller.on_outside_interaction(inside, t),
                Select => controller.on_item_select("noop", &ActionValue::default(), &registry),
            }
            if controller.active_index().is_some() {
                assert!(controller.bar_visible());
                assert!(controller.active_index().unwrap() < 3);
            }
        }
    }
}
