//! Off-canvas mobile menu with a keyboard focus trap.

pub const FOCUSABLE_SELECTOR: &str =
    "a[href], button:not([disabled]), input:not([disabled]), select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// DOM side effects the menu controller drives.
pub trait MenuView {
    /// Classes, `aria-expanded` and body scroll lock.
    fn show(&self, open: bool);
    fn install_trap(&self);
    fn remove_trap(&self);
    /// Focusable items currently inside the menu.
    fn focusable_count(&self) -> usize;
    /// Position of the focused element among the focusable items, if inside.
    fn focused_index(&self) -> Option<usize>;
    fn focus_item(&self, index: usize);
    fn focus_toggle(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapAction {
    /// Let the browser handle the key.
    Pass,
    /// Move focus to this item and suppress default handling.
    Focus(usize),
    Close,
}

/// Decides what a key press does while the trap is active.
pub fn trap_action(key: &str, shift: bool, focused: Option<usize>, count: usize) -> TrapAction {
    match key {
        "Escape" | "Esc" => TrapAction::Close,
        "Tab" if count > 0 => {
            let last = count - 1;
            match (focused, shift) {
                (None, false) => TrapAction::Focus(0),
                (None, true) => TrapAction::Focus(last),
                (Some(index), false) if index >= last => TrapAction::Focus(0),
                (Some(0), true) => TrapAction::Focus(last),
                _ => TrapAction::Pass,
            }
        }
        _ => TrapAction::Pass,
    }
}

#[derive(Debug)]
pub struct MenuController<V: MenuView> {
    open: bool,
    view: V,
}

impl<V: MenuView> MenuController<V> {
    pub fn new(view: V) -> Self {
        Self { open: false, view }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.view.show(true);
        self.view.install_trap();
        if self.view.focusable_count() > 0 {
            self.view.focus_item(0);
        }
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.view.show(false);
        self.view.remove_trap();
        self.view.focus_toggle();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Returns `true` when the key was consumed and its default should be suppressed.
    pub fn handle_key(&mut self, key: &str, shift: bool) -> bool {
        if !self.open {
            return false;
        }

        let count = self.view.focusable_count();
        match trap_action(key, shift, self.view.focused_index(), count) {
            TrapAction::Pass => false,
            TrapAction::Focus(index) => {
                self.view.focus_item(index);
                true
            }
            TrapAction::Close => {
                self.close();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Focus {
        Toggle,
        Item(usize),
        Elsewhere,
    }

    struct FakeMenu {
        items: Cell<usize>,
        focus: Cell<Focus>,
        shown: Cell<bool>,
        traps: Cell<i32>,
        log: RefCell<Vec<&'static str>>,
    }

    impl FakeMenu {
        fn with_items(items: usize) -> Self {
            Self {
                items: Cell::new(items),
                focus: Cell::new(Focus::Toggle),
                shown: Cell::new(false),
                traps: Cell::new(0),
                log: RefCell::new(Vec::new()),
            }
        }
    }

    impl MenuView for FakeMenu {
        fn show(&self, open: bool) {
            self.shown.set(open);
        }

        fn install_trap(&self) {
            self.traps.set(self.traps.get() + 1);
            self.log.borrow_mut().push("install");
        }

        fn remove_trap(&self) {
            self.traps.set(self.traps.get() - 1);
            self.log.borrow_mut().push("remove");
        }

        fn focusable_count(&self) -> usize {
            self.items.get()
        }

        fn focused_index(&self) -> Option<usize> {
            match self.focus.get() {
                Focus::Item(index) => Some(index),
                Focus::Toggle | Focus::Elsewhere => None,
            }
        }

        fn focus_item(&self, index: usize) {
            self.focus.set(Focus::Item(index));
        }

        fn focus_toggle(&self) {
            self.focus.set(Focus::Toggle);
        }
    }

    #[test]
    fn escape_closes_and_returns_focus_to_toggle() {
        let mut menu = MenuController::new(FakeMenu::with_items(3));

        menu.open();
        assert_eq!(menu.view().focus.get(), Focus::Item(0));

        assert!(menu.handle_key("Escape", false));
        assert!(!menu.is_open());
        assert!(!menu.view().shown.get());
        assert_eq!(menu.view().focus.get(), Focus::Toggle);
        assert_eq!(menu.view().traps.get(), 0);
    }

    #[test]
    fn repeated_open_installs_a_single_trap() {
        let mut menu = MenuController::new(FakeMenu::with_items(2));

        menu.open();
        menu.open();
        assert_eq!(menu.view().traps.get(), 1);

        menu.close();
        menu.close();
        assert_eq!(*menu.view().log.borrow(), vec!["install", "remove"]);
    }

    #[test]
    fn toggle_alternates_states() {
        let mut menu = MenuController::new(FakeMenu::with_items(1));

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn tab_wraps_in_both_directions() {
        let mut menu = MenuController::new(FakeMenu::with_items(3));
        menu.open();

        menu.view().focus.set(Focus::Item(2));
        assert!(menu.handle_key("Tab", false));
        assert_eq!(menu.view().focus.get(), Focus::Item(0));

        assert!(menu.handle_key("Tab", true));
        assert_eq!(menu.view().focus.get(), Focus::Item(2));

        menu.view().focus.set(Focus::Item(1));
        assert!(!menu.handle_key("Tab", false));
    }

    #[test]
    fn focusable_set_is_recomputed_per_key() {
        let mut menu = MenuController::new(FakeMenu::with_items(3));
        menu.open();
        menu.view().focus.set(Focus::Item(1));

        menu.view().items.set(2);
        assert!(menu.handle_key("Tab", false));
        assert_eq!(menu.view().focus.get(), Focus::Item(0));
    }

    #[test]
    fn focus_outside_menu_is_pulled_back_in() {
        let mut menu = MenuController::new(FakeMenu::with_items(3));
        menu.open();
        menu.view().focus.set(Focus::Elsewhere);

        assert!(menu.handle_key("Tab", true));
        assert_eq!(menu.view().focus.get(), Focus::Item(2));
    }

    #[test]
    fn keys_are_ignored_while_closed() {
        let mut menu = MenuController::new(FakeMenu::with_items(3));

        assert!(!menu.handle_key("Escape", false));
        assert_eq!(menu.view().focus.get(), Focus::Toggle);
    }

    #[test]
    fn trap_passes_other_keys_and_empty_menus() {
        assert_eq!(trap_action("Enter", false, Some(0), 3), TrapAction::Pass);
        assert_eq!(trap_action("Tab", false, None, 0), TrapAction::Pass);
        assert_eq!(trap_action("Esc", false, None, 0), TrapAction::Close);
    }
}
