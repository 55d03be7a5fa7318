//! Key bindings for the catalog browser, resolved per focused control
//!
//! Provides a registry of keybindings that change based on the focused control.
//! The price field takes printable keys as text, so letter shortcuts are only
//! bound when a non-text control has focus.

use crate::app::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Everything a key press can do in the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    FocusNext,
    FocusPrevious,
    OptionNext,
    OptionPrevious,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Activate,
    Reset,
    Help,
    Dismiss,
    Quit,
}

/// One key mapped to an action, with its help text
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Binding for a bare key
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self::with_modifiers(key, KeyModifiers::NONE, action, display, description)
    }

    /// Binding that requires the given modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding. Shift is ignored since
    /// terminals disagree on reporting it for `?` and BackTab.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Bindings grouped by the control that owns them
pub struct KeybindingContext {
    /// Focus-specific keybindings
    focus_bindings: HashMap<Focus, Vec<Keybinding>>,
    /// Bindings available everywhere
    global_bindings: Vec<Keybinding>,
    /// Letter shortcuts, unavailable while typing in a text field
    shortcut_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Registry with the browser's bindings installed
    pub fn new() -> Self {
        let mut ctx = Self {
            focus_bindings: HashMap::new(),
            global_bindings: Vec::new(),
            shortcut_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::FocusNext, "Tab", "Next control"),
            Keybinding::new(KeyCode::BackTab, KeyAction::FocusPrevious, "S-Tab", "Previous control"),
            Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help / quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.shortcut_bindings = vec![
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "Clear filters"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        let scroll_bindings = vec![
            Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll products up"),
            Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll products down"),
            Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
            Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
        ];

        // Selectors
        let mut selector_bindings = vec![
            Keybinding::new(KeyCode::Left, KeyAction::OptionPrevious, "Left", "Previous option"),
            Keybinding::new(KeyCode::Right, KeyAction::OptionNext, "Right", "Next option"),
            Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Next control"),
        ];
        selector_bindings.extend(scroll_bindings.iter().cloned());

        for focus in [Focus::Category, Focus::Brand, Focus::Sort] {
            self.focus_bindings.insert(focus, selector_bindings.clone());
        }

        // Price text field; Esc leaves the field instead of quitting
        self.focus_bindings.insert(
            Focus::PriceRange,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Next control"),
                Keybinding::new(KeyCode::Esc, KeyAction::FocusNext, "Esc", "Leave field"),
            ],
        );

        // Clear Filters button
        let mut clear_bindings = vec![Keybinding::new(
            KeyCode::Enter,
            KeyAction::Activate,
            "Enter",
            "Clear filters",
        )];
        clear_bindings.extend(scroll_bindings.iter().cloned());
        self.focus_bindings.insert(Focus::ClearFilters, clear_bindings);

        // Product grid
        self.focus_bindings.insert(Focus::Products, scroll_bindings);
    }

    /// Get keybindings for a focus (includes global bindings)
    pub fn get_bindings(&self, focus: Focus) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        let focus_bindings = self.focus_bindings.get(&focus).map_or(&[][..], Vec::as_slice);
        bindings.extend(focus_bindings.iter());

        // A focus binding shadows a global one on the same key
        bindings.extend(self.global_bindings.iter().filter(|g| {
            !focus_bindings
                .iter()
                .any(|f| f.key == g.key && f.modifiers == g.modifiers)
        }));

        if !focus.takes_text() {
            bindings.extend(self.shortcut_bindings.iter());
        }

        bindings
    }

    /// Find the action bound to `event` for the given focus
    pub fn resolve(&self, focus: Focus, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(focus)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Action for `event` while the help overlay is open. Only closing help
    /// and quitting are available, whatever control has focus.
    pub fn resolve_in_help(&self, event: &KeyEvent) -> Option<KeyAction> {
        self.global_bindings
            .iter()
            .chain(self.shortcut_bindings.iter())
            .filter(|b| matches!(b.action, KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit))
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Hints for the bottom bar, most useful first
    pub fn get_nav_items(&self, focus: Focus) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(focus);

        let priority_actions = match focus {
            Focus::Category | Focus::Brand | Focus::Sort => vec![
                KeyAction::OptionPrevious,
                KeyAction::OptionNext,
                KeyAction::FocusNext,
                KeyAction::Reset,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::PriceRange => vec![KeyAction::FocusNext, KeyAction::Quit],
            Focus::ClearFilters => vec![
                KeyAction::Activate,
                KeyAction::FocusNext,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Focus::Products => vec![
                KeyAction::ScrollUp,
                KeyAction::ScrollDown,
                KeyAction::FocusNext,
                KeyAction::Reset,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_option = false;
        let mut has_scroll = false;

        for action in priority_actions {
            let is_option = matches!(action, KeyAction::OptionPrevious | KeyAction::OptionNext);
            let is_scroll = matches!(action, KeyAction::ScrollUp | KeyAction::ScrollDown);
            if (is_option && has_option) || (is_scroll && has_scroll) {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if is_option {
                    items.push(NavBarItem::new("Left/Right", "Change"));
                    has_option = true;
                } else if is_scroll {
                    items.push(NavBarItem::new("Up/Dn", "Scroll"));
                    has_scroll = true;
                } else {
                    items.push(NavBarItem::new(&binding.display, &binding.description));
                }
            }
        }

        if focus.takes_text() {
            items.insert(0, NavBarItem::new("min,max", "Type a range"));
        }

        items
    }

    /// Get full help content for a focus (for help overlay)
    pub fn get_help_content(&self, focus: Focus) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::FocusNext
                        | KeyAction::FocusPrevious
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                )
            }),
            ("Filters", |a| {
                matches!(
                    a,
                    KeyAction::OptionNext
                        | KeyAction::OptionPrevious
                        | KeyAction::Activate
                        | KeyAction::Reset
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Help | KeyAction::Dismiss | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(focus);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Key hint in the bottom bar
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

impl NavBarItem {
    fn new(key_display: &str, action_label: &str) -> Self {
        Self {
            key_display: key_display.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

/// Titled group of bindings in the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letter_shortcuts_bound_outside_text_field() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Focus::Category, &key(KeyCode::Char('q'))),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            ctx.resolve(Focus::Products, &key(KeyCode::Char('r'))),
            Some(KeyAction::Reset)
        );
    }

    #[test]
    fn test_letter_shortcuts_unbound_in_price_field() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(Focus::PriceRange, &key(KeyCode::Char('q'))), None);
        assert_eq!(ctx.resolve(Focus::PriceRange, &key(KeyCode::Char('5'))), None);
        assert_eq!(
            ctx.resolve(Focus::PriceRange, &key(KeyCode::Tab)),
            Some(KeyAction::FocusNext)
        );
    }

    #[test]
    fn test_shift_is_ignored_for_question_mark_and_backtab() {
        let ctx = KeybindingContext::new();
        let shifted = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(Focus::Sort, &shifted), Some(KeyAction::Help));
        let backtab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            ctx.resolve(Focus::Sort, &backtab),
            Some(KeyAction::FocusPrevious)
        );
    }

    #[test]
    fn test_esc_leaves_price_field_instead_of_quitting() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Focus::PriceRange, &key(KeyCode::Esc)),
            Some(KeyAction::FocusNext)
        );
        assert_eq!(
            ctx.resolve(Focus::Category, &key(KeyCode::Esc)),
            Some(KeyAction::Dismiss)
        );
        assert!(ctx
            .get_bindings(Focus::PriceRange)
            .iter()
            .all(|b| b.action != KeyAction::Dismiss));
    }

    #[test]
    fn test_price_field_hints_match_its_keys() {
        let ctx = KeybindingContext::new();
        let items: Vec<(String, String)> = ctx
            .get_nav_items(Focus::PriceRange)
            .into_iter()
            .map(|i| (i.key_display, i.action_label))
            .collect();
        assert_eq!(
            items,
            [
                ("min,max".to_string(), "Type a range".to_string()),
                ("Esc".to_string(), "Leave field".to_string()),
                ("Ctrl+C".to_string(), "Quit".to_string()),
            ]
        );
    }

    #[test]
    fn test_help_keys_resolve_regardless_of_focus() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve_in_help(&key(KeyCode::Char('?'))), Some(KeyAction::Help));
        assert_eq!(ctx.resolve_in_help(&key(KeyCode::Esc)), Some(KeyAction::Dismiss));
        assert_eq!(ctx.resolve_in_help(&key(KeyCode::Char('r'))), None);
        assert_eq!(ctx.resolve_in_help(&key(KeyCode::Right)), None);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctx = KeybindingContext::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(ctx.resolve(Focus::PriceRange, &ctrl_c), Some(KeyAction::Quit));
        assert_eq!(ctx.resolve(Focus::Products, &ctrl_c), Some(KeyAction::Quit));
    }

    #[test]
    fn test_nav_items_combine_option_keys() {
        let ctx = KeybindingContext::new();
        let items = ctx.get_nav_items(Focus::Category);
        assert_eq!(items[0].key_display, "Left/Right");
        assert_eq!(
            items.iter().filter(|i| i.key_display == "Left/Right").count(),
            1
        );
    }

    #[test]
    fn test_help_content_has_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(Focus::Brand);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Navigation", "Filters", "General"]);
    }
}
