//! Global application state
//!
//! [`Navigation`] is the plain state machine (current page plus the two menu
//! flags). [`AppState`] wraps it in a signal and is provided through context
//! by the [`App`](crate::App) shell.

use leptos::prelude::*;
use crate::types::Page;

/// Page selection and transient menu state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Raw identifier from the last `navigate` call; see [`Page::resolve`]
    pub current_page: String,
    pub is_mobile_menu_open: bool,
    pub is_dropdown_open: bool,
}

impl Default for Navigation {
    fn default() -> Self {
        Self {
            current_page: Page::Home.id().to_string(),
            is_mobile_menu_open: false,
            is_dropdown_open: false,
        }
    }
}

impl Navigation {
    /// Store `target` unvalidated and close both menus
    pub fn navigate(&mut self, target: impl Into<String>) {
        self.current_page = target.into();
        self.is_mobile_menu_open = false;
        self.is_dropdown_open = false;
    }

    /// View to render for the stored identifier
    pub fn page(&self) -> Page {
        Page::resolve(&self.current_page)
    }

    pub fn toggle_dropdown(&mut self) {
        self.is_dropdown_open = !self.is_dropdown_open;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.is_mobile_menu_open = !self.is_mobile_menu_open;
    }

    /// Pointer went down outside the dropdown region.
    ///
    /// Closes the dropdown; the mobile menu has no outside dismissal.
    pub fn pointer_down_outside_dropdown(&mut self) {
        self.is_dropdown_open = false;
    }
}

/// Reactive handle to [`Navigation`], shared through context
#[derive(Clone, Copy)]
pub struct AppState {
    pub navigation: RwSignal<Navigation>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            navigation: RwSignal::new(Navigation::default()),
        }
    }

    /// Switch page, close menus and scroll the window back to the origin
    pub fn navigate(&self, target: impl Into<String>) {
        let target = target.into();
        tracing::debug!(page = %target, "navigate");
        self.navigation.update(|nav| nav.navigate(target));
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }

    pub fn page(&self) -> Page {
        self.navigation.with(Navigation::page)
    }

    pub fn toggle_dropdown(&self) {
        self.navigation.update(Navigation::toggle_dropdown);
    }

    pub fn toggle_mobile_menu(&self) {
        self.navigation.update(Navigation::toggle_mobile_menu);
    }

    /// Close the dropdown after an outside pointer-down; no-op when closed
    pub fn dismiss_dropdown(&self) {
        if self.navigation.with_untracked(|nav| nav.is_dropdown_open) {
            self.navigation.update(Navigation::pointer_down_outside_dropdown);
        }
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.navigation.with(|nav| nav.is_dropdown_open)
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.navigation.with(|nav| nav.is_mobile_menu_open)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
