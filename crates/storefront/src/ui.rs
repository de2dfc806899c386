//! Transient per-view UI flags.
//!
//! Nothing here is persisted or coupled to the cart store; a view keeps one
//! `UiState` and renders it alongside the cart.

/// How the viewport should move when scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// A scroll the renderer should perform on its next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Target offset from the top of the page, in pixels.
    pub top: u32,
    /// How to get there.
    pub behavior: ScrollBehavior,
}

/// Menu and cart-panel visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    menu_open: bool,
    cart_open: bool,
    pending_scroll: Option<ScrollRequest>,
}

impl UiState {
    /// Both panels closed, no scroll pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the navigation menu is shown.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the cart panel is shown.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Flip the menu's visibility.
    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Hide the menu.
    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Flip the cart panel's visibility.
    pub const fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    /// Hide the cart panel.
    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Ask the renderer to smooth-scroll back to the top of the page.
    pub const fn scroll_to_top(&mut self) {
        self.pending_scroll = Some(ScrollRequest {
            top: 0,
            behavior: ScrollBehavior::Smooth,
        });
    }

    /// Hand the pending scroll, if any, to the renderer. Each request is
    /// returned once.
    pub const fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}
