//! Pure view-state math behind the scroll choreography. Everything here is
//! plain data so it can be unit tested off the browser.

use crate::config;

/// Linear interpolation with the input clamped to its domain. Offsets past
/// either end hold the endpoint value rather than extrapolating.
pub fn map_clamped(x: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    let clamped = x.clamp(d0.min(d1), d0.max(d1));
    let t = (clamped - d0) / (d1 - d0);
    r0 + t * (r1 - r0)
}

/// Vertical drift of the hero background for a given scroll offset, in px.
pub fn parallax_shift(offset_y: f64) -> f64 {
    map_clamped(offset_y, config::HERO_SHIFT_DOMAIN, config::HERO_SHIFT_RANGE)
}

/// Opacity of the hero copy for a given scroll offset.
pub fn hero_opacity(offset_y: f64) -> f64 {
    map_clamped(offset_y, config::HERO_FADE_DOMAIN, config::HERO_FADE_RANGE)
}

/// Whether the navbar should show its solid treatment.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > config::NAV_SCROLL_THRESHOLD
}

/// Entrance delay for the card at `index` in a staggered grid, in seconds.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * config::MENU_STAGGER_STEP_SECS
}

/// One-way boolean gate. `set` reports the transition exactly once no
/// matter how many times the underlying event fires.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Latch {
    fired: bool,
}

impl Latch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the latch. Returns `true` only on the first call.
    pub fn set(&mut self) -> bool {
        let first = !self.fired;
        self.fired = true;
        first
    }

    pub fn is_set(&self) -> bool {
        self.fired
    }
}

/// Open/closed state of the mobile overlay menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Burger button press.
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Nav link tap. Always closes, idempotent when already closed.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_shift_clamps_to_endpoints() {
        assert_eq!(parallax_shift(0.0), 0.0);
        assert_eq!(parallax_shift(250.0), 100.0);
        assert_eq!(parallax_shift(500.0), 200.0);
        assert_eq!(parallax_shift(1000.0), 200.0);
        assert_eq!(parallax_shift(-50.0), 0.0);
    }

    #[test]
    fn hero_opacity_fades_over_first_300px() {
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_opacity(150.0), 0.5);
        assert_eq!(hero_opacity(300.0), 0.0);
        assert_eq!(hero_opacity(600.0), 0.0);
        assert_eq!(hero_opacity(-10.0), 1.0);
    }

    #[test]
    fn navbar_threshold_is_exclusive_at_50() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    #[test]
    fn stagger_grows_linearly_with_index() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(1) - 0.1).abs() < 1e-12);
        assert!((stagger_delay(5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn latch_trips_exactly_once() {
        let mut latch = Latch::new();
        assert!(!latch.is_set());
        // enter, leave, re-enter: only the first event reports a transition
        assert!(latch.set());
        assert!(latch.is_set());
        assert!(!latch.set());
        assert!(!latch.set());
        assert!(latch.is_set());
    }

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = MenuState::default();
        assert!(!menu.open);
        let opened = menu.toggled();
        assert!(opened.open);
        assert!(!opened.toggled().open);
    }

    #[test]
    fn link_tap_closes_and_is_idempotent() {
        let open = MenuState { open: true };
        assert!(!open.closed().open);
        assert!(!open.closed().closed().open);
        let closed = MenuState::default();
        assert!(!closed.closed().open);
    }
}
