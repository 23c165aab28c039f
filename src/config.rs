//! Build-time tuning for the page choreography. None of these are
//! runtime-configurable.

/// How long the loading splash stays up before the page mounts.
pub const SPLASH_DURATION_MS: u32 = 2_500;

/// Scroll offset past which the navbar switches to its solid treatment.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Hero background drifts 200px down over the first 500px of scroll.
pub const HERO_SHIFT_DOMAIN: (f64, f64) = (0.0, 500.0);
pub const HERO_SHIFT_RANGE: (f64, f64) = (0.0, 200.0);

/// Hero copy fades out completely by 300px of scroll.
pub const HERO_FADE_DOMAIN: (f64, f64) = (0.0, 300.0);
pub const HERO_FADE_RANGE: (f64, f64) = (1.0, 0.0);

/// The marquee strip repeats its base phrase sequence this many times so
/// that the -50% translation lands on identical content. Must stay even.
pub const MARQUEE_COPIES: usize = 4;
pub const MARQUEE_DURATION_SECS: u32 = 30;

/// Entrance delay between consecutive menu cards.
pub const MENU_STAGGER_STEP_SECS: f64 = 0.1;
