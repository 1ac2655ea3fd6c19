//! Staggered entry animation for dashboard cards.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Class that triggers the CSS entry transition.
pub const FADE_IN_CLASS: &str = "fade-in";
/// Elements animated in on page load.
pub const ENTRY_SELECTOR: &str = ".stat-card, .table-container";

/// Delay before the `index`-th element enters.
#[must_use]
pub fn entry_delay_ms(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(stagger_ms)
}

/// Add [`FADE_IN_CLASS`] to `element` after `delay_ms`. Fire-and-forget.
#[cfg(feature = "browser")]
pub fn animate_in(element: web_sys::Element, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || {
        let _ = element.class_list().add_1(FADE_IN_CLASS);
    })
    .forget();
}
