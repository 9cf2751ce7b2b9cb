#![forbid(unsafe_code)]

//! Property-based invariant tests for colors and item style resolution.
//!
//! 1. `Color::parse` never panics, whatever the input.
//! 2. A color's CSS form parses back to the same color.
//! 3. Resolved opacity is always within `[0, 1]`.
//! 4. Only a selected, enabled item takes the selected text color.
//!
//! Run:
//!   cargo test -p wheelpick-style --test proptest_style_invariants

use proptest::prelude::*;
use wheelpick_style::{Color, ItemState, WheelStyle, WheelTheme};

// ── Strategies ────────────────────────────────────────────────────────────

fn color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), 0.0f32..=1.0)
        .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

fn state() -> impl Strategy<Value = ItemState> {
    (any::<bool>(), any::<bool>()).prop_map(|(selected, disabled)| ItemState { selected, disabled })
}

// ═══════════════════════════════════════════════════════════════════════════
// Color parsing
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parse_never_panics(input in ".{0,32}") {
        let _ = Color::parse(&input);
    }

    #[test]
    fn css_form_parses_back(c in color()) {
        let css = c.to_string();
        prop_assert_eq!(Color::parse(&css), Ok(c), "css form {}", css);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Style resolution
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolved_opacity_is_clamped(state in state(), opacity in -2.0f32..3.0) {
        let style = WheelStyle::default().resolve(state, opacity);
        prop_assert!((0.0..=1.0).contains(&style.opacity));
        prop_assert_eq!(style.disabled, state.disabled);
    }

    #[test]
    fn selected_color_needs_enabled_selection(state in state(), dark in any::<bool>()) {
        let theme = if dark { WheelTheme::dark() } else { WheelTheme::light() };
        let style = theme.apply(WheelStyle::default());
        let resolved = style.resolve(state, 1.0);
        if state.selected && !state.disabled {
            prop_assert_eq!(resolved.color, theme.selected_text);
        } else {
            prop_assert_eq!(resolved.color, theme.text);
        }
    }
}
