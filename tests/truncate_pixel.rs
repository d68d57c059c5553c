// Pixel-truncation contract, exercised against a canned-width measurer (so
// the expected cut points are exact) and the deterministic Arial heuristic.

use serpview::measure::{FontSpec, GlyphMeasurer, HeuristicMeasurer, MeasureError, TextMeasurer};
use serpview::truncate::{ELLIPSIS, truncate_to_width};

/// Test double: every character is exactly `self.0` pixels wide.
struct FixedWidth(f32);

impl TextMeasurer for FixedWidth {
    fn measure(&self, text: &str, _font: &FontSpec) -> Result<f32, MeasureError> {
        Ok(text.chars().count() as f32 * self.0)
    }
}

fn font() -> FontSpec {
    FontSpec::arial(20.0)
}

#[test]
fn empty_input_returns_empty_without_measuring() {
    struct Panicking;
    impl TextMeasurer for Panicking {
        fn measure(&self, _: &str, _: &FontSpec) -> Result<f32, MeasureError> {
            panic!("measure called for empty input");
        }
    }
    assert_eq!(truncate_to_width(&Panicking, "", &font(), 100.0).unwrap(), "");
}

#[test]
fn fitting_text_is_returned_unchanged() {
    let m = FixedWidth(10.0);
    assert_eq!(
        truncate_to_width(&m, "abcdefgh", &font(), 80.0).unwrap(),
        "abcdefgh"
    );
}

#[test]
fn very_long_text_within_budget_is_not_cut() {
    // Only pixel width governs; character count never does.
    let m = FixedWidth(0.5);
    let text = "x".repeat(500);
    assert_eq!(truncate_to_width(&m, &text, &font(), 300.0).unwrap(), text);
}

#[test]
fn truncation_keeps_the_largest_fitting_prefix() {
    // 10px per char, budget 95, ellipsis 30 => target 65 => k = 6.
    let m = FixedWidth(10.0);
    let out = truncate_to_width(&m, "abcdefghij", &font(), 95.0).unwrap();
    assert_eq!(out, format!("abcdef{ELLIPSIS}"));

    // A wider budget admits a longer prefix.
    let out = truncate_to_width(&m, "abcdefghijkl", &font(), 105.0).unwrap();
    assert_eq!(out, format!("abcdefg{ELLIPSIS}"));
}

#[test]
fn truncated_output_fits_the_budget() {
    let m = FixedWidth(7.0);
    let text = "the quick brown fox jumps over the lazy dog";
    // Width bound holds whenever the budget admits at least the ellipsis
    // (21px here).
    for budget in [25.0, 50.0, 100.0, 200.0] {
        let out = truncate_to_width(&m, text, &font(), budget).unwrap();
        assert!(
            m.measure(&out, &font()).unwrap() <= budget,
            "output exceeds {budget}px"
        );
    }
}

#[test]
fn impossible_budget_floors_at_bare_ellipsis() {
    let m = FixedWidth(10.0);
    // Budget narrower than the ellipsis itself (30px).
    let out = truncate_to_width(&m, "abcdef", &font(), 20.0).unwrap();
    assert_eq!(out, ELLIPSIS);
}

#[test]
fn measurement_failure_propagates_as_error() {
    // An unusable environment must surface as an error, never as silently
    // unmeasured text.
    struct Unavailable;
    impl TextMeasurer for Unavailable {
        fn measure(&self, _: &str, _: &FontSpec) -> Result<f32, MeasureError> {
            Err(MeasureError::EnvironmentUnavailable("no font face".into()))
        }
    }

    let err = truncate_to_width(&Unavailable, "abc", &font(), 100.0).unwrap_err();
    assert!(matches!(err, MeasureError::EnvironmentUnavailable(_)));

    // Empty input short-circuits before any measurement, so it still
    // succeeds.
    assert_eq!(truncate_to_width(&Unavailable, "", &font(), 100.0).unwrap(), "");
}

#[test]
fn truncation_is_deterministic() {
    let m = HeuristicMeasurer;
    let text = "Determinism means the same inputs always produce the same snippet text.";
    let a = truncate_to_width(&m, text, &font(), 300.0).unwrap();
    let b = truncate_to_width(&m, text, &font(), 300.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn multibyte_text_truncates_on_char_boundaries() {
    let m = FixedWidth(10.0);
    let text = "héllo wörld événement";
    let out = truncate_to_width(&m, text, &font(), 95.0).unwrap();
    assert_eq!(out, format!("héllo {ELLIPSIS}"));
}

#[test]
fn long_title_scenario_desktop_budget() {
    let m = HeuristicMeasurer;
    let title: String = "Best Wireless Headphones 2025 Expert Reviews and Complete Buyers Guide!"
        .chars()
        .chain("extra.pad".chars())
        .collect();
    assert_eq!(title.chars().count(), 80);

    let font = FontSpec::arial(20.0);
    let out = truncate_to_width(&m, &title, &font, 580.0).unwrap();
    assert!(out.chars().count() < 80);
    assert!(out.ends_with(ELLIPSIS));
    assert!(m.measure(&out, &font).unwrap() <= 580.0);
}

#[test]
fn maximality_no_longer_prefix_fits() {
    let m = HeuristicMeasurer;
    let font = FontSpec::arial(14.0);
    let text = "Compare the top-rated wireless headphones of 2025 and find your perfect pair.";
    let budget = 200.0;
    let out = truncate_to_width(&m, text, &font, budget).unwrap();
    assert!(out.ends_with(ELLIPSIS));

    let kept = out.chars().count() - ELLIPSIS.len();
    let target = budget - m.measure(ELLIPSIS, &font).unwrap();

    let prefix: String = text.chars().take(kept).collect();
    assert!(m.measure(&prefix, &font).unwrap() <= target);

    let longer: String = text.chars().take(kept + 1).collect();
    assert!(m.measure(&longer, &font).unwrap() > target);
}

// Real-font smoke test; skipped quietly on systems without a usable face.
#[test]
fn glyph_backend_respects_budget() {
    let Ok(m) = GlyphMeasurer::from_system_fonts() else {
        eprintln!("no system font; skipping glyph truncation test");
        return;
    };
    let font = FontSpec::arial(20.0);
    let text = "Compare the top-rated wireless headphones of 2025. We tested 50+ models.";
    let out = truncate_to_width(&m, text, &font, 300.0).unwrap();
    assert!(out.ends_with(ELLIPSIS));
    assert!(m.measure(&out, &font).unwrap() <= 300.0);
}
