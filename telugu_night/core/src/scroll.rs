//! Scroll-derived blur for the hero visuals.

/// Brightness applied underneath the blur on every hero visual.
pub const HERO_BRIGHTNESS: f64 = 0.7;

/// Linear, saturating mapping from scroll distance to blur radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurCurve {
    pub max_blur_px: f64,
    pub saturation_px: f64,
}

impl Default for BlurCurve {
    fn default() -> Self {
        BlurCurve {
            max_blur_px: 8.0,
            saturation_px: 500.0,
        }
    }
}

impl BlurCurve {
    /// Blur radius in pixels for a vertical scroll offset.
    ///
    /// Negative and non-finite offsets count as zero.
    pub fn blur_for(&self, scroll_y: f64) -> f64 {
        if !scroll_y.is_finite() || scroll_y <= 0.0 || self.saturation_px <= 0.0 {
            return 0.0;
        }
        let factor = (scroll_y / self.saturation_px).min(1.0);
        factor * self.max_blur_px
    }
}

/// The "scroll down" affordance is only shown near the top of the page.
pub fn shows_scroll_indicator(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y < threshold_px
}

/// CSS `filter` value for a hero visual.
pub fn filter_css(blur_px: f64, brightness: f64) -> String {
    format!(
        "blur({blur_px:.2}px) brightness({brightness}) drop-shadow(0 0 40px rgba(255, 255, 255, 0.3)) drop-shadow(0 0 80px rgba(255, 255, 255, 0.2))"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_of_page_has_no_blur() {
        assert_eq!(BlurCurve::default().blur_for(0.0), 0.0);
    }

    #[test]
    fn saturates_at_max() {
        let curve = BlurCurve {
            max_blur_px: 10.0,
            saturation_px: 400.0,
        };

        assert_eq!(curve.blur_for(400.0), 10.0);
        assert_eq!(curve.blur_for(4_000.0), 10.0);
    }

    #[test]
    fn is_monotonic_between_bounds() {
        let curve = BlurCurve::default();
        let mut previous = curve.blur_for(0.0);

        for step in 1..=120 {
            let blur = curve.blur_for(step as f64 * 5.0);
            assert!(blur >= previous, "blur dropped at {}", step * 5);
            assert!(blur <= curve.max_blur_px);
            previous = blur;
        }
    }

    #[test]
    fn negative_and_nan_offsets_are_clamped() {
        let curve = BlurCurve::default();

        assert_eq!(curve.blur_for(-120.0), 0.0);
        assert_eq!(curve.blur_for(f64::NAN), 0.0);
    }

    #[test]
    fn indicator_hides_past_threshold() {
        assert!(shows_scroll_indicator(0.0, 50.0));
        assert!(shows_scroll_indicator(49.9, 50.0));
        assert!(!shows_scroll_indicator(50.0, 50.0));
        assert!(!shows_scroll_indicator(300.0, 50.0));
    }

    #[test]
    fn filter_includes_blur_and_brightness() {
        let css = filter_css(2.5, HERO_BRIGHTNESS);

        assert!(css.starts_with("blur(2.50px) brightness(0.7)"));
        assert!(css.contains("drop-shadow"));
    }
}
