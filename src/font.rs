//! Relative font sizing for the toolbar's size controls.

/// Cumulative font-size adjustment, clamped to a bounded step range.
///
/// The toolbar exposes relative increase/decrease buttons rather than an
/// absolute size picker. Each press moves the step by one within
/// `[MIN_STEP, MAX_STEP]`; the applied size is [`BASE_PX`](Self::BASE_PX)
/// plus [`STEP_PX`](Self::STEP_PX) per step.
///
/// # Examples
///
/// ```
/// use minutes_editor::FontSizeStep;
///
/// let mut step = FontSizeStep::new();
/// assert_eq!(step.adjust(1), 18);
/// assert_eq!(step.adjust(1), 20);
///
/// // Clamped at the upper bound
/// for _ in 0..10 {
///     step.adjust(1);
/// }
/// assert_eq!(step.step(), FontSizeStep::MAX_STEP);
/// assert_eq!(step.size_px(), 24);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontSizeStep {
    step: i32,
}

impl FontSizeStep {
    /// Smallest allowed step.
    pub const MIN_STEP: i32 = -2;
    /// Largest allowed step.
    pub const MAX_STEP: i32 = 4;
    /// Base font size in pixels at the neutral step.
    pub const BASE_PX: i32 = 16;
    /// Pixels added per step.
    pub const STEP_PX: i32 = 2;

    /// Create a step counter at the neutral position.
    #[must_use]
    pub const fn new() -> Self {
        Self { step: 0 }
    }

    /// Current step.
    #[must_use]
    pub const fn step(self) -> i32 {
        self.step
    }

    /// Absolute size in pixels for the current step.
    #[must_use]
    pub const fn size_px(self) -> u32 {
        (Self::BASE_PX + self.step * Self::STEP_PX) as u32
    }

    /// Apply a relative adjustment, clamping to the step range.
    ///
    /// Returns the resulting absolute size. Callers re-apply the style on
    /// every call, including ones the clamp leaves at the same step.
    pub fn adjust(&mut self, delta: i32) -> u32 {
        self.step = self
            .step
            .saturating_add(delta)
            .clamp(Self::MIN_STEP, Self::MAX_STEP);
        self.size_px()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_sequence_clamps_upper() {
        let mut step = FontSizeStep::new();
        let steps: Vec<i32> = (0..5)
            .map(|_| {
                step.adjust(1);
                step.step()
            })
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_adjust_clamps_lower() {
        let mut step = FontSizeStep::new();
        for _ in 0..5 {
            step.adjust(-1);
        }
        assert_eq!(step.step(), FontSizeStep::MIN_STEP);
        assert_eq!(step.size_px(), 12);
    }

    #[test]
    fn test_size_px_tracks_step() {
        let mut step = FontSizeStep::new();
        assert_eq!(step.size_px(), 16);
        assert_eq!(step.adjust(2), 20);
        assert_eq!(step.adjust(-3), 14);
    }

    #[test]
    fn test_extreme_delta_saturates() {
        let mut step = FontSizeStep::new();
        assert_eq!(step.adjust(i32::MAX), 24);
        assert_eq!(step.adjust(i32::MIN), 12);
    }
}
