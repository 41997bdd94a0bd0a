//! One-shot viewport reveal.

use std::ops::ControlFlow;

/// Fraction of the grid that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.4;

/// Browsers report the crossing ratio with rounding, so a ratio this close
/// below the threshold still counts as reaching it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// `Hidden -> Visible` latch. Once visible it never hides again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection ratio. Returns `true` only on the call that flips
    /// the latch to visible.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }

    /// Whether the observer feeding this latch is still needed.
    pub fn control_flow(&self) -> ControlFlow<()> {
        if self.visible {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let mut latch = RevealLatch::default();
        for ratio in [0.0, 0.1, 0.25, 0.39] {
            assert!(!latch.observe(ratio));
        }
        assert!(!latch.is_visible());
        assert_eq!(latch.control_flow(), ControlFlow::Continue(()));
    }

    #[test]
    fn reveals_once_and_never_hides() {
        let mut latch = RevealLatch::default();
        assert!(latch.observe(0.45));
        assert!(latch.is_visible());

        // Scrolling away and back must not toggle or re-fire.
        assert!(!latch.observe(0.0));
        assert!(latch.is_visible());
        assert!(!latch.observe(0.9));
        assert!(latch.is_visible());
        assert_eq!(latch.control_flow(), ControlFlow::Break(()));
    }

    #[test]
    fn exact_threshold_reveals() {
        let mut latch = RevealLatch::new(0.4);
        assert!(latch.observe(0.4));
    }

    #[test]
    fn rounding_just_below_threshold_reveals() {
        let mut latch = RevealLatch::new(0.4);
        assert!(latch.observe(0.3999));
    }
}
