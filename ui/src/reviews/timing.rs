//! Marquee speed derived from a column's rendered height.

/// Observed height of one marquee column and the duration it implies.
///
/// The duration is `height_px * ms_per_pixel` so taller columns scroll at the
/// same visual speed as short ones. It only changes through [`on_resize`].
///
/// [`on_resize`]: ColumnTiming::on_resize
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnTiming {
    ms_per_pixel: u32,
    height_px: u32,
}

impl ColumnTiming {
    pub fn new(ms_per_pixel: u32) -> Self {
        Self {
            ms_per_pixel,
            height_px: 0,
        }
    }

    /// Record a new measurement. Returns whether the height changed.
    pub fn on_resize(&mut self, height_px: u32) -> bool {
        let changed = self.height_px != height_px;
        self.height_px = height_px;
        changed
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn duration_ms(&self) -> u64 {
        u64::from(self.height_px) * u64::from(self.ms_per_pixel)
    }

    /// CSS time value, e.g. `"12400ms"`.
    pub fn css_duration(&self) -> String {
        format!("{}ms", self.duration_ms())
    }

    /// Inline style feeding the marquee keyframes.
    pub fn style(&self) -> String {
        format!("--marquee-duration: {}", self.css_duration())
    }
}

/// The column's items twice over, for a seamless loop. Yields
/// `(render_index, logical_index, item)` where `logical_index` is the position
/// in the original slice.
pub fn looped<T>(items: &[T]) -> impl Iterator<Item = (usize, usize, &T)> {
    let len = items.len();
    items
        .iter()
        .chain(items.iter())
        .enumerate()
        .map(move |(index, item)| (index, index % len.max(1), item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_height_times_multiplier() {
        let mut timing = ColumnTiming::new(15);
        assert_eq!(timing.css_duration(), "0ms");

        assert!(timing.on_resize(800));
        assert_eq!(timing.duration_ms(), 12_000);
        assert_eq!(timing.css_duration(), "12000ms");
        assert_eq!(timing.style(), "--marquee-duration: 12000ms");
    }

    #[test]
    fn duration_is_stable_between_resizes() {
        let mut timing = ColumnTiming::new(10);
        timing.on_resize(640);
        let before = timing.css_duration();
        assert_eq!(timing.css_duration(), before);

        assert!(!timing.on_resize(640));
        assert_eq!(timing.css_duration(), before);

        assert!(timing.on_resize(320));
        assert_eq!(timing.css_duration(), "3200ms");
    }

    #[test]
    fn zero_multiplier_never_animates() {
        let mut timing = ColumnTiming::default();
        timing.on_resize(1_000);
        assert_eq!(timing.height_px(), 1_000);
        assert_eq!(timing.css_duration(), "0ms");
    }

    #[test]
    fn looped_repeats_with_logical_indices() {
        let items = ["a", "b", "c"];
        let rendered: Vec<_> = looped(&items).map(|(i, l, s)| (i, l, *s)).collect();
        assert_eq!(
            rendered,
            vec![
                (0, 0, "a"),
                (1, 1, "b"),
                (2, 2, "c"),
                (3, 0, "a"),
                (4, 1, "b"),
                (5, 2, "c"),
            ]
        );
        assert_eq!(looped::<u8>(&[]).count(), 0);
    }
}
