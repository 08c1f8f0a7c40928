//! Click tally for the counter display.
//!
//! The counter lives for the page lifetime: it starts at zero, grows by one
//! per click, and is never decremented or reset.

/// Running tally of clicks on the counter element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickCounter {
    count: u64,
}

impl ClickCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Record one click and return the new total.
    pub fn record_click(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// Current click total.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Text shown in the counter element, e.g. `Clicks: 3`.
    pub fn label(&self) -> String {
        format!("Clicks: {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let counter = ClickCounter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.label(), "Clicks: 0");
    }

    #[test]
    fn test_record_click_increments_by_one() {
        let mut counter = ClickCounter::new();
        assert_eq!(counter.record_click(), 1);
        assert_eq!(counter.record_click(), 2);
        assert_eq!(counter.record_click(), 3);
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn test_label_matches_count() {
        let mut counter = ClickCounter::new();
        counter.record_click();
        assert_eq!(counter.label(), "Clicks: 1");
        counter.record_click();
        counter.record_click();
        assert_eq!(counter.label(), "Clicks: 3");
    }

    #[test]
    fn test_count_tracks_every_click() {
        let mut counter = ClickCounter::new();
        for expected in 1..=50 {
            assert_eq!(counter.record_click(), expected);
            assert_eq!(counter.label(), format!("Clicks: {}", expected));
        }
    }
}
