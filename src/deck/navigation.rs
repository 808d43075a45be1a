//! Navigation bubbles: one indicator per slide.

/// One navigation indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bubble {
    /// Whether this bubble marks the current slide.
    pub highlighted: bool,
}

/// Row of bubbles mirroring the deck's current slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    bubbles: Vec<Bubble>,
    current: usize,
    clickable: bool,
}

impl Navigation {
    /// Empty navigation; call [`generate_bubbles`](Self::generate_bubbles).
    #[must_use]
    pub fn new(clickable: bool) -> Self {
        Self {
            bubbles: Vec::new(),
            current: 0,
            clickable,
        }
    }

    /// Whether clicks select slides.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    /// Allow or block bubble clicks.
    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    /// Replace the bubbles with `count` fresh ones.
    pub fn generate_bubbles(&mut self, count: usize) {
        self.bubbles = vec![Bubble::default(); count];
        if self.current >= count {
            self.current = 0;
        }
        self.refresh();
    }

    /// The bubbles, in slide order.
    #[must_use]
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Highlighted index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Move the highlight to `index`. Out-of-range indices are ignored.
    pub fn set_current(&mut self, index: usize) {
        if index < self.bubbles.len() {
            self.current = index;
            self.refresh();
        }
    }

    /// Handle a click on bubble `index`.
    ///
    /// Returns the slide to load, or `None` when clicks are disabled, the
    /// index is out of range, or the bubble is already current.
    #[must_use]
    pub fn click(&self, index: usize) -> Option<usize> {
        if !self.clickable || index >= self.bubbles.len() || index == self.current {
            return None;
        }
        Some(index)
    }

    fn refresh(&mut self) {
        let current = self.current;
        for (i, bubble) in self.bubbles.iter_mut().enumerate() {
            bubble.highlighted = i == current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(nav: &Navigation) -> Vec<usize> {
        nav.bubbles()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.highlighted)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn exactly_one_bubble_highlighted() {
        let mut nav = Navigation::new(true);
        nav.generate_bubbles(4);
        assert_eq!(highlighted(&nav), vec![0]);
        nav.set_current(2);
        assert_eq!(highlighted(&nav), vec![2]);
        nav.set_current(9);
        assert_eq!(highlighted(&nav), vec![2]);
    }

    #[test]
    fn click_reports_index_only_when_allowed() {
        let mut nav = Navigation::new(true);
        nav.generate_bubbles(3);
        assert_eq!(nav.click(1), Some(1));
        assert_eq!(nav.click(0), None);
        assert_eq!(nav.click(3), None);
        nav.set_clickable(false);
        assert_eq!(nav.click(1), None);
    }
}
