//! Focus trap for the drawer's focusable items
//!
//! Focus cycles strictly within the ring, wrapping last-to-first and
//! first-to-last; until the initial-focus delay fires, nothing holds
//! focus (`index` is `None`).

#[derive(Clone, Copy, Debug, Default)]
pub struct FocusRing {
    len: usize,
    index: Option<usize>,
}

impl FocusRing {
    pub fn new(len: usize) -> Self {
        Self { len, index: None }
    }

    /// Resize the ring, clamping any held focus into range.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        match self.index {
            Some(_) if len == 0 => self.index = None,
            Some(i) if i >= len => self.index = Some(len - 1),
            _ => {}
        }
    }

    /// Drop focus entirely (drawer re-opened, delay not yet elapsed).
    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn focus_first(&mut self) {
        if self.len > 0 {
            self.index = Some(0);
        }
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = Some(match self.index {
            None => 0,
            Some(i) => (i + 1) % self.len,
        });
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = Some(match self.index {
            None => self.len - 1,
            Some(i) => (i + self.len - 1) % self.len,
        });
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_directions() {
        let mut ring = FocusRing::new(3);
        ring.focus_first();
        ring.next();
        ring.next();
        assert_eq!(ring.index(), Some(2));
        ring.next();
        assert_eq!(ring.index(), Some(0));
        ring.prev();
        assert_eq!(ring.index(), Some(2));
    }

    #[test]
    fn unfocused_ring_enters_at_the_edges() {
        let mut ring = FocusRing::new(4);
        assert_eq!(ring.index(), None);
        ring.next();
        assert_eq!(ring.index(), Some(0));

        let mut ring = FocusRing::new(4);
        ring.prev();
        assert_eq!(ring.index(), Some(3));
    }

    #[test]
    fn empty_ring_never_focuses() {
        let mut ring = FocusRing::new(0);
        ring.focus_first();
        ring.next();
        ring.prev();
        assert_eq!(ring.index(), None);
    }

    #[test]
    fn shrinking_clamps_focus() {
        let mut ring = FocusRing::new(5);
        ring.focus_first();
        for _ in 0..4 {
            ring.next();
        }
        assert_eq!(ring.index(), Some(4));
        ring.set_len(3);
        assert_eq!(ring.index(), Some(2));
    }
}
