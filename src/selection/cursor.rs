//! @acp:module "Session Cursor"
//! @acp:summary "Immutable working cycle and the index that serves it front to back"
//! @acp:domain selection
//! @acp:layer logic

/// Ordered catalog indices produced by one successful build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingCycle {
    order: Vec<usize>,
}

impl WorkingCycle {
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    pub fn get(&self, position: usize) -> Option<usize> {
        self.order.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Position within the current working cycle.
///
/// `served` counts elements already handed out, so a freshly installed cycle
/// serves its first element next.
#[derive(Debug, Clone, Default)]
pub struct SessionCursor {
    cycle: Option<WorkingCycle>,
    served: usize,
}

impl SessionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cycle wholesale and rewind
    pub fn install(&mut self, cycle: WorkingCycle) {
        self.cycle = Some(cycle);
        self.served = 0;
    }

    /// Forget the cycle; the next request rebuilds
    pub fn reset(&mut self) {
        self.cycle = None;
        self.served = 0;
    }

    /// True when there is no cycle or every element has been served
    pub fn needs_rebuild(&self) -> bool {
        match &self.cycle {
            Some(cycle) => self.served >= cycle.len(),
            None => true,
        }
    }

    /// Serve the next catalog index, or `None` when a rebuild is due
    pub fn advance(&mut self) -> Option<usize> {
        let index = self.cycle.as_ref()?.get(self.served)?;
        self.served += 1;
        Some(index)
    }

    /// Catalog index served most recently from the current cycle
    pub fn current(&self) -> Option<usize> {
        let position = self.served.checked_sub(1)?;
        self.cycle.as_ref()?.get(position)
    }

    pub fn cycle(&self) -> Option<&WorkingCycle> {
        self.cycle.as_ref()
    }

    /// Elements left before the next rebuild
    pub fn remaining(&self) -> usize {
        self.cycle
            .as_ref()
            .map(|c| c.len().saturating_sub(self.served))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cursor_needs_rebuild() {
        let cursor = SessionCursor::new();
        assert!(cursor.needs_rebuild());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_serves_each_element_once_in_order() {
        let mut cursor = SessionCursor::new();
        cursor.install(WorkingCycle::new(vec![4, 1, 7]));

        assert!(!cursor.needs_rebuild());
        assert_eq!(cursor.advance(), Some(4));
        assert_eq!(cursor.current(), Some(4));
        assert_eq!(cursor.advance(), Some(1));
        assert_eq!(cursor.advance(), Some(7));
        assert!(cursor.needs_rebuild());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.current(), Some(7));
    }

    #[test]
    fn test_install_rewinds() {
        let mut cursor = SessionCursor::new();
        cursor.install(WorkingCycle::new(vec![0, 1]));
        cursor.advance();
        cursor.install(WorkingCycle::new(vec![2]));
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.advance(), Some(2));
    }

    #[test]
    fn test_empty_cycle_needs_rebuild() {
        let mut cursor = SessionCursor::new();
        cursor.install(WorkingCycle::empty());
        assert!(cursor.needs_rebuild());
        assert_eq!(cursor.advance(), None);
    }
}
