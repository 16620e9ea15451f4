//! Track selection driven by the stick while playback is stopped.

use crate::input::HoldLatch;
use crate::types::Direction;

/// A change of the selected track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectionMove {
    /// Index selected before the move.
    pub from: usize,

    /// Index selected after the move.
    pub to: usize,
}

/// Moves the selection one entry per stick deflection, clamped to the catalog.
///
/// `Up` moves toward index 0 and `Down` toward the last entry. A held stick
/// moves the selection only once; it has to return to neutral before the next
/// move is accepted.
#[derive(Debug, Clone)]
pub struct SelectionNavigator {
    selected: usize,
    track_count: usize,
    latch: HoldLatch,
}

impl SelectionNavigator {
    /// Creates a navigator over `track_count` entries with the first one selected.
    ///
    /// A `track_count` of zero is treated as one.
    pub fn new(track_count: usize) -> Self {
        Self {
            selected: 0,
            track_count: track_count.max(1),
            latch: HoldLatch::new(),
        }
    }

    /// Feeds one classified stick sample.
    ///
    /// Returns the move if the selected index changed. A fresh deflection at a
    /// list boundary is consumed by the latch but yields `None`.
    pub fn navigate(&mut self, direction: Direction) -> Option<SelectionMove> {
        let direction = self.latch.consume(direction)?;

        let from = self.selected;
        let last = (self.track_count - 1) as isize;
        let to = (from as isize - direction.delta() as isize).clamp(0, last) as usize;

        if to == from {
            return None;
        }

        self.selected = to;
        Some(SelectionMove { from, to })
    }

    /// Currently selected index, always within `0..track_count`.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of selectable entries.
    pub fn track_count(&self) -> usize {
        self.track_count
    }

    /// Returns true while a deflection is being held.
    pub fn is_held(&self) -> bool {
        self.latch.is_held()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_moves_toward_the_end() {
        let mut nav = SelectionNavigator::new(4);
        assert_eq!(
            nav.navigate(Direction::Down),
            Some(SelectionMove { from: 0, to: 1 })
        );
        assert_eq!(nav.selected(), 1);
    }

    #[test]
    fn up_moves_toward_the_start() {
        let mut nav = SelectionNavigator::new(4);
        nav.navigate(Direction::Down);
        nav.navigate(Direction::Neutral);
        assert_eq!(
            nav.navigate(Direction::Up),
            Some(SelectionMove { from: 1, to: 0 })
        );
    }

    #[test]
    fn held_stick_moves_once() {
        let mut nav = SelectionNavigator::new(4);
        for _ in 0..10 {
            nav.navigate(Direction::Down);
        }
        assert_eq!(nav.selected(), 1);
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut nav = SelectionNavigator::new(3);
        assert_eq!(nav.navigate(Direction::Up), None);
        assert_eq!(nav.selected(), 0);

        for _ in 0..5 {
            nav.navigate(Direction::Down);
            nav.navigate(Direction::Neutral);
        }
        assert_eq!(nav.selected(), 2);
        assert_eq!(nav.navigate(Direction::Down), None);
        assert_eq!(nav.selected(), 2);
    }

    #[test]
    fn single_entry_never_moves() {
        let mut nav = SelectionNavigator::new(1);
        assert_eq!(nav.navigate(Direction::Down), None);
        nav.navigate(Direction::Neutral);
        assert_eq!(nav.navigate(Direction::Up), None);
        assert_eq!(nav.selected(), 0);
    }
}
