//! Section state machine.
//!
//! Owns the committed `current_section` and arbitrates between user intents
//! and programmatic navigation. `Idle(i) -> Navigating { target } -> Idle
//! (target)`; every intent that arrives while navigating is dropped, never
//! queued, so a user cannot stack up jumps and commits always happen in the
//! order navigations were initiated.

use tracing::debug;

use crate::intent::{Direction, InteractionIntent};

/// Machine phase. `Navigating` is active strictly between the start of a
/// programmatic navigation and its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Navigating { target: usize },
}

#[derive(Debug, Clone)]
pub struct SectionMachine {
    total_sections: usize,
    current: usize,
    phase: ScrollPhase,
}

impl SectionMachine {
    /// `total_sections` is fixed for the machine's lifetime and must be at
    /// least 1.
    pub fn new(total_sections: usize) -> Self {
        Self {
            total_sections: total_sections.max(1),
            current: 0,
            phase: ScrollPhase::Idle,
        }
    }

    /// Last committed section. Always in `0..total_sections`.
    #[inline]
    pub fn current_section(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn total_sections(&self) -> usize {
        self.total_sections
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, ScrollPhase::Navigating { .. })
    }

    /// Decide what an intent does from the current state.
    ///
    /// Returns the navigation target when the intent is accepted; the caller
    /// starts the navigator and later calls [`commit`](Self::commit). Every
    /// other combination (busy machine, out-of-range target, jump to the
    /// current section) is a no-op.
    pub fn apply(&mut self, intent: InteractionIntent) -> Option<usize> {
        if self.is_transitioning() {
            debug!(?intent, "intent dropped: navigation in flight");
            return None;
        }

        let target = match intent {
            InteractionIntent::Advance
            | InteractionIntent::ScrollDelta {
                direction: Direction::Forward,
                ..
            } => {
                let next = self.current + 1;
                (next < self.total_sections).then_some(next)
            }
            InteractionIntent::Retreat
            | InteractionIntent::ScrollDelta {
                direction: Direction::Backward,
                ..
            } => self.current.checked_sub(1),
            InteractionIntent::JumpTo(j) => {
                (j < self.total_sections && j != self.current).then_some(j)
            }
        }?;

        self.phase = ScrollPhase::Navigating { target };
        Some(target)
    }

    /// Complete the in-flight navigation and commit its target.
    ///
    /// Returns the committed index, or `None` if no navigation was in flight
    /// (a cancelled navigator tick racing a teardown).
    pub fn commit(&mut self) -> Option<usize> {
        match self.phase {
            ScrollPhase::Navigating { target } => {
                self.current = target;
                self.phase = ScrollPhase::Idle;
                Some(target)
            }
            ScrollPhase::Idle => None,
        }
    }

    /// Drop the in-flight navigation without committing (teardown path).
    pub fn abort(&mut self) {
        self.phase = ScrollPhase::Idle;
    }

    /// Commit a section observed from passive (native) scrolling, bypassing
    /// the `Navigating` phase. Ignored while a navigation is in flight.
    /// Returns the new section only when it actually changed.
    pub fn commit_passive(&mut self, section: usize) -> Option<usize> {
        if self.is_transitioning() || section >= self.total_sections || section == self.current {
            return None;
        }
        self.current = section;
        Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::InteractionIntent::*;

    #[test]
    fn test_initial_state() {
        let m = SectionMachine::new(4);
        assert_eq!(m.current_section(), 0);
        assert!(!m.is_transitioning());
    }

    #[test]
    fn test_advance_and_commit() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.apply(Advance), Some(1));
        assert!(m.is_transitioning());
        assert_eq!(m.commit(), Some(1));
        assert_eq!(m.current_section(), 1);
        assert!(!m.is_transitioning());
    }

    #[test]
    fn test_retreat_at_zero_is_noop() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.apply(Retreat), None);
        assert!(!m.is_transitioning());
    }

    #[test]
    fn test_advance_past_last_is_noop() {
        let mut m = SectionMachine::new(2);
        m.apply(Advance);
        m.commit();
        assert_eq!(m.current_section(), 1);
        assert_eq!(m.apply(Advance), None);
    }

    #[test]
    fn test_jump_to_self_is_noop() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.apply(JumpTo(0)), None);
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.apply(JumpTo(4)), None);
        assert_eq!(m.apply(JumpTo(99)), None);
    }

    #[test]
    fn test_intents_dropped_while_navigating() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.apply(JumpTo(2)), Some(2));
        assert_eq!(m.apply(Advance), None);
        assert_eq!(m.apply(Retreat), None);
        assert_eq!(m.apply(JumpTo(3)), None);
        assert_eq!(m.commit(), Some(2));
        assert_eq!(m.current_section(), 2);
    }

    #[test]
    fn test_scroll_delta_resolves_by_direction() {
        let mut m = SectionMachine::new(4);
        assert_eq!(
            m.apply(ScrollDelta {
                magnitude: 30.0,
                direction: crate::intent::Direction::Forward
            }),
            Some(1)
        );
        m.commit();
        assert_eq!(
            m.apply(ScrollDelta {
                magnitude: 12.0,
                direction: crate::intent::Direction::Backward
            }),
            Some(0)
        );
    }

    #[test]
    fn test_commit_without_navigation_is_none() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.commit(), None);
    }

    #[test]
    fn test_abort_keeps_previous_section() {
        let mut m = SectionMachine::new(4);
        m.apply(JumpTo(3));
        m.abort();
        assert_eq!(m.current_section(), 0);
        assert!(!m.is_transitioning());
    }

    #[test]
    fn test_passive_commit() {
        let mut m = SectionMachine::new(4);
        assert_eq!(m.commit_passive(2), Some(2));
        assert_eq!(m.current_section(), 2);
        // Unchanged section reports nothing.
        assert_eq!(m.commit_passive(2), None);
        // Out of range ignored.
        assert_eq!(m.commit_passive(9), None);
    }

    #[test]
    fn test_passive_commit_blocked_while_navigating() {
        let mut m = SectionMachine::new(4);
        m.apply(Advance);
        assert_eq!(m.commit_passive(3), None);
        assert_eq!(m.commit(), Some(1));
    }

    #[test]
    fn test_clamp_property_over_sequences() {
        // N advances and M retreats from idle land on
        // clamp(N - M, 0, total - 1), transitions completing in between.
        let mut m = SectionMachine::new(4);
        let moves = [Advance, Advance, Retreat, Advance, Advance, Advance, Retreat];
        let mut expected: i64 = 0;
        for intent in moves {
            if m.apply(intent).is_some() {
                m.commit();
            }
            expected += match intent {
                Advance => 1,
                Retreat => -1,
                _ => 0,
            };
            expected = expected.clamp(0, 3);
            assert_eq!(m.current_section() as i64, expected);
        }
    }
}
