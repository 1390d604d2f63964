//! Modification state reported by fields.

use std::ops::{BitOr, BitOrAssign};

/// How far an edit of a field has progressed.
///
/// Ordered by severity: combining two states keeps the more severe one.
/// `Modified` is only reached after `ModifyInProgress`, once the edit gesture
/// is confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InspectableState {
    #[default]
    NotModified,
    /// Live edits have been written but the gesture is still open
    ModifyInProgress,
    /// The gesture was confirmed and committed
    Modified,
}

impl InspectableState {
    pub fn is_in_progress(self) -> bool {
        self >= InspectableState::ModifyInProgress
    }

    pub fn is_modified(self) -> bool {
        self == InspectableState::Modified
    }

    /// Promote an in-progress edit to `Modified`. Other states are unchanged.
    pub fn confirmed(self) -> Self {
        if self.is_in_progress() {
            InspectableState::Modified
        } else {
            self
        }
    }

    /// Return the current state, clearing it if it is `Modified`.
    ///
    /// An in-progress edit keeps being reported until it is confirmed; a
    /// confirmed one is reported exactly once.
    pub fn take(&mut self) -> Self {
        let old = *self;
        if old.is_modified() {
            *self = InspectableState::NotModified;
        }
        old
    }
}

impl BitOr for InspectableState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.max(rhs)
    }
}

impl BitOrAssign for InspectableState {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_most_severe() {
        use InspectableState::*;
        assert_eq!(NotModified | ModifyInProgress, ModifyInProgress);
        assert_eq!(Modified | ModifyInProgress, Modified);

        let mut state = NotModified;
        state |= ModifyInProgress;
        state |= NotModified;
        assert_eq!(state, ModifyInProgress);
    }

    #[test]
    fn test_take_clears_only_modified() {
        let mut state = InspectableState::ModifyInProgress;
        assert_eq!(state.take(), InspectableState::ModifyInProgress);
        assert_eq!(state, InspectableState::ModifyInProgress);

        state = state.confirmed();
        assert_eq!(state.take(), InspectableState::Modified);
        assert_eq!(state.take(), InspectableState::NotModified);
    }

    #[test]
    fn test_confirm_without_edit() {
        assert_eq!(InspectableState::NotModified.confirmed(), InspectableState::NotModified);
    }
}
