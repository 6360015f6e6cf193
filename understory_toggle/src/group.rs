// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radio group bookkeeping: keep at most one toggle checked.
//!
//! A [`ToggleButton`](crate::ToggleButton) commits its own value on press. After a
//! press, report the new value with [`RadioGroup::commit`]; the returned
//! [`GroupUpdate`] names the members whose value must be driven from outside with
//! [`ToggleButton::set_value`](crate::ToggleButton::set_value).
//!
//! ```
//! use understory_toggle::group::RadioGroup;
//!
//! let mut group = RadioGroup::new();
//! group.insert("small");
//! group.insert("large");
//!
//! let update = group.commit(&"small", true);
//! assert_eq!(update.uncheck, None);
//!
//! let update = group.commit(&"large", true);
//! assert_eq!(update.uncheck, Some("small"));
//! assert_eq!(group.selected(), Some(&"large"));
//!
//! // Pressing the selected member again cannot clear the group.
//! let update = group.commit(&"large", false);
//! assert_eq!(update.recheck, Some("large"));
//! ```

use smallvec::SmallVec;

/// Value changes a caller must apply to keep a group exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupUpdate<K> {
    /// Previously selected member to set unchecked.
    pub uncheck: Option<K>,
    /// Member to set checked again because the group may not be empty.
    pub recheck: Option<K>,
}

impl<K> GroupUpdate<K> {
    /// Returns `true` if nothing needs to change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uncheck.is_none() && self.recheck.is_none()
    }
}

/// Tracks the members of a radio group and the single selected one.
#[derive(Clone, Debug)]
pub struct RadioGroup<K> {
    members: SmallVec<[K; 4]>,
    selected: Option<usize>,
    allow_empty: bool,
}

impl<K> Default for RadioGroup<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RadioGroup<K> {
    /// Creates an empty group that keeps a selection once one is made.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: SmallVec::new(),
            selected: None,
            allow_empty: false,
        }
    }

    /// Allow pressing the selected member to clear the selection.
    #[must_use]
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The selected member, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&K> {
        self.selected.map(|idx| &self.members[idx])
    }

    /// Iterates members in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.members.iter()
    }
}

impl<K: Clone + PartialEq> RadioGroup<K> {
    /// Adds a member. Returns `false` if it was already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.position(&key).is_some() {
            return false;
        }
        self.members.push(key);
        true
    }

    /// Removes a member, clearing the selection if it was selected.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(idx) = self.position(key) else {
            return false;
        };
        self.members.remove(idx);
        self.selected = match self.selected {
            Some(sel) if sel == idx => None,
            Some(sel) if sel > idx => Some(sel - 1),
            other => other,
        };
        true
    }

    /// Records that `key` now has value `checked`.
    ///
    /// Unknown keys are ignored.
    pub fn commit(&mut self, key: &K, checked: bool) -> GroupUpdate<K> {
        let mut update = GroupUpdate {
            uncheck: None,
            recheck: None,
        };
        let Some(idx) = self.position(key) else {
            log::trace!("radio group: ignoring commit for unknown member");
            return update;
        };

        if checked {
            if let Some(prev) = self.selected.filter(|&prev| prev != idx) {
                update.uncheck = Some(self.members[prev].clone());
            }
            self.selected = Some(idx);
        } else if self.selected == Some(idx) {
            if self.allow_empty {
                self.selected = None;
            } else {
                update.recheck = Some(key.clone());
            }
        }
        update
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.members.iter().position(|member| member == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> RadioGroup<u32> {
        let mut group = RadioGroup::new();
        for key in [1, 2, 3] {
            group.insert(key);
        }
        group
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut group = abc();
        assert!(!group.insert(2));
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn checking_another_member_unchecks_previous() {
        let mut group = abc();
        assert!(group.commit(&1, true).is_empty());
        let update = group.commit(&3, true);
        assert_eq!(update.uncheck, Some(1));
        assert_eq!(update.recheck, None);
        assert_eq!(group.selected(), Some(&3));
    }

    #[test]
    fn rechecking_selected_member_is_no_change() {
        let mut group = abc();
        group.commit(&2, true);
        assert!(group.commit(&2, true).is_empty());
    }

    #[test]
    fn unchecking_selected_member_is_refused_by_default() {
        let mut group = abc();
        group.commit(&2, true);
        let update = group.commit(&2, false);
        assert_eq!(update.recheck, Some(2));
        assert_eq!(group.selected(), Some(&2));
    }

    #[test]
    fn unchecking_selected_member_clears_when_allowed() {
        let mut group = abc().allow_empty(true);
        group.commit(&2, true);
        assert!(group.commit(&2, false).is_empty());
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn unchecking_unselected_member_is_no_change() {
        let mut group = abc();
        group.commit(&1, true);
        assert!(group.commit(&3, false).is_empty());
        assert_eq!(group.selected(), Some(&1));
    }

    #[test]
    fn unknown_members_are_ignored() {
        let mut group = abc();
        assert!(group.commit(&9, true).is_empty());
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn remove_keeps_selection_index_consistent() {
        let mut group = abc();
        group.commit(&3, true);
        assert!(group.remove(&1));
        assert_eq!(group.selected(), Some(&3));
        assert!(group.remove(&3));
        assert_eq!(group.selected(), None);
        assert!(!group.remove(&3));
    }
}
