// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline labels and the six-slot label table of a toggle.
//!
//! A toggle shows one of three visuals ([`Visual::Out`], [`Visual::Over`],
//! [`Visual::Down`]) for each checked value, so [`ToggleLabels`] holds six
//! [`Label`]s. Omitted slots fall back to the fixed names `outFalse`,
//! `overFalse`, `downFalse`, `outTrue`, `overTrue` and `downTrue`.
//!
//! ```
//! use understory_toggle::label::{Label, ToggleLabels, Visual};
//!
//! let labels = ToggleLabels::from_slots([
//!     None,
//!     Some(Label::from("")),
//!     None,
//!     None,
//!     None,
//!     Some(Label::Frame(0)),
//! ]);
//!
//! assert_eq!(labels.get(false, Visual::Out), &Label::from("outFalse"));
//! // Present-but-empty labels are real labels.
//! assert_eq!(labels.get(false, Visual::Over), &Label::from(""));
//! assert_eq!(labels.get(true, Visual::Down), &Label::Frame(0));
//! ```

use alloc::string::String;
use core::fmt;

/// A position in a target's timeline: either a named label or a frame index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// A named timeline label.
    Name(String),
    /// A zero-based frame index.
    Frame(u32),
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::Name(name.into())
    }
}

impl From<String> for Label {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u32> for Label {
    fn from(frame: u32) -> Self {
        Self::Frame(frame)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Frame(frame) => write!(f, "#{frame}"),
        }
    }
}

/// Which of the three interaction visuals is shown.
///
/// Priority when deriving from pointer state is `Down` > `Over` > `Out`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visual {
    /// Idle: neither hovered nor pressed.
    #[default]
    Out,
    /// Pointer is over the toggle.
    Over,
    /// Pointer is pressed on the toggle.
    Down,
}

impl Visual {
    /// Derives the visual from pointer state, pressed first, then hovered.
    #[must_use]
    pub const fn from_pointer(hovered: bool, pressed: bool) -> Self {
        if pressed {
            Self::Down
        } else if hovered {
            Self::Over
        } else {
            Self::Out
        }
    }

    const fn slot(self, checked: bool) -> usize {
        let base = if checked { 3 } else { 0 };
        base + match self {
            Self::Out => 0,
            Self::Over => 1,
            Self::Down => 2,
        }
    }
}

const DEFAULT_NAMES: [&str; 6] = [
    "outFalse",
    "overFalse",
    "downFalse",
    "outTrue",
    "overTrue",
    "downTrue",
];

/// The six labels of a toggle, indexed by checked value and [`Visual`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleLabels {
    slots: [Label; 6],
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self::from_slots([None, None, None, None, None, None])
    }
}

impl ToggleLabels {
    /// Builds a table from optional slots ordered
    /// `[outFalse, overFalse, downFalse, outTrue, overTrue, downTrue]`.
    ///
    /// Only `None` selects the default name; empty names and frame `0` are kept.
    #[must_use]
    pub fn from_slots(mut slots: [Option<Label>; 6]) -> Self {
        let slots = core::array::from_fn(|idx| {
            slots[idx]
                .take()
                .unwrap_or_else(|| Label::from(DEFAULT_NAMES[idx]))
        });
        Self { slots }
    }

    /// Returns the label shown for `checked` and `visual`.
    #[must_use]
    pub fn get(&self, checked: bool, visual: Visual) -> &Label {
        &self.slots[visual.slot(checked)]
    }

    /// Replaces the label shown for `checked` and `visual`.
    pub fn set(&mut self, checked: bool, visual: Visual, label: impl Into<Label>) {
        self.slots[visual.slot(checked)] = label.into();
    }

    /// Iterates all six labels in slot order.
    pub fn iter(&self) -> core::slice::Iter<'_, Label> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn defaults_use_fixed_names() {
        let labels = ToggleLabels::default();
        let names: Vec<_> = labels.iter().cloned().collect();
        let expected: Vec<_> = DEFAULT_NAMES.iter().map(|n| Label::from(*n)).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn empty_name_and_frame_zero_are_preserved() {
        let labels = ToggleLabels::from_slots([
            Some(Label::from("")),
            None,
            None,
            Some(Label::Frame(0)),
            None,
            None,
        ]);
        assert_eq!(labels.get(false, Visual::Out), &Label::from(""));
        assert_eq!(labels.get(true, Visual::Out), &Label::Frame(0));
        assert_eq!(labels.get(true, Visual::Over), &Label::from("overTrue"));
    }

    #[test]
    fn each_missing_slot_gets_its_own_default() {
        let labels = ToggleLabels::from_slots([
            None,
            Some(Label::from("hover")),
            None,
            Some(Label::Frame(3)),
            None,
            None,
        ]);
        let names: Vec<_> = labels.iter().cloned().collect();
        assert_eq!(
            names,
            [
                Label::from("outFalse"),
                Label::from("hover"),
                Label::from("downFalse"),
                Label::Frame(3),
                Label::from("overTrue"),
                Label::from("downTrue"),
            ]
        );
    }

    #[test]
    fn set_replaces_single_slot() {
        let mut labels = ToggleLabels::default();
        labels.set(true, Visual::Down, 12_u32);
        assert_eq!(labels.get(true, Visual::Down), &Label::Frame(12));
        assert_eq!(labels.get(false, Visual::Down), &Label::from("downFalse"));
    }

    #[test]
    fn visual_priority_is_pressed_then_hovered() {
        assert_eq!(Visual::from_pointer(false, false), Visual::Out);
        assert_eq!(Visual::from_pointer(true, false), Visual::Over);
        assert_eq!(Visual::from_pointer(false, true), Visual::Down);
        assert_eq!(Visual::from_pointer(true, true), Visual::Down);
    }

    #[test]
    fn display_formats_names_and_frames() {
        assert_eq!(alloc::format!("{}", Label::from("overTrue")), "overTrue");
        assert_eq!(alloc::format!("{}", Label::Frame(7)), "#7");
    }
}
