// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities a host display object declares to be driven as a toggle.
//!
//! The controller never probes for methods at runtime. Instead a host implements
//! [`ToggleTarget`] and answers each optional capability with `Some` or `None`:
//!
//! - [`ToggleTarget::pointer_events`]: subscription to the four [`PointerEventKind`]s.
//!   A target answering `None` here yields an inert controller.
//! - [`ToggleTarget::timeline`]: the seek-and-stop / seek-and-play primitive. Label
//!   updates are skipped while this is `None`.
//! - [`ToggleTarget::reset_hook`]: a [`ResetHook`] slot the controller decorates with
//!   pause preservation while enabled.
//!
//! Hit testing, rendering and timeline playback stay with the host.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use crate::label::Label;

/// The pointer notifications a toggle listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer entered the target.
    RollOver,
    /// Pointer left the target.
    RollOut,
    /// Pointer pressed on the target.
    MouseDown,
    /// Pointer released after a press that began on the target.
    PressUp,
}

impl PointerEventKind {
    /// All kinds, in subscription order.
    pub const ALL: [Self; 4] = [Self::RollOver, Self::RollOut, Self::MouseDown, Self::PressUp];

    /// The DOM-style event name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RollOver => "rollover",
            Self::RollOut => "rollout",
            Self::MouseDown => "mousedown",
            Self::PressUp => "pressup",
        }
    }
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not one of the four toggle events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownEventKind;

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown pointer event name")
    }
}

impl core::error::Error for UnknownEventKind {}

impl FromStr for PointerEventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or(UnknownEventKind)
    }
}

/// Identifies a controller's subscription in the host event system.
///
/// Hosts route a delivered event back to the controller that subscribed with this id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Cursor hint set on the target while a toggle is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Cursor {
    /// The hand/pointer cursor used for clickable elements.
    Pointer,
}

/// Named event subscription.
pub trait PointerEvents {
    /// Start delivering `kind` to `listener`.
    fn subscribe(&mut self, kind: PointerEventKind, listener: ListenerId);
    /// Stop delivering `kind` to `listener`.
    fn unsubscribe(&mut self, kind: PointerEventKind, listener: ListenerId);
}

/// Timeline playback controls.
pub trait Timeline {
    /// Move the playhead to `label` and stop there.
    fn seek_and_stop(&mut self, label: &Label);
    /// Move the playhead to `label` and keep playing.
    fn seek_and_play(&mut self, label: &Label);
    /// Whether playback is currently paused.
    fn is_paused(&self) -> bool;
    /// Pause or resume playback.
    fn set_paused(&mut self, paused: bool);
}

/// A separate object defining the clickable bounds of a toggle.
pub trait HitRegion {
    /// Enable or disable the region's own frame actions.
    fn set_actions_enabled(&mut self, enabled: bool);
    /// The region's timeline, if it has one.
    fn timeline(&mut self) -> Option<&mut dyn Timeline>;
}

/// A display object that can be driven by a [`ToggleButton`](crate::ToggleButton).
pub trait ToggleTarget {
    /// The object type the host accepts as a hit-test surface.
    type HitArea: HitRegion;

    /// Event subscription, if this object dispatches pointer events.
    fn pointer_events(&mut self) -> Option<&mut dyn PointerEvents>;

    /// Timeline controls, if this object is currently timeline-playable.
    fn timeline(&mut self) -> Option<&mut dyn Timeline>;

    /// Set or clear the cursor hint.
    fn set_cursor(&mut self, cursor: Option<Cursor>);

    /// Allow or forbid children from intercepting pointer events.
    fn set_mouse_children(&mut self, enabled: bool);

    /// Install `area` as this object's hit-test surface.
    fn set_hit_area(&mut self, area: Self::HitArea);

    /// The object's reset slot, if it has a reset lifecycle.
    fn reset_hook(&mut self) -> Option<&mut ResetHook> {
        None
    }
}

/// A composable reset lifecycle slot.
///
/// The host keeps the original reset behaviour here and calls [`ResetHook::run`]
/// when resetting. Decorators are layered on top without replacing the original.
pub struct ResetHook {
    reset: Box<dyn FnMut(&mut dyn Timeline)>,
    preserve_paused: bool,
}

impl fmt::Debug for ResetHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetHook")
            .field("preserve_paused", &self.preserve_paused)
            .finish_non_exhaustive()
    }
}

impl ResetHook {
    /// Wraps the host's reset behaviour.
    pub fn new(reset: impl FnMut(&mut dyn Timeline) + 'static) -> Self {
        Self {
            reset: Box::new(reset),
            preserve_paused: false,
        }
    }

    /// Runs the reset.
    ///
    /// While pause preservation is installed, the paused flag observed before the
    /// reset is written back afterwards.
    pub fn run(&mut self, timeline: &mut dyn Timeline) {
        if self.preserve_paused {
            let paused = timeline.is_paused();
            (self.reset)(&mut *timeline);
            timeline.set_paused(paused);
        } else {
            (self.reset)(timeline);
        }
    }

    /// Whether the pause-preserving decorator is installed.
    #[must_use]
    pub fn preserves_paused(&self) -> bool {
        self.preserve_paused
    }

    /// Installs the pause-preserving decorator.
    ///
    /// Returns `false` if it was already installed.
    pub fn install_preserve_paused(&mut self) -> bool {
        !core::mem::replace(&mut self.preserve_paused, true)
    }

    /// Removes the pause-preserving decorator, restoring the original reset.
    ///
    /// Returns `false` if it was not installed.
    pub fn remove_preserve_paused(&mut self) -> bool {
        core::mem::replace(&mut self.preserve_paused, false)
    }
}
