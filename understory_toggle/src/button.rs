// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle controller: pointer state in, timeline label out.
//!
//! ## Usage
//!
//! 1) Build a [`ToggleButton`] with [`ToggleButton::new`], passing the target and
//!    [`ToggleOptions`]. The controller subscribes to the four pointer events and
//!    shows the idle label of the initial value.
//! 2) When the host delivers one of the subscribed events, call
//!    [`ToggleButton::handle_event`] (or [`ToggleButton::handle_named`]).
//! 3) Drive the value from outside with [`ToggleButton::set_value`], for example to
//!    keep a [`RadioGroup`](crate::group::RadioGroup) exclusive.
//! 4) Call [`ToggleButton::set_enabled`] with `false` to detach from the target.
//!
//! ## State table
//!
//! | event       | hovered | pressed | checked  | visual shown                 |
//! |-------------|---------|---------|----------|------------------------------|
//! | `mousedown` | -       | `true`  | flipped  | down                         |
//! | `pressup`   | -       | `false` | -        | over if hovered, else out    |
//! | `rollover`  | `true`  | -       | -        | down if pressed, else over   |
//! | `rollout`   | `false` | -       | -        | over if pressed, else out    |
//!
//! A press commits the new value immediately, so the down visual is that of the
//! new checked value. Rolling out while pressed keeps the over visual.

use crate::label::{Label, ToggleLabels, Visual};
use crate::target::{Cursor, HitRegion, ListenerId, PointerEventKind, ToggleTarget};

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    struct ButtonFlags: u8 {
        const CHECKED = 1 << 0;
        const HOVERED = 1 << 1;
        const PRESSED = 1 << 2;
        const ENABLED = 1 << 3;
        /// The pause-preserving reset decorator was installed by this controller.
        const RESET_WRAPPED = 1 << 4;
        /// The target has no pointer events; the controller does nothing.
        const INERT = 1 << 5;
    }
}

/// How a resolved label is applied to the target timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlaybackMode {
    /// Seek to the label and stop.
    #[default]
    Stop,
    /// Seek to the label and keep playing.
    Play,
}

/// Construction options for a [`ToggleButton`].
///
/// `H` is the target's [`ToggleTarget::HitArea`] type.
#[derive(Clone, Debug)]
pub struct ToggleOptions<H> {
    labels: ToggleLabels,
    mode: PlaybackMode,
    listener: ListenerId,
    hit_area: Option<H>,
    hit_label: Option<Label>,
    checked: bool,
}

impl<H> Default for ToggleOptions<H> {
    fn default() -> Self {
        Self {
            labels: ToggleLabels::default(),
            mode: PlaybackMode::Stop,
            listener: ListenerId::default(),
            hit_area: None,
            hit_label: None,
            checked: false,
        }
    }
}

impl<H> ToggleOptions<H> {
    /// Default labels, seek-and-stop, unchecked, no hit area.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole label table.
    #[must_use]
    pub fn labels(mut self, labels: ToggleLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the label for one checked value and visual.
    #[must_use]
    pub fn label(mut self, checked: bool, visual: Visual, label: impl Into<Label>) -> Self {
        self.labels.set(checked, visual, label);
        self
    }

    /// Chooses between seek-and-stop and seek-and-play.
    #[must_use]
    pub fn mode(mut self, mode: PlaybackMode) -> Self {
        self.mode = mode;
        self
    }

    /// The id the controller subscribes with.
    #[must_use]
    pub fn listener(mut self, listener: ListenerId) -> Self {
        self.listener = listener;
        self
    }

    /// A separate object to install as the target's hit-test surface.
    #[must_use]
    pub fn hit_area(mut self, area: H) -> Self {
        self.hit_area = Some(area);
        self
    }

    /// The hit area frame that defines the clickable bounds.
    ///
    /// When set, the hit area's actions are disabled and it is stopped at this label
    /// before being installed.
    #[must_use]
    pub fn hit_label(mut self, label: impl Into<Label>) -> Self {
        self.hit_label = Some(label.into());
        self
    }

    /// The initial checked value.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Snapshot of a toggle's interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    /// The toggle value.
    pub checked: bool,
    /// Pointer is over the target.
    pub hovered: bool,
    /// Pointer is pressed on the target.
    pub pressed: bool,
    /// The controller is subscribed to the target's events.
    pub enabled: bool,
}

/// Binds hover/press/checked state on a target to one of six timeline labels.
///
/// The controller does not own its target. Every method that touches the target
/// takes it explicitly, and must be given the same target the controller was built
/// with.
///
/// ```
/// # use understory_toggle::target::*;
/// # use understory_toggle::label::Label;
/// # #[derive(Default)] struct Clip { shown: Option<Label> }
/// # struct NoHit;
/// # impl HitRegion for NoHit {
/// #     fn set_actions_enabled(&mut self, _: bool) {}
/// #     fn timeline(&mut self) -> Option<&mut dyn Timeline> { None }
/// # }
/// # impl PointerEvents for Clip {
/// #     fn subscribe(&mut self, _: PointerEventKind, _: ListenerId) {}
/// #     fn unsubscribe(&mut self, _: PointerEventKind, _: ListenerId) {}
/// # }
/// # impl Timeline for Clip {
/// #     fn seek_and_stop(&mut self, label: &Label) { self.shown = Some(label.clone()); }
/// #     fn seek_and_play(&mut self, label: &Label) { self.shown = Some(label.clone()); }
/// #     fn is_paused(&self) -> bool { true }
/// #     fn set_paused(&mut self, _: bool) {}
/// # }
/// # impl ToggleTarget for Clip {
/// #     type HitArea = NoHit;
/// #     fn pointer_events(&mut self) -> Option<&mut dyn PointerEvents> { Some(self) }
/// #     fn timeline(&mut self) -> Option<&mut dyn Timeline> { Some(self) }
/// #     fn set_cursor(&mut self, _: Option<Cursor>) {}
/// #     fn set_mouse_children(&mut self, _: bool) {}
/// #     fn set_hit_area(&mut self, _: NoHit) {}
/// # }
/// use understory_toggle::{ToggleButton, ToggleOptions};
///
/// let mut clip = Clip::default();
/// let mut toggle = ToggleButton::new(&mut clip, ToggleOptions::new());
/// assert_eq!(clip.shown, Some(Label::from("outFalse")));
///
/// toggle.handle_event(&mut clip, Some(PointerEventKind::MouseDown));
/// assert!(toggle.value());
/// assert_eq!(clip.shown, Some(Label::from("downTrue")));
///
/// toggle.handle_event(&mut clip, Some(PointerEventKind::PressUp));
/// assert_eq!(clip.shown, Some(Label::from("outTrue")));
/// ```
///
/// A controller is not `Clone`: its [`ListenerId`] and the reset decorator it
/// installed belong to exactly one subscription on the target.
///
/// ```compile_fail
/// fn assert_clone<T: Clone>() {}
/// assert_clone::<understory_toggle::ToggleButton>();
/// ```
#[derive(Debug)]
pub struct ToggleButton {
    labels: ToggleLabels,
    mode: PlaybackMode,
    listener: ListenerId,
    flags: ButtonFlags,
    visual: Visual,
}

impl ToggleButton {
    /// Binds a controller to `target`.
    ///
    /// Marks the target's children non-interactive, installs the hit area if one was
    /// given, enables the controller and shows the idle label of the initial value.
    ///
    /// If the target has no pointer events the controller is inert: it never touches
    /// the target and ignores all events.
    pub fn new<T: ToggleTarget>(target: &mut T, options: ToggleOptions<T::HitArea>) -> Self {
        let ToggleOptions {
            labels,
            mode,
            listener,
            hit_area,
            hit_label,
            checked,
        } = options;

        let mut flags = ButtonFlags::empty();
        flags.set(ButtonFlags::CHECKED, checked);
        let mut button = Self {
            labels,
            mode,
            listener,
            flags,
            visual: Visual::Out,
        };

        if target.pointer_events().is_none() {
            log::debug!("toggle {listener:?}: target has no pointer events, controller is inert");
            button.flags.insert(ButtonFlags::INERT);
            return button;
        }

        target.set_mouse_children(false);

        if let Some(mut area) = hit_area {
            if let Some(label) = hit_label {
                area.set_actions_enabled(false);
                if let Some(timeline) = area.timeline() {
                    timeline.seek_and_stop(&label);
                }
            }
            target.set_hit_area(area);
        }

        button.set_enabled(target, true);
        button.handle_event(target, None);
        button
    }

    /// Whether the controller was built for a target without pointer events.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.flags.contains(ButtonFlags::INERT)
    }

    /// Whether the controller is subscribed to the target's events.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ButtonFlags::ENABLED)
    }

    /// Subscribes to or unsubscribes from the target.
    ///
    /// Enabling sets the pointer cursor, subscribes the four [`PointerEventKind`]s and
    /// installs pause preservation on the target's [`ResetHook`](crate::target::ResetHook).
    /// Disabling undoes exactly that. Setting the current value again does nothing.
    pub fn set_enabled<T: ToggleTarget + ?Sized>(&mut self, target: &mut T, enabled: bool) {
        if self.is_inert() || self.is_enabled() == enabled {
            return;
        }
        let Some(events) = target.pointer_events() else {
            log::debug!("toggle {:?}: target lost its pointer events", self.listener);
            return;
        };

        if enabled {
            for kind in PointerEventKind::ALL {
                events.subscribe(kind, self.listener);
            }
            target.set_cursor(Some(Cursor::Pointer));
            if let Some(hook) = target.reset_hook()
                && hook.install_preserve_paused()
            {
                self.flags.insert(ButtonFlags::RESET_WRAPPED);
            }
        } else {
            for kind in PointerEventKind::ALL {
                events.unsubscribe(kind, self.listener);
            }
            target.set_cursor(None);
            if self.flags.contains(ButtonFlags::RESET_WRAPPED) {
                if let Some(hook) = target.reset_hook() {
                    hook.remove_preserve_paused();
                }
                self.flags.remove(ButtonFlags::RESET_WRAPPED);
            }
        }

        self.flags.set(ButtonFlags::ENABLED, enabled);
        log::debug!("toggle {:?}: enabled = {enabled}", self.listener);
    }

    /// Processes a delivered pointer event and shows the resulting label.
    ///
    /// `None` is the synthetic evaluation used at construction and takes the
    /// `rollout` branch. Events are ignored while disabled or inert; otherwise the
    /// shown label is returned.
    pub fn handle_event<T: ToggleTarget + ?Sized>(
        &mut self,
        target: &mut T,
        event: Option<PointerEventKind>,
    ) -> Option<&Label> {
        if self.is_inert() || !self.is_enabled() {
            log::trace!("toggle {:?}: ignoring {event:?}", self.listener);
            return None;
        }

        let pressed = self.flags.contains(ButtonFlags::PRESSED);
        let hovered = self.flags.contains(ButtonFlags::HOVERED);
        let visual = match event {
            Some(PointerEventKind::MouseDown) => {
                self.flags.insert(ButtonFlags::PRESSED);
                self.flags.toggle(ButtonFlags::CHECKED);
                Visual::Down
            }
            Some(PointerEventKind::PressUp) => {
                self.flags.remove(ButtonFlags::PRESSED);
                if hovered { Visual::Over } else { Visual::Out }
            }
            Some(PointerEventKind::RollOver) => {
                self.flags.insert(ButtonFlags::HOVERED);
                if pressed { Visual::Down } else { Visual::Over }
            }
            Some(PointerEventKind::RollOut) | None => {
                self.flags.remove(ButtonFlags::HOVERED);
                if pressed { Visual::Over } else { Visual::Out }
            }
        };

        Some(self.show(target, visual))
    }

    /// Like [`handle_event`](Self::handle_event), taking a DOM-style event name.
    ///
    /// Unrecognized names take the `rollout` branch.
    pub fn handle_named<T: ToggleTarget + ?Sized>(
        &mut self,
        target: &mut T,
        name: &str,
    ) -> Option<&Label> {
        self.handle_event(target, name.parse().ok())
    }

    /// The toggle value.
    #[must_use]
    pub fn value(&self) -> bool {
        self.flags.contains(ButtonFlags::CHECKED)
    }

    /// Writes the toggle value and refreshes the shown label.
    ///
    /// Hover and press state are kept, and subscriptions are not touched, so this
    /// does not look like a user press.
    pub fn set_value<T: ToggleTarget + ?Sized>(&mut self, target: &mut T, checked: bool) {
        self.flags.set(ButtonFlags::CHECKED, checked);
        if self.is_inert() {
            return;
        }
        let visual = Visual::from_pointer(
            self.flags.contains(ButtonFlags::HOVERED),
            self.flags.contains(ButtonFlags::PRESSED),
        );
        self.show(target, visual);
    }

    /// Re-applies the current label to the target without changing state.
    pub fn refresh<T: ToggleTarget + ?Sized>(&mut self, target: &mut T) -> Option<&Label> {
        if self.is_inert() {
            return None;
        }
        Some(self.show(target, self.visual))
    }

    /// The visual currently shown.
    #[must_use]
    pub fn visual(&self) -> Visual {
        self.visual
    }

    /// The label currently shown.
    #[must_use]
    pub fn active_label(&self) -> &Label {
        self.labels.get(self.value(), self.visual)
    }

    /// The label table.
    #[must_use]
    pub fn labels(&self) -> &ToggleLabels {
        &self.labels
    }

    /// How labels are applied.
    #[must_use]
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// The id used for subscriptions.
    #[must_use]
    pub fn listener(&self) -> ListenerId {
        self.listener
    }

    /// Snapshot of the interaction state.
    #[must_use]
    pub fn state(&self) -> ToggleState {
        ToggleState {
            checked: self.value(),
            hovered: self.flags.contains(ButtonFlags::HOVERED),
            pressed: self.flags.contains(ButtonFlags::PRESSED),
            enabled: self.is_enabled(),
        }
    }

    fn show<T: ToggleTarget + ?Sized>(&mut self, target: &mut T, visual: Visual) -> &Label {
        self.visual = visual;
        let label = self.labels.get(self.value(), visual);
        log::trace!("toggle {:?}: showing {label}", self.listener);
        match target.timeline() {
            Some(timeline) => match self.mode {
                PlaybackMode::Stop => timeline.seek_and_stop(label),
                PlaybackMode::Play => timeline.seek_and_play(label),
            },
            None => log::trace!("toggle {:?}: target not playable, skipped {label}", self.listener),
        }
        label
    }
}
