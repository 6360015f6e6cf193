// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_toggle --heading-base-level=0

//! Understory Toggle: drive a timeline-authored asset as a checkbox or radio button.
//!
//! A designer-authored asset carries six labelled states on its timeline: idle,
//! hover and pressed, each for the unchecked and checked value. [`ToggleButton`]
//! listens to four pointer events on the asset, tracks `checked`, `hovered` and
//! `pressed`, and seeks the timeline to the matching label after every transition.
//!
//! The crate does not hit test, render or play timelines. A host display object
//! opts in by implementing [`target::ToggleTarget`], which declares each capability
//! the controller may use (event subscription, timeline seeking, cursor hints, hit
//! areas and a reset hook) as an explicit `Option`.
//!
//! ## Modules
//!
//! - [`label`]: [`Label`] values and the six-slot [`ToggleLabels`] table
//! - [`target`]: capability traits a host object implements
//! - [`button`]: the [`ToggleButton`] controller and its [`ToggleOptions`]
//! - [`group`]: [`group::RadioGroup`] exclusivity across several toggles
//!
//! ## Event flow
//!
//! The host owns event dispatch. [`ToggleButton::set_enabled`] subscribes the
//! controller's [`target::ListenerId`] for each [`target::PointerEventKind`]; the host
//! routes deliveries for that id back to [`ToggleButton::handle_event`]:
//!
//! | sequence from unchecked | label shown |
//! |-------------------------|-------------|
//! | (construction)          | `outFalse`  |
//! | `rollover`              | `overFalse` |
//! | `mousedown`             | `downTrue`  |
//! | `rollout`               | `overTrue`  |
//! | `pressup`               | `outTrue`   |
//!
//! A press commits the new value at once. Rolling out while pressed shows the
//! over label of the current value.
//!
//! ## Radio groups
//!
//! ```rust
//! use understory_toggle::group::RadioGroup;
//!
//! let mut sizes = RadioGroup::new();
//! sizes.insert(0_u32);
//! sizes.insert(1_u32);
//!
//! sizes.commit(&0, true);
//! let update = sizes.commit(&1, true);
//!
//! // The caller now calls `set_value(false)` on toggle 0.
//! assert_eq!(update.uncheck, Some(0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Degraded paths (missing capabilities)
//! are reported through the [`log`] facade.

#![no_std]

extern crate alloc;

pub mod button;
pub mod group;
pub mod label;
pub mod target;

pub use button::{PlaybackMode, ToggleButton, ToggleOptions, ToggleState};
pub use label::{Label, ToggleLabels, Visual};
