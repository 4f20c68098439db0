// ABOUTME: Interaction surface primitives shared by every request flow
// ABOUTME: Busy-control guards, user alerts and the recipe preference form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Triggering controls and the scoped busy guard
pub mod controls;

/// Recipe preference form read at generation time
pub mod form;

/// User-visible alerts
pub mod notifier;

pub use controls::{BusyGuard, Control};
pub use form::RecipeForm;
pub use notifier::{Notifier, RecordingNotifier, TracingNotifier};
