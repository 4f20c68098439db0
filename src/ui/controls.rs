// ABOUTME: Triggering controls with enabled/busy state and a scoped busy guard
// ABOUTME: The guard restores the idle label and re-enables the control on every exit path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::trace;

/// A button or indicator that a request flow disables while in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    name: &'static str,
    idle_label: String,
    busy_label: String,
    label: String,
    enabled: bool,
    visible: bool,
}

impl Control {
    /// Enabled, visible control showing its idle label
    pub fn new(name: &'static str, idle_label: &str, busy_label: &str) -> Self {
        Self {
            name,
            idle_label: idle_label.to_owned(),
            busy_label: busy_label.to_owned(),
            label: idle_label.to_owned(),
            enabled: true,
            visible: true,
        }
    }

    /// Indicator that is only shown while a request runs
    pub fn indicator(name: &'static str, label: &str) -> Self {
        Self {
            visible: false,
            ..Self::new(name, label, label)
        }
    }

    /// Start hidden until explicitly shown
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Identifier used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Current label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the control accepts input
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the control is shown
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a request owns this control right now
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.enabled && self.label == self.busy_label
    }

    /// Show or hide the control
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Holds a control busy for the lifetime of an in-flight request
///
/// Dropping the guard restores the previous label, enabled flag and
/// visibility, so an early `?` return or a panic inside the flow still
/// releases the control.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    control: &'a mut Control,
    was_visible: bool,
}

impl<'a> BusyGuard<'a> {
    /// Disable the control and show its busy label
    pub fn acquire(control: &'a mut Control) -> Self {
        trace!(control = control.name, "busy");
        let was_visible = control.visible;
        control.enabled = false;
        control.visible = true;
        control.label.clone_from(&control.busy_label);
        Self {
            control,
            was_visible,
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        trace!(control = self.control.name, "idle");
        self.control.enabled = true;
        self.control.visible = self.was_visible;
        self.control.label.clone_from(&self.control.idle_label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut button = Control::new("scan", "Scan", "Scanning...");
        {
            let _guard = BusyGuard::acquire(&mut button);
        }
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Scan");
        assert!(!button.is_busy());
    }

    #[test]
    fn test_indicator_visible_only_while_busy() {
        let mut loader = Control::indicator("loader", "Loading");
        assert!(!loader.is_visible());
        {
            let guard = BusyGuard::acquire(&mut loader);
            assert!(guard.control.is_visible());
            assert!(guard.control.is_busy());
        }
        assert!(!loader.is_visible());
    }

    #[test]
    fn test_guard_restores_after_early_return() {
        fn flow(control: &mut Control) -> Result<(), &'static str> {
            let _guard = BusyGuard::acquire(control);
            Err::<(), _>("network down")?;
            Ok(())
        }

        let mut button = Control::new("generate", "Generate", "Thinking...");
        assert!(flow(&mut button).is_err());
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Generate");
    }
}
