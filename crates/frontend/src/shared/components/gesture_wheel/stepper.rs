//! Pure gesture arithmetic behind the wheel picker: debounce policy, drag
//! accumulator and the disabled-skip step resolver. No DOM types here, the
//! component is a thin shell over these.

use std::collections::HashSet;

/// Tuning knobs for one wheel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelTuning {
    /// Height of one rendered row, px
    pub item_height_px: i32,
    /// Offset of the focal row from the top of the viewport, px
    pub focal_offset_px: i32,
    /// Minimum pause between accepted pointer-wheel events, ms
    pub wheel_cooldown_ms: f64,
    /// Vertical drag distance that produces one step, px
    pub touch_step_px: f64,
}

impl Default for WheelTuning {
    fn default() -> Self {
        Self {
            item_height_px: 60,
            focal_offset_px: 120,
            wheel_cooldown_ms: 70.0,
            touch_step_px: 26.0,
        }
    }
}

/// Time-debounce for continuous pointer-wheel input.
///
/// One physical scroll gesture fires a burst of events; only events separated
/// from the last accepted one by at least the cooldown become steps.
#[derive(Debug, Clone, Copy)]
pub struct WheelDebounce {
    cooldown_ms: f64,
    last_accepted_ms: f64,
}

impl WheelDebounce {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            // seeded so the first event of a session always passes
            last_accepted_ms: f64::NEG_INFINITY,
        }
    }

    /// Accept or drop an event arriving at `now_ms` (monotonic clock).
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_accepted_ms < self.cooldown_ms {
            return false;
        }
        self.last_accepted_ms = now_ms;
        true
    }
}

/// Converts a continuous touch drag into evenly spaced discrete steps.
///
/// After every emitted step the anchor moves to the current touch position
/// (not back to zero), so a long drag keeps stepping at `step_px` intervals.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    anchor_y: Option<f64>,
}

impl DragTracker {
    pub fn start(&mut self, y: f64) {
        self.anchor_y = Some(y);
    }

    /// Direction of one step (`+1` forward, `-1` back) once the distance from
    /// the anchor crosses `step_px`. Dragging up moves the selection forward.
    pub fn track(&mut self, y: f64, step_px: f64) -> Option<i32> {
        let anchor = self.anchor_y?;
        let dy = y - anchor;
        if dy.abs() <= step_px {
            return None;
        }
        self.anchor_y = Some(y);
        Some(if dy < 0.0 { 1 } else { -1 })
    }

    pub fn end(&mut self) {
        self.anchor_y = None;
    }
}

fn clamp_index(index: i64, len: usize) -> usize {
    index.clamp(0, len as i64 - 1) as usize
}

/// Resolve one step from `active` in `direction` against the disabled set.
///
/// The candidate is clamped into `[0, len-1]`, then walked index by index in
/// the step direction past disabled entries. The walk stops at the range
/// boundary and is additionally hard-bounded at `len` iterations, so a
/// disabled set covering the whole wheel terminates with a suppressed step.
/// Returns `None` whenever no change should fire (including a resolved
/// candidate equal to `active`).
pub fn resolve_step(
    active: usize,
    direction: i32,
    len: usize,
    disabled: &HashSet<usize>,
) -> Option<usize> {
    if len == 0 || direction == 0 {
        return None;
    }
    let step = direction.signum() as i64;
    let mut candidate = clamp_index(active as i64 + step, len);
    let mut walked = 0usize;
    while disabled.contains(&candidate) {
        walked += 1;
        if walked >= len {
            return None;
        }
        let next = clamp_index(candidate as i64 + step, len);
        if next == candidate {
            // boundary reached and still disabled
            return None;
        }
        candidate = next;
    }
    (candidate != active).then_some(candidate)
}

/// Direct selection (click on a row): bypasses debouncing, still refuses
/// disabled rows and no-op changes.
pub fn resolve_click(target: usize, active: usize, disabled: &HashSet<usize>) -> Option<usize> {
    (!disabled.contains(&target) && target != active).then_some(target)
}
