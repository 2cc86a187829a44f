//! Drag-resize state machine
//!
//! One controller per editor instance manages at most one in-flight
//! column/row resize. Every exit path (pointer-up, mouse leaving the
//! document, window blur, Escape, watchdog timeout) funnels through a
//! single teardown that detaches the gesture's listener set, removes
//! the guide line, and clears the watchdog exactly once.

use crate::models::{Axis, TableId};

/// Minimum committed column width in pixels
pub const CELL_MIN_WIDTH: f32 = 40.0;
/// Minimum committed row height in pixels
pub const CELL_MIN_HEIGHT: f32 = 30.0;
/// Last-resort teardown timer for a stuck drag
pub const RESIZE_WATCHDOG_MS: u32 = 10_000;
/// Interval of the background sweep for orphaned guide elements
pub const ORPHAN_SWEEP_INTERVAL_MS: u32 = 2_000;

/// Opaque handle for a registered listener bundle
pub type ListenerSet = u32;
/// Opaque handle for a guide line element; zero means none was created
pub type GuideHandle = u32;
/// Opaque handle for an armed watchdog timer; zero means none was armed
pub type TimerHandle = u32;

/// Side-effect boundary for resize gestures
///
/// The `wasm32` implementation drives real DOM listeners, a floating
/// guide `<div>`, and `setTimeout`; tests use a counting fake to assert
/// exact resource balance.
pub trait GestureHost {
    /// Live size of the target column/row at drag start, in pixels
    fn read_start_size(&self, table: TableId, axis: Axis, index: usize) -> f32;

    /// Show the guide line at a viewport coordinate
    fn show_guide(&mut self, table: TableId, axis: Axis, coord: f32) -> GuideHandle;

    /// Move the guide line to a new coordinate
    fn move_guide(&mut self, guide: GuideHandle, coord: f32);

    /// Remove the guide line
    fn remove_guide(&mut self, guide: GuideHandle);

    /// Attach the document/window listener bundle for one gesture
    fn attach_drag_listeners(&mut self) -> ListenerSet;

    /// Detach a previously attached listener bundle
    fn detach_drag_listeners(&mut self, set: ListenerSet);

    /// Arm the teardown watchdog, returning the zero sentinel when no
    /// timer could be armed
    fn arm_watchdog(&mut self, ms: u32) -> TimerHandle;

    /// Clear an armed watchdog. The zero sentinel must be ignored.
    fn clear_watchdog(&mut self, timer: TimerHandle);

    /// Remove guide elements not owned by the active session, returning
    /// how many were found
    fn sweep_orphan_guides(&mut self) -> usize;
}

/// Why a resize session ended without committing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    PointerLost,
    WindowBlur,
    Escape,
    Watchdog,
    Superseded,
    StructureChanged,
}

impl CancelReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancelReason::PointerLost => "pointer-lost",
            CancelReason::WindowBlur => "window-blur",
            CancelReason::Escape => "escape",
            CancelReason::Watchdog => "watchdog",
            CancelReason::Superseded => "superseded",
            CancelReason::StructureChanged => "structure-changed",
        }
    }
}

/// One in-flight drag-resize
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeSession {
    pub table: TableId,
    pub axis: Axis,
    pub index: usize,
    pub start_coord: f32,
    pub start_size: f32,
    /// Pointer delta, already clamped against the axis minimum
    pub delta: f32,
    guide: GuideHandle,
    listeners: ListenerSet,
    watchdog: TimerHandle,
}

/// Size commit produced by a clean pointer-up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeCommit {
    pub table: TableId,
    pub axis: Axis,
    pub index: usize,
    pub size: f32,
}

/// Idle/Dragging state machine owning the session resources
#[derive(Debug, Default)]
pub struct ResizeController {
    session: Option<ResizeSession>,
    min_width: f32,
    min_height: f32,
    watchdog_ms: u32,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::with_limits(CELL_MIN_WIDTH, CELL_MIN_HEIGHT, RESIZE_WATCHDOG_MS)
    }

    pub fn with_limits(min_width: f32, min_height: f32, watchdog_ms: u32) -> Self {
        Self {
            session: None,
            min_width,
            min_height,
            watchdog_ms,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Axis of the active session, if any
    pub fn session_axis(&self) -> Option<Axis> {
        self.session.as_ref().map(|s| s.axis)
    }

    /// Enter Dragging; a still-active session is cancelled first
    /// (last-writer-wins, not an error).
    pub fn begin(
        &mut self,
        host: &mut dyn GestureHost,
        table: TableId,
        axis: Axis,
        index: usize,
        coord: f32,
    ) {
        if self.session.is_some() {
            self.cancel(host, CancelReason::Superseded);
        }
        let start_size = host.read_start_size(table, axis, index);
        let guide = host.show_guide(table, axis, coord);
        let listeners = host.attach_drag_listeners();
        let watchdog = host.arm_watchdog(self.watchdog_ms);
        log::debug!(
            "resize begin: table {} {} {} start_size={}",
            table,
            axis.as_str(),
            index,
            start_size
        );
        self.session = Some(ResizeSession {
            table,
            axis,
            index,
            start_coord: coord,
            start_size,
            delta: 0.0,
            guide,
            listeners,
            watchdog,
        });
    }

    /// Recompute the clamped delta from the start state and move the
    /// guide. No-op when Idle; no structural commit happens here.
    pub fn update(&mut self, host: &mut dyn GestureHost, coord: f32) {
        let minimum = match self.session_axis() {
            Some(Axis::Column) => self.min_width,
            Some(Axis::Row) => self.min_height,
            None => return,
        };
        if let Some(session) = self.session.as_mut() {
            let raw = coord - session.start_coord;
            // Clamp so start_size + delta lands exactly on the minimum
            session.delta = if session.start_size + raw < minimum {
                minimum - session.start_size
            } else {
                raw
            };
            host.move_guide(session.guide, session.start_coord + session.delta);
        }
    }

    /// Exit Dragging on clean pointer-up, yielding the committed size
    pub fn commit(&mut self, host: &mut dyn GestureHost) -> Option<ResizeCommit> {
        let session = self.teardown(host)?;
        let commit = ResizeCommit {
            table: session.table,
            axis: session.axis,
            index: session.index,
            size: session.start_size + session.delta,
        };
        log::debug!(
            "resize commit: table {} {} {} -> {}px",
            commit.table,
            commit.axis.as_str(),
            commit.index,
            commit.size
        );
        Some(commit)
    }

    /// Exit Dragging without committing the pending delta
    pub fn cancel(&mut self, host: &mut dyn GestureHost, reason: CancelReason) -> bool {
        match self.teardown(host) {
            Some(session) => {
                log::debug!(
                    "resize cancelled ({}): table {} {} {}",
                    reason.as_str(),
                    session.table,
                    session.axis.as_str(),
                    session.index
                );
                true
            }
            None => false,
        }
    }

    /// Cancel the active session if it targets the given table
    ///
    /// Structural mutations call this before touching the grid.
    pub fn cancel_if_table(&mut self, host: &mut dyn GestureHost, table: TableId) -> bool {
        if self.session.as_ref().map(|s| s.table) == Some(table) {
            self.cancel(host, CancelReason::StructureChanged)
        } else {
            false
        }
    }

    /// Run the periodic orphan sweep, logging anything remediated
    pub fn sweep(&mut self, host: &mut dyn GestureHost) -> usize {
        let orphans = host.sweep_orphan_guides();
        if orphans > 0 {
            log::warn!("orphan sweep removed {} stale resize guide(s)", orphans);
        }
        orphans
    }

    /// Release session resources exactly once regardless of exit path
    fn teardown(&mut self, host: &mut dyn GestureHost) -> Option<ResizeSession> {
        let session = self.session.take()?;
        host.detach_drag_listeners(session.listeners);
        host.remove_guide(session.guide);
        host.clear_watchdog(session.watchdog);
        Some(session)
    }
}
