//! Browser-side gesture host
//!
//! Implements `GestureHost` on top of real DOM APIs: the resize guide
//! is an absolutely positioned `<div>`, drag listeners go on the
//! document and window, and the watchdog is a `setTimeout`. The owning
//! editor keeps the backing `Closure`s alive; this host only holds
//! cheap `Function` clones.

use std::collections::HashMap;

use js_sys::Function;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::models::{Axis, TableId, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT};
use crate::table::resize::{GestureHost, GuideHandle, ListenerSet, TimerHandle};
use crate::wasm_warn;

/// Drag-phase callbacks, one per DOM event the gesture listens to
pub struct DragCallbacks {
    pub mouse_move: Function,
    pub mouse_up: Function,
    pub mouse_leave: Function,
    pub window_blur: Function,
    pub key_down: Function,
}

pub struct DomGestureHost {
    window: Window,
    document: Document,
    prefix: String,
    guides: HashMap<GuideHandle, (Element, Axis)>,
    next_guide: GuideHandle,
    active_guide: Option<GuideHandle>,
    next_listener_set: ListenerSet,
    drag_callbacks: Option<DragCallbacks>,
    watchdog_callback: Option<Function>,
}

impl DomGestureHost {
    pub fn new(prefix: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        Ok(Self {
            window,
            document,
            prefix: prefix.to_string(),
            guides: HashMap::new(),
            next_guide: 1,
            active_guide: None,
            next_listener_set: 1,
            drag_callbacks: None,
            watchdog_callback: None,
        })
    }

    pub fn set_drag_callbacks(&mut self, callbacks: DragCallbacks) {
        self.drag_callbacks = Some(callbacks);
    }

    pub fn set_watchdog_callback(&mut self, callback: Function) {
        self.watchdog_callback = Some(callback);
    }

    fn guide_class(&self) -> String {
        format!("{}-resize-guide", self.prefix)
    }

    fn guide_style(axis: Axis, coord: f32) -> String {
        match axis {
            Axis::Column => format!(
                "position:fixed;left:{}px;top:0;width:2px;height:100vh;pointer-events:none;z-index:1000;",
                coord
            ),
            Axis::Row => format!(
                "position:fixed;top:{}px;left:0;height:2px;width:100vw;pointer-events:none;z-index:1000;",
                coord
            ),
        }
    }

    /// First unmerged cell anchored on the given track
    fn track_cell(&self, table: TableId, axis: Axis, index: usize) -> Option<Element> {
        let selector = match axis {
            Axis::Column => format!(
                ".{}-cell[data-table-id=\"{}\"][data-col=\"{}\"][data-col-span=\"1\"]",
                self.prefix, table.0, index
            ),
            Axis::Row => format!(
                ".{}-cell[data-table-id=\"{}\"][data-row=\"{}\"][data-row-span=\"1\"]",
                self.prefix, table.0, index
            ),
        };
        self.document.query_selector(&selector).ok().flatten()
    }
}

impl GestureHost for DomGestureHost {
    fn read_start_size(&self, table: TableId, axis: Axis, index: usize) -> f32 {
        match self.track_cell(table, axis, index) {
            Some(cell) => {
                let rect = cell.get_bounding_client_rect();
                match axis {
                    Axis::Column => rect.width() as f32,
                    Axis::Row => rect.height() as f32,
                }
            }
            // Every cell on the track is merged across it; fall back
            // to the bookkeeping default.
            None => match axis {
                Axis::Column => DEFAULT_COL_WIDTH,
                Axis::Row => DEFAULT_ROW_HEIGHT,
            },
        }
    }

    fn show_guide(&mut self, table: TableId, axis: Axis, coord: f32) -> GuideHandle {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(_) => {
                wasm_warn!("could not create resize guide element");
                return 0;
            }
        };
        el.set_class_name(&self.guide_class());
        let _ = el.set_attribute("style", &Self::guide_style(axis, coord));
        let _ = el.set_attribute("data-table-id", &table.0.to_string());
        if let Some(body) = self.document.body() {
            let _ = body.append_child(&el);
        }

        let handle = self.next_guide;
        self.next_guide += 1;
        self.guides.insert(handle, (el, axis));
        self.active_guide = Some(handle);
        handle
    }

    fn move_guide(&mut self, guide: GuideHandle, coord: f32) {
        if let Some((el, axis)) = self.guides.get(&guide) {
            let _ = el.set_attribute("style", &Self::guide_style(*axis, coord));
        }
    }

    fn remove_guide(&mut self, guide: GuideHandle) {
        if let Some((el, _)) = self.guides.remove(&guide) {
            el.remove();
        }
        if self.active_guide == Some(guide) {
            self.active_guide = None;
        }
    }

    fn attach_drag_listeners(&mut self) -> ListenerSet {
        match &self.drag_callbacks {
            Some(callbacks) => {
                let _ = self
                    .document
                    .add_event_listener_with_callback("mousemove", &callbacks.mouse_move);
                let _ = self
                    .document
                    .add_event_listener_with_callback("mouseup", &callbacks.mouse_up);
                let _ = self
                    .document
                    .add_event_listener_with_callback("mouseleave", &callbacks.mouse_leave);
                let _ = self
                    .document
                    .add_event_listener_with_callback("keydown", &callbacks.key_down);
                let _ = self
                    .window
                    .add_event_listener_with_callback("blur", &callbacks.window_blur);
            }
            None => wasm_warn!("drag listeners requested before callbacks were set"),
        }
        let set = self.next_listener_set;
        self.next_listener_set += 1;
        set
    }

    fn detach_drag_listeners(&mut self, _set: ListenerSet) {
        if let Some(callbacks) = &self.drag_callbacks {
            let _ = self
                .document
                .remove_event_listener_with_callback("mousemove", &callbacks.mouse_move);
            let _ = self
                .document
                .remove_event_listener_with_callback("mouseup", &callbacks.mouse_up);
            let _ = self
                .document
                .remove_event_listener_with_callback("mouseleave", &callbacks.mouse_leave);
            let _ = self
                .document
                .remove_event_listener_with_callback("keydown", &callbacks.key_down);
            let _ = self
                .window
                .remove_event_listener_with_callback("blur", &callbacks.window_blur);
        }
    }

    fn arm_watchdog(&mut self, ms: u32) -> TimerHandle {
        match &self.watchdog_callback {
            Some(callback) => match self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback, ms as i32)
            {
                Ok(handle) => handle as TimerHandle,
                Err(_) => {
                    wasm_warn!("could not arm resize watchdog");
                    0
                }
            },
            None => 0,
        }
    }

    fn clear_watchdog(&mut self, timer: TimerHandle) {
        if timer != 0 {
            self.window.clear_timeout_with_handle(timer as i32);
        }
    }

    fn sweep_orphan_guides(&mut self) -> usize {
        let selector = format!(".{}", self.guide_class());
        let list = match self.document.query_selector_all(&selector) {
            Ok(list) => list,
            Err(_) => return 0,
        };
        let active_el = self
            .active_guide
            .and_then(|h| self.guides.get(&h))
            .map(|(el, _)| el.clone());

        let mut removed = 0;
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Some(active) = &active_el {
                    if active.is_same_node(Some(&node)) {
                        continue;
                    }
                }
                if let Ok(el) = node.dyn_into::<Element>() {
                    el.remove();
                    removed += 1;
                }
            }
        }
        let active = self.active_guide;
        self.guides.retain(|handle, _| Some(*handle) == active);
        removed
    }
}
