use super::stepper::{resolve_click, resolve_step, DragTracker, WheelDebounce, WheelTuning};
use leptos::html::Div;
use leptos::prelude::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, EventTarget, TouchEvent, WheelEvent};

/// Monotonic timestamp in ms; wall-clock fallback outside a browser window
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Holds the raw input listeners of one wheel; dropping it detaches them, so
/// unmounting the component releases its device-input handles.
struct GestureSubscription {
    target: EventTarget,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
}

impl Drop for GestureSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self.target.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = self.target.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        let _ = self.target.remove_event_listener_with_callback(
            "touchend",
            self.touch_end.as_ref().unchecked_ref(),
        );
    }
}

/// Вертикальное "колесо" выбора: список подписей, одна активная позиция
///
/// Controlled component: the active index lives with the owner, the wheel
/// only reports index changes. Continuous input (pointer wheel, touch drag)
/// is reduced to single steps; positions from `disabled_indices` are skipped
/// in the step direction and never settled on.
#[component]
pub fn GestureWheel(
    /// Ordered labels, one per wheel position
    #[prop(into)]
    items: Signal<Vec<String>>,
    /// Active position, owned by the caller
    #[prop(into)]
    active_index: Signal<usize>,
    /// Fires with the new index when a gesture or click resolves to a
    /// different, non-disabled position
    on_change: Callback<usize>,
    /// Positions rendered and skipped as unavailable
    #[prop(optional, into)]
    disabled_indices: Option<Signal<HashSet<usize>>>,
    /// Positions rendered as the break row
    #[prop(optional, into)]
    break_indices: Option<Signal<HashSet<usize>>>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Gesture thresholds and row geometry
    #[prop(optional)]
    tuning: Option<WheelTuning>,
) -> impl IntoView {
    let tuning = tuning.unwrap_or_default();
    let disabled_indices = disabled_indices.unwrap_or_else(|| {
        let (empty, _) = signal(HashSet::new());
        empty.into()
    });
    let break_indices = break_indices.unwrap_or_else(|| {
        let (empty, _) = signal(HashSet::new());
        empty.into()
    });

    let node_ref = NodeRef::<Div>::new();
    let subscription = StoredValue::new_local(None::<GestureSubscription>);

    // One step in `direction`; reads props untracked because it runs from
    // raw event closures, outside the reactive graph.
    let shift = {
        let on_change = on_change.clone();
        move |direction: i32| {
            let len = items.with_untracked(|v| v.len());
            let active = active_index.get_untracked();
            let next =
                disabled_indices.with_untracked(|d| resolve_step(active, direction, len, d));
            if let Some(next) = next {
                on_change.run(next);
            }
        }
    };

    // wheel/touchmove need preventDefault, so the listeners must be attached
    // non-passively through web_sys instead of the view macro.
    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        if subscription.with_value(|s| s.is_some()) {
            return;
        }

        let mut debounce = WheelDebounce::new(tuning.wheel_cooldown_ms);
        let wheel = {
            let shift = shift.clone();
            Closure::wrap(Box::new(move |ev: WheelEvent| {
                ev.prevent_default();
                if !debounce.accept(now_ms()) {
                    return;
                }
                shift(if ev.delta_y() > 0.0 { 1 } else { -1 });
            }) as Box<dyn FnMut(WheelEvent)>)
        };

        let drag = Rc::new(RefCell::new(DragTracker::default()));
        let touch_start = {
            let drag = drag.clone();
            Closure::wrap(Box::new(move |ev: TouchEvent| {
                if let Some(touch) = ev.touches().get(0) {
                    drag.borrow_mut().start(touch.client_y() as f64);
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };
        let touch_move = {
            let drag = drag.clone();
            let shift = shift.clone();
            Closure::wrap(Box::new(move |ev: TouchEvent| {
                let Some(touch) = ev.touches().get(0) else {
                    return;
                };
                let step = drag
                    .borrow_mut()
                    .track(touch.client_y() as f64, tuning.touch_step_px);
                if let Some(direction) = step {
                    ev.prevent_default();
                    shift(direction);
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };
        let touch_end = Closure::wrap(Box::new(move |_: TouchEvent| {
            drag.borrow_mut().end();
        }) as Box<dyn FnMut(TouchEvent)>);

        let target: EventTarget = el.into();
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            wheel.as_ref().unchecked_ref(),
            &options,
        );
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touch_start.as_ref().unchecked_ref(),
            &options,
        );
        let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touch_move.as_ref().unchecked_ref(),
            &options,
        );
        let _ = target
            .add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref());

        subscription.set_value(Some(GestureSubscription {
            target,
            wheel,
            touch_start,
            touch_move,
            touch_end,
        }));
    });

    on_cleanup(move || subscription.set_value(None));

    // the active row sits at a fixed focal offset; pure function of the index
    let inner_style = move || {
        let shift_px =
            tuning.focal_offset_px - (active_index.get() as i32) * tuning.item_height_px;
        format!("transform: translateY({}px)", shift_px)
    };
    let item_style = format!("height: {}px", tuning.item_height_px);

    view! {
        <div
            class="wheel-wrapper"
            aria-label=aria_label.unwrap_or_default()
            node_ref=node_ref
        >
            <div class="wheel-inner" style=inner_style>
                {move || {
                    let active = active_index.get();
                    let disabled = disabled_indices.get();
                    let breaks = break_indices.get();
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, text)| {
                            let mut class = String::from("wheel-item");
                            if idx == active {
                                class.push_str(" wheel-item--active");
                            }
                            if disabled.contains(&idx) {
                                class.push_str(" wheel-item--disabled");
                            }
                            if breaks.contains(&idx) {
                                class.push_str(" wheel-item--break");
                            }
                            let click_disabled = disabled.clone();
                            let on_change = on_change.clone();
                            view! {
                                <div
                                    class=class
                                    style=item_style.clone()
                                    on:click=move |_| {
                                        let active = active_index.get_untracked();
                                        if let Some(next) =
                                            resolve_click(idx, active, &click_disabled)
                                        {
                                            on_change.run(next);
                                        }
                                    }
                                >
                                    {text}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="wheel-fade wheel-fade--top"></div>
            <div class="wheel-fade wheel-fade--bottom"></div>
        </div>
    }
}
