use crate::dashboards::d410_pool_workload::api;
use crate::dashboards::d410_pool_workload::selection::{SlotSelection, BREAK_LABEL};
use crate::shared::components::gesture_wheel::GestureWheel;
use crate::shared::date_utils;
use chrono::NaiveDate;
use contracts::dashboards::d410_pool_workload::{CurrentNow, PoolWorkloadRequest, PoolWorkloadSlot};
use contracts::shared::schedule::ScheduleConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Виджет выбора времени: четыре синхронных колеса (дата, время, дорожки,
/// места) поверх одного снапшота доступности
///
/// Availability loads once on mount and again on the explicit refresh
/// button; selecting a date or hour never re-fetches. A failed refresh keeps
/// the previous snapshot and selection on screen under the error banner.
#[component]
pub fn PoolWheelDashboard(
    /// Notification for a sibling booking panel: fires with (date, hour)
    /// whenever the effective selection changes
    #[prop(optional)]
    on_select_slot: Option<Callback<(NaiveDate, u32)>>,
    /// Booking collaborator, invoked with the active slot; the dashboard
    /// only gates the action
    #[prop(optional)]
    on_book: Option<Callback<PoolWorkloadSlot>>,
    /// Schedule override (hour range, break rule)
    #[prop(optional)]
    config: Option<ScheduleConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let selection = RwSignal::new(SlotSelection::new(config));
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (current_now, set_current_now) = signal(None::<CurrentNow>);
    let (refreshed, set_refreshed) = signal(false);

    let fetch_data = move |user_initiated: bool| {
        set_loading.set(true);
        spawn_local(async move {
            let request = PoolWorkloadRequest {
                start_hour: config.hour_start,
                end_hour: config.hour_end,
            };
            match api::get_pool_workload(&request).await {
                Ok(response) => {
                    if let Some(meta) = &response.meta {
                        log::debug!(
                            "Pool workload snapshot: server now {} {}:00 (tz {} min)",
                            meta.server_now_date,
                            meta.server_now_hour,
                            meta.tz_offset
                        );
                    }
                    set_current_now.set(response.current_now);
                    selection.update(|s| s.load_slots(response.slots));
                    set_error.set(None);
                    set_loading.set(false);
                    if user_initiated {
                        set_refreshed.set(true);
                        gloo_timers::future::TimeoutFuture::new(2500).await;
                        set_refreshed.set(false);
                    }
                }
                Err(err) => {
                    log::error!("Failed to load pool workload: {}", err);
                    // предыдущий снапшот и выбор остаются на экране
                    set_error.set(Some(err));
                    set_loading.set(false);
                }
            }
        });
    };

    // Load once on mount; reads nothing reactive, so it never re-runs
    {
        let fetch_data = fetch_data.clone();
        Effect::new(move |_| {
            fetch_data(false);
        });
    }

    let notify_selection = {
        let on_select_slot = on_select_slot.clone();
        move || {
            if let Some(callback) = &on_select_slot {
                let pair = selection
                    .with_untracked(|s| s.current_date().zip(s.selected_hour()));
                if let Some(pair) = pair {
                    callback.run(pair);
                }
            }
        }
    };

    let on_date_change = {
        let notify_selection = notify_selection.clone();
        Callback::new(move |index: usize| {
            selection.update(|s| s.set_date_index(index));
            notify_selection();
        })
    };
    // lanes/places wheels report the same axis, so all three share this
    let on_hour_change = Callback::new(move |index: usize| {
        selection.update(|s| {
            if let Some(hour) = s.hour_for_index(index) {
                s.set_selected_hour(hour);
            }
        });
        notify_selection();
    });

    let date_items = Signal::derive(move || selection.with(|s| s.date_labels()));
    let date_index = Signal::derive(move || selection.with(|s| s.date_index()));
    let time_items = Signal::derive(move || selection.with(|s| s.time_labels()));
    let lane_items = Signal::derive(move || selection.with(|s| s.lane_labels()));
    let place_items = Signal::derive(move || selection.with(|s| s.place_labels()));
    let hour_index = Signal::derive(move || selection.with(|s| s.hour_wheel_index()));
    let disabled_indices = Signal::derive(move || selection.with(|s| s.disabled_indices()));
    let break_indices = Signal::derive(move || selection.with(|s| s.break_indices()));
    let book_disabled = Signal::derive(move || !selection.with(|s| s.can_book()));

    let on_book_click = move |_| {
        let slot = selection.with_untracked(|s| {
            s.can_book().then(|| s.active_slot().cloned()).flatten()
        });
        let Some(slot) = slot else {
            return;
        };
        if let Some(callback) = on_book {
            callback.run(slot);
        } else {
            log::info!(
                "Booking requested: {} {}",
                slot.date,
                date_utils::format_hour(slot.hour)
            );
        }
    };

    view! {
        <div class="pw-root">
            <div class="pw-title">"Виджет выбора времени (4 колеса)"</div>

            {move || {
                current_now
                    .get()
                    .map(|now| {
                        let value = now
                            .current
                            .map(|c| c.to_string())
                            .unwrap_or_else(|| "—".to_string());
                        view! {
                            <div class="pw-current">
                                "Сейчас в бассейне: " <b>{value}</b>
                                {now
                                    .source
                                    .note()
                                    .map(|note| {
                                        view! {
                                            <span class="pw-current-note">
                                                {format!(" ({})", note)}
                                            </span>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}

            {move || {
                if loading.get() {
                    view! {
                        <div class="pw-loader">
                            <div class="pw-spinner"></div>
                            <span>"Загрузка..."</span>
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! { <div class="pw-error">"Ошибка: " {err}</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                let has_data = selection.with(|s| s.has_data());
                if !loading.get() && error.get().is_none() && !has_data {
                    view! { <div class="pw-empty">"Нет данных"</div> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <Show when=move || selection.with(|s| s.has_data())>
                <div class="pw-wheels-row">
                    <div class="pw-wheel-card">
                        <div class="pw-wheel-label">"ДАТА"</div>
                        <GestureWheel
                            items=date_items
                            active_index=date_index
                            on_change=on_date_change
                            aria_label="Дата"
                        />
                    </div>

                    <div class="pw-wheel-card">
                        <div class="pw-wheel-label">"ВРЕМЯ"</div>
                        <GestureWheel
                            items=time_items
                            active_index=hour_index
                            on_change=on_hour_change
                            disabled_indices=disabled_indices
                            break_indices=break_indices
                            aria_label="Время"
                        />
                    </div>

                    <div class="pw-wheel-card">
                        <div class="pw-wheel-label">"СВОБОДНЫЕ ДОРОЖКИ"</div>
                        <GestureWheel
                            items=lane_items
                            active_index=hour_index
                            on_change=on_hour_change
                            disabled_indices=disabled_indices
                            break_indices=break_indices
                            aria_label="Свободные дорожки"
                        />
                    </div>

                    <div class="pw-wheel-card pw-wheel-card--places">
                        <div class="pw-wheel-label">"СВОБОДНО МЕСТ"</div>
                        <GestureWheel
                            items=place_items
                            active_index=hour_index
                            on_change=on_hour_change
                            disabled_indices=disabled_indices
                            break_indices=break_indices
                            aria_label="Свободно мест"
                        />
                        <div class="pw-booking-inline">
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=book_disabled
                                on_click=on_book_click
                            >
                                "Забронировать"
                            </Button>
                        </div>
                    </div>
                </div>

                <div class="pw-summary">
                    {move || {
                        selection
                            .with(|s| {
                                s.selected_hour()
                                    .zip(s.current_date())
                                    .map(|(hour, date)| {
                                        let time = if s.selected_is_break() {
                                            BREAK_LABEL.to_string()
                                        } else {
                                            date_utils::format_hour(hour)
                                        };
                                        let lanes = s
                                            .active_slot()
                                            .map(|slot| slot.free_lanes)
                                            .unwrap_or(0);
                                        let places = s
                                            .active_slot()
                                            .map(|slot| slot.free_places)
                                            .unwrap_or(0);
                                        view! {
                                            <div>
                                                "Дата: "
                                                <b>{date_utils::format_date_ru_long(date)}</b>
                                            </div>
                                            <div>"Время: " <b>{time}</b></div>
                                            <div>
                                                "Свободных дорожек: " <b>{lanes}</b>
                                            </div>
                                            <div>"Свободно мест: " <b>{places}</b></div>
                                        }
                                    })
                            })
                    }}
                </div>
            </Show>

            <div class="pw-refresh">
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch_data(true)
                >
                    "Обновить данные"
                </Button>
                {move || {
                    refreshed
                        .get()
                        .then(|| {
                            view! { <span class="pw-refresh-note">"Данные обновлены"</span> }
                        })
                }}
            </div>
        </div>
    }
}
