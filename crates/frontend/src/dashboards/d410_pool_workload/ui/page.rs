use super::dashboard::PoolWheelDashboard;
use crate::shared::components::indicator_card::IndicatorCard;
use crate::shared::date_utils;
use chrono::NaiveDate;
use leptos::prelude::*;

/// Страница бронирования: индикаторы, виджет-колесо и панель брони рядом
#[component]
pub fn PoolBookingPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<(NaiveDate, u32)>);
    let on_select_slot = Callback::new(move |pair: (NaiveDate, u32)| {
        set_selected.set(Some(pair));
    });

    // Демо-значения индикаторов; сюда подключается реальный источник
    let pool_people = 7u32;
    let pool_free = 113u32;
    let temperature = 27.3f64;

    view! {
        <div class="pool-booking-page">
            <div class="pool-indicators-row">
                <IndicatorCard
                    label="В бассейне"
                    value=pool_people.to_string()
                    desc="сейчас человек"
                />
                <IndicatorCard
                    label="Свободно мест"
                    value=pool_free.to_string()
                    desc="мест осталось"
                />
                <IndicatorCard
                    label="Температура"
                    value=format!("{}°C", temperature)
                    desc="тренировочный"
                />
            </div>

            <div class="pool-section-row">
                <div class="pool-section-col">
                    <PoolWheelDashboard on_select_slot=on_select_slot />
                </div>
                <div class="pool-section-col">
                    <BookingPanel selected=selected />
                </div>
            </div>
        </div>
    }
}

/// Панель брони: показывает последний выбранный слот либо подсказку
#[component]
fn BookingPanel(#[prop(into)] selected: Signal<Option<(NaiveDate, u32)>>) -> impl IntoView {
    view! {
        <div class="booking-panel">
            {move || match selected.get() {
                Some((date, hour)) => {
                    view! {
                        <div class="booking-panel__selected">
                            "Вы выбрали: "
                            <b>
                                {format!(
                                    "{} ({}), {}",
                                    date_utils::format_date_ru_long(date),
                                    date_utils::weekday_ru(date),
                                    date_utils::format_hour(hour),
                                )}
                            </b>
                        </div>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <div class="booking-panel__hint">
                            "Выберите время колесом и нажмите 'Забронировать'"
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
