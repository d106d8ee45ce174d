// src/components/calendar.rs
use crate::countdown::{d_day_label, days_until_date};
use crate::invitation_config::EventInfo;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CalendarSectionProps {
    pub event: EventInfo,
}

#[function_component(CalendarSection)]
pub fn calendar_section(props: &CalendarSectionProps) -> Html {
    let event = &props.event;
    let days = days_until_date(event.year, event.month, event.day);

    html! {
        <section class="py-24 bg-white">
            <div class="max-w-md mx-auto px-8 text-center">
                <div class="inline-flex items-center gap-2 text-sm text-rose-400 mb-8">
                    <span>{"◷"}</span>
                    <span>{d_day_label(days)}</span>
                </div>

                <div class="space-y-3">
                    <h3 class="text-3xl font-light text-gray-800">{event.date_label.clone()}</h3>
                    <p class="text-gray-600">{event.time_label.clone()}</p>
                    <p class="text-sm text-gray-500">{event.year_label.clone()}</p>
                </div>
            </div>
        </section>
    }
}
