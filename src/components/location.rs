// src/components/location.rs
use crate::components::copy_button::CopyButton;
use crate::invitation_config::{MapLink, MapProvider, Venue};
use crate::utils::resource_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationSectionProps {
    pub venue: Venue,
}

#[function_component(LocationSection)]
pub fn location_section(props: &LocationSectionProps) -> Html {
    let venue = &props.venue;
    let parking = &venue.parking;

    html! {
        <section class="py-24 bg-neutral-50">
            <div class="max-w-md mx-auto px-8">
                <h2 class="text-2xl font-light tracking-wider text-center mb-12 text-gray-800">{"오시는 길"}</h2>

                <div class="bg-white rounded-2xl shadow-sm p-8">
                    <div class="text-center mb-8">
                        <h3 class="text-xl mb-3 text-gray-800">{venue.name.clone()}</h3>
                        <p class="text-gray-600 text-sm leading-relaxed mb-3">
                            {venue.address.clone()}<br />
                            {venue.hall.clone()}
                        </p>
                        <CopyButton
                            text={venue.address.clone()}
                            label="주소 복사"
                            copied_label="복사됨!"
                            class="inline-flex items-center gap-2 px-4 py-2 bg-gray-100 hover:bg-gray-200 rounded-lg transition-colors text-sm"
                        >
                            <span>{"📍"}</span>
                        </CopyButton>
                    </div>
                    <div class="aspect-[4/3] bg-gray-100 rounded-xl mb-6 overflow-hidden">
                        <img
                            class="w-full h-full object-cover"
                            src={resource_url(&venue.map_image)}
                            alt={format!("{} 위치", venue.name)}
                        />
                    </div>

                    <div class="space-y-4 text-sm">
                        <div class="flex items-start gap-3">
                            <span class="text-rose-400 mt-0.5 flex-shrink-0">{"📍"}</span>
                            <div class="space-y-2 text-gray-600">
                                { for venue.transit.iter().map(|route| html! {
                                    <p>
                                        <span class="font-medium text-gray-700">{route.station.clone()}</span>
                                        <span class="text-xs ml-1">{route.lines.clone()}</span>
                                        <br />
                                        <span class="text-xs">{route.directions.clone()}</span>
                                    </p>
                                }) }
                            </div>
                        </div>
                        <div class="flex items-start gap-3">
                            <span class="text-blue-400 mt-0.5 flex-shrink-0">{"🚗"}</span>
                            <div class="space-y-1 text-gray-600">
                                <p>
                                    <span class="font-medium text-gray-700">{parking.headline.clone()}</span>
                                    <span class="text-xs ml-1">{parking.detail.clone()}</span>
                                </p>
                                <ul class="ml-1 list-disc list-inside text-xs text-gray-700">
                                    { for parking.lots.iter().map(|lot| html! { <li>{lot.clone()}</li> }) }
                                </ul>
                                <p class="text-xs text-gray-500 pt-2">
                                    {"※ 당일 모든 주차는 "}
                                    <span class="font-semibold">{parking.attendant_note.clone()}</span>
                                    {"를 받아주세요."}
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="mt-6 pt-6 border-t border-gray-100">
                        <p class="text-xs text-gray-500 text-center">
                            { for venue.advisory.iter().map(|line| html! { <>{line.clone()}<br /></> }) }
                        </p>
                    </div>
                </div>

                <div class="flex gap-3 mt-6">
                    { for venue.map_links.iter().map(render_map_link) }
                </div>
            </div>
        </section>
    }
}

fn render_map_link(link: &MapLink) -> Html {
    let style = match link.provider {
        MapProvider::Naver => "bg-green-500 text-white hover:bg-green-600",
        MapProvider::Kakao => "bg-yellow-400 text-gray-800 hover:bg-yellow-500",
    };

    html! {
        <a
            href={link.url.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={classes!("flex-1", "py-3.5", "rounded-xl", "font-medium", "transition-colors", "text-center", "text-sm", style)}
        >
            {link.label.clone()}
        </a>
    }
}
