// src/components/hero.rs
use crate::components::music::MusicContext;
use crate::invitation_config::{Couple, EventInfo};
use crate::utils::resource_url;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub image: AttrValue,
    pub couple: Couple,
    pub event: EventInfo,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let image_loaded = use_state(|| false);
    let music = use_context::<MusicContext>();

    let onload = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };
    let card_class = if *image_loaded {
        "opacity-100 scale-100"
    } else {
        "opacity-0 scale-95"
    };

    html! {
        <section class="relative h-screen flex flex-col overflow-hidden bg-gradient-to-br from-rose-50 via-white to-rose-50">
            <div class="absolute top-12 left-0 right-0 text-center z-20">
                <h2 class="text-rose-400 text-lg font-light tracking-[0.3em] opacity-80">{props.title.to_string()}</h2>
            </div>

            <div class="flex-1 flex items-center justify-center px-8">
                <div class={classes!("relative", "w-full", "max-w-sm", "transition-all", "duration-1500", card_class)}>
                    <div class="relative bg-white rounded-3xl shadow-[0_20px_60px_rgba(0,0,0,0.15)] overflow-hidden">
                        <div class="aspect-[3/4] relative">
                            <img
                                src={resource_url(&props.image)}
                                alt="Wedding"
                                class="w-full h-full object-cover object-[60%] scale-110"
                                {onload}
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-black/40 via-transparent to-transparent"></div>
                        </div>
                        <div class="absolute bottom-0 left-0 right-0 p-8 text-white">
                            <h1 class="text-3xl font-light mb-2">
                                {props.couple.groom.given_name.clone()}
                                <span class="text-red-400 mx-2">{"♥"}</span>
                                {props.couple.bride.given_name.clone()}
                            </h1>
                            <p class="text-white/80 text-sm">{props.event.hero_line.clone()}</p>
                            <p class="text-white/80 text-sm">{props.event.venue_line.clone()}</p>
                        </div>
                    </div>

                    { render_player(music.as_ref()) }
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 text-rose-300 animate-bounce">{"⌄"}</div>
        </section>
    }
}

fn render_player(music: Option<&MusicContext>) -> Html {
    let Some(music) = music else {
        return html! {};
    };
    let progress = music.snapshot.progress_percent();
    let onclick = {
        let toggle = music.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <div class="mt-8 bg-white/80 backdrop-blur-md rounded-2xl shadow-lg p-6">
            <div class="mb-4">
                <p class="text-gray-800 font-medium">{music.title.to_string()}</p>
                <p class="text-gray-500 text-xs">{music.artist.to_string()}</p>
            </div>

            <div class="relative h-1 bg-gray-200 rounded-full mb-4 overflow-hidden">
                <div
                    class="absolute left-0 top-0 h-full bg-gradient-to-r from-rose-400 to-pink-400 rounded-full transition-all duration-300"
                    style={format!("width: {:.1}%", progress)}
                ></div>
            </div>

            <div class="flex items-center justify-center gap-6">
                // decorative, there is a single track
                <span class="text-gray-400">{"⏮"}</span>
                <button
                    {onclick}
                    class="w-14 h-14 bg-gradient-to-r from-rose-400 to-pink-400 rounded-full flex items-center justify-center shadow-lg hover:shadow-xl transition-all duration-300 hover:scale-105 text-white"
                    aria-label={if music.snapshot.is_playing { "음악 일시정지" } else { "음악 재생" }}
                >
                    { if music.snapshot.is_playing { "❚❚" } else { "▶" } }
                </button>
                <span class="text-gray-400">{"⏭"}</span>
            </div>
        </div>
    }
}
