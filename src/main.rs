// src/main.rs
mod components;
mod countdown;
mod error;
mod fade_in;
mod gallery_viewer;
mod invitation_config;
mod media_toggle;
mod utils;

use components::accounts::AccountSection;
use components::calendar::CalendarSection;
use components::contacts::ContactSection;
use components::gallery::Gallery;
use components::greeting::GreetingSection;
use components::hero::Hero;
use components::location::LocationSection;
use components::music::{FloatingMusicButton, MusicPrompt, MusicProvider};
use components::notices::{FooterSection, NoticeSection};
use fade_in::FadeInObserver;
use invitation_config::InvitationConfig;
use yew::prelude::*;

const FADE_IN_THRESHOLD: f64 = 0.1;

pub enum AppMsg {
    DismissMusicPrompt,
}

pub struct App {
    content: Result<InvitationConfig, String>,
    show_music_prompt: bool,
    fade_in: Option<FadeInObserver>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let content = match InvitationConfig::embedded() {
            Ok(config) => {
                log::info!(
                    "Loaded invitation content: {} photos, {} contacts",
                    config.gallery.len(),
                    config.contacts.len()
                );
                let blank = config.blank_accounts();
                if !blank.is_empty() {
                    log::warn!("Gift accounts without a number: {}", blank.join(", "));
                }
                Ok(config)
            }
            Err(e) => {
                log::error!("Failed to load invitation content: {}", e);
                Err(e.to_string())
            }
        };

        Self {
            content,
            show_music_prompt: true,
            fade_in: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::DismissMusicPrompt => {
                self.show_music_prompt = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = match &self.content {
            Ok(config) => config,
            Err(error) => {
                return html! {
                    <div class="min-h-screen flex items-center justify-center p-8">
                        <div class="error">{format!("청첩장을 불러올 수 없습니다: {}", error)}</div>
                    </div>
                };
            }
        };

        let on_dismiss = ctx.link().callback(|_| AppMsg::DismissMusicPrompt);

        html! {
            <div class="min-h-screen bg-white">
                <div class="w-full max-w-lg mx-auto bg-white">
                    <MusicProvider track={config.music.clone()}>
                        if self.show_music_prompt {
                            <MusicPrompt {on_dismiss} />
                        }
                        <FloatingMusicButton />
                        <Hero
                            title={config.title.clone()}
                            image={config.hero_image.clone()}
                            couple={config.couple.clone()}
                            event={config.event.clone()}
                        />
                        <GreetingSection greeting={config.greeting.clone()} />
                        <Gallery images={config.gallery.clone()} />
                        <CalendarSection event={config.event.clone()} />
                        <LocationSection venue={config.venue.clone()} />
                        <ContactSection contacts={config.contacts.clone()} />
                        <AccountSection accounts={config.accounts.clone()} />
                        <NoticeSection notices={config.notices.clone()} />
                        <FooterSection
                            groom={config.couple.groom.clone()}
                            bride={config.couple.bride.clone()}
                            date={config.event.short_date.clone()}
                        />
                    </MusicProvider>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.content.is_err() {
            return;
        }
        match FadeInObserver::observe("section", FADE_IN_THRESHOLD) {
            Ok(observer) => self.fade_in = Some(observer),
            Err(e) => log::warn!("Fade-in disabled: {:?}", e),
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.fade_in = None;
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
