// src/components/music.rs
use crate::error::PlaybackError;
use crate::invitation_config::TrackConfig;
use crate::media_toggle::{
    EngineReport, MediaSnapshot, MediaToggle, StartRequest, SubscriptionId, TrackHandle,
    TrackSource,
};
use crate::utils::resource_url;
use gloo_events::EventListener;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

const BLOCKED_NOTICE: &str = "음악 재생이 차단되었습니다.";
const UNAVAILABLE_NOTICE: &str = "음악을 불러올 수 없습니다.";

/// Creates `<audio>` elements that report back through a Yew callback.
pub struct WebTrackSource {
    report: Callback<EngineReport>,
}

pub struct WebTrack {
    audio: HtmlAudioElement,
    report: Callback<EngineReport>,
    _listeners: [EventListener; 2],
}

impl TrackSource for WebTrackSource {
    type Handle = WebTrack;

    fn open(&self, track: &TrackConfig) -> Result<WebTrack, PlaybackError> {
        let audio = HtmlAudioElement::new_with_src(&resource_url(&track.src))
            .map_err(|e| PlaybackError::Unavailable(format!("{:?}", e)))?;
        audio.set_loop(track.looped);
        audio.set_volume(track.volume);

        let on_metadata = {
            let element = audio.clone();
            let report = self.report.clone();
            EventListener::new(&audio, "loadedmetadata", move |_| {
                report.emit(EngineReport::DurationKnown(element.duration()))
            })
        };
        let on_time = {
            let element = audio.clone();
            let report = self.report.clone();
            EventListener::new(&audio, "timeupdate", move |_| {
                report.emit(EngineReport::TimeUpdate(element.current_time()))
            })
        };

        Ok(WebTrack {
            audio,
            report: self.report.clone(),
            _listeners: [on_metadata, on_time],
        })
    }
}

impl TrackHandle for WebTrack {
    fn start(&self, request: StartRequest) {
        let promise = match self.audio.play() {
            Ok(promise) => promise,
            Err(e) => {
                self.report
                    .emit(EngineReport::Blocked(request, format!("{:?}", e)));
                return;
            }
        };
        let report = self.report.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => report.emit(EngineReport::Started(request)),
                Err(e) => report.emit(EngineReport::Blocked(request, format!("{:?}", e))),
            }
        });
    }

    fn stop(&self) {
        if let Err(e) = self.audio.pause() {
            log::warn!("Failed to pause audio: {:?}", e);
        }
    }

    fn rewind(&self) {
        self.audio.set_current_time(0.0);
    }
}

/// Shared by every control that drives the background music.
#[derive(Clone, PartialEq)]
pub struct MusicContext {
    pub snapshot: MediaSnapshot,
    pub title: AttrValue,
    pub artist: AttrValue,
    pub play: Callback<()>,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct MusicProviderProps {
    pub track: TrackConfig,
    #[prop_or_default]
    pub children: Children,
}

pub enum MusicMsg {
    Play,
    Toggle,
    Engine(EngineReport),
    Changed(MediaSnapshot),
}

pub struct MusicProvider {
    media: MediaToggle<WebTrackSource>,
    snapshot: MediaSnapshot,
    subscription: SubscriptionId,
    play: Callback<()>,
    toggle: Callback<()>,
}

impl Component for MusicProvider {
    type Message = MusicMsg;
    type Properties = MusicProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let source = WebTrackSource {
            report: ctx.link().callback(MusicMsg::Engine),
        };
        let mut media = MediaToggle::new(source, ctx.props().track.clone());
        let subscription = media.subscribe(ctx.link().callback(MusicMsg::Changed));
        let snapshot = media.snapshot();

        Self {
            media,
            snapshot,
            subscription,
            play: ctx.link().callback(|_| MusicMsg::Play),
            toggle: ctx.link().callback(|_| MusicMsg::Toggle),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let result = match msg {
            MusicMsg::Play => self.media.play(),
            MusicMsg::Toggle => self.media.toggle(),
            MusicMsg::Engine(report) => self.media.report(report),
            MusicMsg::Changed(snapshot) => {
                let changed = self.snapshot != snapshot;
                self.snapshot = snapshot;
                return changed;
            }
        };
        if let Err(e) = result {
            log::warn!("{}", e);
            gloo::dialogs::alert(notice_for(&e));
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let track = &ctx.props().track;
        let context = MusicContext {
            snapshot: self.snapshot,
            title: AttrValue::from(track.title.clone()),
            artist: AttrValue::from(track.artist.clone()),
            play: self.play.clone(),
            toggle: self.toggle.clone(),
        };

        html! {
            <ContextProvider<MusicContext> {context}>
                { for ctx.props().children.iter() }
            </ContextProvider<MusicContext>>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.media.unsubscribe(self.subscription);
        if self.media.has_track() {
            log::debug!("Releasing background track");
            self.media.release();
        }
    }
}

fn notice_for(error: &PlaybackError) -> &'static str {
    match error {
        PlaybackError::Blocked(_) => BLOCKED_NOTICE,
        PlaybackError::Unavailable(_) => UNAVAILABLE_NOTICE,
    }
}

#[function_component(FloatingMusicButton)]
pub fn floating_music_button() -> Html {
    let Some(music) = use_context::<MusicContext>() else {
        return html! {};
    };
    let playing = music.snapshot.is_playing;
    let onclick = {
        let toggle = music.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button
            {onclick}
            class="fixed bottom-6 right-6 z-50 bg-white/90 backdrop-blur-md shadow-lg rounded-full p-3.5 hover:shadow-xl transition-all duration-300 text-rose-400"
            aria-label={if playing { "음악 일시정지" } else { "음악 재생" }}
        >
            { if playing { "❚❚" } else { "▶" } }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct MusicPromptProps {
    pub on_dismiss: Callback<()>,
}

/// Asks once whether to start the music; playing needs a user gesture.
#[function_component(MusicPrompt)]
pub fn music_prompt(props: &MusicPromptProps) -> Html {
    let music = use_context::<MusicContext>();
    let on_play = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            on_dismiss.emit(());
            if let Some(music) = &music {
                music.play.emit(());
            }
        })
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/40 backdrop-blur-sm flex items-center justify-center z-50 p-4">
            <div class="bg-white rounded-3xl p-8 max-w-sm w-full shadow-2xl">
                <div class="text-center">
                    <div class="w-12 h-12 bg-rose-50 rounded-full flex items-center justify-center mx-auto mb-4 text-rose-400">{"♫"}</div>
                    <h3 class="text-lg font-medium mb-2">{"배경음악"}</h3>
                    <p class="text-sm text-gray-600 mb-6">{"청첩장과 함께 음악을 들으시겠습니까?"}</p>
                    <div class="flex gap-3">
                        <button
                            onclick={on_play}
                            class="flex-1 bg-rose-400 text-white py-2.5 px-4 rounded-xl hover:bg-rose-500 transition-colors"
                        >{"재생"}</button>
                        <button
                            onclick={on_close}
                            class="flex-1 bg-gray-100 text-gray-700 py-2.5 px-4 rounded-xl hover:bg-gray-200 transition-colors"
                        >{"닫기"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
