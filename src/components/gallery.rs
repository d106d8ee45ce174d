// src/components/gallery.rs
use crate::gallery_viewer::{GalleryViewer, LoadStatus, OverlayKey, SwipeTracker};
use crate::utils::resource_url;
use gloo_events::EventListener;
use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<String>,
}

#[derive(Clone)]
pub enum GalleryMsg {
    Open(usize),
    Close,
    Next,
    Previous,
    Key(OverlayKey),
    Retry(usize),
    Loaded(usize),
    Failed(usize),
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
}

// A detached <img> kept alive until its load or error fires.
struct PendingImage {
    _element: HtmlImageElement,
    _onload: EventListener,
    _onerror: EventListener,
}

pub struct Gallery {
    viewer: GalleryViewer,
    swipe: SwipeTracker,
    pending: HashMap<usize, PendingImage>,
    // present only while the overlay is open
    key_listener: Option<EventListener>,
}

impl Component for Gallery {
    type Message = GalleryMsg;
    type Properties = GalleryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut gallery = Self {
            viewer: GalleryViewer::new(ctx.props().images.clone()),
            swipe: SwipeTracker::new(),
            pending: HashMap::new(),
            key_listener: None,
        };
        let initial = gallery.viewer.initial_preload();
        gallery.issue_loads(ctx, initial);
        gallery
    }

    fn changed(&mut self, ctx: &Context<Self>, old: &Self::Properties) -> bool {
        if ctx.props().images == old.images {
            return false;
        }
        self.viewer = GalleryViewer::new(ctx.props().images.clone());
        self.pending.clear();
        self.key_listener = None;
        self.swipe.reset();
        let initial = self.viewer.initial_preload();
        self.issue_loads(ctx, initial);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            GalleryMsg::Open(index) => match self.viewer.open(index) {
                Ok(loads) => {
                    log::info!("Overlay opened at image {}", index);
                    self.issue_loads(ctx, loads);
                    self.bind_keyboard(ctx);
                    true
                }
                Err(e) => {
                    log::warn!("Ignoring open request: {}", e);
                    false
                }
            },
            GalleryMsg::Close => {
                self.close_overlay();
                true
            }
            GalleryMsg::Next => {
                let next = self.viewer.next();
                self.navigated(ctx, next)
            }
            GalleryMsg::Previous => {
                let prev = self.viewer.previous();
                self.navigated(ctx, prev)
            }
            GalleryMsg::Key(key) => {
                if !self.viewer.handle_key(key) {
                    return false;
                }
                match self.viewer.selected() {
                    Some(index) => {
                        let loads = self.viewer.preload_around(index);
                        self.issue_loads(ctx, loads);
                    }
                    None => self.close_overlay(),
                }
                true
            }
            GalleryMsg::Retry(index) => match self.viewer.retry(index) {
                Ok(()) => {
                    log::info!("Retrying image {}", index);
                    self.issue_loads(ctx, vec![index]);
                    true
                }
                Err(e) => {
                    log::warn!("Ignoring retry request: {}", e);
                    false
                }
            },
            GalleryMsg::Loaded(index) => {
                self.pending.remove(&index);
                let changed = self.viewer.mark_loaded(index);
                if changed {
                    log::debug!("Image {} loaded", index);
                }
                changed
            }
            GalleryMsg::Failed(index) => {
                self.pending.remove(&index);
                let changed = self.viewer.mark_failed(index);
                if let (true, Some(image)) = (changed, self.viewer.image(index)) {
                    log::warn!(
                        "Image {} failed to load after {} attempt(s): {}",
                        index,
                        image.attempts(),
                        image.src()
                    );
                }
                changed
            }
            GalleryMsg::TouchStart(x) => {
                self.swipe.begin(x);
                false
            }
            GalleryMsg::TouchMove(x) => {
                self.swipe.track(x);
                false
            }
            GalleryMsg::TouchEnd => {
                let Some(direction) = self.swipe.finish() else {
                    return false;
                };
                let target = self.viewer.swipe(direction);
                self.navigated(ctx, target)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.viewer.is_empty() {
            return html! {};
        }
        html! {
            <section class="py-24 bg-neutral-50">
                <div class="max-w-md mx-auto px-8">
                    <h2 class="text-2xl font-light tracking-wider text-center mb-12 text-gray-800">{"갤러리"}</h2>
                    <div class="grid grid-cols-3 gap-2">
                        { for (0..self.viewer.len()).map(|idx| self.render_thumbnail(ctx, idx)) }
                    </div>
                </div>
                { self.render_overlay(ctx) }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.key_listener = None;
        self.pending.clear();
    }
}

impl Gallery {
    fn issue_loads(&mut self, ctx: &Context<Self>, indices: Vec<usize>) {
        for index in indices {
            let Some(src) = self.viewer.image(index).map(|i| resource_url(&i.request_src())) else {
                continue;
            };
            let element = match HtmlImageElement::new() {
                Ok(element) => element,
                Err(e) => {
                    log::warn!("Could not create preload element: {:?}", e);
                    ctx.link().send_message(GalleryMsg::Failed(index));
                    continue;
                }
            };
            let onload = {
                let link = ctx.link().clone();
                EventListener::once(&element, "load", move |_| {
                    link.send_message(GalleryMsg::Loaded(index))
                })
            };
            let onerror = {
                let link = ctx.link().clone();
                EventListener::once(&element, "error", move |_| {
                    link.send_message(GalleryMsg::Failed(index))
                })
            };
            element.set_src(&src);
            self.pending.insert(
                index,
                PendingImage {
                    _element: element,
                    _onload: onload,
                    _onerror: onerror,
                },
            );
        }
    }

    fn bind_keyboard(&mut self, ctx: &Context<Self>) {
        if self.key_listener.is_some() {
            return;
        }
        let link = ctx.link().clone();
        let listener = EventListener::new(&gloo_utils::window(), "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if let Some(key) = OverlayKey::from_key(&event.key()) {
                event.prevent_default();
                link.send_message(GalleryMsg::Key(key));
            }
        });
        self.key_listener = Some(listener);
    }

    fn close_overlay(&mut self) {
        self.viewer.close();
        self.swipe.reset();
        self.key_listener = None;
    }

    fn navigated(&mut self, ctx: &Context<Self>, target: Option<usize>) -> bool {
        let Some(index) = target else {
            return false;
        };
        log::debug!("Overlay moved to image {}", index);
        let loads = self.viewer.preload_around(index);
        self.issue_loads(ctx, loads);
        true
    }

    fn image_src(&self, idx: usize) -> String {
        self.viewer
            .image(idx)
            .map(|i| resource_url(&i.request_src()))
            .unwrap_or_default()
    }

    fn render_thumbnail(&self, ctx: &Context<Self>, idx: usize) -> Html {
        let status = self.viewer.status(idx).unwrap_or_default();
        let onclick = ctx.link().callback(move |_| GalleryMsg::Open(idx));
        let onload = ctx.link().callback(move |_: Event| GalleryMsg::Loaded(idx));
        let onerror = ctx.link().callback(move |_: Event| GalleryMsg::Failed(idx));
        let opacity = if status == LoadStatus::Loaded { "opacity-100" } else { "opacity-0" };

        html! {
            <div
                key={idx}
                class="aspect-square overflow-hidden rounded-lg cursor-pointer transform transition-all hover:scale-105 hover:shadow-lg bg-gray-100 relative"
                {onclick}
            >
                if matches!(status, LoadStatus::Unloaded | LoadStatus::Loading) {
                    <div class="absolute inset-0 bg-gray-200 animate-pulse" />
                }
                <img
                    src={self.image_src(idx)}
                    alt={format!("Gallery {}", idx + 1)}
                    class={classes!("w-full", "h-full", "object-cover", "transition-opacity", "duration-300", opacity)}
                    loading="lazy"
                    {onload}
                    {onerror}
                />
                if status == LoadStatus::Errored {
                    <div class="absolute inset-0 bg-gray-200 flex items-center justify-center">
                        <span class="text-gray-400 text-xs">{"이미지 로드 실패"}</span>
                    </div>
                }
            </div>
        }
    }

    fn render_overlay(&self, ctx: &Context<Self>) -> Html {
        let Some(selected) = self.viewer.selected() else {
            return html! {};
        };
        let status = self.viewer.status(selected).unwrap_or_default();
        let total = self.viewer.len();

        let on_backdrop = ctx.link().callback(|_: MouseEvent| GalleryMsg::Close);
        let ontouchstart = ctx
            .link()
            .batch_callback(|e: TouchEvent| first_touch_x(&e).map(GalleryMsg::TouchStart));
        let ontouchmove = ctx
            .link()
            .batch_callback(|e: TouchEvent| first_touch_x(&e).map(GalleryMsg::TouchMove));
        let ontouchend = ctx.link().callback(|_: TouchEvent| GalleryMsg::TouchEnd);

        let on_close = stop_and_send(ctx, GalleryMsg::Close);
        let on_prev = stop_and_send(ctx, GalleryMsg::Previous);
        let on_next = stop_and_send(ctx, GalleryMsg::Next);
        let on_retry = stop_and_send(ctx, GalleryMsg::Retry(selected));
        let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
        let onload = ctx.link().callback(move |_: Event| GalleryMsg::Loaded(selected));
        let onerror = ctx.link().callback(move |_: Event| GalleryMsg::Failed(selected));

        let opacity = if status == LoadStatus::Loaded { "opacity-100" } else { "opacity-0" };

        let overlay = html! {
            <div
                class="fixed inset-0 z-[9999] bg-black flex items-center justify-center"
                style="width: 100vw; height: 100vh; left: 0; top: 0;"
                onclick={on_backdrop}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
            >
                <button
                    class="absolute top-6 right-6 text-white/80 hover:text-white transition-colors z-10 text-2xl"
                    onclick={on_close}
                    aria-label="닫기"
                >{"✕"}</button>
                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 text-white/60 hover:text-white z-10 text-4xl"
                    onclick={on_prev}
                    aria-label="이전"
                >{"‹"}</button>
                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 text-white/60 hover:text-white z-10 text-4xl"
                    onclick={on_next}
                    aria-label="다음"
                >{"›"}</button>

                if status == LoadStatus::Loading {
                    <div class="absolute inset-0 flex items-center justify-center">
                        <div class="w-12 h-12 border-4 border-white/30 border-t-white rounded-full animate-spin" />
                    </div>
                }

                <img
                    src={self.image_src(selected)}
                    alt={format!("Selected {}", selected + 1)}
                    class={classes!("max-w-full", "max-h-full", "object-contain", "select-none", "pointer-events-auto", "transition-opacity", "duration-300", opacity)}
                    draggable="false"
                    style="max-width: 100vw; max-height: 100vh;"
                    onclick={swallow.clone()}
                    {onload}
                    {onerror}
                />

                if status == LoadStatus::Errored {
                    <div class="text-white text-center absolute">
                        <p>{"이미지를 불러올 수 없습니다"}</p>
                        <button class="mt-2 text-sm underline" onclick={on_retry}>{"다시 시도"}</button>
                    </div>
                }

                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 flex gap-1.5" onclick={swallow.clone()}>
                    { for (0..total).map(|idx| {
                        let dot = if idx == selected { "bg-white w-8" } else { "bg-white/40 hover:bg-white/60" };
                        html! { <div key={idx} class={classes!("w-1.5", "h-1.5", "rounded-full", "transition-all", "duration-300", dot)} /> }
                    }) }
                </div>
                <div class="absolute top-6 left-6 text-white/80 bg-black/30 px-3 py-1 rounded-full text-sm" onclick={swallow}>
                    { format!("{} / {}", selected + 1, total) }
                </div>
            </div>
        };

        yew::create_portal(overlay, gloo_utils::body().into())
    }
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .target_touches()
        .item(0)
        .map(|touch| touch.client_x() as f64)
}

fn stop_and_send(ctx: &Context<Gallery>, msg: GalleryMsg) -> Callback<MouseEvent> {
    let link = ctx.link().clone();
    Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        link.send_message(msg.clone());
    })
}
