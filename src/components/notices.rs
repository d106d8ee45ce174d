// src/components/notices.rs
use crate::invitation_config::{Notice, NoticeTone, Person};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeSectionProps {
    pub notices: Vec<Notice>,
}

#[function_component(NoticeSection)]
pub fn notice_section(props: &NoticeSectionProps) -> Html {
    html! {
        <section class="py-24 bg-white">
            <div class="max-w-md mx-auto px-8">
                <h2 class="text-2xl font-light tracking-wider text-center mb-12 text-gray-800">{"안내사항"}</h2>
                <div class="space-y-4">
                    { for props.notices.iter().map(render_notice) }
                </div>
            </div>
        </section>
    }
}

fn render_notice(notice: &Notice) -> Html {
    let (card, badge) = match notice.tone {
        NoticeTone::Neutral => ("bg-gray-50", "bg-blue-100"),
        NoticeTone::Rose => ("bg-rose-50", "bg-rose-100"),
    };

    html! {
        <div class={classes!("rounded-2xl", "p-6", "flex", "gap-4", card)}>
            <div class={classes!("w-14", "h-14", "rounded-xl", "flex", "items-center", "justify-center", "flex-shrink-0", badge)}>
                <span class="text-2xl">{notice.icon.clone()}</span>
            </div>
            <div class="flex-1">
                <h3 class="font-medium text-gray-800 mb-2">{notice.title.clone()}</h3>
                <p class="text-gray-600 text-sm leading-relaxed">
                    { for notice.body.iter().map(|line| html! { <>{line.clone()}<br /></> }) }
                </p>
                if !notice.details.is_empty() {
                    <p class="text-gray-500 text-xs mt-2">
                        { for notice.details.iter().map(|line| html! { <>{line.clone()}<br /></> }) }
                    </p>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterSectionProps {
    pub groom: Person,
    pub bride: Person,
    pub date: AttrValue,
}

#[function_component(FooterSection)]
pub fn footer_section(props: &FooterSectionProps) -> Html {
    html! {
        <footer class="py-16 bg-rose-50">
            <div class="text-center">
                <div class="mx-auto mb-4 text-rose-300 text-2xl">{"♥"}</div>
                <p class="text-gray-600 text-sm font-light">
                    {format!("{} & {}", props.groom.given_name, props.bride.given_name)}
                </p>
                <p class="text-gray-400 text-xs mt-2">{props.date.to_string()}</p>
            </div>
        </footer>
    }
}
