// src/components/copy_button.rs
use crate::utils::copy_to_clipboard;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

const COPIED_FEEDBACK_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub text: AttrValue,
    pub label: AttrValue,
    pub copied_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Copies `text` and shows `copied_label` for two seconds.
#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    let copied = use_state(|| false);
    let reset = use_mut_ref(|| None::<Timeout>);

    let onclick = {
        let copied = copied.clone();
        let reset = reset.clone();
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = copy_to_clipboard(&text) {
                log::warn!("Copy failed: {}", e);
                return;
            }
            copied.set(true);
            let copied = copied.clone();
            // replacing the handle cancels a pending reset
            *reset.borrow_mut() = Some(Timeout::new(COPIED_FEEDBACK_MS, move || copied.set(false)));
        })
    };

    html! {
        <button {onclick} class={props.class.clone()}>
            { props.children.clone() }
            { if *copied { props.copied_label.to_string() } else { props.label.to_string() } }
        </button>
    }
}
