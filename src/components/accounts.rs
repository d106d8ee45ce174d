// src/components/accounts.rs
use crate::components::copy_button::CopyButton;
use crate::invitation_config::{AccountHolder, AccountSide, Accounts};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountSectionProps {
    pub accounts: Accounts,
}

#[function_component(AccountSection)]
pub fn account_section(props: &AccountSectionProps) -> Html {
    // one disclosure flag per side, all collapsed initially
    let expanded = use_state(|| vec![false; props.accounts.sides.len()]);

    html! {
        <section class="py-24 bg-neutral-50">
            <div class="max-w-md mx-auto px-8">
                <h2 class="text-2xl font-light tracking-wider text-center mb-12 text-gray-800">{"마음 전하기"}</h2>

                <div class="bg-white rounded-2xl shadow-sm p-8">
                    <p class="text-center text-gray-600 mb-8 font-light">
                        { for props.accounts.intro.iter().map(|line| html! { <>{line.clone()}<br /></> }) }
                    </p>

                    <div class="space-y-3">
                        { for props.accounts.sides.iter().enumerate().map(|(idx, side)| {
                            let open = expanded.get(idx).copied().unwrap_or(false);
                            let ontoggle = {
                                let expanded = expanded.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*expanded).clone();
                                    if let Some(flag) = next.get_mut(idx) {
                                        *flag = !*flag;
                                    }
                                    expanded.set(next);
                                })
                            };
                            render_side(side, open, ontoggle)
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn render_side(side: &AccountSide, open: bool, ontoggle: Callback<MouseEvent>) -> Html {
    let chevron = if open { "rotate-180" } else { "" };

    html! {
        <>
            <button
                onclick={ontoggle}
                class="w-full p-4 flex items-center justify-between hover:bg-gray-50 rounded-xl transition-colors"
            >
                <span class="text-gray-700">{side.label.clone()}</span>
                <span class={classes!("text-gray-400", "transition-transform", chevron)}>{"⌄"}</span>
            </button>
            if open {
                <div class="px-4 pb-4 space-y-3">
                    { for side.holders.iter().map(render_holder) }
                </div>
            }
        </>
    }
}

fn render_holder(holder: &AccountHolder) -> Html {
    html! {
        <div key={holder.id.clone()} class="flex items-center justify-between py-2">
            <div class="text-sm">
                <p class="text-gray-500 text-xs">{holder.label.clone()}</p>
                <p class="text-gray-700">{format!("{} {}", holder.bank, holder.number)}</p>
            </div>
            if holder.has_number() {
                <CopyButton
                    text={holder.number.clone()}
                    label="복사"
                    copied_label="복사됨"
                    class="text-xs px-3 py-1.5 bg-gray-100 hover:bg-gray-200 rounded-lg transition-colors"
                />
            }
        </div>
    }
}
