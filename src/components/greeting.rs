// src/components/greeting.rs
use crate::invitation_config::Greeting;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GreetingSectionProps {
    pub greeting: Greeting,
}

#[function_component(GreetingSection)]
pub fn greeting_section(props: &GreetingSectionProps) -> Html {
    let greeting = &props.greeting;
    html! {
        <section class="py-24 px-8 bg-white">
            <div class="max-w-md mx-auto text-center">
                <h2 class="text-2xl font-light tracking-wider mb-12 text-gray-800">{greeting.heading.clone()}</h2>
                <div class="text-gray-600 leading-loose space-y-8 font-light">
                    <p>
                        { for greeting.lines.iter().map(|line| html! { <>{line.clone()}<br /></> }) }
                    </p>
                </div>

                <div class="mt-16 space-y-6 text-sm text-gray-500">
                    { for greeting.families.iter().map(|family| html! {
                        <div class="flex items-center justify-center space-x-3">
                            <span>{family.parents.clone()}</span>
                            <span class="text-xs">{family.relation.clone()}</span>
                            <span class="font-medium text-gray-700">{family.child.clone()}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
