// src/components/contacts.rs
use crate::invitation_config::Contact;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub contacts: Vec<Contact>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    html! {
        <section class="py-24 bg-white">
            <div class="max-w-md mx-auto px-8">
                <h2 class="text-2xl font-light tracking-wider text-center mb-12 text-gray-800">{"연락처"}</h2>

                <div class="grid grid-cols-2 gap-4">
                    { for props.contacts.iter().enumerate().map(|(idx, contact)| html! {
                        <a
                            key={idx}
                            href={contact.tel_href()}
                            class="group p-6 text-center hover:bg-neutral-50 rounded-xl transition-colors"
                        >
                            <p class="text-xs text-gray-500 mb-1">{contact.role.clone()}</p>
                            <p class="font-medium text-gray-800 mb-3">{contact.name.clone()}</p>
                            <div class="inline-flex items-center justify-center w-10 h-10 bg-rose-50 group-hover:bg-rose-100 rounded-full transition-colors text-rose-400">
                                {"☎"}
                            </div>
                        </a>
                    }) }
                </div>
            </div>
        </section>
    }
}
