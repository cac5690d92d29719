use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::social::SocialIcons;
use crate::contact::form::{submit, ContactForm, Field};
use crate::contact::relay::EmailJsRelay;
use crate::content::PROFILE;

const INPUT_CLASS: &str = "w-full bg-[#191b1e] border dark:border-[#191b1e] rounded-md px-4 py-3 text-text-dark focus:border-primary focus:outline-none shadow-inner";
const CONTACT_IMAGE: &str = "https://img.freepik.com/free-photo/contact-us-communication-official-message-concept_53876-124316.jpg";

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="py-16 border-t border-gray-800">
            <div class="text-center mb-16">
                <p class="text-sm font-medium uppercase tracking-widest text-primary mb-2">{"Contact"}</p>
                <h2 class="text-4xl font-bold text-text-light font-display">{"Contact With Me"}</h2>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                <div class="bg-card-dark p-8 rounded-lg shadow-custom-dark hover:-translate-y-2 transition-transform duration-300">
                    <div class="w-full h-48 mb-6 overflow-hidden rounded-lg">
                        <img
                            src={CONTACT_IMAGE}
                            alt="Contact"
                            class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                        />
                    </div>
                    <h3 class="text-2xl font-bold text-white mb-4">{PROFILE.name}</h3>
                    <p class="text-text-light mb-4">{PROFILE.title}</p>
                    <p class="text-text-light mb-4">{PROFILE.availability}</p>
                    <div class="mb-4">
                        <p class="text-text-light"><span class="text-white font-medium">{"Phone: "}</span>{PROFILE.phone}</p>
                        <p class="text-text-light"><span class="text-white font-medium">{"Email: "}</span>{PROFILE.email}</p>
                    </div>
                    <div>
                        <p class="text-xs font-medium uppercase tracking-widest text-gray-600 dark:text-text-light mb-4 text-left">{"Find with me"}</p>
                        <SocialIcons />
                    </div>
                </div>

                <div class="md:col-span-2 bg-card-dark p-8 rounded-lg shadow-custom-dark">
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

#[function_component(MessageForm)]
fn message_form() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let update = use_update();
    let relay = use_memo(|_| EmailJsRelay::from_config(), ());

    let on_field = |field: Field| {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |value: String| {
            form.borrow_mut().set(field, value);
            update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let update = update.clone();
        let relay = relay.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = form.clone();
            let update = update.clone();
            let relay = relay.clone();
            spawn_local(async move {
                if let Err(rejected) = submit(&form, &*relay, || update()).await {
                    debug!("Submit not started: {}", rejected);
                }
            });
        })
    };

    let state = form.borrow();
    let sending = state.is_sending();

    let field_box = |field: Field, wide: bool| {
        let value = state.fields().get(field).to_string();
        let changed = on_field(field);
        let control = if field == Field::Message {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                changed.emit(input.value());
            });
            html! { <textarea name={field.key()} rows="6" {value} {oninput} class={INPUT_CLASS} required={true}></textarea> }
        } else {
            let kind = if field == Field::Email { "email" } else { "text" };
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                changed.emit(input.value());
            });
            html! { <input name={field.key()} type={kind} {value} {oninput} class={INPUT_CLASS} required={true} /> }
        };

        html! {
            <div class={if wide { "md:col-span-2" } else { "md:col-span-1" }}>
                <label class="block text-text-light text-sm font-medium mb-2 uppercase tracking-wide">{field.label()}</label>
                { control }
                if let Some(error) = state.error_for(field) {
                    <p class="mt-2 text-sm text-red-400">{error.to_string()}</p>
                }
            </div>
        }
    };

    html! {
        <form class="grid grid-cols-1 md:grid-cols-2 gap-6" {onsubmit}>
            { field_box(Field::Name, false) }
            { field_box(Field::Phone, false) }
            { field_box(Field::Email, true) }
            { field_box(Field::Subject, true) }
            { field_box(Field::Message, true) }
            <div class="md:col-span-2">
                <button
                    type="submit"
                    disabled={sending}
                    class="w-full dark:bg-card-dark text-primary uppercase font-medium py-4 rounded-lg shadow-custom-dark hover:-translate-y-1 transition-all duration-300 border border-transparent cursor-pointer hover:border-primary"
                >
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
                if let Some(message) = state.result_message() {
                    <p class="mt-4 text-center text-primary">{message}</p>
                }
            </div>
        </form>
    }
}
