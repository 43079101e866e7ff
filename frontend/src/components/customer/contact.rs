//! 联系页

use fournil_shared::ContactMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_backend;
use crate::components::icons::{Mail, MapPin};
use crate::notify::use_toaster;
use crate::session::SessionStore;

#[component]
pub fn ContactPage() -> impl IntoView {
    let backend = use_backend();
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let toaster = use_toaster();

    // 已登录用户的姓名与邮箱预填
    let current = session.snapshot().user;
    let (name, set_name) = signal(current.as_ref().map(|u| u.full_name.clone()).unwrap_or_default());
    let (email, set_email) = signal(current.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (sending, set_sending) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().trim().is_empty()
            || email.get_untracked().trim().is_empty()
            || message.get_untracked().trim().is_empty()
        {
            toaster.error("Please fill in your name, email and message");
            return;
        }

        set_sending.set(true);
        let service = backend.contact.clone();
        spawn_local(async move {
            let result = service
                .send(ContactMessage {
                    name: name.get_untracked().trim().to_string(),
                    email: email.get_untracked().trim().to_string(),
                    subject: subject.get_untracked().trim().to_string(),
                    message: message.get_untracked().trim().to_string(),
                })
                .await;
            match result {
                Ok(()) => {
                    toaster.success("Message sent — we will get back to you soon");
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(e) => toaster.error(e.message()),
            }
            set_sending.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8 grid grid-cols-1 md:grid-cols-2 gap-8">
            <div class="space-y-4">
                <h1 class="text-3xl font-bold">"Talk to us"</h1>
                <p class="text-base-content/70">
                    "Questions about an order, allergens or a custom cake? Drop us a line."
                </p>
                <div class="flex items-center gap-3 text-base-content/70">
                    <MapPin class="h-5 w-5 text-primary" />
                    "1 Rue du Four, 69001 Lyon"
                </div>
                <div class="flex items-center gap-3 text-base-content/70">
                    <Mail class="h-5 w-5 text-primary" />
                    "hello@fournil.example"
                </div>
            </div>

            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body space-y-2">
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="contact_name">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="contact_name"
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                prop:value=name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="contact_email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="contact_email"
                                type="email"
                                class="input input-bordered"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label class="label" for="contact_subject">
                            <span class="label-text">"Subject (optional)"</span>
                        </label>
                        <input
                            id="contact_subject"
                            type="text"
                            class="input input-bordered"
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                            prop:value=subject
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="contact_message">
                            <span class="label-text">"Message"</span>
                        </label>
                        <textarea
                            id="contact_message"
                            class="textarea textarea-bordered h-28"
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                            prop:value=message
                        ></textarea>
                    </div>
                    <div class="form-control mt-2">
                        <button class="btn btn-primary" disabled=move || sending.get()>
                            {move || if sending.get() { "Sending..." } else { "Send message" }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
