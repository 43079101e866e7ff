//! 后台设置：管理员账户资料与环境信息

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ApiConfig;
use crate::notify::use_toaster;
use crate::session::SessionStore;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let toaster = use_toaster();

    let current = session.snapshot().user;
    let (full_name, set_full_name) = signal(
        current.as_ref().map(|u| u.full_name.clone()).unwrap_or_default(),
    );
    let (phone, set_phone) = signal(
        current
            .as_ref()
            .and_then(|u| u.phone_number.clone())
            .unwrap_or_default(),
    );
    let (saving, set_saving) = signal(false);

    let email = current.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let api_base = ApiConfig::from_env().base_url().to_string();

    let session_for_save = session.clone();
    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if full_name.get_untracked().trim().is_empty() {
            toaster.error("Name cannot be empty");
            return;
        }
        set_saving.set(true);
        let session = session_for_save.clone();
        spawn_local(async move {
            let phone_value = phone.get_untracked();
            let phone_opt =
                (!phone_value.trim().is_empty()).then(|| phone_value.trim().to_string());
            match session
                .update_profile(full_name.get_untracked().trim().to_string(), phone_opt)
                .await
            {
                Ok(_) => toaster.success("Settings saved"),
                Err(e) => toaster.error(e.message()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Settings"</h1>

            <form class="card bg-base-100 shadow-xl" on:submit=on_save>
                <div class="card-body space-y-2">
                    <h3 class="card-title">"Your account"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="s_name">
                                <span class="label-text">"Full name"</span>
                            </label>
                            <input
                                id="s_name"
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                prop:value=full_name
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="s_phone">
                                <span class="label-text">"Phone"</span>
                            </label>
                            <input
                                id="s_phone"
                                type="tel"
                                class="input input-bordered"
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                prop:value=phone
                            />
                        </div>
                    </div>
                    <p class="text-sm text-base-content/50">"Signed in as " {email}</p>
                    <div class="card-actions justify-end">
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </div>
                </div>
            </form>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Environment"</h3>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <tbody>
                                <tr>
                                    <td class="text-base-content/60">"API base URL"</td>
                                    <td class="font-mono text-sm">{api_base}</td>
                                </tr>
                                <tr>
                                    <td class="text-base-content/60">"Build"</td>
                                    <td class="font-mono text-sm">{env!("CARGO_PKG_VERSION")}</td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}
