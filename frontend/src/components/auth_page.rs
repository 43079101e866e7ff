//! 登录/注册页

use fournil_shared::Role;
use fournil_shared::protocol::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::Croissant;
use crate::session::SessionStore;

#[component]
pub fn AuthPage(
    /// 用户在身份选择页挑中的角色，仅影响文案
    role: Role,
    /// 认证成功回调，携带返回用户的实际角色
    #[prop(into)]
    on_authenticated: Callback<Role>,
) -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");

    let (signup_mode, set_signup_mode) = signal(false);
    let (full_name, set_full_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let headline = move || {
        if role == Role::Admin {
            "Back office sign in"
        } else if signup_mode.get() {
            "Create your account"
        } else {
            "Welcome back"
        }
    };

    let session_for_submit = session.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if email.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }
        // 注册的本地校验：两次密码一致才发请求
        if signup_mode.get() {
            if full_name.get().trim().is_empty() {
                set_error_msg.set(Some("Please tell us your name".to_string()));
                return;
            }
            if password.get() != confirm.get() {
                set_error_msg.set(Some("Passwords do not match".to_string()));
                return;
            }
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let session = session_for_submit.clone();
        spawn_local(async move {
            let result = if signup_mode.get_untracked() {
                let phone = phone.get_untracked();
                session
                    .signup(RegisterRequest {
                        full_name: full_name.get_untracked().trim().to_string(),
                        email: email.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                        phone_number: (!phone.trim().is_empty()).then(|| phone.trim().to_string()),
                    })
                    .await
            } else {
                session
                    .login(email.get_untracked().trim().to_string(), password.get_untracked())
                    .await
            };

            match result {
                Ok(user) => on_authenticated.run(user.role),
                Err(e) => set_error_msg.set(Some(e.message().to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Croissant class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">{headline}</h1>
                        <p class="text-base-content/70">
                            {move || if role == Role::Admin {
                                "Sign in with your staff account"
                            } else {
                                "Sign in or create an account to start ordering"
                            }}
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || signup_mode.get()>
                            <div class="form-control">
                                <label class="label" for="full_name">
                                    <span class="label-text">"Full name"</span>
                                </label>
                                <input
                                    id="full_name"
                                    type="text"
                                    placeholder="Marie Blanchard"
                                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                    prop:value=full_name
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="phone">
                                    <span class="label-text">"Phone (optional)"</span>
                                </label>
                                <input
                                    id="phone"
                                    type="tel"
                                    placeholder="06 00 00 00 00"
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                    prop:value=phone
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <Show when=move || signup_mode.get()>
                            <div class="form-control">
                                <label class="label" for="confirm">
                                    <span class="label-text">"Confirm password"</span>
                                </label>
                                <input
                                    id="confirm"
                                    type="password"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    prop:value=confirm
                                    class="input input-bordered"
                                />
                            </div>
                        </Show>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Please wait..." }.into_any()
                                } else if signup_mode.get() {
                                    "Create account".into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>

                        <Show when=move || role == Role::Customer>
                            <div class="text-center mt-2">
                                <a
                                    class="link link-primary text-sm"
                                    on:click=move |_| {
                                        set_error_msg.set(None);
                                        set_signup_mode.update(|m| *m = !*m);
                                    }
                                >
                                    {move || if signup_mode.get() {
                                        "Already have an account? Sign in"
                                    } else {
                                        "New here? Create an account"
                                    }}
                                </a>
                            </div>
                        </Show>
                    </form>
                </div>
            </div>
        </div>
    }
}
