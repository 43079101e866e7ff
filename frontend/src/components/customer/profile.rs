//! 个人资料页：账户信息、订单历史、收藏

use fournil_shared::{Order, Product, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::orders::OrderGateway;
use crate::api::use_backend;
use crate::components::icons::{Heart, UserRound};
use crate::notify::use_toaster;
use crate::session::SessionStore;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let backend = use_backend();
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let toaster = use_toaster();

    let user = session.user_signal();
    let user_id = session.snapshot().user.map(|u| u.user_id).unwrap_or_default();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (favorites, set_favorites) = signal(Vec::<Product>::new());
    let (editing, set_editing) = signal(false);
    let (full_name, set_full_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let load_orders = {
        let service = backend.orders.clone();
        move || {
            let service = service.clone();
            spawn_local(async move {
                if let Ok(list) = service.for_user(user_id).await {
                    set_orders.set(list);
                }
            });
        }
    };

    let load_favorites = {
        let service = backend.favorites.clone();
        move || {
            let service = service.clone();
            spawn_local(async move {
                if let Ok(list) = service.list(user_id).await {
                    set_favorites.set(list);
                }
            });
        }
    };

    load_orders.clone()();
    load_favorites.clone()();

    let begin_edit = move |_| {
        if let Some(u) = user.get_untracked() {
            set_full_name.set(u.full_name);
            set_phone.set(u.phone_number.unwrap_or_default());
            set_editing.set(true);
        }
    };

    let session_for_save = session.clone();

    let load_orders_after_cancel = load_orders.clone();
    let cancel_order = {
        let service = backend.orders.clone();
        move |order_id: u64| {
            let service = service.clone();
            let reload = load_orders_after_cancel.clone();
            spawn_local(async move {
                match service.cancel(order_id).await {
                    Ok(_) => {
                        toaster.success("Order cancelled");
                        reload();
                    }
                    Err(e) => toaster.error(e.message()),
                }
            });
        }
    };

    let remove_favorite = {
        let service = backend.favorites.clone();
        let reload = load_favorites.clone();
        move |product_id: u64| {
            let service = service.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match service.remove(user_id, product_id).await {
                    Ok(()) => reload(),
                    Err(e) => toaster.error(e.message()),
                }
            });
        }
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8 space-y-8">
            // 账户信息
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center gap-4">
                        <div class="avatar placeholder">
                            <div class="bg-primary/10 text-primary rounded-full w-16 p-3">
                                <UserRound class="h-10 w-10" />
                            </div>
                        </div>
                        <div class="flex-1">
                            <h2 class="card-title">
                                {move || user.get().map(|u| u.full_name).unwrap_or_default()}
                            </h2>
                            <p class="text-base-content/60">
                                {move || user.get().map(|u| u.email).unwrap_or_default()}
                            </p>
                            <p class="text-base-content/60 text-sm">
                                {move || {
                                    user.get()
                                        .and_then(|u| u.phone_number)
                                        .unwrap_or_else(|| "No phone on file".to_string())
                                }}
                            </p>
                        </div>
                        <button class="btn btn-outline btn-sm" on:click=begin_edit>
                            "Edit profile"
                        </button>
                    </div>

                    <Show when=move || editing.get()>
                        <form class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-4" on:submit={
                            let session_for_save = session_for_save.clone();
                            move |ev: leptos::web_sys::SubmitEvent| {
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
                                        Ok(_) => {
                                            toaster.success("Profile updated");
                                            set_editing.set(false);
                                        }
                                        Err(e) => toaster.error(e.message()),
                                    }
                                    set_saving.set(false);
                                });
                            }
                        }>
                            <div class="form-control">
                                <label class="label" for="edit_name">
                                    <span class="label-text">"Full name"</span>
                                </label>
                                <input
                                    id="edit_name"
                                    type="text"
                                    class="input input-bordered"
                                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                                    prop:value=full_name
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="edit_phone">
                                    <span class="label-text">"Phone"</span>
                                </label>
                                <input
                                    id="edit_phone"
                                    type="tel"
                                    class="input input-bordered"
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                    prop:value=phone
                                />
                            </div>
                            <div class="form-control justify-end flex-row items-end gap-2">
                                <button
                                    type="button"
                                    class="btn btn-ghost"
                                    on:click=move |_| set_editing.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </Show>
                </div>
            </div>

            // 订单历史
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="p-6 pb-2">
                        <h3 class="card-title">"Order history"</h3>
                    </div>
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Order"</th>
                                    <th>"Items"</th>
                                    <th>"Total"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || orders.get().is_empty()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "No orders yet — your first loaf awaits."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || orders.get()
                                    key=|o| (o.order_id, o.status)
                                    children={
                                        let cancel_order = cancel_order.clone();
                                        move |order| {
                                            let id = order.order_id;
                                            let can_cancel = order.status.can_cancel();
                                            let cancel = cancel_order.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-mono">"#" {order.order_id}</td>
                                                    <td>{order.items.iter().map(|i| i.quantity).sum::<u32>()} " items"</td>
                                                    <td>{format_price(order.total_amount)}</td>
                                                    <td>
                                                        <span class="badge badge-outline">
                                                            {order.status.label()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <Show when=move || can_cancel>
                                                            <button
                                                                class="btn btn-ghost btn-xs text-error"
                                                                on:click={
                                                                    let cancel = cancel.clone();
                                                                    move |_| cancel.clone()(id)
                                                                }
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </Show>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            // 收藏
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title gap-2">
                        <Heart class="h-5 w-5 text-error" />
                        "Favorites"
                    </h3>
                    <Show
                        when=move || !favorites.get().is_empty()
                        fallback=|| view! {
                            <p class="text-base-content/50 py-4">"Nothing saved yet."</p>
                        }
                    >
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            <For
                                each=move || favorites.get()
                                key=|p| p.product_id
                                children={
                                    let remove_favorite = remove_favorite.clone();
                                    move |product| {
                                        let id = product.product_id;
                                        let remove = remove_favorite.clone();
                                        view! {
                                            <div class="flex items-center justify-between bg-base-200 rounded-box p-3">
                                                <div>
                                                    <p class="font-medium">{product.name.clone()}</p>
                                                    <p class="text-sm text-base-content/60">
                                                        {format_price(product.effective_price())}
                                                    </p>
                                                </div>
                                                <button
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| remove.clone()(id)
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                        }
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
