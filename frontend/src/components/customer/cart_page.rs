//! 购物车与结算页

use std::sync::Arc;

use fournil_shared::format_price;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_backend;
use crate::cart::CartStore;
use crate::checkout::Checkout;
use crate::components::icons::{Minus, Plus, ShoppingCart, Trash2};
use crate::notify::use_toaster;
use crate::router::use_router;
use crate::routes::CustomerRoute;
use crate::session::SessionStore;

#[component]
pub fn CartPage() -> impl IntoView {
    let backend = use_backend();
    let router = use_router::<CustomerRoute>();
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let cart = use_context::<CartStore>().expect("CartStore should be provided");
    let toaster = use_toaster();

    let checkout = Checkout::new(
        cart.clone(),
        Arc::new(backend.orders.clone()),
        session.user_signal(),
        toaster,
    );

    let lines = cart.lines();
    let subtotal = cart.subtotal();
    let item_count = cart.item_count();

    // 弹窗开合与 <dialog> 元素同步
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let dialog_open = checkout.dialog_open;
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if dialog_open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let change_quantity = {
        let cart = cart.clone();
        move |product_id: u64, quantity: i64| {
            let cart = cart.clone();
            spawn_local(async move {
                let _ = cart.update_quantity(product_id, quantity).await;
            });
        }
    };

    let remove_line = {
        let cart = cart.clone();
        move |product_id: u64| {
            let cart = cart.clone();
            spawn_local(async move {
                cart.remove_from_cart(product_id).await;
            });
        }
    };

    let checkout_for_begin = checkout.clone();
    let checkout_for_submit = checkout.clone();
    let form = checkout.form;
    let submitting = checkout.submitting;

    let on_confirm = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let checkout = checkout_for_submit.clone();
        spawn_local(async move {
            let _ = checkout.confirm().await;
        });
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6">"Your cart"</h1>

            <Show
                when=move || !lines.get().is_empty()
                fallback=move || view! {
                    <div class="text-center py-16">
                        <div class="flex justify-center text-base-content/30 mb-4">
                            <ShoppingCart class="h-16 w-16" />
                        </div>
                        <p class="text-base-content/60 mb-6">"Your cart is empty."</p>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| router.navigate(CustomerRoute::Menu)
                        >
                            "Browse the menu"
                        </button>
                    </div>
                }
            >
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="overflow-x-auto w-full">
                            <table class="table w-full">
                                <thead>
                                    <tr>
                                        <th>"Item"</th>
                                        <th>"Price"</th>
                                        <th>"Quantity"</th>
                                        <th>"Total"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || lines.get()
                                        key=|line| (line.id, line.quantity)
                                        children={
                                            let change_quantity = change_quantity.clone();
                                            let remove_line = remove_line.clone();
                                            move |line| {
                                                let pid = line.product_id;
                                                let qty = line.quantity as i64;
                                                let dec = change_quantity.clone();
                                                let inc = change_quantity.clone();
                                                let rm = remove_line.clone();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <div class="flex items-center gap-3">
                                                                <div class="avatar">
                                                                    <div class="w-12 h-12 rounded bg-base-200">
                                                                        <img src=line.image.clone() alt=line.name.clone() />
                                                                    </div>
                                                                </div>
                                                                <span class="font-medium">{line.name.clone()}</span>
                                                            </div>
                                                        </td>
                                                        <td>{format_price(line.price)}</td>
                                                        <td>
                                                            <div class="join">
                                                                <button
                                                                    class="btn btn-xs join-item"
                                                                    on:click=move |_| dec.clone()(pid, qty - 1)
                                                                >
                                                                    <Minus class="h-3 w-3" />
                                                                </button>
                                                                <span class="btn btn-xs join-item no-animation pointer-events-none w-10">
                                                                    {line.quantity}
                                                                </span>
                                                                <button
                                                                    class="btn btn-xs join-item"
                                                                    on:click=move |_| inc.clone()(pid, qty + 1)
                                                                >
                                                                    <Plus class="h-3 w-3" />
                                                                </button>
                                                            </div>
                                                        </td>
                                                        <td class="font-medium">{format_price(line.line_total())}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn-ghost btn-xs text-error"
                                                                on:click=move |_| rm.clone()(pid)
                                                            >
                                                                <Trash2 class="h-4 w-4" />
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                        <div class="flex items-center justify-between p-6 border-t border-base-200">
                            <div>
                                <p class="text-base-content/60 text-sm">
                                    {move || format!("{} items", item_count.get())}
                                </p>
                                <p class="text-2xl font-bold">
                                    {move || format_price(subtotal.get())}
                                </p>
                            </div>
                            <button
                                class="btn btn-primary btn-lg"
                                on:click={
                                    let checkout_for_begin = checkout_for_begin.clone();
                                    move |_| checkout_for_begin.begin()
                                }
                            >
                                "Check out"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            // 配送地址弹窗
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| dialog_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"Delivery address"</h3>
                    <p class="py-2 text-base-content/70">"Where should we bring your order?"</p>

                    <form on:submit=on_confirm class="space-y-3">
                        <div class="form-control">
                            <label for="street" class="label">
                                <span class="label-text">"Street"</span>
                            </label>
                            <input
                                id="street"
                                type="text"
                                placeholder="1 Rue du Four"
                                on:input=move |ev| form.street.set(event_target_value(&ev))
                                prop:value=form.street
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label for="city" class="label">
                                    <span class="label-text">"City"</span>
                                </label>
                                <input
                                    id="city"
                                    type="text"
                                    placeholder="Lyon"
                                    on:input=move |ev| form.city.set(event_target_value(&ev))
                                    prop:value=form.city
                                    class="input input-bordered w-full"
                                />
                            </div>
                            <div class="form-control">
                                <label for="state" class="label">
                                    <span class="label-text">"State / Region"</span>
                                </label>
                                <input
                                    id="state"
                                    type="text"
                                    placeholder="Rhone"
                                    on:input=move |ev| form.input_state(&event_target_value(&ev))
                                    prop:value=form.state
                                    class="input input-bordered w-full"
                                />
                            </div>
                        </div>
                        <div class="form-control">
                            <label for="zip" class="label">
                                <span class="label-text">"Zip code"</span>
                            </label>
                            <input
                                id="zip"
                                type="text"
                                inputmode="numeric"
                                placeholder="69001"
                                on:input=move |ev| form.input_zip(&event_target_value(&ev))
                                prop:value=form.zip_code
                                class="input input-bordered w-full"
                            />
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| dialog_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Placing order..." }.into_any()
                                } else {
                                    "Confirm order".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
                <form method="dialog" class="modal-backdrop">
                    <button>"close"</button>
                </form>
            </dialog>
        </div>
    }
}
