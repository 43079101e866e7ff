//! 后台促销管理
//!
//! 促销通过商品的折扣百分比落库（走商品更新端点），
//! 没有独立的促销资源。

use std::str::FromStr;

use fournil_shared::protocol::UpdateProductRequest;
use fournil_shared::{Product, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;

use crate::api::use_backend;
use crate::components::icons::Tag;
use crate::notify::use_toaster;

#[component]
pub fn PromotionsPage() -> impl IntoView {
    let backend = use_backend();
    let toaster = use_toaster();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    let load = {
        let service = backend.products.clone();
        move || {
            let service = service.clone();
            set_loading.set(true);
            spawn_local(async move {
                match service.list().await {
                    Ok(list) => set_products.set(list),
                    Err(e) => toaster.error(e.message()),
                }
                set_loading.set(false);
            });
        }
    };
    load.clone()();

    // 设定或清除某个商品的折扣
    let load_after_apply = load.clone();
    let apply_discount = {
        let service = backend.products.clone();
        move |product: Product, discount: Option<Decimal>| {
            let service = service.clone();
            let reload = load_after_apply.clone();
            spawn_local(async move {
                let result = service
                    .update(UpdateProductRequest {
                        product_id: product.product_id,
                        name: product.name.clone(),
                        description: product.description.clone(),
                        category: product.category.clone(),
                        price: product.price,
                        image: product.image.clone(),
                        available: product.available,
                        discount_percent: discount,
                    })
                    .await;
                match result {
                    Ok(_) => {
                        toaster.success(match discount {
                            Some(d) => format!("{} is now {}% off", product.name, d),
                            None => format!("Promotion removed from {}", product.name),
                        });
                        reload();
                    }
                    Err(e) => toaster.error(e.message()),
                }
            });
        }
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <div class="flex items-center gap-3">
                <Tag class="h-7 w-7 text-primary" />
                <h1 class="text-3xl font-bold">"Promotions"</h1>
            </div>
            <p class="text-base-content/60">
                "Set a percentage discount per product. Discounted prices show up immediately in the storefront."
            </p>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <For
                        each=move || products.get()
                        key=|p| (p.product_id, p.discount_percent)
                        children={
                            let apply_discount = apply_discount.clone();
                            move |product| {
                                let (input, set_input) = signal(
                                    product
                                        .discount_percent
                                        .map(|d| d.to_string())
                                        .unwrap_or_default(),
                                );
                                let has_discount = product.is_discounted();
                                let effective = product.effective_price();
                                let apply = apply_discount.clone();
                                let clear = apply_discount.clone();
                                let product_for_apply = product.clone();
                                let product_for_clear = product.clone();

                                let on_apply = move |_| {
                                    let raw = input.get_untracked();
                                    match Decimal::from_str(raw.trim()) {
                                        Ok(d) if d > Decimal::ZERO && d < Decimal::from(100) => {
                                            apply.clone()(product_for_apply.clone(), Some(d));
                                        }
                                        _ => toaster.error("Discount must be between 0 and 100"),
                                    }
                                };

                                view! {
                                    <div class="card bg-base-100 shadow-md">
                                        <div class="card-body p-4">
                                            <div class="flex items-center justify-between">
                                                <div>
                                                    <h3 class="font-bold">{product.name.clone()}</h3>
                                                    <div class="flex items-baseline gap-2">
                                                        <span class="text-primary font-medium">
                                                            {format_price(effective)}
                                                        </span>
                                                        <Show when=move || has_discount>
                                                            <span class="text-xs line-through text-base-content/40">
                                                                {format_price(product.price)}
                                                            </span>
                                                        </Show>
                                                    </div>
                                                </div>
                                                <Show when=move || has_discount>
                                                    <span class="badge badge-secondary">
                                                        {product
                                                            .discount_percent
                                                            .map(|d| format!("-{}%", d))
                                                            .unwrap_or_default()}
                                                    </span>
                                                </Show>
                                            </div>
                                            <div class="join mt-2">
                                                <input
                                                    type="text"
                                                    inputmode="numeric"
                                                    placeholder="e.g. 20"
                                                    class="input input-bordered input-sm join-item w-24"
                                                    on:input=move |ev| set_input.set(event_target_value(&ev))
                                                    prop:value=input
                                                />
                                                <button
                                                    class="btn btn-primary btn-sm join-item"
                                                    on:click=on_apply
                                                >
                                                    "Apply"
                                                </button>
                                                <Show when=move || has_discount>
                                                    <button
                                                        class="btn btn-ghost btn-sm join-item"
                                                        on:click={
                                                            let clear = clear.clone();
                                                            let product = product_for_clear.clone();
                                                            move |_| clear.clone()(product.clone(), None)
                                                        }
                                                    >
                                                        "Clear"
                                                    </button>
                                                </Show>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
