//! 商品详情页

use fournil_shared::{Product, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::use_favorites;
use crate::api::use_backend;
use crate::cart::CartStore;
use crate::components::icons::{ArrowLeft, Heart, ShoppingCart};
use crate::router::use_router;
use crate::routes::CustomerRoute;

#[component]
pub fn ProductDetailsPage(product_id: u64) -> impl IntoView {
    let backend = use_backend();
    let router = use_router::<CustomerRoute>();
    let cart = use_context::<CartStore>().expect("CartStore should be provided");
    let (favorite_ids, toggle_favorite) = use_favorites();

    let (product, set_product) = signal(Option::<Product>::None);
    let (loading, set_loading) = signal(true);
    let (quantity, set_quantity) = signal(1u32);
    let (adding, set_adding) = signal(false);

    {
        let service = backend.products.clone();
        spawn_local(async move {
            if let Ok(p) = service.get(product_id).await {
                set_product.set(Some(p));
            }
            set_loading.set(false);
        });
    }

    let is_favorite = move || favorite_ids.with(|ids| ids.contains(&product_id));

    let add_to_cart = move |_| {
        let cart = cart.clone();
        let qty = quantity.get_untracked();
        set_adding.set(true);
        spawn_local(async move {
            let _ = cart.add_to_cart(product_id, qty).await;
            set_adding.set(false);
        });
    };

    view! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <button
                class="btn btn-ghost btn-sm gap-2 mb-6"
                on:click=move |_| router.navigate(CustomerRoute::Menu)
            >
                <ArrowLeft class="h-4 w-4" />
                "Back to menu"
            </button>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {
                    let add_to_cart = add_to_cart.clone();
                    move || match product.get() {
                    None => view! {
                        <div class="text-center py-16 text-base-content/50">
                            "This product is no longer on our shelves."
                        </div>
                    }
                    .into_any(),
                    Some(p) => {
                        let discounted = p.is_discounted();
                        let effective = p.effective_price();
                        let available = p.available;
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                                <figure class="rounded-box overflow-hidden bg-base-200 h-80">
                                    <img src=p.image.clone() alt=p.name.clone() class="object-cover h-full w-full" />
                                </figure>
                                <div class="flex flex-col gap-4">
                                    <div class="flex items-start justify-between">
                                        <div>
                                            <h1 class="text-3xl font-bold">{p.name.clone()}</h1>
                                            <div class="badge badge-outline mt-2">{p.category.clone()}</div>
                                        </div>
                                        <button
                                            class=move || if is_favorite() {
                                                "btn btn-circle btn-outline text-error"
                                            } else {
                                                "btn btn-circle btn-outline"
                                            }
                                            on:click=move |_| toggle_favorite.run(product_id)
                                        >
                                            <Heart class="h-5 w-5" />
                                        </button>
                                    </div>

                                    <p class="text-base-content/70">{p.description.clone()}</p>

                                    <div class="flex items-baseline gap-3">
                                        <span class="text-3xl font-bold text-primary">
                                            {format_price(effective)}
                                        </span>
                                        <Show when=move || discounted>
                                            <span class="text-lg line-through text-base-content/40">
                                                {format_price(p.price)}
                                            </span>
                                        </Show>
                                    </div>

                                    <div class="flex items-center gap-4 mt-2">
                                        <div class="join">
                                            <button
                                                class="btn join-item"
                                                on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                                            >
                                                "-"
                                            </button>
                                            <span class="btn join-item no-animation pointer-events-none w-14">
                                                {move || quantity.get()}
                                            </span>
                                            <button
                                                class="btn join-item"
                                                on:click=move |_| set_quantity.update(|q| *q += 1)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                        <button
                                            class="btn btn-primary gap-2 flex-1"
                                            disabled=move || adding.get() || !available
                                            on:click=add_to_cart.clone()
                                        >
                                            <ShoppingCart class="h-5 w-5" />
                                            {move || if !available {
                                                "Sold out"
                                            } else if adding.get() {
                                                "Adding..."
                                            } else {
                                                "Add to cart"
                                            }}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    }
                }
                }
            </Show>
        </div>
    }
}
