//! 首页

use fournil_shared::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::product_card::ProductCard;
use super::use_favorites;
use crate::api::use_backend;
use crate::router::use_router;
use crate::routes::CustomerRoute;

/// 首页展示的招牌商品数量
const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let backend = use_backend();
    let router = use_router::<CustomerRoute>();
    let (favorite_ids, toggle_favorite) = use_favorites();

    let (featured, set_featured) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);

    {
        let products = backend.products.clone();
        spawn_local(async move {
            if let Ok(mut list) = products.list().await {
                list.truncate(FEATURED_COUNT);
                set_featured.set(list);
            }
            set_loading.set(false);
        });
    }

    view! {
        <div>
            <div class="hero min-h-[50vh] bg-base-200">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">"Baked fresh, every morning"</h1>
                        <p class="py-6 text-base-content/70">
                            "Sourdough loaves, buttery croissants and seasonal tarts, made by hand
                            in our Lyon atelier and delivered to your door."
                        </p>
                        <button
                            class="btn btn-primary btn-lg"
                            on:click=move |_| router.navigate(CustomerRoute::Menu)
                        >
                            "Browse the menu"
                        </button>
                    </div>
                </div>
            </div>

            <div class="max-w-6xl mx-auto px-4 py-10">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-2xl font-bold">"From the oven today"</h2>
                    <a
                        class="link link-primary"
                        on:click=move |_| router.navigate(CustomerRoute::Menu)
                    >
                        "See everything"
                    </a>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        <For
                            each=move || featured.get()
                            key=|p| p.product_id
                            children=move |product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        favorite_ids=favorite_ids
                                        on_toggle_favorite=toggle_favorite
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
