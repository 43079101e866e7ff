//! 商品卡片

use std::collections::HashSet;

use fournil_shared::{Product, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::CartStore;
use crate::components::icons::{Heart, ShoppingCart};
use crate::router::use_router;
use crate::routes::CustomerRoute;

#[component]
pub fn ProductCard(
    product: Product,
    /// 当前用户收藏的商品 id 集合，由父页面维护
    favorite_ids: RwSignal<HashSet<u64>>,
    /// 收藏切换回调，参数为商品 id
    #[prop(into)]
    on_toggle_favorite: Callback<u64>,
) -> impl IntoView {
    let router = use_router::<CustomerRoute>();
    let cart = use_context::<CartStore>().expect("CartStore should be provided");

    let product_id = product.product_id;
    let discounted = product.is_discounted();
    let price = product.price;
    let effective = product.effective_price();
    let available = product.available;
    let (adding, set_adding) = signal(false);

    let is_favorite = move || favorite_ids.with(|ids| ids.contains(&product_id));

    let add = move |_| {
        let cart = cart.clone();
        set_adding.set(true);
        spawn_local(async move {
            let _ = cart.add_to_cart(product_id, 1).await;
            set_adding.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
            <figure
                class="h-44 bg-base-200 cursor-pointer"
                on:click=move |_| router.navigate(CustomerRoute::Product(product_id))
            >
                <img src=product.image.clone() alt=product.name.clone() class="object-cover h-full w-full" />
            </figure>
            <div class="card-body p-4">
                <div class="flex items-start justify-between">
                    <h3
                        class="card-title text-base cursor-pointer"
                        on:click=move |_| router.navigate(CustomerRoute::Product(product_id))
                    >
                        {product.name.clone()}
                    </h3>
                    <button
                        class=move || if is_favorite() {
                            "btn btn-ghost btn-xs btn-circle text-error"
                        } else {
                            "btn btn-ghost btn-xs btn-circle"
                        }
                        on:click=move |_| on_toggle_favorite.run(product_id)
                    >
                        <Heart class="h-4 w-4" />
                    </button>
                </div>
                <p class="text-sm text-base-content/60">{product.category.clone()}</p>
                <div class="flex items-center justify-between mt-2">
                    <div class="flex items-baseline gap-2">
                        <span class="font-bold text-primary">{format_price(effective)}</span>
                        <Show when=move || discounted>
                            <span class="text-xs line-through text-base-content/40">
                                {format_price(price)}
                            </span>
                        </Show>
                    </div>
                    <button
                        class="btn btn-primary btn-sm gap-1"
                        disabled=move || adding.get() || !available
                        on:click=add
                    >
                        <ShoppingCart class="h-4 w-4" />
                        {move || if available { "Add" } else { "Sold out" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
