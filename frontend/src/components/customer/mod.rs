//! 顾客端
//!
//! 挂载顾客路由树；导航栏/页脚常驻，中间区域由路由决定。

pub mod about;
pub mod cart_page;
pub mod contact;
pub mod home;
pub mod menu;
pub mod navbar;
pub mod product_card;
pub mod product_details;
pub mod profile;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_backend;
use crate::router::provide_router;
use crate::routes::CustomerRoute;
use crate::session::SessionStore;

use about::AboutPage;
use cart_page::CartPage;
use contact::ContactPage;
use home::HomePage;
use menu::MenuPage;
use navbar::CustomerNavbar;
use product_details::ProductDetailsPage;
use profile::ProfilePage;

/// 收藏集合 + 切换回调
///
/// 商品卡片与详情页共用：本地集合先行翻转，远端失败时回滚并提示。
pub(crate) fn use_favorites() -> (RwSignal<HashSet<u64>>, Callback<u64>) {
    let backend = use_backend();
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let toaster = crate::notify::use_toaster();

    let ids = RwSignal::new(HashSet::<u64>::new());

    // 初始加载一次
    if let Some(user) = session.snapshot().user {
        let favorites = backend.favorites.clone();
        spawn_local(async move {
            if let Ok(products) = favorites.list(user.user_id).await {
                ids.set(products.into_iter().map(|p| p.product_id).collect());
            }
        });
    }

    let toggle = Callback::new(move |product_id: u64| {
        let Some(user) = session.snapshot().user else {
            toaster.error("Please sign in first");
            return;
        };
        let was_favorite = ids.with_untracked(|set| set.contains(&product_id));
        ids.update(|set| {
            if was_favorite {
                set.remove(&product_id);
            } else {
                set.insert(product_id);
            }
        });

        let favorites = backend.favorites.clone();
        spawn_local(async move {
            let result = if was_favorite {
                favorites.remove(user.user_id, product_id).await
            } else {
                favorites.add(user.user_id, product_id).await
            };
            if let Err(e) = result {
                // 回滚本地翻转
                ids.update(|set| {
                    if was_favorite {
                        set.insert(product_id);
                    } else {
                        set.remove(&product_id);
                    }
                });
                toaster.error(e.message());
            }
        });
    });

    (ids, toggle)
}

#[component]
pub fn CustomerApp() -> impl IntoView {
    let router = provide_router::<CustomerRoute>();

    view! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <CustomerNavbar />
            <main class="flex-1">
                {move || match router.current().get() {
                    CustomerRoute::Home => view! { <HomePage /> }.into_any(),
                    CustomerRoute::Menu => view! { <MenuPage /> }.into_any(),
                    CustomerRoute::Product(id) => {
                        view! { <ProductDetailsPage product_id=id /> }.into_any()
                    }
                    CustomerRoute::Cart => view! { <CartPage /> }.into_any(),
                    CustomerRoute::Profile => view! { <ProfilePage /> }.into_any(),
                    CustomerRoute::Contact => view! { <ContactPage /> }.into_any(),
                    CustomerRoute::About => view! { <AboutPage /> }.into_any(),
                    CustomerRoute::NotFound => view! {
                        <div class="flex items-center justify-center min-h-[60vh]">
                            <div class="text-center">
                                <h1 class="text-6xl font-bold text-error">"404"</h1>
                                <p class="text-xl mt-4">"This shelf is empty"</p>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
            <footer class="footer footer-center p-6 bg-base-200 text-base-content/70">
                <aside>
                    <p class="font-bold">"Fournil — artisan bakery"</p>
                    <p>"Baked daily since 1987 · 1 Rue du Four, Lyon"</p>
                </aside>
            </footer>
        </div>
    }
}
