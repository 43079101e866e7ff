//! 商品目录页：搜索 + 分类筛选

use fournil_shared::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::product_card::ProductCard;
use super::use_favorites;
use crate::api::use_backend;
use crate::components::icons::Search;
use crate::notify::use_toaster;

const CATEGORIES: &[&str] = &["Bread", "Viennoiserie", "Pastry", "Cake", "Sandwich"];

#[component]
pub fn MenuPage() -> impl IntoView {
    let backend = use_backend();
    let toaster = use_toaster();
    let (favorite_ids, toggle_favorite) = use_favorites();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(Option::<&'static str>::None);

    // 三种加载模式共用的收尾
    let apply = move |result: Result<Vec<Product>, fournil_shared::error::ApiError>| {
        match result {
            Ok(list) => set_products.set(list),
            Err(e) => toaster.error(e.message()),
        }
        set_loading.set(false);
    };

    let load_all = {
        let service = backend.products.clone();
        move || {
            let service = service.clone();
            set_loading.set(true);
            spawn_local(async move { apply(service.list().await) });
        }
    };

    let search = {
        let service = backend.products.clone();
        move |q: String| {
            let service = service.clone();
            set_loading.set(true);
            spawn_local(async move { apply(service.search(q).await) });
        }
    };

    let load_category = {
        let service = backend.products.clone();
        move |cat: &'static str| {
            let service = service.clone();
            set_loading.set(true);
            spawn_local(async move { apply(service.by_category(cat).await) });
        }
    };

    // 初始加载
    load_all.clone()();

    let load_all_for_submit = load_all.clone();
    let search_for_submit = search.clone();
    let on_search = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_category.set(None);
        let q = query.get_untracked().trim().to_string();
        if q.is_empty() {
            load_all_for_submit.clone()();
        } else {
            search_for_submit.clone()(q);
        }
    };

    let pick_category = move |cat: &'static str| {
        set_query.set(String::new());
        if category.get_untracked() == Some(cat) {
            set_category.set(None);
            load_all.clone()();
        } else {
            set_category.set(Some(cat));
            load_category.clone()(cat);
        }
    };

    view! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-6">"Our menu"</h1>

            <div class="flex flex-col md:flex-row md:items-center gap-4 mb-6">
                <form class="join flex-1" on:submit=on_search>
                    <input
                        type="text"
                        placeholder="Search for a bake..."
                        class="input input-bordered join-item w-full"
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        prop:value=query
                    />
                    <button type="submit" class="btn btn-primary join-item">
                        <Search class="h-4 w-4" />
                    </button>
                </form>
                <div class="flex flex-wrap gap-2">
                    {CATEGORIES
                        .iter()
                        .map(move |&cat| {
                            let pick = pick_category.clone();
                            view! {
                                <button
                                    class=move || if category.get() == Some(cat) {
                                        "badge badge-primary badge-lg cursor-pointer"
                                    } else {
                                        "badge badge-outline badge-lg cursor-pointer"
                                    }
                                    on:click=move |_| pick.clone()(cat)
                                >
                                    {cat}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || !products.get().is_empty()
                    fallback=|| view! {
                        <div class="text-center py-16 text-base-content/50">
                            "Nothing matched — try another search."
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || products.get()
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
            </Show>
        </div>
    }
}
