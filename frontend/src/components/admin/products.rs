//! 后台商品管理：目录表格 + 新建/编辑弹窗

use std::str::FromStr;

use fournil_shared::error::ApiResult;
use fournil_shared::protocol::{CreateProductRequest, UpdateProductRequest};
use fournil_shared::{Product, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;

use crate::api::use_backend;
use crate::components::icons::{Plus, Trash2};
use crate::notify::use_toaster;

// =========================================================
// 表单状态
// =========================================================

/// 商品表单状态
///
/// 将零散的 signal 整合为一个结构体，负责持有、重置与请求转换。
/// `RwSignal` 实现 `Copy`，适合在组件间传递。
#[derive(Clone, Copy)]
struct ProductForm {
    /// 编辑模式下为目标商品 id
    editing_id: RwSignal<Option<u64>>,
    name: RwSignal<String>,
    description: RwSignal<String>,
    category: RwSignal<String>,
    price: RwSignal<String>,
    image: RwSignal<String>,
    available: RwSignal<bool>,
    /// 编辑时透传既有折扣，避免保存动作清掉促销
    discount_percent: RwSignal<Option<Decimal>>,
}

impl ProductForm {
    fn new() -> Self {
        Self {
            editing_id: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new("Bread".to_string()),
            price: RwSignal::new(String::new()),
            image: RwSignal::new(String::new()),
            available: RwSignal::new(true),
            discount_percent: RwSignal::new(None),
        }
    }

    fn reset(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.description.set(String::new());
        self.category.set("Bread".to_string());
        self.price.set(String::new());
        self.image.set(String::new());
        self.available.set(true);
        self.discount_percent.set(None);
    }

    fn load(&self, product: &Product) {
        self.editing_id.set(Some(product.product_id));
        self.name.set(product.name.clone());
        self.description.set(product.description.clone());
        self.category.set(product.category.clone());
        self.price.set(product.price.to_string());
        self.image.set(product.image.clone());
        self.available.set(product.available);
        self.discount_percent.set(product.discount_percent);
    }

    /// 校验并转换为请求；价格必须是合法的十进制数
    fn parse(&self) -> Result<(String, String, String, Decimal, String, bool), &'static str> {
        let name = self.name.get_untracked().trim().to_string();
        if name.is_empty() {
            return Err("Name is required");
        }
        let price = Decimal::from_str(self.price.get_untracked().trim())
            .map_err(|_| "Price must be a number")?;
        if price < Decimal::ZERO {
            return Err("Price cannot be negative");
        }
        Ok((
            name,
            self.description.get_untracked().trim().to_string(),
            self.category.get_untracked(),
            price,
            self.image.get_untracked().trim().to_string(),
            self.available.get_untracked(),
        ))
    }
}

const CATEGORIES: &[&str] = &["Bread", "Viennoiserie", "Pastry", "Cake", "Sandwich"];

// =========================================================
// 页面
// =========================================================

#[component]
pub fn ProductsPage() -> impl IntoView {
    let backend = use_backend();
    let toaster = use_toaster();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (dialog_open, set_dialog_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let form = ProductForm::new();

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
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

    let open_create = move |_| {
        form.reset();
        set_dialog_open.set(true);
    };

    let load_for_save = load.clone();
    let save_service = backend.products.clone();
    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let (name, description, category, price, image, available) = match form.parse() {
            Ok(fields) => fields,
            Err(message) => {
                toaster.error(message);
                return;
            }
        };

        set_saving.set(true);
        let service = save_service.clone();
        let reload = load_for_save.clone();
        let editing_id = form.editing_id.get_untracked();
        let discount_percent = form.discount_percent.get_untracked();
        spawn_local(async move {
            let result: ApiResult<Product> = match editing_id {
                Some(product_id) => {
                    service
                        .update(UpdateProductRequest {
                            product_id,
                            name,
                            description,
                            category,
                            price,
                            image,
                            available,
                            discount_percent,
                        })
                        .await
                }
                None => {
                    service
                        .create(CreateProductRequest {
                            name,
                            description,
                            category,
                            price,
                            image,
                            available,
                            discount_percent,
                        })
                        .await
                }
            };
            match result {
                Ok(_) => {
                    toaster.success(if editing_id.is_some() {
                        "Product updated"
                    } else {
                        "Product created"
                    });
                    set_dialog_open.set(false);
                    form.reset();
                    reload();
                }
                Err(e) => toaster.error(e.message()),
            }
            set_saving.set(false);
        });
    };

    let delete_service = backend.products.clone();
    let load_for_delete = load.clone();
    let delete_product = move |product_id: u64| {
        let service = delete_service.clone();
        let reload = load_for_delete.clone();
        spawn_local(async move {
            match service.delete(product_id).await {
                Ok(()) => {
                    toaster.success("Product removed");
                    reload();
                }
                Err(e) => toaster.error(e.message()),
            }
        });
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Products"</h1>
                <button class="btn btn-primary gap-2" on:click=open_create>
                    <Plus class="h-4 w-4" />
                    "New product"
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Category"</th>
                                    <th>"Price"</th>
                                    <th>"Availability"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && products.get().is_empty()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || !loading.get() && products.get().is_empty()>
                                    <tr>
                                        <td colspan="5" class="text-center py-8 text-base-content/50">
                                            "The catalog is empty. Add your first product."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || products.get()
                                    key=|p| (p.product_id, p.available, p.price)
                                    children={
                                        let delete_product = delete_product.clone();
                                        move |product| {
                                            let id = product.product_id;
                                            let edit_target = product.clone();
                                            let delete = delete_product.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="flex items-center gap-3">
                                                            <div class="avatar">
                                                                <div class="w-10 h-10 rounded bg-base-200">
                                                                    <img src=product.image.clone() alt=product.name.clone() />
                                                                </div>
                                                            </div>
                                                            <span class="font-medium">{product.name.clone()}</span>
                                                        </div>
                                                    </td>
                                                    <td>{product.category.clone()}</td>
                                                    <td>{format_price(product.price)}</td>
                                                    <td>
                                                        <span class=move || if edit_target.available {
                                                            "badge badge-success badge-outline"
                                                        } else {
                                                            "badge badge-ghost"
                                                        }>
                                                            {if product.available { "In stock" } else { "Sold out" }}
                                                        </span>
                                                    </td>
                                                    <td class="text-right">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click={
                                                                let p = product.clone();
                                                                move |_| {
                                                                    form.load(&p);
                                                                    set_dialog_open.set(true);
                                                                }
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            on:click=move |_| delete.clone()(id)
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
                </div>
            </div>

            // 新建/编辑弹窗
            <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_dialog_open.set(false)>
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if form.editing_id.get().is_some() {
                            "Edit product"
                        } else {
                            "New product"
                        }}
                    </h3>

                    <form on:submit=on_save class="space-y-3 mt-2">
                        <div class="form-control">
                            <label for="p_name" class="label">
                                <span class="label-text">"Name"</span>
                            </label>
                            <input
                                id="p_name"
                                type="text"
                                placeholder="Sourdough loaf"
                                on:input=move |ev| form.name.set(event_target_value(&ev))
                                prop:value=form.name
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Category"</span>
                                </label>
                                <select
                                    class="select select-bordered w-full"
                                    on:change=move |ev| form.category.set(event_target_value(&ev))
                                >
                                    {CATEGORIES
                                        .iter()
                                        .map(|&cat| {
                                            view! {
                                                <option
                                                    value=cat
                                                    selected=move || form.category.get() == cat
                                                >
                                                    {cat}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div class="form-control">
                                <label for="p_price" class="label">
                                    <span class="label-text">"Price"</span>
                                </label>
                                <input
                                    id="p_price"
                                    type="text"
                                    inputmode="decimal"
                                    placeholder="4.50"
                                    on:input=move |ev| form.price.set(event_target_value(&ev))
                                    prop:value=form.price
                                    class="input input-bordered w-full"
                                />
                            </div>
                        </div>
                        <div class="form-control">
                            <label for="p_image" class="label">
                                <span class="label-text">"Image URL"</span>
                            </label>
                            <input
                                id="p_image"
                                type="text"
                                placeholder="https://..."
                                on:input=move |ev| form.image.set(event_target_value(&ev))
                                prop:value=form.image
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="p_desc" class="label">
                                <span class="label-text">"Description"</span>
                            </label>
                            <textarea
                                id="p_desc"
                                class="textarea textarea-bordered"
                                on:input=move |ev| form.description.set(event_target_value(&ev))
                                prop:value=form.description
                            ></textarea>
                        </div>
                        <div class="form-control">
                            <label class="label cursor-pointer">
                                <span class="label-text">"Available for sale"</span>
                                <input
                                    type="checkbox"
                                    class="toggle toggle-primary"
                                    prop:checked=form.available
                                    on:change=move |ev| form.available.set(event_target_checked(&ev))
                                />
                            </label>
                        </div>

                        <div class="modal-action">
                            <button
                                type="button"
                                class="btn btn-ghost"
                                on:click=move |_| set_dialog_open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save".into_any()
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
