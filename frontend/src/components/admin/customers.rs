//! 后台客户管理

use fournil_shared::CustomerSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_backend;
use crate::components::icons::Trash2;
use crate::notify::use_toaster;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let backend = use_backend();
    let toaster = use_toaster();

    let (customers, set_customers) = signal(Vec::<CustomerSummary>::new());
    let (loading, set_loading) = signal(true);

    let load = {
        let service = backend.admin.clone();
        move || {
            let service = service.clone();
            set_loading.set(true);
            spawn_local(async move {
                match service.customers().await {
                    Ok(list) => set_customers.set(list),
                    Err(e) => toaster.error(e.message()),
                }
                set_loading.set(false);
            });
        }
    };
    load.clone()();

    let load_after_delete = load.clone();
    let delete_customer = {
        let service = backend.admin.clone();
        move |user_id: u64| {
            let service = service.clone();
            let reload = load_after_delete.clone();
            spawn_local(async move {
                match service.delete_customer(user_id).await {
                    Ok(()) => {
                        toaster.success("Customer removed");
                        reload();
                    }
                    Err(e) => toaster.error(e.message()),
                }
            });
        }
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Customers"</h1>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Phone"</th>
                                    <th>"Orders"</th>
                                    <th>"Joined"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && customers.get().is_empty()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || !loading.get() && customers.get().is_empty()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "No customers yet."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || customers.get()
                                    key=|c| c.user_id
                                    children={
                                        let delete_customer = delete_customer.clone();
                                        move |customer| {
                                            let id = customer.user_id;
                                            let delete = delete_customer.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-medium">{customer.full_name.clone()}</td>
                                                    <td>{customer.email.clone()}</td>
                                                    <td>
                                                        {customer
                                                            .phone_number
                                                            .clone()
                                                            .unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                    <td>{customer.orders_count}</td>
                                                    <td class="text-base-content/60">
                                                        {customer
                                                            .joined_at
                                                            .map(|at| at.format("%Y-%m-%d").to_string())
                                                            .unwrap_or_else(|| "—".to_string())}
                                                    </td>
                                                    <td>
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
        </div>
    }
}
