//! 后台订单管理：全量订单表格 + 状态流转

use fournil_shared::{Order, OrderStatus, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::orders::OrderGateway;
use crate::api::use_backend;
use crate::components::icons::RefreshCw;
use crate::notify::use_toaster;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let backend = use_backend();
    let toaster = use_toaster();

    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (loading, set_loading) = signal(true);

    let load = {
        let service = backend.orders.clone();
        move || {
            let service = service.clone();
            set_loading.set(true);
            spawn_local(async move {
                match service.all().await {
                    Ok(list) => set_orders.set(list),
                    Err(e) => toaster.error(e.message()),
                }
                set_loading.set(false);
            });
        }
    };
    load.clone()();

    let load_after_change = load.clone();
    let change_status = {
        let service = backend.orders.clone();
        move |order_id: u64, status: OrderStatus| {
            let service = service.clone();
            let reload = load_after_change.clone();
            spawn_local(async move {
                match service.set_status(order_id, status).await {
                    Ok(_) => {
                        toaster.success(format!("Order #{} is now {}", order_id, status));
                        reload();
                    }
                    Err(e) => toaster.error(e.message()),
                }
            });
        }
    };

    let status_badge = |status: OrderStatus| match status {
        OrderStatus::Pending => "badge badge-warning badge-outline",
        OrderStatus::Processing => "badge badge-info badge-outline",
        OrderStatus::OutForDelivery => "badge badge-accent badge-outline",
        OrderStatus::Delivered => "badge badge-success badge-outline",
        OrderStatus::Cancelled => "badge badge-ghost",
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Orders"</h1>
                <button
                    class="btn btn-ghost btn-circle"
                    disabled=move || loading.get()
                    on:click={
                        let load = load.clone();
                        move |_| load.clone()()
                    }
                >
                    <RefreshCw class="h-5 w-5" />
                </button>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"Order"</th>
                                    <th>"Customer"</th>
                                    <th>"Items"</th>
                                    <th>"Total"</th>
                                    <th>"Status"</th>
                                    <th>"Move to"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && orders.get().is_empty()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span>
                                            " Loading..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || !loading.get() && orders.get().is_empty()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "No orders yet."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || orders.get()
                                    key=|o| (o.order_id, o.status)
                                    children={
                                        let change_status = change_status.clone();
                                        move |order| {
                                            let id = order.order_id;
                                            let current_status = order.status;
                                            let change = change_status.clone();
                                            view! {
                                                <tr>
                                                    <td class="font-mono">"#" {order.order_id}</td>
                                                    <td>{order.user_id}</td>
                                                    <td>
                                                        {order.items.iter().map(|i| i.quantity).sum::<u32>()}
                                                        " items"
                                                    </td>
                                                    <td class="font-medium">{format_price(order.total_amount)}</td>
                                                    <td>
                                                        <span class=status_badge(order.status)>
                                                            {order.status.label()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <select
                                                            class="select select-bordered select-xs"
                                                            on:change=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                if let Some(&status) = OrderStatus::assignable()
                                                                    .iter()
                                                                    .find(|s| s.label() == value)
                                                                {
                                                                    if status != current_status {
                                                                        change.clone()(id, status);
                                                                    }
                                                                }
                                                            }
                                                        >
                                                            {OrderStatus::assignable()
                                                                .iter()
                                                                .map(|&status| {
                                                                    view! {
                                                                        <option
                                                                            value=status.label()
                                                                            selected=status == current_status
                                                                        >
                                                                            {status.label()}
                                                                        </option>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </select>
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
