//! 后台仪表盘：统计卡片、销售走势、热销商品、活动日志

use fournil_shared::{ActivityEntry, DashboardStats, SalesPoint, TopProduct, format_price};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;

use crate::api::use_backend;
use crate::components::icons::RefreshCw;
use crate::log::log_error;
use crate::notify::use_toaster;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let backend = use_backend();
    let toaster = use_toaster();

    let (stats, set_stats) = signal(DashboardStats::default());
    let (sales, set_sales) = signal(Vec::<SalesPoint>::new());
    let (top_products, set_top_products) = signal(Vec::<TopProduct>::new());
    let (activity, set_activity) = signal(Vec::<ActivityEntry>::new());
    let (loading, set_loading) = signal(true);

    // 统计与分析一次性加载；失败提示用户
    {
        let admin = backend.admin.clone();
        spawn_local(async move {
            match admin.dashboard_stats().await {
                Ok(s) => set_stats.set(s),
                Err(e) => toaster.error(e.message()),
            }
            if let Ok(points) = admin.sales().await {
                set_sales.set(points);
            }
            if let Ok(tops) = admin.top_products().await {
                set_top_products.set(tops);
            }
            set_loading.set(false);
        });
    }

    // 活动日志 best-effort：失败吞掉，只记日志
    let refresh_activity = {
        let admin = backend.admin.clone();
        move || {
            let admin = admin.clone();
            spawn_local(async move {
                match admin.activity().await {
                    Ok(entries) => set_activity.set(entries),
                    Err(e) => log_error!("[Dashboard] Activity refresh failed: {}", e),
                }
            });
        }
    };
    refresh_activity.clone()();

    let max_revenue = move || {
        sales
            .get()
            .iter()
            .map(|p| p.revenue)
            .max()
            .unwrap_or(Decimal::ONE)
            .max(Decimal::ONE)
    };

    view! {
        <div class="max-w-6xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>

            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <div class="stats shadow w-full stats-vertical lg:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-title">"Total orders"</div>
                        <div class="stat-value text-primary">{move || stats.get().total_orders}</div>
                        <div class="stat-desc">
                            {move || format!("{} pending", stats.get().pending_orders)}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Revenue"</div>
                        <div class="stat-value text-primary">
                            {move || format_price(stats.get().total_revenue)}
                        </div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Customers"</div>
                        <div class="stat-value">{move || stats.get().total_customers}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Products"</div>
                        <div class="stat-value">{move || stats.get().total_products}</div>
                    </div>
                </div>
            </Show>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                // 销售走势（简单条形，不引入图表库）
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"Sales"</h3>
                        <Show
                            when=move || !sales.get().is_empty()
                            fallback=|| view! {
                                <p class="text-base-content/50 py-4">"No sales data yet."</p>
                            }
                        >
                            <div class="space-y-2">
                                <For
                                    each=move || sales.get()
                                    key=|p| p.label.clone()
                                    children=move |point| {
                                        let width = ((point.revenue / max_revenue())
                                            * Decimal::from(100))
                                        .round()
                                        .to_string();
                                        view! {
                                            <div class="flex items-center gap-3">
                                                <span class="w-20 text-sm text-base-content/60">
                                                    {point.label.clone()}
                                                </span>
                                                <progress
                                                    class="progress progress-primary flex-1"
                                                    value=width
                                                    max="100"
                                                ></progress>
                                                <span class="w-24 text-right text-sm font-medium">
                                                    {format_price(point.revenue)}
                                                </span>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        </Show>
                    </div>
                </div>

                // 热销商品
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="p-6 pb-2">
                            <h3 class="card-title">"Top products"</h3>
                        </div>
                        <div class="overflow-x-auto">
                            <table class="table w-full">
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Sold"</th>
                                        <th>"Revenue"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || top_products.get().is_empty()>
                                        <tr>
                                            <td colspan="3" class="text-center py-6 text-base-content/50">
                                                "No data yet."
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || top_products.get()
                                        key=|p| p.product_id
                                        children=move |product| {
                                            view! {
                                                <tr>
                                                    <td class="font-medium">{product.name.clone()}</td>
                                                    <td>{product.units_sold}</td>
                                                    <td>{format_price(product.revenue)}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>

            // 活动日志
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h3 class="card-title">"Recent activity"</h3>
                        <button
                            class="btn btn-ghost btn-circle btn-sm"
                            on:click={
                                let refresh = refresh_activity.clone();
                                move |_| refresh.clone()()
                            }
                        >
                            <RefreshCw class="h-4 w-4" />
                        </button>
                    </div>
                    <Show
                        when=move || !activity.get().is_empty()
                        fallback=|| view! {
                            <p class="text-base-content/50 py-4">"Quiet for now."</p>
                        }
                    >
                        <ul class="timeline timeline-vertical timeline-compact">
                            <For
                                each=move || activity.get()
                                key=|entry| entry.id
                                children=move |entry| {
                                    view! {
                                        <li>
                                            <div class="timeline-middle">
                                                <span class="badge badge-primary badge-xs"></span>
                                            </div>
                                            <div class="timeline-end timeline-box">
                                                <p class="text-sm">{entry.message.clone()}</p>
                                                <p class="text-xs text-base-content/50">
                                                    {entry.at.format("%Y-%m-%d %H:%M").to_string()}
                                                </p>
                                            </div>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </div>
            </div>
        </div>
    }
}
