//! 后台端
//!
//! 侧边栏 + 内容区布局，挂载后台路由树。

pub mod customers;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod promotions;
pub mod settings;

use leptos::prelude::*;

use crate::components::icons::{
    ChartColumn, Croissant, LogOut, Package, Settings as SettingsIcon, ShoppingCart, Tag, Users,
};
use crate::router::{provide_router, use_router};
use crate::routes::AdminRoute;
use crate::session::SessionStore;

use customers::CustomersPage;
use dashboard::DashboardPage;
use orders::OrdersPage;
use products::ProductsPage;
use promotions::PromotionsPage;
use settings::SettingsPage;

#[component]
fn SidebarLink(
    route: AdminRoute,
    label: &'static str,
    children: Children,
) -> impl IntoView {
    let router = use_router::<AdminRoute>();
    let current = router.current();

    view! {
        <li>
            <a
                class=move || if current.get() == route { "active" } else { "" }
                on:click=move |_| router.navigate(route)
            >
                {children()}
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn AdminApp() -> impl IntoView {
    let router = provide_router::<AdminRoute>();
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");

    let admin_name = {
        let user = session.user_signal();
        move || user.get().map(|u| u.full_name).unwrap_or_default()
    };
    let session_for_logout = session.clone();

    view! {
        <div class="min-h-screen flex bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl flex flex-col">
                <div class="p-4 flex items-center gap-2 border-b border-base-200">
                    <Croissant class="h-7 w-7 text-primary" />
                    <div>
                        <p class="font-bold leading-tight">"Fournil"</p>
                        <p class="text-xs text-base-content/50">"Back office"</p>
                    </div>
                </div>
                <ul class="menu p-3 flex-1 gap-1">
                    <SidebarLink route=AdminRoute::Dashboard label="Dashboard">
                        <ChartColumn class="h-4 w-4" />
                    </SidebarLink>
                    <SidebarLink route=AdminRoute::Products label="Products">
                        <Package class="h-4 w-4" />
                    </SidebarLink>
                    <SidebarLink route=AdminRoute::Orders label="Orders">
                        <ShoppingCart class="h-4 w-4" />
                    </SidebarLink>
                    <SidebarLink route=AdminRoute::Customers label="Customers">
                        <Users class="h-4 w-4" />
                    </SidebarLink>
                    <SidebarLink route=AdminRoute::Promotions label="Promotions">
                        <Tag class="h-4 w-4" />
                    </SidebarLink>
                    <SidebarLink route=AdminRoute::Settings label="Settings">
                        <SettingsIcon class="h-4 w-4" />
                    </SidebarLink>
                </ul>
                <div class="p-3 border-t border-base-200">
                    <p class="text-sm px-2 pb-2 text-base-content/60">{admin_name}</p>
                    <button
                        class="btn btn-outline btn-error btn-sm w-full gap-2"
                        on:click=move |_| session_for_logout.logout()
                    >
                        <LogOut class="h-4 w-4" />
                        "Sign out"
                    </button>
                </div>
            </aside>

            <main class="flex-1 p-6 overflow-y-auto">
                {move || match router.current().get() {
                    AdminRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
                    AdminRoute::Products => view! { <ProductsPage /> }.into_any(),
                    AdminRoute::Orders => view! { <OrdersPage /> }.into_any(),
                    AdminRoute::Customers => view! { <CustomersPage /> }.into_any(),
                    AdminRoute::Promotions => view! { <PromotionsPage /> }.into_any(),
                    AdminRoute::Settings => view! { <SettingsPage /> }.into_any(),
                    AdminRoute::NotFound => view! {
                        <div class="flex items-center justify-center min-h-[60vh]">
                            <div class="text-center">
                                <h1 class="text-6xl font-bold text-error">"404"</h1>
                                <p class="text-xl mt-4">"Page not found"</p>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </main>
        </div>
    }
}
