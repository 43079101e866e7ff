//! 顾客端导航栏

use leptos::prelude::*;

use crate::cart::CartStore;
use crate::components::icons::{Croissant, LogOut, ShoppingCart, UserRound};
use crate::router::use_router;
use crate::routes::CustomerRoute;
use crate::session::SessionStore;

#[component]
pub fn CustomerNavbar() -> impl IntoView {
    let router = use_router::<CustomerRoute>();
    let session = use_context::<SessionStore>().expect("SessionStore should be provided");
    let cart = use_context::<CartStore>().expect("CartStore should be provided");

    let item_count = cart.item_count();
    let user = session.user_signal();
    let session_for_logout = session.clone();

    let nav_link = move |label: &'static str, route: CustomerRoute| {
        let current = router.current();
        view! {
            <li>
                <a
                    class=move || if current.get() == route { "active" } else { "" }
                    on:click=move |_| router.navigate(route)
                >
                    {label}
                </a>
            </li>
        }
    };

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-40">
            <div class="flex-1 gap-2">
                <a
                    class="btn btn-ghost text-xl gap-2"
                    on:click=move |_| router.navigate(CustomerRoute::Home)
                >
                    <Croissant class="h-6 w-6 text-primary" />
                    "Fournil"
                </a>
                <ul class="menu menu-horizontal px-1 hidden md:flex">
                    {nav_link("Menu", CustomerRoute::Menu)}
                    {nav_link("About", CustomerRoute::About)}
                    {nav_link("Contact", CustomerRoute::Contact)}
                </ul>
            </div>
            <div class="flex-none gap-1">
                <button
                    class="btn btn-ghost btn-circle"
                    on:click=move |_| router.navigate(CustomerRoute::Cart)
                >
                    <div class="indicator">
                        <ShoppingCart class="h-5 w-5" />
                        <Show when=move || (item_count.get() > 0)>
                            <span class="badge badge-sm badge-primary indicator-item">
                                {move || item_count.get()}
                            </span>
                        </Show>
                    </div>
                </button>
                <button
                    class="btn btn-ghost gap-2"
                    on:click=move |_| router.navigate(CustomerRoute::Profile)
                >
                    <UserRound class="h-5 w-5" />
                    <span class="hidden md:inline">
                        {move || user.get().map(|u| u.full_name).unwrap_or_default()}
                    </span>
                </button>
                <button
                    class="btn btn-ghost btn-circle text-error"
                    title="Sign out"
                    on:click=move |_| session_for_logout.logout()
                >
                    <LogOut class="h-5 w-5" />
                </button>
            </div>
        </div>
    }
}
