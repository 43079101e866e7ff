//! 身份选择页

use fournil_shared::Role;
use leptos::prelude::*;

use super::icons::{ChartColumn, ShoppingCart};

#[component]
pub fn RoleSelectPage(#[prop(into)] on_pick: Callback<Role>) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col">
                <div class="text-center mb-6">
                    <h1 class="text-4xl font-bold">"Welcome to Fournil"</h1>
                    <p class="text-base-content/70 mt-2">"How would you like to continue?"</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 w-full max-w-2xl">
                    <button
                        class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow cursor-pointer"
                        on:click=move |_| on_pick.run(Role::Customer)
                    >
                        <div class="card-body items-center text-center">
                            <div class="p-4 bg-primary/10 rounded-2xl text-primary">
                                <ShoppingCart class="h-10 w-10" />
                            </div>
                            <h2 class="card-title mt-2">"I am a customer"</h2>
                            <p class="text-base-content/70">
                                "Browse the menu, fill your cart and order fresh bakes."
                            </p>
                        </div>
                    </button>
                    <button
                        class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow cursor-pointer"
                        on:click=move |_| on_pick.run(Role::Admin)
                    >
                        <div class="card-body items-center text-center">
                            <div class="p-4 bg-secondary/10 rounded-2xl text-secondary">
                                <ChartColumn class="h-10 w-10" />
                            </div>
                            <h2 class="card-title mt-2">"I run the bakery"</h2>
                            <p class="text-base-content/70">
                                "Manage products, orders, customers and promotions."
                            </p>
                        </div>
                    </button>
                </div>
            </div>
        </div>
    }
}
