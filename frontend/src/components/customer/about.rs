//! 关于页（纯静态）

use leptos::prelude::*;

use crate::components::icons::Croissant;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-4 py-12 space-y-6">
            <div class="flex items-center gap-3">
                <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                    <Croissant class="h-8 w-8" />
                </div>
                <h1 class="text-3xl font-bold">"About Fournil"</h1>
            </div>
            <p class="text-base-content/80 leading-relaxed">
                "Fournil started in 1987 as a two-person stall on the Quai Saint-Antoine market.
                Three ovens and one flood later, we still mill our own flour blends, keep a
                thirty-year-old levain alive, and refuse to bake anything we would not serve
                our own grandmothers."
            </p>
            <p class="text-base-content/80 leading-relaxed">
                "Everything in the shop is baked the same morning it is sold. Orders placed
                before 7pm are delivered the next day across Lyon, still slightly warm if the
                traffic is kind."
            </p>
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Years baking"</div>
                    <div class="stat-value text-primary">"38"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Loaves a day"</div>
                    <div class="stat-value text-primary">"450"</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Levain age"</div>
                    <div class="stat-value text-primary">"30 yrs"</div>
                </div>
            </div>
        </div>
    }
}
