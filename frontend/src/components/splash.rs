//! 闪屏
//!
//! 纯展示组件；4 秒定时与跳转由顶层状态机负责。

use leptos::prelude::*;

use super::icons::Croissant;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="flex flex-col items-center gap-4">
                    <div class="p-5 bg-primary/10 rounded-3xl text-primary animate-bounce">
                        <Croissant class="h-16 w-16" />
                    </div>
                    <h1 class="text-5xl font-bold">"Fournil"</h1>
                    <p class="text-base-content/70 text-lg">
                        "Fresh from the oven, straight to your door"
                    </p>
                    <span class="loading loading-dots loading-lg text-primary"></span>
                </div>
            </div>
        </div>
    }
}
