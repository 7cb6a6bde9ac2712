//! 启动闪屏
//!
//! 无交互；离开闪屏的 2 秒定时器由路由服务持有。

use leptos::prelude::*;

#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-gradient-to-b from-primary to-primary/80 px-6">
            <div class="text-center">
                <h1 class="mb-4 text-6xl font-bold text-white">"RozKaam"</h1>
                <p class="text-2xl text-white/90">"Find daily work easily"</p>
            </div>
        </div>
    }
}
