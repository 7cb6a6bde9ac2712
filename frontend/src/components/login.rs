use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, use_auth};
use crate::components::toast::use_toast;
use crate::queries::use_queries;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let auth_ctx = use_auth();
    let queries = use_queries();
    let toast = use_toast();

    let (is_logging_in, set_is_logging_in) = signal(false);

    let on_login = move |_| {
        if is_logging_in.get_untracked() {
            return;
        }
        set_is_logging_in.set(true);

        spawn_local(async move {
            let success = login(auth_ctx, queries).await;
            if !success {
                toast.error("Sign in failed. Please try again.");
            }
            // 成功后的跳转由路由服务完成
            set_is_logging_in.set(false);
        });
    };

    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-base-200 px-6">
            <div class="w-full max-w-md">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-4">
                        <div class="text-center">
                            <h1 class="text-4xl font-bold text-primary">"RozKaam"</h1>
                            <p class="text-lg text-base-content/70">"Find daily work easily"</p>
                        </div>
                        <p class="text-center text-base-content/70">
                            "Sign in to access your account and connect with local labour or find work opportunities."
                        </p>
                        <button
                            class="btn btn-primary h-14 w-full text-lg font-semibold"
                            on:click=on_login
                            disabled=move || is_logging_in.get()
                        >
                            {move || if is_logging_in.get() {
                                view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                            } else {
                                "Sign In".into_any()
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
