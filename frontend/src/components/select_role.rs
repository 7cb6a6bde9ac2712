use leptos::prelude::*;
use leptos::task::spawn_local;
use rozkaam_shared::UserRole;

use crate::auth::use_auth;
use crate::components::toast::use_toast;
use crate::queries::use_queries;

#[component]
pub fn SelectRoleScreen() -> impl IntoView {
    let auth_ctx = use_auth();
    let queries = use_queries();
    let toast = use_toast();

    // 当前正在注册的角色；Some 时两个按钮都禁用
    let (pending_role, set_pending_role) = signal(Option::<UserRole>::None);

    let select_role = move |role: UserRole| {
        let Some(backend) = auth_ctx.state.get_untracked().backend else {
            toast.error("Connection not ready. Please try again.");
            return;
        };
        set_pending_role.set(Some(role));

        spawn_local(async move {
            match queries.register_role(&backend, role).await {
                Ok(()) => {
                    toast.success("Role selected successfully");
                    // 跳转由路由服务根据新档案完成
                }
                Err(e) => {
                    crate::web::console::error(&format!("[SelectRole] registration failed: {}", e));
                    toast.error("Failed to register role. Please try again.");
                    set_pending_role.set(None);
                }
            }
        });
    };

    let role_button = move |role: UserRole, label: &'static str| {
        let is_pending = move || pending_role.get() == Some(role);
        view! {
            <button
                class="btn btn-primary h-16 w-full text-xl font-semibold"
                on:click=move |_| select_role(role)
                disabled=move || pending_role.get().is_some()
            >
                {move || if is_pending() {
                    view! { <span class="loading loading-spinner"></span> "Processing..." }.into_any()
                } else {
                    label.into_any()
                }}
            </button>
        }
    };

    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-base-200 px-6">
            <div class="w-full max-w-md">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body space-y-4">
                        <div class="text-center">
                            <h1 class="text-3xl font-bold text-primary">"Select Your Role"</h1>
                            <p class="text-base text-base-content/70">
                                "Choose how you want to use RozKaam"
                            </p>
                        </div>
                        {role_button(UserRole::Labour, "I am Labour")}
                        {role_button(UserRole::Customer, "I am Customer")}
                    </div>
                </div>
            </div>
        </div>
    }
}
