use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::profile_form::ProfileFormFields;
use crate::components::profile_form::form_state::FormState;
use crate::components::toast::use_toast;
use crate::queries::use_queries;

#[component]
pub fn LabourSetupScreen() -> impl IntoView {
    let auth_ctx = use_auth();
    let queries = use_queries();
    let toast = use_toast();

    let form = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 本地校验失败时不发起远程调用
        let request = match form.validate() {
            Ok(request) => request,
            Err(msg) => {
                toast.error(msg);
                return;
            }
        };
        let Some(backend) = auth_ctx.state.get_untracked().backend else {
            toast.error("Connection not ready. Please try again.");
            return;
        };

        set_is_submitting.set(true);
        spawn_local(async move {
            match queries.update_labour_profile(&backend, request).await {
                Ok(()) => {
                    toast.success("Profile created successfully");
                    // 档案完整后路由服务自动进入主页
                }
                Err(e) => {
                    crate::web::console::error(&format!("[LabourSetup] save failed: {}", e));
                    toast.error("Failed to create profile. Please try again.");
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 px-4 py-6">
            <div class="mx-auto max-w-md">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <div class="text-center">
                            <h1 class="text-2xl font-bold">"Setup Your Profile"</h1>
                            <p class="text-base-content/70">
                                "Complete your labour profile to get started"
                            </p>
                        </div>
                        <form class="space-y-4" on:submit=on_submit>
                            <ProfileFormFields state=form />

                            <div class="flex items-center justify-between rounded-lg border border-base-300 p-4">
                                <div>
                                    <span class="label-text font-medium">"Availability"</span>
                                    <p class="text-sm text-base-content/70">
                                        {move || if form.available.get() {
                                            "Available for work"
                                        } else {
                                            "Not available"
                                        }}
                                    </p>
                                </div>
                                <input
                                    type="checkbox"
                                    class="toggle toggle-primary"
                                    prop:checked=move || form.available.get()
                                    on:change=move |ev| form.available.set(event_target_checked(&ev))
                                />
                            </div>

                            <button
                                type="submit"
                                class="btn btn-primary h-14 w-full text-lg font-semibold"
                                disabled=move || is_submitting.get()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                } else {
                                    "Save Profile".into_any()
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
