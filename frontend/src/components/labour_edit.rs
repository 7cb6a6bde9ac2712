use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth;
use crate::components::icons::ArrowLeft;
use crate::components::profile_form::ProfileFormFields;
use crate::components::profile_form::form_state::FormState;
use crate::components::toast::use_toast;
use crate::queries::use_queries;
use crate::web::route::Screen;
use crate::web::router::use_router;

#[component]
pub fn LabourEditScreen() -> impl IntoView {
    let auth_ctx = use_auth();
    let queries = use_queries();
    let toast = use_toast();
    let router = use_router();

    let form = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);

    // 缓存中的档案就绪后回填表单
    Effect::new(move |_| {
        let state = queries.labour_profile.get();
        if let Some(Some(labour)) = state.data() {
            form.prefill(labour);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

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
                    toast.success("Profile updated successfully");
                    router.navigate(Screen::LabourHome);
                }
                Err(e) => {
                    crate::web::console::error(&format!("[LabourEdit] save failed: {}", e));
                    toast.error("Failed to update profile. Please try again.");
                }
            }
            set_is_submitting.set(false);
        });
    };

    let is_loading = move || queries.labour_profile.get().is_loading();

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="min-h-screen bg-base-200 px-4 py-6">
                    <div class="mx-auto max-w-md space-y-4">
                        <div class="skeleton h-10 w-32"></div>
                        <div class="skeleton h-96 w-full"></div>
                    </div>
                </div>
            }
        >
            <div class="min-h-screen bg-base-200 px-4 py-6">
                <div class="mx-auto max-w-md">
                    <button
                        class="btn btn-ghost btn-sm mb-4 gap-2"
                        on:click=move |_| router.navigate(Screen::LabourHome)
                    >
                        <ArrowLeft attr:class="h-4 w-4" />
                        "Back"
                    </button>

                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h1 class="text-center text-2xl font-bold">"Edit Profile"</h1>
                            <form class="space-y-4" on:submit=on_submit>
                                <ProfileFormFields state=form />

                                <button
                                    type="submit"
                                    class="btn btn-primary h-14 w-full text-lg font-semibold"
                                    disabled=move || is_submitting.get()
                                >
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                                    } else {
                                        "Save Changes".into_any()
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
