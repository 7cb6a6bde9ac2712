use leptos::prelude::*;
use leptos::task::spawn_local;
use rozkaam_shared::options;

use crate::auth::{logout, use_auth};
use crate::components::icons::{Edit, LogOut, Star};
use crate::components::toast::use_toast;
use crate::queries::use_queries;
use crate::web::route::Screen;
use crate::web::router::use_router;

#[component]
pub fn LabourHomeScreen() -> impl IntoView {
    let auth_ctx = use_auth();
    let queries = use_queries();
    let toast = use_toast();
    let router = use_router();

    let (toggle_pending, set_toggle_pending) = signal(false);

    let on_availability_change = move |checked: bool| {
        let Some(backend) = auth_ctx.state.get_untracked().backend else {
            toast.error("Connection not ready. Please try again.");
            return;
        };
        set_toggle_pending.set(true);

        spawn_local(async move {
            match queries.set_availability(&backend, checked).await {
                Ok(()) => {
                    toast.success(if checked {
                        "You are now available"
                    } else {
                        "You are now unavailable"
                    });
                }
                Err(e) => {
                    crate::web::console::error(&format!("[LabourHome] availability failed: {}", e));
                    toast.error("Failed to update availability");
                }
            }
            set_toggle_pending.set(false);
        });
    };

    let on_logout = move |_| logout(auth_ctx, queries);

    let profile = move || queries.labour_profile.get();
    let is_loading = move || profile().is_loading();

    view! {
        <Show
            when=move || !is_loading()
            fallback=|| view! {
                <div class="min-h-screen bg-base-200 px-4 py-6">
                    <div class="mx-auto max-w-md space-y-4">
                        <div class="skeleton h-12 w-full"></div>
                        <div class="skeleton h-72 w-full"></div>
                    </div>
                </div>
            }
        >
            {move || {
                let Some(Some(labour)) = profile().data().cloned() else {
                    return view! {
                        <div class="flex min-h-screen items-center justify-center bg-base-200 px-4">
                            <div class="card w-full max-w-md bg-base-100 shadow-xl">
                                <div class="card-body p-8 text-center">
                                    <p class="text-lg text-base-content/70">"Profile not found"</p>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any();
                };

                let available = labour.available;
                view! {
                    <div class="min-h-screen bg-base-200 px-4 py-6">
                        <div class="mx-auto max-w-md space-y-6">
                            <div class="flex items-center justify-between">
                                <h1 class="text-3xl font-bold text-primary">"My Profile"</h1>
                                <button class="btn btn-ghost btn-circle" title="Logout" on:click=on_logout>
                                    <LogOut attr:class="h-5 w-5" />
                                </button>
                            </div>

                            <div class="card bg-base-100 shadow-xl">
                                <div class="card-body space-y-4">
                                    <div>
                                        <h2 class="card-title text-2xl">{labour.name.clone()}</h2>
                                        <div class="flex items-center gap-1 text-sm text-base-content/70">
                                            <Star attr:class="h-4 w-4 fill-yellow-400 text-yellow-400" />
                                            <span>{labour.rating} " Rating"</span>
                                        </div>
                                    </div>

                                    <div class="space-y-2">
                                        <div class="flex justify-between">
                                            <span class="font-medium">"Skill:"</span>
                                            <span class="text-base-content/70">
                                                {options::skill_label(&labour.skill).to_string()}
                                            </span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="font-medium">"Area:"</span>
                                            <span class="text-base-content/70">
                                                {options::area_label(&labour.area).to_string()}
                                            </span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="font-medium">"Daily Wage:"</span>
                                            <span class="text-base-content/70">"₹" {labour.wage}</span>
                                        </div>
                                        <div class="flex justify-between">
                                            <span class="font-medium">"Phone:"</span>
                                            <span class="text-base-content/70">{labour.phone.clone()}</span>
                                        </div>
                                    </div>

                                    <div class="flex items-center justify-between rounded-lg border border-base-300 p-4">
                                        <div>
                                            <span class="label-text font-medium">"Availability"</span>
                                            <p class="text-sm text-base-content/70">
                                                {if available { "Available for work" } else { "Not available" }}
                                            </p>
                                        </div>
                                        <input
                                            type="checkbox"
                                            class="toggle toggle-primary"
                                            prop:checked=available
                                            disabled=move || toggle_pending.get()
                                            on:change=move |ev| on_availability_change(event_target_checked(&ev))
                                        />
                                    </div>

                                    <button
                                        class="btn btn-primary h-12 w-full gap-2 font-semibold"
                                        on:click=move |_| router.navigate(Screen::LabourEdit)
                                    >
                                        <Edit attr:class="h-5 w-5" />
                                        "Edit Profile"
                                    </button>
                                </div>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Show>
    }
}
