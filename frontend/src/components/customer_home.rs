use leptos::prelude::*;
use leptos::task::spawn_local;
use rozkaam_shared::options::{self, AREA_OPTIONS, SKILL_OPTIONS};
use rozkaam_shared::Labour;

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, MessageCircle, Star};
use crate::queries::{QueryState, use_queries};
use crate::whatsapp;

/// 两个筛选都选定后才返回查询条件；否则不发起任何请求
fn selection(skill: &str, area: &str) -> Option<(String, String)> {
    (!skill.is_empty() && !area.is_empty()).then(|| (skill.to_string(), area.to_string()))
}

#[component]
pub fn CustomerHomeScreen() -> impl IntoView {
    let auth_ctx = use_auth();
    let queries = use_queries();

    let selected_skill = RwSignal::new(String::new());
    let selected_area = RwSignal::new(String::new());
    // 列表按 (skill, area) 即查即用，不进入全局缓存
    let results = RwSignal::new(QueryState::<Vec<Labour>>::NotFetched);

    // 筛选变化即重新拉取。未做请求取消：筛选快速变化时，
    // 后完成的响应直接覆盖列表（已知的竞态，保持原行为）。
    Effect::new(move |_| {
        let Some((skill, area)) = selection(&selected_skill.get(), &selected_area.get()) else {
            return;
        };
        let Some(backend) = auth_ctx.state.get_untracked().backend else {
            return;
        };

        results.set(QueryState::Loading);
        spawn_local(async move {
            match backend.list_labours(skill, area).await {
                Ok(list) => results.set(QueryState::Ready(list)),
                Err(e) => {
                    crate::web::console::error(&format!("[CustomerHome] listing failed: {}", e));
                    results.set(QueryState::Failed(e.to_string()));
                }
            }
        });
    });

    let on_logout = move |_| logout(auth_ctx, queries);

    let both_selected = move || {
        selection(&selected_skill.get(), &selected_area.get()).is_some()
    };

    let labour_card = move |labour: Labour| {
        let phone = labour.phone.clone();
        view! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-4">
                    <div class="mb-1">
                        <h3 class="text-xl font-semibold">{labour.name.clone()}</h3>
                        <p class="text-sm text-base-content/70">
                            {options::skill_label(&labour.skill).to_string()}
                        </p>
                    </div>

                    <div class="mb-3 space-y-1">
                        <p class="text-sm">
                            <span class="font-medium">"Area: "</span>
                            {options::area_label(&labour.area).to_string()}
                        </p>
                        <p class="text-sm">
                            <span class="font-medium">"Daily Wage: ₹"</span>
                            {labour.wage}
                        </p>
                        <div class="flex items-center gap-1 text-sm">
                            <span class="font-medium">"Rating:"</span>
                            <Star attr:class="h-3 w-3 fill-yellow-400 text-yellow-400" />
                            <span class="text-base-content/70">{labour.rating}</span>
                        </div>
                    </div>

                    <button
                        class="btn btn-primary h-12 w-full gap-2 font-semibold"
                        on:click=move |_| whatsapp::open_chat(&phone)
                    >
                        <MessageCircle attr:class="h-5 w-5" />
                        "Chat on WhatsApp"
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 px-4 py-6">
            <div class="mx-auto max-w-2xl">
                <div class="mb-6 flex items-center justify-between">
                    <h1 class="text-3xl font-bold text-primary">"Find Labour"</h1>
                    <button class="btn btn-ghost btn-circle" title="Logout" on:click=on_logout>
                        <LogOut attr:class="h-5 w-5" />
                    </button>
                </div>

                <div class="mb-6 space-y-4">
                    <div class="form-control">
                        <label for="skill-filter" class="label">
                            <span class="label-text">"Select Skill"</span>
                        </label>
                        <select
                            id="skill-filter"
                            class="select select-bordered w-full h-12"
                            on:change=move |ev| selected_skill.set(event_target_value(&ev))
                        >
                            <option value="" disabled selected=move || selected_skill.get().is_empty()>
                                "Choose a skill"
                            </option>
                            {SKILL_OPTIONS
                                .iter()
                                .map(|opt| view! {
                                    <option
                                        value=opt.value
                                        selected=move || selected_skill.get() == opt.value
                                    >
                                        {opt.label}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-control">
                        <label for="area-filter" class="label">
                            <span class="label-text">"Select Area"</span>
                        </label>
                        <select
                            id="area-filter"
                            class="select select-bordered w-full h-12"
                            on:change=move |ev| selected_area.set(event_target_value(&ev))
                        >
                            <option value="" disabled selected=move || selected_area.get().is_empty()>
                                "Choose an area"
                            </option>
                            {AREA_OPTIONS
                                .iter()
                                .map(|opt| view! {
                                    <option
                                        value=opt.value
                                        selected=move || selected_area.get() == opt.value
                                    >
                                        {opt.label}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="space-y-4">
                    {move || {
                        if !both_selected() {
                            return view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body p-8 text-center">
                                        <p class="text-lg text-base-content/70">
                                            "Please select both skill and area to view available labour"
                                        </p>
                                    </div>
                                </div>
                            }
                            .into_any();
                        }

                        match results.get() {
                            QueryState::NotFetched | QueryState::Loading => view! {
                                <div class="space-y-4">
                                    <div class="skeleton h-40 w-full"></div>
                                    <div class="skeleton h-40 w-full"></div>
                                    <div class="skeleton h-40 w-full"></div>
                                </div>
                            }
                            .into_any(),
                            QueryState::Failed(_) => view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body p-8 text-center">
                                        <p class="text-lg text-error">
                                            "Failed to load labour listings. Please try again."
                                        </p>
                                    </div>
                                </div>
                            }
                            .into_any(),
                            QueryState::Ready(list) if list.is_empty() => view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body p-8 text-center">
                                        <p class="text-lg text-base-content/70">
                                            "No labour available for the selected skill and area"
                                        </p>
                                    </div>
                                </div>
                            }
                            .into_any(),
                            QueryState::Ready(list) => list
                                .into_iter()
                                .map(labour_card)
                                .collect_view()
                                .into_any(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::selection;
    use std::rc::Rc;

    use crate::api::tests::MockBackend;
    use crate::api::Backend;

    #[test]
    fn no_selection_issues_no_query() {
        assert_eq!(selection("", ""), None);
    }

    #[test]
    fn skill_only_issues_no_query() {
        assert_eq!(selection("plumbing", ""), None);
    }

    #[test]
    fn area_only_issues_no_query() {
        assert_eq!(selection("", "downtown"), None);
    }

    #[test]
    fn both_filters_issue_exactly_one_query() {
        assert_eq!(
            selection("plumbing", "downtown"),
            Some(("plumbing".to_string(), "downtown".to_string()))
        );
    }

    #[tokio::test]
    async fn only_the_complete_selection_reaches_the_backend() {
        // 筛选守卫下，三次变化里只有最后一次发出请求
        let backend = Rc::new(MockBackend::new());
        let handle: Rc<dyn Backend> = backend.clone();

        for (skill, area) in [("plumbing", ""), ("", "downtown"), ("plumbing", "downtown")] {
            if let Some((skill, area)) = selection(skill, area) {
                handle.list_labours(skill, area).await.unwrap();
            }
        }

        assert_eq!(backend.list_calls.get(), 1);
    }
}
