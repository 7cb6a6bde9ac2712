//! 工人档案表单字段组件
//!
//! 档案填写页与编辑页共用的表单主体，纯粹的输入渲染。

pub mod form_state;

use leptos::prelude::*;
use rozkaam_shared::options::{AREA_OPTIONS, SKILL_OPTIONS};

use form_state::FormState;

/// 档案表单字段组件
///
/// 姓名、电话、技能、区域与日薪输入；提交按钮由调用方渲染。
#[component]
pub fn ProfileFormFields(state: FormState) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for="name" class="label">
                <span class="label-text">"Full Name"</span>
            </label>
            <input
                id="name"
                type="text"
                placeholder="Enter your full name"
                on:input=move |ev| state.name.set(event_target_value(&ev))
                prop:value=move || state.name.get()
                class="input input-bordered w-full h-12"
            />
        </div>

        <div class="form-control">
            <label for="phone" class="label">
                <span class="label-text">"Phone Number"</span>
            </label>
            <input
                id="phone"
                type="tel"
                placeholder="Enter phone number"
                on:input=move |ev| state.phone.set(event_target_value(&ev))
                prop:value=move || state.phone.get()
                class="input input-bordered w-full h-12"
            />
        </div>

        <div class="form-control">
            <label for="skill" class="label">
                <span class="label-text">"Skill"</span>
            </label>
            <select
                id="skill"
                class="select select-bordered w-full h-12"
                on:change=move |ev| state.skill.set(event_target_value(&ev))
            >
                <option value="" disabled selected=move || state.skill.get().is_empty()>
                    "Select your skill"
                </option>
                {SKILL_OPTIONS
                    .iter()
                    .map(|opt| {
                        view! {
                            <option
                                value=opt.value
                                selected=move || state.skill.get() == opt.value
                            >
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>

        <div class="form-control">
            <label for="area" class="label">
                <span class="label-text">"Area"</span>
            </label>
            <select
                id="area"
                class="select select-bordered w-full h-12"
                on:change=move |ev| state.area.set(event_target_value(&ev))
            >
                <option value="" disabled selected=move || state.area.get().is_empty()>
                    "Select your area"
                </option>
                {AREA_OPTIONS
                    .iter()
                    .map(|opt| {
                        view! {
                            <option
                                value=opt.value
                                selected=move || state.area.get() == opt.value
                            >
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>

        <div class="form-control">
            <label for="wage" class="label">
                <span class="label-text">"Daily Wage (₹)"</span>
            </label>
            <input
                id="wage"
                type="number"
                placeholder="Enter daily wage"
                on:input=move |ev| state.wage.set(event_target_value(&ev))
                prop:value=move || state.wage.get()
                class="input input-bordered w-full h-12"
            />
        </div>
    }
}
