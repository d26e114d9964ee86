//! Labelled select that reports the chosen value through a plain
//! `Callback<String>`.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use leptos::prelude::*;

use crate::model::Choice;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// One option per variant of `T`, in declaration order.
pub fn choice_options<T: Choice>() -> Vec<SelectOption> {
    T::ALL.iter().map(|v| SelectOption::new(v.value(), v.label())).collect()
}

/// [`choice_options`] preceded by an "all" entry with an empty value.
pub fn choice_options_with_all<T: Choice>(all_label: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", all_label)];
    options.extend(choice_options::<T>());
    options
}

#[component]
pub fn Select(
    #[prop(into)] label: String,
    options: Vec<SelectOption>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    view! {
        <label class="select">
            <span class="select__label">{label}</span>
            <select
                class="select__control"
                disabled=disabled
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|opt| {
                        let selected_value = opt.value.clone();
                        view! {
                            <option value=opt.value selected=move || value.get() == selected_value>
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
