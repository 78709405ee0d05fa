use leptos::prelude::*;

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Element id, also used by the label
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, tel, number, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class="label" for=id>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                id=id
                type=input_type
                class="input-base"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Single-choice group rendered as radio buttons
#[component]
pub fn RadioGroupField(
    /// Radio group name
    name: &'static str,
    /// Field label text
    label: &'static str,
    /// Whether a choice is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
    /// Currently selected value
    value: Signal<String>,
    /// Selection callback
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <span class="label">
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </span>
            <div role="radiogroup" class="space-y-2 mt-3">
                {options.into_iter().enumerate().map(|(index, (option, text))| {
                    let input_id = format!("{}-{}", name, index);
                    view! {
                        <div class="flex items-center gap-2">
                            <input
                                type="radio"
                                id=input_id.clone()
                                name=name
                                value=option
                                class="w-4 h-4 accent-primary"
                                prop:checked=move || value.get() == option
                                on:change=move |_| on_change.run(option.to_string())
                            />
                            <label for=input_id class="cursor-pointer">{text}</label>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Checkbox form field component
#[component]
pub fn CheckboxField(
    /// Element id, also used by the label
    id: String,
    /// Field label text
    label: &'static str,
    /// Current checked state
    checked: Signal<bool>,
    /// Change event callback
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <input
                type="checkbox"
                id=id.clone()
                class="w-4 h-4 rounded accent-primary"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label for=id class="cursor-pointer">{label}</label>
        </div>
    }
}
