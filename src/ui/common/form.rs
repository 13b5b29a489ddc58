use leptos::prelude::*;

/// Text-like form field with a label above the input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Input id and name
    name: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Whether the browser should require a value
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                placeholder=placeholder
                required=required
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary placeholder-theme-tertiary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                       transition-colors"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    label: &'static str,
    /// Select id and name
    name: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div>
            <label for=name class="block text-sm font-medium text-theme-primary mb-1">
                {label}
            </label>
            <select
                id=name
                name=name
                class="w-full px-3 py-2 bg-theme-secondary border border-theme rounded-lg
                       text-theme-primary
                       focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    view! {
                        <option value=val selected=move || value.get() == val>{text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
