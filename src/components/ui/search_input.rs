use leptos::prelude::*;

/// Text box bound to a query signal; every keystroke writes through.
#[component]
pub fn SearchInput(
    query: RwSignal<String>,
    placeholder: String,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full max-w-md p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            placeholder=placeholder
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
            disabled=move || disabled.get()
        />
    }
}
