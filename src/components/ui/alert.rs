//! Alert banners for error and info messages. Messages must be safe to render.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700 dark:border-red-400 dark:bg-red-900/30 dark:text-red-200"
            }
            AlertKind::Info => {
                "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700 dark:border-blue-400 dark:bg-blue-900/30 dark:text-blue-200"
            }
        }
    }
}

/// Renders a styled banner, with `detail` as a muted second line when given.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional)] detail: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            <p>{message}</p>
            {detail.map(|detail| view! { <p class="mt-1 text-xs opacity-80">{detail}</p> })}
        </div>
    }
}
