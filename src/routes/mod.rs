mod directory;
mod health;
mod not_found;

pub(crate) use directory::{DirectoryPage, GreetingDirectoryPage};
pub(crate) use health::HealthPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DirectoryPage />
            <Route path=path!("/hello") view=GreetingDirectoryPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
