//! ナビゲーションバー

use agrisense_common::{Route, BRAND};
use leptos::prelude::*;
use crate::router::Router;

#[component]
pub fn Navbar() -> impl IntoView {
    let router = expect_context::<Router>();

    view! {
        <nav class="navbar">
            <h1 class="brand">{BRAND}</h1>
            <div class="nav-links">
                {Route::ALL
                    .into_iter()
                    .map(|route| {
                        view! {
                            <a
                                href=route.path()
                                class="nav-link"
                                class:active=move || router.route() == route
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    router.navigate(route);
                                }
                            >
                                {route.nav_label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
