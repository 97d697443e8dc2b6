//! トップ画面

use agrisense_common::{home, Route};
use leptos::prelude::*;
use crate::router::Router;

#[component]
pub fn HomePage() -> impl IntoView {
    let router = expect_context::<Router>();

    view! {
        <section class="home-section">
            <div class="home-content">
                <span class="tagline">{home::TAGLINE}</span>
                <h1>
                    {home::HEADLINE}" "
                    <span class="accent">{home::HEADLINE_ACCENT}</span>
                </h1>
                <p class="blurb">{home::BLURB}</p>

                <div class="home-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| router.navigate(Route::Analyze)
                    >
                        {Route::Analyze.nav_label()}
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| router.navigate(Route::Recommend)
                    >
                        {Route::Recommend.nav_label()}
                    </button>
                </div>
            </div>
        </section>
    }
}
