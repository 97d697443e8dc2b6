//! メインアプリケーションコンポーネント

use agrisense_common::Route;
use leptos::prelude::*;
use crate::components::navbar::Navbar;
use crate::pages::{
    analyze::AnalyzePage,
    home::HomePage,
    recommendations::RecommendationsPage,
};
use crate::router::Router;

/// メインアプリケーションコンポーネント
///
/// 画面間の共有状態は localStorage の保存結果のみ。
#[component]
pub fn App() -> impl IntoView {
    let router = Router::new();
    provide_context(router);

    view! {
        <Navbar />
        <main class="page">
            {move || match router.route() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Analyze => view! { <AnalyzePage /> }.into_any(),
                Route::Recommend => view! { <RecommendationsPage /> }.into_any(),
            }}
        </main>
    }
}
