//! 推奨（対処法）画面

use agrisense_common::report::{RecommendationReport, NO_ANALYSIS_MESSAGE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::clipboard;
use crate::router::Router;
use crate::storage::BrowserStore;

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let router = expect_context::<Router>();

    let report = match RecommendationReport::from_store(&BrowserStore) {
        Ok(report) => report,
        Err(e) => {
            gloo::console::error!(format!("保存済み結果を読み込めません: {}", e));
            None
        }
    };

    let Some(report) = report else {
        return view! {
            <section class="recommend-empty">
                <div class="card">
                    <p>{NO_ANALYSIS_MESSAGE}</p>
                </div>
            </section>
        }
        .into_any();
    };

    let (copy_status, set_copy_status) = signal(None::<String>);
    let raw = report.copy_text().to_string();

    let on_copy = move |_: web_sys::MouseEvent| {
        let raw = raw.clone();
        spawn_local(async move {
            match clipboard::write_text(&raw).await {
                Ok(()) => set_copy_status.set(Some("Copied!".to_string())),
                Err(e) => {
                    gloo::console::error!(e.clone());
                    set_copy_status.set(Some(e));
                }
            }
        });
    };

    view! {
        <section class="recommend-section">
            <h1 class="page-title">{report.label.clone()}</h1>
            <p class="confidence">
                "Confidence: "<strong>{report.confidence.clone()}</strong>
            </p>

            <div class="recommend-grid">
                <div class="card">
                    <h3>"Cause"</h3>
                    <p>{report.cause.clone()}</p>
                </div>

                <div class="card">
                    <h3>"Symptoms"</h3>
                    <p>{report.symptoms.clone()}</p>
                </div>

                <div class="card">
                    <h3>"Treatment"</h3>
                    <ul>
                        {report.treatment.iter().map(|t| view! { <li>{t.clone()}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="card">
                    <h3>"Prevention"</h3>
                    <ul>
                        {report.prevention.iter().map(|p| view! { <li>{p.clone()}</li> }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="card">
                <h3>"AI Quick Recommendation"</h3>
                <p>{report.recommendation.clone()}</p>
            </div>

            <div class="recommend-actions">
                <button class="btn btn-secondary" on:click=move |_| router.back()>"Back"</button>
                <button class="btn btn-primary" on:click=on_copy>"Copy Report"</button>
                {move || copy_status.get().map(|status| view! {
                    <span class="copy-status">{status}</span>
                })}
            </div>
        </section>
    }
    .into_any()
}
