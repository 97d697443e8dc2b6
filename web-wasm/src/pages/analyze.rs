//! 解析画面

use agrisense_common::analyze::RESULT_PLACEHOLDER;
use agrisense_common::{mime_type_for, AnalyzeSession, SelectedImage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, MouseEvent, Url};
use crate::api::analyze::analyze_image;
use crate::components::upload_area::UploadArea;
use crate::config::API_BASE;
use crate::router::Router;
use crate::storage::BrowserStore;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let router = expect_context::<Router>();

    let session = RwSignal::new(AnalyzeSession::new());
    let preview = RwSignal::new(None::<String>);
    // FileはSendでないためローカル保持
    let selected_file = StoredValue::new_local(None::<File>);

    on_cleanup(move || {
        if let Some(url) = preview.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    });

    let on_file = move |file: File| {
        let mime_type = match file.type_() {
            t if t.is_empty() => mime_type_for(&file.name()).to_string(),
            t => t,
        };

        if let Some(old) = preview.get_untracked() {
            let _ = Url::revoke_object_url(&old);
        }
        preview.set(Url::create_object_url_with_blob(&file).ok());

        session.update(|s| {
            s.select(SelectedImage {
                file_name: file.name(),
                mime_type,
            })
        });
        selected_file.set_value(Some(file));
    };

    let on_analyze = move |_: MouseEvent| {
        let started = session.try_update(|s| s.begin().is_ok()).unwrap_or(false);
        if !started {
            return;
        }
        let Some(file) = selected_file.get_value() else {
            return;
        };

        spawn_local(async move {
            let outcome = analyze_image(API_BASE, &file).await;
            if let Err(e) = &outcome {
                gloo::console::error!(e.to_string());
            }
            session.update(|s| s.finish(&BrowserStore, outcome));
        });
    };

    let on_view_recommendations = move |_: MouseEvent| {
        if let Some(Ok(route)) = session.try_update(|s| s.view_recommendations()) {
            router.navigate(route);
        }
    };

    view! {
        <section class="analyze-section">
            <h1 class="page-title">"Analyze Your Crop"</h1>

            <div class="analyze-grid">
                <div class="card">
                    <UploadArea on_file=on_file />

                    {move || preview.get().map(|url| view! {
                        <img src=url alt="preview" class="preview" />
                    })}

                    <button
                        class="btn btn-primary btn-block"
                        disabled=move || session.with(|s| s.loading)
                        on:click=on_analyze
                    >
                        {move || session.with(|s| s.button_label())}
                    </button>

                    {move || session.with(|s| s.error.clone()).map(|error| view! {
                        <div class="error-box">{error}</div>
                    })}
                </div>

                <div class="card result-card">
                    <h3>"Prediction Result"</h3>

                    <Show
                        when=move || session.with(|s| s.result.is_some())
                        fallback=|| view! { <p class="text-muted">{RESULT_PLACEHOLDER}</p> }
                    >
                        {move || session.with(|s| s.result.clone()).map(|result| view! {
                            <div>
                                <p>
                                    <span class="field-label">"Disease:"</span>" "
                                    {result.label_or_unknown().to_string()}
                                </p>
                                <p>
                                    <span class="field-label">"Confidence:"</span>" "
                                    {result.confidence_percent()}
                                </p>
                            </div>
                        })}
                        <div class="recommendation-box">
                            <p>{move || session.with(|s| s.recommendation_text())}</p>
                        </div>
                    </Show>

                    <button class="btn btn-outline btn-block" on:click=on_view_recommendations>
                        "View Recommendations"
                    </button>
                </div>
            </div>
        </section>
    }
}
