//! アップロードエリアコンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement, MouseEvent};

#[component]
pub fn UploadArea<F>(on_file: F) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // 先頭の1枚のみ
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let on_file = on_file.clone();
        move |_: MouseEvent| {
            if let Err(e) = open_file_dialog(on_file.clone()) {
                gloo::console::error!(format!("ファイル選択を開けません: {:?}", e));
            }
        }
    };

    view! {
        <div class="upload-card">
            <label class="upload-label">"Upload Leaf Image"</label>
            <div
                class="upload-area"
                class:dragover=move || is_dragover.get()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <p>"Click or Drag & Drop image"</p>
                <p class="text-muted">"Best results with clear leaf images"</p>
            </div>
        </div>
    }
}

/// ファイル選択ダイアログを開く
fn open_file_dialog<F>(on_file: F) -> Result<(), JsValue>
where
    F: Fn(File) + 'static,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document not available"))?;
    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("file");
    input.set_accept("image/*");

    let input_for_change = input.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Some(file) = input_for_change.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
    }) as Box<dyn FnMut(_)>);

    input.set_onchange(Some(closure.as_ref().unchecked_ref()));
    closure.forget();
    input.click();
    Ok(())
}
