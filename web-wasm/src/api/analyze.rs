//! 解析API呼び出し
//!
//! `fetch` + `FormData` で画像を送る。30秒で AbortController により中断する。

use agrisense_common::{analyze_url, parse_response, Error, Result, IMAGE_FIELD, REQUEST_TIMEOUT};
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, File, FormData, Request, RequestInit, RequestMode, Response};

/// 画像を送信し、成功ならレスポンス本文をそのまま返す
pub async fn analyze_image(api_base: &str, file: &File) -> Result<String> {
    let form = FormData::new().map_err(request_failed)?;
    form.append_with_blob_and_filename(IMAGE_FIELD, file, &file.name())
        .map_err(request_failed)?;

    let controller = AbortController::new().map_err(request_failed)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);
    opts.set_signal(Some(&controller.signal()));

    let url = analyze_url(api_base);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(request_failed)?;

    // dropで解除される
    let _timeout = Timeout::new(REQUEST_TIMEOUT.as_millis() as u32, move || controller.abort());

    let (status, body) = fetch_text(&request).await.map_err(request_failed)?;
    parse_response(status, &body)
}

async fn fetch_text(request: &Request) -> std::result::Result<(u16, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

fn request_failed(e: JsValue) -> Error {
    Error::RequestFailed(format!("{:?}", e))
}
