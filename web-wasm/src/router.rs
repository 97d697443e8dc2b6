//! History API による画面遷移

use agrisense_common::Route;
use gloo::events::EventListener;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

/// 現在の画面（contextで共有）
#[derive(Clone, Copy)]
pub struct Router {
    route: RwSignal<Route>,
}

impl Router {
    /// 現在のURLから初期化し、戻る/進むを監視
    pub fn new() -> Self {
        let route = RwSignal::new(current_route());

        if let Some(window) = web_sys::window() {
            EventListener::new(&window, "popstate", move |_| {
                route.set(current_route());
            })
            .forget();
        }

        Self { route }
    }

    pub fn route(&self) -> Route {
        self.route.get()
    }

    pub fn navigate(&self, route: Route) {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(route.path()));
        }
        self.route.set(route);
    }

    /// ブラウザの「戻る」（popstateで画面が更新される）
    pub fn back(&self) {
        match web_sys::window().and_then(|w| w.history().ok()) {
            Some(history) => {
                let _ = history.back();
            }
            None => self.route.set(Route::Home),
        }
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or_default()
}
