//! ナビゲーション

/// ブランド名
pub const BRAND: &str = "AgriSense";

/// 画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Analyze,
    Recommend,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Analyze, Route::Recommend];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Analyze => "/analyze",
            Route::Recommend => "/recommend",
        }
    }

    /// パスから画面を決定（不明なパスはHome）
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/analyze" => Route::Analyze,
            "/recommend" => Route::Recommend,
            _ => Route::Home,
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Analyze => "Analyze Crop",
            Route::Recommend => "Recommendations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_roundtrip_for_all_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_from_path_trailing_slash() {
        assert_eq!(Route::from_path("/analyze/"), Route::Analyze);
        assert_eq!(Route::from_path("/recommend/"), Route::Recommend);
    }

    #[test]
    fn test_from_path_unknown_falls_back_to_home() {
        assert_eq!(Route::from_path("/settings"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn test_nav_labels() {
        let labels: Vec<_> = Route::ALL.iter().map(|r| r.nav_label()).collect();
        assert_eq!(labels, vec!["Home", "Analyze Crop", "Recommendations"]);
    }
}
