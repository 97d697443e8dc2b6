//! ビルド時設定

/// 解析APIのベースURL（ビルド時の `AGRISENSE_API_URL`、無ければ同一オリジンの /api）
pub const API_BASE: &str = match option_env!("AGRISENSE_API_URL") {
    Some(url) => url,
    None => "/api",
};
