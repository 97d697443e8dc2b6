pub mod navbar;
pub mod upload_area;
