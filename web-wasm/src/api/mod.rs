pub mod analyze;
pub mod clipboard;
