//! AgriSense CLI
//!
//! 葉の写真を解析エンドポイントへ送り、結果をローカルに保存して表示する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod file_store;
pub mod views;
