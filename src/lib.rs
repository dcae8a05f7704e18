//! accident-detect: 事故検出サービスへの画像アップロードクライアント

pub mod cli;
pub mod client;
pub mod config;
pub mod detect;
pub mod error;
pub mod image_file;
pub mod logging;
