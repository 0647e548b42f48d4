//! DG Review - 危険物書類レビュー用ダッシュボードとモックAPI

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod store;
pub mod upload;
