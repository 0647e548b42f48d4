pub mod dashboard;
pub mod documents;
pub mod ingestion;
pub mod placeholder;
pub mod review;
pub mod sidebar;
pub mod users;
