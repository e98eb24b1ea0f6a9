pub mod client;
pub mod models;

pub use client::{ApiError, CdnClient};
pub use models::{Attachment, MessageActivity};
