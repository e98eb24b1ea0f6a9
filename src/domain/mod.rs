pub mod error;
pub mod model;

pub use error::{DeleteError, MediaError, Result};
pub use model::ProcessedVoiceMessage;
