pub mod audio_converter;
pub mod pipeline;
pub mod voice_message;

pub use audio_converter::AudioFileFormatConverter;
pub use pipeline::VoicePipeline;
pub use voice_message::IncomingVoiceMessage;
