//! Voice-message media helpers for a chatbot backend: fetch an attachment
//! from the messaging platform's CDN, convert it to WAV with ffmpeg, and clean
//! up the files afterwards.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod ffmpeg;
pub mod utils;

pub use api::{Attachment, CdnClient, MessageActivity};
pub use application::{AudioFileFormatConverter, IncomingVoiceMessage, VoicePipeline};
pub use config::MediaConfig;
pub use domain::{DeleteError, MediaError, ProcessedVoiceMessage};
pub use ffmpeg::{EncoderError, FfmpegEncoder, Transcoder};
