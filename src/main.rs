use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use voicemsg_media::{
    AudioFileFormatConverter, CdnClient, IncomingVoiceMessage, MediaConfig, MessageActivity,
    VoicePipeline,
};

#[derive(Parser)]
#[command(name = "voicemsg")]
#[command(about = "Fetch and convert chat voice messages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download a voice message into the configured folder
    Fetch {
        /// CDN URL of the MP4 file
        url: String,
    },
    /// Convert a local MP4 file to WAV
    Convert {
        source: PathBuf,
        target_dir: PathBuf,
    },
    /// Download, convert and clean up in one go
    Process {
        #[command(flatten)]
        input: ProcessInput,
        /// Keep the WAV file instead of deleting it afterwards
        #[arg(long)]
        keep_wav: bool,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct ProcessInput {
    /// CDN URL of the MP4 file
    #[arg(long)]
    url: Option<String>,
    /// JSON file holding the inbound message activity
    #[arg(long)]
    activity: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = MediaConfig::from_env();
    log::debug!("Using {:?}", config);

    match cli.command {
        Commands::Fetch { url } => {
            let mut message = IncomingVoiceMessage::new(&url, &config)?;
            message.download_file(&CdnClient::new()).await?;
            println!("{}", message.local_path()?.display());
        }
        Commands::Convert { source, target_dir } => {
            let mut converter = AudioFileFormatConverter::new(&source, &target_dir, &config)?;
            let wav = converter.convert_mp4_to_wav().await?;
            println!("{}", wav.display());
        }
        Commands::Process { input, keep_wav } => {
            let message = match (input.url, input.activity) {
                (Some(url), _) => IncomingVoiceMessage::new(&url, &config)?,
                (None, Some(path)) => {
                    let raw = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let activity: MessageActivity = serde_json::from_str(&raw)
                        .with_context(|| format!("Invalid activity JSON in {}", path.display()))?;
                    IncomingVoiceMessage::from_activity(&activity, &config)?
                }
                (None, None) => unreachable!("clap requires --url or --activity"),
            };

            let processed = VoicePipeline::new(config).process(message).await?;
            if let Some(content_type) = &processed.content_type {
                log::info!("Attachment content type: {}", content_type);
            }
            println!("{}", processed.wav_path.display());

            if !keep_wav {
                if let Err(e) = voicemsg_media::utils::remove_file(&processed.wav_path) {
                    log::warn!("Could not remove {}: {}", processed.wav_path.display(), e);
                }
            }
        }
    }

    Ok(())
}
