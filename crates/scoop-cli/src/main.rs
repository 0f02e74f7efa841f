//! scoopctl - terminal control plane for the clip backend.

mod session;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scoop_api::{parse_seconds, ApiClient};
use scoop_channel::{Channel, ChannelConfig, ConnectionState};
use scoop_models::{ClientCommand, JobId, JobStatus, PushEvent};
use scoop_state::RegistrySignal;

use session::Session;

#[derive(Parser)]
#[command(name = "scoopctl")]
#[command(about = "Control plane for the clip-processing backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stream job updates and catalog changes until interrupted
    Watch,

    /// Submit a source video download
    Download {
        /// Video URL
        url: String,

        /// Track the job to completion
        #[arg(long)]
        follow: bool,
    },

    /// Cut a captioned clip from a source video
    Clip {
        /// Source video path or filename
        file: String,

        /// Clip start, seconds
        #[arg(long)]
        start: String,

        /// Clip end, seconds
        #[arg(long)]
        end: String,

        /// Caption text
        #[arg(long)]
        text: Option<String>,

        /// Output filename
        #[arg(long)]
        output_name: Option<String>,

        /// Mirror horizontally
        #[arg(long)]
        flip: bool,

        /// Track the job to completion
        #[arg(long)]
        follow: bool,
    },

    /// Transcribe a source video
    Transcribe {
        /// Source video path or filename
        file: String,

        /// Track the job to completion
        #[arg(long)]
        follow: bool,
    },

    /// Render a clip from a stored template
    ClipTemplate {
        /// Source video path or filename
        file: String,

        /// Template name
        #[arg(long)]
        template: String,

        /// Override clip start, seconds
        #[arg(long)]
        start: Option<String>,

        /// Override clip duration, seconds
        #[arg(long)]
        duration: Option<String>,

        /// Override output filename pattern
        #[arg(long)]
        output_name: Option<String>,

        /// Override output resolution, e.g. 1080:1920
        #[arg(long)]
        resolution: Option<String>,

        /// Override horizontal mirroring
        #[arg(long)]
        flip: Option<bool>,

        /// Track the job to completion
        #[arg(long)]
        follow: bool,
    },

    /// List available templates
    Templates,

    /// List available fonts
    Fonts,

    /// List clips derived from a source video
    Clips {
        /// Source video path or filename
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let api = ApiClient::from_env()?;

    match cli.command {
        Commands::Watch => watch().await,
        Commands::Download { url, follow } => {
            let job_id = api.submit_download(url).await?;
            report(job_id, follow).await
        }
        Commands::Clip {
            file,
            start,
            end,
            text,
            output_name,
            flip,
            follow,
        } => {
            let start = parse_seconds("start", &start)?;
            let end = parse_seconds("end", &end)?;
            let job_id = api
                .submit_clip(&file, start, end, text, output_name, flip)
                .await?;
            report(job_id, follow).await
        }
        Commands::Transcribe { file, follow } => {
            let job_id = api.submit_transcribe(&file).await?;
            report(job_id, follow).await
        }
        Commands::ClipTemplate {
            file,
            template,
            start,
            duration,
            output_name,
            resolution,
            flip,
            follow,
        } => {
            let mut session = Session::new();
            session.templates.set_templates(api.fetch_templates().await?);
            session.templates.select_template(&template);
            let Some(draft) = session.templates.draft_mut() else {
                bail!("template not found: {}", template);
            };
            if let Some(s) = start {
                draft.start = parse_seconds("start", &s)?;
            }
            if let Some(d) = duration {
                draft.duration = parse_seconds("duration", &d)?;
            }
            if let Some(name) = output_name {
                draft.output_name = name;
            }
            if let Some(res) = resolution {
                draft.resolution = res;
            }
            if let Some(flip) = flip {
                draft.flip = flip;
            }

            let job_id = api.submit_clip_template(&file, draft).await?;
            report(job_id, follow).await
        }
        Commands::Templates => {
            for template in api.fetch_templates().await? {
                let overlays = template.data.overlays.len();
                let description = template.data.description.unwrap_or_default();
                println!("{}\t{} overlay(s)\t{}", template.name, overlays, description);
            }
            Ok(())
        }
        Commands::Fonts => {
            for font in api.fetch_fonts().await? {
                println!("{}\t{}", font.name, font.path);
            }
            Ok(())
        }
        Commands::Clips { file } => {
            for clip in api.fetch_clips(&file).await? {
                println!(
                    "{}\t{:.1}s-{:.1}s\t{}",
                    clip.filename, clip.start, clip.end, clip.text
                );
            }
            Ok(())
        }
    }
}

/// Print the job id and optionally track it to a terminal status.
async fn report(job_id: JobId, follow: bool) -> Result<()> {
    println!("job {}", job_id);
    if follow {
        follow_job(&job_id).await?;
    }
    Ok(())
}

/// Track one job over the push channel until it reaches a terminal
/// status. The job only becomes visible once its first push arrives;
/// until then the backend knows it and we do not.
async fn follow_job(job_id: &JobId) -> Result<()> {
    let (channel, mut events) = Channel::connect(ChannelConfig::from_env()).await?;
    let mut session = Session::new();

    while let Some(event) = events.recv().await {
        if let Some(RegistrySignal::RefreshCatalog) = session.handle_event(event) {
            let _ = channel.send(ClientCommand::GetVideos);
        }

        if let Some(job) = session.registry.get(job_id.as_str()) {
            match job.status {
                JobStatus::Queued | JobStatus::Running => {
                    info!("{} {} {:.1}%", job.id, job.status, job.progress);
                }
                JobStatus::Finished => {
                    println!("finished");
                    if let Some(result) = &job.result {
                        println!("{}", serde_json::to_string_pretty(result)?);
                    }
                    return Ok(());
                }
                JobStatus::Error => {
                    bail!(
                        "job failed: {}",
                        job.error.as_deref().unwrap_or("unknown error")
                    );
                }
            }
        }
    }

    bail!("channel closed before job {} completed", job_id)
}

/// Stream everything the backend pushes, applying it to the stores.
async fn watch() -> Result<()> {
    let (channel, mut events) = Channel::connect(ChannelConfig::from_env()).await?;
    info!("connected; waiting for push events");

    let mut session = Session::new();
    while let Some(event) = events.recv().await {
        match &event {
            PushEvent::VideosUpdate(videos) => {
                println!("catalog: {} video(s)", videos.len());
                for video in videos {
                    println!("  {}\t{}", video.title, video.path);
                }
            }
            PushEvent::JobUpdate(job) => {
                println!(
                    "job {}\t{}\t{}\t{:.1}%",
                    job.id, job.kind, job.status, job.progress
                );
                if let Some(error) = &job.error {
                    println!("  error: {}", error);
                }
            }
            PushEvent::TranscriptSegment(_) | PushEvent::Log(_) => {}
        }

        if let Some(RegistrySignal::RefreshCatalog) = session.handle_event(event) {
            let _ = channel.send(ClientCommand::GetVideos);
        }
    }

    if channel.state() == ConnectionState::Disconnected {
        warn!("channel lost; state is stale until reconnect");
    }
    Ok(())
}

fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("scoop=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}
