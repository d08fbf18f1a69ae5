use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tracing_subscriber::EnvFilter;

use ytnotes_core::{
    ContentCache, ContentFetcher, CredentialVerifier, ExportFormat, GeminiClient,
    GoogleTranslate, GoogleTts, HistoryStore, Identity, JsonFileHistoryStore, NotesError,
    NotesPipeline, SessionContext, Settings, SpeechSynthesizer, SpeechTarget, Summarizer,
    TranscriptResult, WatchPageTranscripts, YouTubeDataApi, format_history_readable,
    format_translation_readable, translate::languages,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let whole = d.as_secs();
        format!("{}m {}s", whole / 60, whole % 60)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliSpeechTarget {
    Transcript,
    Summary,
    Translation,
}

impl From<CliSpeechTarget> for SpeechTarget {
    fn from(cli: CliSpeechTarget) -> Self {
        match cli {
            CliSpeechTarget::Transcript => SpeechTarget::Transcript,
            CliSpeechTarget::Summary => SpeechTarget::Summary,
            CliSpeechTarget::Translation => SpeechTarget::Translation,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CliExportFormat {
    Text,
    Word,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli: CliExportFormat) -> Self {
        match cli {
            CliExportFormat::Text => ExportFormat::Text,
            CliExportFormat::Word => ExportFormat::Word,
        }
    }
}

#[derive(Parser)]
#[command(name = "ytnotes")]
#[command(about = "Turn YouTube videos into notes you can translate, listen to and export")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate notes for a video
    Notes(NotesArgs),
    /// Show notes generated earlier, newest first
    History(IdentityArgs),
    /// List the languages notes can be translated into
    Languages,
}

#[derive(Args)]
struct IdentityArgs {
    /// Log in as this user. Without it the session runs as a trial user.
    #[arg(short, long, requires = "password")]
    user: Option<String>,

    /// Password for --user
    #[arg(long, env = "YTNOTES_LOGIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args)]
struct NotesArgs {
    /// Video URL
    url: String,

    #[command(flatten)]
    identity: IdentityArgs,

    /// Preferred transcript languages, in order
    #[arg(long = "transcript-lang", default_value = "en", value_delimiter = ',')]
    transcript_languages: Vec<String>,

    /// Translate the notes (language code or name, e.g. "de" or "German")
    #[arg(short, long)]
    translate: Option<String>,

    /// Read text aloud and save it as MP3 (repeatable)
    #[arg(short, long)]
    speak: Vec<CliSpeechTarget>,

    /// Playback speed; anything below 1.0 uses slow speech
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Export the notes (repeatable)
    #[arg(short, long)]
    export: Vec<CliExportFormat>,

    /// Directory for audio and exported files
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Force re-fetching even if the video's content is cached
    #[arg(short, long)]
    force: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn elapsed(start: Instant) -> String {
    style(format!("[{}]", format_duration(start.elapsed())))
        .dim()
        .to_string()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_identity(settings: &Settings, args: &IdentityArgs) -> Result<Identity> {
    let Some(user) = &args.user else {
        return Ok(Identity::Trial);
    };

    let verifier = settings
        .credentials
        .as_ref()
        .context("No account configured, set YTNOTES_USERNAME and YTNOTES_PASSWORD")?;
    let password = args.password.as_deref().unwrap_or_default();

    Ok(verifier.verify(user, password)?)
}

fn print_header(subtitle: &str) {
    println!(
        "\n{}  {}\n",
        style("ytnotes").cyan().bold(),
        style(subtitle).dim()
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Notes(args) => run_notes(args).await,
        Command::History(args) => run_history(args).await,
        Command::Languages => {
            for language in languages::LANGUAGES {
                println!("{:<10} {}", style(language.code).yellow(), language.name);
            }
            Ok(())
        }
    }
}

async fn run_history(args: IdentityArgs) -> Result<()> {
    let settings = Settings::from_env()?;
    let identity = resolve_identity(&settings, &args)?;
    let store = JsonFileHistoryStore::new(&settings.history_path);

    print_header(&format!("History for {}", identity.username()));

    let entries = store.history(identity.username()).await?;
    if entries.is_empty() {
        println!("No history yet. Generate some notes to get started.");
    } else {
        println!("{}", format_history_readable(&entries));
    }

    Ok(())
}

async fn run_notes(args: NotesArgs) -> Result<()> {
    let settings = Settings::from_env()?;

    // Validate API key early
    let api_key = match settings.gemini_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let identity = resolve_identity(&settings, &args.identity)?;

    let pipeline = NotesPipeline::builder()
        .fetcher(ContentFetcher::new(
            WatchPageTranscripts::new(args.transcript_languages.clone()),
            YouTubeDataApi::new(settings.youtube_api_key.clone()),
        ))
        .summarizer(Summarizer::new(GeminiClient::new(api_key)))
        .translator(GoogleTranslate::new())
        .speech(SpeechSynthesizer::new(GoogleTts::new()))
        .history(JsonFileHistoryStore::new(&settings.history_path))
        .cache(ContentCache::default())
        .refresh(args.force)
        .build()?;

    print_header("YouTube Notes");
    println!(
        "{} Signed in as {}",
        style("✓").green().bold(),
        style(identity.username()).yellow()
    );
    println!("{}", style("─".repeat(60)).dim());

    let total_start = Instant::now();
    let mut ctx = SessionContext::new(identity.username());

    // Step 1: Fetch and summarize
    let step_start = Instant::now();
    let spinner = create_spinner("Generating notes with Gemini...");
    match pipeline.generate_notes(&mut ctx, &args.url).await {
        Ok(()) => spinner.finish_with_message(format!(
            "{} Notes generated {}",
            style("✓").green().bold(),
            elapsed(step_start)
        )),
        Err(NotesError::PersistenceFailure(e)) => {
            tracing::warn!(error = %e, "Notes were not added to history");
            spinner.finish_with_message(format!(
                "{} Notes generated, but history was not saved: {}",
                style("!").yellow().bold(),
                e
            ))
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    }

    if let Some(TranscriptResult::MetadataFallback(_)) = &ctx.content {
        println!(
            "{} No transcript available, notes are based on the title and description",
            style("!").yellow().bold()
        );
    }
    if let Some(thumbnail) = ctx.thumbnail_url() {
        println!("{} {}", style("Thumbnail:").dim(), thumbnail);
    }

    println!("{}", style("─".repeat(60)).dim());
    println!("{}", ctx.summary.as_deref().unwrap_or_default());
    println!("{}", style("─".repeat(60)).dim());

    // Step 2: Translate
    if let Some(language) = &args.translate {
        let step_start = Instant::now();
        let spinner = create_spinner("Translating...");
        let translation = pipeline.translate(&mut ctx, language).await;
        spinner.finish_and_clear();

        let translation = translation?;
        let name = languages::lookup(translation.language()).map_or(language.as_str(), |l| l.name);
        let mark = if translation.is_degraded() {
            style("!").yellow().bold()
        } else {
            style("✓").green().bold()
        };
        println!("{} Translated to {} {}", mark, name, elapsed(step_start));
        println!("{}", format_translation_readable(translation, name));
    }

    if !args.speak.is_empty() || !args.export.is_empty() {
        fs::create_dir_all(&args.out)
            .await
            .with_context(|| format!("Failed to create {}", args.out.display()))?;
    }

    // Step 3: Speech
    for target in args.speak.iter().copied().map(SpeechTarget::from) {
        let step_start = Instant::now();
        let spinner = create_spinner(&format!("Reading {} aloud...", target));
        let audio = pipeline.speak(&ctx, target, args.speed).await;
        spinner.finish_and_clear();

        // A failed reading skips only this target.
        let audio = match audio {
            Ok(audio) => audio,
            Err(e) => {
                tracing::warn!(error = %e, target = %target, "Speech step failed");
                println!(
                    "{} Could not read {} aloud: {}",
                    style("!").yellow().bold(),
                    target,
                    e
                );
                continue;
            }
        };
        let dest = args
            .out
            .join(format!("{}.mp3", target.label().replace(' ', "_")));
        audio.save_copy(&dest)?;
        println!(
            "{} Audio saved: {} {}",
            style("✓").green().bold(),
            style(dest.display()).dim(),
            elapsed(step_start)
        );
    }

    // Step 4: Export
    for format in args.export.iter().copied().map(ExportFormat::from) {
        let artifact = pipeline.export(&ctx, format)?;
        let dest = args.out.join(&artifact.file_name);
        fs::write(&dest, &artifact.bytes).await?;
        println!(
            "{} Exported {}: {}",
            style("✓").green().bold(),
            format,
            style(dest.display()).dim()
        );
    }

    println!(
        "\n{} Done in {}",
        style("✓").green().bold(),
        format_duration(total_start.elapsed())
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(4_300)), "4.3s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(150)), "2m 30s");
        assert_eq!(format_duration(Duration::from_secs(3_599)), "59m 59s");
    }
}
