use std::{
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs;
use tracing_subscriber::EnvFilter;

use tubesrt_core::{
    LanguageCatalog, MergePolicy, SubtitleDocument, TimedTextClient, TimedTextConfig,
    config::DEFAULT_BASE_URL, default_output_path, format_catalog_readable, merge_tracks,
    parse_video_id, resolve_track,
};

#[derive(Parser)]
#[command(name = "tubesrt")]
#[command(about = "Download YouTube captions as SubRip subtitles, merging several languages")]
struct Cli {
    /// Video id or URL
    video: String,

    /// Caption languages, merged in the given order (e.g. "en", "en,fr")
    #[arg(short, long = "lang", value_delimiter = ',', default_value = "en")]
    langs: Vec<String>,

    /// Output file. Defaults to <video_id>.<langs>.srt in the current directory.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Allow machine-translated captions for languages without a native track
    #[arg(short, long)]
    translate: bool,

    /// Merge tracks of different length by dropping the extra cues
    #[arg(long)]
    truncate: bool,

    /// List available caption languages and exit
    #[arg(long)]
    list: bool,

    /// With --list, print the catalog as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Timed-text endpoint
    #[arg(long, env = "TUBESRT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", secs / 60.0, secs % 60.0)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_logging(verbose: bool) {
    let default = if verbose { "tubesrt_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let video_id = parse_video_id(&cli.video).unwrap_or_else(|e| fail(e));
    let config = TimedTextConfig::with_base_url(&cli.base_url).unwrap_or_else(|e| fail(e));
    let merge_policy = if cli.truncate {
        MergePolicy::Shortest
    } else {
        MergePolicy::Strict
    };
    let client = TimedTextClient::new(config).with_merge_policy(merge_policy);

    if cli.json {
        let catalog = client.list_languages(&video_id).await?.unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("tubesrt").cyan().bold(),
        style("Caption Downloader").dim()
    );

    let total_start = Instant::now();

    // Step 1: List languages
    let spinner = create_spinner("Listing caption languages...");
    let catalog = client.list_languages(&video_id).await?;
    let catalog: LanguageCatalog = match catalog {
        Some(catalog) if !catalog.is_empty() => {
            spinner.finish_with_message(format!(
                "{} Languages: {} available",
                style("✓").green().bold(),
                catalog.languages.len()
            ));
            catalog
        }
        _ => {
            spinner.finish_and_clear();
            fail(format!("No captions available for video {}", video_id));
        }
    };

    if cli.list {
        println!("{}", style("─".repeat(60)).dim());
        print!("{}", format_catalog_readable(&catalog));
        return Ok(());
    }

    // Step 2: Fetch each requested language
    let mut tracks = Vec::with_capacity(cli.langs.len());
    for lang in &cli.langs {
        let step_start = Instant::now();
        let source = match resolve_track(&catalog, lang, cli.translate) {
            Ok(request) if request.is_translation() => format!(" (translated from {})", request.lang),
            _ => String::new(),
        };

        let spinner = create_spinner(&format!("Fetching {}...", lang));
        match client
            .fetch_track(&video_id, &catalog, lang, cli.translate)
            .await?
        {
            Ok(cues) => {
                spinner.finish_with_message(format!(
                    "{} {}: {} cues{} {}",
                    style("✓").green().bold(),
                    style(lang).yellow(),
                    cues.len(),
                    style(source).dim(),
                    style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
                ));
                tracks.push(cues);
            }
            Err(reason) => {
                spinner.finish_with_message(format!(
                    "{} {}: {}",
                    style("✗").red().bold(),
                    style(lang).yellow(),
                    style(reason).dim()
                ));
            }
        }
    }

    // Step 3: Merge and save
    let Some(cues) = merge_tracks(&tracks, merge_policy)? else {
        fail(format!(
            "None of the requested languages could be fetched for {}; nothing saved",
            video_id
        ));
    };
    let document = SubtitleDocument::from_cues(&cues);

    let path = cli
        .output
        .unwrap_or_else(|| default_output_path(Path::new("."), &video_id, &cli.langs));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    document.save(&path).await?;

    println!(
        "\n{} {}\n",
        style("Total time:").dim(),
        style(format_duration(total_start.elapsed())).cyan().bold()
    );
    println!(
        "{} {} {}\n",
        style("Saved:").dim(),
        style(path.display()).cyan(),
        style(format!("({} entries)", document.len())).dim()
    );

    Ok(())
}
