//! AdCraft — generate ad-copy variations from a product brief.
//!
//! Entry point: parses the brief, loads configuration, runs one studio
//! session and prints the resulting cards (or JSON).

use adcraft_core::config::AppConfig;
use adcraft_core::{CampaignInput, Goal, Length, Platform, Tone};
use adcraft_studio::{CopyOutcome, NoticeSink, StudioSession};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "adcraft")]
#[command(about = "Generate ad-copy variations for a product or offer")]
#[command(version)]
struct Cli {
    /// Product or offer to advertise
    #[arg(short, long)]
    product: String,

    /// Target audience (a generic description is used when omitted)
    #[arg(short, long, default_value = "")]
    audience: String,

    /// Facebook / Instagram, TikTok, X (Twitter), YouTube, Google Ads, LinkedIn
    #[arg(long, default_value = "Facebook / Instagram", value_parser = parse_platform)]
    platform: Platform,

    /// Sales, Leads, Bookings, App installs
    #[arg(long, default_value = "Sales", value_parser = parse_goal)]
    goal: Goal,

    /// Edgy, Luxury, UGC-style, Story-based or Default (neutral voice)
    #[arg(long, default_value = "Default", value_parser = parse_tone)]
    tone: Tone,

    /// Short, Long or Balanced
    #[arg(long, default_value = "Balanced", value_parser = parse_length)]
    length: Length,

    /// Add emojis to the primary text
    #[arg(long, default_value_t = false)]
    emojis: bool,

    /// Add platform hashtags to the primary text
    #[arg(long, default_value_t = false)]
    hashtags: bool,

    /// Include a short video script outline per variation
    #[arg(long, default_value_t = false)]
    video_script: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Copy the primary text of variation N
    #[arg(long, value_name = "N")]
    copy: Option<usize>,

    /// Copy the full block of variation N
    #[arg(long, value_name = "N")]
    copy_all: Option<usize>,

    /// TOML config file
    #[arg(short, long, env = "ADCRAFT_CONFIG")]
    config: Option<PathBuf>,

    /// Simulated generation delay (overrides config)
    #[arg(long, env = "ADCRAFT__GENERATION__MOCK_DELAY_MS")]
    delay_ms: Option<u64>,

    /// Reject unrecognized platform/goal/tone/length values
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Emit logs as JSON
    #[arg(long, default_value_t = false)]
    json_logs: bool,
}

// Command-line labels are matched case-insensitively or by short alias;
// anything else is passed through verbatim as an unrecognized value.
fn parse_label<T, const N: usize>(
    raw: &str,
    known: [(T, &str); N],
    label: impl Fn(&T) -> &str,
    other: impl FnOnce(String) -> T,
) -> T {
    let raw = raw.trim();
    known
        .into_iter()
        .find(|(value, alias)| raw.eq_ignore_ascii_case(label(value)) || raw.eq_ignore_ascii_case(alias))
        .map(|(value, _)| value)
        .unwrap_or_else(|| other(raw.to_string()))
}

fn parse_platform(raw: &str) -> Result<Platform, String> {
    Ok(parse_label(
        raw,
        [
            (Platform::FacebookInstagram, "facebook"),
            (Platform::TikTok, "tiktok"),
            (Platform::XTwitter, "x"),
            (Platform::YouTube, "youtube"),
            (Platform::GoogleAds, "google-ads"),
            (Platform::LinkedIn, "linkedin"),
        ],
        Platform::as_str,
        Platform::Other,
    ))
}

fn parse_goal(raw: &str) -> Result<Goal, String> {
    Ok(parse_label(
        raw,
        [
            (Goal::Sales, "sales"),
            (Goal::Leads, "leads"),
            (Goal::Bookings, "bookings"),
            (Goal::AppInstalls, "app-installs"),
        ],
        Goal::as_str,
        Goal::Other,
    ))
}

fn parse_tone(raw: &str) -> Result<Tone, String> {
    Ok(parse_label(
        raw,
        [
            (Tone::Edgy, "edgy"),
            (Tone::Luxury, "luxury"),
            (Tone::UgcStyle, "ugc"),
            (Tone::StoryBased, "story"),
            (Tone::Default, "neutral"),
        ],
        Tone::as_str,
        Tone::Other,
    ))
}

fn parse_length(raw: &str) -> Result<Length, String> {
    Ok(parse_label(
        raw,
        [
            (Length::Short, "short"),
            (Length::Long, "long"),
            (Length::Balanced, "balanced"),
        ],
        Length::as_str,
        Length::Other,
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Prints notices to stderr so stdout stays machine-readable.
struct StderrSink;

impl NoticeSink for StderrSink {
    fn show(&self, message: &str) {
        eprintln!("» {message}");
    }

    fn dismiss(&self) {}
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "adcraft=info,adcraft_studio=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = AppConfig::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(delay_ms) = cli.delay_ms {
        config.generation.mock_delay_ms = delay_ms;
    }
    if cli.strict {
        config.generation.strict_inputs = true;
    }

    info!(
        mock_delay_ms = config.generation.mock_delay_ms,
        strict_inputs = config.generation.strict_inputs,
        "Configuration loaded"
    );

    let input = CampaignInput {
        product: cli.product,
        audience: cli.audience,
        platform: cli.platform,
        goal: cli.goal,
        tone: cli.tone,
        length: cli.length,
        include_emojis: cli.emojis,
        include_hashtags: cli.hashtags,
        include_video_script: cli.video_script,
    };

    let session = StudioSession::from_config(&config, Arc::new(StderrSink));
    let batch = session.submit(input).await?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&batch)?),
        OutputFormat::Text => {
            if let Some(cards) = session.render() {
                println!("{cards}");
            }
        }
    }

    if let Some(index) = cli.copy {
        report_copy(session.copy_primary(index)?);
    }
    if let Some(index) = cli.copy_all {
        report_copy(session.copy_all(index)?);
    }

    Ok(())
}

fn report_copy(outcome: CopyOutcome) {
    match outcome {
        CopyOutcome::Primary | CopyOutcome::Skipped => {}
        CopyOutcome::Fallback => info!("clipboard command unavailable, text written to fallback file"),
        CopyOutcome::Failed => warn!("could not copy text"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_pass_strict_validation() {
        let cli = Cli::try_parse_from(["adcraft", "--product", "Desk"]).unwrap();
        assert_eq!(cli.platform, Platform::FacebookInstagram);
        assert_eq!(cli.goal, Goal::Sales);
        assert_eq!(cli.tone, Tone::Default);
        assert_eq!(cli.length, Length::Balanced);

        let input = CampaignInput {
            product: cli.product,
            platform: cli.platform,
            goal: cli.goal,
            tone: cli.tone,
            length: cli.length,
            ..Default::default()
        };
        assert!(input.validate(true).is_ok());
    }

    #[test]
    fn test_cli_accepts_aliases_and_any_case() {
        let cli = Cli::try_parse_from([
            "adcraft",
            "--product",
            "Desk",
            "--platform",
            "x",
            "--goal",
            "app-installs",
            "--tone",
            "ugc-STYLE",
            "--length",
            "short",
        ])
        .unwrap();
        assert_eq!(cli.platform, Platform::XTwitter);
        assert_eq!(cli.goal, Goal::AppInstalls);
        assert_eq!(cli.tone, Tone::UgcStyle);
        assert_eq!(cli.length, Length::Short);
    }

    #[test]
    fn test_cli_passes_unknown_labels_through() {
        let cli = Cli::try_parse_from(["adcraft", "--product", "Desk", "--platform", "Pinterest"])
            .unwrap();
        assert_eq!(cli.platform, Platform::Other("Pinterest".to_string()));
    }
}
