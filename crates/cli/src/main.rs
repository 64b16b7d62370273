use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gear_advisor_core::advisor::{
    self, AnalyzeOptions, BuildAdvisor, InMemoryStore, MetaBuildReference, PromptOptions,
};
use gear_advisor_core::domain::recommendation::AnalysisMode;
use gear_advisor_core::domain::snapshot::{CharacterSnapshot, HeroClass};
use gear_advisor_core::llm::anthropic::AnthropicClient;
use gear_advisor_core::llm::{Producer, ReplayProducer};

#[derive(Debug, Parser)]
#[command(name = "gear_advisor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the prompt that would be sent for a snapshot.
    Prompt(PromptArgs),

    /// Normalize and check a captured producer reply.
    Normalize {
        /// File holding the raw reply text.
        #[arg(long)]
        response: PathBuf,

        /// Hero class the reply was produced for (e.g. "witch-doctor").
        #[arg(long)]
        class: String,

        #[arg(long)]
        enhanced: bool,
    },

    /// Run the full pipeline for a snapshot.
    Analyze {
        #[command(flatten)]
        prompt: PromptArgs,

        /// Replay a captured reply instead of calling Anthropic.
        #[arg(long)]
        response: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct PromptArgs {
    /// Character snapshot JSON file.
    #[arg(long)]
    snapshot: PathBuf,

    #[arg(long)]
    enhanced: bool,

    /// Favour toughness and recovery over damage.
    #[arg(long)]
    survivability: bool,

    /// Meta build reference JSON file; implies using meta builds.
    #[arg(long)]
    meta: Option<PathBuf>,
}

impl PromptArgs {
    fn options(&self) -> PromptOptions {
        PromptOptions {
            enhanced: self.enhanced,
            use_meta_builds: self.meta.is_some(),
            focus_on_survivability: self.survivability,
        }
    }

    async fn load(&self) -> anyhow::Result<(CharacterSnapshot, Option<MetaBuildReference>)> {
        let snapshot = read_json::<CharacterSnapshot>(&self.snapshot).await?;
        let meta = match &self.meta {
            Some(path) => Some(read_json::<MetaBuildReference>(path).await?),
            None => None,
        };
        Ok((snapshot, meta))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = gear_advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    // stdout carries the command output; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let cli = Cli::parse();

    let result = run(cli.command, &settings).await;
    if let Err(err) = &result {
        sentry_anyhow::capture_anyhow(err);
        tracing::error!(error = %err, "command failed");
    }
    result
}

async fn run(command: Command, settings: &gear_advisor_core::config::Settings) -> anyhow::Result<()> {
    match command {
        Command::Prompt(args) => {
            let (snapshot, meta) = args.load().await?;
            println!("{}", advisor::build_prompt(&snapshot, &args.options(), meta.as_ref()));
        }

        Command::Normalize {
            response,
            class,
            enhanced,
        } => {
            let class: HeroClass = class.parse()?;
            let raw = read_text(&response).await?;
            let mode = if enhanced {
                AnalysisMode::Enhanced
            } else {
                AnalysisMode::Basic
            };

            let mut recommendation = advisor::normalize(&raw, mode)?;
            let warnings = advisor::validate(recommendation.base(), class);
            recommendation.base_mut().warnings = warnings;

            tracing::info!(
                %class,
                ?mode,
                warnings = recommendation.warnings().len(),
                "normalized captured reply"
            );
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }

        Command::Analyze { prompt, response } => {
            let (snapshot, meta_reference) = prompt.load().await?;

            let producer: Arc<dyn Producer> = match &response {
                Some(path) => Arc::new(ReplayProducer::new(read_text(path).await?)),
                None => Arc::new(AnthropicClient::from_settings(settings)?),
            };
            let advisor = BuildAdvisor::new(producer, Arc::new(InMemoryStore::new()));

            let options = AnalyzeOptions {
                force_refresh: true,
                enhanced: prompt.enhanced,
                prompt: prompt.options(),
                meta_reference,
            };
            let recommendation = advisor.analyze(&snapshot, options).await?;
            println!("{}", serde_json::to_string_pretty(&recommendation)?);
        }
    }
    Ok(())
}

async fn read_text(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = read_text(path).await?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn init_sentry(settings: &gear_advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
