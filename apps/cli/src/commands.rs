//! CLI argument parsing and command dispatch.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use coursegen_core::{
    CourseConfig, CourseResult, ProgressReporter, SilentProgress, default_requirements,
    gather_requirements, run_course, save_summary,
};
use coursegen_llm::{ChatClient, ContentGenerator, ResearchClient, Retriever};
use coursegen_shared::{GenerationConfig, Requirements, load_config, read_input};

#[derive(Parser)]
#[command(
    name = "coursegen",
    version,
    about = "Generate a structured course site from a topic"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a course from a JSON input file
    Generate(GenerateArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the input file (JSON with topik, bahasa, audience)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for course artifacts (overrides config)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory for the assembled site (overrides config)
    #[arg(long)]
    pub site_dir: Option<String>,

    /// Research retriever backend: bing, wiki, or duckduckgo (overrides config)
    #[arg(long)]
    pub retriever: Option<String>,

    /// Skip the questionnaire and use default requirements
    #[arg(long)]
    pub skip_questionnaire: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Create a default config file at ~/.coursegen/coursegen.toml
    Init,
    /// Print the effective configuration
    Show,
}

pub fn init_tracing(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "coursegen=info",
        1 => "coursegen=debug",
        _ => "coursegen=trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .json()
                .init();
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate(args) => cmd_generate(args).await,
        Command::Config { action } => cmd_config(action),
    }
}

async fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let app_config = load_config()?;
    let input = read_input(&args.input)?;

    let generation = GenerationConfig::resolve(&app_config.generation)?;
    let retriever_name = args
        .retriever
        .clone()
        .unwrap_or_else(|| app_config.defaults.retriever.clone());
    let retriever = Retriever::parse(&retriever_name)?;

    let research = match generation.research_endpoint.as_deref() {
        Some(endpoint) => Some(ResearchClient::new(endpoint, retriever)?),
        None => None,
    };
    let chat = ChatClient::new(&generation)?;
    let content = ContentGenerator::new(research, chat.clone(), &input.bahasa);

    let requirements = collect_requirements(&args, &input.topik, &input.bahasa)?;

    let config = CourseConfig {
        topic: input.topik.clone(),
        language: input.bahasa.clone(),
        audience: input.audience.clone(),
        output_dir: PathBuf::from(
            args.output
                .unwrap_or_else(|| app_config.defaults.output_dir.clone()),
        ),
        site_dir: PathBuf::from(
            args.site_dir
                .unwrap_or_else(|| app_config.defaults.site_dir.clone()),
        ),
    };

    info!(
        topic = %config.topic,
        language = %config.language,
        research = content.has_research(),
        "generating course"
    );

    let progress: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(SilentProgress)
    } else {
        Box::new(CliProgress::new())
    };

    let result = run_course(&config, &requirements, &chat, &content, progress.as_ref()).await?;
    let summary_path = save_summary(&config, &requirements, &result)?;

    println!("\nCourse generated: {}", result.roadmap.course_title);
    println!("  Modules:   {}", result.outline.modules.len());
    println!("  Chapters:  {}", result.outline.chapter_count());
    println!("  Artifacts: {}", config.output_dir.display());
    println!("  Site:      {}", result.site.site_dir.display());
    println!("  Summary:   {}", summary_path.display());
    println!("  Elapsed:   {:.1}s", result.elapsed.as_secs_f64());
    println!("\nTo preview the site:");
    println!("  cd {}", result.site.site_dir.display());
    println!("  npm install && npm start");

    Ok(())
}

fn collect_requirements(
    args: &GenerateArgs,
    topic: &str,
    language: &str,
) -> Result<Requirements> {
    if args.skip_questionnaire {
        return Ok(default_requirements(topic));
    }
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let requirements = gather_requirements(&mut stdin.lock(), &mut stdout, topic, language)?;
    stdout.flush()?;
    Ok(requirements)
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = coursegen_shared::init_config()?;
            println!("Created config file: {}", path.display());
        }
        ConfigAction::Show => {
            let config = load_config()?;
            let rendered = toml::to_string_pretty(&config)?;
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Spinner-based progress reporting for interactive runs.
struct CliProgress {
    bar: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
        );
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    fn chapter_rendered(&self, title: &str, current: usize, total: usize) {
        self.bar
            .set_message(format!("Rendering [{current}/{total}] {title}"));
    }

    fn done(&self, _result: &CourseResult) {
        self.bar.finish_and_clear();
    }
}
