//! Case Evaluation CLI
//!
//! Evaluates one or more JSON case files and prints the reports.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use litigation_engine::{
    ArgumentExtractor, CaseSource, CounterArgumentPredictor, EngineConfig, JsonFileSource,
    LitigationEngine,
};
use shared_types::EvaluationReport;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "case-eval")]
#[command(version, about = "Evaluate legal cases: weighting, weaknesses and strategy")]
struct Args {
    /// Case files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Year treated as "now" for recency scoring
    #[arg(long)]
    reference_year: Option<i32>,

    /// Also list extracted arguments and likely counter-arguments (text format only)
    #[arg(long)]
    extract: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("case-eval v{}", env!("CARGO_PKG_VERSION"));

    let output = run(&args)?;
    println!("{}", output);
    Ok(())
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(year) = args.reference_year {
        config = config.with_reference_year(year);
    }
    Ok(config)
}

fn run(args: &Args) -> anyhow::Result<String> {
    let engine = LitigationEngine::new(load_config(args)?);
    let source = JsonFileSource::new();

    let mut reports = Vec::new();
    let mut sections = Vec::new();
    let mut failures = 0;

    for path in &args.files {
        let locator = path.display().to_string();
        let evaluated = source
            .fetch_case(&locator)
            .and_then(|case| engine.evaluate(&case).map(|report| (case, report)))
            .with_context(|| format!("Failed to evaluate {}", locator));

        match evaluated {
            Ok((case, report)) => {
                if args.format == OutputFormat::Text {
                    let mut section = report.to_text();
                    if args.extract {
                        section.push_str(&extraction_text(&case.content));
                    }
                    sections.push(section);
                }
                reports.push(report);
            }
            Err(err) => {
                tracing::error!("{:#}", err);
                failures += 1;
            }
        }
    }

    if reports.is_empty() {
        bail!("No case could be evaluated ({} failed)", failures);
    }
    if failures > 0 {
        tracing::warn!("{} of {} case files failed", failures, args.files.len());
    }

    match args.format {
        OutputFormat::Text => Ok(sections.join("\n")),
        OutputFormat::Json => render_json(&reports),
    }
}

fn render_json(reports: &[EvaluationReport]) -> anyhow::Result<String> {
    let json = match reports {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    };
    json.context("Failed to serialize report")
}

fn extraction_text(content: &str) -> String {
    let extractor = ArgumentExtractor::new();
    let predictor = CounterArgumentPredictor::new();
    let extracted = extractor.extract(content);

    let mut output = String::from("\nExtracted Arguments:\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    for argument in &extracted.main_arguments {
        let strength = extractor.analyze_strength(argument);
        output.push_str(&format!(
            "  {} (confidence {:.2})\n",
            argument, strength.confidence_score
        ));
        for counter in predictor.predict(argument) {
            output.push_str(&format!("    vs. {}\n", counter.text));
        }
    }
    for conclusion in &extracted.conclusions {
        output.push_str(&format!("  Conclusion: {}\n", conclusion));
    }
    output
}
