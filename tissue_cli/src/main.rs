use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tissue_core::*;

const DISCLAIMER: &str = "This is a simplified educational tool. It does not provide medical \
or personalized training advice. Individual responses vary significantly; consult qualified \
healthcare or fitness professionals for guidance. Progression and recovery are not modelled.";

#[derive(Parser)]
#[command(name = "tissue-sim")]
#[command(about = "Tissue adaptation simulator for muscle, tendon and bone", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the tissue response to a training input (default)
    Evaluate(EvaluateArgs),

    /// List exercise categories and the labels of every scale
    Scales,

    /// Show the effective configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        write: bool,
    },
}

#[derive(clap::Args, Default)]
struct EvaluateArgs {
    /// Exercise category (e.g. running, jumping, resistance_standing)
    #[arg(long)]
    category: Option<String>,

    /// Intensity / load label
    #[arg(long)]
    intensity: Option<String>,

    /// Reps per set label (resistance training only)
    #[arg(long)]
    reps: Option<String>,

    /// Volume (duration / sets) label
    #[arg(long)]
    volume: Option<String>,

    /// Frequency label
    #[arg(long)]
    frequency: Option<String>,

    /// Effort label (resistance training only)
    #[arg(long)]
    effort: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tissue_core::logging::init_with_level("debug");
    } else {
        tissue_core::logging::init();
    }

    let config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path)?,
        Some(path) => {
            tracing::info!("No config file at {:?}, using defaults", path);
            Config::default()
        }
        None => Config::load()?,
    };
    for problem in config.validate() {
        tracing::warn!("Config: {}", problem);
    }

    match cli.command {
        Some(Commands::Evaluate(args)) => cmd_evaluate(args, &config),
        Some(Commands::Scales) => cmd_scales(),
        Some(Commands::Config { write }) => cmd_config(cli.config, write, &config),
        None => cmd_evaluate(EvaluateArgs::default(), &config),
    }
}

fn cmd_evaluate(args: EvaluateArgs, config: &Config) -> Result<()> {
    let defaults = &config.defaults;

    let category = match &args.category {
        Some(c) => c.parse::<ExerciseCategory>()?,
        None => defaults.category,
    };

    let pick = |arg: &Option<String>, fallback: &str| {
        arg.clone().unwrap_or_else(|| fallback.to_string())
    };
    let intensity = pick(&args.intensity, &defaults.intensity);
    let reps = pick(&args.reps, &defaults.reps);
    let volume = pick(&args.volume, &defaults.volume);
    let frequency = pick(&args.frequency, &defaults.frequency);
    let effort = pick(&args.effort, &defaults.effort);

    let input =
        EvaluationInput::from_labels(category, &intensity, &reps, &volume, &frequency, &effort);
    tracing::info!("Evaluating {:?}", input);

    let result = evaluate(&input);

    if args.json || config.output.json {
        let doc = serde_json::json!({ "input": input, "result": result });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    display_result(&input, &result, config.output.show_disclaimer)?;
    Ok(())
}

fn display_result(
    input: &EvaluationInput,
    result: &EvaluationResult,
    disclaimer: bool,
) -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "\n╭─────────────────────────────────────────╮")?;
    writeln!(out, "│  {}", input.category)?;
    writeln!(out, "╰─────────────────────────────────────────╯")?;

    for scale in Scale::ALL {
        let level = match scale {
            Scale::Intensity => input.intensity,
            Scale::Volume => input.volume,
            Scale::Frequency => input.frequency,
            Scale::Effort => input.effort,
            Scale::Reps => input.reps,
        };
        if scale.resistance_only() && !input.category.is_resistance() {
            continue;
        }
        let label = scale.bucket(level).map_or("(unspecified)", |b| b.label);
        writeln!(out, "  {}: {}", scale.name(), label)?;
    }
    if !input.category.is_resistance() && !input.category.is_sedentary() {
        writeln!(out, "  (Reps/Effort specific to Resistance Training)")?;
    }

    for (tissue, response) in result.iter() {
        writeln!(out)?;
        writeln!(out, "  {}: {}", tissue, response.effect)?;
        writeln!(out, "    {}", response.explanation)?;
    }

    if disclaimer {
        writeln!(out)?;
        writeln!(out, "  ℹ {}", DISCLAIMER)?;
    }
    writeln!(out)?;

    Ok(())
}

fn cmd_scales() -> Result<()> {
    let mut out = io::stdout().lock();

    writeln!(out, "Exercise Type")?;
    for category in ExerciseCategory::ALL {
        writeln!(out, "  {:<20} {}", category.id(), category.label())?;
    }

    for scale in Scale::ALL {
        writeln!(out)?;
        if scale.resistance_only() {
            writeln!(out, "{} (resistance training only)", scale.name())?;
        } else {
            writeln!(out, "{}", scale.name())?;
        }
        for (idx, bucket) in scale.buckets().iter().enumerate() {
            writeln!(out, "  {} {:<15} {}", idx + 1, bucket.tag, bucket.label)?;
        }
    }

    Ok(())
}

fn cmd_config(path: Option<PathBuf>, write: bool, config: &Config) -> Result<()> {
    if write {
        let path = match path {
            Some(p) => p,
            None => Config::default_config_path()?,
        };
        config.save_to(&path)?;
        println!("✓ Wrote config to {}", path.display());
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
