mod render;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use std::path::PathBuf;
use urania::western::RulershipSystem;
use urania::{AnalysisParams, HouseTopic};
use urania_config::{load_settings, load_settings_from, UraniaSettings};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum System {
    /// Outer planets rule Scorpio, Aquarius and Pisces.
    Modern,
    /// Classical seven-planet rulers.
    Traditional,
}

impl From<System> for RulershipSystem {
    fn from(s: System) -> Self {
        match s {
            System::Modern => RulershipSystem::Modern,
            System::Traditional => RulershipSystem::Traditional,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Score the ruler of a derived house from pasted chart text")]
struct Args {
    /// File with one planet placement per line.
    #[arg(long)]
    planets: PathBuf,

    /// File with one house cusp per line. Missing houses fall back to defaults.
    #[arg(long)]
    cusps: Option<PathBuf>,

    /// Root house (1-12).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), conflicts_with = "topic")]
    root: Option<u32>,

    /// Root house by life topic (money, home, partnership, crisis, career, ...).
    #[arg(long)]
    topic: Option<String>,

    /// Derived house index counted from the root, the root itself being 1.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    n: Option<u32>,

    #[arg(long, value_enum)]
    system: Option<System>,

    /// Do not fall back to the other system's ruler when the primary one is unplaced.
    #[arg(long, default_value_t = false)]
    no_fallback: bool,

    /// Config file (default: configs/urania.toml, if present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the full result as JSON instead of the text summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn params_from(args: &Args, settings: &UraniaSettings) -> anyhow::Result<AnalysisParams> {
    let base = settings.params;
    let root = match (&args.topic, args.root) {
        (Some(topic), _) => {
            let topic: HouseTopic = topic.parse().context("--topic")?;
            topic.root_house().number() as u32
        }
        (None, Some(root)) => root,
        (None, None) => base.root_house.number() as u32,
    };
    let n = args.n.unwrap_or(base.derived_n as u32);
    let system = args.system.map(RulershipSystem::from).unwrap_or(base.system);
    let fallback = base.fallback && !args.no_fallback;
    AnalysisParams::new(root, n, system, fallback).context("Invalid analysis parameters")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };
    let params = params_from(&args, &settings)?;

    let placement_text = std::fs::read_to_string(&args.planets)
        .with_context(|| format!("Failed to read planets file {}", args.planets.display()))?;
    let cusp_text = match &args.cusps {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cusps file {}", path.display()))?,
        None => String::new(),
    };

    let report = settings.analyzer().analyze(&placement_text, &cusp_text, &params);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", render::summary(&report));
    }
    Ok(())
}
