use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use copypasta_ext::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use glyphgen::config::Config;
use glyphgen::{Alphabet, ColorLimits, expand_many, sample_color, sample_from_alphabet, sample_long};

#[derive(Parser)]
#[command(name = "glyphgen", version, about = "Generate random strings from templates")]
struct Cli {
    /// Config file to read instead of the default one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand a template such as "q_%rand%%CHAR%%CHAR%%rand%_p"
    Expand {
        template: Option<String>,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Draw single characters from a named alphabet
    Char {
        /// digits, letters, upper, symbols, alnum or all
        #[arg(short, long, default_value = "all")]
        alphabet: String,

        #[arg(short, long)]
        uppercase: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Draw integers in [MIN, MAX]
    #[command(allow_negative_numbers = true)]
    Long {
        min: i64,
        max: i64,

        #[command(flatten)]
        common: CommonArgs,
    },
    /// Draw RGB colors
    Color {
        #[arg(long, default_value_t = 255)]
        max_r: u16,

        #[arg(long, default_value_t = 255)]
        max_g: u16,

        #[arg(long, default_value_t = 255)]
        max_b: u16,

        /// Print JSON objects instead of #rrggbb
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// How many values to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Copy the output to the clipboard
    #[arg(short, long)]
    copy: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::resolve(cli.config.as_deref())?;
    debug!(?config, "resolved config");

    let common = match &cli.command {
        Command::Expand { common, .. }
        | Command::Char { common, .. }
        | Command::Long { common, .. }
        | Command::Color { common, .. } => common,
    };
    let count = common.count.unwrap_or(config.count);
    let copy = common.copy || config.copy;
    let mut rng = match common.seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let lines = match cli.command {
        Command::Expand { template, .. } => {
            let template = template.or(config.template).ok_or(
                "Missing template. Pass one as an argument or set \"template\" in the config file.",
            )?;
            expand_many(&template, count, &mut rng)?
        }
        Command::Char { alphabet, uppercase, .. } => {
            let alphabet = Alphabet::by_name(&alphabet)
                .ok_or_else(|| format!("Unknown alphabet: {}", alphabet))?;
            (0..count)
                .map(|_| {
                    let c = sample_from_alphabet(&mut rng, &alphabet)?;
                    let c = if uppercase { c.to_ascii_uppercase() } else { c };
                    Ok(c.to_string())
                })
                .collect::<Result<Vec<_>, glyphgen::GenerationError>>()?
        }
        Command::Long { min, max, .. } => (0..count)
            .map(|_| sample_long(&mut rng, min, max).map(|n| n.to_string()))
            .collect::<Result<Vec<_>, _>>()?,
        Command::Color { max_r, max_g, max_b, json, .. } => {
            let limits = ColorLimits::checked(max_r, max_g, max_b)?;
            let mut lines = Vec::with_capacity(count);
            for _ in 0..count {
                let color = sample_color(&mut rng, limits);
                lines.push(if json { serde_json::to_string(&color)? } else { color.to_string() });
            }
            lines
        }
    };

    for line in &lines {
        println!("{}", line);
    }

    if copy {
        copy_to_clipboard(lines.join("\n"))?;
        info!(lines = lines.len(), "copied output to clipboard");
    }

    Ok(())
}

fn copy_to_clipboard(contents: String) -> Result<(), Box<dyn Error>> {
    let mut ctx = copypasta_ext::try_context().ok_or("No clipboard available on this system.")?;
    ctx.set_contents(contents).map_err(|e| e as Box<dyn Error>)?;

    Ok(())
}
