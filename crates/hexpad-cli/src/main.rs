use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use hexpad_core::{is_hex_color, pad_hex, rgb_hex};
use hexpad_routes::{DEFAULT_DEV_ORIGIN, RouteError, RouteTable};
use tabwriter::TabWriter;

#[derive(Debug, Parser)]
#[command(name = "hexpad", version, about = "Hex color padding and dev proxy route tools")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pad or truncate each input to a six-character hex code.
    Pad {
        /// Inputs to pad. Reads stdin line by line when omitted.
        inputs: Vec<String>,
    },
    /// Format a numeric color (decimal, 0x.. or #..) as a hex code.
    Rgb {
        /// e.g. 16711680, 0xff0000 or #ff0000
        value: String,
    },
    /// Print the proxy route table.
    Routes {
        #[command(flatten)]
        source: RouteSource,
        /// Print the table as a route config JSON document
        #[arg(long)]
        json: bool,
    },
    /// Print the URL a request path would be proxied to.
    Resolve {
        /// Request path, e.g. /user/42
        path: String,
        #[command(flatten)]
        source: RouteSource,
    },
}

#[derive(Debug, Args)]
struct RouteSource {
    /// Route config JSON path. Overrides --origin.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Backend origin for the stock dev routes
    #[arg(long, env = "HEXPAD_ORIGIN", default_value = DEFAULT_DEV_ORIGIN)]
    origin: String,
}

impl RouteSource {
    fn load(&self) -> Result<RouteTable, RouteError> {
        match &self.config {
            Some(path) => RouteTable::from_path(path),
            None => RouteTable::dev_defaults(&self.origin),
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Pad { inputs } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();

            if inputs.is_empty() {
                for line in io::stdin().lock().lines() {
                    writeln!(out, "{}", pad_one(&line?))?;
                }
            } else {
                for input in &inputs {
                    writeln!(out, "{}", pad_one(input))?;
                }
            }
        }
        Command::Rgb { value } => match parse_rgb(&value) {
            Some(rgb) => println!("{}", rgb_hex(rgb)),
            None => {
                eprintln!("invalid color value '{value}'");
                process::exit(1);
            }
        },
        Command::Routes { source, json } => {
            let table = load_or_exit(&source);

            if json {
                println!("{}", table.to_config().to_pretty_json()?);
            } else {
                let mut tw = TabWriter::new(io::stdout());
                writeln!(tw, "prefix\ttarget\tkind")?;
                for r in table.routes() {
                    let kind = if r.is_websocket() { "websocket" } else { "http" };
                    writeln!(tw, "{}\t{}\t{}", r.prefix(), r.origin(), kind)?;
                }
                tw.flush()?;
            }
        }
        Command::Resolve { path, source } => {
            let table = load_or_exit(&source);

            let Some(route) = table.resolve(&path) else {
                eprintln!("no route for '{path}'");
                process::exit(2);
            };

            match route.forward_url(&path) {
                Some(url) => println!("{url}"),
                None => {
                    eprintln!("refusing '{path}': path would be rewritten by URL normalization");
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn pad_one(input: &str) -> String {
    let out = pad_hex(input);
    if !is_hex_color(&out) {
        tracing::warn!(input, output = %out, "padded value is not a hex color");
    }
    out
}

/// Parse `255`, `0xff`, or `#ff`.
fn parse_rgb(value: &str) -> Option<u32> {
    let v = value.trim();
    let hex = v
        .strip_prefix("0x")
        .or_else(|| v.strip_prefix("0X"))
        .or_else(|| v.strip_prefix('#'));

    match hex {
        Some(digits) => u32::from_str_radix(digits, 16).ok(),
        None => v.parse().ok(),
    }
}

fn load_or_exit(source: &RouteSource) -> RouteTable {
    match source.load() {
        Ok(t) => t,
        Err(e) => {
            tracing::debug!(code = e.code(), "route table rejected");
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
