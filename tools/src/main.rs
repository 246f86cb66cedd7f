use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use udpx_tools::{
    address_slot_hex, build_packet, compute_tags, format_filter_pretty, format_tags_pretty,
    inspect_packet, parse_magic,
};
use wire::{parse_address, random_bytes, Address, LogConfig, Route};

#[derive(Parser)]
#[command(
    name = "udpx-tools",
    version,
    about = "udpx packet stamping and filtering tools"
)]
struct Cli {
    /// Enable debug logs (same as NEXT_DEBUG_LOGS=1).
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute Chonkle and Pittle for a route.
    Tags {
        /// Magic value as hex.
        #[arg(long)]
        magic: String,
        /// Sender address, e.g. 1.2.3.4:1000.
        #[arg(long)]
        from: String,
        /// Receiver address.
        #[arg(long)]
        to: String,
        /// Total packet length in bytes.
        #[arg(long)]
        len: u32,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Build a stamped packet around a payload.
    Stamp {
        #[arg(long)]
        magic: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Packet type byte (1..=99).
        #[arg(long, default_value_t = 1)]
        packet_type: u8,
        /// Payload as hex.
        #[arg(long, default_value = "")]
        payload: String,
        /// Write the packet here instead of printing hex.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the packet filters over a captured packet.
    Filter {
        /// Path to the packet bytes.
        packet_path: PathBuf,
        /// Magic value as hex. Requires --from and --to.
        #[arg(long, requires_all = ["from", "to"])]
        magic: Option<String>,
        #[arg(long, requires = "magic")]
        from: Option<String>,
        #[arg(long, requires = "magic")]
        to: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },
    /// Print the 19-byte wire slot for an address.
    Address {
        /// Address text; a bare IP gets port 0.
        text: String,
    },
    /// Generate a random magic value.
    Magic {
        #[arg(long, default_value_t = 8)]
        bytes: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = LogConfig::from_env();
    if cli.debug {
        config = LogConfig::debug();
    }
    init_tracing(config);

    match cli.command {
        Command::Tags {
            magic,
            from,
            to,
            len,
            format,
        } => {
            let magic = parse_magic(&magic)?;
            let report = compute_tags(&magic, &address(&from)?, &address(&to)?, len);
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => println!("{}", format_tags_pretty(&report)),
            }
        }
        Command::Stamp {
            magic,
            from,
            to,
            packet_type,
            payload,
            out,
        } => {
            let magic = parse_magic(&magic)?;
            let body = hex::decode(payload.trim()).context("invalid payload hex")?;
            let packet = build_packet(
                packet_type,
                &body,
                &magic,
                &address(&from)?,
                &address(&to)?,
            )?;
            match out {
                Some(path) => {
                    fs::write(&path, &packet)
                        .with_context(|| format!("write packet {}", path.display()))?;
                    tracing::info!(path = %path.display(), len = packet.len(), "wrote packet");
                }
                None => println!("{}", hex::encode(&packet)),
            }
        }
        Command::Filter {
            packet_path,
            magic,
            from,
            to,
            format,
        } => {
            let bytes = fs::read(&packet_path)
                .with_context(|| format!("read packet {}", packet_path.display()))?;
            let context = match (magic, from, to) {
                (Some(magic), Some(from), Some(to)) => Some((
                    parse_magic(&magic)?,
                    Route::new(&address(&from)?, &address(&to)?),
                )),
                _ => None,
            };
            let report = inspect_packet(
                &bytes,
                context
                    .as_ref()
                    .map(|(magic, route)| (magic.as_slice(), route)),
            );
            match format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => println!("{}", format_filter_pretty(&report)),
            }
        }
        Command::Address { text } => {
            let parsed = address(&text)?;
            println!("{parsed}");
            println!("{}", address_slot_hex(&parsed));
        }
        Command::Magic { bytes } => {
            println!("{}", hex::encode(random_bytes(bytes)));
        }
    }
    Ok(())
}

fn address(text: &str) -> Result<Address> {
    parse_address(text).with_context(|| format!("parse address {text:?}"))
}

/// `RUST_LOG` wins; otherwise the level comes from the log config.
fn init_tracing(config: LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
