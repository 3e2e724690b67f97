use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use tx_decoder::txid::tx_id_hex;
use tx_decoder::{DecoderConfig, Transaction, TransactionDecoder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Decode a raw transaction into JSON", long_about = None)]
struct Args {
    /// Raw transaction hex (read from stdin when omitted)
    hex: Option<String>,

    /// Read the transaction hex from a file
    #[arg(short = 'f', long = "file", value_name = "FILE", conflicts_with = "hex")]
    file: Option<PathBuf>,

    /// Load decoder settings from a JSON file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fail when bytes remain after the last output
    #[arg(long)]
    strict: bool,

    /// Accept the full u64 range instead of the 2^53 - 1 ceiling
    #[arg(long)]
    native: bool,

    /// Compute the SHA-256d identifier of the decoded bytes
    #[arg(long = "with-id")]
    with_id: bool,

    /// Pretty-print the JSON output
    #[arg(short = 'p', long)]
    pretty: bool,
}

fn setup_logging() {
    let mut builder = Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter(None, LevelFilter::Warn);
    }
    builder.init();
}

fn load_config(args: &Args) -> Result<DecoderConfig> {
    let mut config = match &args.config {
        Some(path) => DecoderConfig::from_json_file(path)?,
        None => DecoderConfig::default(),
    };
    if args.native {
        config.precision_ceiling = u64::MAX;
    }
    if args.strict {
        config.allow_trailing_bytes = false;
    }
    log::debug!("decoder config: {:?}", config);
    Ok(config)
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(hex) = &args.hex {
        return Ok(hex.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading transaction hex from stdin")?;
    Ok(buf)
}

fn decode(args: &Args, decoder: &TransactionDecoder, hex: &str) -> Result<Transaction> {
    let hex = hex.trim();
    if hex.is_empty() {
        bail!("no transaction hex given");
    }
    let tx = if args.with_id {
        let bytes = tx_decoder::transaction::parse_hex(hex)?;
        let tx = decoder.decode_with_id(&bytes)?;
        if let Some(id) = &tx.id {
            log::info!("txid {}", tx_id_hex(id));
        }
        tx
    } else {
        decoder.decode_hex(hex)?
    };
    Ok(tx)
}

fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    let decoder = TransactionDecoder::with_config(load_config(&args)?);
    let hex = read_input(&args)?;

    let tx = decode(&args, &decoder, &hex).context("decoding transaction")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&tx)?
    } else {
        serde_json::to_string(&tx)?
    };
    println!("{}", json);
    Ok(())
}
