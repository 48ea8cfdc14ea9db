use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LORADEC_BUILD_COMMIT"),
    " ",
    env!("LORADEC_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "loradec")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for LoRaWAN sensor telemetry payloads (Cayenne LPP / Laird).",
    long_about = None,
    after_help = "Examples:\n  loradec decode --protocol cayenne AWcBEA== --stdout\n  loradec decode --protocol laird CQAAAQEB --stdout --pretty\n  loradec decode --protocol cayenne AWcBEA== -o decoded.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a single base64 uplink payload and emit a JSON record.
    Decode {
        /// Base64-encoded payload, as delivered by the network server
        payload: String,

        /// Wire protocol the payload uses
        #[arg(short = 'p', long, value_enum)]
        protocol: Protocol,

        /// Output path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Protocol {
    /// Cayenne LPP multi-record stream
    Cayenne,
    /// Laird fixed-layout single-record messages
    Laird,
}

impl Protocol {
    fn name(self) -> &'static str {
        match self {
            Protocol::Cayenne => "cayenne",
            Protocol::Laird => "laird",
        }
    }
}

/// Envelope around the decoded records, stamped with tool metadata.
#[derive(Debug, Serialize)]
struct DecodeReport {
    tool: ToolInfo,
    decoded_at: String,
    protocol: &'static str,
    payload_bytes: usize,
    records: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            payload,
            protocol,
            report,
            stdout,
            pretty,
            compact,
            quiet,
        } => cmd_decode(payload, protocol, report, stdout, pretty, compact, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(
    payload: String,
    protocol: Protocol,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let bytes = BASE64.decode(payload.trim()).map_err(|err| {
        CliError::new(
            format!("invalid base64 payload: {err}"),
            Some("pass the PayloadData field exactly as the network server delivers it".to_string()),
        )
    })?;

    let records = decode_records(protocol, &bytes)?;
    if !quiet && records_are_empty(&records) {
        eprintln!("note: no decodable record in payload");
    }

    let rep = DecodeReport {
        tool: ToolInfo {
            name: "loradec".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        decoded_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("timestamp formatting failed")?,
        protocol: protocol.name(),
        payload_bytes: bytes.len(),
        records,
    };
    let json = serialize_report(&rep, pretty, compact)?;

    if stdout {
        println!("{}", json);
        return Ok(());
    }

    let report = report.ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--report or --stdout".to_string()),
        )
    })?;
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&report, json)
        .with_context(|| format!("Failed to write output: {}", report.display()))?;
    if !quiet {
        eprintln!("OK: decoded record written -> {}", report.display());
    }
    Ok(())
}

fn decode_records(protocol: Protocol, bytes: &[u8]) -> Result<serde_json::Value, CliError> {
    match protocol {
        Protocol::Cayenne => {
            let readings = loradec_core::decode_cayenne(bytes).map_err(|err| {
                CliError::new(
                    format!("Cayenne LPP decode failed: {err}"),
                    Some("check that the payload really is Cayenne LPP".to_string()),
                )
            })?;
            serde_json::to_value(readings)
                .context("JSON serialization failed")
                .map_err(Into::into)
        }
        Protocol::Laird => {
            let messages = loradec_core::decode_laird(bytes);
            serde_json::to_value(messages)
                .context("JSON serialization failed")
                .map_err(Into::into)
        }
    }
}

fn records_are_empty(records: &serde_json::Value) -> bool {
    match records {
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(entries) => entries.is_empty(),
        _ => false,
    }
}

fn serialize_report(rep: &DecodeReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}
