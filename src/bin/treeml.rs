//! treeml -- serialize JSON-encoded element trees to markup.
//!
//! Each input file holds one tree value in the JSON format accepted by
//! `markup_tree::json`. The serialized markup of each file is written to
//! stdout (or to `--output`), one document per line.

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use markup_tree::json::Decoder;
use markup_tree::serial::{serialize_with_options, SerializeOptions};

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// treeml -- serialize JSON element trees to compact markup.
#[derive(Parser, Debug)]
#[command(name = "treeml", version, about, long_about = None)]
struct Cli {
    /// JSON tree files to process (use `-` for stdin).
    #[arg(required = true)]
    files: Vec<String>,

    /// Log decoding and serialization details to stderr.
    #[arg(long)]
    verbose: bool,

    // -- Serialization options ---------------------------------------------
    /// Tag whose children are emitted verbatim, without escaping.
    #[arg(long, value_name = "TAG", default_value = markup_tree::builder::RAW_TAG)]
    raw_tag: String,

    /// Disable the raw passthrough tag entirely.
    #[arg(long, conflicts_with = "raw_tag")]
    no_raw: bool,

    /// Keep attribute names as authored instead of converting to kebab-case.
    #[arg(long)]
    keep_attribute_case: bool,

    // -- Output options ----------------------------------------------------
    /// Do not output the result markup (decode and serialize only).
    #[arg(long)]
    noout: bool,

    /// Save output to a file instead of stdout.
    #[arg(long, value_name = "FILE")]
    output: Option<String>,

    /// Print timing information for decoding and serialization.
    #[arg(long)]
    timing: bool,
}

impl Cli {
    fn serialize_options(&self) -> SerializeOptions {
        let raw_tag = if self.no_raw { None } else { Some(self.raw_tag.as_str()) };
        SerializeOptions::default()
            .raw_tag(raw_tag)
            .kebab_attributes(!self.keep_attribute_case)
    }
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SUCCESS: u8 = 0;
const EXIT_INPUT_ERROR: u8 = 1;

// ---------------------------------------------------------------------------
// Main entry point
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let decoder = Decoder::new();
    let options = cli.serialize_options();
    let mut output = String::new();
    let mut worst_exit = EXIT_SUCCESS;

    for file in &cli.files {
        match process_file(&cli, &decoder, &options, file) {
            Ok(markup) => {
                output.push_str(&markup);
                output.push('\n');
            }
            Err(msg) => {
                error!(file = %file, "{msg}");
                eprintln!("{file}: {msg}");
                worst_exit = EXIT_INPUT_ERROR;
            }
        }
    }

    if !cli.noout {
        if let Err(e) = write_output(&cli, &output) {
            eprintln!("failed to write output: {e}");
            worst_exit = EXIT_INPUT_ERROR;
        }
    }

    ExitCode::from(worst_exit)
}

/// Installs a stderr subscriber honoring `RUST_LOG`, defaulting to `warn`
/// (or `debug` with `--verbose`).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Decodes and serializes a single input file.
fn process_file(
    cli: &Cli,
    decoder: &Decoder,
    options: &SerializeOptions,
    filename: &str,
) -> Result<String, String> {
    // -- Read input --------------------------------------------------------
    let start_read = Instant::now();
    let input = read_input(filename).map_err(|e| format!("failed to read: {e}"))?;
    if cli.timing {
        let elapsed = start_read.elapsed();
        eprintln!("Reading file {filename} took {elapsed:?}");
    }

    // -- Decode ------------------------------------------------------------
    let start_decode = Instant::now();
    let tree = decoder.decode_str(&input).map_err(|e| e.to_string())?;
    debug!(file = %filename, "decoded tree");
    if cli.timing {
        let elapsed = start_decode.elapsed();
        eprintln!("Decoding took {elapsed:?}");
    }

    // -- Serialize ---------------------------------------------------------
    let start_serial = Instant::now();
    let markup = serialize_with_options(&tree, options);
    if cli.timing {
        let elapsed = start_serial.elapsed();
        eprintln!("Serializing took {elapsed:?}");
    }

    Ok(markup)
}

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

/// Reads input from a file or stdin (when filename is `-`).
fn read_input(filename: &str) -> io::Result<String> {
    if filename == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        fs::read_to_string(filename)
    }
}

fn write_output(cli: &Cli, content: &str) -> io::Result<()> {
    if let Some(ref output_file) = cli.output {
        fs::write(output_file, content)
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()
    }
}
