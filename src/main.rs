// src/main.rs
//
// versewrap: command line front end
//
// Reads passage HTML, wraps each verse in its own container and writes the
// rendered <body> contents.
//
// CLI flags:
//   --anchor-class   : class token on verse anchors            (default "va")
//   --number-class   : class token on verse numerals           (default "verse-num")
//   --id-prefix      : prefix a rel value must start with      (default "v")
//   --wrapper-tag    : element used for verse containers       (default "span")
//   --wrapper-class  : class given to verse containers         (default "verse")
//   --id-attribute   : attribute holding the verse identifier  (default "data-verse")
//   -o, --output     : output file
//   -t, --trace      : log restructuring decisions to stderr (RUST_LOG filters)
// Several inputs are joined into one passage before wrapping. `-` reads stdin.
// Default output: overwrite the input file when there is exactly one, else stdout.

use anyhow::Context;
use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use versewrap::config::{
    DEFAULT_ANCHOR_CLASS, DEFAULT_ID_ATTRIBUTE, DEFAULT_ID_PREFIX, DEFAULT_NUMBER_CLASS,
    DEFAULT_WRAPPER_CLASS, DEFAULT_WRAPPER_TAG,
};
use versewrap::{wrap_passages, VerseConfig};

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Class token identifying verse anchors
    #[arg(long, default_value = DEFAULT_ANCHOR_CLASS)]
    anchor_class: String,

    /// Class token identifying verse numerals
    #[arg(long, default_value = DEFAULT_NUMBER_CLASS)]
    number_class: String,

    /// Prefix of verse identifiers in the anchor's rel attribute
    #[arg(long, default_value = DEFAULT_ID_PREFIX)]
    id_prefix: String,

    /// Element name of verse containers
    #[arg(long, default_value = DEFAULT_WRAPPER_TAG)]
    wrapper_tag: String,

    /// Class of verse containers
    #[arg(long, default_value = DEFAULT_WRAPPER_CLASS)]
    wrapper_class: String,

    /// Attribute carrying the verse identifier on containers
    #[arg(long, default_value = DEFAULT_ID_ATTRIBUTE)]
    id_attribute: String,

    /// Log restructuring decisions to stderr
    #[arg(short, long, action = ArgAction::SetTrue)]
    trace: bool,

    /// Output file (default: overwrite a single input file, otherwise stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input files, joined in order; `-` reads stdin
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> VerseConfig {
        VerseConfig::default()
            .with_anchor_class(&self.anchor_class)
            .with_number_class(&self.number_class)
            .with_id_prefix(&self.id_prefix)
            .with_wrapper(&self.wrapper_tag, &self.wrapper_class, &self.id_attribute)
    }

    /// Where the result goes when `--output` is absent.
    fn default_output(&self) -> Option<&Path> {
        match self.inputs.as_slice() {
            [only] if !is_stdin(only) => Some(only.as_path()),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.trace {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("versewrap=trace")),
            )
            .finish()
            .init();
        info!("Logger initialized");
    }

    let passages = cli
        .inputs
        .iter()
        .map(|path| read_input(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let wrapped = wrap_passages(&passages, &cli.config()).context("could not wrap verses")?;

    match cli.output.as_deref().or_else(|| cli.default_output()) {
        Some(path) => fs::write(path, wrapped)
            .with_context(|| format!("could not write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(wrapped.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("could not read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("could not read {}", path.display()))
}
