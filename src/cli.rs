// Command-line interface for geodelta.
//
// Converts between JSON measurement documents and the binary format, and
// prints per-series size breakdowns of encoded files.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use log::info;
use serde::{Deserialize, Serialize};

use crate::compress::{self, Compression, backend};
use crate::format::limits::{DEFAULT_MAX_INPUT_LEN, DEFAULT_MAX_SAMPLES};
use crate::format::measurement::HEADER_LEN;
use crate::format::varint::{self, MAX_VARINT_LEN};
use crate::format::{
    DecodeLimits, FORMAT_VERSION, LocationTrack, Measurement, NullableValue, SeriesKind,
    TrackError,
};
use crate::io::{IoError, hex_digest, read_bounded, read_measurement_file};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const DEFAULT_LEVEL: u32 = 6;

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Byte size parsing (supports K, M, G suffixes)
// ---------------------------------------------------------------------------

fn parse_byte_size(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty size string".into());
    }
    let (num_part, multiplier) = match s.as_bytes().last() {
        Some(b'k' | b'K') => (&s[..s.len() - 1], 1024u64),
        Some(b'm' | b'M') => (&s[..s.len() - 1], 1024 * 1024),
        Some(b'g' | b'G') => (&s[..s.len() - 1], 1024 * 1024 * 1024),
        _ => (s, 1u64),
    };
    let num: u64 = num_part
        .trim()
        .parse()
        .map_err(|e| format!("invalid size '{s}': {e}"))?;
    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size overflow: '{s}'"))
}

// ---------------------------------------------------------------------------
// JSON documents
// ---------------------------------------------------------------------------

fn default_format_version() -> u16 {
    FORMAT_VERSION
}

/// JSON form of a measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementDoc {
    #[serde(default = "default_format_version")]
    pub format_version: u16,
    #[serde(default)]
    pub track: Option<TrackDoc>,
}

/// JSON form of a track; `null` elevations are explicit nulls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackDoc {
    pub timestamps: Vec<i64>,
    pub latitudes: Vec<i32>,
    pub longitudes: Vec<i32>,
    pub accuracies: Vec<u32>,
    pub speeds: Vec<i32>,
    pub elevations: Vec<Option<i32>>,
}

impl From<&Measurement> for MeasurementDoc {
    fn from(m: &Measurement) -> Self {
        Self {
            format_version: m.format_version(),
            track: m.track().map(|t| TrackDoc {
                timestamps: t.timestamps().to_vec(),
                latitudes: t.latitudes().to_vec(),
                longitudes: t.longitudes().to_vec(),
                accuracies: t.accuracies().to_vec(),
                speeds: t.speeds().to_vec(),
                elevations: t.elevations().iter().map(NullableValue::get).collect(),
            }),
        }
    }
}

impl TryFrom<MeasurementDoc> for Measurement {
    type Error = TrackError;

    fn try_from(doc: MeasurementDoc) -> Result<Self, TrackError> {
        let m = Measurement::new(doc.format_version);
        let Some(t) = doc.track else {
            return Ok(m);
        };
        let track = LocationTrack::from_series(
            t.timestamps,
            t.latitudes,
            t.longitudes,
            t.accuracies,
            t.speeds,
            t.elevations.into_iter().map(NullableValue::from).collect(),
        )?;
        Ok(m.with_track(track))
    }
}

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// GPS measurement track encoder/decoder.
#[derive(Parser, Debug)]
#[command(
    name = "geodelta",
    version,
    about = "GPS measurement track encoder/decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Encode a JSON measurement document to the binary format.
    Encode(EncodeArgs),
    /// Decode a binary measurement (bare or enveloped) to JSON.
    Decode(DecodeArgs),
    /// Print the per-series size breakdown of a binary measurement.
    Inspect(InspectArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Input JSON file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Wrap the output in a zlib transfer envelope.
    #[arg(long)]
    compress: bool,

    /// Zlib compression level (0-9).
    #[arg(long, short = 'l', value_parser = clap::value_parser!(u32).range(0..=9), default_value_t = DEFAULT_LEVEL)]
    level: u32,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Input binary file (default: stdin).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "input_pos")]
    input: Option<PathBuf>,

    /// Output JSON file (default: stdout).
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "output_pos")]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Maximum accepted input size (supports K/M/G suffix).
    #[arg(long = "max-input-size", value_parser = parse_byte_size, default_value_t = DEFAULT_MAX_INPUT_LEN as u64)]
    max_input_size: u64,

    /// Check/compute only (do not write output).
    #[arg(long = "check-only")]
    no_output: bool,

    /// Input file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    input_pos: Option<PathBuf>,

    /// Output file (positional form).
    #[arg(value_hint = ValueHint::FilePath)]
    output_pos: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Binary measurement file.
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Maximum accepted input size (supports K/M/G suffix).
    #[arg(long = "max-input-size", value_parser = parse_byte_size, default_value_t = DEFAULT_MAX_INPUT_LEN as u64)]
    max_input_size: u64,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Decode,
    Inspect,
    Config,
}

struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    compress: bool,
    level: u32,
    no_output: bool,
    max_input_len: usize,
    input_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    json_output: bool,
}

impl Options {
    fn base(command: Command, cli: &Cli) -> Self {
        Options {
            command,
            use_stdout: false,
            force: cli.force,
            quiet: cli.quiet,
            verbose: cli.verbose.min(2),
            compress: false,
            level: DEFAULT_LEVEL,
            no_output: false,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            input_file: None,
            output_file: None,
            json_output: cli.json_output,
        }
    }

    fn limits(&self) -> DecodeLimits {
        DecodeLimits::default().with_max_input_len(self.max_input_len)
    }

    fn compression(&self) -> Option<Compression> {
        if !self.compress {
            return None;
        }
        #[cfg(feature = "zlib")]
        {
            Some(Compression::Zlib { level: self.level })
        }
        #[cfg(not(feature = "zlib"))]
        {
            Some(Compression::Stored)
        }
    }
}

fn byte_limit(size: u64) -> usize {
    usize::try_from(size).unwrap_or(usize::MAX)
}

fn resolve_options(cli: Cli) -> Options {
    match &cli.command {
        Cmd::Encode(args) => Options {
            use_stdout: args.stdout,
            compress: args.compress,
            level: args.level,
            input_file: args.input.clone().or_else(|| args.input_pos.clone()),
            output_file: args.output.clone().or_else(|| args.output_pos.clone()),
            ..Options::base(Command::Encode, &cli)
        },
        Cmd::Decode(args) => Options {
            use_stdout: args.stdout,
            no_output: args.no_output,
            max_input_len: byte_limit(args.max_input_size),
            input_file: args.input.clone().or_else(|| args.input_pos.clone()),
            output_file: args.output.clone().or_else(|| args.output_pos.clone()),
            ..Options::base(Command::Decode, &cli)
        },
        Cmd::Inspect(args) => Options {
            max_input_len: byte_limit(args.max_input_size),
            input_file: Some(args.input.clone()),
            ..Options::base(Command::Inspect, &cli)
        },
        Cmd::Config => Options::base(Command::Config, &cli),
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("geodelta".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Shared I/O helpers
// ---------------------------------------------------------------------------

fn read_input(path: Option<&Path>, max: usize) -> Result<Vec<u8>, IoError> {
    match path {
        Some(path) => read_bounded(BufReader::with_capacity(BUF_SIZE, File::open(path)?), max),
        None => read_bounded(io::stdin().lock(), max),
    }
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, String> {
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        (false, Some(path)) => {
            if path.exists() && !opts.force {
                return Err(format!(
                    "output file exists, use -f to overwrite: {}",
                    path.display()
                ));
            }
            File::create(path)
                .map(|f| Box::new(BufWriter::with_capacity(BUF_SIZE, f)) as Box<dyn Write>)
                .map_err(|e| format!("output file: {}: {e}", path.display()))
        }
    }
}

fn print_json_stats(value: &serde_json::Value) {
    if let Ok(text) = serde_json::to_string_pretty(value) {
        eprintln!("{text}");
    }
}

fn envelope_name(backend: Option<u8>) -> &'static str {
    match backend {
        None => "none",
        Some(backend::STORED_ID) => "stored",
        Some(backend::ZLIB_ID) => "zlib",
        Some(_) => "unknown",
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("geodelta version {version} (Rust)");
    let zlib = cfg!(feature = "zlib") as u8;
    let file_io = cfg!(feature = "file-io") as u8;
    eprintln!("FORMAT_VERSION={FORMAT_VERSION}");
    eprintln!("HEADER_LEN={HEADER_LEN}");
    eprintln!("MAX_VARINT_LEN={MAX_VARINT_LEN}");
    eprintln!("DEFAULT_MAX_INPUT_LEN={DEFAULT_MAX_INPUT_LEN}");
    eprintln!("DEFAULT_MAX_SAMPLES={DEFAULT_MAX_SAMPLES}");
    eprintln!("ZLIB={zlib}");
    eprintln!("FILE_IO={file_io}");
    0
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn cmd_encode(opts: &Options) -> i32 {
    let input = match read_input(opts.input_file.as_deref(), opts.max_input_len) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("geodelta: input: {e}");
            return 1;
        }
    };

    let doc: MeasurementDoc = match serde_json::from_slice(&input) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("geodelta: invalid JSON document: {e}");
            return 1;
        }
    };

    let measurement = match Measurement::try_from(doc) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("geodelta: invalid track: {e}");
            return 1;
        }
    };

    let bytes = match crate::io::encode_measurement(&measurement, opts.compression()) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("geodelta: encode error: {e}");
            return 1;
        }
    };

    let mut writer = match open_output(opts) {
        Ok(w) => w,
        Err(msg) => {
            eprintln!("geodelta: {msg}");
            return 1;
        }
    };
    if let Err(e) = writer.write_all(&bytes).and_then(|()| writer.flush()) {
        eprintln!("geodelta: write error: {e}");
        return 1;
    }

    info!(
        "encoded {} samples into {} bytes",
        measurement.sample_count(),
        bytes.len()
    );
    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "geodelta: encoder: samples: {}, encoded size: {}, output size: {}",
            measurement.sample_count(),
            measurement.encoded_len(),
            bytes.len()
        );
    }

    if opts.json_output {
        print_json_stats(&serde_json::json!({
            "command": "encode",
            "format_version": measurement.format_version(),
            "samples": measurement.sample_count(),
            "encoded_size": measurement.encoded_len(),
            "output_size": bytes.len(),
            "compressed": opts.compress,
        }));
    }

    0
}

// ---------------------------------------------------------------------------
// Decode command
// ---------------------------------------------------------------------------

fn cmd_decode(opts: &Options) -> i32 {
    let input = match read_input(opts.input_file.as_deref(), opts.max_input_len) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("geodelta: input: {e}");
            return 1;
        }
    };

    let measurement = match compress::decode_any(&input, &opts.limits()) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("geodelta: decode error: {e}");
            return 1;
        }
    };

    if !opts.no_output {
        let mut writer = match open_output(opts) {
            Ok(w) => w,
            Err(msg) => {
                eprintln!("geodelta: {msg}");
                return 1;
            }
        };
        let doc = MeasurementDoc::from(&measurement);
        let written = serde_json::to_writer_pretty(&mut writer, &doc)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(writer))
            .and_then(|()| writer.flush());
        if let Err(e) = written {
            eprintln!("geodelta: write error: {e}");
            return 1;
        }
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "geodelta: decoder: input size: {}, envelope: {}, samples: {}",
            input.len(),
            envelope_name(compress::envelope_backend(&input)),
            measurement.sample_count()
        );
    }

    if opts.json_output {
        print_json_stats(&serde_json::json!({
            "command": "decode",
            "format_version": measurement.format_version(),
            "input_size": input.len(),
            "envelope": envelope_name(compress::envelope_backend(&input)),
            "samples": measurement.sample_count(),
        }));
    }

    0
}

// ---------------------------------------------------------------------------
// Inspect command
// ---------------------------------------------------------------------------

fn cmd_inspect(opts: &Options) -> i32 {
    let Some(path) = opts.input_file.as_deref() else {
        eprintln!("geodelta: inspect requires an input file");
        return 1;
    };
    let (measurement, stats) = match read_measurement_file(path, &opts.limits()) {
        Ok(read) => read,
        Err(e) => {
            eprintln!("geodelta: {}: {e}", path.display());
            return 1;
        }
    };
    let digest = stats.sha256.as_ref().map(hex_digest);

    let mut series = Vec::new();
    println!("format version:   {}", measurement.format_version());
    println!("envelope:         {}", envelope_name(stats.backend));
    println!("file size:        {}", stats.file_size);
    println!("encoded size:     {}", measurement.encoded_len());
    if let Some(digest) = &digest {
        println!("sha256:           {digest}");
    }
    match measurement.track() {
        None => println!("track:            absent"),
        Some(track) => {
            let body = track.encoded_len();
            println!("track:            present");
            println!("samples:          {}", track.len());
            println!(
                "track block:      {} bytes (+{} length prefix)",
                body,
                varint::sizeof_usize(body)
            );
            for kind in SeriesKind::ALL {
                let entries = track.series_len(kind);
                let bytes = track.block_len(kind);
                println!("  {:<10} {entries:>8} entries {bytes:>10} bytes", kind.name());
                series.push(serde_json::json!({
                    "series": kind.name(),
                    "entries": entries,
                    "bytes": bytes,
                }));
            }
        }
    }

    if opts.json_output {
        print_json_stats(&serde_json::json!({
            "command": "inspect",
            "format_version": measurement.format_version(),
            "file_size": stats.file_size,
            "envelope": envelope_name(stats.backend),
            "sha256": digest,
            "samples": stats.samples,
            "series": series,
        }));
    }

    0
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let mut opts = resolve_options(cli);
    init_logging(opts.verbose, opts.quiet);

    // Warn if -c overrides output filename.
    if opts.use_stdout && !opts.quiet {
        if let Some(path) = &opts.output_file {
            eprintln!(
                "geodelta: warning: -c option overrides output filename: {}",
                path.display()
            );
        }
    }
    if opts.use_stdout {
        opts.output_file = None;
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Decode => cmd_decode(&opts),
        Command::Inspect => cmd_inspect(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_opts(args: &[&str]) -> Options {
        let argv: Vec<String> = std::iter::once("geodelta".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        let cli = Cli::try_parse_from(argv).expect("cli parse failed");
        resolve_options(cli)
    }

    #[test]
    fn parse_byte_size_suffixes() {
        assert_eq!(parse_byte_size("1").unwrap(), 1);
        assert_eq!(parse_byte_size("2K").unwrap(), 2 * 1024);
        assert_eq!(parse_byte_size("3m").unwrap(), 3 * 1024 * 1024);
        assert_eq!(parse_byte_size("4G").unwrap(), 4 * 1024 * 1024 * 1024);
        assert!(parse_byte_size("").is_err());
        assert!(parse_byte_size("12x").is_err());
    }

    #[test]
    fn encode_subcommand_maps_correctly() {
        let opts = parse_opts(&["encode", "--compress", "--level", "9", "in.json", "out.bin"]);
        assert_eq!(opts.command, Command::Encode);
        assert!(opts.compress);
        assert_eq!(opts.level, 9);
        assert_eq!(opts.input_file, Some(PathBuf::from("in.json")));
        assert_eq!(opts.output_file, Some(PathBuf::from("out.bin")));
    }

    #[test]
    fn decode_subcommand_maps_correctly() {
        let opts = parse_opts(&[
            "--quiet",
            "decode",
            "--max-input-size",
            "1M",
            "--check-only",
            "in.bin",
            "out.json",
        ]);
        assert_eq!(opts.command, Command::Decode);
        assert!(opts.no_output);
        assert!(opts.quiet);
        assert_eq!(opts.max_input_len, 1024 * 1024);
        assert_eq!(opts.limits().max_input_len, 1024 * 1024);
        assert_eq!(opts.input_file, Some(PathBuf::from("in.bin")));
        assert_eq!(opts.output_file, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn global_stdio_and_force_flags() {
        let opts = parse_opts(&["--force", "encode", "--stdout", "in", "out"]);
        assert!(opts.use_stdout);
        assert!(opts.force);
    }

    #[test]
    fn verbose_is_capped() {
        let verbose = parse_opts(&["--verbose", "--verbose", "--verbose", "encode", "in", "out"]);
        assert_eq!(verbose.verbose, 2);
    }

    #[test]
    fn level_out_of_range_is_rejected() {
        let argv = ["geodelta", "encode", "--level", "10", "in"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn inspect_and_config_map() {
        let opts = parse_opts(&["inspect", "m.bin"]);
        assert_eq!(opts.command, Command::Inspect);
        assert_eq!(opts.input_file, Some(PathBuf::from("m.bin")));
        assert_eq!(parse_opts(&["config"]).command, Command::Config);
    }

    #[test]
    fn compression_follows_flag() {
        assert_eq!(parse_opts(&["encode", "in"]).compression(), None);
        #[cfg(feature = "zlib")]
        assert_eq!(
            parse_opts(&["encode", "--compress", "-l", "3", "in"]).compression(),
            Some(Compression::Zlib { level: 3 })
        );
    }

    #[test]
    fn json_document_roundtrip() {
        let json = r#"{
            "format_version": 2,
            "track": {
                "timestamps": [1621582427000, 1621582428000],
                "latitudes": [51064590, 51064780],
                "longitudes": [13699045, 13698345],
                "accuracies": [800, 500],
                "speeds": [1000, 0],
                "elevations": [null, 48000]
            }
        }"#;
        let doc: MeasurementDoc = serde_json::from_str(json).unwrap();
        let m = Measurement::try_from(doc.clone()).unwrap();
        assert_eq!(m.encoded_len(), 54);
        assert_eq!(MeasurementDoc::from(&m), doc);
    }

    #[test]
    fn json_document_defaults() {
        let doc: MeasurementDoc = serde_json::from_str("{}").unwrap();
        assert_eq!(doc.format_version, FORMAT_VERSION);
        assert!(doc.track.is_none());
        let m = Measurement::try_from(doc).unwrap();
        assert_eq!(m.encode().len(), 3);
    }

    #[test]
    fn json_document_length_mismatch() {
        let json = r#"{"track": {"timestamps": [1, 2], "speeds": [5]}}"#;
        let doc: MeasurementDoc = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Measurement::try_from(doc),
            Err(TrackError::SeriesLengthMismatch {
                series: SeriesKind::Speed,
                ..
            })
        ));
    }

    #[test]
    fn envelope_names() {
        assert_eq!(envelope_name(compress::envelope_backend(&[0, 2, 0])), "none");
        assert_eq!(envelope_name(compress::envelope_backend(b"GDT\x00")), "stored");
        assert_eq!(envelope_name(compress::envelope_backend(b"GDT\x01")), "zlib");
        assert_eq!(envelope_name(Some(0x7F)), "unknown");
    }
}
