use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};

use linkfield::{
    format_debug, format_json, format_targets, parse_field_with_base,
    parse_header_lines_with_base,
};

/// linkfield CLI — RFC 8288 Link header field parser.
///
/// Reads HTTP header lines from a file, --raw string, or stdin and
/// outputs the parsed links in the chosen format. By default each input
/// line is treated as one header line and only `Link: `-prefixed lines
/// are parsed; pass --field when the input is an already-extracted field
/// value.
///
/// Escape sequences (\r, \n, \t, \\) in the --raw value are interpreted
/// so multiple header lines can be passed as a single shell argument.
#[derive(Parser)]
#[command(name = "linkfield-cli", version, about, long_about = None)]
struct Cli {
    /// Path to a file containing header lines (or a field value with
    /// --field). Reads from stdin when neither FILE nor --raw is given.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Input string (escape sequences \r \n \t \\ are expanded).
    #[arg(long)]
    raw: Option<String>,

    /// Treat the whole input as one pre-extracted Link field value
    /// instead of a set of header lines.
    #[arg(long)]
    field: bool,

    /// Base URI for resolving relative targets and anchors.
    #[arg(short, long, default_value = "")]
    base: String,

    /// Output format.
    #[arg(short, long, default_value = "json", value_enum)]
    format: OutputFormat,

    /// Pretty-print JSON output (ignored for other formats).
    #[arg(short, long)]
    pretty: bool,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    /// JSON array of link objects
    Json,
    /// Human-readable debug output
    Debug,
    /// One resolved target URI per line
    Targets,
}

fn main() {
    let cli = Cli::parse();

    // When no input source is provided and stdin is a terminal (not piped),
    // show help instead of blocking.
    if cli.file.is_none() && cli.raw.is_none() && std::io::stdin().is_terminal() {
        Cli::command().print_help().ok();
        println!();
        process::exit(0);
    }

    let input = match read_input(&cli) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading input: {e}");
            process::exit(1);
        }
    };

    let links = if cli.field {
        parse_field_with_base(input.trim_end_matches(['\r', '\n']), &cli.base)
    } else {
        let lines: Vec<&str> = input.lines().collect();
        parse_header_lines_with_base(&lines, &cli.base)
    };

    let output = match cli.format {
        OutputFormat::Json => format_json(&links, cli.pretty),
        OutputFormat::Debug => format_debug(&links),
        OutputFormat::Targets => format_targets(&links),
    };

    print!("{output}");
}

/// Read input text from --raw, a file, or stdin.
fn read_input(cli: &Cli) -> Result<String, std::io::Error> {
    if let Some(raw) = &cli.raw {
        return Ok(unescape(raw));
    }
    match &cli.file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Expand C-style escape sequences (`\r`, `\n`, `\t`, `\\`) in a string.
///
/// Any other `\X` sequence is kept as-is (both the backslash and `X`).
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('r') => out.push('\r'),
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('\\') => out.push('\\'),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}
