//! unhtml CLI - HTML to plain text conversion tool

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unhtml::api::{handle_json, JsonFormat};
use unhtml::{detect, ConversionOptions, TextCounts, Unhtml};

/// File name used when converting standard input in batch mode.
const STDIN_OUTPUT_NAME: &str = "converted-text.txt";

#[derive(Parser)]
#[command(name = "unhtml")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert HTML to clean plain text", long_about = None)]
struct Cli {
    /// Input HTML file ("-" for stdin)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(flatten)]
    flags: OptionFlags,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one HTML document to plain text
    Text {
        /// Input HTML file (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: OptionFlags,
    },

    /// Convert many HTML files in parallel, writing <name>.txt for each
    Convert {
        /// Input HTML files ("-" for stdin)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        flags: OptionFlags,
    },

    /// Show character and word statistics for a conversion
    Stats {
        /// Input HTML file (stdin if omitted or "-")
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        #[command(flatten)]
        flags: OptionFlags,
    },

    /// Read a JSON conversion request from stdin and print the JSON response
    Api {
        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

/// Pipeline switches; every stage runs unless turned off.
#[derive(Args, Clone, Copy, Default)]
struct OptionFlags {
    /// Do not turn block elements into line breaks
    #[arg(long, env = "UNHTML_NO_LINE_BREAKS")]
    no_line_breaks: bool,

    /// Keep whitespace exactly as it appears after tag removal
    #[arg(long, env = "UNHTML_KEEP_SPACES")]
    keep_spaces: bool,

    /// Leave character entities undecoded
    #[arg(long, env = "UNHTML_NO_ENTITIES")]
    no_entities: bool,
}

impl From<OptionFlags> for ConversionOptions {
    fn from(flags: OptionFlags) -> Self {
        ConversionOptions::new()
            .with_line_breaks(!flags.no_line_breaks)
            .with_extra_space_removal(!flags.keep_spaces)
            .with_entities(!flags.no_entities)
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Text {
            input,
            output,
            flags,
        }) => cmd_text(input.as_deref(), output.as_deref(), flags),
        Some(Commands::Convert {
            inputs,
            output,
            flags,
        }) => cmd_convert(&inputs, output.as_deref(), flags),
        Some(Commands::Stats { input, flags }) => cmd_stats(input.as_deref(), flags),
        Some(Commands::Api { compact }) => cmd_api(compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_text(Some(input.as_path()), None, cli.flags)
            } else {
                println!("{}", "Usage: unhtml <FILE>".yellow());
                println!("       unhtml --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn is_stdin(input: Option<&Path>) -> bool {
    input.map_or(true, |p| p == Path::new("-"))
}

fn read_input(input: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if !is_stdin(Some(path)) => Ok(detect::read_input_file(path)?),
        _ => {
            let mut data = Vec::new();
            io::stdin().read_to_end(&mut data)?;
            Ok(detect::decode_bytes(&data)?)
        }
    }
}

fn output_name(input: &Path) -> PathBuf {
    if is_stdin(Some(input)) {
        return PathBuf::from(STDIN_OUTPUT_NAME);
    }
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{}.txt", stem))
}

/// Output names for a batch, in input order. A name already taken by an
/// earlier input gets a numeric suffix: `index.txt`, `index-1.txt`, ...
fn output_names(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let name = output_name(input);
            let mut candidate = name.clone();
            let mut n = 1;
            while !taken.insert(candidate.clone()) {
                let stem = name.file_stem().unwrap_or_default().to_string_lossy();
                candidate = PathBuf::from(format!("{}-{}.txt", stem, n));
                n += 1;
            }
            candidate
        })
        .collect()
}

fn cmd_text(
    input: Option<&Path>,
    output: Option<&Path>,
    flags: OptionFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    let html = read_input(input)?;
    let result = Unhtml::with_options(flags.into()).convert(&html)?;

    log::info!(
        "Removed {} characters, {} words remain",
        result.stats.characters_removed,
        result.stats.word_count
    );

    if let Some(path) = output {
        fs::write(path, &result.text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.text);
    }

    Ok(())
}

fn cmd_convert(
    inputs: &[PathBuf],
    output: Option<&Path>,
    flags: OptionFlags,
) -> Result<(), Box<dyn std::error::Error>> {
    if inputs.iter().filter(|p| is_stdin(Some(p.as_path()))).count() > 1 {
        return Err("standard input (\"-\") can only be given once".into());
    }

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading input...");
    let mut documents = Vec::with_capacity(inputs.len());
    for input in inputs {
        documents.push(read_input(Some(input.as_path()))?);
        pb.inc(1);
    }

    pb.set_message("Converting...");
    let results = Unhtml::with_options(flags.into()).convert_many(&documents)?;

    pb.set_message("Writing text...");
    let mut written = Vec::with_capacity(results.len());
    for (name, result) in output_names(inputs).into_iter().zip(&results) {
        fs::write(output_dir.join(&name), &result.text)?;
        written.push((name, result.stats));
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, (name, stats)) in written.iter().enumerate() {
        let branch = if i + 1 == written.len() { "└─" } else { "├─" };
        println!(
            "  {} {} ({} words, {} characters removed)",
            branch.dimmed(),
            name.display(),
            stats.word_count,
            stats.characters_removed
        );
    }

    Ok(())
}

fn cmd_stats(input: Option<&Path>, flags: OptionFlags) -> Result<(), Box<dyn std::error::Error>> {
    let html = read_input(input)?;
    let result = Unhtml::with_options(flags.into()).convert(&html)?;

    let input_counts = TextCounts::of(&html);
    let output_counts = TextCounts::of(&result.text);

    println!("{}", "Conversion Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    if let Some(path) = input.filter(|p| !is_stdin(Some(*p))) {
        println!("{}: {}", "File".bold(), path.display());
    }
    println!(
        "{}: {} characters, {} words",
        "Input".bold(),
        input_counts.characters,
        input_counts.words
    );
    println!(
        "{}: {} characters, {} words",
        "Output".bold(),
        output_counts.characters,
        output_counts.words
    );
    println!(
        "{}: {}",
        "Characters removed".bold(),
        result.stats.characters_removed
    );

    Ok(())
}

fn cmd_api(compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut body = String::new();
    io::stdin().read_to_string(&mut body)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let response = handle_json(&body);
    println!("{}", response.to_json(format)?);

    if response.is_success() {
        Ok(())
    } else {
        Err(format!("request failed with status {}", response.status_code()).into())
    }
}

fn cmd_version() {
    println!("{} {}", "unhtml".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("HTML to plain text conversion tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unhtml".dimmed());
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_to_options() {
        let options: ConversionOptions = OptionFlags::default().into();
        assert_eq!(options, ConversionOptions::default());

        let flags = OptionFlags {
            no_line_breaks: true,
            keep_spaces: true,
            no_entities: true,
        };
        let options: ConversionOptions = flags.into();
        assert_eq!(options, ConversionOptions::raw());
    }

    #[test]
    fn test_output_name() {
        assert_eq!(
            output_name(Path::new("dir/page.html")),
            PathBuf::from("page.txt")
        );
        assert_eq!(output_name(Path::new("-")), PathBuf::from(STDIN_OUTPUT_NAME));
    }

    #[test]
    fn test_is_stdin() {
        assert!(is_stdin(None));
        assert!(is_stdin(Some(Path::new("-"))));
        assert!(!is_stdin(Some(Path::new("page.html"))));
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["unhtml", "text", "page.html", "--keep-spaces"]).unwrap();
        match cli.command {
            Some(Commands::Text { input, flags, .. }) => {
                assert_eq!(input, Some(PathBuf::from("page.html")));
                assert!(flags.keep_spaces);
                assert!(!flags.no_entities);
            }
            _ => panic!("expected text command"),
        }

        let cli =
            Cli::try_parse_from(["unhtml", "convert", "a.html", "b.html", "-o", "out"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Convert { ref inputs, .. }) if inputs.len() == 2
        ));
    }

    #[test]
    fn test_cli_convert_requires_inputs() {
        assert!(Cli::try_parse_from(["unhtml", "convert"]).is_err());
    }

    #[test]
    fn test_cmd_text_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.html");
        let output = dir.path().join("page.txt");
        fs::write(&input, "<h1>Title</h1><p>Body&nbsp;text</p>").unwrap();

        cmd_text(Some(input.as_path()), Some(output.as_path()), OptionFlags::default()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "Title\n\nBody text");
    }

    #[test]
    fn test_cmd_convert_batch() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.html");
        let second = dir.path().join("second.htm");
        fs::write(&first, "<p>one</p>").unwrap();
        fs::write(&second, "<p>two &amp; three</p>").unwrap();

        let out = dir.path().join("out");
        cmd_convert(&[first, second], Some(out.as_path()), OptionFlags::default()).unwrap();

        assert_eq!(fs::read_to_string(out.join("first.txt")).unwrap(), "one");
        assert_eq!(fs::read_to_string(out.join("second.txt")).unwrap(), "two & three");
    }

    #[test]
    fn test_output_names_disambiguate_same_stem() {
        let inputs = [
            PathBuf::from("a/index.html"),
            PathBuf::from("b/index.html"),
            PathBuf::from("c/index.htm"),
            PathBuf::from("index-1.html"),
        ];
        assert_eq!(
            output_names(&inputs),
            vec![
                PathBuf::from("index.txt"),
                PathBuf::from("index-1.txt"),
                PathBuf::from("index-2.txt"),
                PathBuf::from("index-1-1.txt"),
            ]
        );
    }

    #[test]
    fn test_cmd_convert_same_stem_keeps_both() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::create_dir_all(dir.path().join("b")).unwrap();
        let first = dir.path().join("a").join("index.html");
        let second = dir.path().join("b").join("index.html");
        fs::write(&first, "<p>first</p>").unwrap();
        fs::write(&second, "<p>second</p>").unwrap();

        let out = dir.path().join("out");
        cmd_convert(&[first, second], Some(out.as_path()), OptionFlags::default()).unwrap();

        assert_eq!(fs::read_to_string(out.join("index.txt")).unwrap(), "first");
        assert_eq!(fs::read_to_string(out.join("index-1.txt")).unwrap(), "second");
    }

    #[test]
    fn test_cmd_convert_rejects_repeated_stdin() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = [PathBuf::from("-"), PathBuf::from("-")];
        let result = cmd_convert(&inputs, Some(dir.path()), OptionFlags::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_cmd_text_rejects_blank_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("blank.html");
        fs::write(&input, "  \n").unwrap();

        assert!(cmd_text(Some(input.as_path()), None, OptionFlags::default()).is_err());
    }
}
