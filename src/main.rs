use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use find_up::log::{self, color};
use find_up::{EntryKind, Finder, Location, Options};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "find-up",
    version,
    about = "Find a file or directory by walking up parent directories",
    long_about = None
)]
struct Cli {
    #[arg(help = "Name of the entry to find, may be an absolute path")]
    name: String,
    #[arg(
        long,
        help = "Directory to start in, a path or a file: URL",
        value_hint = clap::ValueHint::DirPath
    )]
    cwd: Option<String>,
    #[arg(
        long = "type",
        short = 't',
        default_value_t = EntryKind::File,
        help = "Kind of entry to match (file or directory)"
    )]
    kind: EntryKind,
    #[arg(
        long,
        help = "Directory the walk halts at without searching it",
        value_hint = clap::ValueHint::DirPath
    )]
    stop_at: Option<String>,
    #[arg(long, short, action = ArgAction::SetTrue, help = "Print every match, nearest first")]
    all: bool,
    #[arg(long, help = "Maximum number of matches printed with --all")]
    limit: Option<usize>,
    #[arg(long, action = ArgAction::SetTrue, help = "Do not follow symbolic links")]
    no_symlinks: bool,
    #[arg(long, action = ArgAction::SetTrue, help = "Print the result as JSON")]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: EntryKind,
    found: &'a [PathBuf],
}

fn options(cli: &Cli) -> find_up::RResult<Options> {
    let mut options = Options::default()
        .with_kind(cli.kind)
        .with_allow_symlinks(!cli.no_symlinks);
    if let Some(cwd) = cli.cwd.as_deref() {
        options = options.with_cwd(Location::parse(cwd)?);
    }
    if let Some(stop_at) = cli.stop_at.as_deref() {
        options = options.with_stop_at(Location::parse(stop_at)?);
    }
    if let Some(limit) = cli.limit {
        options = options.with_limit(limit);
    }
    Ok(options)
}

fn run(cli: &Cli) -> find_up::RResult<Vec<PathBuf>> {
    let finder = Finder::new(options(cli)?);
    if cli.all {
        finder.find_multiple_sync(&cli.name)
    } else {
        Ok(finder.find_sync(&cli.name)?.into_iter().collect())
    }
}

fn main() -> ExitCode {
    log::enable_by_env();
    let cli = Cli::parse();

    let found = match run(&cli) {
        Ok(found) => found,
        Err(err) => {
            eprintln!("{} {err}", color::red(&"error:"));
            return ExitCode::from(2);
        }
    };

    if cli.json {
        let report = Report {
            name: &cli.name,
            kind: cli.kind,
            found: &found,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{} {err}", color::red(&"error:"));
                return ExitCode::from(2);
            }
        }
    } else {
        for path in &found {
            println!("{}", path.display());
        }
    }

    if found.is_empty() {
        if !cli.json {
            eprintln!("{} {} '{}'", color::bold(&"not found:"), cli.kind, cli.name);
        }
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
