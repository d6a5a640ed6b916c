use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

const DEFAULT_PUZZLE_WIDTH: usize = 4;

#[derive(Clone)]
pub(crate) struct Options {
    source: Source,
    output_path: Option<PathBuf>,
    seed: Option<u64>,
    solve: bool,
    reduce: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let source = if let Some(path) = matches.value_of("input") {
            Source::File(path.into())
        } else {
            Source::Generate(Generate {
                count: parse_value(matches, "count")?.unwrap_or(1),
                width: parse_value(matches, "width")?.unwrap_or(DEFAULT_PUZZLE_WIDTH),
            })
        };
        Ok(Self {
            source,
            output_path: matches.value_of("output").map(PathBuf::from),
            seed: parse_value(matches, "seed")?,
            solve: matches.is_present("solve"),
            reduce: matches.is_present("reduce"),
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn solve(&self) -> bool {
        self.solve
    }

    pub fn reduce(&self) -> bool {
        self.reduce
    }
}

#[derive(Clone)]
pub(crate) enum Source {
    File(PathBuf),
    Generate(Generate),
}

#[derive(Clone, Copy)]
pub(crate) struct Generate {
    pub count: usize,
    pub width: usize,
}

fn parse_value<T>(matches: &ArgMatches<'_>, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .value_of(name)
        .map(|s| s.parse::<T>().with_context(|| format!("invalid {}: {}", name, s)))
        .transpose()
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg, ArgGroup};

    App::new("Skyline")
        .about("Generate and solve skyline puzzles")
        .setting(AppSettings::ArgRequiredElseHelp)
        .group(
            ArgGroup::with_name("source")
                .args(&["generate", "input"])
                .required(true),
        )
        .arg(
            Arg::with_name("generate")
                .short("g")
                .long("generate")
                .help("generate skyline puzzle(s)")
                .display_order(1),
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .value_name("PATH")
                .help("read puzzles from a dataset CSV file")
                .display_order(1),
        )
        .arg(
            Arg::with_name("solve")
                .short("s")
                .long("solve")
                .help("solve the puzzle(s) and print the solutions"),
        )
        .arg(
            Arg::with_name("reduce")
                .long("reduce")
                .help("find the solvable puzzles left after blanking clues of each feasible puzzle"),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .value_name("WIDTH")
                .requires("generate")
                .help("set the width and height of the generated puzzles"),
        )
        .arg(
            Arg::with_name("count")
                .short("c")
                .long("count")
                .takes_value(true)
                .requires("generate")
                .help("the number of feasible puzzles to generate"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .requires("generate")
                .help("seed the random number generator for reproducible puzzles"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .requires("generate")
                .help("save the generated puzzles to a dataset CSV file"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_describes_app() {
        let mut help = Vec::new();
        clap_app().write_help(&mut help).unwrap();
        let help = String::from_utf8(help).unwrap();
        assert!(help.contains("Generate and solve skyline puzzles"));
        assert!(help.contains("Prints help information"));
    }

    #[test]
    fn generate_options() {
        let matches = clap_app()
            .get_matches_from_safe(vec!["skyline", "-g", "-w", "5", "--seed", "3", "-s"])
            .unwrap();
        let options = Options::from_arg_matches(&matches).unwrap();
        match options.source() {
            &Source::Generate(Generate { count, width }) => {
                assert_eq!(1, count);
                assert_eq!(5, width);
            }
            Source::File(_) => panic!("expected generate"),
        }
        assert_eq!(Some(3), options.seed());
        assert!(options.solve());
        assert!(!options.reduce());
    }
}
