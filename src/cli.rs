//! Command-line argument parsing
//!
//! Arguments are parsed from any iterator of strings (the first item is the
//! program name, as with `std::env::args()`) so the parser can be tested
//! without touching the process environment.

use crate::config::VisualizerConfig;
use crate::engine::{AlgorithmKind, QuickSortStrategy};
use crate::playback::DelayTier;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: sortty [options]

Options:
  --size <n>            number of elements to generate (default 50)
  --speed <tier>        slow | medium | fast (default medium)
  --min <v> --max <v>   value range of generated elements (default 10..200)
  --quicksort <mode>    bubble | partition (default bubble)
  --seed <n>            seed the generated dataset
  --data <a,b,c>        use an explicit dataset instead of random values
  --run <algorithm>     sort without the TUI and print the summary
                        (bubble | selection | insertion | quick)
  --log <file>          write tracing output to <file> (filter via RUST_LOG)
  -h, --help            show this help
  -V, --version         show version";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    #[error("Option '{0}' requires a value")]
    MissingValue(String),

    #[error("Invalid value '{value}' for '{option}': {reason}")]
    InvalidValue {
        option: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive terminal UI
    Interactive,
    /// Run one algorithm to completion and print the summary
    Headless(AlgorithmKind),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub mode: Mode,
    pub config: VisualizerConfig,
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn parse() -> Result<Self, ArgsError> {
        Self::parse_from(std::env::args())
    }

    pub fn parse_from<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        let mut parsed = Args {
            mode: Mode::Interactive,
            config: VisualizerConfig::default(),
            log_file: None,
        };
        let (mut min, mut max) = (
            *parsed.config.value_range.start(),
            *parsed.config.value_range.end(),
        );

        let mut i = 1;
        while i < args.len() {
            let option = args[i].as_str();
            match option {
                "-h" | "--help" => return Ok(Args { mode: Mode::Help, ..parsed }),
                "-V" | "--version" => return Ok(Args { mode: Mode::Version, ..parsed }),
                "--size" => {
                    let size: usize = parse_value(option, value_of(&args, i)?)?;
                    if size == 0 {
                        return Err(invalid(option, "0", "must be at least 1"));
                    }
                    parsed.config.initial_size = size;
                }
                "--speed" => parsed.config.delay = parse_value::<DelayTier>(option, value_of(&args, i)?)?,
                "--min" => min = parse_value(option, value_of(&args, i)?)?,
                "--max" => max = parse_value(option, value_of(&args, i)?)?,
                "--quicksort" => {
                    parsed.config.quick_sort =
                        parse_value::<QuickSortStrategy>(option, value_of(&args, i)?)?
                }
                "--seed" => parsed.config.seed = Some(parse_value(option, value_of(&args, i)?)?),
                "--data" => parsed.config.data = Some(parse_list(option, value_of(&args, i)?)?),
                "--run" => parsed.mode = Mode::Headless(parse_value(option, value_of(&args, i)?)?),
                "--log" => parsed.log_file = Some(PathBuf::from(value_of(&args, i)?)),
                unknown => return Err(ArgsError::UnknownOption(unknown.to_string())),
            }
            // every option above takes exactly one value
            i += 2;
        }

        if min > max {
            return Err(invalid(
                "--min",
                &min.to_string(),
                &format!("greater than --max {}", max),
            ));
        }
        parsed.config.value_range = min..=max;
        Ok(parsed)
    }
}

fn value_of(args: &[String], i: usize) -> Result<&str, ArgsError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| ArgsError::MissingValue(args[i].clone()))
}

fn parse_value<T>(option: &str, value: &str) -> Result<T, ArgsError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| invalid(option, value, &e.to_string()))
}

fn parse_list(option: &str, value: &str) -> Result<Vec<i32>, ArgsError> {
    let values = value
        .split(',')
        .map(|item| parse_value::<i32>(option, item.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() {
        return Err(invalid(option, value, "dataset is empty"));
    }
    Ok(values)
}

fn invalid(option: &str, value: &str, reason: &str) -> ArgsError {
    ArgsError::InvalidValue {
        option: option.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
