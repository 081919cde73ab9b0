//! Command-line configuration.

use std::path::PathBuf;

use crate::error::{Error, Result};

const DEFAULT_PROGRAM: &str = "huffreport";

/// Settings for a single report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File whose bytes are counted
    pub input_file: PathBuf,
}

impl Config {
    /// Parse the process arguments, program name included.
    ///
    /// Exactly one positional argument (the input path) is accepted.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let program = args
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PROGRAM);
        match args {
            [_, input] => Ok(Config {
                input_file: PathBuf::from(input),
            }),
            _ => Err(Error::usage(program)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_path() {
        let config = Config::from_args(&args(&["huffreport", "input.txt"])).unwrap();
        assert_eq!(config.input_file, PathBuf::from("input.txt"));
    }

    #[test]
    fn test_missing_path() {
        let err = Config::from_args(&args(&["./a.out"])).unwrap_err();
        match err {
            Error::Usage { program } => assert_eq!(program, "./a.out"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extra_arguments() {
        let result = Config::from_args(&args(&["huffreport", "a.txt", "b.txt"]));
        assert!(matches!(result, Err(Error::Usage { .. })));
    }

    #[test]
    fn test_no_arguments_at_all() {
        match Config::from_args(&[]) {
            Err(Error::Usage { program }) => assert_eq!(program, DEFAULT_PROGRAM),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
