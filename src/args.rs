use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::codegen::render::DEFAULT_HEADER;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Arguments {
    /// Label list, one `label` or `label = id` per line [default: stdin]
    #[arg(value_name = "PATH")]
    input: Option<PathBuf>,

    /// Write the generated source to a file [default: stdout]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Header named by the `#include` line
    #[arg(long, value_name = "NAME", default_value = DEFAULT_HEADER, value_parser = parse_header)]
    header: String,
}

fn parse_header(arg: &str) -> Result<String> {
    if arg.is_empty() || arg.contains(['"', '\n', '\r']) {
        return Err(anyhow!("invalid header name '{}'", arg));
    }
    Ok(arg.to_string())
}

/// CLI argument handler.
pub struct ArgHandler {
    data: Arguments,
}

impl ArgHandler {
    pub fn parse() -> ArgHandler {
        ArgHandler {
            data: Arguments::parse(),
        }
    }

    /// Get the input path, `None` for stdin.
    pub fn input(&self) -> Option<&Path> {
        self.data
            .input
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    /// Get the output path, `None` for stdout.
    pub fn output(&self) -> Option<&Path> {
        self.data.output.as_deref()
    }

    /// Get the header to include.
    pub fn header(&self) -> &str {
        self.data.header.as_str()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::{ArgHandler, Arguments};

    fn handler(args: &[&str]) -> ArgHandler {
        ArgHandler {
            data: Arguments::try_parse_from(args).unwrap(),
        }
    }

    #[test]
    fn defaults_to_stdio() {
        let handler = handler(&["pg-byte-gen"]);
        assert_eq!(handler.input(), None);
        assert_eq!(handler.output(), None);
        assert_eq!(handler.header(), "core.h");
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(handler(&["pg-byte-gen", "-"]).input(), None);
    }

    #[test]
    fn paths_and_header() {
        let handler = handler(&[
            "pg-byte-gen",
            "labels.txt",
            "-o",
            "pg_byte_labels.c",
            "--header",
            "pg_byte.h",
        ]);
        assert_eq!(handler.input(), Some(Path::new("labels.txt")));
        assert_eq!(handler.output(), Some(Path::new("pg_byte_labels.c")));
        assert_eq!(handler.header(), "pg_byte.h");
    }

    #[test]
    fn rejects_quoted_header() {
        assert!(Arguments::try_parse_from(["pg-byte-gen", "--header", "a\"b"]).is_err());
        assert!(Arguments::try_parse_from(["pg-byte-gen", "--header", ""]).is_err());
    }
}
