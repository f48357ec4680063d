use std::path::{Path, PathBuf};

use clap::Parser;

pub const CHECKS_FILE_DEFAULT: &str = "checks.json";
pub const HTML_FILE_DEFAULT: &str = "index.html";

#[derive(Parser, Debug)]
#[command(name = "grader", version, about)]
pub struct Args {
    /// Path to checks.json
    #[arg(short, long, env = "GRADER_CHECKS", value_name = "CHECK_FILE", value_parser = existing_file)]
    pub checks: Option<PathBuf>,

    /// Path to index.html
    #[arg(short, long, env = "GRADER_FILE", value_name = "HTML_FILE", value_parser = existing_file)]
    pub file: Option<PathBuf>,

    /// URL of the remote resource. Takes precedence over --file
    #[arg(short, long, env = "GRADER_URL")]
    pub url: Option<String>,
}

#[derive(Debug)]
pub struct MissingFile(pub PathBuf);

impl core::fmt::Display for MissingFile {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{} does not exist. Exiting!", self.0.display())
    }
}

impl core::error::Error for MissingFile {}

/// Accept `value` only when something exists at that path.
pub fn existing_file(value: &str) -> Result<PathBuf, MissingFile> {
    let path = PathBuf::from(value);
    ensure_exists(&path)?;
    Ok(path)
}

fn ensure_exists(path: &Path) -> Result<(), MissingFile> {
    if path.exists() {
        Ok(())
    } else {
        Err(MissingFile(path.to_path_buf()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub checks: PathBuf,
    pub source: Source,
}

impl Config {
    /// Apply defaults. Default paths are validated here as explicit ones were
    /// validated while parsing. The default HTML file is only needed without a URL.
    /// An empty URL counts as no URL.
    pub fn from_args(args: Args) -> Result<Self, MissingFile> {
        let checks = args
            .checks
            .map_or_else(|| existing_file(CHECKS_FILE_DEFAULT), Ok)?;
        let source = match args.url.filter(|url| !url.is_empty()) {
            Some(url) => Source::Url(url),
            None => Source::File(args.file.map_or_else(|| existing_file(HTML_FILE_DEFAULT), Ok)?),
        };
        Ok(Self { checks, source })
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn missing_file_message() {
        let error = existing_file("nope/index.html").unwrap_err();
        assert_eq!(error.to_string(), "nope/index.html does not exist. Exiting!");
    }

    #[test]
    fn missing_file_rejected_while_parsing() {
        let error = Args::try_parse_from(["grader", "--file", "nope/index.html"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(error.to_string().contains("does not exist"), "{error}");
    }

    #[test]
    fn local_config() {
        let dir = tempfile::tempdir().unwrap();
        let checks = dir.path().join("checks.json");
        let html = dir.path().join("page.html");
        std::fs::write(&checks, "[]").unwrap();
        std::fs::write(&html, "").unwrap();

        let args =
            Args::try_parse_from(["grader", "-c", path_str(&checks), "-f", path_str(&html)])
                .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(
            config,
            Config {
                checks,
                source: Source::File(html),
            }
        );
    }

    #[test]
    fn url_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let checks = dir.path().join("checks.json");
        std::fs::write(&checks, "[]").unwrap();

        let args = Args::try_parse_from([
            "grader",
            "--checks",
            path_str(&checks),
            "--url",
            "http://localhost/",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.source, Source::Url("http://localhost/".to_owned()));
    }

    #[test]
    fn empty_url_means_local() {
        let dir = tempfile::tempdir().unwrap();
        let checks = dir.path().join("checks.json");
        let html = dir.path().join("index.html");
        std::fs::write(&checks, "[]").unwrap();
        std::fs::write(&html, "").unwrap();

        let args = Args::try_parse_from([
            "grader",
            "-c",
            path_str(&checks),
            "-f",
            path_str(&html),
            "--url",
            "",
        ])
        .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.source, Source::File(html));
    }

    #[test]
    fn defaults_are_validated() {
        let args = Args {
            checks: None,
            file: None,
            url: Some("http://localhost/".to_owned()),
        };
        // The crate root has no checks.json
        let error = Config::from_args(args).unwrap_err();
        assert_eq!(error.0, PathBuf::from(CHECKS_FILE_DEFAULT));
    }
}
