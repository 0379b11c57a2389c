// src/cli.rs
use std::path::PathBuf;

use crate::{
    config::{
        consts::DEFAULT_URL,
        options::ScrapeOptions,
    },
    error::{Error, Result},
    file, scrape,
};

pub const USAGE: &str = "\
Usage: cli [URL] [-o <file>] [--table]

  URL               archive page to scrape (default: the QAPLIB instance index)
  -o, --out <file>  write to <file> instead of stdout
  --table           print instances as TSV (name, optimal, algorithm, category)
  -h, --help        show this help";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputKind {
    /// The three lookup expressions.
    #[default]
    Code,
    /// Instance rows as TSV.
    Table,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub scrape: ScrapeOptions,
    pub out: Option<PathBuf>,
    pub kind: OutputKind,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut url: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| Error::Usage(s!("Missing output path")))?;
                parsed.out = Some(PathBuf::from(v));
            }
            "--table" => parsed.kind = OutputKind::Table,
            "-h" | "--help" => parsed.help = true,
            other if other.starts_with('-') => {
                return Err(Error::Usage(format!("Unknown arg: {other}")));
            }
            other => {
                if url.is_some() {
                    return Err(Error::Usage(format!("Unexpected extra URL: {other}")));
                }
                url = Some(s!(other));
            }
        }
    }

    parsed.scrape.url = url.unwrap_or_else(|| s!(DEFAULT_URL));
    Ok(parsed)
}

pub fn run<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = String>,
{
    let args = parse_args(args)?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let scraped = scrape::scrape(args.scrape.url(), Some(&mut CliProgress))?;
    let text = match args.kind {
        OutputKind::Code => scraped.code.text(),
        OutputKind::Table => scraped.to_tsv(),
    };

    match &args.out {
        Some(path) => {
            let written = file::write_text(path, &text)?;
            eprintln!("{} Wrote {}", scraped.summary(), written.display());
        }
        None => {
            print!("{text}");
            eprintln!("{}", scraped.summary());
        }
    }
    Ok(())
}

/// Progress on stderr so stdout stays pasteable.
struct CliProgress;

impl crate::progress::Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn no_args_means_default_url_and_code() {
        let a = parse_args(args(&[])).unwrap();
        assert_eq!(a.scrape.url(), DEFAULT_URL);
        assert_eq!(a.kind, OutputKind::Code);
        assert!(a.out.is_none());
    }

    #[test]
    fn url_out_and_table() {
        let a = parse_args(args(&["http://example.org/x.html", "--table", "-o", "out/q.tsv"])).unwrap();
        assert_eq!(a.scrape.url(), "http://example.org/x.html");
        assert_eq!(a.kind, OutputKind::Table);
        assert_eq!(a.out, Some(PathBuf::from("out/q.tsv")));
    }

    #[test]
    fn bad_args() {
        assert!(matches!(parse_args(args(&["--nope"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["-o"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["a", "b"])), Err(Error::Usage(_))));
    }

    #[test]
    fn help_flag() {
        assert!(parse_args(args(&["--help"])).unwrap().help);
    }
}
