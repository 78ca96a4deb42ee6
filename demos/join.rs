//! Resolves URI references against a base URI.
//!
//! ```sh
//! cargo run --example join -- http://a/b/c/d;p?q ../g '#s'
//! printf 'g\n//g\n' | cargo run --example join -- http://a/b/c/d;p?q
//! ```
use clap::{Arg, ArgAction, Command};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;
use urijoin::UriComponents;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("join")
        .about("Resolves URI references against a base URI")
        .arg(Arg::new("base").required(true).help("Base URI"))
        .arg(
            Arg::new("references")
                .num_args(0..)
                .help("References to resolve, read from stdin when absent"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Reject references that are not valid URI references"),
        )
        .get_matches();

    let base = matches
        .get_one::<String>("base")
        .map(String::as_str)
        .unwrap_or_default();
    let base = UriComponents::parse(base);
    let strict = matches.get_flag("strict");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut resolve = |reference: &str| -> io::Result<()> {
        if strict {
            if let Err(error) = UriComponents::parse_strict(reference) {
                return writeln!(out, "{}: {}", reference, error);
            }
        }
        writeln!(out, "{}", base.join(reference))
    };

    match matches.get_many::<String>("references") {
        Some(references) => {
            for reference in references {
                resolve(reference.as_str())?;
            }
        }
        None => {
            for line in io::stdin().lock().lines() {
                resolve(line?.trim_end())?;
            }
        }
    }
    Ok(())
}
