use clap::Parser;
use clap::error::ErrorKind;
use navgen::{nav, output};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "navgen")]
#[command(about = "Navigation manifest generator for documentation sites")]
#[command(long_about = "\
Navigation manifest generator for documentation sites

Scans a directory of generated reference pages and prints a JSON
document mapping display titles to filenames, sorted by title:

  $ navgen docs/reference
  {
    \"nav\": [
      {\"api reference\": \"api_reference.md\"},
      {\"getting started\": \"getting_started.md\"}
    ]
  }

Only the immediate directory is scanned. Entries are matched by the
.md name suffix alone; titles are the filename with the suffix removed
and underscores converted to spaces. Redirect stdout into your site
generator's navigation config.")]
#[command(version)]
struct Cli {
    /// Directory containing the generated reference docs
    path: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args();

    let document = nav::build_nav(&cli.path)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    output::write_document(&document, &mut handle)?;
    handle.flush()?;

    Ok(())
}

/// Parse arguments, pinning the argument-error contract.
///
/// `--help` and `--version` render through clap and exit 0. Any other
/// parse failure (missing path, extra positionals) prints the fixed
/// usage line on stderr and exits 1 — build scripts match on that line
/// and status, so clap's own error rendering is not used for it.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            std::process::exit(0);
        }
        Err(_) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "navgen".to_string());
            eprintln!("usage: {program} <path to generated reference docs>");
            std::process::exit(1);
        }
    }
}
