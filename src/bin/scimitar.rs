#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use scimitar::cli::args::CliArgs;
use scimitar::cli::{driver, reporter::Reporter};

fn main() -> Result<ExitCode> {
    // Only installs a subscriber when SCIMITAR_LOG or RUST_LOG is set.
    scimitar::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let result = driver::generate(&args)?;
    let reporter = Reporter::new(std::io::stderr().is_terminal());

    for outcome in &result.outcomes {
        match &outcome.result {
            Ok(spec) if !spec.diagnostics.is_empty() => {
                eprintln!("{}", reporter.render(&spec.diagnostics));
            }
            Ok(_) => {}
            Err(err) => eprintln!("{}", reporter.format_failure(&outcome.target, err)),
        }
    }

    if let Some(out_dir) = &args.out_dir {
        let written = driver::write_units(out_dir, &result.units)?;
        eprintln!(
            "Generated {} binding unit(s) in {}",
            written.len(),
            out_dir.display()
        );
    } else {
        let mut stdout = std::io::stdout().lock();
        for unit in &result.units {
            writeln!(stdout, "{}", unit.text).context("failed to write to stdout")?;
        }
    }

    let failed = result.failed();
    if failed > 0 {
        eprintln!("{failed} target type(s) failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
