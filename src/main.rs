mod cli;

use anyhow::Context;
use clap::Parser;
use mvre::rename::{Confirmer, Decision, execute};
use mvre::{PathPattern, RenameOptions, RenamePair, plan_renames};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::render;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("mvre: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Plans and performs the moves; `Ok(false)` when at least one move failed.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let options = cli.rename_options()?;
    let pattern = PathPattern::try_from(cli.pattern.as_os_str())?;
    let template = cli.new_name.to_str().with_context(|| {
        format!("NEWNAME is not valid UTF-8: {}", cli.new_name.to_string_lossy())
    })?;

    let plan = plan_renames(&pattern, template, &options)
        .with_context(|| format!("cannot match '{pattern}'"))?;

    if options.dry_run {
        let out = match cli.format {
            OutputFormat::Human => render::render_human(&plan),
            OutputFormat::Json => render::render_json(&plan)?,
        };
        if !out.is_empty() {
            println!("{out}");
        }
        return Ok(true);
    }

    apply(&plan, &options)
}

fn apply(plan: &[RenamePair], options: &RenameOptions) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut confirmer = Confirmer::new(stdin.lock(), io::stdout(), options.assume_yes);
    let mut all_ok = true;

    for pair in plan {
        match confirmer.confirm(pair).context("cannot read answer")? {
            Decision::Move => {}
            Decision::Skip => continue,
            Decision::Quit => break,
        }

        if options.verbose {
            println!("{}", render::move_command(pair));
            io::stdout().flush()?;
        }
        if let Err(err) = execute(pair, options) {
            eprintln!("mvre: {:#}", anyhow::Error::new(err));
            all_ok = false;
        }
    }

    Ok(all_ok)
}
