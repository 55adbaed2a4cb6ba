//! Update command: run codemods against a source directory

use anyhow::Result;
use camino::Utf8Path;
use seedkit_core::SystemRunner;

use crate::cli::UpdateArgs;
use crate::output;

pub async fn run(args: UpdateArgs, config: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config)?;
    let codemods = config.codemod_runner();

    let mode = if args.fix { "fixing" } else { "checking" };
    output::info(&format!(
        "Running {} codemods on {} ({})",
        codemods.packages().len(),
        args.path,
        mode
    ));

    let report = codemods
        .run(&SystemRunner::new(), Some(args.path.as_path()), args.fix)
        .await?;

    output::success(&format!(
        "Finished {} codemods on {}",
        report.commands_run, args.path
    ));
    if !report.fixed {
        output::info("Re-run with --fix to apply the suggested changes");
    }
    Ok(())
}
