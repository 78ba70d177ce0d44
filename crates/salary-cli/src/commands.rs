use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use salary_cli::shell::Shell;
use salary_core::{Event, Session, Visualization};
use salary_ingest::{DataPaths, Dataset, DatasetLoader, records_to_frame, write_frame_csv};
use salary_report::{
    TableOptions, render_options_table, render_records_table, render_view_table,
    view_to_json_string,
};

use crate::cli::{DataArgs, ExportArgs, OutputFormatArg, ViewArgs};

pub fn data_paths(args: &DataArgs) -> DataPaths {
    let defaults = DataPaths::in_dir(&args.data_dir);
    DataPaths {
        salaries: args.salaries.clone().unwrap_or(defaults.salaries),
        regions: args.regions.clone().unwrap_or(defaults.regions),
    }
}

fn load(loader: &DatasetLoader) -> Result<Arc<Dataset>> {
    loader.load().context("load dataset")
}

pub fn run_options(loader: &DatasetLoader, table: TableOptions) -> Result<()> {
    let dataset = load(loader)?;
    println!("{}", render_options_table(&dataset, table));
    Ok(())
}

pub fn run_view(loader: &DatasetLoader, args: &ViewArgs, table: TableOptions) -> Result<()> {
    let visualization: Visualization = args.visualization.parse().map_err(|e: String| anyhow!(e))?;
    let mut session = Session::new(load(loader)?);
    args.filters.apply(&mut session).context("apply filters")?;
    session
        .apply(Event::Visualize(visualization))
        .context("select visualization")?;
    let view = session.view();
    match args.format {
        OutputFormatArg::Json => {
            println!("{}", view_to_json_string(&view).context("serialize view")?);
        }
        OutputFormatArg::Table => {
            println!("{}", render_view_table(&view, table));
            if let Some(limit) = args.rows {
                let rendered = render_records_table(&view.records, limit, table)
                    .context("render records")?;
                println!("\n{rendered}");
            }
        }
    }
    Ok(())
}

pub fn run_export(loader: &DatasetLoader, args: &ExportArgs) -> Result<()> {
    let span = info_span!("export", path = %args.path.display());
    let _guard = span.enter();
    let mut session = Session::new(load(loader)?);
    args.filters.apply(&mut session).context("apply filters")?;
    let view = session.view();
    let mut frame =
        records_to_frame(view.records.iter().copied()).context("build export frame")?;
    write_frame_csv(&mut frame, &args.path)
        .with_context(|| format!("write {}", args.path.display()))?;
    info!(rows = frame.height(), "export complete");
    println!(
        "Wrote {} of {} records to {}",
        view.filtered_records,
        view.total_records,
        args.path.display()
    );
    Ok(())
}

pub fn run_interactive(loader: &DatasetLoader, table: TableOptions) -> Result<()> {
    let session = Session::new(load(loader)?);
    let mut shell = Shell::new(session, table);
    if io::stdin().is_terminal() {
        eprintln!("Type 'help' for commands, 'quit' to leave.");
    }
    shell.run(io::stdin().lock(), io::stdout().lock())
}
