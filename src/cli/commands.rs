//! Command dispatch: each subcommand reads a TreeDown file and drives the
//! parse → restrict → serialize/layout pipeline.

use std::fs;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, ExportFormat};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings, SettingsError};
use crate::domain::{build_pedigree, find_node, forest_depth, node_count, parse, Forest};
use crate::export::{render_svg, to_json, to_static_html, to_text};
use crate::layout::layout;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Show {
            file,
            ids,
            focus,
            pedigree,
        } => show(file, *ids, focus.as_deref(), *pedigree),
        Commands::Stats { file } => stats(file),
        Commands::Pedigree { file, id } => pedigree(file, id),
        Commands::Export {
            format,
            file,
            output,
            focus,
            pedigree,
        } => export(*format, file, output.as_deref(), focus.as_deref(), *pedigree),
        Commands::Config { command } => config(command),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}

/// Read and parse a TreeDown file. Parsing itself never fails; only the
/// read can.
fn read_forest(path: &Path) -> CliResult<Forest> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&text))
}

/// Restrict a forest to the focused node's subtree, or to its ancestor
/// lineage when `pedigree` is set. No focus returns the full forest.
fn select_scope(forest: &Forest, focus: Option<&str>, pedigree: bool) -> CliResult<Forest> {
    let Some(id) = focus else {
        return Ok(forest.clone());
    };

    if pedigree {
        build_pedigree(forest, id)
            .map(|lineage| vec![lineage])
            .ok_or_else(|| CliError::NodeNotFound(id.to_string()))
    } else {
        find_node(forest, id)
            .map(|node| vec![node.clone()])
            .ok_or_else(|| CliError::NodeNotFound(id.to_string()))
    }
}

#[instrument]
fn show(file: &Path, ids: bool, focus: Option<&str>, pedigree: bool) -> CliResult<()> {
    let forest = read_forest(file)?;
    let scope = select_scope(&forest, focus, pedigree)?;
    debug!(roots = scope.len(), nodes = node_count(&scope), "showing");

    for root in &scope {
        output::info(&root.to_display_tree(ids));
    }
    Ok(())
}

#[instrument]
fn stats(file: &Path) -> CliResult<()> {
    let forest = read_forest(file)?;

    output::header(&file.display());
    output::detail(&format!("roots: {}", forest.len()));
    output::detail(&format!("nodes: {}", node_count(&forest)));
    output::detail(&format!("depth: {}", forest_depth(&forest)));
    Ok(())
}

#[instrument]
fn pedigree(file: &Path, id: &str) -> CliResult<()> {
    let forest = read_forest(file)?;
    let lineage =
        build_pedigree(&forest, id).ok_or_else(|| CliError::NodeNotFound(id.to_string()))?;

    output::info(&to_text(&[lineage]));
    Ok(())
}

#[instrument]
fn export(
    format: ExportFormat,
    file: &Path,
    out_path: Option<&Path>,
    focus: Option<&str>,
    pedigree: bool,
) -> CliResult<()> {
    let forest = read_forest(file)?;
    let scope = select_scope(&forest, focus, pedigree)?;

    let payload = match format {
        ExportFormat::Text => to_text(&scope),
        ExportFormat::Json => to_json(&scope)?,
        ExportFormat::Html => to_static_html(&scope),
        ExportFormat::Svg => {
            let settings = Settings::load()?;
            render_svg(&layout(&scope, &settings.layout))
        }
    };

    match out_path {
        Some(path) => {
            fs::write(path, &payload).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            output::success(&format!("wrote {}", path.display()));
        }
        None => output::info(&payload),
    }
    Ok(())
}

#[instrument]
fn config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init => {
            let path = Settings::write_template()?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
        ConfigCommands::Path => {
            let path = global_config_path().ok_or(SettingsError::NoConfigDir)?;
            output::info(&path.display());
            Ok(())
        }
    }
}
