//! Tests for CLI command execution

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use treedown::cli::args::{Cli, Commands, ExportFormat};
use treedown::cli::commands::execute_command;
use treedown::exitcode;

fn write_tree(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write tree file");
    path
}

fn export_cli(
    format: ExportFormat,
    file: PathBuf,
    output: Option<PathBuf>,
    focus: Option<String>,
    pedigree: bool,
) -> Cli {
    Cli {
        debug: 0,
        command: Commands::Export {
            format,
            file,
            output,
            focus,
            pedigree,
        },
    }
}

#[test]
fn given_tree_file_when_exporting_text_then_output_file_round_trips() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let input = write_tree(&temp, "family.txt", "Parent\n\tChild A\n\tChild B\n");
    let out = temp.path().join("family-export.txt");

    // Act
    let cli = export_cli(ExportFormat::Text, input, Some(out.clone()), None, false);
    execute_command(&cli).unwrap();

    // Assert: tab input came back as 4-space output
    let exported = fs::read_to_string(&out).unwrap();
    assert_eq!(exported, "Parent\n    Child A\n    Child B");
}

#[test]
fn given_focus_id_when_exporting_json_then_only_subtree_is_present() {
    // Arrange: n-1 is "Child A" (document order)
    let temp = TempDir::new().unwrap();
    let input = write_tree(&temp, "family.txt", "Parent\n\tChild A\n\tChild B\n");
    let out = temp.path().join("subtree.json");

    // Act
    let cli = export_cli(
        ExportFormat::Json,
        input,
        Some(out.clone()),
        Some("n-1".to_string()),
        false,
    );
    execute_command(&cli).unwrap();

    // Assert
    let exported = fs::read_to_string(&out).unwrap();
    assert!(exported.contains("Child A"));
    assert!(!exported.contains("Parent"));
    assert!(!exported.contains("Child B"));
}

#[test]
fn given_focus_and_pedigree_when_exporting_text_then_lineage_is_written() {
    // Arrange: n-2 is "X"; pedigree keeps the single path Root -> A -> X
    let temp = TempDir::new().unwrap();
    let input = write_tree(&temp, "family.txt", "Root\n\tA\n\t\tX\n\tB\n");
    let out = temp.path().join("lineage.txt");

    // Act
    let cli = export_cli(
        ExportFormat::Text,
        input,
        Some(out.clone()),
        Some("n-2".to_string()),
        true,
    );
    execute_command(&cli).unwrap();

    // Assert: sibling B is absent from the lineage
    let exported = fs::read_to_string(&out).unwrap();
    assert_eq!(exported, "Root\n    A\n        X");
}

#[test]
fn given_missing_file_when_exporting_then_noinput_exit_code() {
    let cli = export_cli(
        ExportFormat::Text,
        PathBuf::from("/nonexistent/family.txt"),
        None,
        None,
        false,
    );

    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_unknown_focus_id_when_exporting_then_usage_exit_code() {
    let temp = TempDir::new().unwrap();
    let input = write_tree(&temp, "family.txt", "Parent\n\tChild A\n");

    let cli = export_cli(
        ExportFormat::Text,
        input,
        None,
        Some("missing-id".to_string()),
        false,
    );

    let err = execute_command(&cli).unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_tree_file_when_exporting_html_then_document_is_written() {
    let temp = TempDir::new().unwrap();
    let input = write_tree(&temp, "family.txt", "Parent\n\tChild A\n");
    let out = temp.path().join("family.html");

    let cli = export_cli(ExportFormat::Html, input, Some(out.clone()), None, false);
    execute_command(&cli).unwrap();

    let exported = fs::read_to_string(&out).unwrap();
    assert!(exported.starts_with("<!doctype html>"));
    assert!(exported.contains("Child A"));
}
