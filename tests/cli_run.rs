use std::error::Error;
use std::fs;

use dotprune::cli::CliArgs;
use dotprune::run;

type TestResult = Result<(), Box<dyn Error>>;

fn args(input: &str, output: &str) -> CliArgs {
    CliArgs {
        input: input.to_string(),
        ancestors_of: vec![],
        descendents_of: vec![],
        intersect: false,
        ignore: vec!["external node".to_string()],
        file: false,
        net: false,
        process: false,
        mem: false,
        output: Some(output.to_string()),
        log_level: None,
    }
}

#[test]
fn run_reads_a_file_and_writes_the_filtered_graph() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("callgraph.dot");
    let output_path = dir.path().join("filtered.dot");

    fs::write(
        &input_path,
        "digraph g {\nmain [label=\"main\"];\nwork [label=\"work\"];\nmain -> work;\n}\n",
    )?;

    let mut cli = args(
        input_path.to_str().ok_or("path")?,
        output_path.to_str().ok_or("path")?,
    );
    cli.descendents_of = vec!["main".to_string()];

    run(cli)?;

    let out = fs::read_to_string(&output_path)?;
    assert!(out.starts_with("digraph g {\n"));
    assert!(out.contains("\"main\" [label=\"main\""));
    assert!(out.contains("\"main\" -> \"work\""));
    assert!(out.ends_with("}\n"));
    Ok(())
}

#[test]
fn the_default_external_sentinel_is_not_traversed_through() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("callgraph.dot");
    let output_path = dir.path().join("filtered.dot");

    // `ext` carries the sentinel label some producers emit for calls
    // that leave the analyzed binary.
    fs::write(
        &input_path,
        "ext [label=\"external node\"];\nmain [label=\"main\"];\nleaf [label=\"leaf\"];\next -> leaf;\nmain -> leaf;\n",
    )?;

    let mut cli = args(
        input_path.to_str().ok_or("path")?,
        output_path.to_str().ok_or("path")?,
    );
    cli.ancestors_of = vec!["leaf".to_string()];

    run(cli)?;

    let out = fs::read_to_string(&output_path)?;
    assert!(out.contains("\"leaf\""));
    assert!(out.contains("\"main\""));
    assert!(!out.contains("\"ext\""));
    Ok(())
}

#[test]
fn missing_label_aborts_with_no_output_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("callgraph.dot");
    let output_path = dir.path().join("filtered.dot");

    fs::write(&input_path, "main [shape=box];\n")?;

    let cli = args(
        input_path.to_str().ok_or("path")?,
        output_path.to_str().ok_or("path")?,
    );

    assert!(run(cli).is_err());
    assert!(!output_path.exists());
    Ok(())
}
