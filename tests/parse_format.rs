use std::error::Error;

use dotprune::errors::DotpruneError;
use dotprune::parse::parse_graph;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn quoted_and_bare_node_tokens_name_the_same_graph() -> TestResult {
    let parsed = parse_graph("\"main fn\" -> helper;\nhelper -> \"main fn\";\n")?;
    let node = parsed.graph.get("main fn").ok_or("missing quoted node")?;
    assert!(node.to.contains("helper"));
    assert!(node.from.contains("helper"));
    Ok(())
}

#[test]
fn redeclaring_a_node_merges_attributes_instead_of_replacing() -> TestResult {
    let input = "\
main [label=\"main\", shape=box];
main [label=\"main\", color=\"blue\"];
";
    let parsed = parse_graph(input)?;
    let node = parsed.graph.get("main").ok_or("missing node")?;
    assert_eq!(node.attrs.label.as_deref(), Some("main"));
    assert_eq!(node.attrs.extra.get("shape").map(String::as_str), Some("box"));
    assert_eq!(node.attrs.extra.get("color").map(String::as_str), Some("blue"));
    Ok(())
}

#[test]
fn quoted_attribute_values_lose_their_quotes() -> TestResult {
    let parsed = parse_graph("a [label=\"quoted value\", shape=plain];\n")?;
    let node = parsed.graph.get("a").ok_or("missing node")?;
    assert_eq!(node.attrs.label.as_deref(), Some("quoted value"));
    assert_eq!(node.attrs.extra.get("shape").map(String::as_str), Some("plain"));
    Ok(())
}

#[test]
fn declaration_without_label_is_fatal() {
    let err = parse_graph("preamble line\nmain [color=\"red\"];\n").unwrap_err();
    match err {
        DotpruneError::MissingLabel { name, line } => {
            assert_eq!(name, "main");
            assert_eq!(line, 2);
        }
        other => panic!("expected MissingLabel, got {other:?}"),
    }
}

#[test]
fn text_splits_into_preamble_and_postamble_around_structural_lines() -> TestResult {
    let input = "\
digraph callgraph {
rankdir=LR junk the parser does not know
main [label=\"main\"];
main -> foo;
foo [label=\"foo\"];
}
";
    let parsed = parse_graph(input)?;
    assert_eq!(
        parsed.preamble,
        "digraph callgraph {\nrankdir=LR junk the parser does not know\n"
    );
    assert_eq!(parsed.postamble, "}\n");
    assert_eq!(parsed.graph.len(), 2);
    Ok(())
}

#[test]
fn unmatched_lines_after_structure_started_land_in_postamble() -> TestResult {
    let input = "a [label=\"a\"];\nstray comment\nb [label=\"b\"];\n";
    let parsed = parse_graph(input)?;
    assert_eq!(parsed.preamble, "");
    assert_eq!(parsed.postamble, "stray comment\n");
    assert_eq!(parsed.graph.len(), 2);
    Ok(())
}

#[test]
fn edge_lines_may_carry_an_attribute_block() -> TestResult {
    let parsed = parse_graph("a -> b [color=\"gold\"];\n")?;
    let node = parsed.graph.get("a").ok_or("missing node")?;
    assert!(node.to.contains("b"));
    Ok(())
}

#[test]
fn label_index_last_writer_wins_on_collision() -> TestResult {
    let input = "n1 [label=\"dup\"];\nn2 [label=\"dup\"];\n";
    let parsed = parse_graph(input)?;
    assert_eq!(parsed.graph.resolve("dup"), Some("n2"));
    Ok(())
}
