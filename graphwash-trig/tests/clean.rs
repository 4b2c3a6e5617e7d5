//! End-to-end cleaning tests over multi-line documents.

use graphwash_ir::RecordCollectorSink;
use graphwash_trig::clean;

const XSD_STRING_SUFFIX: &str = "^^<http://www.w3.org/2001/XMLSchema#string>";

#[test]
fn cleans_a_mixed_document() {
    let input = "\
People{
<http://example.org/a> <http://example.org/name> \"McConnell, Matt\" ;
    <http://example.org/born> \"January 5, 2013\" .
<http://http://example.org/b> <http://example.org/knows> _:b0 .
}
{ <http://example.org/c> <http://example.org/age> 42 . }
";

    let (sink, stats) = clean(input, RecordCollectorSink::new()).unwrap();
    let graphs = sink.finish();

    assert_eq!(graphs.len(), 2);
    assert_eq!(stats.graphs_completed, 2);
    assert_eq!(stats.statements_emitted, 3);
    assert_eq!(stats.statements_skipped, 0);

    let people = &graphs[0];
    assert_eq!(people.name, "People");
    assert_eq!(people.records.len(), 3);

    // Multi-pair statement: both records share the subject.
    assert_eq!(people.records[0].subject, "<http://example.org/a>");
    assert_eq!(people.records[1].subject, "<http://example.org/a>");
    assert_eq!(
        people.records[0].object,
        format!("\"McConnell, Matt\"{XSD_STRING_SUFFIX}")
    );
    assert_eq!(
        people.records[1].object,
        format!("\"2013-01-05T00:00:00\"{XSD_STRING_SUFFIX}")
    );

    // Duplicated scheme collapsed; anonymous node untouched.
    assert_eq!(people.records[2].subject, "<http://example.org/b>");
    assert_eq!(people.records[2].object, "_:b0");

    // Unnamed graph gets the default name; bare number object untouched.
    let unnamed = &graphs[1];
    assert_eq!(unnamed.name, "Default");
    assert_eq!(unnamed.records[0].object, "42");
}

#[test]
fn every_record_has_three_tab_separated_fields() {
    let input = "\
G{
<s> <p1> \"o1\" ; <p2> <o2> ; <p3> _:o3 .
}
";
    let (sink, _) = clean(input, RecordCollectorSink::new()).unwrap();
    let graphs = sink.finish();
    assert_eq!(graphs[0].records.len(), 3);
    for record in &graphs[0].records {
        assert_eq!(record.to_tsv().split('\t').count(), 3);
    }
}

#[test]
fn statement_state_carries_across_line_boundaries() {
    let input = "\
Split
Name{
<http://example.org/s>
    <http://example.org/p>
    \"spread over lines\"
    .
}
";
    let (sink, stats) = clean(input, RecordCollectorSink::new()).unwrap();
    let graphs = sink.finish();
    assert_eq!(graphs[0].name, "SplitName");
    assert_eq!(stats.statements_emitted, 1);
    assert_eq!(
        graphs[0].records[0].object,
        format!("\"spread over lines\"{XSD_STRING_SUFFIX}")
    );
}

#[test]
fn unrecognized_statements_are_reported_not_lost_silently() {
    let input = "\
G{
not a statement at all .
<http://example.org/s> <http://example.org/p> true .
}
";
    let (sink, stats) = clean(input, RecordCollectorSink::new()).unwrap();
    assert_eq!(stats.statements_skipped, 1);
    assert_eq!(stats.statements_emitted, 1);
    assert_eq!(sink.finish()[0].records[0].object, "true");
}

#[test]
fn graph_close_inside_punctuation_ends_statement_and_graph() {
    let input = "A{ <s> <p> <o> } B{ <s2> <p2> \"x\"@en }";
    let (sink, stats) = clean(input, RecordCollectorSink::new()).unwrap();
    let graphs = sink.finish();
    assert_eq!(stats.graphs_completed, 2);
    assert_eq!(graphs[1].records[0].object, "\"x\"@en");
}
