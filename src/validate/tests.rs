// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};
use serde_json::{json, Value};

use super::normalize::parse_float_prefix;
use super::{
    normalize_payload, parse_diagram_payload, EdgeField, EdgeProblem, MalformedCause,
    NodeProblem, ResponseError, ValidationMode,
};
use crate::model::{DiagramPayload, EdgeRecord, NodeKind, NodeRecord, Position};

#[fixture]
fn login_flow() -> Value {
    json!({
        "nodes": [
            { "id": "n1", "data": { "label": "Start", "iconKeyword": "play" }, "position": { "x": 250, "y": 0 }, "type": "input" },
            { "id": "n2", "data": { "label": "Validate" }, "position": { "x": 250, "y": 100 } },
            { "id": "n3", "data": { "label": "End", "iconKeyword": "flag" }, "position": { "x": 250.5, "y": 200 }, "type": "output" }
        ],
        "edges": [
            { "id": "e1-2", "source": "n1", "target": "n2", "label": "Next" },
            { "id": "e2-3", "source": "n2", "target": "n3" }
        ],
        "explanation": "Title: Login"
    })
}

fn parse(value: &Value) -> Result<DiagramPayload, ResponseError> {
    parse_diagram_payload(&value.to_string(), ValidationMode::Full)
}

#[rstest]
fn well_formed_payload_round_trips(login_flow: Value) {
    let payload = parse(&login_flow).unwrap();

    assert_eq!(
        payload,
        DiagramPayload {
            nodes: vec![
                NodeRecord::new("n1", "Start", Position::new(250.0, 0.0))
                    .with_icon("play")
                    .with_kind(NodeKind::Input),
                NodeRecord::new("n2", "Validate", Position::new(250.0, 100.0)),
                NodeRecord::new("n3", "End", Position::new(250.5, 200.0))
                    .with_icon("flag")
                    .with_kind(NodeKind::Output),
            ],
            edges: vec![
                EdgeRecord::new("e1-2", "n1", "n2").with_label("Next"),
                EdgeRecord::new("e2-3", "n2", "n3"),
            ],
            explanation: Some("Title: Login".to_owned()),
        }
    );

    let reparsed = parse(&serde_json::to_value(&payload).unwrap()).unwrap();
    assert_eq!(reparsed, payload);
}

#[test]
fn numeric_string_position_is_coerced_to_number() {
    let text = r#"{"nodes":[{"id":"n1","data":{"label":"Start"},"position":{"x":"0","y":0}}],"edges":[]}"#;
    let payload = parse_diagram_payload(text, ValidationMode::Full).unwrap();

    assert_eq!(payload.nodes.len(), 1);
    assert_eq!(payload.nodes[0].position, Position::new(0.0, 0.0));
    assert_eq!(payload.nodes[0].label(), "Start");
    assert!(payload.edges.is_empty());
    assert_eq!(payload.explanation, None);
}

#[test]
fn edge_without_any_nodes_fails_at_its_index() {
    let text = r#"{"nodes":[],"edges":[{"id":"e1","source":"a","target":"b"}]}"#;
    let err = parse_diagram_payload(text, ValidationMode::Full).unwrap_err();

    assert_eq!(
        err,
        ResponseError::InvalidEdge {
            index: 0,
            problem: EdgeProblem::NoNodesDefined,
        }
    );
    assert_eq!(err.element_index(), Some(0));
    assert_eq!(err.to_string(), "edge at index 0 exists but no nodes are defined");
}

#[test]
fn empty_lists_are_a_valid_empty_payload() {
    let payload = parse_diagram_payload(r#"{"nodes":[],"edges":[]}"#, ValidationMode::Full).unwrap();
    assert!(payload.is_empty());
}

#[rstest]
#[case::missing(json!({ "explanation": "nothing" }))]
#[case::wrong_type(json!({ "nodes": "n1", "edges": { "id": "e1" } }))]
#[case::null(json!({ "nodes": null, "edges": null }))]
fn absent_or_non_array_lists_normalize_to_empty(#[case] value: Value) {
    let payload = parse(&value).unwrap();
    assert!(payload.nodes.is_empty());
    assert!(payload.edges.is_empty());
}

#[rstest]
#[case::with_language("```json\n{}\n```")]
#[case::without_language("```\n{}\n```")]
#[case::surrounding_prose("Sure! Here is the diagram:\n{} Let me know if you need more.")]
fn extracts_json_from_decorated_text(#[case] wrapper: &str) {
    let body = json!({ "nodes": [{ "id": "a", "data": { "label": "A" }, "position": { "x": 1, "y": 2 } }] })
        .to_string();
    let text = wrapper.replacen("{}", &body, 1);
    let payload = parse_diagram_payload(&text, ValidationMode::Full).unwrap();
    assert_eq!(payload.nodes[0].position, Position::new(1.0, 2.0));
}

#[rstest]
#[case::no_braces("I cannot draw that.")]
#[case::reversed("} oops {")]
#[case::only_fence("```json\n```")]
fn missing_object_is_malformed(#[case] text: &str) {
    let err = parse_diagram_payload(text, ValidationMode::Full).unwrap_err();
    assert_eq!(
        err,
        ResponseError::MalformedResponse {
            cause: MalformedCause::NoJsonObject
        }
    );
}

#[rstest]
#[case::trailing_comma(r#"{"nodes": [1,], }"#)]
#[case::unquoted_key(r#"{nodes: []}"#)]
#[case::truncated_inner(r#"{"nodes": [{"id": "n1"}"#)]
#[case::two_objects(r#"{"a":1} and {"b":2}"#)]
fn invalid_json_between_braces_is_malformed(#[case] text: &str) {
    let err = parse_diagram_payload(text, ValidationMode::Full).unwrap_err();
    assert!(
        matches!(
            err,
            ResponseError::MalformedResponse {
                cause: MalformedCause::Syntax { .. }
            }
        ),
        "got: {err:?}"
    );
}

#[test]
fn syntax_error_wraps_parser_location() {
    let err = parse_diagram_payload("{\"nodes\": [,]}", ValidationMode::Full).unwrap_err();
    match err {
        ResponseError::MalformedResponse {
            cause: MalformedCause::Syntax { line, column, .. },
        } => {
            assert_eq!(line, 1);
            assert!(column > 0);
        }
        other => panic!("expected syntax error, got: {other:?}"),
    }
}

#[test]
fn top_level_must_be_object() {
    let err = normalize_payload(&json!([1, 2]), ValidationMode::Full).unwrap_err();
    assert_eq!(err, ResponseError::UnexpectedShape { found: "array" });

    let err = normalize_payload(&Value::Null, ValidationMode::ShapeOnly).unwrap_err();
    assert_eq!(err, ResponseError::UnexpectedShape { found: "null" });
}

#[rstest]
#[case::not_object(json!("n1"), NodeProblem::NotAnObject { found: "string" })]
#[case::missing_id(
    json!({ "data": { "label": "A" }, "position": { "x": 0, "y": 0 } }),
    NodeProblem::InvalidId { received: "undefined".to_owned() }
)]
#[case::blank_id(
    json!({ "id": "  ", "data": { "label": "A" }, "position": { "x": 0, "y": 0 } }),
    NodeProblem::InvalidId { received: "\"  \"".to_owned() }
)]
#[case::numeric_id(
    json!({ "id": 7, "data": { "label": "A" }, "position": { "x": 0, "y": 0 } }),
    NodeProblem::InvalidId { received: "7".to_owned() }
)]
#[case::null_data(
    json!({ "id": "n1", "data": null, "position": { "x": 0, "y": 0 } }),
    NodeProblem::InvalidData { received: "null".to_owned() }
)]
#[case::missing_position(
    json!({ "id": "n1", "data": { "label": "A" } }),
    NodeProblem::InvalidPosition { received: "undefined".to_owned() }
)]
#[case::unparsable_x(
    json!({ "id": "n1", "data": { "label": "A" }, "position": { "x": "abc", "y": 0 } }),
    NodeProblem::InvalidCoordinates { x: "\"abc\"".to_owned(), y: "0".to_owned() }
)]
#[case::missing_y(
    json!({ "id": "n1", "data": { "label": "A" }, "position": { "x": 3 } }),
    NodeProblem::InvalidCoordinates { x: "3".to_owned(), y: "undefined".to_owned() }
)]
#[case::infinite_x(
    json!({ "id": "n1", "data": { "label": "A" }, "position": { "x": "Infinity", "y": 0 } }),
    NodeProblem::InvalidCoordinates { x: "\"Infinity\"".to_owned(), y: "0".to_owned() }
)]
fn invalid_node_reports_index_and_problem(#[case] node: Value, #[case] problem: NodeProblem) {
    let valid = json!({ "id": "ok", "data": { "label": "Ok" }, "position": { "x": 0, "y": 0 } });
    let value = json!({ "nodes": [valid, node], "edges": [] });

    let err = parse(&value).unwrap_err();
    assert_eq!(err, ResponseError::InvalidNode { index: 1, problem });
}

#[test]
fn invalid_position_message_names_received_values() {
    let value = json!({ "nodes": [{ "id": "n1", "data": {}, "position": { "x": "abc", "y": "5" } }] });
    let err = parse(&value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "node at index 0 has invalid 'position.x' or 'position.y' (received x: \"abc\", y: \"5\")"
    );
}

#[rstest]
#[case::numeric_string("10", 10.0)]
#[case::padded("  -4.5 ", -4.5)]
#[case::unit_suffix("12px", 12.0)]
#[case::exponent("1e2", 100.0)]
#[case::dangling_exponent("3e", 3.0)]
#[case::leading_dot(".5", 0.5)]
fn string_coordinates_are_parsed(#[case] raw: &str, #[case] expected: f64) {
    let value = json!({ "nodes": [{ "id": "n1", "data": { "label": "A" }, "position": { "x": raw, "y": raw } }] });
    let payload = parse(&value).unwrap();
    assert_eq!(payload.nodes[0].position, Position::new(expected, expected));
}

#[test]
fn float_prefix_rejects_non_numeric_text() {
    assert_eq!(parse_float_prefix("abc"), None);
    assert_eq!(parse_float_prefix("-"), None);
    assert_eq!(parse_float_prefix("."), None);
    assert_eq!(parse_float_prefix(""), None);
}

#[rstest]
#[case::number(json!(42), "42")]
#[case::boolean(json!(true), "true")]
#[case::null(json!(null), "n1")]
#[case::empty_string(json!(""), "")]
#[case::zero(json!(0), "n1")]
#[case::false_value(json!(false), "n1")]
fn non_string_labels_are_coerced(#[case] label: Value, #[case] expected: &str) {
    let value = json!({ "nodes": [{ "id": "n1", "data": { "label": label }, "position": { "x": 0, "y": 0 } }] });
    let payload = parse(&value).unwrap();
    assert_eq!(payload.nodes[0].label(), expected);
}

#[test]
fn missing_label_falls_back_to_id() {
    let value = json!({ "nodes": [{ "id": "start", "data": {}, "position": { "x": 0, "y": 0 } }] });
    assert_eq!(parse(&value).unwrap().nodes[0].label(), "start");
}

#[test]
fn non_string_icon_keyword_is_dropped() {
    let value = json!({ "nodes": [
        { "id": "n1", "data": { "label": "A", "iconKeyword": 3 }, "position": { "x": 0, "y": 0 } },
        { "id": "n2", "data": { "label": "B", "iconKeyword": null }, "position": { "x": 0, "y": 0 } }
    ] });
    let payload = parse(&value).unwrap();
    assert!(payload.nodes.iter().all(|node| node.data.icon_keyword.is_none()));
}

#[test]
fn unknown_node_type_is_default_kind() {
    let value = json!({ "nodes": [{ "id": "n1", "data": { "label": "A" }, "position": { "x": 0, "y": 0 }, "type": "custom" }] });
    assert_eq!(parse(&value).unwrap().nodes[0].kind, NodeKind::Default);
}

#[test]
fn duplicate_node_ids_are_rejected() {
    let node = json!({ "id": "n1", "data": { "label": "A" }, "position": { "x": 0, "y": 0 } });
    let value = json!({ "nodes": [node.clone(), node] });
    assert_eq!(
        parse(&value).unwrap_err(),
        ResponseError::InvalidNode {
            index: 1,
            problem: NodeProblem::DuplicateId { id: "n1".to_owned() },
        }
    );
}

#[rstest]
#[case::not_object(json!(["n1", "n2"]), EdgeProblem::NotAnObject { found: "array" })]
#[case::missing_id(
    json!({ "source": "n1", "target": "n2" }),
    EdgeProblem::InvalidField { field: EdgeField::Id, received: "undefined".to_owned() }
)]
#[case::blank_source(
    json!({ "id": "e", "source": "", "target": "n2" }),
    EdgeProblem::InvalidField { field: EdgeField::Source, received: "\"\"".to_owned() }
)]
#[case::numeric_target(
    json!({ "id": "e", "source": "n1", "target": 2 }),
    EdgeProblem::InvalidField { field: EdgeField::Target, received: "2".to_owned() }
)]
#[case::unknown_source(
    json!({ "id": "e", "source": "n9", "target": "n2" }),
    EdgeProblem::UnknownSource { node_id: "n9".to_owned() }
)]
#[case::unknown_target(
    json!({ "id": "e", "source": "n1", "target": "n9" }),
    EdgeProblem::UnknownTarget { node_id: "n9".to_owned() }
)]
#[case::duplicate_id(
    json!({ "id": "e1-2", "source": "n1", "target": "n2" }),
    EdgeProblem::DuplicateId { id: "e1-2".to_owned() }
)]
fn invalid_edge_reports_index_and_problem(
    mut login_flow: Value,
    #[case] edge: Value,
    #[case] problem: EdgeProblem,
) {
    login_flow["edges"].as_array_mut().unwrap().push(edge);
    let err = parse(&login_flow).unwrap_err();
    assert_eq!(err, ResponseError::InvalidEdge { index: 2, problem });
}

#[test]
fn dangling_reference_message_names_edge_and_node() {
    let value = json!({
        "nodes": [{ "id": "a", "data": { "label": "A" }, "position": { "x": 0, "y": 0 } }],
        "edges": [{ "id": "e1", "source": "a", "target": "ghost" }]
    });
    assert_eq!(
        parse(&value).unwrap_err().to_string(),
        "edge at index 0 refers to a non-existent target node ID: 'ghost'"
    );
}

#[rstest]
fn shape_only_skips_reference_checks(mut login_flow: Value) {
    login_flow["edges"][1]["target"] = json!("elsewhere");
    let payload =
        parse_diagram_payload(&login_flow.to_string(), ValidationMode::ShapeOnly).unwrap();
    assert_eq!(payload.edges[1].target, "elsewhere");

    let edges_only = json!({ "edges": [{ "id": "e1", "source": "a", "target": "b" }] });
    let payload = normalize_payload(&edges_only, ValidationMode::ShapeOnly).unwrap();
    assert!(payload.nodes.is_empty());
    assert_eq!(payload.edges.len(), 1);
}

#[rstest]
fn shape_only_still_checks_elements(mut login_flow: Value) {
    login_flow["edges"][0]["id"] = json!(" ");
    let err = parse_diagram_payload(&login_flow.to_string(), ValidationMode::ShapeOnly)
        .unwrap_err();
    assert!(matches!(
        err,
        ResponseError::InvalidEdge {
            index: 0,
            problem: EdgeProblem::InvalidField {
                field: EdgeField::Id,
                ..
            }
        }
    ));
}

#[test]
fn element_checks_run_before_reference_checks() {
    let value = json!({ "nodes": [], "edges": [{ "id": "e1", "source": 1, "target": "b" }] });
    assert!(matches!(
        parse(&value).unwrap_err(),
        ResponseError::InvalidEdge {
            problem: EdgeProblem::InvalidField {
                field: EdgeField::Source,
                ..
            },
            ..
        }
    ));
}

#[rstest]
#[case::number(json!(5), Some("5"))]
#[case::object(json!({ "a": 1 }), Some("{\"a\":1}"))]
fn non_string_edge_label_is_stringified(#[case] label: Value, #[case] expected: Option<&str>) {
    let value = json!({
        "nodes": [{ "id": "a", "data": { "label": "A" }, "position": { "x": 0, "y": 0 } }],
        "edges": [{ "id": "e1", "source": "a", "target": "a", "label": label }]
    });
    assert_eq!(parse(&value).unwrap().edges[0].label.as_deref(), expected);
}

#[rstest]
#[case::absent(json!({}), None)]
#[case::text(json!({ "explanation": "Title: X" }), Some("Title: X"))]
#[case::number(json!({ "explanation": 12 }), Some("12"))]
#[case::null(json!({ "explanation": null }), Some("No explanation provided by AI in the expected format."))]
fn explanation_is_text_or_absent(#[case] value: Value, #[case] expected: Option<&str>) {
    assert_eq!(parse(&value).unwrap().explanation.as_deref(), expected);
}
