//! Integration tests for vlsm-planner
//!
//! These tests verify the complete workflow from input validation through
//! allocation to export.

use vlsm_planner::input::parse_base_network;
use vlsm_planner::output::{export_csv, export_json, render_csv, render_summary, render_table};
use vlsm_planner::{plan, sorted_descending, AllocationHalt, PlanStatus};

#[test]
fn test_full_workflow() {
    // Validate input the way the interactive loop does
    let base = parse_base_network("192.168.0.0", "24").expect("base network should validate");

    // Requirements arrive unsorted; the explicit sort step orders them
    let requirements = sorted_descending(vec![10, 60, 2, 28]);
    assert_eq!(requirements, vec![60, 28, 10, 2]);

    let result = plan(base, &requirements).expect("plan should run");
    assert_eq!(result.status, PlanStatus::Success);
    assert_eq!(result.satisfied, 4);
    assert_eq!(result.consumed_addresses, 116);

    // Presentation layers consume the same structured result
    let summary = render_summary(&result);
    assert!(summary.contains("Space used: 116/256"));

    let table = render_table(&result.assignments);
    assert!(table.contains("192.168.0.64"));
    assert!(table.contains("/27"));

    let csv = render_csv(&result);
    assert_eq!(csv.lines().count(), 5, "header plus one row per subnet");
}

#[test]
fn test_csv_export_round_trip() {
    let base = parse_base_network("10.0.0.0", "24").expect("base network should validate");
    let result = plan(base, &[1, 1, 1]).expect("plan should run");

    let path = std::env::temp_dir().join("vlsm_planner_it_export.csv");
    let path = path.to_str().expect("temp path should be valid UTF-8");
    export_csv(&result, path).expect("CSV export should succeed");

    let contents = std::fs::read_to_string(path).expect("exported file should be readable");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Subnet,Network,Netmask,Wildcard,Prefix"));
    assert!(lines[1].contains("10.0.0.0"));
    assert!(lines[1].contains("/30"));
    assert!(lines[3].contains("10.0.0.8"));

    std::fs::remove_file(path).expect("cleanup should succeed");
}

#[test]
fn test_json_export_carries_structured_outcome() {
    let base = parse_base_network("10.0.0.0", "28").expect("base network should validate");
    let result = plan(base, &[3, 3, 3]).expect("plan should run");
    assert_eq!(result.status, PlanStatus::Partial);

    let path = std::env::temp_dir().join("vlsm_planner_it_export.json");
    let path = path.to_str().expect("temp path should be valid UTF-8");
    export_json(&result, path).expect("JSON export should succeed");

    let contents = std::fs::read_to_string(path).expect("exported file should be readable");
    let value: serde_json::Value =
        serde_json::from_str(&contents).expect("export should be valid JSON");

    assert_eq!(value["base"], "10.0.0.0/28");
    assert_eq!(value["status"], "Partial");
    assert_eq!(value["assignments"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(value["unmet"][0]["hosts"], 3);

    std::fs::remove_file(path).expect("cleanup should succeed");
}

#[test]
fn test_insufficient_space_reports_suggestion() {
    let base = parse_base_network("192.168.0.0", "28").expect("base network should validate");
    let result = plan(base, &[20]).expect("plan should run");

    assert_eq!(result.status, PlanStatus::Failed);
    match result.halt {
        Some(AllocationHalt::InsufficientSpace {
            required,
            available,
            suggested_prefix,
        }) => {
            assert_eq!(required, 22);
            assert_eq!(available, 16);
            assert_eq!(suggested_prefix, 27);
        }
        other => panic!("expected InsufficientSpace, got {:?}", other),
    }
}

#[test]
fn test_rejected_input_never_reaches_allocator() {
    assert!(parse_base_network("192.168.0", "24").is_err());
    assert!(parse_base_network("192.168.0.0", "31").is_err());
    assert!(parse_base_network("192.168.0.0", "x").is_err());
}
