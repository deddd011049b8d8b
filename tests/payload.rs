use std::fs;
use std::path::PathBuf;

use matchcentre_ingest::error::ScrapeError;
use matchcentre_ingest::payload::locate_match_centre;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn locates_payload_in_rendered_match_page() {
    let markup = read_fixture("match_page.html");
    let raw = locate_match_centre(&markup).expect("payload should be present");
    assert_eq!(raw, read_fixture("match_centre.json").trim());
}

#[test]
fn located_payload_is_valid_json() {
    let markup = read_fixture("match_page.html");
    let raw = locate_match_centre(&markup).expect("payload should be present");
    let value: serde_json::Value =
        serde_json::from_str(&raw).expect("sliced payload should parse");
    assert_eq!(value["home"]["name"], "Barcelona");
    assert_eq!(value["away"]["name"], "Girona");
    assert_eq!(value["events"].as_array().map(Vec::len), Some(6));
}

#[test]
fn page_without_marker_reports_payload_not_found() {
    let markup = "<html><body><script>var x = 1;</script><p>no data here</p></body></html>";
    let err = locate_match_centre(markup).expect_err("marker is absent");
    assert!(matches!(err, ScrapeError::PayloadNotFound));
}

#[test]
fn marker_outside_script_elements_is_ignored() {
    let markup = "<html><body><p>matchCentreData: {\"home\":1},\n</p></body></html>";
    assert!(locate_match_centre(markup).is_err());
}

#[test]
fn payload_without_member_boundary_runs_to_end_of_script() {
    let markup =
        "<html><body><script>\n    matchCentreData: {\"home\":1}\n    </script></body></html>";
    let raw = locate_match_centre(markup).expect("payload should be present");
    assert_eq!(raw, "{\"home\":1}");
}

#[test]
fn payload_is_cut_at_the_first_line_terminated_comma() {
    let markup = "<html><body><script>\nvar args = {\n    matchCentreData: {\"a\":1,\"b\":2},\n    other: {\"c\":3},\n};\n</script></body></html>";
    let raw = locate_match_centre(markup).expect("payload should be present");
    assert_eq!(raw, "{\"a\":1,\"b\":2}");
}
