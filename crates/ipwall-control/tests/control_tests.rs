//! Integration tests for command dispatch and response formatting

use std::sync::Arc;

use ipwall_control::{Command, ControlError, ControlPlane, Response, MAX_RESPONSE_LEN};
use ipwall_core::{FilterEngine, Verdict};

fn control_plane() -> ControlPlane {
    ControlPlane::new(Arc::new(FilterEngine::new()))
}

#[test]
fn add_reports_parsed_range() {
    let control = control_plane();
    let response = control
        .dispatch(Command::AddRange("5.0.0.0-5.0.0.255".into()))
        .unwrap();

    match response {
        Response::Added(range) => assert_eq!(range.to_string(), "5.0.0.0-5.0.0.255"),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn malformed_add_is_a_parse_error_and_mutates_nothing() {
    let control = control_plane();
    let err = control
        .dispatch(Command::AddRange("5.0.0.0-bad".into()))
        .unwrap_err();

    assert!(matches!(err, ControlError::Parse(_)));
    assert_eq!(control.engine().range_count(), 0);
}

#[test]
fn remove_of_absent_range_succeeds_with_zero_count() {
    let control = control_plane();
    let response = control
        .dispatch(Command::RemoveRange("9.0.0.0-9.0.0.255".into()))
        .unwrap();

    assert_eq!(response, Response::Removed { count: 0 });
    assert_eq!(control.engine().range_count(), 0);
}

#[test]
fn toggle_round_trip() {
    let control = control_plane();

    assert_eq!(
        control.dispatch(Command::Toggle).unwrap(),
        Response::Toggled { enabled: false }
    );
    assert_eq!(
        control.dispatch(Command::Toggle).unwrap(),
        Response::Toggled { enabled: true }
    );
}

#[test]
fn toggled_off_engine_accepts_blocked_source() {
    let control = control_plane();
    control
        .dispatch(Command::AddRange("5.0.0.0-5.0.0.255".into()))
        .unwrap();
    control.dispatch(Command::Toggle).unwrap();

    let src = u32::from_be_bytes([5, 0, 0, 10]);
    assert_eq!(control.engine().evaluate(src), Verdict::Accept);
}

#[test]
fn list_formats_one_line_per_range_newest_first() {
    let control = control_plane();
    control
        .dispatch(Command::AddRange("1.0.0.0-1.0.0.255".into()))
        .unwrap();
    control
        .dispatch(Command::AddRange("2.0.0.0-2.0.0.255".into()))
        .unwrap();

    let response = control.dispatch(Command::List).unwrap();
    assert_eq!(
        response,
        Response::Ranges("2.0.0.0-2.0.0.255\n1.0.0.0-1.0.0.255\n".into())
    );
}

#[test]
fn list_of_empty_blocklist_is_empty() {
    let control = control_plane();
    assert_eq!(
        control.dispatch(Command::List).unwrap(),
        Response::Ranges(String::new())
    );
}

#[test]
fn oversized_listing_fails_without_partial_data() {
    let control = control_plane();

    // 16 ranges at the 31-byte text maximum: 16 * 32 = 512 bytes formatted,
    // one past the budget.
    let texts: Vec<String> = (210..226)
        .map(|d| format!("200.200.200.200-211.211.211.{d}"))
        .collect();
    for text in &texts {
        assert_eq!(text.len(), 31);
        control.dispatch(Command::AddRange(text.clone())).unwrap();
    }

    let err = control.dispatch(Command::List).unwrap_err();
    assert_eq!(
        err,
        ControlError::ResponseTooLarge {
            needed: 512,
            limit: MAX_RESPONSE_LEN,
        }
    );

    // Dropping one entry brings the listing back under the budget.
    control
        .dispatch(Command::RemoveRange(texts[0].clone()))
        .unwrap();
    match control.dispatch(Command::List).unwrap() {
        Response::Ranges(listing) => {
            assert_eq!(listing.len(), 480);
            assert!(listing.len() <= MAX_RESPONSE_LEN);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn commands_survive_serde_transport() {
    let command = Command::AddRange("5.0.0.0-5.0.0.255".into());
    let wire = serde_json::to_string(&command).unwrap();
    let decoded: Command = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded, command);

    let response = Response::Toggled { enabled: false };
    let wire = serde_json::to_string(&response).unwrap();
    let decoded: Response = serde_json::from_str(&wire).unwrap();
    assert_eq!(decoded, response);
}
