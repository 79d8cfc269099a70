use super::*;

#[test]
fn experiments_endpoint_formats_expected_path() {
    assert_eq!(experiments_endpoint(1), "/api/experiments?page=1");
    assert_eq!(experiments_endpoint(12), "/api/experiments?page=12");
}

#[test]
fn experiments_request_failed_message_formats_status() {
    assert_eq!(experiments_request_failed_message(502), "experiments request failed: 502");
}
