//! Tests for the employee directory service.

use std::sync::Arc;

use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::AggregateError;
use crate::domain::ports::{CreateAck, Envelope, MockEmployeeSource};

fn nixon() -> EmployeeRecord {
    EmployeeRecord::new("1", "Tiger Nixon", "320800", "61")
}

fn winters() -> EmployeeRecord {
    EmployeeRecord::new("2", "Garrett Winters", "170750", "63")
}

fn ack(value: Value) -> CreateAck {
    match value {
        Value::Object(map) => map,
        other => panic!("ack fixture must be an object, got {other}"),
    }
}

fn service(source: MockEmployeeSource) -> EmployeeDirectoryService<MockEmployeeSource> {
    EmployeeDirectoryService::new(Arc::new(source))
}

fn listing(records: Vec<EmployeeRecord>) -> MockEmployeeSource {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(move || Ok(Envelope::success(records)));
    source
}

#[tokio::test]
async fn list_all_returns_records_in_upstream_order() {
    let directory = service(listing(vec![nixon(), winters()]));
    assert_eq!(directory.list_all().await, vec![nixon(), winters()]);
}

#[tokio::test]
async fn list_all_degrades_to_empty_when_upstream_is_down() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(|| Err(EmployeeSourceError::connect("connection refused")));

    assert!(service(source).list_all().await.is_empty());
}

#[tokio::test]
async fn list_all_degrades_to_empty_on_failure_envelope() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(|| Ok(Envelope::without_data("failure")));

    assert!(service(source).list_all().await.is_empty());
}

#[tokio::test]
async fn get_by_id_returns_the_record() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .withf(|id| id == "1")
        .times(1)
        .return_once(|_| Ok(Envelope::success(nixon())));

    assert_eq!(service(source).get_by_id("1").await, Ok(nixon()));
}

#[rstest]
#[case::failure_envelope(Ok(Envelope { status: Some("failure".to_owned()), data: Some(nixon()) }))]
#[case::missing_payload(Ok(Envelope::without_data("success")))]
#[case::client_error(Err(EmployeeSourceError::http_status(404_u16, "Not Found")))]
#[case::rate_limited(Err(EmployeeSourceError::http_status(429_u16, "Too Many Requests")))]
#[tokio::test]
async fn get_by_id_reports_not_found(
    #[case] response: Result<Envelope<EmployeeRecord>, EmployeeSourceError>,
) {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .times(1)
        .return_once(move |_| response);

    assert_eq!(
        service(source).get_by_id("9").await,
        Err(DirectoryError::NotFound { id: "9".to_owned() })
    );
}

#[tokio::test]
async fn get_by_id_maps_transport_failure_to_unavailable() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .times(1)
        .return_once(|_| Err(EmployeeSourceError::connect("timed out")));

    let error = service(source).get_by_id("1").await.expect_err("unavailable");
    assert!(matches!(error, DirectoryError::UpstreamUnavailable { .. }));
}

#[rstest]
#[case::server_error(EmployeeSourceError::http_status(500_u16, "boom"))]
#[case::decode(EmployeeSourceError::decode("expected value"))]
#[tokio::test]
async fn get_by_id_maps_server_and_decode_failures_to_upstream_error(
    #[case] failure: EmployeeSourceError,
) {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(source).get_by_id("1").await.expect_err("upstream error");
    assert!(matches!(error, DirectoryError::UpstreamError { .. }));
}

#[tokio::test]
async fn search_filters_the_listing() {
    let directory = service(listing(vec![nixon(), winters()]));
    assert_eq!(directory.search("WIN").await, vec![winters()]);
}

#[tokio::test]
async fn search_on_failed_listing_is_empty() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(|| Err(EmployeeSourceError::http_status(429_u16, "slow down")));

    assert!(service(source).search("").await.is_empty());
}

#[tokio::test]
async fn max_salary_uses_the_listing() {
    let directory = service(listing(vec![nixon(), winters()]));
    assert_eq!(directory.max_salary().await, Ok(320_800));
}

#[tokio::test]
async fn max_salary_of_failed_listing_is_zero() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_all()
        .times(1)
        .return_once(|| Err(EmployeeSourceError::connect("refused")));

    assert_eq!(service(source).max_salary().await, Ok(0));
}

#[tokio::test]
async fn max_salary_surfaces_malformed_salaries() {
    let broken = EmployeeRecord::new("3", "Ashton Cox", "eighty six", "66");
    let directory = service(listing(vec![nixon(), broken]));

    assert_eq!(
        directory.max_salary().await,
        Err(DirectoryError::AggregateParse(AggregateError::SalaryParse {
            id: "3".to_owned(),
            value: "eighty six".to_owned(),
        }))
    );
}

#[tokio::test]
async fn top_ten_caps_the_ranking() {
    let records = (0..12)
        .map(|index| {
            EmployeeRecord::new(
                index.to_string(),
                format!("Employee {index}"),
                (index * 1000).to_string(),
                "30",
            )
        })
        .collect();
    let names = service(listing(records)).top_ten().await.expect("ranking");

    assert_eq!(names.len(), 10);
    assert_eq!(names.first().map(String::as_str), Some("Employee 11"));
}

#[tokio::test]
async fn create_returns_the_ack_status_verbatim() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_create()
        .withf(|employee| employee.name == "Jane" && employee.salary == "1000" && employee.age == "30")
        .times(1)
        .return_once(|_| Ok(ack(json!({ "status": "success", "data": { "id": 42 } }))));

    let status = service(source)
        .create(NewEmployee {
            name: "Jane".into(),
            salary: "1000".into(),
            age: "30".into(),
        })
        .await;
    assert_eq!(status, Ok("success".to_owned()));
}

#[tokio::test]
async fn create_without_status_is_an_invalid_ack() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_create()
        .times(1)
        .return_once(|_| Ok(ack(json!({ "data": { "id": 42 } }))));

    assert_eq!(
        service(source).create(NewEmployee::default()).await,
        Err(DirectoryError::InvalidUpstreamAck)
    );
}

#[rstest]
#[case::unreachable(EmployeeSourceError::connect("refused"), DirectoryError::UpstreamUnavailable { message: "refused".into() })]
#[case::rejected(EmployeeSourceError::http_status(429_u16, "slow down"), DirectoryError::UpstreamStatus { status: 429, message: "slow down".into() })]
#[case::server(EmployeeSourceError::http_status(500_u16, "boom"), DirectoryError::UpstreamStatus { status: 500, message: "boom".into() })]
#[case::decode(EmployeeSourceError::decode("eof"), DirectoryError::UpstreamError { message: "eof".into() })]
#[tokio::test]
async fn create_classifies_upstream_failures(
    #[case] failure: EmployeeSourceError,
    #[case] expected: DirectoryError,
) {
    let mut source = MockEmployeeSource::new();
    source
        .expect_create()
        .times(1)
        .return_once(move |_| Err(failure));

    assert_eq!(
        service(source).create(NewEmployee::default()).await,
        Err(expected)
    );
}

#[tokio::test]
async fn delete_returns_the_name_captured_before_deletion() {
    let mut sequence = mockall::Sequence::new();
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .withf(|id| id == "1")
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(Envelope::success(EmployeeRecord::new("1", "Foo Bar", "1", "1"))));
    source
        .expect_delete()
        .withf(|id| id == "1")
        .times(1)
        .in_sequence(&mut sequence)
        .return_once(|_| Ok(()));

    assert_eq!(service(source).delete_by_id("1").await, Ok("Foo Bar".to_owned()));
}

#[tokio::test]
async fn delete_of_missing_employee_issues_no_delete() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .times(1)
        .return_once(|_| Ok(Envelope::without_data("failure")));
    source.expect_delete().times(0);

    assert_eq!(
        service(source).delete_by_id("404").await,
        Err(DirectoryError::NotFound { id: "404".to_owned() })
    );
}

#[tokio::test]
async fn delete_with_unreachable_lookup_issues_no_delete() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .times(1)
        .return_once(|_| Err(EmployeeSourceError::connect("refused")));
    source.expect_delete().times(0);

    let error = service(source).delete_by_id("1").await.expect_err("unavailable");
    assert!(matches!(error, DirectoryError::UpstreamUnavailable { .. }));
}

#[tokio::test]
async fn delete_forwards_upstream_rejection() {
    let mut source = MockEmployeeSource::new();
    source
        .expect_fetch_by_id()
        .times(1)
        .return_once(|_| Ok(Envelope::success(nixon())));
    source
        .expect_delete()
        .times(1)
        .return_once(|_| Err(EmployeeSourceError::http_status(429_u16, "Too Many Requests")));

    assert_eq!(
        service(source).delete_by_id("1").await,
        Err(DirectoryError::UpstreamStatus {
            status: 429,
            message: "Too Many Requests".to_owned(),
        })
    );
}
