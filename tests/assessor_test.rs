mod common;

use cia_scanner::core::models::{AnalysisReport, FormattedResult, ProbeFailure, TestType};
use cia_scanner::{Assessor, HttpProber};
use common::{canned, fast_settings, hardened_response, ScriptedProber, SECURITY_HEADERS};
use wiremock::{
    matchers::method,
    Mock, MockServer, ResponseTemplate,
};

fn expect_scored(result: &FormattedResult) -> (u8, &str, &str, &str) {
    match result {
        FormattedResult::Scored { score, one_line, explanation, suggestion } => {
            (*score, one_line.as_str(), explanation.as_str(), suggestion.as_str())
        }
        FormattedResult::Failed { error } => panic!("unexpected failure: {}", error),
    }
}

#[tokio::test]
async fn test_confidentiality_over_plain_http_with_all_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(hardened_response())
        .expect(1)
        .mount(&mock_server)
        .await;

    let assessor = Assessor::new(HttpProber::new(&fast_settings()).unwrap());
    let url = mock_server.uri();
    let report = assessor.assess(&url, TestType::Confidentiality).await;

    let AnalysisReport::Single(result) = &report else { panic!("expected a single-axis report") };
    let (score, one_line, explanation, suggestion) = expect_scored(result);
    let domain = url.trim_start_matches("http://");

    assert_eq!(score, 60);
    assert_eq!(one_line, format!("Confidentiality score: 60/100 for {}.", domain));
    assert!(explanation.starts_with(&format!("Confidentiality check for {}: HTTP detected", url)));
    assert!(explanation.contains("Security headers present: Strict-Transport-Security, Content-Security-Policy"));
    assert_eq!(suggestion, format!("For {}, implement HTTPS and add security headers.", domain));
}

#[tokio::test]
async fn test_integrity_of_empty_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let assessor = Assessor::new(HttpProber::new(&fast_settings()).unwrap());
    let report = assessor.assess_raw(&mock_server.uri(), "integrity").await;

    assert_eq!(report.score(), Some(40));
}

#[tokio::test]
async fn test_availability_of_missing_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let assessor = Assessor::new(HttpProber::new(&fast_settings()).unwrap());
    let report = assessor.assess(&mock_server.uri(), TestType::Availability).await;

    let AnalysisReport::Single(result) = &report else { panic!("expected a single-axis report") };
    let (_, _, explanation, _) = expect_scored(result);
    assert!(explanation.contains("HTTP status code: 404"));
    assert!(report.score().unwrap() <= 50);
}

#[tokio::test]
async fn test_cia_probes_once_per_axis() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(hardened_response())
        .expect(3)
        .mount(&mock_server)
        .await;

    let assessor = Assessor::new(HttpProber::new(&fast_settings()).unwrap());
    let report = assessor.assess(&mock_server.uri(), TestType::Cia).await;

    let AnalysisReport::Composite(composite) = &report else { panic!("expected a composite report") };
    assert_eq!(composite.details.confidentiality.score(), Some(60));
    assert_eq!(composite.details.integrity.score(), Some(80));
    assert!(composite.score.is_some());
    assert!(composite.one_line.starts_with("Full CIA check for 127.0.0.1:"));
}

#[tokio::test]
async fn test_cia_composite_is_floored_mean_of_scripted_scores() {
    // https + four headers = 90, non-empty body = 80, 200 in 0.7s = 80.
    let response = canned(&SECURITY_HEADERS[..4], b"content", 200, 700);
    let assessor = Assessor::new(ScriptedProber::new(Ok(response)));

    let report = assessor.assess("https://example.com/", TestType::Cia).await;

    let AnalysisReport::Composite(composite) = &report else { panic!("expected a composite report") };
    assert_eq!(composite.details.confidentiality.score(), Some(90));
    assert_eq!(composite.details.integrity.score(), Some(80));
    assert_eq!(composite.details.availability.score(), Some(80));
    assert_eq!(composite.score, Some(83));
    assert_eq!(composite.one_line, "Full CIA check for example.com: Overall 83/100.");
    assert_eq!(assessor.prober().calls(), 3);
}

#[tokio::test]
async fn test_cia_with_unreachable_target_has_null_score() {
    let assessor = Assessor::new(ScriptedProber::new(Err(ProbeFailure::new("dns error"))));

    let report = assessor.assess_raw("https://nowhere.invalid", "cia").await;

    let AnalysisReport::Composite(composite) = &report else { panic!("expected a composite report") };
    assert_eq!(composite.score, None);
    assert_eq!(composite.one_line, "Error calculating overall score.");
    assert_eq!(
        composite.details.availability,
        FormattedResult::Failed { error: "Request failed: dns error".to_string() }
    );

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["score"].is_null());
}

#[tokio::test]
async fn test_single_axis_failure_passes_error_through() {
    let assessor = Assessor::new(ScriptedProber::new(Err(ProbeFailure::new("timed out"))));

    let report = assessor.assess("https://slow.example", TestType::Integrity).await;

    assert_eq!(report.error(), Some("Request failed: timed out"));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Request failed: timed out" }));
}

#[tokio::test]
async fn test_unknown_test_type_never_probes() {
    let assessor = Assessor::new(ScriptedProber::new(Err(ProbeFailure::new("unused"))));

    let report = assessor.assess_raw("https://example.com", "bogus").await;

    assert_eq!(report, AnalysisReport::Rejected { error: "Unknown test type".to_string() });
    assert_eq!(assessor.prober().calls(), 0);
}

#[tokio::test]
async fn test_scoring_is_deterministic_for_identical_responses() {
    let response = canned(&SECURITY_HEADERS, b"static", 200, 100);
    let assessor = Assessor::new(ScriptedProber::new(Ok(response)));

    let first = assessor.assess("https://example.com", TestType::Cia).await;
    let second = assessor.assess("https://example.com", TestType::Cia).await;

    assert_eq!(first, second);
    assert_eq!(first.score(), Some(93));
}
