//! HTTP client behaviour against a mock analytics backend.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use resolve_dash::api::{AnalyticsApi, HttpAnalyticsApi};
use resolve_dash::dashboard::{fetch_snapshot, Dashboard, Screen, LOAD_ERROR};
use resolve_dash::event;
use serde_json::json;
use svckit::config::{ApiConfig, DashboardConfig};
use svckit::types::HealthBand;
use svckit::DashError;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpAnalyticsApi {
    HttpAnalyticsApi::new(&ApiConfig {
        base_url: format!("{}/", server.uri()),
        request_timeout_ms: None,
    })
    .unwrap()
}

fn dashboard_body() -> serde_json::Value {
    json!({
        "fault_distribution": {
            "total_faults": 50,
            "distribution": [
                {"fault_type": "Battery Issue", "count": 30, "percentage": 60.0},
                {"fault_type": "Connectivity", "count": 20, "percentage": 40.0}
            ]
        },
        "product_health": {
            "scores": [
                {"product_id": 1, "product_name": "Watch Ultra", "category": "smartwatches",
                 "health_score": 82.5, "complaint_count": 4},
                {"product_id": 2, "product_name": "Speaker Mini", "category": "speakers",
                 "health_score": 35.0, "complaint_count": 19}
            ]
        },
        "resolution_metrics": {
            "total_resolved": 40,
            "avg_resolution_days": 4.75,
            "median_resolution_days": 4,
            "min_resolution_days": 1,
            "max_resolution_days": 12
        },
        "severity_distribution": {"total": 50, "by_severity": []},
        "department_workload": {"by_department": []},
        "critical_alerts": {
            "critical_products": [{"product": "Speaker Mini", "critical_count": 5}],
            "unresolved_fault_types": []
        },
        "timestamp": "2024-05-01T10:00:00"
    })
}

fn summary_body() -> serde_json::Value {
    json!({
        "total_complaints": 50,
        "resolved_complaints": 40,
        "resolution_rate": 80.0,
        "critical_complaints": 5,
        "open_complaints": 10,
        "average_satisfaction": [
            {"complaint_id": 1, "customer_satisfaction": 4},
            {"complaint_id": 2, "customer_satisfaction": 5}
        ]
    })
}

#[tokio::test]
async fn health_accepts_any_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert_eq!(client(&server).health().await, Ok(()));
}

#[tokio::test]
async fn health_rejects_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).health().await.unwrap_err();
    assert_eq!(
        err,
        DashError::HttpStatus {
            endpoint: "/api/health".to_string(),
            status: 503
        }
    );
}

#[tokio::test]
async fn health_reports_unreachable_backend() {
    let api = HttpAnalyticsApi::new(&ApiConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        request_timeout_ms: Some(2000),
    })
    .unwrap();

    assert!(matches!(api.health().await, Err(DashError::NetworkError(_))));
}

#[tokio::test]
async fn dashboard_and_summary_decode_backend_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body()))
        .mount(&server)
        .await;

    let api = client(&server);
    let snapshot = fetch_snapshot(&api).await.unwrap();

    let faults = snapshot.data.fault_distribution.as_ref().unwrap();
    assert_eq!(faults.total_faults, 50);
    assert_eq!(faults.distribution[0].fault_type, "Battery Issue");

    let scores = &snapshot.data.product_health.as_ref().unwrap().scores;
    assert_eq!(scores[0].band(), HealthBand::Excellent);
    assert_eq!(scores[1].band(), HealthBand::Poor);

    let metrics = snapshot.data.resolution_metrics.as_ref().unwrap();
    assert_eq!(metrics.median_resolution_days, 4.0);

    assert_eq!(snapshot.summary.average_satisfaction_display(), "4.5");
    assert_eq!(snapshot.summary.resolution_rate, Some(80.0));
}

#[tokio::test]
async fn summary_failure_discards_dashboard_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats/summary"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = client(&server);
    let outcome = fetch_snapshot(&api).await;
    assert!(matches!(outcome, Err(DashError::HttpStatus { status: 500, .. })));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let outcome = client(&server).dashboard().await;
    assert!(matches!(outcome, Err(DashError::DecodeError(_))));
}

#[tokio::test]
async fn trends_requests_day_window() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/trends"))
        .and(query_param("days", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "period_days": 30,
            "data": [
                {"date": "2024-04-30", "complaints": 3},
                {"date": "2024-05-01", "complaints": 7}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let series = client(&server).trends(30).await.unwrap();
    assert_eq!(series.data.len(), 2);
    assert_eq!(series.data[1].complaints, 7);
}

#[tokio::test]
async fn stale_data_survives_backend_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(summary_body()))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let api = Arc::new(client(&server));
    let (tx, _rx) = event::channel();
    let mut dashboard = Dashboard::new(api.clone(), tx, DashboardConfig::default());

    dashboard.apply_refresh(fetch_snapshot(api.as_ref()).await);
    let first = match dashboard.screen() {
        Screen::Ready(snapshot) => snapshot.clone(),
        other => panic!("expected data, got {:?}", other),
    };

    // Both mocks are exhausted; the server now answers 404.
    let second = fetch_snapshot(api.as_ref()).await;
    assert!(second.is_err());
    dashboard.apply_refresh(second);

    assert_eq!(dashboard.screen(), Screen::Ready(&first));
    assert_ne!(dashboard.screen(), Screen::Error(LOAD_ERROR));
}
