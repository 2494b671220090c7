//! Unit tests for HTTP client functionality

use super::*;
use crate::{cli::types::Position, FplError};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[cfg(test)]
mod http_tests {
    use super::*;

    fn client_for(server: &MockServer) -> FplClient {
        FplClient::new(
            format!("{}/api/bootstrap-static/", server.uri()),
            Duration::from_secs(2),
        )
        .unwrap()
    }

    fn element(web_name: &str, element_type: u8, now_cost: i64) -> serde_json::Value {
        json!({
            "first_name": "Test",
            "second_name": web_name,
            "web_name": web_name,
            "team": 1,
            "element_type": element_type,
            "now_cost": now_cost,
            "ep_next": "2.0",
            "total_points": 10,
            "event_points": 2,
            "status": "a"
        })
    }

    #[tokio::test]
    async fn test_get_players_success() {
        let mock_server = MockServer::start().await;

        let body = json!({
            "elements": [
                element("Keeper", 1, 45),
                element("Manager", 5, 5),
                element("Striker", 4, 80),
                element("Free", 3, 0)
            ]
        });

        Mock::given(method("GET"))
            .and(path("/api/bootstrap-static/"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let players = client_for(&mock_server).get_players().await.unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].web_name, "Keeper");
        assert_eq!(players[0].position, Position::GK);
        assert_eq!(players[1].web_name, "Striker");
        assert_eq!(players[1].position, Position::FWD);
    }

    #[tokio::test]
    async fn test_server_error_is_fetch_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).get_players().await.unwrap_err();
        assert!(err.is_fetch_failure());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_timeout_is_fetch_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "elements": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let client = FplClient::new(
            format!("{}/api/bootstrap-static/", mock_server.uri()),
            Duration::from_millis(50),
        )
        .unwrap();

        let err = client.get_players().await.unwrap_err();
        match err {
            FplError::Http(e) => assert!(e.is_timeout()),
            other => panic!("Expected Http timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).get_players().await.unwrap_err();
        assert!(matches!(err, FplError::Json(_)), "got {err:?}");
        assert!(!err.is_fetch_failure());
    }

    #[tokio::test]
    async fn test_missing_elements_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "events": [] })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).get_bootstrap().await.unwrap_err();
        assert!(matches!(err, FplError::Json(_)), "got {err:?}");
        assert!(err.to_string().contains("elements"));
    }

    #[test]
    fn test_bootstrap_url_constant() {
        assert_eq!(
            BOOTSTRAP_URL,
            "https://fantasy.premierleague.com/api/bootstrap-static/"
        );
    }

    #[test]
    fn test_common_headers() {
        let headers = common_headers();
        assert_eq!(headers.get("accept").unwrap(), "application/json");
    }
}
