//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod fpl_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let fpl_error = FplError::from(reqwest_error);

        match fpl_error {
            FplError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[tokio::test]
    async fn test_http_error_is_fetch_failure() {
        let client = reqwest::Client::new();
        let err = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await
            .unwrap_err();

        assert!(FplError::from(err).is_fetch_failure());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let fpl_error = FplError::from(json_error);

        match fpl_error {
            FplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
        assert!(!FplError::Infeasible.is_fetch_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let fpl_error = FplError::from(io_error);

        match fpl_error {
            FplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let fpl_error = FplError::from(parse_error);

        match fpl_error {
            FplError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_solve_error_conversion() {
        match FplError::from(SolveError::Infeasible) {
            FplError::Infeasible => (),
            other => panic!("Expected Infeasible, got {other:?}"),
        }

        match FplError::from(SolveError::Backend("numerical trouble".to_string())) {
            FplError::Solver { message } => assert_eq!(message, "numerical trouble"),
            other => panic!("Expected Solver, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages() {
        let error = FplError::InvalidConfig {
            var: "PORT".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid value for PORT: abc");

        let error = FplError::InvalidPosition {
            code: "5".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid position code: 5");

        assert_eq!(
            FplError::Infeasible.to_string(),
            "No feasible lineup satisfies the squad rules"
        );
    }
}
