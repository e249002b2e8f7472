//! End-to-end HTTP tests
//!
//! These tests drive the full router (query parsing, registry, rendering)
//! in-process with `tower::ServiceExt::oneshot`. Every request gets a fresh
//! clone of a router sharing one registry, so a sequence of requests observes
//! the balances left by the previous ones.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use bank_api::core::default_registry;
    use bank_api::http::router;
    use http_body_util::BodyExt;
    use rstest::{fixture, rstest};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    #[fixture]
    fn app() -> Router {
        router(Arc::new(default_registry().unwrap()))
    }

    /// Send a GET request and return the content type and body text
    async fn get(app: &Router, uri: &str) -> (Option<String>, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "status for {}", uri);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: &Router, uri: &str) -> Value {
        let (content_type, body) = get(app, uri).await;
        assert_eq!(content_type.as_deref(), Some("application/json"), "body: {}", body);
        serde_json::from_str(&body).unwrap()
    }

    async fn get_text(app: &Router, uri: &str) -> String {
        let (content_type, body) = get(app, uri).await;
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        body
    }

    #[rstest]
    #[tokio::test]
    async fn test_banking_scenario(app: Router) {
        let json = get_json(&app, "/deposit?number=1001&amount=100").await;
        assert_eq!(json["balance"], 100.0);

        let json = get_json(&app, "/withdraw?number=1001&amount=30").await;
        assert_eq!(json["balance"], 70.0);

        let message = get_text(&app, "/withdraw?number=1001&amount=1000").await;
        assert_eq!(
            message,
            "the amount to withdraw should be less than the account's balance"
        );
        let json = get_json(&app, "/statement?number=1001").await;
        assert_eq!(json["balance"], 70.0);

        let json = get_json(&app, "/transfer?number=1001&amount=50&dest=1002").await;
        assert_eq!(json["number"], 1001);
        assert_eq!(json["balance"], 20.0);

        let json = get_json(&app, "/statement?number=1002").await;
        assert_eq!(json["customer"]["name"], "Mark");
        assert_eq!(json["balance"], 50.0);

        let message = get_text(&app, "/statement?number=9999").await;
        assert_eq!(message, "Account with number 9999 can't be found!");
    }

    #[rstest]
    #[tokio::test]
    async fn test_statement_body(app: Router) {
        let json = get_json(&app, "/statement?number=1001").await;

        assert_eq!(json["number"], 1001);
        assert_eq!(json["customer"]["name"], "John");
        assert_eq!(json["customer"]["address"], "Los Angeles, California");
        assert_eq!(json["customer"]["phone"], "(213) 555 0147");
        assert_eq!(json["balance"], 0.0);
    }

    #[rstest]
    #[case::statement_missing_number("/statement", "Account number is missing!")]
    #[case::statement_empty_number("/statement?number=", "Account number is missing!")]
    #[case::statement_invalid_number("/statement?number=abc", "Invalid account number!")]
    #[case::deposit_missing_number("/deposit?amount=10", "Account number is missing!")]
    #[case::deposit_missing_amount("/deposit?number=1001", "Invalid amount number!")]
    #[case::deposit_invalid_amount("/deposit?number=1001&amount=ten", "Invalid amount number!")]
    #[case::deposit_unknown_account(
        "/deposit?number=4242&amount=10",
        "Account with number 4242 can't be found!"
    )]
    #[case::deposit_zero(
        "/deposit?number=1001&amount=0",
        "the amount to deposit should be greater than zero"
    )]
    #[case::deposit_negative(
        "/deposit?number=1001&amount=-5",
        "the amount to deposit should be greater than zero"
    )]
    #[case::withdraw_missing_number("/withdraw?amount=10", "Account number is missing!")]
    #[case::withdraw_invalid_number("/withdraw?number=1.5&amount=10", "Invalid account number!")]
    #[case::statement_decimal_number("/statement?number=1001.0", "Invalid account number!")]
    #[case::repeated_number_first_invalid(
        "/statement?number=abc&number=1001",
        "Invalid account number!"
    )]
    #[case::withdraw_negative(
        "/withdraw?number=1001&amount=-1",
        "the amount to withdraw should be greater than zero"
    )]
    #[case::withdraw_insufficient(
        "/withdraw?number=1001&amount=1",
        "the amount to withdraw should be less than the account's balance"
    )]
    #[case::transfer_missing_number("/transfer?amount=1&dest=1002", "Account number is missing!")]
    #[case::transfer_invalid_amount(
        "/transfer?number=1001&amount=x&dest=1002",
        "Invalid amount number!"
    )]
    #[case::transfer_missing_destination(
        "/transfer?number=1001&amount=1",
        "Invalid account destination number!"
    )]
    #[case::transfer_invalid_destination(
        "/transfer?number=1001&amount=1&dest=abc",
        "Invalid account destination number!"
    )]
    #[case::transfer_unknown_source(
        "/transfer?number=5555&amount=1&dest=6666",
        "Account with number 5555 can't be found!"
    )]
    #[case::transfer_unknown_destination(
        "/transfer?number=1001&amount=1&dest=6666",
        "Account with number 6666 can't be found!"
    )]
    #[case::transfer_insufficient(
        "/transfer?number=1001&amount=1&dest=1002",
        "the amount to transfer should be less than the account's balance"
    )]
    #[case::transfer_zero(
        "/transfer?number=1001&amount=0&dest=1002",
        "the amount to transfer should be greater than zero"
    )]
    #[tokio::test]
    async fn test_rejections(app: Router, #[case] uri: &str, #[case] expected: &str) {
        let message = get_text(&app, uri).await;
        assert_eq!(message, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn test_rejected_transfer_leaves_both_balances(app: Router) {
        get_json(&app, "/deposit?number=1001&amount=10").await;

        get_text(&app, "/transfer?number=1001&amount=11&dest=1002").await;

        let source = get_json(&app, "/statement?number=1001").await;
        let destination = get_json(&app, "/statement?number=1002").await;
        assert_eq!(source["balance"], 10.0);
        assert_eq!(destination["balance"], 0.0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_repeated_keys_use_first_value(app: Router) {
        let json = get_json(&app, "/statement?number=1001&number=1002").await;
        assert_eq!(json["number"], 1001);

        let json = get_json(&app, "/deposit?number=1001&amount=5&amount=6").await;
        assert_eq!(json["balance"], 5.0);

        let json = get_json(&app, "/transfer?number=1001&amount=2&dest=1002&dest=9999").await;
        assert_eq!(json["balance"], 3.0);
        let json = get_json(&app, "/statement?number=1002").await;
        assert_eq!(json["balance"], 2.0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_fractional_amounts(app: Router) {
        get_json(&app, "/deposit?number=1002&amount=0.1").await;
        let json = get_json(&app, "/deposit?number=1002&amount=0.2").await;

        assert_eq!(json["balance"], 0.3);
    }

    #[rstest]
    #[tokio::test]
    async fn test_health(app: Router) {
        let (_, body) = get(&app, "/health").await;
        assert_eq!(body, "OK");
    }

    #[rstest]
    #[tokio::test]
    async fn test_unknown_route_is_not_found(app: Router) {
        let response = app
            .oneshot(Request::builder().uri("/accounts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
