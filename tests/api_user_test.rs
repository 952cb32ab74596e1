//! Integration tests for the user API endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{TEST_API_KEY, body_to_json, test_app, test_app_with_config, test_config};

    /// Tests the upstream user resource is returned unchanged
    #[tokio::test]
    async fn it_returns_the_user_resource() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/me")
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "resource": {
                        "uri": "https://api.calendly.com/users/USER1",
                        "name": "Ada Lovelace",
                        "timezone": "Europe/London",
                        "current_organization": "https://api.calendly.com/organizations/ORG1"
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(Request::builder().uri("/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(
            body,
            serde_json::json!({
                "uri": "https://api.calendly.com/users/USER1",
                "name": "Ada Lovelace",
                "timezone": "Europe/London",
                "current_organization": "https://api.calendly.com/organizations/ORG1"
            })
        );
        mock.assert_async().await;
    }

    /// Tests an upstream 401 is surfaced as a 401
    #[tokio::test]
    async fn it_propagates_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/me")
            .with_status(401)
            .with_body(r#"{"title": "Unauthenticated", "message": "The access token is invalid"}"#)
            .expect(1)
            .create_async()
            .await;

        let app = test_app(&server.url());
        let response = app
            .oneshot(Request::builder().uri("/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_to_json(response.into_body()).await;
        assert!(body["detail"].as_str().unwrap().contains("The access token is invalid"));
        mock.assert_async().await;
    }

    /// Tests an unreachable upstream returns 500
    #[tokio::test]
    async fn it_returns_500_for_malformed_base_url() {
        let app = test_app("not a url");
        let response = app
            .oneshot(Request::builder().uri("/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Tests a silent upstream times out with a 500 instead of hanging
    #[tokio::test]
    async fn it_returns_500_when_upstream_times_out() {
        // Connections are queued by the kernel but never answered
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let mut config = test_config(&url);
        config.request_timeout_secs = 1;

        let app = test_app_with_config(config);
        let response = app
            .oneshot(Request::builder().uri("/user").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        drop(listener);
    }
}
