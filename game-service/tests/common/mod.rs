use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use game_service::domain::leaderboard::service::LeaderboardService;
use game_service::domain::user::service::UserService;
use game_service::inbound::http::router::create_router;
use game_service::outbound::repositories::InMemoryStore;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::new());
        let user_service = Arc::new(UserService::new(Arc::clone(&store)));
        let leaderboard_service = Arc::new(LeaderboardService::new(
            Arc::clone(&store),
            Arc::clone(&store),
        ));
        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET));

        let router = create_router(user_service, leaderboard_service, authenticator, 24);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let jwt_handler = JwtHandler::new(TEST_JWT_SECRET);

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Sign up a user and return the issued token
    pub async fn signup(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/signup")
            .json(&serde_json::json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }
}
