//! Fetching the user list.

use async_trait::async_trait;
use tracing::debug;
use users_core::{HttpMethod, HttpRequest, HttpResponse, User, UsersClient};

use crate::error::LoadError;

/// One-shot source of users for the view.
#[async_trait]
pub trait Loader: Send + Sync + 'static {
    async fn fetch_users(&self) -> Result<Vec<User>, LoadError>;
}

/// Loads users over HTTP. No retries and no timeout beyond reqwest's own.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: UsersClient,
    http: reqwest::Client,
}

impl HttpLoader {
    pub fn new(client: UsersClient) -> Result<Self, LoadError> {
        let http = reqwest::Client::builder().build().map_err(LoadError::Setup)?;
        Ok(Self::with_http(client, http))
    }

    pub fn with_http(client: UsersClient, http: reqwest::Client) -> Self {
        Self { client, http }
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        debug!(method = %req.method, url = %req.url, "sending request");
        let builder = match req.method {
            HttpMethod::Get => self.http.get(&req.url),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl Loader for HttpLoader {
    async fn fetch_users(&self) -> Result<Vec<User>, LoadError> {
        let response = self.execute(self.client.build_list_users()).await?;
        Ok(self.client.parse_list_users(response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_server::Behavior;
    use users_core::ApiError;

    async fn serve(behavior: Behavior) -> HttpLoader {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(mock_server::run(listener, behavior));
        HttpLoader::new(UsersClient::new(&format!("http://{addr}/"))).unwrap()
    }

    #[tokio::test]
    async fn fetches_users_in_server_order() {
        let loader = serve(Behavior::Users(vec![
            mock_server::User::new(2, "Ervin Howell"),
            mock_server::User::new(1, "Leanne Graham"),
        ]))
        .await;

        let users = loader.fetch_users().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(users[1].name, "Leanne Graham");
    }

    #[tokio::test]
    async fn server_error_is_an_api_error() {
        let loader = serve(Behavior::Status(500)).await;

        let err = loader.fetch_users().await.unwrap_err();
        assert!(matches!(err, LoadError::Api(ApiError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let loader = serve(Behavior::Malformed).await;

        let err = loader.fetch_users().await.unwrap_err();
        assert!(matches!(err, LoadError::Api(ApiError::Parse(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        // Bind then drop to get a port nobody is listening on.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let loader = HttpLoader::new(UsersClient::new(&format!("http://{addr}"))).unwrap();

        let err = loader.fetch_users().await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
        assert!(err.to_string().starts_with("network error"));
    }

    #[test]
    fn setup_errors_are_reported_apart_from_network_errors() {
        let source = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = LoadError::Setup(source);

        assert!(!matches!(err, LoadError::Network(_)));
        assert!(err.to_string().starts_with("HTTP client setup failed"));
    }
}
