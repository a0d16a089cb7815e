// GitHub API endpoint functions.
// Typed access to the user repository listing.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::Repository;

/// Largest page the listing endpoint will return.
pub const MAX_PER_PAGE: u32 = 100;

impl GitHubClient {
    /// Get the first page of repositories owned by `user`.
    pub async fn get_user_repos(&mut self, user: &str, per_page: u32) -> Result<Vec<Repository>> {
        let per_page = per_page.min(MAX_PER_PAGE).to_string();
        let params = [("per_page", per_page.as_str()), ("type", "owner")];
        let response = self
            .get_with_params(&format!("/users/{}/repos", user), &params)
            .await?;
        let repos: Vec<Repository> = response.json().await?;
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    use super::*;
    use crate::cache::{ExpiringCache, MemoryStore};
    use crate::error::FolioError;
    use crate::portfolio::{FetchOutcome, Fetcher, UserRepos};

    const REPOS_BODY: &str = r#"[
        {
            "name": "folio",
            "description": "Terminal portfolio",
            "language": "Rust",
            "stargazers_count": null,
            "updated_at": "2024-05-01T12:00:00Z",
            "fork": false,
            "archived": false,
            "html_url": "https://github.com/octocat/folio"
        }
    ]"#;

    /// Answer a single request with a canned response; yields the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8(request).unwrap().to_lowercase()
        });

        (base, handle)
    }

    fn client(base: &str) -> GitHubClient {
        GitHubClient::new(base, None, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_user_repos_request_and_decode() {
        let (base, server) = serve_once("200 OK", REPOS_BODY).await;

        let repos = client(&base).get_user_repos("octocat", 500).await.unwrap();
        let request = server.await.unwrap();

        assert!(
            request.starts_with("get /users/octocat/repos?per_page=100&type=owner http/1.1\r\n"),
            "{}",
            request
        );
        assert!(request.contains("\r\ncache-control: no-cache\r\n"), "{}", request);
        assert!(!request.contains("\r\nauthorization:"), "{}", request);

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "folio");
        assert_eq!(repos[0].stargazers_count, 0);
    }

    #[tokio::test]
    async fn test_token_sent_as_bearer() {
        let (base, server) = serve_once("200 OK", "[]").await;

        let mut client = GitHubClient::new(&base, Some("abc123"), Duration::from_secs(5)).unwrap();
        assert!(client.get_user_repos("octocat", 100).await.unwrap().is_empty());
        let request = server.await.unwrap();

        assert!(request.contains("\r\nauthorization: bearer abc123\r\n"), "{}", request);
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let (base, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = client(&base).get_user_repos("octocat", 100).await.unwrap_err();
        server.await.unwrap();

        match err {
            FolioError::Status { status, url } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(url.contains("/users/octocat/repos"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_becomes_unavailable() {
        let (base, server) = serve_once("404 Not Found", "{}").await;

        let cache = ExpiringCache::new(MemoryStore::new(), "repos", Duration::from_secs(120));
        let fetcher = Fetcher::new(UserRepos::new(client(&base), "octocat"), cache);
        let outcome = fetcher.get_repositories().await;
        server.await.unwrap();

        assert!(matches!(outcome, FetchOutcome::Unavailable));
    }
}
