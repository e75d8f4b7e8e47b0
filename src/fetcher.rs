use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::Config;
use crate::error::{Error, FetchError};

/// Fetcher interface
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a single GET and return the body of a 200 response.
    ///
    /// Any other outcome is a `FetchError`; the caller decides what to do
    /// with it, nothing is retried here.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.bot_name.clone())
            .build()
            .map_err(Error::HttpClient)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use mockito::Server;

    use super::*;

    fn config() -> Config {
        Config {
            request_timeout_secs: 2,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn ok_response_returns_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/esp32")
            .match_header("user-agent", "wokwatchbot")
            .with_status(200)
            .with_header("Content-Type", "text/html")
            .with_body("<html><body>listing</body></html>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&config()).unwrap();
        let body = fetcher.fetch(&format!("{}/esp32", server.url())).await.unwrap();
        assert_eq!(body, "<html><body>listing</body></html>");
    }

    #[tokio::test]
    async fn non_ok_status_is_an_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/esp32")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(&config()).unwrap();
        let res = fetcher.fetch(&format!("{}/esp32", server.url())).await;
        assert!(matches!(res, Err(FetchError::Status(404))));
    }

    #[tokio::test]
    async fn closed_port_is_a_request_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let fetcher = HttpFetcher::new(&config()).unwrap();
        let res = fetcher.fetch(&format!("http://127.0.0.1:{}/esp32", port)).await;
        assert!(matches!(res, Err(FetchError::RequestError(_))));
    }
}
