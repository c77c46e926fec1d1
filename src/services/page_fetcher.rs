use anyhow::Context;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT},
    Client, ClientBuilder, StatusCode,
};

use crate::{configuration::ScraperSettings, error::ScrapeError};

/// Where ranking pages come from. The live site in production, canned pages in tests.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, year: u16) -> Result<String, ScrapeError>;
}

pub struct RankingClient {
    client: Client,
    base_url: String,
}

pub fn build_ranking_url(base_url: &str, year: u16) -> String {
    format!("{}/{}/search/", base_url.trim_end_matches('/'), year)
}

pub fn browser_headers(user_agent: &str) -> anyhow::Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).context("Invalid user agent")?,
    );
    headers.insert(
        ACCEPT_ENCODING,
        HeaderValue::from_static("gzip, deflate, br, zstd"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    Ok(headers)
}

impl RankingClient {
    pub fn new(settings: &ScraperSettings) -> anyhow::Result<Self> {
        Self::from_builder(reqwest::Client::builder(), settings)
    }

    pub fn from_builder(
        builder: ClientBuilder,
        settings: &ScraperSettings,
    ) -> anyhow::Result<Self> {
        let client = builder
            .default_headers(browser_headers(&settings.user_agent)?)
            .build()
            .context("Failed to build http client")?;

        Ok(RankingClient {
            client,
            base_url: settings.base_url.clone(),
        })
    }
}

impl PageSource for RankingClient {
    async fn fetch_page(&self, year: u16) -> Result<String, ScrapeError> {
        let url = build_ranking_url(&self.base_url, year);

        let res = match self.client.get(&url).send().await {
            Ok(res) => res,
            Err(e) => {
                let err = ScrapeError::Network {
                    year,
                    message: e.to_string(),
                };
                log::error!("{}", err);
                return Err(err);
            }
        };

        let status = res.status();
        if status != StatusCode::OK {
            log::error!(
                "Failed to retrieve data for the year {}, Status code: {}",
                year,
                status.as_u16()
            );
            return Err(ScrapeError::HttpStatus {
                year,
                status: status.as_u16(),
            });
        }

        match res.text().await {
            Ok(html_content) => {
                log::info!(
                    "Successfully retrieved data for the year {}, Status code: {}",
                    year,
                    status.as_u16()
                );
                Ok(html_content)
            }
            Err(e) => {
                let err = ScrapeError::Network {
                    year,
                    message: e.to_string(),
                };
                log::error!("{}", err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use reqwest::header::{ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};

    use super::{browser_headers, build_ranking_url, PageSource, RankingClient};
    use crate::{
        configuration::{ScraperSettings, DEFAULT_BASE_URL, DEFAULT_USER_AGENT},
        error::ScrapeError,
    };

    fn client_for(base_url: String) -> RankingClient {
        let settings = ScraperSettings {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            first_year: 1995,
            last_year: 2024,
            min_delay_secs: 0.0,
            max_delay_secs: 0.0,
        };
        RankingClient::from_builder(reqwest::Client::builder().no_proxy(), &settings).unwrap()
    }

    /// Answers a single request with `status_line` and `body`, handing back the raw request.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}/ranking/global500", addr), handle)
    }

    #[tokio::test]
    async fn fetch_page_ok_returns_body() {
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", "<html>ok</html>");

        let result = client_for(base_url).fetch_page(2001).await;

        assert_eq!(result, Ok("<html>ok</html>".to_string()));
        let request = server.join().unwrap().to_lowercase();
        assert!(request.starts_with("get /ranking/global500/2001/search/ http/1.1\r\n"));
        assert!(request.contains(&format!(
            "user-agent: {}",
            DEFAULT_USER_AGENT.to_lowercase()
        )));
        assert!(request.contains("accept-encoding: gzip, deflate, br, zstd"));
        assert!(request.contains("accept-language: en-us,en;q=0.9"));
        assert!(request.contains("connection: keep-alive"));
    }

    #[tokio::test]
    async fn fetch_page_not_found_is_http_status_error() {
        let (base_url, server) = serve_once("HTTP/1.1 404 Not Found", "missing");

        let result = client_for(base_url).fetch_page(2001).await;

        assert_eq!(
            result,
            Err(ScrapeError::HttpStatus {
                year: 2001,
                status: 404
            })
        );
        assert!(server
            .join()
            .unwrap()
            .starts_with("GET /ranking/global500/2001/search/ "));
    }

    #[tokio::test]
    async fn fetch_page_refused_connection_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(format!("http://{}/ranking/global500", addr))
            .fetch_page(2001)
            .await;

        assert!(matches!(
            result,
            Err(ScrapeError::Network { year: 2001, .. })
        ));
    }

    #[test]
    fn build_ranking_url_valid() {
        assert_eq!(
            build_ranking_url(DEFAULT_BASE_URL, 1995),
            "https://fortune.com/ranking/global500/1995/search/"
        );
        assert_eq!(
            build_ranking_url("https://fortune.com/ranking/global500/", 2024),
            "https://fortune.com/ranking/global500/2024/search/"
        );
    }

    #[test]
    fn browser_headers_valid() {
        let headers = browser_headers(DEFAULT_USER_AGENT).unwrap();

        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
        assert_eq!(headers[ACCEPT_ENCODING], "gzip, deflate, br, zstd");
        assert_eq!(headers[ACCEPT_LANGUAGE], "en-US,en;q=0.9");
        assert_eq!(headers[CONNECTION], "keep-alive");
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn browser_headers_reject_control_characters() {
        assert!(browser_headers("bad\nagent").is_err());
    }
}
