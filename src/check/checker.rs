use async_trait::async_trait;
use log::{debug, error, info, warn};
use reqwest::redirect::Policy;
use tokio::task::JoinError;

use std::io;
use std::time::Duration;

use crate::core::constants::timeouts;
use crate::core::error::{Result, error_chain};
use crate::core::{CheckFailure, CheckResult, RequestErrorKind};

/// Something that can check URLs one at a time.
#[async_trait]
pub trait CheckUrls {
    /// Check a single URL. Never fails: every outcome is a `CheckResult`.
    async fn check(&self, url: &str) -> CheckResult;

    /// Per-request timeout, reported in the batch log lines.
    fn timeout(&self) -> Duration;

    /// Check `urls` strictly in order, one after another.
    ///
    /// The returned vector has one entry per input URL, in input order,
    /// duplicates included.
    async fn check_all(&self, urls: &[String]) -> Vec<CheckResult> {
        info!(
            "Checking {} URLs with timeout={}s",
            urls.len(),
            self.timeout().as_secs_f64()
        );

        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            results.push(self.check(url).await);
        }

        info!("Completed checking {} URLs", urls.len());
        results
    }
}

/// Checks URLs with a single GET request each.
#[derive(Debug, Clone)]
pub struct HttpChecker {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(timeouts::MAX_REDIRECTS))
            .user_agent(user_agent)
            // Every check is an independent exchange
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self { client, timeout })
    }

    fn failed(&self, url: &str, failure: CheckFailure, detail: &str) -> CheckResult {
        log_failure(url, &failure, detail);
        CheckResult::from_failure(url, &failure)
    }
}

#[async_trait]
impl CheckUrls for HttpChecker {
    async fn check(&self, url: &str) -> CheckResult {
        debug!("Checking URL: {url}");

        // Run the request in its own task so a panic inside the HTTP stack
        // becomes a result instead of unwinding through the batch.
        let client = self.client.clone();
        let target = url.to_string();
        let outcome = tokio::spawn(async move {
            let mut response = client.get(target).send().await?;
            let status = response.status();
            // Drain the body so the timeout covers the whole exchange
            while response.chunk().await?.is_some() {}
            Ok::<_, reqwest::Error>(status)
        })
        .await;

        match outcome {
            Ok(Ok(status)) => {
                debug!("Received status {} for {url}", status.as_u16());
                CheckResult::from_status(url, status)
            }
            Ok(Err(err)) => self.failed(url, classify(&err), &error_chain(&err)),
            Err(join_err) => {
                let detail = join_err.to_string();
                self.failed(url, CheckFailure::from(join_err), &detail)
            }
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Map an HTTP client error onto the failure taxonomy.
///
/// Timeouts win over connection errors: a connect attempt that runs out of
/// time reports both. A connection dropped after it was established counts
/// as a connection error too, whether it happened while sending or while
/// reading the body.
pub fn classify(err: &reqwest::Error) -> CheckFailure {
    if err.is_timeout() {
        CheckFailure::Timeout
    } else if err.is_connect() || connection_lost(err) {
        CheckFailure::Connection
    } else if err.is_builder() {
        CheckFailure::Request(RequestErrorKind::Builder)
    } else if err.is_redirect() {
        CheckFailure::Request(RequestErrorKind::Redirect)
    } else if err.is_body() {
        CheckFailure::Request(RequestErrorKind::Body)
    } else if err.is_request() {
        CheckFailure::Request(RequestErrorKind::Request)
    } else {
        CheckFailure::Unexpected("Unclassified".to_string())
    }
}

/// Walk the source chain looking for a reset, closed or truncated connection.
fn connection_lost(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(cause) = current {
        if let Some(io_err) = cause.downcast_ref::<io::Error>() {
            if matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        if let Some(hyper_err) = cause.downcast_ref::<hyper::Error>() {
            if hyper_err.is_incomplete_message() || hyper_err.is_closed() {
                return true;
            }
        }
        current = cause.source();
    }
    false
}

impl From<JoinError> for CheckFailure {
    fn from(err: JoinError) -> Self {
        let name = if err.is_panic() {
            "Panic"
        } else if err.is_cancelled() {
            "Cancelled"
        } else {
            "Unclassified"
        };
        CheckFailure::Unexpected(name.to_string())
    }
}

fn log_failure(url: &str, failure: &CheckFailure, detail: &str) {
    match failure {
        CheckFailure::Timeout => warn!("Timeout checking {url}"),
        CheckFailure::Connection => warn!("Connection error for {url}"),
        CheckFailure::Request(kind) => error!("Request error checking {url}: {kind}: {detail}"),
        CheckFailure::Unexpected(name) => {
            error!("Unexpected error checking {url}: {name}: {detail}")
        }
    }
}

/// Check one URL with a fresh client.
pub async fn check_url(url: &str, timeout: Duration) -> CheckResult {
    match HttpChecker::new(timeout) {
        Ok(checker) => checker.check(url).await,
        Err(err) => client_unavailable(url, &err),
    }
}

/// Check every URL in order with a shared client.
pub async fn check_all(urls: &[String], timeout: Duration) -> Vec<CheckResult> {
    match HttpChecker::new(timeout) {
        Ok(checker) => checker.check_all(urls).await,
        Err(err) => urls.iter().map(|url| client_unavailable(url, &err)).collect(),
    }
}

fn client_unavailable(url: &str, err: &crate::core::UrlCheckerError) -> CheckResult {
    let failure = match err {
        crate::core::UrlCheckerError::Http(inner) => classify(inner),
        crate::core::UrlCheckerError::InvalidArgument(_) => {
            CheckFailure::Unexpected("InvalidArgument".to_string())
        }
    };
    log_failure(url, &failure, &error_chain(err));
    CheckResult::from_failure(url, &failure)
}
