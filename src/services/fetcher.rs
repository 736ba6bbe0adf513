use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use fake_user_agent::get_rua;

const NUM_FETCH_RETRIES: u8 = 3; // Should be > 0
const TRANSIENT_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Rolling-window throttle: at most `max_requests` per `window`. The counter
/// is reset when the window elapses; once the cap is hit, `acquire` sleeps
/// until the window end before letting the next request through.
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    window_start: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        RateLimiter {
            max_requests,
            window,
            window_start: Instant::now(),
            count: 0,
        }
    }

    pub fn per_minute(max_requests: u32) -> Self {
        Self::new(max_requests, Duration::from_secs(60))
    }

    pub async fn acquire(&mut self) {
        if self.window_start.elapsed() >= self.window {
            self.reset();
        }

        if self.count >= self.max_requests {
            let wait = self.window.saturating_sub(self.window_start.elapsed());
            log::info!("Rate limit reached. Waiting {:.1}s", wait.as_secs_f64());
            tokio::time::sleep(wait).await;
            self.reset();
        }

        self.count += 1;
    }

    fn reset(&mut self) {
        self.window_start = Instant::now();
        self.count = 0;
    }
}

/// Sequential HTTP fetcher: one request at a time, browser-like User-Agent,
/// bounded retry with exponential backoff on transient statuses. Owns the
/// rate limiter so no process-wide state is needed.
pub struct Fetcher {
    client: reqwest::Client,
    limiter: RateLimiter,
}

impl Fetcher {
    pub fn new(max_requests_per_minute: u32) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(get_rua())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build reqwest client")?;

        Ok(Fetcher {
            client,
            limiter: RateLimiter::per_minute(max_requests_per_minute),
        })
    }

    pub async fn fetch_text(&mut self, url: &str) -> anyhow::Result<String> {
        let response = self.fetch(url).await?;
        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }

    pub async fn fetch_bytes(&mut self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.fetch(url).await?;
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read response bytes from {}", url))?;
        Ok(bytes.to_vec())
    }

    async fn fetch(&mut self, url: &str) -> anyhow::Result<reqwest::Response> {
        let mut retry_count = 0;

        loop {
            self.limiter.acquire().await;

            match self.client.get(url).send().await {
                Ok(res) if res.status().is_success() => return Ok(res),
                Ok(res) => {
                    let status = res.status().as_u16();
                    if !TRANSIENT_STATUSES.contains(&status) || retry_count + 1 >= NUM_FETCH_RETRIES
                    {
                        return Err(anyhow!("Request to {} failed with status {}", url, status));
                    }
                    log::error!("Got status {} from {}, retrying", status, url);
                }
                Err(e) => {
                    if retry_count + 1 >= NUM_FETCH_RETRIES {
                        return Err(e).with_context(|| format!("No response from {}", url));
                    }
                    log::error!("No response from {}, error: {:?}", url, e);
                }
            }

            retry_count += 1;
            let backoff = Duration::from_secs(1 << retry_count);
            tokio::time::sleep(backoff).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn acquire_is_immediate_under_the_cap() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(60));
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn acquire_blocks_once_the_cap_is_hit() {
        let window = Duration::from_millis(200);
        let mut limiter = RateLimiter::new(2, window);
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        // Third request must wait for the window to elapse.
        limiter.acquire().await;
        assert!(start.elapsed() >= window);
    }

    #[tokio::test]
    async fn counter_resets_after_the_window_elapses() {
        let window = Duration::from_millis(50);
        let mut limiter = RateLimiter::new(1, window);
        limiter.acquire().await;
        tokio::time::sleep(window).await;
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(40));
    }
}
