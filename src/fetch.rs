use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Boundary to the document source. The driver and the per-bill results
/// extraction both go through this, so tests can substitute a stub.
pub trait Fetch {
    /// Fetch the document body at `url`.
    fn get(&mut self, url: &str) -> Result<String>;
}

/// Blocking HTTP client that enforces a minimum delay between any two
/// outbound requests. The delay lives here, not at call sites, so it
/// covers listing pages and per-bill results pages uniformly.
pub struct PacedClient {
    client: reqwest::blocking::Client,
    pacing: Duration,
    last_request: Option<Instant>,
}

impl PacedClient {
    pub fn new(pacing: Duration) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            pacing,
            last_request: None,
        }
    }

    /// Give the server some time to breathe.
    fn pace(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.pacing {
                std::thread::sleep(self.pacing - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}

impl Fetch for PacedClient {
    fn get(&mut self, url: &str) -> Result<String> {
        self.pace();
        self.client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .with_context(|| format!("Failed to fetch {url}"))
    }
}

// ── Tests ──
