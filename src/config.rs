use std::time::Duration;

/// Immutable run configuration, passed to the driver at construction.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site root, trailing slash included.
    pub host: String,
    /// Query selecting the voting-records section of the listing document.
    pub listing_params: String,
    /// Mandatory minimum delay between any two outbound requests.
    pub pacing: Duration,
    /// Indent width for the per-bill JSON output files.
    pub json_indent: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            host: "http://www.parliament.ge/".to_string(),
            listing_params:
                "index.php?sec_id=1530&lang_id=GEO&kan_name=&kan_num=&kan_mp=&Search=ძიება"
                    .to_string(),
            pacing: Duration::from_secs(1),
            json_indent: 2,
        }
    }
}

impl ScrapeConfig {
    /// First page of the voting-records listing.
    pub fn root_url(&self) -> String {
        format!("{}{}", self.host, self.listing_params)
    }

    /// Listing page at the given pagination offset.
    pub fn page_url(&self, offset: &str) -> String {
        format!("{}&limit={}", self.root_url(), offset)
    }

    /// Resolve a relative uri from the listing against the host.
    pub fn absolute_url(&self, uri: &str) -> String {
        format!("{}{}", self.host, uri)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_appends_offset() {
        let config = ScrapeConfig::default();
        assert_eq!(config.page_url("30"), format!("{}&limit=30", config.root_url()));
    }

    #[test]
    fn absolute_url_joins_host() {
        let config = ScrapeConfig::default();
        assert_eq!(
            config.absolute_url("index.php?kan_det=det&kan_id=42"),
            "http://www.parliament.ge/index.php?kan_det=det&kan_id=42"
        );
    }
}
