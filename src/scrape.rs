use std::time::Instant;

use anyhow::{Context, Result};
use scraper::Html;
use tracing::info;

use crate::config::ScrapeConfig;
use crate::extract;
use crate::fetch::Fetch;
use crate::pagination;
use crate::record;
use crate::writer::RecordSink;

/// Totals for a completed run.
pub struct RunStats {
    pub pages: usize,
    pub records: usize,
}

/// Sequential scraping driver: one page at a time, records emitted in
/// strict page-then-position order. All network I/O goes through the
/// paced fetcher; nothing here is safe to parallelize without a new
/// pacing policy spanning all requests.
pub struct Scraper<F: Fetch, S: RecordSink> {
    config: ScrapeConfig,
    fetcher: F,
    sink: S,
}

impl<F: Fetch, S: RecordSink> Scraper<F, S> {
    pub fn new(config: ScrapeConfig, fetcher: F, sink: S) -> Self {
        Self {
            config,
            fetcher,
            sink,
        }
    }

    /// Run the complete scraping process, root page onward.
    pub fn run(&mut self) -> Result<RunStats> {
        let mut stats = RunStats {
            pages: 0,
            records: 0,
        };

        let mut url = self.config.root_url();
        let mut is_root = true;
        loop {
            match self.scrape_page(&url, is_root, &mut stats)? {
                Some(next) => {
                    url = next;
                    is_root = false;
                }
                None => break,
            }
        }
        Ok(stats)
    }

    /// Scrape one page and return the next page's URL.
    ///
    /// A page with no bills is skipped (logged by the detail extractor)
    /// but still consulted for pagination. Records are written only after
    /// the whole page assembled, so no partial files are left behind.
    fn scrape_page(
        &mut self,
        url: &str,
        is_root: bool,
        stats: &mut RunStats,
    ) -> Result<Option<String>> {
        let t0 = Instant::now();
        println!("Scraping: {url}");

        let body = self
            .fetcher
            .get(url)
            .with_context(|| format!("Failed to fetch listing page {url}"))?;
        let page = Html::parse_document(&body);

        let details = extract::details::extract(&page);
        if !details.is_empty() {
            let num_details = details.len();
            let numbers = extract::numbers::extract(&page, num_details)?;
            let dates = extract::dates::extract(&page, num_details)?;
            let results =
                extract::tallies::extract(&page, num_details, &mut self.fetcher, &self.config);
            let amendments = extract::amendments::extract(&page, &details)?;

            let records =
                record::assemble(&self.config, details, numbers, dates, results, amendments)?;
            for rec in &records {
                println!(
                    "Voting record for bill {}, kan_id {}",
                    rec.number.as_deref().unwrap_or("-"),
                    rec.kan_id
                );
                self.sink.write(rec)?;
            }
            stats.records += records.len();
        }
        stats.pages += 1;

        let next = pagination::next_page(&page, &self.config, is_root);
        info!("Page done in {:.1}s", t0.elapsed().as_secs_f64());
        Ok(next)
    }
}

// ── Tests ──
