//! Synchronous client for the NASA **meteorite landings** dataset
//! (`gh4g-9sfh` on `data.nasa.gov`, a Socrata catalog).
//!
//! The catalog serves fixed-size pages via `$limit`/`$offset`; this module
//! pages through the whole dataset and returns it as one in-memory table of
//! [`crate::models::RawLanding`] rows, preserving the catalog's row order.
//!
//! ### Notes
//! - An app token is optional for light use; when present it is sent as the
//!   `X-App-Token` header. The token is passed in explicitly — this module
//!   never reads the environment.
//! - Any transport or HTTP error aborts the fetch. There is no retry.
//!
//! Typical usage:
//! ```no_run
//! # use meteorite_landings::Client;
//! let client = Client::new(Some("token".into()));
//! let rows = client.fetch_all()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::models::RawLanding;
use anyhow::{Context, Result, bail};
use log::info;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

/// Records requested per page. The catalog held ~45,700 rows as of late
/// 2021, so a full fetch is a couple dozen pages.
pub const PAGE_SIZE: usize = 2000;

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    pub dataset: String,
    http: HttpClient,
    app_token: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Client {
    /// Build a client for `data.nasa.gov` with an optional Socrata app token.
    pub fn new(app_token: Option<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("meteorite_landings/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: "https://data.nasa.gov".into(),
            dataset: "gh4g-9sfh".into(),
            http,
            app_token,
        }
    }

    /// Fetch the entire dataset, page by page, in catalog order.
    ///
    /// ### Errors
    /// - Network/HTTP error (including auth failures from a bad app token)
    /// - JSON decoding error
    ///
    /// Either aborts the run; pages are never retried.
    pub fn fetch_all(&self) -> Result<Vec<RawLanding>> {
        let rows = paginate(PAGE_SIZE, |limit, offset| self.fetch_page(limit, offset))?;
        info!("Queried NASA for all meteorite landings.");
        info!("Found and collected {} entries.", rows.len());
        Ok(rows)
    }

    fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<RawLanding>> {
        let url = format!(
            "{}/resource/{}.json?$limit={}&$offset={}",
            self.base_url, self.dataset, limit, offset
        );
        let mut req = self.http.get(&url);
        if let Some(token) = &self.app_token {
            req = req.header("X-App-Token", token);
        }
        let resp = req.send().with_context(|| format!("GET {}", url))?;
        if !resp.status().is_success() {
            bail!("request failed with HTTP {}", resp.status());
        }
        resp.json().context("decode json")
    }
}

/// Page through a dataset with `page_size` rows per request, starting at
/// offset 0 and advancing by `page_size` after every full page.
///
/// The loop stops at the first page shorter than `page_size`. A dataset
/// whose size is an exact multiple of the page size therefore costs one
/// trailing empty page to confirm exhaustion. Rows are concatenated in the
/// order received.
pub fn paginate<F>(page_size: usize, mut fetch_page: F) -> Result<Vec<RawLanding>>
where
    F: FnMut(usize, usize) -> Result<Vec<RawLanding>>,
{
    let mut out = Vec::new();
    let mut offset = 0usize;
    loop {
        let page = fetch_page(page_size, offset)?;
        let got = page.len();
        out.extend(page);
        if got < page_size {
            break;
        }
        offset += page_size;
    }
    Ok(out)
}
