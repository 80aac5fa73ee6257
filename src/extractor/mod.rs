pub mod duration;
pub mod model;
pub mod row;

#[cfg(test)]
mod tests;

pub use duration::{UNPARSEABLE_DURATION_SECS, parse_duration_seconds};
pub use model::{ChannelInfo, LanguageInfo, RawRow, RawVideo};

use scraper::{Html, Selector};
use std::sync::LazyLock;

/// Rows of the results table on a keyword/category search page.
static SEARCH_ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.resp-tbl > tbody > tr").unwrap());
static ALL_ROWS: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());

/// Rows pulled out of one listing page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Valid rows in document order.
    pub rows: Vec<RawRow>,
    /// Data rows that were skipped for missing required fields.
    pub dropped: usize,
}

impl ExtractedPage {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.dropped == 0
    }
}

fn extract_with(html: &str, selector: &Selector) -> (Html, ExtractedPage) {
    let document = Html::parse_document(html);
    let mut page = ExtractedPage::default();
    for tr in document.select(selector).filter(|tr| row::is_data_row(*tr)) {
        match row::extract_row(tr) {
            Some(raw) => page.rows.push(raw),
            None => page.dropped += 1,
        }
    }
    (document, page)
}

/// Extracts rows from a search results page. A page without the results
/// table yields an empty page.
pub fn extract_search_page(html: &str) -> ExtractedPage {
    extract_with(html, &SEARCH_ROWS).1
}

/// Extracts rows from a channel listing page and attaches the channel block
/// (taken from the first row that has one) to every row of the page.
pub fn extract_channel_page(html: &str) -> ExtractedPage {
    let (document, mut page) = extract_with(html, &ALL_ROWS);
    let info = document.select(&ALL_ROWS).find_map(row::channel_info);
    if let Some(info) = info {
        for raw in &mut page.rows {
            raw.channel_info = Some(info.clone());
        }
    }
    page
}
