use std::fs;

use crate::category::Category;
use crate::extractor::{RawVideo, extract_channel_page, extract_search_page};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("src/extractor/tests/fixtures/{name}"))
        .expect("Failed to read test fixture")
}

#[test]
fn test_search_page_rows_in_document_order() {
    let page = extract_search_page(&fixture("search_page.html"));

    let ids: Vec<_> = page.rows.iter().map(|r| r.video_id.as_str()).collect();
    assert_eq!(ids, vec!["AAAAAAAAAA1", "BBBBBBBBBB2", "CCCCCCCCCC3"]);
    // the row whose title has no link
    assert_eq!(page.dropped, 1);
}

#[test]
fn test_search_page_full_row() {
    let page = extract_search_page(&fixture("search_page.html"));
    let row = &page.rows[0];

    assert_eq!(row.title, "Summer Sale 15s Spot");
    assert_eq!(row.url, "https://www.youtube.com/watch?v=AAAAAAAAAA1");
    assert_eq!(row.thumbnail, "https://i.ytimg.com/vi/AAAAAAAAAA1/mqdefault.jpg");
    assert_eq!(row.channel_name, "Shop One");
    assert_eq!(row.channel_id, "UCshopone");
    assert_eq!(row.subscribers, "12.5K");
    assert_eq!(row.category, "Entertainment");
    assert_eq!(row.duration, "15s");
    assert_eq!(row.duration_seconds, 15);
    assert_eq!(row.views, "1.2M");
    assert_eq!(row.likes, "3.4K");
    assert_eq!(row.dislikes, "12");
    assert_eq!(row.upload_date, "2021-05-04");
    assert_eq!(row.languages.auto_generated, vec!["English"]);
    assert_eq!(row.languages.subtitles, vec!["German", "French"]);
    assert!(row.channel_info.is_none());
}

#[test]
fn test_search_page_defaults_and_durations() {
    let page = extract_search_page(&fixture("search_page.html"));

    let long = &page.rows[1];
    assert_eq!(long.duration_seconds, 3723);
    assert_eq!(long.category, "Science & Technology");
    assert_eq!(long.subscribers, "Unknown");
    assert!(long.thumbnail.is_empty());
    assert!(long.languages.subtitles.is_empty());

    let sparse = &page.rows[2];
    assert_eq!(sparse.duration_seconds, 115);
    assert_eq!(sparse.likes, "0");
    assert_eq!(sparse.upload_date, "Unknown");
}

#[test]
fn test_unknown_category_coerces_to_not_available() {
    let page = extract_search_page(&fixture("search_page.html"));
    let videos: Vec<RawVideo> = page.rows.into_iter().map(RawVideo::from).collect();

    assert_eq!(videos[0].category, Category::Entertainment);
    assert_eq!(videos[1].category, Category::ScienceTechnology);
    assert_eq!(videos[2].category, Category::NotAvailable);
}

#[test]
fn test_page_without_results_table_is_empty() {
    let page = extract_search_page(&fixture("no_results.html"));
    assert!(page.is_empty());
}

#[test]
fn test_search_page_accepts_implicit_tbody() {
    // bare <tr> children of the table still get a tbody from the parser
    let page = extract_search_page(&fixture("channel_page.html"));
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.dropped, 1);
}

#[test]
fn test_channel_page_attaches_channel_info_to_every_row() {
    let page = extract_channel_page(&fixture("channel_page.html"));

    let ids: Vec<_> = page.rows.iter().map(|r| r.video_id.as_str()).collect();
    assert_eq!(ids, vec!["chan0000001", "chan0000003"]);
    assert_eq!(page.dropped, 1);

    for row in &page.rows {
        let info = row.channel_info.as_ref().expect("channel info attached");
        assert_eq!(info.name, "Brand Studio");
        assert_eq!(info.channel_id, "UCbrand");
        assert_eq!(info.subscribers, "45K");
    }
}

#[test]
fn test_malformed_html() {
    let html = r#"<table class="resp-tbl"><tbody><tr><td dth="Title"><a href="/watch?v=x1">Broken<td dth="Channel"><a href="/channel/UC9">Nine"#;
    let page = extract_search_page(html);

    // Should handle malformed HTML gracefully
    if let Some(row) = page.rows.first() {
        assert_eq!(row.video_id, "x1");
        assert_eq!(row.channel_id, "UC9");
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let html = fixture("search_page.html");
    assert_eq!(extract_search_page(&html), extract_search_page(&html));
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_extract_never_panics(html in ".*") {
            let _ = extract_search_page(&html);
            let _ = extract_channel_page(&html);
        }

        #[test]
        fn test_rows_always_have_required_fields(title in "[a-zA-Z ]{0,12}", id in "[a-zA-Z0-9]{0,11}") {
            let html = format!(
                r#"<table class="resp-tbl"><tbody><tr><td dth="Title"><a href="/watch?v={id}">{title}</a></td><td dth="Channel"><a href="/channel/UC1">Acme</a></td></tr></tbody></table>"#
            );
            for row in extract_search_page(&html).rows {
                prop_assert!(!row.title.is_empty());
                prop_assert!(!row.video_id.is_empty());
                prop_assert!(!row.channel_name.is_empty());
            }
        }
    }
}
