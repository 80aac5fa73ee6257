#![no_main]

use libfuzzer_sys::fuzz_target;

use unlisted_search::extractor::{extract_channel_page, extract_search_page, parse_duration_seconds};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let html = String::from_utf8_lossy(data);

    // Extraction must never panic and never emit a row without required fields
    for page in [extract_search_page(&html), extract_channel_page(&html)] {
        for row in page.rows {
            assert!(row.has_required_fields());
        }
    }
    let _ = parse_duration_seconds(&html);
});
