use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::extractor::{
    duration::parse_duration_seconds,
    model::{ChannelInfo, LanguageInfo, RawRow, UNKNOWN, ZERO_COUNT},
};

/// Column keys the listing site puts in each cell's `dth` attribute.
pub mod column {
    pub const TITLE: &str = "Title";
    pub const CHANNEL: &str = "Channel";
    pub const DURATION: &str = "Duration";
    pub const VIEWS: &str = "Views";
    pub const LIKES: &str = "Likes";
    pub const DISLIKES: &str = "Dislikes";
    pub const CATEGORY: &str = "Category";
    pub const UPLOADED: &str = "Uploaded";
    pub const AUTO_GENERATED: &str = "Auto-Generated";
    pub const SUBTITLES: &str = "Subtitles";
}

const DEFAULT_DURATION: &str = "0:00";

static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());
static LAZY_IMAGE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img.lozad").unwrap());
static SMALL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("small").unwrap());
static CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td[dth]").unwrap());

/// First `td` of `row` whose `dth` attribute equals `key`.
fn cell<'a>(row: ElementRef<'a>, key: &str) -> Option<ElementRef<'a>> {
    row.select(&CELL)
        .find(|td| td.value().attr("dth") == Some(key))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn cell_text_or(row: ElementRef<'_>, key: &str, default: &str) -> String {
    cell(row, key)
        .map(text_of)
        .unwrap_or_else(|| default.to_string())
}

fn image_titles(row: ElementRef<'_>, key: &str) -> Vec<String> {
    cell(row, key)
        .map(|td| {
            td.select(&IMAGE)
                .filter_map(|img| img.value().attr("title"))
                .map(|title| title.trim().to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Segment after the last `=` of a watch link (`...watch?v=<id>`).
fn video_id_from(href: &str) -> &str {
    href.rsplit('=').next().unwrap_or_default()
}

/// Last path segment of a channel link (`.../channel/<id>`).
fn channel_id_from(href: &str) -> &str {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}

/// True for rows that carry at least one column cell (header rows do not).
pub fn is_data_row(row: ElementRef<'_>) -> bool {
    row.select(&CELL).next().is_some()
}

/// Channel name, id and subscriber count from the row's channel cell.
pub fn channel_info(row: ElementRef<'_>) -> Option<ChannelInfo> {
    let channel_td = cell(row, column::CHANNEL)?;
    let link = channel_td.select(&LINK).next()?;
    Some(ChannelInfo {
        name: text_of(link),
        channel_id: channel_id_from(link.value().attr("href").unwrap_or_default()).to_string(),
        subscribers: channel_td
            .select(&SMALL)
            .next()
            .map(text_of)
            .unwrap_or_else(|| UNKNOWN.to_string()),
    })
}

/// Extracts one result row.
///
/// Returns `None` when the title link or channel link is missing, or when
/// title, video id or channel name come out empty. Every other column falls
/// back to a default.
pub fn extract_row(row: ElementRef<'_>) -> Option<RawRow> {
    let Some(title_td) = cell(row, column::TITLE) else {
        warn!("Dropping row without a title cell");
        return None;
    };
    let Some((video_link, href)) = title_td
        .select(&LINK)
        .find_map(|a| a.value().attr("href").map(|href| (a, href)))
    else {
        warn!("Dropping row without a video link");
        return None;
    };
    let Some(channel) = channel_info(row) else {
        warn!("Dropping row without a channel link");
        return None;
    };

    let duration = cell_text_or(row, column::DURATION, DEFAULT_DURATION);
    let duration_seconds = parse_duration_seconds(&duration);

    let category = cell(row, column::CATEGORY)
        .map(|td| td.select(&LINK).next().map(text_of).unwrap_or_else(|| text_of(td)))
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let result = RawRow {
        title: text_of(video_link),
        video_id: video_id_from(href).to_string(),
        url: href.to_string(),
        thumbnail: title_td
            .select(&LAZY_IMAGE)
            .next()
            .and_then(|img| img.value().attr("data-src"))
            .unwrap_or_default()
            .to_string(),
        channel_name: channel.name,
        channel_id: channel.channel_id,
        subscribers: channel.subscribers,
        category,
        duration,
        duration_seconds,
        views: cell_text_or(row, column::VIEWS, ZERO_COUNT),
        likes: cell_text_or(row, column::LIKES, ZERO_COUNT),
        dislikes: cell_text_or(row, column::DISLIKES, ZERO_COUNT),
        upload_date: cell_text_or(row, column::UPLOADED, UNKNOWN),
        languages: LanguageInfo {
            auto_generated: image_titles(row, column::AUTO_GENERATED),
            subtitles: image_titles(row, column::SUBTITLES),
        },
        channel_info: None,
    };

    if !result.has_required_fields() {
        warn!(video_id = %result.video_id, "Dropping row with empty required fields");
        return None;
    }

    debug!(video_id = %result.video_id, duration_seconds, "extracted row");
    Some(result)
}
