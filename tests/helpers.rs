#![allow(dead_code)]

use wiremock::MockServer;

pub const LISTING_PATH: &str = "/unlistedSearch";

/// One result row in the listing site's markup.
pub fn row(id: &str, duration: &str) -> String {
    format!(
        r#"<tr>
            <td dth="Title"><img class="lozad" data-src="https://i.ytimg.com/vi/{id}/mqdefault.jpg"><a href="https://www.youtube.com/watch?v={id}">Video {id}</a></td>
            <td dth="Channel"><a href="https://www.youtube.com/channel/UC{id}">Channel {id}</a> <small>2K</small></td>
            <td dth="Category"><a href="/category/14">Music</a></td>
            <td dth="Duration">{duration}</td>
            <td dth="Views">{id}00</td>
            <td dth="Uploaded">2022-02-02</td>
        </tr>"#
    )
}

pub fn results_page(rows: &[(&str, &str)]) -> String {
    let body: String = rows.iter().map(|(id, d)| row(id, d)).collect();
    format!(
        r#"<!DOCTYPE html><html><body><table class="table border border-primary table-striped resp-tbl"><thead><tr><th>Title</th></tr></thead><tbody>{body}</tbody></table></body></html>"#
    )
}

pub fn listing_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), LISTING_PATH)
}
