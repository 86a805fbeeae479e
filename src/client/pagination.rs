use crate::client::{
    HEADER_LINK, HEADER_NEXT_PAGE, HEADER_PAGE, HEADER_PER_PAGE, HEADER_PREV_PAGE, HEADER_TOTAL,
    HEADER_TOTAL_PAGES,
};
use reqwest::header::HeaderMap;
use serde::Serialize;
use url::Url;

/// Represents `Pagination` information from a GitLab API request.
///
/// Offset pagination reports page numbers through the `X-*` headers while
/// keyset pagination only sends `Link` headers, so both are kept.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/rest/index.html#pagination
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pagination {
    pub total_items: Option<u64>,
    pub total_pages: Option<u64>,
    pub items_per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,

    pub next_link: Option<String>,
    pub previous_link: Option<String>,
    pub first_link: Option<String>,
    pub last_link: Option<String>,
}

fn header_number(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
}

impl Pagination {
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        let mut pagination = Self {
            total_items: header_number(headers, HEADER_TOTAL),
            total_pages: header_number(headers, HEADER_TOTAL_PAGES),
            items_per_page: header_number(headers, HEADER_PER_PAGE),
            current_page: header_number(headers, HEADER_PAGE),
            // X-Next-Page and X-Prev-Page are sent empty on the last and first page
            next_page: header_number(headers, HEADER_NEXT_PAGE),
            previous_page: header_number(headers, HEADER_PREV_PAGE),
            ..Self::default()
        };

        let links = if let Some(links) = headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            links
        } else {
            return pagination;
        };

        for link in links.split(',') {
            let segments: Vec<&str> = link.split(';').map(str::trim).collect();

            // Skip if we don't at least have href and rel
            if segments.len() < 2 {
                continue;
            }

            // Check if href segment is well formed and a valid url format
            let url = if segments[0].starts_with('<') && segments[0].ends_with('>') {
                match Url::parse(&segments[0][1..segments[0].len() - 1]) {
                    Ok(url) => url,
                    Err(_) => continue,
                }
            } else {
                continue;
            };

            for rel in &segments[1..] {
                let target = Some(url.to_string());
                match rel.trim() {
                    "rel=\"next\"" => pagination.next_link = target,
                    "rel=\"prev\"" => pagination.previous_link = target,
                    "rel=\"first\"" => pagination.first_link = target,
                    "rel=\"last\"" => pagination.last_link = target,
                    _ => {}
                }
            }
        }

        pagination
    }

    /// Returns true when the server reported another page after this one.
    pub fn has_next(&self) -> bool {
        self.next_page.is_some() || self.next_link.is_some()
    }
}

/// Page selection shared by every list endpoint.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl ListOptions {
    pub fn page(page: u64, per_page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Descending
    }
}

#[cfg(test)]
mod test {
    use super::{Pagination, HEADER_LINK};
    use crate::client::{HEADER_NEXT_PAGE, HEADER_PAGE, HEADER_PREV_PAGE, HEADER_TOTAL};
    use reqwest::header::HeaderMap;

    #[test]
    fn offset_pagination() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_TOTAL, "42".parse().unwrap());
        headers.insert(HEADER_PAGE, "1".parse().unwrap());
        headers.insert(HEADER_NEXT_PAGE, "2".parse().unwrap());
        headers.insert(HEADER_PREV_PAGE, "".parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.total_items, Some(42));
        assert_eq!(p.current_page, Some(1));
        assert_eq!(p.next_page, Some(2));
        assert_eq!(p.previous_page, None);
        assert!(p.has_next());
    }

    #[test]
    fn keyset_pagination() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://gitlab.example.com/api/v4/projects?pagination=keyset&per_page=50&order_by=id&sort=asc&id_after=42>; rel="next", <https://gitlab.example.com/api/v4/projects?pagination=keyset&per_page=50&order_by=id&sort=asc>; rel="first""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, None);
        assert_eq!(
            p.next_link.as_deref(),
            Some("https://gitlab.example.com/api/v4/projects?pagination=keyset&per_page=50&order_by=id&sort=asc&id_after=42")
        );
        assert!(p.first_link.is_some());
        assert!(p.last_link.is_none());
        assert!(p.has_next());
    }
}
