use crate::client::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
use reqwest::header::HeaderMap;

/// Rate limit state reported by GitLab with each response.
///
/// GitLab API docs: https://docs.gitlab.com/ee/administration/settings/user_and_ip_rate_limits.html#response-headers
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rate {
    pub limit: u64,
    pub remaining: u64,
    /// UTC epoch seconds at which the quota resets
    pub reset: u64,
}

impl Rate {
    /// Returns `None` when the instance has rate limiting turned off and so
    /// sent none of the headers.
    pub(super) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let parse = |name: &str| -> Option<u64> {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok())
        };

        let limit = parse(HEADER_RATE_LIMIT);
        let remaining = parse(HEADER_RATE_REMAINING);
        let reset = parse(HEADER_RATE_RESET);

        if limit.is_none() && remaining.is_none() && reset.is_none() {
            return None;
        }

        Some(Rate {
            limit: limit.unwrap_or_default(),
            remaining: remaining.unwrap_or_default(),
            reset: reset.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Rate, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
    use reqwest::header::HeaderMap;

    #[test]
    fn rate() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "600".parse().unwrap());
        headers.insert(HEADER_RATE_REMAINING, "596".parse().unwrap());
        headers.insert(HEADER_RATE_RESET, "1372700873".parse().unwrap());

        let r = Rate::from_headers(&headers).unwrap();
        assert_eq!(r.limit, 600);
        assert_eq!(r.remaining, 596);
        assert_eq!(r.reset, 1372700873);
    }

    #[test]
    fn no_rate_headers() {
        assert_eq!(Rate::from_headers(&HeaderMap::new()), None);
    }
}
