use super::{Event, EventError, EventType};
use log::{debug, warn};
use reqwest::header::HeaderMap;

/// The GitLab header key used to pass the event type
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhooks.html#delivery-headers
pub const EVENT_TYPE_HEADER: &str = "x-gitlab-event";

/// The GitLab header key used to pass the secret token configured on the hook
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhooks.html#validate-payloads-by-using-a-secret-token
pub const TOKEN_HEADER: &str = "x-gitlab-token";

/// The GitLab header key used to pass the unique ID for the webhook event
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhooks.html#delivery-headers
pub const EVENT_UUID_HEADER: &str = "x-gitlab-event-uuid";

/// The GitLab header key used to pass the sending instance's url
///
/// GitLab API docs: https://docs.gitlab.com/ee/user/project/integrations/webhooks.html#delivery-headers
pub const INSTANCE_HEADER: &str = "x-gitlab-instance";

/// A webhook delivery as received over HTTP
#[derive(Clone, Debug)]
pub struct Webhook {
    pub event_type: EventType,
    pub token: Option<String>,
    pub event_uuid: Option<String>,
    pub instance: Option<String>,
    pub body: Vec<u8>,
}

impl Webhook {
    pub fn from_headers(headers: &HeaderMap, body: Vec<u8>) -> Result<Self, EventError> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(ToOwned::to_owned)
        };

        let event_type = header(EVENT_TYPE_HEADER)
            .ok_or_else(|| EventError::UnexpectedEventType(String::new()))?
            .parse::<EventType>()?;

        Ok(Webhook {
            event_type,
            token: header(TOKEN_HEADER),
            event_uuid: header(EVENT_UUID_HEADER),
            instance: header(INSTANCE_HEADER),
            body,
        })
    }

    pub fn check_token(&self, secret: Option<&str>) -> bool {
        match (secret, &self.token) {
            (Some(secret), Some(token)) => {
                let matches = secret == token.as_str();
                if !matches {
                    debug!("token mismatch for event {:?}", self.event_uuid);
                }
                matches
            }
            // A secret is configured but the delivery didn't carry one
            (Some(_), None) => {
                debug!("no token sent with event {:?}", self.event_uuid);
                false
            }
            (None, _) => {
                warn!("No secret specified; token ignored");
                true
            }
        }
    }

    pub fn to_event(&self) -> Result<Event, EventError> {
        Event::from_json(&self.event_type, &self.body)
    }
}

#[cfg(test)]
mod test {
    use super::{Webhook, EVENT_TYPE_HEADER, EVENT_UUID_HEADER, TOKEN_HEADER};
    use crate::{Event, EventError, EventType};
    use reqwest::header::{HeaderMap, HeaderValue};

    fn headers(event_type: &'static str, token: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(EVENT_TYPE_HEADER, HeaderValue::from_static(event_type));
        headers.insert(
            EVENT_UUID_HEADER,
            HeaderValue::from_static("d2e5ddd6-3a8a-4bb1-bd6e-93d5b1f1d3b6"),
        );
        if let Some(token) = token {
            headers.insert(TOKEN_HEADER, HeaderValue::from_static(token));
        }
        headers
    }

    #[test]
    fn from_headers() {
        const JSON: &[u8] = include_bytes!("../test-input/push-event.json");

        let webhook = Webhook::from_headers(&headers("Push Hook", Some("s3cret")), JSON.to_vec())
            .unwrap();
        assert_eq!(webhook.event_type, EventType::Push);
        assert_eq!(webhook.token.as_deref(), Some("s3cret"));
        assert!(webhook.instance.is_none());
        assert!(matches!(webhook.to_event().unwrap(), Event::Push(_)));
    }

    #[test]
    fn unknown_event_header() {
        let err = Webhook::from_headers(&headers("Emoji Hook", None), Vec::new()).unwrap_err();
        assert!(matches!(err, EventError::UnexpectedEventType(ref t) if t == "Emoji Hook"));
    }

    #[test]
    fn check_token() {
        let webhook = Webhook::from_headers(&headers("Push Hook", Some("s3cret")), Vec::new())
            .unwrap();
        assert!(webhook.check_token(Some("s3cret")));
        assert!(!webhook.check_token(Some("other")));
        assert!(webhook.check_token(None));

        let unsigned = Webhook::from_headers(&headers("Push Hook", None), Vec::new()).unwrap();
        assert!(!unsigned.check_token(Some("s3cret")));
        assert!(unsigned.check_token(None));
    }
}
