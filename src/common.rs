use serde::{de, ser, Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(chrono::DateTime<chrono::Utc>);

impl DateTime {
    pub fn new(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        DateTime(datetime)
    }

    pub fn as_chrono(&self) -> &chrono::DateTime<chrono::Utc> {
        &self.0
    }
}

impl From<chrono::DateTime<chrono::Utc>> for DateTime {
    fn from(datetime: chrono::DateTime<chrono::Utc>) -> Self {
        DateTime(datetime)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339())
    }
}

impl FromStr for DateTime {
    type Err = chrono::ParseError;

    // The REST API speaks RFC 3339, but webhook payloads still carry the
    // older "2013-12-03 17:23:34 UTC" and "2013-12-03 17:23:34 +0100" forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use chrono::{NaiveDateTime, TimeZone, Utc};

        match chrono::DateTime::parse_from_rfc3339(s) {
            Ok(datetime) => return Ok(DateTime(datetime.with_timezone(&Utc))),
            Err(e) if !s.contains(' ') => return Err(e),
            Err(_) => {}
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S UTC") {
            return Ok(DateTime(Utc.from_utc_datetime(&naive)));
        }

        chrono::DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S %z")
            .map(|datetime| DateTime(datetime.with_timezone(&Utc)))
    }
}

impl Serialize for DateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.0.to_rfc3339())
        } else {
            serializer.serialize_i64(self.0.timestamp())
        }
    }
}

// DateTime's from GitLab can either be in unix epoch time or a string format
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct DateTimeVisitor;
        impl<'de> de::Visitor<'de> for DateTimeVisitor {
            type Value = DateTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "date time string or seconds since unix epoch")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse()
                    .map_err(|e| E::custom(format!("invalid date time '{}': {}", v, e)))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                use chrono::{offset::LocalResult, TimeZone};

                match chrono::Utc.timestamp_opt(v, 0) {
                    LocalResult::Single(datetime) => Ok(DateTime(datetime)),
                    _ => Err(E::custom(format!("'{}' is not a legal timestamp", v))),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let v = i64::try_from(v)
                    .map_err(|_| E::custom(format!("'{}' is not a legal timestamp", v)))?;
                self.visit_i64(v)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(DateTimeVisitor)
        } else {
            deserializer.deserialize_u64(DateTimeVisitor)
        }
    }
}

/// A calendar date without a time, sent by GitLab as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(chrono::NaiveDate);

impl Date {
    const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: chrono::NaiveDate) -> Self {
        Date(date)
    }

    pub fn as_chrono(&self) -> &chrono::NaiveDate {
        &self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for Date {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chrono::NaiveDate::parse_from_str(s, Self::FORMAT).map(Date)
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = <String>::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| de::Error::custom(format!("invalid date '{}': {}", s, e)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Private,
    Internal,
    Public,
}

/// Permission level of a member within a group or project.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/members.html#roles
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(from = "u64", into = "u64")]
pub enum AccessLevel {
    NoPermissions,
    MinimalAccess,
    Guest,
    Reporter,
    Developer,
    Maintainer,
    Owner,
    Admin,
    Other(u64),
}

impl From<u64> for AccessLevel {
    fn from(level: u64) -> Self {
        match level {
            0 => AccessLevel::NoPermissions,
            5 => AccessLevel::MinimalAccess,
            10 => AccessLevel::Guest,
            20 => AccessLevel::Reporter,
            30 => AccessLevel::Developer,
            40 => AccessLevel::Maintainer,
            50 => AccessLevel::Owner,
            60 => AccessLevel::Admin,
            other => AccessLevel::Other(other),
        }
    }
}

impl From<AccessLevel> for u64 {
    fn from(level: AccessLevel) -> Self {
        match level {
            AccessLevel::NoPermissions => 0,
            AccessLevel::MinimalAccess => 5,
            AccessLevel::Guest => 10,
            AccessLevel::Reporter => 20,
            AccessLevel::Developer => 30,
            AccessLevel::Maintainer => 40,
            AccessLevel::Owner => 50,
            AccessLevel::Admin => 60,
            AccessLevel::Other(other) => other,
        }
    }
}

/// A list of label names.
///
/// Sent as a single comma separated value, read back from either that form
/// or a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Labels(pub Vec<String>);

impl<S: Into<String>> From<Vec<S>> for Labels {
    fn from(labels: Vec<S>) -> Self {
        Labels(labels.into_iter().map(Into::into).collect())
    }
}

impl Labels {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Serialize for Labels {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.0.join(","))
    }
}

impl<'de> Deserialize<'de> for Labels {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            List(Vec<String>),
            Joined(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::List(labels) => Labels(labels),
            Repr::Joined(joined) if joined.is_empty() => Labels::default(),
            Repr::Joined(joined) => Labels(joined.split(',').map(str::to_owned).collect()),
        })
    }
}

/// The user summary embedded in merge requests, pipelines, notes, etc.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BasicUser {
    pub id: u64,
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Milestone {
    pub id: u64,
    pub iid: u64,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub group_id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub due_date: Option<Date>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub expired: Option<bool>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
}

/// Time tracking stats of an issue or merge request.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/merge_requests.html#get-time-tracking-stats
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TimeStats {
    #[serde(default)]
    pub human_time_estimate: Option<String>,
    #[serde(default)]
    pub human_total_time_spent: Option<String>,
    #[serde(default)]
    pub time_estimate: i64,
    #[serde(default)]
    pub total_time_spent: i64,
}

#[cfg(test)]
mod test {
    use super::{AccessLevel, Date, DateTime, Labels};

    #[test]
    fn datetime_formats() {
        let rfc: DateTime = serde_json::from_str(r#""2021-03-01T10:15:30.000Z""#).unwrap();
        let utc: DateTime = serde_json::from_str(r#""2021-03-01 10:15:30 UTC""#).unwrap();
        let offset: DateTime = serde_json::from_str(r#""2021-03-01 11:15:30 +0100""#).unwrap();
        let epoch: DateTime = serde_json::from_str("1614593730").unwrap();

        assert_eq!(rfc, utc);
        assert_eq!(rfc, offset);
        assert_eq!(rfc, epoch);

        assert!(serde_json::from_str::<DateTime>(r#""yesterday""#).is_err());
    }

    #[test]
    fn epoch_beyond_i64_is_rejected() {
        let err = serde_json::from_str::<DateTime>("18446744073709551615").unwrap_err();
        assert!(err.to_string().contains("not a legal timestamp"), "{}", err);
    }

    #[test]
    fn date() {
        let date: Date = serde_json::from_str(r#""2022-06-30""#).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), r#""2022-06-30""#);
    }

    #[test]
    fn access_levels() {
        let level: AccessLevel = serde_json::from_str("40").unwrap();
        assert_eq!(level, AccessLevel::Maintainer);
        assert_eq!(serde_json::to_string(&AccessLevel::Developer).unwrap(), "30");
        assert_eq!(
            serde_json::from_str::<AccessLevel>("15").unwrap(),
            AccessLevel::Other(15)
        );
    }

    #[test]
    fn labels() {
        let labels: Labels = serde_json::from_str(r#"["bug", "needs review"]"#).unwrap();
        assert_eq!(labels.iter().collect::<Vec<_>>(), vec!["bug", "needs review"]);
        assert_eq!(
            serde_json::to_string(&labels).unwrap(),
            r#""bug,needs review""#
        );

        let labels: Labels = serde_json::from_str(r#""a,b""#).unwrap();
        assert_eq!(labels, Labels::from(vec!["a", "b"]));
    }
}
