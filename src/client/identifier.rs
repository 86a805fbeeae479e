use crate::client::{Error, Result};
use std::{borrow::Cow, fmt};

/// Addresses a project, group or user either by its numeric ID or by its
/// path ("namespace/project").
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/rest/index.html#namespaced-path-encoding
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u64),
    Path(String),
}

impl Identifier {
    /// The identifier rendered as a single URL path segment.
    ///
    /// Paths are percent-escaped once, so `group/sub-group` becomes
    /// `group%2Fsub-group`. GitLab also requires `.` to be escaped since a
    /// trailing extension is otherwise taken as the response format.
    pub fn to_path_segment(&self) -> Result<Cow<'_, str>> {
        match self {
            Identifier::Numeric(id) => Ok(Cow::Owned(id.to_string())),
            Identifier::Path(path) => escape(path).map(Cow::Owned),
        }
    }
}

/// Percent-escape a free-form value (branch names, LDAP CNs, file paths)
/// for use as one path segment.
///
/// `%2E%2E` is still a dot-segment to URL resolution, so empty, `.` and `..`
/// values are rejected outright.
pub(crate) fn escape(segment: &str) -> Result<String> {
    match segment {
        "" | "." | ".." => Err(Error::InvalidIdentifier(segment.to_owned())),
        _ => Ok(urlencoding::encode(segment).replace('.', "%2E")),
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(id) => write!(f, "{}", id),
            Identifier::Path(path) => f.write_str(path),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Numeric(id)
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Numeric(id.into())
    }
}

impl From<&str> for Identifier {
    fn from(path: &str) -> Self {
        Identifier::Path(path.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(path: String) -> Self {
        Identifier::Path(path)
    }
}

impl From<&String> for Identifier {
    fn from(path: &String) -> Self {
        Identifier::Path(path.clone())
    }
}

impl From<&Identifier> for Identifier {
    fn from(id: &Identifier) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod test {
    use super::{escape, Identifier};
    use crate::client::Error;

    #[test]
    fn numeric() {
        let id = Identifier::from(42u64);
        assert_eq!(id.to_path_segment().unwrap(), "42");
    }

    #[test]
    fn path_is_escaped_once() {
        let id = Identifier::from("group/sub-group");
        assert_eq!(id.to_path_segment().unwrap(), "group%2Fsub-group");

        let id = Identifier::from("my-group/my.project");
        assert_eq!(id.to_path_segment().unwrap(), "my-group%2Fmy%2Eproject");

        // an already escaped path is taken literally
        let id = Identifier::from("group%2Fproject");
        assert_eq!(id.to_path_segment().unwrap(), "group%252Fproject");
    }

    #[test]
    fn empty_path_is_invalid() {
        let id = Identifier::from("");
        assert!(matches!(
            id.to_path_segment(),
            Err(Error::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn free_form_segments() {
        assert_eq!(escape("feature/login page").unwrap(), "feature%2Flogin%20page");
        assert_eq!(
            escape("cn=admins,ou=groups").unwrap(),
            "cn%3Dadmins%2Cou%3Dgroups"
        );
        assert_eq!(escape("...").unwrap(), "%2E%2E%2E");
    }

    #[test]
    fn dot_segments_are_invalid() {
        for path in &[".", ".."] {
            let id = Identifier::from(*path);
            assert!(matches!(
                id.to_path_segment(),
                Err(Error::InvalidIdentifier(ref p)) if p == path
            ));
            assert!(matches!(escape(path), Err(Error::InvalidIdentifier(_))));
        }
    }
}
