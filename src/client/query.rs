//! Query string encoding for options structs.
//!
//! GitLab expects list parameters as repeated `key[]=value` pairs and hash
//! parameters as `key[field]=value`, neither of which `serde_urlencoded`
//! can produce, so options are first turned into a `serde_json::Value` and
//! flattened from there.

use crate::client::Result;
use serde::Serialize;
use serde_json::Value;

pub(crate) fn encode<O: Serialize + ?Sized>(options: &O) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    match serde_json::to_value(options)? {
        Value::Null => {}
        Value::Object(fields) => {
            for (key, value) in fields {
                push(&mut pairs, key, value);
            }
        }
        other => {
            return Err(format!("query options must be a struct or a map, got {}", other).into())
        }
    }

    Ok(pairs)
}

fn push(pairs: &mut Vec<(String, String)>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s)),
        Value::Array(items) => {
            let key = format!("{}[]", key);
            for item in items {
                push(pairs, key.clone(), item);
            }
        }
        Value::Object(fields) => {
            for (field, value) in fields {
                push(pairs, format!("{}[{}]", key, field), value);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::encode;
    use crate::{client::ListOptions, Labels};
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Default, Serialize)]
    struct Options {
        #[serde(flatten)]
        list_options: ListOptions,
        #[serde(skip_serializing_if = "Option::is_none")]
        archived: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        iids: Option<Vec<u64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        labels: Option<Labels>,
        #[serde(skip_serializing_if = "Option::is_none")]
        custom_attributes: Option<BTreeMap<String, String>>,
    }

    #[test]
    fn absent_options_are_omitted() {
        assert!(encode(&Options::default()).unwrap().is_empty());
        assert!(encode(&None::<Options>).unwrap().is_empty());
    }

    #[test]
    fn explicit_false_is_kept() {
        let options = Options {
            archived: Some(false),
            ..Default::default()
        };
        assert_eq!(
            encode(&options).unwrap(),
            vec![("archived".to_owned(), "false".to_owned())]
        );
    }

    #[test]
    fn populated_options() {
        let mut attributes = BTreeMap::new();
        attributes.insert("team".to_owned(), "infra".to_owned());

        let options = Options {
            list_options: ListOptions::page(2, 50),
            archived: Some(true),
            search: Some("api client".to_owned()),
            iids: Some(vec![1, 7]),
            labels: Some(Labels::from(vec!["bug", "ui"])),
            custom_attributes: Some(attributes),
        };

        let mut pairs = encode(&options).unwrap();
        pairs.sort();

        let expected: Vec<(String, String)> = vec![
            ("archived", "true"),
            ("custom_attributes[team]", "infra"),
            ("iids[]", "1"),
            ("iids[]", "7"),
            ("labels", "bug,ui"),
            ("page", "2"),
            ("per_page", "50"),
            ("search", "api client"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();

        assert_eq!(pairs, expected);
    }
}
