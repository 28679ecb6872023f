pub(crate) mod snapshot {
    use serde::{de, Serialize};

    pub const SERIALIZATION_VERSION_V1: u8 = 1u8;

    pub(crate) fn serialize<T>(value: &T) -> Result<Vec<u8>, String>
    where
        T: ?Sized + Serialize,
    {
        let data = serde_json::to_vec_pretty(value).map_err(|err| err.to_string())?;

        let mut result = vec![SERIALIZATION_VERSION_V1];
        result.extend(data);

        Ok(result)
    }

    pub(crate) fn deserialize<'a, T>(bytes: &'a [u8]) -> Result<T, String>
    where
        T: de::Deserialize<'a>,
    {
        if bytes.is_empty() {
            return Err("Empty snapshot".to_string());
        }

        let (version, data) = bytes.split_at(1);

        match version[0] {
            SERIALIZATION_VERSION_V1 => {
                let value: T = serde_json::from_slice(data).map_err(|err| err.to_string())?;

                Ok(value)
            }
            _ => Err("Unsupported serialization version".to_string()),
        }
    }
}

pub(crate) mod query {
    use regex::Regex;
    use std::sync::OnceLock;

    static TOKEN_PATTERN: OnceLock<Regex> = OnceLock::new();

    fn token_pattern() -> &'static Regex {
        TOKEN_PATTERN.get_or_init(|| Regex::new(r#""([^"]+)"|(\S+)"#).expect("token pattern"))
    }

    #[derive(Clone, Debug)]
    pub struct Query {
        pub terms: Vec<String>,
        pub field_filters: Vec<(String, String)>,
    }

    impl Query {
        pub fn new(query: &str) -> Self {
            let mut terms = Vec::new();
            let mut field_filters = Vec::new();

            for capture in token_pattern().captures_iter(query) {
                // Quoted phrases are always plain search terms
                if let Some(phrase) = capture.get(1) {
                    terms.push(phrase.as_str().to_string());
                    continue;
                }

                let token = capture.get(2).map(|t| t.as_str()).unwrap_or_default();

                match token.split_once(':') {
                    Some((field, value)) if !field.is_empty() && !value.is_empty() => {
                        field_filters.push((field.to_lowercase(), value.to_string()));
                    }
                    _ => terms.push(token.to_string()),
                }
            }

            Self {
                terms,
                field_filters,
            }
        }
    }

    pub fn text_matches(text: &str, term: &str) -> bool {
        text.to_lowercase().contains(&term.to_lowercase())
    }

    pub fn text_exact_matches(text: &str, term: &str) -> bool {
        text.eq_ignore_ascii_case(term)
    }
}

#[cfg(test)]
mod tests {
    use super::{query, snapshot};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_snapshot_round_trip() {
        let payload = Payload {
            name: "feed".to_string(),
            count: 3,
        };

        let bytes = snapshot::serialize(&payload).unwrap();

        assert_eq!(bytes[0], snapshot::SERIALIZATION_VERSION_V1);

        let restored: Payload = snapshot::deserialize(&bytes).unwrap();
        assert_eq!(restored, payload);
    }

    #[test]
    fn test_snapshot_rejects_unknown_version() {
        let mut bytes = snapshot::serialize(&Payload {
            name: "feed".to_string(),
            count: 0,
        })
        .unwrap();
        bytes[0] = 99;

        let result: Result<Payload, String> = snapshot::deserialize(&bytes);
        assert_eq!(result, Err("Unsupported serialization version".to_string()));
    }

    #[test]
    fn test_snapshot_rejects_empty_input() {
        let result: Result<Payload, String> = snapshot::deserialize(&[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_terms_and_filters() {
        let q = query::Query::new("sunset tag:photography created-by:3");

        assert_eq!(q.terms, vec!["sunset".to_string()]);
        assert_eq!(
            q.field_filters,
            vec![
                ("tag".to_string(), "photography".to_string()),
                ("created-by".to_string(), "3".to_string())
            ]
        );
    }

    #[test]
    fn test_query_quoted_phrase_is_a_term() {
        let q = query::Query::new(r#""digital art" nature"#);

        assert_eq!(
            q.terms,
            vec!["digital art".to_string(), "nature".to_string()]
        );
        assert!(q.field_filters.is_empty());
    }

    #[test]
    fn test_query_empty_input() {
        let q = query::Query::new("   ");

        assert!(q.terms.is_empty());
        assert!(q.field_filters.is_empty());
    }

    #[test]
    fn test_text_matches_is_case_insensitive_substring() {
        assert!(query::text_matches("Working on a new series", "SERIES"));
        assert!(!query::text_matches("Working on a new series", "sunset"));

        assert!(query::text_exact_matches("Art", "art"));
        assert!(!query::text_exact_matches("artwork", "art"));
    }
}
