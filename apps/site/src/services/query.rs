use std::collections::BTreeMap;

/// Parses a `location.search` string into name/value pairs.
///
/// Follows `URLSearchParams`: a leading `?` is ignored, `+` is a space,
/// percent escapes are decoded, and a repeated name keeps its last value.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    for pair in search.trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(decode_component(name), decode_component(value));
    }

    params
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utm_tags() {
        let params = parse_query("?utm_source=newsletter&utm_campaign=spring%20launch");
        assert_eq!(params.len(), 2);
        assert_eq!(params["utm_source"], "newsletter");
        assert_eq!(params["utm_campaign"], "spring launch");
    }

    #[test]
    fn empty_search_yields_no_params() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn plus_decodes_to_space_and_last_duplicate_wins() {
        let params = parse_query("q=a+b&ref=one&ref=two&flag");
        assert_eq!(params["q"], "a b");
        assert_eq!(params["ref"], "two");
        assert_eq!(params["flag"], "");
    }
}
