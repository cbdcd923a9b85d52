use std::borrow::Cow;

use url::form_urlencoded;

use crate::{PARAM_LIMIT, PARAM_SKIP};

/// Rewrite `uri` so its query string carries exactly one `skip` and one
/// `limit` parameter with the given values.
///
/// The query is parsed into an ordered pair list, the paging parameters are
/// upserted in place (first occurrence replaced, later duplicates dropped,
/// appended when absent) and the result re-encoded. Other parameters keep
/// their relative order; values pass through the standard form encoder.
pub fn with_paging_params(uri: &str, skip: u64, limit: u64) -> String {
    let (path, query) = match uri.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (uri, None),
    };

    let mut pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> = query
        .map(|q| form_urlencoded::parse(q.as_bytes()).collect())
        .unwrap_or_default();

    upsert(&mut pairs, PARAM_SKIP, skip);
    upsert(&mut pairs, PARAM_LIMIT, limit);

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
        .finish();

    format!("{path}?{encoded}")
}

fn upsert(pairs: &mut Vec<(Cow<'_, str>, Cow<'_, str>)>, name: &str, value: u64) {
    match pairs.iter().position(|(k, _)| k == name) {
        Some(first) => {
            pairs[first].1 = Cow::Owned(value.to_string());
            // Later duplicates would make the link ambiguous.
            let mut idx = 0;
            pairs.retain(|(k, _)| {
                let keep = idx <= first || k != name;
                idx += 1;
                keep
            });
        }
        None => pairs.push((Cow::Owned(name.to_owned()), Cow::Owned(value.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::with_paging_params;

    #[test]
    fn builds_query_from_scratch() {
        assert_eq!(with_paging_params("/items", 10, 5), "/items?skip=10&limit=5");
    }

    #[test]
    fn replaces_existing_values_in_place() {
        assert_eq!(
            with_paging_params("/items?skip=20&limit=10", 10, 10),
            "/items?skip=10&limit=10"
        );
    }

    #[test]
    fn appends_missing_params_after_existing_ones() {
        assert_eq!(
            with_paging_params("/items?q=rust", 0, 10),
            "/items?q=rust&skip=0&limit=10"
        );
    }

    #[test]
    fn preserves_foreign_params_and_order() {
        assert_eq!(
            with_paging_params("/items?a=1&skip=5&b=2&limit=3", 15, 3),
            "/items?a=1&skip=15&b=2&limit=3"
        );
    }

    #[test]
    fn collapses_duplicate_paging_params() {
        assert_eq!(
            with_paging_params("/items?skip=1&skip=2&limit=10", 7, 10),
            "/items?skip=7&limit=10"
        );
    }

    #[test]
    fn reencodes_percent_escaped_values() {
        // %20 comes back as '+', both decode to a space.
        assert_eq!(
            with_paging_params("/items?q=a%20b", 0, 10),
            "/items?q=a+b&skip=0&limit=10"
        );
    }
}
