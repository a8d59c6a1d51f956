//! Generic utilities used across modules.

/// Filter items by case-insensitive query matching on two string fields.
/// Returns all items when query is empty.
pub fn filter_by_query<'a, T, F>(items: &'a [T], query: &str, get_fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> (&str, &str),
{
    if query.is_empty() {
        return items.iter().collect();
    }
    let q = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            let (a, b) = get_fields(item);
            a.to_lowercase().contains(&q) || b.to_lowercase().contains(&q)
        })
        .collect()
}

/// Render an integer with thousands separators (128000 -> "128,000").
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_empty_query_returns_all() {
        let items = vec!["a", "b", "c"];
        let out = filter_by_query(&items, "", |s| (s, ""));
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn filter_match_first_field() {
        let items = vec!["hello", "world"];
        let out = filter_by_query(&items, "hel", |s| (s, ""));
        assert_eq!(out, vec![&"hello"]);
    }

    #[test]
    fn filter_match_second_field() {
        let items = vec![("a", "hello"), ("b", "world")];
        let out = filter_by_query(&items, "orld", |t| (t.0, t.1));
        assert_eq!(out, vec![&("b", "world")]);
    }

    #[test]
    fn filter_case_insensitive() {
        let items = vec!["Hello", "World"];
        let out = filter_by_query(&items, "world", |s| (s, ""));
        assert_eq!(out, vec![&"World"]);
    }

    #[test]
    fn filter_no_match_returns_empty() {
        let items = vec!["hello", "world"];
        let out = filter_by_query(&items, "xyz", |s| (s, ""));
        assert!(out.is_empty());
    }

    #[test]
    fn group_digits_small_numbers_unchanged() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
    }

    #[test]
    fn group_digits_inserts_separators() {
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(128_000), "128,000");
        assert_eq!(group_digits(1_047_576), "1,047,576");
    }
}
