use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Default)]
pub struct QueryParams {
    map: HashMap<String, String>,
}

impl<'de> Deserialize<'de> for QueryParams {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, String>::deserialize(deserializer)?;
        Ok(QueryParams { map })
    }
}

impl QueryParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|v| v.as_str())
    }

    /// The requested page, 1-based. Anything that does not start with a
    /// positive integer means the first page.
    pub fn page(&self) -> i64 {
        self.get("page").and_then(leading_int).filter(|&p| p >= 1).unwrap_or(1)
    }

    /// `order=desc` sorts descending; every other value is ascending.
    pub fn descending(&self) -> bool {
        self.get("order") == Some("desc")
    }

    /// A parameter that is present and non-empty.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

/// Parse the integer prefix of `s`, so `"2abc"` gives 2 and `"abc"` gives None.
fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
