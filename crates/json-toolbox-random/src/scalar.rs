use chrono::{Duration, Utc};
use rand::Rng;
use serde_json::Value;

/// Kind of scalar the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Number,
    Boolean,
    Date,
}

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing",
    "elit", "sed", "do", "eiusmod", "tempor", "incididunt", "labore",
    "magna", "aliqua", "veniam", "quis", "nostrud", "exercitation",
    "ullamco", "laboris", "nisi", "aliquip", "commodo", "consequat",
];

/// Generate one scalar of the requested kind.
///
/// # Examples
///
/// ```
/// use json_toolbox_random::{fake, ScalarKind};
///
/// assert!(fake(ScalarKind::String).is_string());
/// assert!(fake(ScalarKind::Number).is_i64());
/// assert!(fake(ScalarKind::Boolean).is_boolean());
/// assert!(fake(ScalarKind::Date).is_string());
/// ```
pub fn fake(kind: ScalarKind) -> Value {
    match kind {
        ScalarKind::String => Value::String(lorem_word().to_string()),
        ScalarKind::Number => Value::from(int(0, 100_000)),
        ScalarKind::Boolean => Value::Bool(rand::thread_rng().gen_bool(0.5)),
        ScalarKind::Date => Value::String(recent_date()),
    }
}

/// Random integer in `min..=max`.
pub fn int(min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rand::thread_rng().gen_range(lo..=hi)
}

fn lorem_word() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..LOREM_WORDS.len());
    LOREM_WORDS[idx]
}

/// RFC 3339 timestamp within the last 24 hours.
fn recent_date() -> String {
    let seconds_ago = rand::thread_rng().gen_range(0..86_400);
    (Utc::now() - Duration::seconds(seconds_ago)).to_rfc3339()
}
