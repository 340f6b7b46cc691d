//! JSON with comments

use json_comments::StripComments;
use serde::de::DeserializeOwned;

/// Parse JSON that may contain `//` and `/* */` comments.
pub fn from_str<T: DeserializeOwned>(input: &str) -> serde_json::Result<T> {
    serde_json::from_reader(StripComments::new(input.as_bytes()))
}
