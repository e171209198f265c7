//! Conversion between Japanese prefecture names and JIS X 0401 codes.
//!
//! ```
//! assert_eq!(jp_prefectures::code_to_name(13), Ok("東京都"));
//! assert_eq!(jp_prefectures::code_to_name("01"), Ok("北海道"));
//! assert_eq!(jp_prefectures::name_to_code("東京都"), Ok("13"));
//! assert_eq!(
//!     jp_prefectures::codes_to_names([12, 34]),
//!     Ok(vec!["千葉県", "広島県"])
//! );
//! ```
//!
//! The free functions use the embedded tables via `PrefectureTable::global()`.
//! Hold a `&PrefectureTable` to pass the tables around explicitly.

pub mod lookup;
pub mod table;

use serde_json::Value;

pub use lookup::{CodeKey, LookupError};
pub use table::{default_code_json, default_name_json, PrefectureTable, TableError};

pub fn code_to_name<'a>(code: impl Into<CodeKey<'a>>) -> Result<&'static str, LookupError> {
    PrefectureTable::global().code_to_name(code)
}

pub fn codes_to_names<'a, I, K>(codes: I) -> Result<Vec<&'static str>, LookupError>
where
    I: IntoIterator<Item = K>,
    K: Into<CodeKey<'a>>,
{
    PrefectureTable::global().codes_to_names(codes)
}

pub fn name_to_code(name: &str) -> Result<&'static str, LookupError> {
    PrefectureTable::global().name_to_code(name)
}

pub fn names_to_codes<I, S>(names: I) -> Result<Vec<&'static str>, LookupError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PrefectureTable::global().names_to_codes(names)
}

/// Dynamic `code_to_name`; see `PrefectureTable::code_to_name_value`.
pub fn code_to_name_value(input: &Value) -> Result<Value, LookupError> {
    PrefectureTable::global().code_to_name_value(input)
}

/// Dynamic `name_to_code`; see `PrefectureTable::name_to_code_value`.
pub fn name_to_code_value(input: &Value) -> Result<Value, LookupError> {
    PrefectureTable::global().name_to_code_value(input)
}
