//! Exact-match lookups between JIS X 0401 codes and prefecture names.
//!
//! The typed API takes `CodeKey` / `&str` and rejects other input types at
//! compile time. `value` provides the same operations over `serde_json::Value`
//! for callers holding dynamically typed input.

mod value;

use std::borrow::Cow;

use crate::table::PrefectureTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no prefecture for key: {0:?}")]
    Miss(String),
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),
}

/// A prefecture code as accepted by `code_to_name`.
///
/// Strings are looked up verbatim; integers are zero-padded to two digits
/// first. There is no conversion from `bool`, floats or `char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKey<'a> {
    Str(&'a str),
    Int(i64),
}

impl<'a> CodeKey<'a> {
    /// The string actually looked up. No range check: `-1` and `100` stay
    /// as-is and simply miss.
    pub fn normalized(&self) -> Cow<'a, str> {
        match *self {
            CodeKey::Str(s) => Cow::Borrowed(s),
            CodeKey::Int(n) => Cow::Owned(format!("{n:02}")),
        }
    }
}

impl<'a> From<&'a str> for CodeKey<'a> {
    fn from(s: &'a str) -> Self {
        CodeKey::Str(s)
    }
}

impl<'a> From<&'a String> for CodeKey<'a> {
    fn from(s: &'a String) -> Self {
        CodeKey::Str(s.as_str())
    }
}

macro_rules! code_key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CodeKey<'_> {
                fn from(n: $t) -> Self {
                    CodeKey::Int(i64::from(n))
                }
            }
        )*
    };
}

code_key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl PrefectureTable {
    /// Prefecture name for a code, e.g. `"13"` or `13` → `"東京都"`.
    pub fn code_to_name<'a>(&self, code: impl Into<CodeKey<'a>>) -> Result<&str, LookupError> {
        let key = code.into().normalized();
        self.get_name(&key)
            .ok_or_else(|| LookupError::Miss(key.into_owned()))
    }

    /// Elementwise `code_to_name`, stopping at the first miss.
    pub fn codes_to_names<'a, I, K>(&self, codes: I) -> Result<Vec<&str>, LookupError>
    where
        I: IntoIterator<Item = K>,
        K: Into<CodeKey<'a>>,
    {
        codes.into_iter().map(|c| self.code_to_name(c)).collect()
    }

    /// Two-digit code for a prefecture name, e.g. `"東京都"` → `"13"`.
    ///
    /// The name must match exactly; no trimming or script conversion.
    pub fn name_to_code(&self, name: &str) -> Result<&str, LookupError> {
        self.get_code(name)
            .ok_or_else(|| LookupError::Miss(name.to_string()))
    }

    /// Elementwise `name_to_code`, stopping at the first miss.
    pub fn names_to_codes<I, S>(&self, names: I) -> Result<Vec<&str>, LookupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|n| self.name_to_code(n.as_ref()))
            .collect()
    }
}
