/*!
 * Inline String
 * Bounded, mostly stack-allocated names for table keys
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Table key for process names and filenames
///
/// Names live in fixed-size buffers, so almost all of them fit smartstring's
/// inline representation. [`InlineString::bounded`] applies the buffer rule:
/// a buffer of `n` bytes keeps at most `n - 1` bytes of text.
///
/// # Examples
///
/// ```
/// use simpleos_kernel::core::data_structures::InlineString;
///
/// let name = InlineString::bounded("a-rather-long-process-name", 8);
/// assert_eq!(name.as_str(), "a-rathe");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineString(SmartString);

impl InlineString {
    /// Copy `s` into a buffer of `buffer_len` bytes, truncating at a char
    /// boundary so that at most `buffer_len - 1` bytes remain
    pub fn bounded(s: &str, buffer_len: usize) -> Self {
        let max = buffer_len.saturating_sub(1);
        let mut end = s.len().min(max);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        Self(SmartString::from(&s[..end]))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for InlineString {
    fn from(s: &str) -> Self {
        Self(SmartString::from(s))
    }
}

impl fmt::Display for InlineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl PartialEq<str> for InlineString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InlineString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
