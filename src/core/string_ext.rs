use crate::core::convert::ConvertTo;
use crate::core::nullable::lift;
use crate::utils::error::{ExtError, Result};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Whether [`StringExtensions::split_by`] keeps empty pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitOptions {
    #[default]
    KeepEmptyEntries,
    RemoveEmptyEntries,
}

/// Text helpers. Indices count `char`s, not bytes.
pub trait StringExtensions {
    fn is_null_or_empty(&self) -> bool;

    fn is_null_or_white_space(&self) -> bool;

    /// Copy of the string with the char at `index` upper-cased.
    ///
    /// The char count never changes: a char whose mapping expands
    /// (`ß` to `SS`) is left as it is, so later indices stay valid.
    fn to_upper_at_index(&self, index: usize) -> Result<String>;

    /// Copy of the string with the char at `index` lower-cased. Expanding
    /// mappings are skipped, as for [`StringExtensions::to_upper_at_index`].
    fn to_lower_at_index(&self, index: usize) -> Result<String>;

    /// Parses the text as an `i32`, ignoring surrounding ASCII whitespace.
    ///
    /// On failure returns `0`, or a [`ExtError::FormatError`] when
    /// `throw_on_failure` is set.
    fn to_int(&self, throw_on_failure: bool) -> Result<i32>;

    /// Text between the first `start` and the first `end` after it, or `""`
    /// when either marker is missing.
    fn get_between(&self, start: &str, end: &str) -> &str;

    /// Text after `index_start` and before `index_end`, both exclusive.
    fn get_between_indices(&self, index_start: usize, index_end: usize) -> Result<&str>;

    fn replace_first(&self, search: &str, replace: &str) -> String;

    fn replace_last(&self, search: &str, replace: &str) -> String;

    fn remove_first(&self, to_remove: &str) -> String;

    fn remove_last(&self, to_remove: &str) -> String;

    /// `true` when the text holds at least one decimal digit (`0`-`9`).
    fn has_number(&self) -> bool;

    /// Strips accents and other combining marks: "Crème brûlée" becomes "Creme brulee".
    fn remove_diacritics(&self) -> String;

    /// Splits on a literal separator. An empty separator splits on whitespace.
    fn split_by(&self, separator: &str, options: SplitOptions) -> Vec<&str>;
}

impl StringExtensions for str {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }

    fn is_null_or_white_space(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn to_upper_at_index(&self, index: usize) -> Result<String> {
        map_char_at(self, index, char::to_uppercase)
    }

    fn to_lower_at_index(&self, index: usize) -> Result<String> {
        map_char_at(self, index, char::to_lowercase)
    }

    fn to_int(&self, throw_on_failure: bool) -> Result<i32> {
        let parsed = self
            .trim_matches(|c: char| c.is_ascii_whitespace())
            .parse::<i64>()
            .ok()
            .and_then(|wide| wide.convert_to::<i32>().ok());

        match parsed {
            Some(number) => Ok(number),
            None if throw_on_failure => Err(ExtError::FormatError {
                value: self.to_string(),
                target: "int",
            }),
            None => {
                tracing::debug!("'{}' is not an int, falling back to 0", self);
                Ok(0)
            }
        }
    }

    fn get_between(&self, start: &str, end: &str) -> &str {
        let Some(position) = self.find(start) else {
            return "";
        };
        let from = position + start.len();

        match self[from..].find(end) {
            Some(length) => &self[from..from + length],
            None => "",
        }
    }

    fn get_between_indices(&self, index_start: usize, index_end: usize) -> Result<&str> {
        let length = self.chars().count();
        if index_end > length {
            return Err(ExtError::IndexOutOfRange {
                index: index_end,
                length,
            });
        }
        if index_start >= index_end {
            return Err(ExtError::IndexOutOfRange {
                index: index_start,
                length,
            });
        }

        // both offsets exist: index_start + 1 <= index_end <= length
        let from = byte_offset(self, index_start + 1).unwrap_or(self.len());
        let to = byte_offset(self, index_end).unwrap_or(self.len());
        Ok(&self[from..to])
    }

    fn replace_first(&self, search: &str, replace: &str) -> String {
        self.replacen(search, replace, 1)
    }

    fn replace_last(&self, search: &str, replace: &str) -> String {
        match self.rfind(search) {
            Some(position) => splice(self, position, search.len(), replace),
            None => self.to_string(),
        }
    }

    fn remove_first(&self, to_remove: &str) -> String {
        self.replace_first(to_remove, "")
    }

    fn remove_last(&self, to_remove: &str) -> String {
        self.replace_last(to_remove, "")
    }

    fn has_number(&self) -> bool {
        !self.is_null_or_white_space() && self.chars().any(|c| c.is_ascii_digit())
    }

    fn remove_diacritics(&self) -> String {
        self.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect()
    }

    fn split_by(&self, separator: &str, options: SplitOptions) -> Vec<&str> {
        let pieces: Vec<&str> = if separator.is_empty() {
            self.split(char::is_whitespace).collect()
        } else {
            self.split(separator).collect()
        };

        match options {
            SplitOptions::KeepEmptyEntries => pieces,
            SplitOptions::RemoveEmptyEntries => {
                pieces.into_iter().filter(|piece| !piece.is_empty()).collect()
            }
        }
    }
}

/// Helpers for strings that may be absent.
pub trait NullableStringExtensions {
    /// `true` for `None` or `Some("")`.
    fn is_null_or_empty(&self) -> bool;

    /// `true` for `None` or a whitespace-only string.
    fn is_null_or_white_space(&self) -> bool;

    /// `false` for `None`.
    fn has_number(&self) -> bool;

    /// Trims surrounding whitespace.
    ///
    /// With `ignore_if_null` set, `None` passes through as `Ok(None)`;
    /// otherwise it is a [`ExtError::NullValueError`].
    fn trim_or_ignore(&self, ignore_if_null: bool) -> Result<Option<String>>;
}

impl<S: AsRef<str>> NullableStringExtensions for Option<S> {
    fn is_null_or_empty(&self) -> bool {
        self.as_ref().map_or(true, |value| value.as_ref().is_null_or_empty())
    }

    fn is_null_or_white_space(&self) -> bool {
        self.as_ref()
            .map_or(true, |value| value.as_ref().is_null_or_white_space())
    }

    fn has_number(&self) -> bool {
        lift(self.as_ref(), |value| value.as_ref().has_number())
    }

    fn trim_or_ignore(&self, ignore_if_null: bool) -> Result<Option<String>> {
        match self {
            Some(value) => Ok(Some(value.as_ref().trim().to_string())),
            None if ignore_if_null => Ok(None),
            None => Err(ExtError::NullValueError { operation: "trim" }),
        }
    }
}

fn map_char_at<I>(value: &str, index: usize, convert: impl FnOnce(char) -> I) -> Result<String>
where
    I: Iterator<Item = char>,
{
    let (position, ch) = value
        .char_indices()
        .nth(index)
        .ok_or_else(|| ExtError::IndexOutOfRange {
            index,
            length: value.chars().count(),
        })?;

    let mut mapped = convert(ch);
    let replacement = match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => ch,
    };

    let mut converted = String::with_capacity(value.len() + 4);
    converted.push_str(&value[..position]);
    converted.push(replacement);
    converted.push_str(&value[position + ch.len_utf8()..]);
    Ok(converted)
}

/// Byte offset of the `char_index`-th char; `char count` maps to `len()`.
fn byte_offset(value: &str, char_index: usize) -> Option<usize> {
    value
        .char_indices()
        .map(|(position, _)| position)
        .chain(std::iter::once(value.len()))
        .nth(char_index)
}

fn splice(value: &str, position: usize, length: usize, replacement: &str) -> String {
    let mut result = String::with_capacity(value.len() - length + replacement.len());
    result.push_str(&value[..position]);
    result.push_str(replacement);
    result.push_str(&value[position + length..]);
    result
}
