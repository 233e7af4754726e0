use std::{collections::BTreeMap, ops::Deref, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Error, Result};

/// Parses a delimited pair-string such as `annotation1:value1,annotation2:value2`
/// into a mapping ordered by first occurrence.
///
/// A value may be wrapped in double quotes to carry literal commas; the quote
/// characters are kept in the stored value. Only the first colon in a segment
/// separates key from value, so values containing further colons (IAM role
/// ARNs and the like) pass through intact. A later duplicate key overwrites
/// the earlier value.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] when a segment does not contain a colon.
pub fn parse(input: &str) -> Result<IndexMap<String, String>> {
    let mut pairs = IndexMap::new();

    if input.is_empty() {
        return Ok(pairs);
    }

    for segment in split_quoted(input) {
        let (key, value) = segment
            .split_once(':')
            .ok_or_else(|| Error::InvalidFormat(segment.into()))?;

        pairs.insert(key.into(), value.into());
    }

    Ok(pairs)
}

/// Splits on commas that are outside quoted regions. A comma is inside a
/// quoted region when the number of double quotes seen before it is odd;
/// a doubled quote counts twice and does not close the region.
fn split_quoted(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut quotes: u32 = 0;

    for (index, character) in input.char_indices() {
        match character {
            '"' => quotes += 1,
            ',' if quotes % 2 == 0 => {
                segments.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    segments.push(&input[start..]);
    segments
}

/*
 * ============================================================================
 * Pairs
 * ============================================================================
 */
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Pairs(IndexMap<String, String>);

impl Pairs {
    #[must_use]
    pub fn new(value: IndexMap<String, String>) -> Self {
        Self(value)
    }
}

impl Deref for Pairs {
    type Target = IndexMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Pairs {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s).map(Self)
    }
}

impl From<Pairs> for IndexMap<String, String> {
    fn from(value: Pairs) -> Self {
        value.0
    }
}

impl From<&Pairs> for BTreeMap<String, String> {
    fn from(value: &Pairs) -> Self {
        value
            .0
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
