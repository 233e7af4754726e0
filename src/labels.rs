use std::{collections::BTreeMap, ops::Deref};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{pairs::Pairs, Error};

/// Deployment or service labels parsed from a deployer pair-string.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Labels(IndexMap<String, String>);

impl Labels {
    #[must_use]
    pub fn new(value: IndexMap<String, String>) -> Self {
        Self(value)
    }
}

impl Deref for Labels {
    type Target = IndexMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for Labels {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Pairs>().map(Self::from)
    }
}

impl From<Pairs> for Labels {
    fn from(value: Pairs) -> Self {
        Self(value.into())
    }
}

impl From<Labels> for IndexMap<String, String> {
    fn from(value: Labels) -> Self {
        value.0
    }
}

impl From<&Labels> for BTreeMap<String, String> {
    fn from(value: &Labels) -> Self {
        value
            .0
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::Labels;

    use crate::Error;

    #[test]
    fn labels_from_pair_string() {
        // act
        let labels = Labels::try_from("environment:production,tier:backend").unwrap();

        // assert
        assert_eq!(2, labels.len());
        assert_eq!(Some(&"production".to_string()), labels.get("environment"));
        assert_eq!(Some(&"backend".to_string()), labels.get("tier"));
    }

    #[test]
    fn labels_invalid_pair_string() {
        // act
        let error = Labels::try_from("environment:production,tier").unwrap_err();

        // assert
        assert_eq!(Error::InvalidFormat("tier".into()), error);
    }

    #[test]
    fn labels_into_metadata_map() {
        // arrange
        let labels = Labels::try_from("tier:backend").unwrap();

        // act
        let metadata: BTreeMap<String, String> = (&labels).into();

        // assert
        assert_eq!(Some(&"backend".to_string()), metadata.get("tier"));
    }
}
