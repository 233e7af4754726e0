use std::{collections::BTreeMap, ops::Deref};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{pairs::Pairs, Error};

/// Pod or service annotations parsed from a deployer pair-string.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Annotations(IndexMap<String, String>);

impl Annotations {
    #[must_use]
    pub fn new(value: IndexMap<String, String>) -> Self {
        Self(value)
    }
}

impl Deref for Annotations {
    type Target = IndexMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for Annotations {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Pairs>().map(Self::from)
    }
}

impl From<Pairs> for Annotations {
    fn from(value: Pairs) -> Self {
        Self(value.into())
    }
}

impl From<Annotations> for IndexMap<String, String> {
    fn from(value: Annotations) -> Self {
        value.0
    }
}

impl From<&Annotations> for BTreeMap<String, String> {
    fn from(value: &Annotations) -> Self {
        value
            .0
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
