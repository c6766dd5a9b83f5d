use crate::error::MetricsError;
use serde::{Deserialize, Serialize};
use std::fmt;

const NOAA_SEGMENT: &str = "NOAA/";

/// Dataset a download belongs to, derived from its request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Dataset {
    /// `/NOAA/<dataset>/...`
    Noaa(String),
    Nsidc0057,
    Nsidc0008,
    Gpdp,
}

impl Dataset {
    pub fn label(&self) -> &str {
        match self {
            Dataset::Noaa(name) => name,
            Dataset::Nsidc0057 => "nsidc-0057",
            Dataset::Nsidc0008 => "nsidc-0008",
            Dataset::Gpdp => "GPDP",
        }
    }

    /// The dataset a label names. Labels of the fixed datasets map to their
    /// own variants even when they appear as a `NOAA/` component, so a
    /// dataset always reads back from its label unchanged.
    fn from_label(label: String) -> Self {
        match label.as_str() {
            "nsidc-0057" => Dataset::Nsidc0057,
            "nsidc-0008" => Dataset::Nsidc0008,
            "GPDP" => Dataset::Gpdp,
            _ => Dataset::Noaa(label),
        }
    }

    /// Rules are evaluated in order; the first match wins.
    pub fn from_path(path: &str) -> Result<Self, MetricsError> {
        if let Some(name) = noaa_dataset(path) {
            return Ok(Dataset::from_label(name.to_string()));
        }

        if path.contains("nsidc-0057") {
            Ok(Dataset::Nsidc0057)
        } else if path.contains("nsidc-0008") {
            Ok(Dataset::Nsidc0008)
        } else if path.contains("GPDP") {
            Ok(Dataset::Gpdp)
        } else {
            Err(MetricsError::UnknownDataset {
                path: path.to_string(),
            })
        }
    }
}

/// The path component right after the first `NOAA/`, if there is one.
fn noaa_dataset(path: &str) -> Option<&str> {
    let (_, rest) = path.split_once(NOAA_SEGMENT)?;
    rest.split('/').next().filter(|name| !name.is_empty())
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Dataset> for String {
    fn from(dataset: Dataset) -> Self {
        match dataset {
            Dataset::Noaa(name) => name,
            other => other.label().to_string(),
        }
    }
}

impl TryFrom<String> for Dataset {
    type Error = String;

    fn try_from(label: String) -> Result<Self, Self::Error> {
        if label.is_empty() {
            return Err("dataset label must not be empty".to_string());
        }
        Ok(Dataset::from_label(label))
    }
}

/// Which datasets a report covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSelector {
    #[default]
    All,
    Only(String),
}

impl DatasetSelector {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            DatasetSelector::All
        } else {
            DatasetSelector::Only(value.to_string())
        }
    }

    pub fn matches(&self, dataset: &Dataset) -> bool {
        match self {
            DatasetSelector::All => true,
            DatasetSelector::Only(label) => dataset.label() == label,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            DatasetSelector::All => None,
            DatasetSelector::Only(label) => Some(label),
        }
    }
}
