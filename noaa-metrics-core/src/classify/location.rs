use std::collections::{BTreeMap, HashMap};

pub const UNRECOGNIZED: &str = "Unrecognized";

/// Host-name suffixes (top-level labels) and the origin bucket each maps to.
const BUILTIN_SUFFIXES: &[(&str, &str)] = &[
    // Generic domains
    ("com", "Commercial (.com)"),
    ("edu", "Education (.edu)"),
    ("gov", "US Government (.gov)"),
    ("mil", "US Military (.mil)"),
    ("org", "Organization (.org)"),
    ("net", "Network (.net)"),
    ("int", "International Organization (.int)"),
    ("info", "Information (.info)"),
    ("io", "British Indian Ocean Territory (.io)"),
    ("us", "United States"),
    // Countries
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("be", "Belgium"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("ch", "Switzerland"),
    ("cl", "Chile"),
    ("cn", "China"),
    ("cz", "Czech Republic"),
    ("de", "Germany"),
    ("dk", "Denmark"),
    ("es", "Spain"),
    ("fi", "Finland"),
    ("fr", "France"),
    ("gl", "Greenland"),
    ("hk", "Hong Kong"),
    ("ie", "Ireland"),
    ("in", "India"),
    ("is", "Iceland"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("kr", "South Korea"),
    ("mx", "Mexico"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("pl", "Poland"),
    ("ru", "Russia"),
    ("se", "Sweden"),
    ("sg", "Singapore"),
    ("tw", "Taiwan"),
    ("uk", "United Kingdom"),
    ("za", "South Africa"),
];

/// Immutable suffix -> origin table.
///
/// Built once per run and shared by reference with the classifier.
#[derive(Debug, Clone)]
pub struct LocationTable {
    entries: HashMap<String, String>,
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LocationTable {
    pub fn builtin() -> Self {
        let entries = BUILTIN_SUFFIXES
            .iter()
            .map(|(suffix, label)| (suffix.to_string(), label.to_string()))
            .collect();

        Self { entries }
    }

    /// Built-in table with configured entries added on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut table = Self::builtin();
        for (suffix, label) in overrides {
            table
                .entries
                .insert(suffix.trim_start_matches('.').to_ascii_lowercase(), label.clone());
        }
        table
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bucket for a resolved host name, or [`UNRECOGNIZED`] when the name is
    /// missing or its suffix is not in the table.
    pub fn locate(&self, hostname: Option<&str>) -> &str {
        hostname
            .and_then(host_suffix)
            .and_then(|suffix| self.entries.get(&suffix))
            .map(String::as_str)
            .unwrap_or(UNRECOGNIZED)
    }
}

/// `Dns.Example.CO.UK.` -> `uk`
fn host_suffix(hostname: &str) -> Option<String> {
    hostname
        .trim_end_matches('.')
        .rsplit('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_ascii_lowercase)
}
