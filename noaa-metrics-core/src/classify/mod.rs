//! Record classification
//!
//! A raw access record is enriched with two labels:
//! - the dataset, from request path conventions (fatal when no rule matches)
//! - the origin bucket, from reverse DNS and the suffix table (never fatal)

mod dataset;
mod location;
mod resolver;

#[cfg(test)]
mod tests;

pub use dataset::{Dataset, DatasetSelector};
pub use location::{LocationTable, UNRECOGNIZED};
pub use resolver::{CachingResolver, DnsResolver, HostnameResolver, StaticResolver};

use crate::error::MetricsError;
use crate::record::{EnrichedLogRecord, RawLogRecord};

pub struct Classifier<'a, R> {
    locations: &'a LocationTable,
    resolver: R,
}

impl<'a, R: HostnameResolver> Classifier<'a, R> {
    pub fn new(locations: &'a LocationTable, resolver: R) -> Self {
        Self {
            locations,
            resolver,
        }
    }

    pub fn classify(&self, raw: RawLogRecord) -> Result<EnrichedLogRecord, MetricsError> {
        let dataset = Dataset::from_path(&raw.file_path)?;
        let ip_location = self.locate(&raw.ip_address);
        Ok(EnrichedLogRecord::from_raw(raw, dataset, ip_location))
    }

    pub fn locate(&self, ip_address: &str) -> String {
        let hostname = self.resolver.reverse_lookup(ip_address);
        self.locations.locate(hostname.as_deref()).to_string()
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}
