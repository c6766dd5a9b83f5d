use crate::error::MetricsError;
use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::{Resolver, TokioResolver};
use std::cell::RefCell;
use std::collections::HashMap;
use std::net::IpAddr;
use tokio::runtime::Runtime;

/// Reverse name resolution for requester addresses.
///
/// `None` means the address could not be resolved; callers treat that as an
/// ordinary outcome, not an error.
pub trait HostnameResolver {
    fn reverse_lookup(&self, ip_address: &str) -> Option<String>;
}

impl<R: HostnameResolver + ?Sized> HostnameResolver for &R {
    fn reverse_lookup(&self, ip_address: &str) -> Option<String> {
        (**self).reverse_lookup(ip_address)
    }
}

/// PTR lookups through the system's DNS configuration.
///
/// The pipeline is synchronous, so each lookup is driven to completion on a
/// private current-thread runtime.
pub struct DnsResolver {
    runtime: Runtime,
    resolver: TokioResolver,
}

impl DnsResolver {
    pub fn from_system_conf() -> Result<Self, MetricsError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| MetricsError::Resolver(Box::new(e)))?;

        let resolver = {
            let _guard = runtime.enter();
            match read_system_conf() {
                Ok((config, opts)) => {
                    Resolver::builder_with_config(config, TokioConnectionProvider::default())
                        .with_options(opts)
                        .build()
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "failed to read system DNS config, using default"
                    );
                    Resolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                    .build()
                }
            }
        };

        Ok(Self { runtime, resolver })
    }
}

impl HostnameResolver for DnsResolver {
    fn reverse_lookup(&self, ip_address: &str) -> Option<String> {
        let ip: IpAddr = ip_address.parse().ok()?;

        match self.runtime.block_on(self.resolver.reverse_lookup(ip)) {
            Ok(lookup) => lookup.iter().next().map(|ptr| ptr.0.to_utf8()),
            Err(e) => {
                tracing::debug!(ip = %ip, error = %e, "reverse lookup failed");
                None
            }
        }
    }
}

/// Resolves each distinct address at most once per run.
pub struct CachingResolver<R> {
    inner: R,
    cache: RefCell<HashMap<String, Option<String>>>,
}

impl<R: HostnameResolver> CachingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_addresses(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<R: HostnameResolver> HostnameResolver for CachingResolver<R> {
    fn reverse_lookup(&self, ip_address: &str) -> Option<String> {
        if let Some(hit) = self.cache.borrow().get(ip_address) {
            return hit.clone();
        }

        let resolved = self.inner.reverse_lookup(ip_address);
        self.cache
            .borrow_mut()
            .insert(ip_address.to_string(), resolved.clone());
        resolved
    }
}

/// Fixed address -> host name table. Anything else is unresolved.
///
/// Used for offline runs (`--skip-dns`) and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new<I, A, H>(hosts: I) -> Self
    where
        I: IntoIterator<Item = (A, H)>,
        A: Into<String>,
        H: Into<String>,
    {
        Self {
            hosts: hosts
                .into_iter()
                .map(|(a, h)| (a.into(), h.into()))
                .collect(),
        }
    }
}

impl HostnameResolver for StaticResolver {
    fn reverse_lookup(&self, ip_address: &str) -> Option<String> {
        self.hosts.get(ip_address).cloned()
    }
}
