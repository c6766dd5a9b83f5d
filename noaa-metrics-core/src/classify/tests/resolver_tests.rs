use crate::classify::{CachingResolver, HostnameResolver, StaticResolver};
use std::cell::Cell;

struct CountingResolver {
    calls: Cell<usize>,
}

impl HostnameResolver for CountingResolver {
    fn reverse_lookup(&self, ip_address: &str) -> Option<String> {
        self.calls.set(self.calls.get() + 1);
        (ip_address == "10.0.0.1").then(|| "a.example.edu".to_string())
    }
}

#[test]
fn static_resolver_only_knows_its_table() {
    let resolver = StaticResolver::new([("10.0.0.1", "a.example.edu")]);

    assert_eq!(
        resolver.reverse_lookup("10.0.0.1").as_deref(),
        Some("a.example.edu")
    );
    assert_eq!(resolver.reverse_lookup("10.0.0.2"), None);
}

#[test]
fn caching_resolver_asks_once_per_address() {
    // Arrange
    let resolver = CachingResolver::new(CountingResolver {
        calls: Cell::new(0),
    });

    // Act
    for _ in 0..3 {
        resolver.reverse_lookup("10.0.0.1");
        resolver.reverse_lookup("10.0.0.2");
    }

    // Assert
    assert_eq!(resolver.cached_addresses(), 2);
    assert_eq!(
        resolver.reverse_lookup("10.0.0.1").as_deref(),
        Some("a.example.edu")
    );
    assert_eq!(resolver.reverse_lookup("10.0.0.2"), None);
}

#[test]
fn caching_resolver_remembers_failures() {
    let inner = CountingResolver {
        calls: Cell::new(0),
    };
    let resolver = CachingResolver::new(&inner);

    resolver.reverse_lookup("192.0.2.1");
    resolver.reverse_lookup("192.0.2.1");

    assert_eq!(inner.calls.get(), 1);
}
