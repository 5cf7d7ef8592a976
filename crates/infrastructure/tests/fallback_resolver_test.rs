use registry_resolve_application::ports::FallbackResolver;
use registry_resolve_domain::DomainError;
use registry_resolve_infrastructure::system::SystemFallbackResolver;
use std::net::Ipv4Addr;

#[tokio::test]
async fn test_resolves_ipv4_literal() {
    let resolver = SystemFallbackResolver::new(2);

    let address = resolver.resolve_ipv4("127.0.0.1").await.unwrap();

    assert_eq!(address, Ipv4Addr::LOCALHOST);
}

#[tokio::test]
async fn test_trailing_dot_is_ignored() {
    let resolver = SystemFallbackResolver::new(2);

    let address = resolver.resolve_ipv4("127.0.0.1.").await.unwrap();

    assert_eq!(address, Ipv4Addr::LOCALHOST);
}

#[tokio::test]
async fn test_empty_name_fails() {
    let resolver = SystemFallbackResolver::new(2);

    let result = resolver.resolve_ipv4(".").await;

    assert!(matches!(
        result,
        Err(DomainError::FallbackResolution { reason, .. }) if reason == "empty name"
    ));
}

#[tokio::test]
async fn test_ipv6_only_literal_fails() {
    let resolver = SystemFallbackResolver::new(2);

    let result = resolver.resolve_ipv4("::1").await;

    assert!(matches!(
        result,
        Err(DomainError::FallbackResolution { reason, .. }) if reason == "no IPv4 address"
    ));
}

#[tokio::test]
async fn test_unresolvable_name_fails() {
    let resolver = SystemFallbackResolver::new(2);

    let result = resolver
        .resolve_ipv4("does-not-exist.registry-resolve.invalid.")
        .await;

    assert!(matches!(result, Err(DomainError::FallbackResolution { .. })));
}
