use std::io;
use std::net::{IpAddr, SocketAddr};

use async_trait::async_trait;
use tokio::net::lookup_host;

use crate::probe::Resolver;

/// Resolves through the operating system (`getaddrinfo`).
pub struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, host: &str) -> io::Result<IpAddr> {
        let addrs: Vec<SocketAddr> = lookup_host((host, 0)).await?.collect();
        pick_address(&addrs).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{host} has no addresses"))
        })
    }
}

/// First IPv4 address if there is one, otherwise whatever came first.
fn pick_address(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn ipv4_is_preferred_over_earlier_ipv6() {
        let addrs: Vec<SocketAddr> = vec!["[::1]:0".parse().unwrap(), "127.0.0.1:0".parse().unwrap()];
        assert_eq!(pick_address(&addrs), Some(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    }

    #[test]
    fn ipv6_only_answers_are_used() {
        let addrs: Vec<SocketAddr> = vec!["[::1]:0".parse().unwrap()];
        assert_eq!(pick_address(&addrs), Some("::1".parse().unwrap()));
        assert_eq!(pick_address(&[]), None);
    }

    #[tokio::test]
    async fn address_literals_resolve_to_themselves() {
        let resolver = SystemResolver;
        assert_eq!(resolver.resolve("0.0.0.0").await.unwrap(), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(resolver.resolve("127.0.0.1").await.unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
