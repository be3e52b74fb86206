//! Relay services.
//!
//! DESIGN
//! ======
//! Services hold the forwarding logic (target URLs, body policy, response
//! decoding, failure classification) independent of Axum extractors, so the
//! route handlers stay thin.

pub mod assets;
pub mod relay;

use reqwest::Url;
use std::net::{IpAddr, Ipv4Addr};

/// Send `localhost` to `127.0.0.1`. Other hosts are left alone.
pub(crate) fn rewrite_loopback(url: &mut Url) {
    if url.host_str() == Some("localhost") {
        let _ = url.set_ip_host(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
}
