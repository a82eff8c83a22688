//! Internet reachability probe
//!
//! A one-shot TCP connect-and-close against a well-known host, used as
//! a heuristic for "internet available". The connect uses an explicit
//! timeout and is only ever run on the probe worker thread, never on
//! the render thread.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Host, port, and timeout for the reachability check
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeTarget {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for ProbeTarget {
    fn default() -> Self {
        Self {
            host: "google.com".to_string(),
            port: 80,
            timeout: Duration::from_secs(3),
        }
    }
}

/// Outcome of one reachability check
#[derive(Clone, Debug, Default)]
pub struct NetworkStatus {
    /// Dashboard lines, label first, `Status:` last
    pub lines: Vec<String>,
    /// True iff the TCP connect succeeded
    pub connected: bool,
    /// Local address of the successful connection
    pub local_addr: Option<SocketAddr>,
}

/// Run the reachability check against the target
///
/// Classification:
/// - resolve failure: `Internet: No connection` / `DNS: Failed`
/// - connect failure: `Internet: Failed` / `<host>: Unreachable`
/// - success: `Internet: Connected` / `<host>: Reachable`
///
/// The list always ends with `Status: Online` or `Status: Offline`.
pub fn check(target: &ProbeTarget) -> NetworkStatus {
    let mut lines = vec!["Network:".to_string()];

    let (connected, local_addr) = match resolve(target) {
        Ok(addrs) => match connect_any(&addrs, target.timeout) {
            Some(local) => {
                lines.push("Internet: Connected".to_string());
                lines.push(format!("{}: Reachable", target.host));
                (true, Some(local))
            }
            None => {
                log::debug!("Reachability connect to {} failed", target.host);
                lines.push("Internet: Failed".to_string());
                lines.push(format!("{}: Unreachable", target.host));
                (false, None)
            }
        },
        Err(e) => {
            log::debug!("Reachability resolve for {} failed: {}", target.host, e);
            lines.push("Internet: No connection".to_string());
            lines.push("DNS: Failed".to_string());
            (false, None)
        }
    };

    match local_addr {
        Some(addr) => lines.push(format!("Local IP: {}", addr.ip())),
        None => lines.push("Local IP: unknown".to_string()),
    }
    lines.push(format!(
        "Status: {}",
        if connected { "Online" } else { "Offline" }
    ));

    NetworkStatus {
        lines,
        connected,
        local_addr,
    }
}

fn resolve(target: &ProbeTarget) -> std::io::Result<Vec<SocketAddr>> {
    let addrs: Vec<SocketAddr> = (target.host.as_str(), target.port)
        .to_socket_addrs()?
        .collect();
    if addrs.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no addresses resolved",
        ));
    }
    Ok(addrs)
}

/// Connect-and-close against the first address that answers
///
/// Returns the local address of the successful connection; the stream
/// is dropped (closed) immediately.
fn connect_any(addrs: &[SocketAddr], timeout: Duration) -> Option<SocketAddr> {
    for addr in addrs {
        if let Ok(stream) = TcpStream::connect_timeout(addr, timeout) {
            return stream.local_addr().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    fn local_target(port: u16) -> ProbeTarget {
        ProbeTarget {
            host: "127.0.0.1".to_string(),
            port,
            timeout: Duration::from_millis(500),
        }
    }

    #[test]
    fn test_connect_success_is_online() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let status = check(&local_target(port));
        assert!(status.connected);
        assert_eq!(status.lines[0], "Network:");
        assert!(status.lines.contains(&"Internet: Connected".to_string()));
        assert!(status.lines.contains(&"127.0.0.1: Reachable".to_string()));
        assert_eq!(status.lines.last().unwrap(), "Status: Online");
        // Local address is the real socket address, not a placeholder
        assert!(status.local_addr.is_some());
    }

    #[test]
    fn test_connect_refused_is_offline() {
        // Bind then drop to get a port with nothing listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let status = check(&local_target(port));
        assert!(!status.connected);
        assert!(status.lines.contains(&"Internet: Failed".to_string()));
        assert!(status.lines.contains(&"127.0.0.1: Unreachable".to_string()));
        assert_eq!(status.lines.last().unwrap(), "Status: Offline");
        assert!(status.lines.contains(&"Local IP: unknown".to_string()));
    }

    #[test]
    fn test_resolve_failure_is_dns_failed() {
        // RFC 2606 reserves .invalid; it never resolves
        let target = ProbeTarget {
            host: "host.invalid".to_string(),
            port: 80,
            timeout: Duration::from_millis(500),
        };

        let status = check(&target);
        assert!(!status.connected);
        assert!(status.lines.contains(&"Internet: No connection".to_string()));
        assert!(status.lines.contains(&"DNS: Failed".to_string()));
        assert_eq!(status.lines.last().unwrap(), "Status: Offline");
    }

    #[test]
    fn test_default_target() {
        let target = ProbeTarget::default();
        assert_eq!(target.host, "google.com");
        assert_eq!(target.port, 80);
    }
}
