use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};

/// IP version the listening socket binds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpVersion {
    V4,
    V6,
}

/// How the request deadline behaves while a client trickles bytes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutPolicy {
    /// Deadline is fixed at connection accept. Partial progress does not
    /// extend it.
    FixedFromAccept,
    /// Deadline is pushed back on every byte arrival.
    ResetOnData,
}

/// Per-connection limits, shared by every accepted socket.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// How long a client has to deliver a complete request head.
    pub request_timeout: Duration,
    /// Cap on buffered header bytes before the request is rejected.
    pub max_header_bytes: usize,
    pub timeout_policy: TimeoutPolicy,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            max_header_bytes: 8192,
            timeout_policy: TimeoutPolicy::FixedFromAccept,
        }
    }
}

/// Startup configuration, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub ip_version: IpVersion,
    pub port: u16,
    pub document_root: PathBuf,
    pub limits: Limits,
}

impl Config {
    /// Parses the positional arguments: ip version (4 or 6), port, document
    /// root. The document root must already exist as a directory, otherwise
    /// no request could ever be served.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let ip_version = match args.next().as_deref() {
            Some("4") => IpVersion::V4,
            Some("6") => IpVersion::V6,
            Some(other) => bail!("unsupported ip version {other:?}, expected 4 or 6"),
            None => bail!("usage: statik [4 | 6] [port number] [path to web root]"),
        };

        let port = args
            .next()
            .context("missing port argument")?
            .parse::<u16>()
            .context("port must be a number in 0..=65535")?;

        let document_root = PathBuf::from(args.next().context("missing document root argument")?);
        if !document_root.is_dir() {
            bail!(
                "document root {} is not a directory, no requests can be served",
                document_root.display()
            );
        }

        Ok(Self {
            ip_version,
            port,
            document_root,
            limits: Limits::default(),
        })
    }

    /// Wildcard listen address for the configured IP version.
    pub fn listen_addr(&self) -> SocketAddr {
        let ip: IpAddr = match self.ip_version {
            IpVersion::V4 => Ipv4Addr::UNSPECIFIED.into(),
            IpVersion::V6 => Ipv6Addr::UNSPECIFIED.into(),
        };
        SocketAddr::new(ip, self.port)
    }
}
