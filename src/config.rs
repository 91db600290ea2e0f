//! Service configuration.
//!
//! There is no config file and no environment lookup: the defaults are the
//! service. Tests and embedders point the store elsewhere with
//! [`Config::with_store_root`].

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Clone, Debug)]
pub struct Config {
    /// Listen address. `0.0.0.0:8080`.
    pub addr: SocketAddr,
    /// Directory holding store entries. The working directory.
    pub store_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            store_root: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn with_store_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.store_root = root.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_8080_in_cwd() {
        let cfg = Config::default();
        assert_eq!(cfg.addr.port(), 8080);
        assert!(cfg.addr.ip().is_unspecified());
        assert_eq!(cfg.store_root, PathBuf::from("."));
    }

    #[test]
    fn store_root_override_keeps_the_port() {
        let cfg = Config::default().with_store_root("/srv/files");
        assert_eq!(cfg.addr.port(), DEFAULT_PORT);
        assert_eq!(cfg.store_root, PathBuf::from("/srv/files"));
    }
}
