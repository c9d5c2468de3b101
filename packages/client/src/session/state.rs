//! Connection lifecycle state.

use std::fmt;

/// Readiness of the transport, as seen by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closing,
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connecting => "Connecting",
            Self::Open => "Connected",
            Self::Closing => "Closing",
            Self::Closed => "Closed",
        };
        f.write_str(label)
    }
}

/// Generation number of a transport.
///
/// Every (re)connect gets a new epoch; events tagged with an older epoch belong
/// to a transport that was already torn down and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Epoch(u64);

impl Epoch {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
