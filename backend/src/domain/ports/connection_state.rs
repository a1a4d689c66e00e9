//! Port exposing the primary store's current connection state.

/// Snapshot of a store connection's state, polled synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// The store is reachable and has live connections.
    Connected,
    /// The store has definitively reported itself down.
    Disconnected,
    /// The state cannot be determined (still connecting, draining, or the
    /// client exposes no usable signal).
    Indeterminate,
}

/// Source of the primary store's connection state.
///
/// Polled, not subscribed: the probe reads the current state each time it
/// runs and never registers callbacks on the client. A snapshot can lag the
/// backend; an open connection whose peer has died counts as live until the
/// client notices, so `Connected` is a best-effort verdict, not a guarantee
/// the next query succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait ConnectionStateSource: Send + Sync {
    /// Current connection state of the primary store.
    fn connection_state(&self) -> ConnectionState;
}
