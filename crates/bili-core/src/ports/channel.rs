//! RPC channel source port.

/// Supplies ready-to-use connection handles for the binary RPC transport.
///
/// Channel construction (TLS, endpoints, interceptors) happens elsewhere.
/// `default_channel` is queried lazily on every RPC call and may return
/// `None`; callers treat that as "transport unavailable" rather than a fault.
pub trait ChannelRepository: Send + Sync {
    /// Connection handle type, cheap to clone.
    type Channel: Clone + Send + Sync;

    /// The channel to use right now, if one is available.
    fn default_channel(&self) -> Option<Self::Channel>;
}
