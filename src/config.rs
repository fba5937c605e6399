/// Upper bound in bytes for a single LOB read request. A configured read size
/// beyond this is clamped, so a misconfigured caller can not stall the pull
/// loop or exhaust memory with one oversized request.
pub const MAX_READ_SIZE: usize = 1 << 18;

/// Bytes requested per LOB read if the caller does not configure a read size.
pub const DEFAULT_READ_SIZE: usize = (1 << 11) * 100;
