use std::time::Duration;

// Top Level Constants
/// Lamports (minor units) in one whole SOL.
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// Cadence of the price poller. First fetch happens immediately on mount.
pub const PRICE_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Characters kept at each end when an address is shortened for a button label.
pub const ADDRESS_TRUNCATE_CHARS: usize = 4;

/// Decimal places shown for the wallet balance.
pub const BALANCE_DECIMALS: usize = 4;

/// Decimal places shown for the USD price.
pub const PRICE_DECIMALS: usize = 2;
