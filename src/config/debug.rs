//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every price poll tick and the value it produced.
    pub log_price_poll: bool,

    /// Log balance requests, results, and dropped stale results.
    pub log_balance: bool,

    /// Log wallet session transitions (connect, disconnect, modal).
    pub log_session: bool,

    /// Log every event drained from the background channel.
    pub log_events: bool,
}

pub const DF: LogFlags = LogFlags {
    log_session: true,
    log_balance: true,

    log_price_poll: false,
    log_events: false,
};
