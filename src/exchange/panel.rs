use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::config::{PRICE_REFRESH_INTERVAL, PanelOptions};
use crate::data::{LedgerClient, PriceFeed, PricePoller};
use crate::engine::{Effects, PanelEvent};
use crate::utils::AppInstant;

use super::state::{BalanceState, PanelState, lamports_to_sol};

/// Balance and price side effects for the exchange panel.
///
/// The balance read is keyed on the session address: every change of
/// address (including to and from absent) starts a new epoch, and only
/// results tagged with the current epoch are applied.
pub struct ExchangePanel {
    options: PanelOptions,
    ledger: Arc<dyn LedgerClient>,
    feed: Arc<dyn PriceFeed>,
    state: PanelState,
    seen_session: Option<String>,
    epoch: u64,
    poller: Option<PricePoller>,
}

impl ExchangePanel {
    pub fn new(options: PanelOptions, ledger: Arc<dyn LedgerClient>, feed: Arc<dyn PriceFeed>) -> Self {
        Self {
            options,
            ledger,
            feed,
            state: PanelState::default(),
            seen_session: None,
            epoch: 0,
            poller: None,
        }
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Reset the balance and start the price poller. The next `sync_session`
    /// reads the balance again even if the session did not change meanwhile.
    pub fn mount(&mut self, effects: &Effects) {
        if self.poller.is_some() {
            return;
        }
        self.state.balance = BalanceState::Idle;
        self.seen_session = None;
        self.epoch += 1;
        self.poller = Some(PricePoller::start(
            self.feed.clone(),
            PRICE_REFRESH_INTERVAL,
            effects,
        ));
    }

    /// Release the price timer. Session changes are ignored until the next
    /// `mount`.
    pub fn unmount(&mut self) {
        self.poller = None;
    }

    /// Keyed effect on the session address. Call once per frame.
    pub fn sync_session(&mut self, address: Option<&str>, effects: &Effects) {
        if !self.is_mounted() || address == self.seen_session.as_deref() {
            return;
        }
        self.seen_session = address.map(str::to_owned);
        self.epoch += 1;

        let Some(address) = address else {
            self.state.balance = BalanceState::Idle;
            return;
        };

        self.state.balance = BalanceState::Loading;
        #[cfg(debug_assertions)]
        if DF.log_balance {
            log::info!("Requesting balance for {} (epoch {})", address, self.epoch);
        }

        let epoch = self.epoch;
        let address = address.to_owned();
        let ledger = self.ledger.clone();
        let sink = effects.sink.clone();
        effects.spawner.spawn(async move {
            let result = ledger
                .get_balance(&address)
                .await
                .map_err(|e| format!("{:#}", e));
            sink.emit(PanelEvent::Balance { epoch, result });
        });
    }

    pub fn apply(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::Balance { epoch, result } => self.apply_balance(epoch, result),
            PanelEvent::Price(Ok(price)) => {
                self.state.price = Some(price);
                self.state.price_updated_at = Some(AppInstant::now());
            }
            PanelEvent::Price(Err(e)) => {
                log::error!("Failed to fetch {} price: {}", self.options.token_label, e);
            }
        }
    }

    /// The buy control is presentational. Nothing is read, sent, or changed.
    pub fn buy(&self, _amount: &str) {}

    fn apply_balance(&mut self, epoch: u64, result: Result<u64, String>) {
        if epoch != self.epoch {
            #[cfg(debug_assertions)]
            if DF.log_balance {
                log::info!(
                    "Dropping balance result for epoch {} (current {})",
                    epoch,
                    self.epoch
                );
            }
            return;
        }
        self.state.balance = match result {
            Ok(lamports) => BalanceState::Ready(lamports_to_sol(lamports)),
            Err(e) => {
                log::error!("Failed to fetch balance: {}", e);
                BalanceState::Failed(e)
            }
        };
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc::Receiver;

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::engine::{AppEvent, EventSink, TaskSpawner};

    const ADDR: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
    const OTHER: &str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

    #[derive(Default)]
    struct FakeLedger {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl LedgerClient for FakeLedger {
        async fn get_balance(&self, address: &str) -> Result<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                bail!("node unreachable");
            }
            Ok(if address == ADDR { 1_500_000_000 } else { 42 })
        }
    }

    #[derive(Default)]
    struct FakeFeed {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PriceFeed for FakeFeed {
        async fn fetch_usd(&self) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(142.37)
        }
    }

    struct Harness {
        panel: ExchangePanel,
        ledger: Arc<FakeLedger>,
        feed: Arc<FakeFeed>,
        fx: Effects,
        rx: Receiver<AppEvent>,
    }

    impl Harness {
        /// A mounted panel, as the page has it.
        fn new(ledger: FakeLedger) -> Self {
            let ledger = Arc::new(ledger);
            let feed = Arc::new(FakeFeed::default());
            let (sink, rx) = EventSink::detached_pair();
            let fx = Effects::new(TaskSpawner::current(), sink);
            let mut panel = ExchangePanel::new(PanelOptions::default(), ledger.clone(), feed.clone());
            panel.mount(&fx);
            Self {
                panel,
                ledger,
                feed,
                fx,
                rx,
            }
        }

        fn balance_reads(&self) -> usize {
            self.ledger.calls.load(Ordering::SeqCst)
        }

        async fn settle(&mut self) {
            for _ in 0..10 {
                tokio::task::yield_now().await;
            }
            while let Ok(AppEvent::Panel(e)) = self.rx.try_recv() {
                self.panel.apply(e);
            }
        }

        fn sync(&mut self, address: Option<&str>) {
            self.panel.sync_session(address, &self.fx);
        }
    }

    #[tokio::test]
    async fn one_balance_read_per_connect() {
        let mut h = Harness::new(FakeLedger::default());

        h.sync(Some(ADDR));
        assert_eq!(h.panel.state().balance, BalanceState::Loading);
        // Re-rendering with the same session must not refetch.
        h.sync(Some(ADDR));
        h.sync(Some(ADDR));
        h.settle().await;

        assert_eq!(h.ledger.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.panel.state().balance, BalanceState::Ready(1.5));
    }

    #[tokio::test]
    async fn disconnect_clears_without_network() {
        let mut h = Harness::new(FakeLedger::default());
        h.sync(Some(ADDR));
        h.settle().await;

        h.sync(None);
        assert_eq!(h.panel.state().balance, BalanceState::Idle);
        h.settle().await;
        assert_eq!(h.ledger.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn in_flight_result_cannot_override_disconnect() {
        let mut h = Harness::new(FakeLedger::default());
        h.sync(Some(ADDR));
        // Disconnect before the read resolves.
        h.sync(None);
        h.settle().await;

        assert_eq!(h.panel.state().balance, BalanceState::Idle);
    }

    #[tokio::test]
    async fn switching_accounts_keeps_only_latest_result() {
        let mut h = Harness::new(FakeLedger::default());
        h.sync(Some(ADDR));
        h.sync(Some(OTHER));
        h.settle().await;

        assert_eq!(h.ledger.calls.load(Ordering::SeqCst), 2);
        assert_eq!(h.panel.state().balance, BalanceState::Ready(42e-9));
    }

    #[tokio::test]
    async fn balance_failure_is_reported_instead_of_loading_forever() {
        let mut h = Harness::new(FakeLedger {
            fail: true,
            ..Default::default()
        });
        h.sync(Some(ADDR));
        h.settle().await;

        assert!(matches!(
            h.panel.state().balance,
            BalanceState::Failed(ref e) if e.contains("node unreachable")
        ));
    }

    #[tokio::test]
    async fn failed_price_refresh_keeps_last_value() {
        let mut h = Harness::new(FakeLedger::default());
        h.panel.apply(PanelEvent::Price(Ok(142.37)));
        h.panel.apply(PanelEvent::Price(Err("timeout".into())));

        assert_eq!(h.panel.state().price, Some(142.37));
        h.settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn mount_fetches_price_and_unmount_stops_polling() {
        let mut h = Harness::new(FakeLedger::default());
        h.settle().await;
        assert!(h.panel.is_mounted());
        assert_eq!(h.feed.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.panel.state().price, Some(142.37));

        h.panel.unmount();
        tokio::time::advance(PRICE_REFRESH_INTERVAL * 3).await;
        h.settle().await;
        assert_eq!(h.feed.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn remount_reads_balance_again_for_same_session() {
        let mut h = Harness::new(FakeLedger::default());
        h.sync(Some(ADDR));
        h.settle().await;
        assert_eq!(h.panel.state().balance, BalanceState::Ready(1.5));

        h.panel.unmount();
        let fx = h.fx.clone();
        h.panel.mount(&fx);
        assert_eq!(h.panel.state().balance, BalanceState::Idle);

        for _ in 0..5 {
            h.sync(Some(ADDR));
        }
        assert_eq!(h.panel.state().balance, BalanceState::Loading);
        h.settle().await;

        assert_eq!(h.balance_reads(), 2);
        assert_eq!(h.panel.state().balance, BalanceState::Ready(1.5));
    }

    #[tokio::test]
    async fn unmounted_panel_ignores_session_changes() {
        let mut h = Harness::new(FakeLedger::default());
        h.panel.unmount();

        h.sync(Some(ADDR));
        h.settle().await;

        assert_eq!(h.balance_reads(), 0);
        assert_eq!(h.panel.state().balance, BalanceState::Idle);
    }

    #[tokio::test]
    async fn result_from_before_remount_is_dropped() {
        let mut h = Harness::new(FakeLedger::default());
        h.sync(Some(ADDR));
        h.panel.unmount();
        let fx = h.fx.clone();
        h.panel.mount(&fx);
        // The read started before the remount lands now.
        h.settle().await;

        assert_eq!(h.panel.state().balance, BalanceState::Idle);
    }

    #[tokio::test]
    async fn buy_is_inert() {
        let mut h = Harness::new(FakeLedger::default());
        h.sync(Some(ADDR));
        h.settle().await;
        let before = h.panel.state().clone();
        let price_reads = h.feed.calls.load(Ordering::SeqCst);

        h.panel.buy("12.5");
        h.panel.buy("");
        h.settle().await;

        assert_eq!(h.panel.state(), &before);
        assert_eq!(h.balance_reads(), 1);
        assert_eq!(h.feed.calls.load(Ordering::SeqCst), price_reads);
    }
}
