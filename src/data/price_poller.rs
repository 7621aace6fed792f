//! Scoped repeating price refresh.
//!
//! Starting a `PricePoller` acquires the timer; dropping it releases it. The
//! loop fetches once immediately, then on a fixed cadence measured from the
//! first fetch, and is aborted at the next await point when the guard goes
//! away (an in-flight request included).

use std::sync::Arc;
use std::time::Duration;

use futures::future::{AbortHandle, abortable};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::data::PriceFeed;
use crate::engine::{Effects, PanelEvent, Ticker};

pub struct PricePoller {
    abort: AbortHandle,
}

impl PricePoller {
    pub fn start(feed: Arc<dyn PriceFeed>, interval: Duration, effects: &Effects) -> Self {
        let sink = effects.sink.clone();
        let poll_loop = async move {
            let mut ticker = Ticker::new(interval);
            loop {
                ticker.tick().await;
                let result = feed.fetch_usd().await.map_err(|e| format!("{:#}", e));
                #[cfg(debug_assertions)]
                if DF.log_price_poll {
                    log::info!("[price-poll] {:?}", result);
                }
                sink.emit(PanelEvent::Price(result));
            }
        };

        let (poll_loop, abort) = abortable(poll_loop);
        effects.spawner.spawn(async move {
            let _ = poll_loop.await;
        });

        Self { abort }
    }

    pub fn is_running(&self) -> bool {
        !self.abort.is_aborted()
    }

    pub fn stop(&self) {
        self.abort.abort();
    }
}

impl Drop for PricePoller {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{Result, bail};
    use async_trait::async_trait;

    use super::*;
    use crate::engine::{AppEvent, EventSink, TaskSpawner};

    struct CountingFeed {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingFeed {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PriceFeed for CountingFeed {
        async fn fetch_usd(&self) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                bail!("price endpoint down");
            }
            Ok(142.37)
        }
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    const MINUTE: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn fetches_on_start_then_every_interval_until_dropped() {
        let feed = CountingFeed::new(false);
        let (sink, rx) = EventSink::detached_pair();
        let fx = Effects::new(TaskSpawner::current(), sink);

        let poller = PricePoller::start(feed.clone(), MINUTE, &fx);
        settle().await;
        assert_eq!(feed.calls(), 1, "fetch on mount");

        tokio::time::advance(Duration::from_secs(59)).await;
        settle().await;
        assert_eq!(feed.calls(), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(feed.calls(), 2);

        tokio::time::advance(MINUTE).await;
        settle().await;
        assert_eq!(feed.calls(), 3);

        drop(poller);
        tokio::time::advance(MINUTE * 5).await;
        settle().await;
        assert_eq!(feed.calls(), 3, "no fetch after teardown");

        let prices: Vec<_> = rx.try_iter().collect();
        assert_eq!(prices.len(), 3);
        assert!(
            prices
                .iter()
                .all(|e| *e == AppEvent::Panel(PanelEvent::Price(Ok(142.37))))
        );
    }

    struct SlowFeed {
        calls: AtomicUsize,
        latency: Duration,
    }

    #[async_trait]
    impl PriceFeed for SlowFeed {
        async fn fetch_usd(&self) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.latency).await;
            Ok(142.37)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn slow_responses_do_not_shift_the_schedule() {
        let feed = Arc::new(SlowFeed {
            calls: AtomicUsize::new(0),
            latency: Duration::from_secs(10),
        });
        let (sink, rx) = EventSink::detached_pair();
        let fx = Effects::new(TaskSpawner::current(), sink);

        let _poller = PricePoller::start(feed.clone(), MINUTE, &fx);
        settle().await;
        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(rx.try_iter().count(), 1, "first quote delivered at 10s");

        tokio::time::advance(Duration::from_secs(49)).await;
        settle().await;
        assert_eq!(feed.calls.load(Ordering::SeqCst), 1);

        // Second fetch starts at 60s, not 70s.
        tokio::time::advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(feed.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn failures_do_not_stop_the_cadence() {
        let feed = CountingFeed::new(true);
        let (sink, rx) = EventSink::detached_pair();
        let fx = Effects::new(TaskSpawner::current(), sink);

        let poller = PricePoller::start(feed.clone(), MINUTE, &fx);
        settle().await;
        tokio::time::advance(MINUTE).await;
        settle().await;

        assert_eq!(feed.calls(), 2);
        assert!(rx.try_iter().all(|e| matches!(e, AppEvent::Panel(PanelEvent::Price(Err(_))))));
        assert!(poller.is_running());
        poller.stop();
        assert!(!poller.is_running());
    }
}
