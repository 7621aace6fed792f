//! Background task plumbing shared by the wallet session and the panel.
//!
//! Native builds run futures on a tokio runtime owned by the app. The browser
//! build has no threads, so futures go to `spawn_local` and may be `!Send`.

use std::future::Future;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use tokio::runtime::Handle;

/// `Send` on native targets, nothing in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + ?Sized> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}

/// `Sync` on native targets, nothing in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSync: Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync + ?Sized> MaybeSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSync {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSync for T {}

/// Fire-and-forget spawner. Cloned freely into whoever needs to start work.
#[derive(Clone)]
pub struct TaskSpawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: Handle,
}

impl TaskSpawner {
    /// NATIVE ONLY: spawn onto the given runtime.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// NATIVE ONLY: spawn onto the runtime the caller is currently inside.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// WASM ONLY: spawn onto the browser microtask queue.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self {}
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + MaybeSend + 'static,
    {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.handle.spawn(fut);
        }

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(fut);
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for TaskSpawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-cadence timer. The first tick completes immediately; later ticks
/// land one period after the previous scheduled tick, so slow work between
/// ticks does not push the schedule back. A tick missed entirely is taken
/// late and the schedule restarts from there.
#[cfg(not(target_arch = "wasm32"))]
pub struct Ticker {
    inner: tokio::time::Interval,
}

#[cfg(not(target_arch = "wasm32"))]
impl Ticker {
    /// Must be called from inside the runtime.
    pub fn new(period: Duration) -> Self {
        let mut inner = tokio::time::interval(period);
        inner.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        Self { inner }
    }

    pub async fn tick(&mut self) {
        self.inner.tick().await;
    }
}

#[cfg(target_arch = "wasm32")]
pub struct Ticker {
    period: Duration,
    next: Option<web_time::Instant>,
}

#[cfg(target_arch = "wasm32")]
impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    pub async fn tick(&mut self) {
        let now = web_time::Instant::now();
        let fired = match self.next {
            Some(at) if at > now => {
                sleep(at - now).await;
                at
            }
            _ => now,
        };
        self.next = Some(fired + self.period);
    }
}

/// `setTimeout` wrapped in a promise.
#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let ms = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        match web_sys::window() {
            Some(window) => {
                if window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                    .is_err()
                {
                    log::error!("setTimeout refused a {}ms timer", ms);
                }
            }
            None => log::error!("No window available for timers"),
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
