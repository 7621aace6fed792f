//! Phantom browser extension, reached through the injected `window.solana` object.
//!
//! Outside the browser there is no extension to talk to, so the native build
//! always reports the wallet as not installed.

use async_trait::async_trait;

#[cfg(target_arch = "wasm32")]
use crate::engine::EventSink;

use super::{ConnectMode, WalletAdapter, WalletError};

#[derive(Default)]
pub struct PhantomAdapter {
    /// Extension event handlers for the current connect. Dropping detaches them.
    #[cfg(target_arch = "wasm32")]
    listeners: std::cell::RefCell<Option<browser::Listeners>>,
}

impl PhantomAdapter {
    pub const NAME: &'static str = "Phantom";

    pub fn new() -> Self {
        Self::default()
    }

    fn not_installed() -> WalletError {
        WalletError::NotInstalled(Self::NAME.to_string())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl WalletAdapter for PhantomAdapter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            browser::provider().is_some()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    async fn connect(&self, mode: ConnectMode) -> Result<String, WalletError> {
        #[cfg(target_arch = "wasm32")]
        {
            let solana = browser::provider().ok_or_else(Self::not_installed)?;
            browser::connect(&solana, mode).await
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = mode;
            Err(Self::not_installed())
        }
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.listeners.borrow_mut().take();
            match browser::provider() {
                Some(solana) => browser::disconnect(&solana).await,
                None => Ok(()),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(())
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn watch(&self, attempt: u64, sink: &EventSink) {
        // Detach the previous connect's handlers before attaching new ones.
        self.listeners.borrow_mut().take();
        let Some(solana) = browser::provider() else {
            return;
        };
        match browser::Listeners::attach(solana, attempt, sink.clone()) {
            Ok(listeners) => *self.listeners.borrow_mut() = Some(listeners),
            Err(e) => log::warn!("Could not follow {} account changes: {}", Self::NAME, e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use wasm_bindgen_futures::JsFuture;

    use super::super::{ConnectMode, WalletError, is_plausible_address};
    use crate::engine::{EventSink, SessionEvent};

    type Handler = Closure<dyn FnMut(JsValue)>;

    /// `disconnect` and `accountChanged` handlers registered on the provider.
    pub(super) struct Listeners {
        solana: Object,
        on_disconnect: Handler,
        on_account_changed: Handler,
    }

    impl Listeners {
        pub(super) fn attach(solana: Object, attempt: u64, sink: EventSink) -> Result<Self, WalletError> {
            let disconnect_sink = sink.clone();
            let on_disconnect = Closure::wrap(Box::new(move |_: JsValue| {
                disconnect_sink.emit(SessionEvent::Disconnected { attempt });
            }) as Box<dyn FnMut(JsValue)>);

            // A null key means the new account has not approved this site.
            let on_account_changed = Closure::wrap(Box::new(move |public_key: JsValue| {
                let event = match public_key_string(&public_key) {
                    Some(address) if is_plausible_address(&address) => {
                        SessionEvent::AccountChanged { attempt, address }
                    }
                    _ => SessionEvent::Disconnected { attempt },
                };
                sink.emit(event);
            }) as Box<dyn FnMut(JsValue)>);

            let on = method(&solana, "on")?;
            for (name, handler) in [("disconnect", &on_disconnect), ("accountChanged", &on_account_changed)] {
                on.call2(&solana, &JsValue::from_str(name), handler.as_ref())
                    .map_err(|e| WalletError::Provider(js_message(&e)))?;
            }

            Ok(Self {
                solana,
                on_disconnect,
                on_account_changed,
            })
        }
    }

    impl Drop for Listeners {
        fn drop(&mut self) {
            let Ok(off) = method(&self.solana, "removeListener") else {
                return;
            };
            for (name, handler) in [
                ("disconnect", &self.on_disconnect),
                ("accountChanged", &self.on_account_changed),
            ] {
                if let Err(e) = off.call2(&self.solana, &JsValue::from_str(name), handler.as_ref()) {
                    log::warn!("Failed to detach `{}` handler: {}", name, js_message(&e));
                }
            }
        }
    }

    fn public_key_string(public_key: &JsValue) -> Option<String> {
        if public_key.is_null() || public_key.is_undefined() {
            return None;
        }
        method(public_key, "toString")
            .ok()?
            .call0(public_key)
            .ok()?
            .as_string()
    }

    /// `window.solana`, but only when it is the Phantom provider.
    pub(super) fn provider() -> Option<Object> {
        let window = web_sys::window()?;
        let solana = Reflect::get(&window, &JsValue::from_str("solana")).ok()?;
        if solana.is_undefined() || solana.is_null() {
            return None;
        }
        let is_phantom = Reflect::get(&solana, &JsValue::from_str("isPhantom"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !is_phantom {
            return None;
        }
        solana.dyn_into::<Object>().ok()
    }

    pub(super) async fn connect(solana: &Object, mode: ConnectMode) -> Result<String, WalletError> {
        let opts = Object::new();
        if mode == ConnectMode::Silent {
            Reflect::set(&opts, &JsValue::from_str("onlyIfTrusted"), &JsValue::TRUE)
                .map_err(|e| WalletError::Provider(js_message(&e)))?;
        }

        let response = call_promise(solana, "connect", &opts)
            .await
            .map_err(|e| WalletError::Rejected(js_message(&e)))?;

        let public_key = Reflect::get(&response, &JsValue::from_str("publicKey"))
            .map_err(|e| WalletError::Provider(js_message(&e)))?;
        let to_string = method(&public_key, "toString")?;
        let address = to_string
            .call0(&public_key)
            .map_err(|e| WalletError::Provider(js_message(&e)))?
            .as_string()
            .ok_or_else(|| WalletError::Provider("publicKey.toString() was not a string".into()))?;

        if !is_plausible_address(&address) {
            return Err(WalletError::InvalidAddress(address));
        }
        Ok(address)
    }

    pub(super) async fn disconnect(solana: &Object) -> Result<(), WalletError> {
        call_promise(solana, "disconnect", &JsValue::UNDEFINED)
            .await
            .map(|_| ())
            .map_err(|e| WalletError::Provider(js_message(&e)))
    }

    fn method(target: &JsValue, name: &str) -> Result<Function, WalletError> {
        Reflect::get(target, &JsValue::from_str(name))
            .map_err(|e| WalletError::Provider(js_message(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::Provider(format!("`{}` is not a function", name)))
    }

    async fn call_promise(target: &Object, name: &str, arg: &JsValue) -> Result<JsValue, JsValue> {
        let f = method(target, name).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let promise: Promise = f.call1(target, arg)?.dyn_into()?;
        JsFuture::from(promise).await
    }

    fn js_message(value: &JsValue) -> String {
        if let Some(s) = value.as_string() {
            return s;
        }
        Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| format!("{:?}", value))
    }
}
