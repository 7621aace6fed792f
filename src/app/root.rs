use {
    anyhow::Result,
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::{
        sync::{Arc, mpsc, mpsc::Receiver},
        time::Duration,
    },
};

use crate::{
    Cli,
    data::{CoinGeckoFeed, LedgerClient, PriceFeed, SolanaRpcClient},
    engine::{AppEvent, Effects, EventSink, TaskSpawner},
    exchange::ExchangePanel,
    ui::{UI_CONFIG, UiAction},
    wallet::{PhantomAdapter, WalletAdapter, WalletSession},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[cfg(not(target_arch = "wasm32"))]
use {crate::wallet::WatchOnlyAdapter, anyhow::Context as _, tokio::runtime::Runtime};

/// Page root: the wallet session provider wrapping the exchange panel.
pub struct App {
    pub(crate) session: WalletSession,
    pub(crate) panel: ExchangePanel,
    pub(crate) effects: Effects,
    /// Backing buffer for the amount field. Never read by any operation.
    pub(crate) amount_input: String,
    event_rx: Receiver<AppEvent>,
    #[cfg(not(target_arch = "wasm32"))]
    _runtime: Runtime,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("sol-exchange-io")
            .enable_all()
            .build()
            .context("Failed to create runtime")?;

        #[cfg(not(target_arch = "wasm32"))]
        let spawner = TaskSpawner::new(runtime.handle().clone());
        #[cfg(target_arch = "wasm32")]
        let spawner = TaskSpawner::new();

        let (event_tx, event_rx) = mpsc::channel();
        let effects = Effects::new(spawner, EventSink::new(event_tx, cc.egui_ctx.clone()));

        let options = args.panel_options();
        let ledger: Arc<dyn LedgerClient> = Arc::new(SolanaRpcClient::new(&args.rpc_url)?);
        let feed: Arc<dyn PriceFeed> =
            Arc::new(CoinGeckoFeed::new(&args.price_url, &options.price_asset_id)?);

        let mut session = WalletSession::new(wallet_adapter(&args), &options);
        let mut panel = ExchangePanel::new(options, ledger, feed);

        // Provider first, then the panel that reads it.
        session.mount(&effects);
        panel.mount(&effects);

        log::info!(
            "Exchange panel mounted (rpc: {}, prices: {})",
            args.rpc_url,
            args.price_url
        );

        Ok(Self {
            session,
            panel,
            effects,
            amount_input: String::new(),
            event_rx,
            #[cfg(not(target_arch = "wasm32"))]
            _runtime: runtime,
        })
    }

    /// Drain everything background tasks produced since the last frame.
    pub(crate) fn pump_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            #[cfg(debug_assertions)]
            if DF.log_events {
                log::info!("event: {:?}", event);
            }
            match event {
                AppEvent::Session(e) => self.session.apply(e),
                AppEvent::Panel(e) => self.panel.apply(e),
            }
        }
    }

    pub(crate) fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Connect => self.session.request_connect(&self.effects),
                UiAction::Disconnect => self.session.disconnect(&self.effects),
                UiAction::ChooseWallet(name) => self.session.choose_wallet(&name, &self.effects),
                UiAction::CloseModal => self.session.close_modal(),
                UiAction::Buy => self.panel.buy(&self.amount_input),
            }
        }
    }
}

/// The single registered wallet. Natively, a configured address stands in
/// for the browser extension.
fn wallet_adapter(args: &Cli) -> Arc<dyn WalletAdapter> {
    #[cfg(not(target_arch = "wasm32"))]
    if args.address.is_some() {
        return Arc::new(WatchOnlyAdapter::new(args.address.clone()));
    }
    #[cfg(target_arch = "wasm32")]
    let _ = args;
    Arc::new(PhantomAdapter::new())
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.pump_events();
        self.panel
            .sync_session(self.session.address(), &self.effects);
        let actions = self.render_exchange_panel(ctx);
        self.apply_actions(actions);
        // Keeps the "updated Xs ago" line moving between price events.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = UI_CONFIG.colors.background;
    visuals.window_fill = UI_CONFIG.colors.card;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
