mod messages;
mod worker;

pub use messages::{AppEvent, Effects, EventSink, PanelEvent, SessionEvent};
pub use worker::{MaybeSend, MaybeSync, TaskSpawner, Ticker};
