//! Wallet Event Subscription
//!
//! Listeners for `accountsChanged`, `chainChanged` and `disconnect`,
//! registered once and removed when the subscription is dropped.

use std::rc::Rc;

use chain_todo_core::{parse_chain_id, WalletEvent};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::Eip1193Provider;

type Decode = fn(JsValue) -> Option<WalletEvent>;

pub struct WalletSubscription {
    provider: Eip1193Provider,
    listeners: Vec<(&'static str, Closure<dyn FnMut(JsValue)>)>,
}

impl WalletSubscription {
    pub fn subscribe(provider: &Eip1193Provider, on_event: impl Fn(WalletEvent) + 'static) -> Self {
        let on_event: Rc<dyn Fn(WalletEvent)> = Rc::new(on_event);
        let mut subscription = Self {
            provider: provider.clone(),
            listeners: Vec::new(),
        };
        subscription.listen("accountsChanged", on_event.clone(), |payload| {
            serde_wasm_bindgen::from_value::<Vec<String>>(payload)
                .ok()
                .map(WalletEvent::AccountsChanged)
        });
        subscription.listen("chainChanged", on_event.clone(), |payload| {
            payload
                .as_string()
                .and_then(|raw| parse_chain_id(&raw))
                .map(WalletEvent::ChainChanged)
        });
        subscription.listen("disconnect", on_event, |_| Some(WalletEvent::Disconnected));
        debug!("wallet listeners registered");
        subscription
    }

    fn listen(&mut self, name: &'static str, on_event: Rc<dyn Fn(WalletEvent)>, decode: Decode) {
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            match decode(payload) {
                Some(event) => on_event(event),
                None => warn!(event = name, "ignoring malformed wallet event"),
            }
        });
        self.provider.on(name, listener.as_ref().unchecked_ref());
        self.listeners.push((name, listener));
    }
}

impl Drop for WalletSubscription {
    fn drop(&mut self) {
        for (name, listener) in &self.listeners {
            self.provider
                .remove_listener(name, listener.as_ref().unchecked_ref());
        }
        debug!("wallet listeners removed");
    }
}
