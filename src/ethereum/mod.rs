//! Injected Wallet Bindings
//!
//! `window.ethereum` (EIP-1193) wrapped for the core crate's wallet and
//! write-endpoint traits.

mod events;
mod wallet;

use js_sys::Reflect;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use events::WalletSubscription;
pub use wallet::BrowserWallet;

#[wasm_bindgen]
extern "C" {
    /// An EIP-1193 provider object
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Clone, Debug)]
    pub type Eip1193Provider;

    #[wasm_bindgen(method, catch)]
    async fn request(this: &Eip1193Provider, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &Eip1193Provider, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeListener)]
    fn remove_listener(this: &Eip1193Provider, event: &str, listener: &js_sys::Function);
}

// ========================
// Request Plumbing
// ========================

#[derive(Serialize)]
struct RequestArgs<'a> {
    method: &'a str,
    params: Value,
}

impl Eip1193Provider {
    /// `request({method, params})`; JS errors are reduced to their message
    pub async fn call(&self, method: &str, params: Value) -> Result<JsValue, String> {
        let args = RequestArgs { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| e.to_string())?;
        self.request(args).await.map_err(|err| js_error_message(&err))
    }
}

/// The injected provider, if a wallet extension is installed
pub fn injected_provider() -> Option<Eip1193Provider> {
    let window = web_sys::window()?;
    let provider = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
    if provider.is_undefined() || provider.is_null() {
        return None;
    }
    Some(provider.unchecked_into())
}

/// `error.message` of a rejected wallet promise, verbatim
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}
