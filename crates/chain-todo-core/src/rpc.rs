//! JSON-RPC Read Endpoint
//!
//! `eth_call` against a fixed HTTP endpoint at block `latest`.

use std::cell::Cell;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::trace;

use crate::abi;
use crate::config::{Address, DappConfig};
use crate::domain::{ReadError, Task};
use crate::endpoint::{ContractCall, ReadEndpoint};

/// A JSON-RPC 2.0 request
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method,
            params,
        }
    }
}

/// A JSON-RPC 2.0 response
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    pub fn into_result(self) -> Result<Value, ReadError> {
        if let Some(err) = self.error {
            return Err(ReadError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| ReadError::Decode("response has neither result nor error".to_string()))
    }
}

/// Read endpoint talking to a node over HTTP
pub struct JsonRpcReader {
    client: reqwest::Client,
    url: String,
    contract: Address,
    next_id: Cell<u64>,
}

impl JsonRpcReader {
    pub fn new(config: &DappConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.network.read_rpc_url.clone(),
            contract: config.contract.clone(),
            next_id: Cell::new(1),
        }
    }

    /// `eth_call` at `latest`, returning the hex return data
    async fn eth_call(&self, call: ContractCall) -> Result<String, ReadError> {
        let id = self.next_id.replace(self.next_id.get() + 1);
        let request = RpcRequest::new(id, "eth_call", json!([call, "latest"]));
        trace!(id, data = %request.params[0]["data"], "eth_call");

        let response: RpcResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ReadError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| ReadError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| ReadError::Transport(e.to_string()))?;

        match response.into_result()? {
            Value::String(data) => Ok(data),
            other => Err(ReadError::Decode(format!("eth_call returned {}", other))),
        }
    }
}

#[async_trait(?Send)]
impl ReadEndpoint for JsonRpcReader {
    async fn count(&self, caller: Option<&str>) -> Result<u64, ReadError> {
        let call = ContractCall::new(&self.contract, &abi::get_tasks_count()).with_sender(caller);
        abi::decode_count(&self.eth_call(call).await?)
    }

    async fn get(&self, caller: Option<&str>, index: u64) -> Result<Task, ReadError> {
        let call = ContractCall::new(&self.contract, &abi::get_task(index)).with_sender(caller);
        abi::decode_task(&self.eth_call(call).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_envelope() {
        let request = RpcRequest::new(7, "eth_chainId", json!([]));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"jsonrpc": "2.0", "id": 7, "method": "eth_chainId", "params": []})
        );
    }

    #[test]
    fn test_response_result() {
        let response: RpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1, "result": "0x01"})).unwrap();
        assert_eq!(response.into_result(), Ok(json!("0x01")));
    }

    #[test]
    fn test_response_error_wins() {
        let response: RpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "execution reverted"}
        }))
        .unwrap();
        assert_eq!(
            response.into_result(),
            Err(ReadError::Rpc {
                code: -32000,
                message: "execution reverted".to_string()
            })
        );
    }

    #[test]
    fn test_empty_response_is_decode_error() {
        let response: RpcResponse = serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).unwrap();
        assert!(matches!(response.into_result(), Err(ReadError::Decode(_))));
    }
}
