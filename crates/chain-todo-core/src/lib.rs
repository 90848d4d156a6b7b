//! On-chain ToDo Client Core
//!
//! Layered like the rest of the app:
//! - domain: tasks, connection state, operation lifecycle, errors
//! - abi / rpc / endpoint: the contract and wallet seams
//! - connection / reader / writer: the three cooperating components
//! - session: their composition; view: what to render
//!
//! Single-threaded throughout; nothing here is `Send`.

pub mod abi;
pub mod config;
pub mod connection;
pub mod domain;
pub mod endpoint;
pub mod reader;
pub mod rpc;
pub mod session;
pub mod view;
pub mod writer;

mod flight;


pub use config::{Address, DappConfig, Network};
pub use connection::ConnectionManager;
pub use domain::{
    parse_chain_id, ConfigError, ConnectionState, OperationKind, OperationState, ReadError,
    Rejection, Task, TaskSnapshot, WalletError, WalletEvent,
};
pub use endpoint::{
    wait_for_receipt, ContractCall, ReadEndpoint, TransactionReceipt, TxHash, Wallet, WriteEndpoint,
};
pub use reader::{RefreshOutcome, TaskReader};
pub use rpc::{JsonRpcReader, RpcRequest, RpcResponse};
pub use session::TodoSession;
pub use view::Screen;
pub use writer::TaskWriter;
