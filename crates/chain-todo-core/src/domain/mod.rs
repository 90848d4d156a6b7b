//! Domain Layer
//!
//! Task records, wallet connection state and write-operation lifecycle.
//! No I/O lives here.

mod connection;
mod error;
mod operation;
mod task;

pub use connection::{parse_chain_id, ConnectionState, WalletEvent};
pub use error::{ConfigError, ReadError, Rejection, WalletError};
pub use operation::{OperationKind, OperationState};
pub use task::{Task, TaskSnapshot};
