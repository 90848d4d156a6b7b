//! Task Writer
//!
//! Create and toggle transactions. Each operation reports every lifecycle
//! transition to an observer and resolves with its terminal state.

use std::cell::Cell;

use tracing::{info, warn};

use crate::abi::{self, Calldata};
use crate::config::{Address, DappConfig};
use crate::domain::{OperationKind, OperationState, Rejection};
use crate::endpoint::{ContractCall, WriteEndpoint};
use crate::flight::InFlight;

pub struct TaskWriter<W> {
    endpoint: W,
    contract: Address,
    creating: Cell<bool>,
    toggling: Cell<bool>,
}

impl<W: WriteEndpoint> TaskWriter<W> {
    pub fn new(endpoint: W, config: &DappConfig) -> Self {
        Self {
            endpoint,
            contract: config.contract.clone(),
            creating: Cell::new(false),
            toggling: Cell::new(false),
        }
    }

    pub fn is_busy(&self, kind: OperationKind) -> bool {
        self.flag(kind).get()
    }

    /// Send `createTask(content)` signed by `from`
    pub async fn create_task(
        &self,
        from: &str,
        content: &str,
        observe: &dyn Fn(&OperationState),
    ) -> Result<OperationState, Rejection> {
        if content.trim().is_empty() {
            return Err(Rejection::EmptyContent);
        }
        self.run(OperationKind::CreateTask, from, abi::create_task(content), observe)
            .await
    }

    /// Send `toggleCompleted(index)` signed by `from`
    pub async fn toggle_completed(
        &self,
        from: &str,
        index: u64,
        observe: &dyn Fn(&OperationState),
    ) -> Result<OperationState, Rejection> {
        self.run(
            OperationKind::ToggleCompleted,
            from,
            abi::toggle_completed(index),
            observe,
        )
        .await
    }

    async fn run(
        &self,
        kind: OperationKind,
        from: &str,
        calldata: Calldata,
        observe: &dyn Fn(&OperationState),
    ) -> Result<OperationState, Rejection> {
        let flag = self.flag(kind);
        if flag.get() {
            return Err(Rejection::Busy(kind.as_str()));
        }
        let _flight = InFlight::enter(flag);

        let call = ContractCall::new(&self.contract, &calldata).with_sender(Some(from));
        observe(&OperationState::PendingSignature);

        let tx = match self.endpoint.submit(call).await {
            Ok(tx) => tx,
            Err(reason) => return Ok(finish(kind, observe, OperationState::Failed(reason))),
        };
        info!(op = kind.as_str(), tx = %tx.0, "transaction submitted");
        observe(&OperationState::Mining {
            tx_hash: tx.0.clone(),
        });

        let terminal = match self.endpoint.wait_mined(&tx).await {
            Ok(()) => OperationState::Success,
            Err(reason) => OperationState::Failed(reason),
        };
        Ok(finish(kind, observe, terminal))
    }

    fn flag(&self, kind: OperationKind) -> &Cell<bool> {
        match kind {
            OperationKind::CreateTask => &self.creating,
            OperationKind::ToggleCompleted => &self.toggling,
        }
    }
}

fn finish(
    kind: OperationKind,
    observe: &dyn Fn(&OperationState),
    terminal: OperationState,
) -> OperationState {
    match &terminal {
        OperationState::Failed(reason) => warn!(op = kind.as_str(), %reason, "transaction failed"),
        _ => info!(op = kind.as_str(), "transaction mined"),
    }
    observe(&terminal);
    terminal
}
