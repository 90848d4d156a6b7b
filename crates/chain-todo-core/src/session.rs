//! Session Composition
//!
//! Wires the Connection Manager, Task Reader and Task Writer together:
//! readiness gates every contract call, a changed account drops the old
//! list, and each successful write is followed by exactly one refresh.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::config::DappConfig;
use crate::connection::ConnectionManager;
use crate::domain::{ConnectionState, OperationKind, OperationState, Rejection, TaskSnapshot, WalletEvent};
use crate::endpoint::{ReadEndpoint, Wallet, WriteEndpoint};
use crate::reader::{RefreshOutcome, TaskReader};
use crate::writer::TaskWriter;

pub struct TodoSession<C, R, W> {
    config: DappConfig,
    connection: ConnectionManager<C>,
    reader: TaskReader<R>,
    writer: TaskWriter<W>,
    /// Called whenever connection state or the published list may have changed
    listener: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<C, R, W> TodoSession<C, R, W>
where
    C: Wallet,
    R: ReadEndpoint,
    W: WriteEndpoint,
{
    pub fn new(config: DappConfig, wallet: C, reader: R, writer: W) -> Self {
        Self {
            connection: ConnectionManager::new(wallet, &config),
            reader: TaskReader::new(reader),
            writer: TaskWriter::new(writer, &config),
            config,
            listener: RefCell::new(None),
        }
    }

    pub fn set_listener(&self, listener: impl Fn() + 'static) {
        *self.listener.borrow_mut() = Some(Rc::new(listener));
    }

    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }

    pub fn config(&self) -> &DappConfig {
        &self.config
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection.state()
    }

    pub fn is_ready(&self) -> bool {
        self.connection.is_ready()
    }

    pub fn snapshot(&self) -> TaskSnapshot {
        self.reader.snapshot()
    }

    pub fn is_refreshing(&self) -> bool {
        self.reader.is_refreshing()
    }

    pub fn is_busy(&self, kind: OperationKind) -> bool {
        self.writer.is_busy(kind)
    }

    /// User-initiated connect; `None` if the wallet state did not change
    pub async fn connect(&self) -> Option<RefreshOutcome> {
        let previous = self.connection.address();
        let changed = self.connection.connect().await;
        self.after_connection_change(previous, changed).await
    }

    /// Silent reconnect at startup
    pub async fn restore(&self) -> Option<RefreshOutcome> {
        let previous = self.connection.address();
        let changed = self.connection.restore().await;
        self.after_connection_change(previous, changed).await
    }

    pub async fn handle_wallet_event(&self, event: WalletEvent) -> Option<RefreshOutcome> {
        let previous = self.connection.address();
        let changed = self.connection.handle(event).await;
        self.after_connection_change(previous, changed).await
    }

    /// Re-read the whole list if the connection is ready
    pub async fn refresh(&self) -> RefreshOutcome {
        if !self.connection.is_ready() {
            debug!("wallet not ready, skipping refresh");
            return RefreshOutcome::Gated;
        }
        let caller = self.connection.address();
        let outcome = self.reader.refresh(caller.as_deref()).await;
        if outcome != RefreshOutcome::Deferred {
            self.notify();
        }
        outcome
    }

    pub async fn create_task(
        &self,
        content: &str,
        observe: &dyn Fn(&OperationState),
    ) -> Result<OperationState, Rejection> {
        let from = self.signer()?;
        let terminal = self.writer.create_task(&from, content, observe).await?;
        self.refresh_after(&terminal).await;
        Ok(terminal)
    }

    pub async fn toggle_completed(
        &self,
        index: u64,
        observe: &dyn Fn(&OperationState),
    ) -> Result<OperationState, Rejection> {
        let from = self.signer()?;
        let snapshot = self.reader.snapshot();
        if !snapshot.contains(index) {
            return Err(Rejection::IndexOutOfRange {
                index,
                count: snapshot.tasks.len() as u64,
            });
        }
        let terminal = self.writer.toggle_completed(&from, index, observe).await?;
        self.refresh_after(&terminal).await;
        Ok(terminal)
    }

    fn signer(&self) -> Result<String, Rejection> {
        match self.connection.address() {
            Some(address) if self.connection.is_ready() => Ok(address),
            _ => Err(Rejection::NotReady),
        }
    }

    async fn refresh_after(&self, terminal: &OperationState) {
        if terminal.is_success() {
            self.refresh().await;
        }
    }

    async fn after_connection_change(
        &self,
        previous: Option<String>,
        changed: bool,
    ) -> Option<RefreshOutcome> {
        if !changed {
            return None;
        }
        // An owed pass was queued for the old caller and chain
        if self.connection.address() != previous || !self.connection.is_ready() {
            self.reader.reset();
        }
        self.notify();
        Some(self.refresh().await)
    }
}
