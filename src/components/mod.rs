//! UI Components
//!
//! Reusable Leptos components.

mod frame;
mod not_configured;
mod no_wallet;
mod connect_wallet;
mod network_notice;
mod new_task_form;
mod task_list;
mod task_row;
mod status_banner;

pub use frame::AppFrame;
pub use not_configured::NotConfigured;
pub use no_wallet::NoWallet;
pub use connect_wallet::{ConnectWallet, WalletBadge};
pub use network_notice::NetworkNotice;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
pub use task_row::TaskRow;
pub use status_banner::StatusBanner;
