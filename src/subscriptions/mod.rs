//! Subscription system for live todo-list updates.
//!
//! Every mutation broadcasts the full post-mutation snapshot, and a new
//! subscriber receives the current snapshot immediately so it can render
//! without waiting for the first change.
//!
//! Subscribers receive events over bounded channels; a subscriber that
//! stops draining its channel is dropped rather than blocking the store.
//!
//! # Example
//!
//! ```ignore
//! let handle = store.subscribe(SubscriptionConfig::default());
//!
//! loop {
//!     match handle.recv() {
//!         Ok(StoreEvent::TodoListChanged { todos, .. }) => render(&todos),
//!         Ok(StoreEvent::Dropped { .. }) | Err(_) => break,
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    ChangeKind, DropReason, StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
};
