//! # Todo Store
//!
//! A locally-persisted, observable todo-list store: the Model of a
//! model-view-controller todo app, with the view and controller left to the
//! caller.
//!
//! ## Core Concepts
//!
//! - **Todos**: Ordered records with a unique ID, text, and completion flag
//! - **Storage**: An injected slot holding the sequence as a JSON array,
//!   rewritten after every mutation
//! - **Subscriptions**: Channels that receive the full post-mutation
//!   snapshot, plus the loaded state at subscribe time
//!
//! ## Example
//!
//! ```ignore
//! use todo_store::{Store, StoreConfig, SubscriptionConfig, StoreEvent};
//!
//! let store = Store::open(StoreConfig {
//!     path: "./todos.json".into(),
//! })?;
//!
//! let handle = store.subscribe(SubscriptionConfig::default());
//!
//! let todo = store.add("Plant a garden")?;
//! store.toggle(todo.id)?;
//!
//! while let Ok(StoreEvent::TodoListChanged { todos, .. }) = handle.try_recv() {
//!     println!("{} todos", todos.len());
//! }
//! ```

pub mod error;
pub mod storage;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Store, StoreConfig};
pub use subscriptions::{
    ChangeKind, DropReason, StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
    SubscriptionManager,
};
pub use types::{Todo, TodoId};
