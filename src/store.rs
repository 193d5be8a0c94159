//! Main Store struct tying all components together.

use crate::error::Result;
use crate::storage::{FileStorage, Storage};
use crate::subscriptions::{
    ChangeKind, SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{Todo, TodoId};
use parking_lot::Mutex;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Path of the storage slot file.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./todos.json"),
        }
    }
}

/// State behind the store's write lock.
struct Inner {
    /// The todo sequence, insertion order preserved.
    todos: Vec<Todo>,

    /// Next ID to assign. Monotonic for the store's lifetime, so IDs are
    /// never reused after deletion.
    next_id: u64,
}

/// The todo store.
///
/// Owns the todo sequence exclusively. Every mutation serializes the whole
/// sequence to the storage slot and then broadcasts the post-mutation
/// snapshot to subscribers. Mutations run to completion under a write lock,
/// so observers always see a consistent snapshot.
///
/// Operations on IDs that are not present are no-ops, not errors; they still
/// persist and notify so observers stay in step with the slot.
pub struct Store {
    /// Injected persistence backend.
    storage: Box<dyn Storage>,

    /// Todo sequence and ID counter, guarded by the write lock.
    inner: Mutex<Inner>,

    /// Subscription manager.
    subscriptions: SubscriptionManager,
}

impl Store {
    /// Open a file-backed store at the configured path.
    ///
    /// A missing slot starts the store empty. A malformed slot is logged and
    /// treated as empty; an unreadable slot is an error.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let storage = FileStorage::open(&config.path)?;
        Self::with_storage(Box::new(storage))
    }

    /// Open a store over an injected storage backend.
    pub fn with_storage(storage: Box<dyn Storage>) -> Result<Self> {
        let todos = Self::load_initial(storage.as_ref())?;
        let next_id = todos.iter().map(|t| t.id.0).max().unwrap_or(0) + 1;

        Ok(Self {
            storage,
            inner: Mutex::new(Inner { todos, next_id }),
            subscriptions: SubscriptionManager::new(),
        })
    }

    /// Load the slot, falling back to an empty sequence when the slot is
    /// absent or holds malformed JSON.
    fn load_initial(storage: &dyn Storage) -> Result<Vec<Todo>> {
        let bytes = match storage.load()? {
            Some(bytes) => bytes,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(todos) => Ok(todos),
            Err(e) => {
                warn!(error = %e, "persisted todo list is malformed, starting empty");
                Ok(Vec::new())
            }
        }
    }

    // --- Mutations ---

    /// Add a todo with the given text, returning the created record.
    ///
    /// The new todo starts incomplete and is appended to the sequence.
    /// Rejecting empty text is the caller's responsibility.
    pub fn add(&self, text: impl Into<String>) -> Result<Todo> {
        let mut inner = self.inner.lock();

        let todo = Todo::new(TodoId(inner.next_id), text);

        let mut todos = inner.todos.clone();
        todos.push(todo.clone());

        self.commit(&mut inner, todos, ChangeKind::Added)?;
        inner.next_id += 1;

        debug!(id = %todo.id, "added todo");
        Ok(todo)
    }

    /// Replace the text of the todo matching `id`, leaving others unchanged.
    pub fn edit(&self, id: TodoId, new_text: impl Into<String>) -> Result<()> {
        let new_text = new_text.into();
        let mut inner = self.inner.lock();

        let todos = inner
            .todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo {
                        id: todo.id,
                        text: new_text.clone(),
                        complete: todo.complete,
                    }
                } else {
                    todo.clone()
                }
            })
            .collect();

        self.commit(&mut inner, todos, ChangeKind::Edited)?;

        debug!(%id, "edited todo");
        Ok(())
    }

    /// Remove the todo matching `id` from the sequence.
    pub fn delete(&self, id: TodoId) -> Result<()> {
        let mut inner = self.inner.lock();

        let todos = inner
            .todos
            .iter()
            .filter(|todo| todo.id != id)
            .cloned()
            .collect();

        self.commit(&mut inner, todos, ChangeKind::Deleted)?;

        debug!(%id, "deleted todo");
        Ok(())
    }

    /// Flip the completion flag of the todo matching `id`.
    pub fn toggle(&self, id: TodoId) -> Result<()> {
        let mut inner = self.inner.lock();

        let todos = inner
            .todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    Todo {
                        id: todo.id,
                        text: todo.text.clone(),
                        complete: !todo.complete,
                    }
                } else {
                    todo.clone()
                }
            })
            .collect();

        self.commit(&mut inner, todos, ChangeKind::Toggled)?;

        debug!(%id, "toggled todo");
        Ok(())
    }

    /// Persist the replacement sequence, then swap it in and broadcast.
    ///
    /// A failed save leaves the in-memory sequence untouched, so the store
    /// never drifts ahead of the slot.
    fn commit(&self, inner: &mut Inner, todos: Vec<Todo>, kind: ChangeKind) -> Result<()> {
        let bytes = serde_json::to_vec(&todos)?;
        self.storage.save(&bytes)?;

        inner.todos = todos;
        self.subscriptions.broadcast_snapshot(&inner.todos, kind);
        Ok(())
    }

    // --- Reads ---

    /// Snapshot of the current todo sequence.
    pub fn todos(&self) -> Vec<Todo> {
        self.inner.lock().todos.clone()
    }

    /// Number of todos.
    pub fn len(&self) -> usize {
        self.inner.lock().todos.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().todos.is_empty()
    }

    // --- Subscriptions ---

    /// Subscribe to snapshot events.
    ///
    /// The handle immediately receives the current sequence as a
    /// `TodoListChanged` event with `ChangeKind::Loaded`, then one snapshot
    /// per mutation.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        let inner = self.inner.lock();
        let handle = self.subscriptions.subscribe(config);
        self.subscriptions.send_snapshot_to(handle.id, inner.todos.clone());
        handle
    }

    /// Unsubscribe a handle.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    /// Number of active subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }
}
