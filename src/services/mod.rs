//! Seams for the collaborators that live outside this process.

pub mod notify;
pub mod store;

pub use notify::{notify, Notification, Notifier, NotifyError, TracingNotifier};
pub use store::{
    Collection, ContentStore, FileStore, MemoryStore, StoreError, StoredRecord, CONTENT_STORE_KEY,
};
