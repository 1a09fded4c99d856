// customer-registry: a FIFO queue over a closed element set, and an
// interactive in-memory customer registry.
//
// Binaries live in src/bin/ (registry, queue_demo).

pub mod app;
pub mod config;
pub mod console;
pub mod customer;
pub mod error;
pub mod queue;
pub mod store;
pub mod validation;

pub use app::{MenuOption, Session, SessionState};
pub use config::RegistryConfig;
pub use console::{ConsoleSink, LineInput, MessageSink, PromptReader, Severity};
pub use customer::{Customer, NewCustomer};
pub use error::{ConfigError, QueueError, RegistryError, ValidationError};
pub use queue::{Queue, QueueItem};
pub use store::CustomerStore;
