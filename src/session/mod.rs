/// Credential pair storage and single-flight renewal coordination
pub mod auth;
/// Traits for the durable store and the login redirect
pub mod interface;
/// Built-in store and navigator implementations
pub mod store;

pub use auth::{RenewalGuard, RenewalOutcome, RenewalTicket, Session};
pub use interface::{Navigator, SessionStore};
pub use store::{FileStore, HeadlessNavigator, MemoryStore};
