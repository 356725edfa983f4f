//! Storage for authentication data.
//!
//! - [`SessionStore`]: the key/value store holding the active session
//!   (in-memory and file-backed implementations provided)
//! - [`UserDirectory`]: the static account list logins are checked against

pub mod directory;
pub mod file;
pub mod memory;
pub mod session;

pub use directory::{Account, UserDirectory};
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use session::SessionStore;
