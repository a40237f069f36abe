//! Session persistence adapters for the `SessionStorage` port.

mod file;
mod memory;

pub use file::{FileSessionStorage, SESSION_FILE};
pub use memory::InMemorySessionStorage;
