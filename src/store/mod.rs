pub mod json_store;
pub mod log;

pub use json_store::EntryStore;
