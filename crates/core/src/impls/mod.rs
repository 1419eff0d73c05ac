// Built-in adapters that need no external service

mod memory_store;

pub use memory_store::MemoryJobStore;
