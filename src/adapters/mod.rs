// Adapters layer: in-process implementations of the domain ports.

pub mod memory;

pub use memory::MemorySettingsStore;
