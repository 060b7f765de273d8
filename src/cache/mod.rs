pub mod clock;
pub mod engine;
pub mod entry;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{SelectionCache, DEFAULT_TTL_MS};
pub use entry::CacheEntry;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
