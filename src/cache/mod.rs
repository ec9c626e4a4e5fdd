// Cache module for the enrichment response.
// One persisted record, swappable between a JSON file and memory.

pub mod paths;
pub mod store;

pub use paths::{CACHE_FILE_NAME, cache_dir, default_cache_file};
pub use store::{
    CacheRecord, CacheStore, FileCacheStore, MemoryCacheStore, read_record, write_record,
};
