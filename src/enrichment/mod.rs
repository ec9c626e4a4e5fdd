// Profile enrichment with a day-based cache.

pub mod policy;
pub mod service;

pub use policy::{Decision, Provenance, decide, is_even_day};
pub use service::{EnrichmentService, ProfileResponse};
