//! Tree scanning: walking roots into the path index.

pub mod queues;
pub mod walker;

pub use queues::DiscoveryQueues;
pub use walker::{WalkOutcome, Walker, WalkerConfig};
