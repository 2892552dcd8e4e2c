//! Polysync: Multi-way Directory Convergence
//!
//! Reconciles two or more directory trees so that every relative path found
//! under any root exists under all of them, each file holding the most
//! recently modified version. A run walks every root into one path index,
//! then creates missing directories, then copies each master file to the
//! roots that lack or disagree with it.

pub mod config;
pub mod enact;
pub mod engine;
pub mod error;
pub mod filter;
pub mod format;
pub mod index;
pub mod logging;
pub mod report;
pub mod roots;
pub mod select;
pub mod tooling;
pub mod tree;
pub mod types;

pub use engine::{synchronize, RunState, SyncOptions, Synchronizer};
pub use error::{ErrorKind, SyncError};
pub use filter::{EntryFilter, PatternFilter};
pub use report::SyncReport;
pub use roots::RootSet;
