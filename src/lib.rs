pub mod cache;
pub mod cli;
pub mod discover;
pub mod error;
pub mod fs;
pub mod platform;
pub mod report;

pub use cache::DiscoveryCache;
pub use discover::{discover_working_tree, AdminDirReference, Discovery, ADMIN_DIR_NAME};
pub use error::Result;
pub use platform::PathStyle;
