mod build;
mod info;
mod version;

pub use build::cmd_build;
pub use info::cmd_info;
pub use version::{VersionAction, cmd_version};
