//! CLI command implementations
//!
//! One module per subcommand.

pub mod init;
pub mod install;
pub mod run;
pub mod status;
pub mod test_hook;
pub mod uninstall;
