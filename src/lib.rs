pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::komga::KomgaClient;
pub use crate::config::{CliConfig, KomgaSettings};
pub use crate::core::{audit::GapAuditor, report::render_markdown};
pub use crate::utils::error::{AuditError, Result};
