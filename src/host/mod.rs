//! Hosting provider definitions and the ordered registry they live in.

mod builtin;
mod definition;
mod registry;
mod representation;

pub use definition::{HostDefinition, DEFAULT_PATHMATCH};
pub use registry::HostRegistry;
pub use representation::Representation;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Duplicate host definition: {0}")]
    DuplicateHost(String),

    #[error("Invalid pattern for host {host}: {source}")]
    InvalidPattern {
        host: String,
        #[source]
        source: regex::Error,
    },

    #[error("Host {0} has no protocols")]
    EmptyProtocols(String),
}
