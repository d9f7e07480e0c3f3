pub mod agent;
pub mod error;
pub mod spec_document;

pub use agent::{AgentOptions, DEFAULT_PORT, PING_PATH, PONG_BODY, ProbeOutcome};
pub use error::AppError;
pub use spec_document::{
    Bootstrap, DomainDescriptor, SPEC_FILE, SPEC_TEMPLATE, SpecDocument, parse_bootstrap_peers,
};
