//! Flow parsing, action classification and structural validation

mod classify;
mod config;
mod error;
mod parser;
pub mod raw;
mod validate;

pub use classify::{classify, ClickSite};
pub use config::{Config, MODEL_ENV};
pub use error::FlowError;
pub use parser::FlowParser;
pub use raw::RawFlow;
pub use validate::{validate_flow, Violation};
