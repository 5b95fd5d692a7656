//! Flow record types and I/O utilities for recorded user sessions

mod clock;
mod io;
mod paths;
mod types;

pub use clock::Clock;
pub use io::{atomic_write, read_json, write_json};
pub use paths::{
    parse_social_image_file_name, report_file_name, safe_name, social_image_file_name, Paths,
};
pub use types::{
    title_case, Action, ActionType, Element, ElementRole, Flow, FlowStats, PageContext,
    END_PREFIX, START_PREFIX,
};
