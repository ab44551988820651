//! `roster` - Single-user student record keeping
//!
//! This library stores student records (id, name, age, grade, section) in a
//! flat pipe-delimited text file and provides the add, list, find, update and
//! delete operations over them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod ids;
pub mod logging;
pub mod record;
pub mod service;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use ids::next_id;
pub use logging::init_logging;
pub use record::Record;
pub use service::StudentService;
pub use store::RecordStore;
pub use validation::{Grade, StudentFields};
