//! Adapters for external collaborators.
//!
//! Date handling, phone validation and host file access are supplied by the
//! caller through small traits. This module only lifts their results into
//! [`Either`](crate::control::Either), [`Maybe`](crate::control::Maybe),
//! [`IO`](crate::effect::IO) and [`Task`](crate::effect::Task) so they
//! compose with the rest of the crate.

mod date;
mod file;
mod phone;

pub use date::{DateEngine, DateInput, TimeUnit, is_in_past, is_valid_date, parse_date};
pub use file::{FileContents, FileHost, ReadMode, download_io, extension_from_name, read_task};
pub use phone::{PhoneValidator, normalize_phone, only_digits, possible_phone, with_prefix};
