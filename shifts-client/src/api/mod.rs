//! Resource API modules
//!
//! One function per REST operation. Each call issues exactly one request
//! and hands the envelope back untouched; checking `code` is up to the
//! caller (usually a store).

pub mod guest;
pub mod meal;
pub mod staff;
pub mod user;

/// Item path: `{base}/{id}/`
pub(crate) fn detail_path(base: &str, id: i64) -> String {
    format!("{}/{}/", base.trim_end_matches('/'), id)
}
