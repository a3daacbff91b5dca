//! Utility modules.

/// Log sanitization utilities to keep credentials out of logs.
pub mod log_sanitizer;

/// Reading, embedding and stripping URL user-info.
pub mod user_info;
