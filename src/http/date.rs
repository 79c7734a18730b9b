//! HTTP timestamps and file times.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Formats a timestamp as `Day, D Mon YYYY HH:MM:SS GMT`.
///
/// # Example
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use lantern::http::date::format_http_date;
/// let t = UNIX_EPOCH + Duration::from_secs(784_111_777);
/// assert_eq!(format_http_date(t), "Sun, 6 Nov 1994 08:49:37 GMT");
/// ```
pub fn format_http_date(time: SystemTime) -> String {
    let time: DateTime<Utc> = time.into();
    time.format("%a, %-d %b %Y %H:%M:%S GMT").to_string()
}

/// Current time as an HTTP date.
pub fn now() -> String {
    format_http_date(SystemTime::now())
}

pub fn file_modified(path: &Path) -> io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

/// Creation time of a file, or its modification time where the platform or
/// filesystem does not record one.
pub fn file_created(path: &Path) -> io::Result<SystemTime> {
    let meta = fs::metadata(path)?;
    meta.created().or_else(|_| meta.modified())
}
