//! Current calendar date.
//!
//! Under `hydrate` the `time` crate reads the browser clock through
//! `wasm-bindgen`; under SSR and tests it reads the system clock.

use time::{Date, OffsetDateTime};

/// Today's date in UTC.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}
