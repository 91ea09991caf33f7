#![no_main]
use chrono::{DateTime, Utc};
use libfuzzer_sys::fuzz_target;
use patlog::fmt::TimeLayout;

fuzz_target!(|data: &str| {
    // Must not panic on any layout string
    let layout = TimeLayout::parse(data);
    let _ = layout.format(&DateTime::<Utc>::UNIX_EPOCH);
});
