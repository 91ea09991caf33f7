#![no_main]
use libfuzzer_sys::fuzz_target;
use patlog::fmt::ValueFormat;

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let format = ValueFormat::parse(data);
    let _ = format.format_str("INFO");
    let _ = format.format_uint(u64::from(u32::MAX));
});
