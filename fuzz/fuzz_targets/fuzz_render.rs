#![no_main]
use libfuzzer_sys::fuzz_target;
use patlog::{Directive, DirectiveKind, Entry, Level, Renderer};

fuzz_target!(|data: &str| {
    // Every kind fed the same arbitrary format must still yield one terminated line
    let directives: Vec<_> = DirectiveKind::ALL
        .iter()
        .map(|kind| Directive::new(*kind, data))
        .collect();
    let entry = Entry::new(Level::Warn, data)
        .location(data, 42)
        .field(data, data);
    let out = Renderer::default().render(&directives, &entry);
    assert_eq!(out.last(), Some(&b'\n'));
});
