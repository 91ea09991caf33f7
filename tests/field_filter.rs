//! Tests for the shared field exclusion set.

use patlog::{Directive, Entry, FieldFilter, Level, Renderer};
use std::thread;

#[test]
fn empty_filter_excludes_nothing() {
    let filter = FieldFilter::default();
    assert!(!filter.is_excluded("anything"));
    assert!(filter.snapshot().is_empty());
}

#[test]
fn new_filter_excludes_named_fields() {
    let filter = FieldFilter::new(["secret", "token"]);
    assert!(filter.is_excluded("secret"));
    assert!(filter.is_excluded("token"));
    assert!(!filter.is_excluded("user"));
}

#[test]
fn replace_reaches_existing_renderers() {
    let filter = FieldFilter::new(["secret"]);
    let renderer = Renderer::new(filter.clone());
    let entry = Entry::new(Level::Info, "m")
        .field("secret", 1)
        .field("user", "ann");
    let pattern = [Directive::fields()];

    assert_eq!(renderer.render_string(&pattern, &entry), "fields[user: ann] \n");

    filter.replace(["user"]);
    assert!(renderer.filter().is_excluded("user"));
    assert_eq!(renderer.render_string(&pattern, &entry), "fields[secret: 1] \n");
}

#[test]
fn snapshot_is_unaffected_by_later_replace() {
    let filter = FieldFilter::new(["a"]);
    let before = filter.snapshot();
    filter.replace(["b"]);
    assert!(before.contains("a"));
    assert!(!before.contains("b"));
    assert!(filter.is_excluded("b"));
}

#[test]
fn concurrent_renders_see_whole_sets() {
    let filter = FieldFilter::new(["a", "b"]);
    let renderer = Renderer::new(filter.clone());
    let entry = Entry::new(Level::Info, "m")
        .field("a", 1)
        .field("b", 2)
        .field("c", 3)
        .field("d", 4);

    let writer = {
        let filter = filter.clone();
        thread::spawn(move || {
            for i in 0..200 {
                if i % 2 == 0 {
                    filter.replace(["c", "d"]);
                } else {
                    filter.replace(["a", "b"]);
                }
            }
        })
    };

    for _ in 0..200 {
        let out = renderer.render_string(&[Directive::fields()], &entry);
        assert!(
            out == "fields[c: 3, d: 4] \n" || out == "fields[a: 1, b: 2] \n",
            "torn exclusion set: {out:?}"
        );
    }
    writer.join().unwrap();
}
