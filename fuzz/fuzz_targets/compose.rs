#![no_main]

use fixedwidth::{
    layout::parse_position,
    writer::{char_count, fit},
    ContentClass,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&width, raw)) = data.split_first() else {
        return;
    };
    let width = usize::from(width % 64);

    let text = fit(raw, ContentClass::Text, Some(width));
    assert_eq!(char_count(text.bytes) + text.filler, width);
    if std::str::from_utf8(raw).is_ok() {
        assert!(std::str::from_utf8(text.bytes).is_ok());
    }

    let number = fit(raw, ContentClass::Numeric, Some(width));
    assert_eq!(number.bytes, raw);

    if let Ok(tag) = std::str::from_utf8(raw) {
        let _ = parse_position(tag);
    }
});
