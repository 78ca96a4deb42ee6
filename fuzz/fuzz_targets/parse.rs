#![no_main]
use libfuzzer_sys::fuzz_target;
use urijoin::UriComponents;
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        let uri = UriComponents::parse(s);
        let rebuilt = UriComponents::from_parts(
            uri.scheme(),
            uri.authority(),
            uri.path(),
            uri.query(),
            uri.fragment(),
        );
        assert_eq!(rebuilt, s);
        let _ = uri.validate();
    }
});
