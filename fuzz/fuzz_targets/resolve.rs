#![no_main]
use libfuzzer_sys::fuzz_target;
use urijoin::{remove_dot_segments, UriComponents};
use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        let normalized = remove_dot_segments(s);
        assert_eq!(remove_dot_segments(&normalized), normalized);

        for base in ["http://a/b/c/d;p?q", "//a/b/c/d;p?q", "http://a", "file:foo"] {
            let base = UriComponents::parse(base);
            let resolved = base.resolve(s);

            let reparsed = UriComponents::parse(resolved.as_str());
            assert_eq!(reparsed.scheme(), resolved.scheme());
            assert_eq!(reparsed.authority(), resolved.authority());
            assert_eq!(reparsed.path(), resolved.path());
            assert_eq!(reparsed.query(), resolved.query());
            assert_eq!(reparsed.fragment(), resolved.fragment());

            let reference = UriComponents::parse(s);
            if reference.is_absolute() {
                assert_eq!(resolved, s);
            } else if reference.authority().is_none() && !reference.path().is_empty() {
                let path = resolved.path();
                // "/." keeps a path starting with "//" from being read as an authority
                let path = match path.strip_prefix("/.") {
                    Some(rest) if rest.starts_with("//") => rest,
                    _ => path,
                };
                assert!(path
                    .split('/')
                    .all(|segment| segment != "." && segment != ".."));
            }
        }
    }
});
