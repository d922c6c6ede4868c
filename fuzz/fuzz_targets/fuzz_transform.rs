#![no_main]

use availability::{AnnotationConfig, LineTransformer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 is rejected before transforming, so skip it here too
    if let Ok(input) = std::str::from_utf8(data) {
        let transformer = LineTransformer::new(&AnnotationConfig::default()).unwrap();
        let once = transformer.transform(input);
        assert_eq!(
            once.text.split('\n').count(),
            input.split('\n').count() + once.insertion_count()
        );
        let twice = transformer.transform(&once.text);
        assert_eq!(twice.text, once.text);
    }
});
