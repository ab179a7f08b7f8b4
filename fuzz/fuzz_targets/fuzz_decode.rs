#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Cap allocations so hostile headers can't OOM the fuzzer
    let limits = zenrsb::Limits {
        max_memory_bytes: Some(64 * 1024 * 1024),
        ..Default::default()
    };

    // Slice and reader front-ends must never panic and must agree
    let from_slice = zenrsb::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
    let from_reader =
        zenrsb::decode_reader_with_limits(data, Some(&limits), enough::Unstoppable);

    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a.pixels(), b.pixels());
            assert_eq!(a.pixels().len(), a.width as usize * a.height as usize * 4);
        }
        (Err(_), Err(_)) => {}
        (a, b) => panic!("front-ends disagree: {a:?} vs {b:?}"),
    }
});
