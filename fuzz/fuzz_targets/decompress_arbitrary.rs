#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the container decoder.
    // Err results are expected and fine; what we verify is no panics,
    // no out-of-bounds access, and no runaway allocation: the output
    // size of every pass is bounded by the 24-bit length field.
    let _ = stunpack::decompress(data);
});
