//! End-to-end container decoding scenarios.
//!
//! Each test hand-assembles a complete container and checks the decoded
//! bytes (or the rejection) against values worked out on paper, covering:
//!
//! - literal, short-run, and sequence-run RLE containers
//! - a minimal VLE container and the canonical-code bit layout
//! - pass chaining (RLE output consumed as a VLE container)
//! - malformed containers that must fail without partial output

use stunpack::{decompress, DecompressError};

// ═════════════════════════════════════════════════════════════════════════════
// Literal RLE container
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn literal_rle_container() {
    // Single pass, RLE, 3 bytes; empty escape table with the
    // no-sequence-runs flag; three literal zero bytes follow.
    let container = [
        0x01, 0x03, 0x00, 0x00, // tag + sub_file_size
        0x00, 0x00, 0x00, 0x00, // reserved
        0x80, // escape_length: no sequence runs, zero escapes
        0x00, 0x00, 0x00, // literals
    ];
    assert_eq!(decompress(&container).unwrap(), vec![0x00, 0x00, 0x00]);
}

// ═════════════════════════════════════════════════════════════════════════════
// Short-run RLE container
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn short_run_rle_container() {
    // One escape code 0xAA (index 1 = short run): "AA 05 42" emits the
    // value 0x42 five times.
    let container = [
        0x01, 0x05, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x81, 0xAA, // one escape, no sequence runs
        0xAA, 0x05, 0x42, // short run: five 0x42 bytes
    ];
    assert_eq!(decompress(&container).unwrap(), vec![0x42; 5]);
}

// ═════════════════════════════════════════════════════════════════════════════
// Sequence-run RLE container
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sequence_run_rle_container() {
    // Escapes 0x7E and 0x7F; the second is the sequence bracket.  The unit
    // 01 02 03 is emitted once inline and repeated three more times.
    let container = [
        0x01, 0x0C, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x02, 0x7E, 0x7F, // two escapes, sequence runs enabled
        0x7F, 0x01, 0x02, 0x03, 0x7F, 0x04,
    ];
    assert_eq!(
        decompress(&container).unwrap(),
        vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3]
    );
}

// ═════════════════════════════════════════════════════════════════════════════
// Minimal VLE container
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn minimal_vle_container() {
    // One width slot with two codes: bit 0 → 'A', bit 1 → 'B'.  The stream
    // 0x40 0x00 begins 0100…, so the four decoded symbols read "A B A A".
    let container = [
        0x02, 0x04, 0x00, 0x00, // tag + sub_file_size
        0x81, 0x02, // widths_lengths, count
        0x41, 0x42, // alphabet "AB"
        0x40, 0x00, // code stream
    ];
    assert_eq!(decompress(&container).unwrap(), b"ABAA");
}

// ═════════════════════════════════════════════════════════════════════════════
// Pass chaining
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn two_pass_container_chains_rle_into_vle() {
    // Pass 1: RLE with no escapes reproduces a 16-byte buffer verbatim.
    // That buffer is itself a complete VLE pass (tag + size + header +
    // stream) declaring 32 output bytes, which pass 2 then decodes.
    let inner_vle: Vec<u8> = {
        let mut v = vec![0x02, 0x20, 0x00, 0x00]; // VLE, 32 bytes
        v.extend_from_slice(&[0x82, 0x01, 0x02]); // two width slots: 1 + 2 codes
        v.extend_from_slice(b"ABC");
        // The bit group 010 repeated: codes '0' (A) and '10' (B) alternate.
        v.extend_from_slice(&[0x49, 0x24, 0x92, 0x49, 0x24, 0x92]);
        v
    };
    assert_eq!(inner_vle.len(), 16);

    let mut container = vec![0x82, 0x00, 0x00, 0x00]; // two passes + reserved
    container.extend_from_slice(&[0x01, 0x10, 0x00, 0x00]); // RLE, 16 bytes
    container.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x80]);
    container.extend_from_slice(&inner_vle);

    let out = decompress(&container).unwrap();
    assert_eq!(out.len(), 32);
    assert_eq!(out, b"AB".repeat(16));
}

#[test]
fn single_pass_multi_form_equals_plain_form() {
    // The same RLE pass wrapped in both container forms decodes alike.
    let pass = [
        0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x10, 0x20,
    ];
    let mut multi = vec![0x81, 0x00, 0x00, 0x00];
    multi.extend_from_slice(&pass);

    assert_eq!(decompress(&pass).unwrap(), decompress(&multi).unwrap());
}

// ═════════════════════════════════════════════════════════════════════════════
// Malformed containers
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn underfull_rle_stream_yields_no_partial_output() {
    // Declares 1000 output bytes but supplies only 500 literals.
    let mut container = vec![0x01, 0xE8, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80];
    container.extend_from_slice(&[0x00; 500]);

    assert_eq!(
        decompress(&container),
        Err(DecompressError::UnderflowOutput)
    );
}

#[test]
fn bad_algorithm_tag_is_rejected() {
    let container = [0x04, 0x01, 0x00, 0x00, 0x00];
    assert_eq!(
        decompress(&container),
        Err(DecompressError::BadAlgorithmTag(0x04))
    );
}

#[test]
fn overfull_rle_escape_table_is_rejected() {
    // Eleven escape codes exceed the format's maximum of ten.
    let mut container = vec![0x01, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8B];
    container.extend_from_slice(&[0xF0; 11]);
    assert_eq!(
        decompress(&container),
        Err(DecompressError::BadRleEscapeTable)
    );
}

#[test]
fn vle_header_without_high_bit_is_rejected() {
    let container = [0x02, 0x01, 0x00, 0x00, 0x01, 0x02];
    assert_eq!(decompress(&container), Err(DecompressError::BadVleHeader));
}

#[test]
fn failing_pass_discards_earlier_pass_output() {
    // Pass 1 succeeds; pass 2 sees an unknown tag.  The caller observes a
    // single failure with no intermediate buffer exposed.
    let mut container = vec![0x82, 0x00, 0x00, 0x00];
    container.extend_from_slice(&[0x01, 0x01, 0x00, 0x00]); // RLE, 1 byte
    container.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x80, 0x7F]);
    assert!(decompress(&container).is_err());
}

// ═════════════════════════════════════════════════════════════════════════════
// File-level round trip
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn file_round_trip_through_io_layer() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("scene.pvs");
    let dst = dir.path().join("scene.bin");

    let container = [
        0x01, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81, 0xAA, 0xAA, 0x05, 0x42,
    ];
    std::fs::write(&src, container).unwrap();

    let stats =
        stunpack::decompress_filename(src.to_str().unwrap(), dst.to_str().unwrap()).unwrap();
    assert_eq!(stats.decompressed_bytes, 5);
    assert_eq!(std::fs::read(&dst).unwrap(), vec![0x42; 5]);
}
