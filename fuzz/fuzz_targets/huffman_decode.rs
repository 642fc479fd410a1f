#![no_main]
use huffman::{Error, HuffmanDecoder, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (symbols, raw_bits) = data;
    let decoder = HuffmanDecoder::new(HuffmanTree::from_symbols(&symbols));

    // Map onto {0, 1, 2} so invalid bit values show up too.
    let bits: Vec<u8> = raw_bits.iter().map(|&b| b % 3).collect();
    match decoder.decode(&bits) {
        Ok(out) => assert!(out.iter().all(|s| symbols.contains(s))),
        Err(Error::InvalidBit { value, .. }) => assert_eq!(value, 2),
        Err(Error::TruncatedStream { pending }) => assert!(pending > 0),
        Err(Error::UnknownCode { position }) => assert!(position < bits.len()),
        Err(e) => panic!("unexpected error: {}", e),
    }
});
