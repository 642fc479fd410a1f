#![no_main]
use huffman::encode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let encoded = encode(&data).unwrap();
    assert!(encoded.tree().symbol_count() <= 256);
    assert!(encoded.stream().len() >= data.len());
    assert_eq!(encoded.decode().unwrap(), data);
});
