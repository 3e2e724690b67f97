//! Tests for error paths and edge cases

use tx_decoder::*;

fn simple_tx_bytes() -> Vec<u8> {
    let mut bytes = vec![1, 0, 0, 0, 1];
    bytes.extend_from_slice(&[0u8; 32]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&[3, 0xaa, 0xbb, 0xcc]);
    bytes.extend_from_slice(&[0xff; 4]);
    bytes.push(1);
    bytes.extend_from_slice(&100_000_000u64.to_le_bytes());
    bytes.push(0);
    bytes
}

#[test]
fn test_empty_buffer() {
    let err = TransactionDecoder::new().decode(&[]).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnexpectedEndOfBuffer {
            offset: 0,
            needed: 4,
            remaining: 0,
        }
    );
}

#[test]
fn test_truncated_mid_script() {
    let bytes = simple_tx_bytes();
    // version(4) + count(1) + hash(32) + index(4) + len(1) + one script byte
    let truncated = &bytes[..43];

    let err = TransactionDecoder::new().decode(truncated).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnexpectedEndOfBuffer {
            offset: 42,
            needed: 3,
            remaining: 1,
        }
    );
}

#[test]
fn test_every_truncation_fails() {
    let bytes = simple_tx_bytes();
    let decoder = TransactionDecoder::new();

    for len in 0..bytes.len() {
        let err = decoder.decode(&bytes[..len]).unwrap_err();
        assert!(
            matches!(err, DecodeError::UnexpectedEndOfBuffer { .. }),
            "prefix of {} bytes gave {:?}",
            len,
            err
        );
    }
}

#[test]
fn test_script_length_exceeds_buffer() {
    let mut bytes = vec![1, 0, 0, 0, 1];
    bytes.extend_from_slice(&[0u8; 36]);
    // claims a 0xffff-byte script
    bytes.extend_from_slice(&[0xfd, 0xff, 0xff]);
    bytes.extend_from_slice(&[0x51; 10]);

    let err = TransactionDecoder::new().decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnexpectedEndOfBuffer {
            offset: 44,
            needed: 0xffff,
            remaining: 10,
        }
    );
}

#[test]
fn test_varint_count_above_precision_ceiling() {
    let mut bytes = vec![1, 0, 0, 0, 0xff];
    bytes.extend_from_slice(&u64::MAX.to_le_bytes());

    let err = TransactionDecoder::new().decode(&bytes).unwrap_err();
    assert_eq!(
        err,
        DecodeError::IntegerPrecisionOverflow {
            value: u64::MAX,
            ceiling: MAX_SAFE_INTEGER,
        }
    );
}

#[test]
fn test_native_ceiling_reaches_end_of_buffer_instead() {
    let mut bytes = vec![1, 0, 0, 0, 0xff];
    bytes.extend_from_slice(&u64::MAX.to_le_bytes());

    let decoder = TransactionDecoder::with_config(DecoderConfig::native());
    let err = decoder.decode(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedEndOfBuffer { offset: 13, .. }));
}

#[test]
fn test_output_amount_above_precision_ceiling() {
    let mut bytes = vec![1, 0, 0, 0, 0, 1];
    bytes.extend_from_slice(&(MAX_SAFE_INTEGER + 1).to_le_bytes());
    bytes.push(0);

    let err = TransactionDecoder::new().decode(&bytes).unwrap_err();
    assert!(matches!(err, DecodeError::IntegerPrecisionOverflow { .. }));

    let native = TransactionDecoder::with_config(DecoderConfig::native());
    assert_eq!(native.decode(&bytes).unwrap().outputs[0].amount, MAX_SAFE_INTEGER + 1);
}

#[test]
fn test_malformed_hex() {
    let decoder = TransactionDecoder::new();

    assert!(matches!(decoder.decode_hex("010"), Err(DecodeError::MalformedInput(_))));
    assert!(matches!(decoder.decode_hex("01000000xx"), Err(DecodeError::MalformedInput(_))));
    assert!(matches!(decoder.decode_hex(""), Err(DecodeError::UnexpectedEndOfBuffer { .. })));
}

#[test]
fn test_script_size_limit() {
    let config = DecoderConfig {
        max_script_size: Some(2),
        ..DecoderConfig::default()
    };
    let err = TransactionDecoder::with_config(config)
        .decode(&simple_tx_bytes())
        .unwrap_err();
    assert_eq!(err, DecodeError::ScriptTooLarge { length: 3, limit: 2 });
}

#[test]
fn test_error_messages() {
    let err = DecodeError::UnexpectedEndOfBuffer {
        offset: 5,
        needed: 32,
        remaining: 1,
    };
    assert!(err.to_string().contains("offset 5"));

    let err = DecodeError::IntegerPrecisionOverflow {
        value: 1 << 60,
        ceiling: MAX_SAFE_INTEGER,
    };
    assert!(err.to_string().contains("precision"));
}
