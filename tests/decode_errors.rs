use silk_ledger::error::DecodeError;
use silk_ledger::parser::{FOOTER_LEN, HEADER_LEN, decode};

fn wrap(body: &[u8]) -> Vec<u8> {
    let mut raw = vec![0u8; HEADER_LEN];
    raw.extend_from_slice(body);
    raw.extend(std::iter::repeat_n(0x0B, FOOTER_LEN));
    raw
}

#[test]
fn empty_file() {
    assert!(matches!(decode(&[]), Err(DecodeError::TooShort { len: 0, .. })));
}

#[test]
fn payload_is_not_base64() {
    assert!(matches!(decode(&wrap(b"not*base64")), Err(DecodeError::Base64(_))));
}

#[test]
fn ciphertext_not_block_aligned() {
    // "AAAAAAA=" decodes to 5 bytes
    assert!(matches!(
        decode(&wrap(b"AAAAAAA=")),
        Err(DecodeError::CiphertextLength(5))
    ));
}

#[test]
fn errors_read_as_user_messages() {
    let err = decode(&[1, 2, 3]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "save file too short: 3 bytes, envelope alone needs 26"
    );
}
