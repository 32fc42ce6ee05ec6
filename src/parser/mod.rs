//! Component 1 – raw save bytes in, [`SaveState`] out.
//!
//! Save layout:
//!
//!   [ 25-byte header ][ base64 text of AES-256-ECB ciphertext ][ 1-byte sentinel ]
//!
//! The plaintext is a UTF-8 JSON document.
pub mod catalog;
pub mod cipher;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use log::debug;

use crate::error::DecodeError;
use crate::model::SaveState;

pub const HEADER_LEN: usize = 25;
pub const FOOTER_LEN: usize = 1;

/// Extracted from the game binaries; identical for every player.
pub const SAVE_KEY: &[u8; 32] = b"UKu52ePUBwetZ9wNX88o54dnfKRu0T1l";

/// Decode a whole save file.
pub fn decode(raw: &[u8]) -> Result<SaveState, DecodeError> {
    let plain = decrypt_payload(raw)?;
    let json = String::from_utf8(plain)?;
    debug!("decrypted save: {} bytes of JSON", json.len());
    Ok(SaveState::from_json(&json)?)
}

/// Everything up to (but excluding) the JSON parse.
pub fn decrypt_payload(raw: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let payload = strip_envelope(raw)?;
    debug!(
        "save file {} bytes, base64 payload {} bytes",
        raw.len(),
        payload.len()
    );

    let sealed = BASE64_ENGINE.decode(carrier_text(payload))?;
    debug!("ciphertext {} bytes", sealed.len());

    cipher::decrypt(sealed, SAVE_KEY)
}

fn strip_envelope(raw: &[u8]) -> Result<&[u8], DecodeError> {
    let min = HEADER_LEN + FOOTER_LEN;
    if raw.len() < min {
        return Err(DecodeError::TooShort { len: raw.len(), min });
    }
    Ok(&raw[HEADER_LEN..raw.len() - FOOTER_LEN])
}

/// Each byte becomes the char with the same code point (latin-1), not a
/// UTF-8 decode. Anything outside the base64 alphabet then fails in the
/// base64 step rather than here.
fn carrier_text(payload: &[u8]) -> String {
    payload.iter().copied().map(char::from).collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Wrap `plain` the way the game does.
    pub(crate) fn seal(plain: &[u8]) -> Vec<u8> {
        let mut raw: Vec<u8> = (0..HEADER_LEN as u8).map(|b| b.wrapping_mul(37)).collect();
        let body = BASE64_ENGINE.encode(cipher::encrypt(plain, SAVE_KEY));
        raw.extend_from_slice(body.as_bytes());
        raw.push(0x0B);
        raw
    }

    #[test]
    fn decode_round_trip() {
        let doc = json!({
            "playerData": {
                "completionPercentage": 42,
                "PurchasedBonebottomHeartPiece": true,
                "QuestCompletionData": { "savedData": [
                    { "Name": "Beastfly Hunt", "Data": { "IsCompleted": true } }
                ]}
            },
            "sceneData": { "persistentBools": { "serializedList": [
                { "SceneName": "Crawl_02", "ID": "Heart Piece", "Value": true }
            ]}},
            "note": "ünïcødé survives"
        });
        let raw = seal(doc.to_string().as_bytes());

        let save = decode(&raw).expect("decode");
        assert_eq!(save.raw(), &doc);
    }

    #[test]
    fn header_and_footer_content_is_ignored() {
        let plain = br#"{"playerData":{}}"#;
        let mut raw = seal(plain);
        raw[..HEADER_LEN].fill(0xFF);
        let last = raw.len() - 1;
        raw[last] = b'!';

        assert_eq!(decrypt_payload(&raw).unwrap(), plain);
    }

    #[test]
    fn too_short() {
        let err = decode(&[0u8; HEADER_LEN]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TooShort { len: 25, min: 26 }
        ));
    }

    #[test]
    fn envelope_only_has_no_ciphertext() {
        let err = decode(&[b'A'; HEADER_LEN + FOOTER_LEN]).unwrap_err();
        assert!(matches!(err, DecodeError::CiphertextLength(0)), "{err}");
    }

    #[test]
    fn high_bytes_are_not_base64() {
        let mut raw = seal(b"{}");
        raw[HEADER_LEN] = 0xC3;
        assert!(matches!(decode(&raw), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn non_json_plaintext() {
        let raw = seal(b"definitely not json");
        assert!(matches!(decode(&raw), Err(DecodeError::Json(_))));
    }

    #[test]
    fn non_utf8_plaintext() {
        let raw = seal(&[0x7B, 0xFF, 0xFE, 0x7D]);
        assert!(matches!(decode(&raw), Err(DecodeError::Utf8(_))));
    }

    #[test]
    fn carrier_maps_bytes_to_code_points() {
        assert_eq!(carrier_text(b"QUJD"), "QUJD");
        assert_eq!(carrier_text(&[0xE9]), "\u{e9}");
    }
}
