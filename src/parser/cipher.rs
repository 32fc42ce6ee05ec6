//! AES-256 in ECB mode with PKCS7 padding, the way the game stores saves.

use aes::{
    Aes256,
    cipher::{BlockDecrypt, KeyInit, generic_array::GenericArray},
};

use crate::error::DecodeError;

pub const BLOCK_LEN: usize = 16;

/// Decrypts `data` with `key` and strips the padding.
pub fn decrypt(mut data: Vec<u8>, key: &[u8; 32]) -> Result<Vec<u8>, DecodeError> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(DecodeError::CiphertextLength(data.len()));
    }
    aes_ecb_decrypt(&mut data, key);
    let plain_len = pkcs7_unpadded_len(&data)?;
    data.truncate(plain_len);
    Ok(data)
}

#[allow(deprecated)]
fn aes_ecb_decrypt(data: &mut [u8], key: &[u8; 32]) {
    let cipher = Aes256::new(key.into());
    for chunk in data.chunks_exact_mut(BLOCK_LEN) {
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
    }
}

fn pkcs7_unpadded_len(data: &[u8]) -> Result<usize, DecodeError> {
    let pad = *data.last().ok_or(DecodeError::Padding)? as usize;
    if pad == 0 || pad > BLOCK_LEN || pad > data.len() {
        return Err(DecodeError::Padding);
    }
    if data[data.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(DecodeError::Padding);
    }
    Ok(data.len() - pad)
}

/// Test-only inverse of [`decrypt`]; the crate never writes saves.
#[cfg(test)]
pub(crate) fn encrypt(plain: &[u8], key: &[u8; 32]) -> Vec<u8> {
    let pad = BLOCK_LEN - plain.len() % BLOCK_LEN;
    let mut data = plain.to_vec();
    data.extend(std::iter::repeat_n(pad as u8, pad));
    encrypt_blocks(&mut data, key);
    data
}

#[cfg(test)]
#[allow(deprecated)]
fn encrypt_blocks(data: &mut [u8], key: &[u8; 32]) {
    use aes::cipher::BlockEncrypt;

    let cipher = Aes256::new(key.into());
    for chunk in data.chunks_exact_mut(BLOCK_LEN) {
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
    }
}
