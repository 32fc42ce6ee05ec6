use thiserror::Error;

/// Any failure while turning raw save bytes into a [`crate::model::SaveState`].
///
/// Decoding is all-or-nothing; none of these carry partial results.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("save file too short: {len} bytes, envelope alone needs {min}")]
    TooShort { len: usize, min: usize },

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("ciphertext length {0} is not a multiple of the AES block size")]
    CiphertextLength(usize),

    #[error("bad PKCS7 padding (wrong key or corrupt ciphertext)")]
    Padding,

    #[error("decrypted payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("decrypted payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Catalog authoring mistakes. These indicate a catalog/evaluator mismatch,
/// never bad user input.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown parsingInfo type `{tag}`")]
    UnknownParsingInfo { tag: String },

    #[error("parsingInfo has no string `type` field")]
    MissingTag,

    #[error("malformed `{tag}` parsingInfo: {source}")]
    MalformedParsingInfo {
        tag: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("primary category `{category}` has no scoring rule")]
    MissingScoring { category: String },

    #[error("supporting category `{category}` must not carry a scoring rule")]
    UnexpectedScoring { category: String },

    #[error("category `{category}` divides by zero")]
    ZeroDivisor { category: String },

    #[error("item `{item}` has act {act}, expected 0..=3")]
    InvalidAct { item: String, act: u8 },

    #[error("catalog is not valid JSON: {0}")]
    Catalog(#[from] serde_json::Error),
}
