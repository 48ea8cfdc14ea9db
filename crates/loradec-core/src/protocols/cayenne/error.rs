use thiserror::Error;

use crate::codec::CodecError;

#[derive(Debug, Error)]
pub enum CayenneError {
    #[error("unknown sensor type code: {code}")]
    UnknownType { code: u8 },
    #[error("payload truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },
    #[error(transparent)]
    Codec(#[from] CodecError),
}
