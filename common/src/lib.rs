//! Accident Detect Common Library
//!
//! CLIとWeb(WASM)で共有されるアップロード処理の型とロジック

pub mod types;
pub mod endpoint;
pub mod error;
pub mod upload;

pub use types::{ServiceBody, ServerReply, TransportFailure};
pub use endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use upload::{
    Completion, Detection, DisplayedImage, RequestState, UploadClient, UploadError,
    DEFAULT_FAILURE_NOTICE, NO_DETECTION_TEXT, NO_FILE_NOTICE, NO_RESPONSE_NOTICE,
};
