//! True-random client for truedice.
//!
//! Requests random integers, sequences (permutations), and fixed-length
//! strings from random.org over blocking HTTP, and generates equivalent
//! values locally when the remote quota is exhausted or the source is
//! configured offline.

pub mod config;
pub mod error;
pub mod pseudo;
pub mod quota;
pub mod request;
pub mod result;
pub mod source;
pub mod transport;
pub mod url;

pub use config::SourceConfig;
pub use error::{RequestError, RequestResult};
pub use quota::Quota;
pub use request::{Base, Format, Randomization, RandomRequest, RequestKind};
pub use result::{Origin, RandomResult, Status, Value};
pub use source::{FALLBACK_ALERT, RandomSource};
pub use transport::{HttpResponse, OfflineTransport, ReqwestTransport, Transport, TransportError};
