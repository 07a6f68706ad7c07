// Adapters layer: concrete implementations of the domain ports (http, storage, document).

pub mod document;
pub mod http;
pub mod storage;
