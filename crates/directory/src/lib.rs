//! Customer search capabilities for the typeahead resolver.
//!
//! * [`CustomerDirectory`]: in-memory records searched with the backend's
//!   quick-search rules. Used offline and in tests.
//! * [`HttpCustomerSearch`]: the backend's `GET /api/v1/customers/search`.

mod error;
mod http;
mod memory;

pub use error::DirectoryError;
pub use http::{HttpCustomerSearch, REQUEST_TIMEOUT, SEARCH_PATH};
pub use memory::{CustomerDirectory, DirectoryRecord, SEARCH_LIMIT, SEARCH_MIN_CHARS};
