pub mod request_counter;

pub use request_counter::{RequestCountMetrics, REQUEST_COUNT_METRIC};
