mod errors;
mod options;
mod service;
mod table;

pub use errors::{RouterError, RouterResult};
pub use options::{
    DEFAULT_MAX_SEGMENT_LENGTH, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
pub use table::RouteTable;
