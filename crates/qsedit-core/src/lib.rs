pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod query_string;
pub mod request;
pub mod value;

pub use editor::{remove_parameters, set_parameters, QueryStringEditor};
pub use error::QsError;
pub use query_string::QueryString;
pub use value::QueryValue;
