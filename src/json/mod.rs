mod error;
mod kind;
mod number;
mod options;
mod path;
mod value;

/// Error and result aliases.
pub use error::{JsonError, Result};
/// Value kind tag.
pub use kind::Kind;
/// Decoder and encoder settings.
pub use options::{ReadOptions, WriteOptions};
/// Path component and textual path types.
pub use path::{JsonPath, PathStep};
/// The value wrapper and its child iterator.
pub use value::{Iter, JsonValue};
