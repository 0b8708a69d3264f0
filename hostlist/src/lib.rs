//! Hostlist expressions
//!
//! Folds sets of similarly named hosts (`node001`, `node002`, ...) into a
//! compact range expression such as `node[001-002]` and expands such
//! expressions back into names.
//!
//! ```
//! let names = ["node3", "node1", "node2", "node7"];
//! assert_eq!(hostlist::collect(names), "node[1-3,7]");
//! assert_eq!(hostlist::expand("node[1-2]").unwrap(), vec!["node1", "node2"]);
//! ```

mod collect;
mod error;
mod expand;

pub use collect::collect;
pub use error::{HostlistError, Result};
pub use expand::expand;
