//! Dynamic property models over an ordered key-value store.
//!
//! A [`Model`] gains ad-hoc fields without declaring them: the dynamic entry
//! point [`Model::call`] resolves method names like `getUserName` onto the
//! store key `user_name` through the `(get|set|isset|unset)<Identifier>`
//! grammar, while the direct accessors skip name resolution entirely.
//!
//! ```
//! use dynprop::{CallOutcome, DynamicModel, Model, Value};
//!
//! let mut visitor = DynamicModel::new();
//! visitor.set("name", "Bob".into()).set("age", Value::Integer(19));
//!
//! assert_eq!(visitor.get("age"), Some(&Value::Integer(19)));
//! assert_eq!(
//!     visitor.call("getName", vec![])?,
//!     CallOutcome::Value(Some(&Value::String("Bob".to_string())))
//! );
//! # Ok::<(), dynprop::CallError>(())
//! ```

mod error;
mod method;
mod model;
mod store;
mod value;

pub use error::CallError;
pub use method::{resolve_key, MethodCall, Verb};
pub use model::{CallOutcome, DynamicModel, Model};
pub use store::{IntoIter, Iter, Store};
pub use value::Value;
