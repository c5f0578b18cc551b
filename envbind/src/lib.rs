//! Derive environment override keys from the shape of a configuration struct.
//!
//! Configuration loaders such as viper-style binders only resolve an
//! environment variable once its lookup key has been registered. `envbind`
//! walks a nested configuration struct, reads each field's tag under a
//! configurable tag name and registers the joined key (`database_url`,
//! `kafka_brokers`, ...) with a [`Binder`].
//!
//! ```
//! use envbind::{Bindable, bind};
//!
//! #[derive(Bindable, Default)]
//! pub struct Kafka {
//!     #[bind(mapstructure = "brokers")]
//!     brokers: String,
//! }
//!
//! #[derive(Bindable)]
//! pub struct Config {
//!     #[bind(mapstructure = "database_url")]
//!     database_url: String,
//!     #[bind(mapstructure = "kafka")]
//!     kafka: Option<Kafka>,
//! }
//!
//! let config = Config {
//!     database_url: "postgres://postgres@postgres/postgres".into(),
//!     kafka: None,
//! };
//!
//! let mut keys = Vec::new();
//! let mut binder = |key: &str| {
//!     keys.push(key.to_owned());
//!     Ok::<_, std::convert::Infallible>(())
//! };
//! bind(&mut binder, &config, []).unwrap();
//!
//! assert_eq!(keys, ["database_url", "kafka_brokers", "kafka"]);
//! ```
mod bind;
mod binder;
mod error;
mod options;
mod shape;

#[doc(hidden)]
#[path = "private.rs"]
pub mod __private;

pub use bind::{bind, bind_with_options, keys};
pub use binder::Binder;
pub use envbind_derive::Bindable;
pub use error::BindError;
pub use options::{
    BindOption, DEFAULT_SEPARATOR, DEFAULT_TAG_NAME, Options, with_max_depth, with_separator,
    with_tag_name,
};
pub use shape::{Bindable, Field, Opaque, Pointee, Shape};
