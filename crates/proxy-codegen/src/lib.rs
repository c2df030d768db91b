//! C# client proxy generation from api description models.
//!
//! Turns controllers of an [`ApiDescriptionModel`](proxy_gen_core::ApiDescriptionModel)
//! into strongly-typed proxy classes using Handlebars templates.
//!
//! # Architecture
//!
//! - [`type_name`]: parses qualified type names and collects imports
//! - [`method`]: emits one proxy method per action
//! - [`composer`]: eligibility rules and whole-file rendering
//! - [`template_engine`]: the Handlebars wrapper holding the C# templates

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod composer;
pub mod consts;
pub mod method;
pub mod template_engine;
pub mod type_name;
pub mod types;

pub use composer::{ComposedProxy, ProxyFileComposer};
pub use method::{MethodKind, ProxyMethod, ProxyParameter};
pub use type_name::{ImportSet, TypeName};
pub use types::{GeneratedFile, ProxyClass, ProxyFile};
