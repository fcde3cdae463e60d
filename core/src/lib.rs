//! Synchronous client core for a path-structured REST API.
//!
//! # Overview
//! Resources are addressed by chaining path segments off a root handle:
//! `root.child("sale").child("offers")` resolves to `<base>/sale/offers`.
//! A verb call on any node builds a [`RequestSpec`] and hands it to the
//! [`Dispatcher`], which resolves credentials, merges headers, encodes the
//! payload and executes the request through an injected [`HttpTransport`].
//!
//! # Design
//! - [`Resource`] is an immutable handle over a parent-linked node chain;
//!   URIs are derived by walking to the root, never stored.
//! - All I/O lives behind the [`HttpTransport`] and [`CredentialProvider`]
//!   traits, keeping the core deterministic and testable without a network.
//! - Non-2xx responses are data, not errors: the transport surfaces error
//!   bodies unchanged and status interpretation belongs to the caller.
//! - Types use owned `String` / `Vec` fields so requests and responses can
//!   cross thread boundaries without lifetime concerns.

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod headers;
pub mod http;
pub mod resource;

pub use auth::{CredentialProvider, StaticCredentials};
pub use dispatch::{Dispatcher, Params, RequestSpec};
pub use error::{ClientError, ConstructionError, CredentialError, TransportError};
pub use headers::{HeaderSet, MEDIA_TYPE};
pub use http::{HttpRequest, HttpResponse, HttpTransport, Method};
pub use resource::Resource;
