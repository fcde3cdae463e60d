//! The fluent resource-path tree.
//!
//! # Design
//! A [`Resource`] is a cheap cloneable handle over a parent-linked chain of
//! immutable nodes. Children are only created by descending from an
//! existing node, never by back-reference, so the chain to the root is
//! acyclic and finite. The full URI is derived on demand by walking to the
//! root; the dispatcher lives on the root node and is found the same way.

use std::fmt;
use std::sync::Arc;

use crate::auth::CredentialProvider;
use crate::dispatch::{Dispatcher, Params, RequestSpec};
use crate::error::{ClientError, ConstructionError};
use crate::http::{HttpResponse, HttpTransport, Method};

enum Node {
    Root {
        base_url: String,
        dispatcher: Dispatcher,
    },
    Child {
        segment: String,
        parent: Arc<Node>,
    },
}

impl Node {
    fn uri(&self) -> String {
        match self {
            Node::Root { base_url, .. } => base_url.clone(),
            Node::Child { segment, parent } => format!("{}/{}", parent.uri(), segment),
        }
    }

    fn dispatcher(&self) -> &Dispatcher {
        match self {
            Node::Root { dispatcher, .. } => dispatcher,
            Node::Child { parent, .. } => parent.dispatcher(),
        }
    }
}

/// One position in the resource tree.
///
/// Obtained from [`Resource::root`] and extended with [`Resource::child`]
/// and [`Resource::collection_item`]; any node can issue requests through
/// the verb methods. Nodes are never mutated after construction, so clones
/// and children never interfere with each other.
#[derive(Clone)]
pub struct Resource {
    node: Arc<Node>,
}

impl Resource {
    /// Root of a resource tree. `base_url` is used verbatim as the URI
    /// prefix, minus any trailing slash.
    pub fn root(
        base_url: &str,
        credentials: Arc<dyn CredentialProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            node: Arc::new(Node::Root {
                base_url: base_url.trim_end_matches('/').to_string(),
                dispatcher: Dispatcher::new(credentials, transport),
            }),
        }
    }

    /// Descend one path segment. Pure construction; any name is accepted.
    pub fn child(&self, name: &str) -> Resource {
        Resource {
            node: Arc::new(Node::Child {
                segment: name.to_string(),
                parent: Arc::clone(&self.node),
            }),
        }
    }

    /// Address one item inside the sub-collection `name`, two segments
    /// deep: from a `/sale` node, `collection_item("offers", Some("123"))`
    /// resolves to `/sale/offers/123`. Addressing a collection without an
    /// id is a construction error, never a malformed URI.
    pub fn collection_item(
        &self,
        name: &str,
        id: Option<&str>,
    ) -> Result<Resource, ConstructionError> {
        let collection = self.child(name);
        match id {
            None => Err(ConstructionError::MissingId(name.to_string())),
            Some("") => Err(ConstructionError::EmptyId(name.to_string())),
            Some(id) => Ok(collection.child(id)),
        }
    }

    /// The full URI of this node: the base URL joined with every segment on
    /// the path from the root.
    pub fn resolve(&self) -> String {
        self.node.uri()
    }

    /// GET this resource. `query`, if present, is URL-encoded into the
    /// query string; the request carries no body.
    pub fn get(
        &self,
        query: Option<&Params>,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse, ClientError> {
        self.send(Method::Get, query.cloned(), extra_headers)
    }

    /// PUT `body` to this resource. An empty mapping serializes to `{}`.
    pub fn put(
        &self,
        body: &Params,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse, ClientError> {
        self.send(Method::Put, Some(body.clone()), extra_headers)
    }

    /// POST `body` to this resource. An empty mapping serializes to `{}`.
    pub fn post(
        &self,
        body: &Params,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse, ClientError> {
        self.send(Method::Post, Some(body.clone()), extra_headers)
    }

    /// DELETE this resource. `query` behaves exactly as in
    /// [`Resource::get`].
    pub fn delete(
        &self,
        query: Option<&Params>,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse, ClientError> {
        self.send(Method::Delete, query.cloned(), extra_headers)
    }

    fn send(
        &self,
        method: Method,
        data: Option<Params>,
        extra_headers: &[(&str, &str)],
    ) -> Result<HttpResponse, ClientError> {
        let spec = RequestSpec {
            method,
            uri: self.resolve(),
            data,
            extra_headers: extra_headers
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        };
        self.node.dispatcher().send(&spec)
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("uri", &self.resolve())
            .finish()
    }
}
