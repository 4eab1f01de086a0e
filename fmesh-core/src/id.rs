//! Typed name wrappers for components, ports, and meshes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed name wrappers prevent mixing up component names, port names, and
/// mesh names. These are just strings underneath — no format requirement,
/// no uniqueness enforcement at the type level (uniqueness is a runtime
/// invariant, checked during validation).
macro_rules! typed_name {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new typed name from anything that converts to String.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

typed_name!(ComponentName, "Unique identifier for a component within a mesh.");
typed_name!(PortName, "Unique identifier for a port within a component.");
typed_name!(MeshName, "Identifier for a mesh (not required to be unique).");
