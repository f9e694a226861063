// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-name to descriptor lookup.
//!
//! The facade only needs [`TypeRegistry::lookup`]; how names get mapped to
//! descriptors is up to the embedding runtime. [`HashMapTypeRegistry`] is the
//! plain in-memory implementation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::{Marshal, TypeDescriptor, TypedDescriptor};

/// Lookup of descriptors by canonical type name.
pub trait TypeRegistry: Send + Sync {
    fn lookup(&self, name: &str) -> Option<Arc<dyn TypeDescriptor>>;
}

/// Simple [`HashMap`]-backed [`TypeRegistry`].
#[derive(Default, Clone)]
pub struct HashMapTypeRegistry {
    types: HashMap<String, Arc<dyn TypeDescriptor>>,
}

impl HashMapTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `descriptor` under its own name, replacing any previous entry.
    pub fn register(&mut self, descriptor: Arc<dyn TypeDescriptor>) -> &mut Self {
        let name = descriptor.name().to_string();
        if self.types.insert(name.clone(), descriptor).is_some() {
            log::debug!("[HashMapTypeRegistry::register] replaced descriptor for '{}'", name);
        }
        self
    }

    /// Register a [`Marshal`] type.
    pub fn register_type<T: Marshal>(&mut self) -> &mut Self {
        self.register(Arc::new(TypedDescriptor::<T>::new()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered type names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}

impl TypeRegistry for HashMapTypeRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<dyn TypeDescriptor>> {
        self.types.get(name).cloned()
    }
}

impl<R: TypeRegistry + ?Sized> TypeRegistry for Arc<R> {
    fn lookup(&self, name: &str) -> Option<Arc<dyn TypeDescriptor>> {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::Deserializer;
    use crate::descriptor::{read_scalar, write_scalar};
    use crate::error::MarshalResult;
    use crate::ser::Serializer;

    struct Tick(u32);

    impl Marshal for Tick {
        const TYPE_NAME: &'static str = "Tick";

        fn write_fields(&self, sink: &mut dyn Serializer) -> MarshalResult<()> {
            write_scalar(sink, &self.0)
        }

        fn read_fields(source: &mut dyn Deserializer) -> MarshalResult<Self> {
            Ok(Self(read_scalar(source)?))
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = HashMapTypeRegistry::new();
        assert!(registry.is_empty());
        registry.register_type::<Tick>();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("Tick"));
        assert_eq!(registry.lookup("Tick").map(|d| d.name().to_string()).as_deref(), Some("Tick"));
        assert!(registry.lookup("Tock").is_none());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["Tick"]);
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = HashMapTypeRegistry::new();
        registry.register_type::<Tick>().register_type::<Tick>();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_shared_registry() {
        let mut registry = HashMapTypeRegistry::new();
        registry.register_type::<Tick>();
        let shared = Arc::new(registry);
        assert!(shared.lookup("Tick").is_some());
    }
}
