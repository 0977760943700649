//! Cache of type descriptors and field accessors.
//!
//! The registry is an ordinary value with an explicit owner, usually shared
//! behind an `Arc` by every [`Masker`](crate::Masker) in a process. Entries are
//! never modified after insertion. Two threads missing on the same type may both
//! build it; the first insertion wins and both see a complete entry.

use std::{
    any::{Any, TypeId, type_name},
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::Arc,
};

use parking_lot::RwLock;

use super::{
    accessor::FieldAccessor,
    descriptor::{FieldDescriptor, TypeDescriptor},
    traits::Maskable,
};
use crate::MaskingError;

type AccessorKey = (TypeId, &'static str);

/// Build-once, read-many store of [`TypeDescriptor`]s and [`FieldAccessor`]s.
#[derive(Default)]
pub struct DescriptorRegistry {
    descriptors: RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>,
    // Values are `FieldAccessor<T>` for the `T` in the key.
    accessors: RwLock<HashMap<AccessorKey, Box<dyn Any + Send + Sync>>>,
}

impl DescriptorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor for `T`, building it on first use.
    pub fn descriptor<T: Maskable>(&self) -> Arc<TypeDescriptor> {
        let key = TypeId::of::<T>();
        let cached = self.descriptors.read().get(&key).cloned();
        if let Some(descriptor) = cached {
            return descriptor;
        }

        let built = Arc::new(TypeDescriptor::of::<T>());
        tracing::debug!(
            type_name = built.type_name(),
            fields = built.len(),
            "built masking descriptor"
        );
        Arc::clone(self.descriptors.write().entry(key).or_insert(built))
    }

    /// Installs an explicit policy table for `T`.
    ///
    /// This must happen before `T` is first masked; once a descriptor exists it
    /// is never replaced.
    ///
    /// The table can only assign rules to fields `T` exposes accessors for.
    /// With `#[derive(Maskable)]` those are the fields carrying `#[mask(...)]`;
    /// other entries are dropped with a warning.
    pub fn register<T: Maskable>(
        &self,
        fields: impl IntoIterator<Item = FieldDescriptor>,
    ) -> Result<Arc<TypeDescriptor>, MaskingError> {
        let descriptor = Arc::new(TypeDescriptor::from_fields::<T>(fields));
        match self.descriptors.write().entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(MaskingError::AlreadyRegistered {
                type_name: type_name::<T>(),
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    type_name = descriptor.type_name(),
                    fields = descriptor.len(),
                    "registered masking descriptor"
                );
                Ok(Arc::clone(slot.insert(descriptor)))
            }
        }
    }

    /// Returns the accessor for `field` of `T`, resolving it on first use.
    ///
    /// A field `T` cannot access yields a no-op accessor.
    pub fn accessor<T: Maskable>(&self, field: &FieldDescriptor) -> FieldAccessor<T> {
        let key = (TypeId::of::<T>(), field.name());
        let cached = self
            .accessors
            .read()
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<FieldAccessor<T>>())
            .copied();
        if let Some(accessor) = cached {
            return accessor;
        }

        let accessor = T::field_accessor(field.name()).unwrap_or_else(|| {
            tracing::warn!(
                type_name = type_name::<T>(),
                field = field.name(),
                "no accessor for masked field; it will be skipped"
            );
            FieldAccessor::noop(field.name())
        });

        let mut accessors = self.accessors.write();
        accessors
            .entry(key)
            .or_insert_with(|| Box::new(accessor))
            .downcast_ref::<FieldAccessor<T>>()
            .copied()
            .unwrap_or(accessor)
    }

    /// Whether a descriptor for `T` has been built or registered.
    pub fn contains<T: Maskable>(&self) -> bool {
        self.descriptors.read().contains_key(&TypeId::of::<T>())
    }

    /// Number of cached type descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.read().is_empty()
    }

    /// Drops every cached descriptor and accessor.
    pub fn clear(&self) {
        self.descriptors.write().clear();
        self.accessors.write().clear();
    }
}

impl fmt::Debug for DescriptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescriptorRegistry")
            .field("descriptors", &self.descriptors.read().len())
            .field("accessors", &self.accessors.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::MaskingRule;

    #[derive(Clone)]
    struct Account {
        owner: String,
        note: String,
    }

    impl Maskable for Account {
        fn masking_fields() -> Vec<FieldDescriptor> {
            vec![FieldDescriptor::of::<Self>("owner", MaskingRule::name(1))]
        }

        fn field_accessor(field: &str) -> Option<FieldAccessor<Self>> {
            match field {
                "owner" => Some(FieldAccessor::<Self>::new(
                    "owner",
                    |a| Some(a.owner.as_str()),
                    |a, v| a.owner = v,
                )),
                "note" => Some(FieldAccessor::<Self>::new(
                    "note",
                    |a| Some(a.note.as_str()),
                    |a, v| a.note = v,
                )),
                _ => None,
            }
        }

        fn shallow_copy(&self) -> Result<Self, MaskingError> {
            Ok(self.clone())
        }
    }

    #[test]
    fn descriptor_is_built_once_and_shared() {
        let registry = DescriptorRegistry::new();
        assert!(registry.is_empty());

        let first = registry.descriptor::<Account>();
        let second = registry.descriptor::<Account>();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.contains::<Account>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn clear_resets_the_cache() {
        let registry = DescriptorRegistry::new();
        let first = registry.descriptor::<Account>();
        registry.clear();
        assert!(!registry.contains::<Account>());

        let rebuilt = registry.descriptor::<Account>();
        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(*first, *rebuilt);
    }

    #[test]
    fn register_installs_an_explicit_table_once() {
        let registry = DescriptorRegistry::new();
        let registered = registry
            .register::<Account>([FieldDescriptor::of::<Account>("note", MaskingRule::name(0))])
            .unwrap();
        assert_eq!(registered.rule_for("note"), Some(MaskingRule::name(0)));
        assert_eq!(registry.descriptor::<Account>().rule_for("owner"), None);

        let again = registry.register::<Account>([]);
        assert!(matches!(
            again,
            Err(MaskingError::AlreadyRegistered { .. })
        ));
    }

    #[test]
    fn unknown_fields_get_a_noop_accessor() {
        let registry = DescriptorRegistry::new();
        let missing = FieldDescriptor::of::<Account>("balance", MaskingRule::Phone);
        let accessor = registry.accessor::<Account>(&missing);

        let account = Account {
            owner: "Kim".into(),
            note: String::new(),
        };
        assert_eq!(accessor.get(&account), None);
    }

    #[test]
    fn concurrent_first_access_converges() {
        let registry = DescriptorRegistry::new();
        let descriptors: Vec<Arc<TypeDescriptor>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.descriptor::<Account>()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.len(), 1);
        for descriptor in &descriptors {
            assert_eq!(**descriptor, *descriptors[0]);
            assert_eq!(descriptor.len(), 1);
        }
    }
}
