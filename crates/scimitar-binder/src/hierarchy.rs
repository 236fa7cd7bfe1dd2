//! Type identities and the single-inheritance hierarchy query.

use rustc_hash::FxHashMap;

/// Opaque handle to a declared type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Read-only view of the host type system.
///
/// Implementations are expected to describe a finite, acyclic chain per type.
/// Callers that walk the chain still bound the walk themselves.
pub trait TypeHierarchy {
    /// Direct superclass of `ty`, or `None` at the root.
    fn ancestor_of(&self, ty: TypeId) -> Option<TypeId>;

    /// Fully qualified name of `ty`.
    fn name_of(&self, ty: TypeId) -> &str;
}

#[derive(Debug, Clone)]
struct TypeEntry {
    name: String,
    superclass: Option<TypeId>,
}

/// In-memory type table used by the manifest loader and tests.
#[derive(Debug, Clone, Default)]
pub struct TypeArena {
    types: Vec<TypeEntry>,
    by_name: FxHashMap<String, TypeId>,
}

impl TypeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a type by qualified name. Re-allocating a known name returns
    /// the existing id and leaves its superclass untouched.
    ///
    /// Ids are `u32`; returns `None` once every id is taken.
    pub fn alloc(&mut self, name: impl Into<String>) -> Option<TypeId> {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return Some(id);
        }
        let id = TypeId(u32::try_from(self.types.len()).ok()?);
        self.by_name.insert(name.clone(), id);
        self.types.push(TypeEntry {
            name,
            superclass: None,
        });
        Some(id)
    }

    /// Intern `name` and record `superclass` as its direct ancestor.
    pub fn alloc_subclass(
        &mut self,
        name: impl Into<String>,
        superclass: TypeId,
    ) -> Option<TypeId> {
        let id = self.alloc(name)?;
        self.set_superclass(id, Some(superclass));
        Some(id)
    }

    pub fn set_superclass(&mut self, ty: TypeId, superclass: Option<TypeId>) {
        if let Some(entry) = self.types.get_mut(ty.index()) {
            entry.superclass = superclass;
        }
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeHierarchy for TypeArena {
    fn ancestor_of(&self, ty: TypeId) -> Option<TypeId> {
        self.types.get(ty.index()).and_then(|entry| entry.superclass)
    }

    fn name_of(&self, ty: TypeId) -> &str {
        self.types
            .get(ty.index())
            .map_or("<unknown>", |entry| entry.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_interns_by_name() {
        let mut arena = TypeArena::new();
        let base = arena.alloc("a.Base").unwrap();
        let main = arena.alloc_subclass("a.Main", base).unwrap();

        assert_eq!(base, TypeId(0));
        assert_eq!(main, TypeId(1));
        assert_eq!(arena.alloc("a.Main"), Some(main));
        assert_eq!(arena.ancestor_of(main), Some(base));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.lookup("a.Base"), Some(base));
        assert_eq!(arena.name_of(TypeId(7)), "<unknown>");
    }
}
