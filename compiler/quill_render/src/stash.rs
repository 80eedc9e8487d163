//! Named template parameters.

use crate::{Table, Value};

/// The parameters a template is rendered with.
///
/// Programs see every entry as a global variable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stash {
    params: Table,
}

impl Stash {
    pub fn new() -> Self {
        Stash::default()
    }

    /// Set a parameter, replacing any previous value of that name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.params.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Resolve a dotted path such as `user.name` or `items.2`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let first = self.get(parts.next()?)?;
        parts.try_fold(first, |value, key| value.field(key))
    }

    /// Parameters in the order they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl From<Table> for Stash {
    /// A table's entries become the parameters, as when a program hands a
    /// table to `Io.include` as the include's environment.
    fn from(params: Table) -> Self {
        Stash { params }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Stash {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Stash {
            params: iter.into_iter().collect(),
        }
    }
}
