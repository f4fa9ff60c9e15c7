use std::{collections::TryReserveError, fmt};

/// Distinguishes the two namespaces a variable name can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableKind {
    /// A single named integer.
    Scalar,
    /// A named, fixed-size, zero-indexed sequence of integers.
    Array,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// A named integer discovered in an expression.
///
/// Starts at `0` and is only changed by the value loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarVariable {
    /// Case-sensitive name.
    pub name:  String,
    /// Current value.
    pub value: i64,
}

impl ScalarVariable {
    /// Creates a scalar with value `0`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:  name.into(),
               value: 0, }
    }
}

impl fmt::Display for ScalarVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A named integer array discovered in an expression.
///
/// `values` is empty until the loader allocates it to a declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayVariable {
    /// Case-sensitive name.
    pub name:   String,
    /// Slots `0..size`; unset slots hold `0`.
    pub values: Vec<i64>,
}

impl ArrayVariable {
    /// Creates an array with no storage.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:   name.into(),
               values: Vec::new(), }
    }

    /// Replaces the storage with `size` zeros.
    ///
    /// The old storage is kept if the allocation is refused.
    pub fn allocate(&mut self, size: usize) -> Result<(), TryReserveError> {
        let mut values = Vec::new();
        values.try_reserve_exact(size)?;
        values.resize(size, 0);
        self.values = values;
        Ok(())
    }

    /// Number of slots currently allocated.
    #[must_use]
    pub fn size(&self) -> usize {
        self.values.len()
    }
}

impl fmt::Display for ArrayVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=[", self.name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// The scalars and arrays known to one expression.
///
/// Both collections keep discovery order. A name lives in at most one of
/// them; the `add_*` methods refuse names that are already present in
/// either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    scalars: Vec<ScalarVariable>,
    arrays:  Vec<ArrayVariable>,
}

impl VariableTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `name` is registered in either namespace.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.kind_of(name).is_some()
    }

    /// Returns which namespace `name` belongs to, if any.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<VariableKind> {
        if self.scalar(name).is_some() {
            Some(VariableKind::Scalar)
        } else if self.array(name).is_some() {
            Some(VariableKind::Array)
        } else {
            None
        }
    }

    /// Registers a scalar named `name`.
    ///
    /// Returns `false` and leaves the table untouched if the name is
    /// already known.
    pub fn add_scalar(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.scalars.push(ScalarVariable::new(name));
        true
    }

    /// Registers an array named `name`.
    ///
    /// Returns `false` and leaves the table untouched if the name is
    /// already known.
    pub fn add_array(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.arrays.push(ArrayVariable::new(name));
        true
    }

    /// The scalar named `name`, if there is one.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&ScalarVariable> {
        self.scalars.iter().find(|s| s.name == name)
    }

    /// The array named `name`, if there is one.
    #[must_use]
    pub fn array(&self, name: &str) -> Option<&ArrayVariable> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// Mutable access to the scalar named `name`.
    pub fn scalar_mut(&mut self, name: &str) -> Option<&mut ScalarVariable> {
        self.scalars.iter_mut().find(|s| s.name == name)
    }

    /// Mutable access to the array named `name`.
    pub fn array_mut(&mut self, name: &str) -> Option<&mut ArrayVariable> {
        self.arrays.iter_mut().find(|a| a.name == name)
    }

    /// Value of the scalar `name`, if there is one.
    #[must_use]
    pub fn scalar_value(&self, name: &str) -> Option<i64> {
        self.scalar(name).map(|s| s.value)
    }

    /// Value stored at `index` of the array `name`, if both exist.
    #[must_use]
    pub fn array_value(&self, name: &str, index: usize) -> Option<i64> {
        self.array(name).and_then(|a| a.values.get(index).copied())
    }

    /// All scalars in discovery order.
    #[must_use]
    pub fn scalars(&self) -> &[ScalarVariable] {
        &self.scalars
    }

    /// All arrays in discovery order.
    #[must_use]
    pub fn arrays(&self) -> &[ArrayVariable] {
        &self.arrays
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_across_both_namespaces() {
        let mut table = VariableTable::new();
        assert!(table.add_array("A"));
        assert!(!table.add_scalar("A"));
        assert!(!table.add_array("A"));
        assert!(table.add_scalar("a"));

        assert_eq!(table.kind_of("A"), Some(VariableKind::Array));
        assert_eq!(table.kind_of("a"), Some(VariableKind::Scalar));
        assert_eq!(table.kind_of("b"), None);
    }

    #[test]
    fn allocate_zero_fills() {
        let mut array = ArrayVariable::new("A");
        assert_eq!(array.size(), 0);
        array.allocate(3).unwrap();
        assert_eq!(array.values, vec![0, 0, 0]);
    }

    #[test]
    fn refused_allocation_keeps_old_storage() {
        let mut array = ArrayVariable::new("A");
        array.allocate(2).unwrap();
        array.values[0] = 5;
        assert!(array.allocate(usize::MAX).is_err());
        assert_eq!(array.values, vec![5, 0]);
    }

    #[test]
    fn display_matches_listing_format() {
        let mut array = ArrayVariable::new("A");
        array.allocate(2).unwrap();
        array.values[1] = 7;
        assert_eq!(array.to_string(), "A=[0, 7]");

        let mut scalar = ScalarVariable::new("x");
        scalar.value = -4;
        assert_eq!(scalar.to_string(), "x=-4");
    }

    #[test]
    fn array_value_out_of_range_is_none() {
        let mut table = VariableTable::new();
        table.add_array("A");
        assert_eq!(table.array_value("A", 0), None);
        table.array_mut("A").expect("array").allocate(1).unwrap();
        assert_eq!(table.array_value("A", 0), Some(0));
    }
}
