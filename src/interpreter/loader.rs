use std::io::BufRead;

use log::debug;

use crate::{
    error::LoadError,
    interpreter::variables::VariableTable,
    util::num::i64_to_index_checked,
};

/// Result type used by the value loader.
pub type LoadResult<T> = Result<T, LoadError>;

/// Characters that separate the numbers of an `(index,value)` pair.
const PAIR_DELIMITERS: [char; 5] = [' ', '\t', '(', ',', ')'];

/// Reads variable values from `reader` into `table`.
///
/// Each line is one record:
///
/// ```text
/// x 5
/// A 3 (0,4) (2,7)
/// ```
///
/// A record with exactly two whitespace-separated tokens assigns a
/// scalar. A longer record declares an array of the given size, zero
/// filled, and then assigns every `(index,value)` pair. Names that are not
/// in the table, or are registered with the other kind, are skipped.
/// Blank lines are ignored. Every number is a 32-bit signed integer.
///
/// # Errors
/// Returns [`LoadError::Format`] for a token that is not an integer,
/// [`LoadError::MissingToken`] for an incomplete record,
/// [`LoadError::IndexOutOfRange`] for a pair outside the declared size,
/// [`LoadError::Allocation`] if the array storage cannot be reserved and
/// [`LoadError::Io`] if reading fails.
pub fn load_values<R: BufRead>(table: &mut VariableTable, reader: R) -> LoadResult<()> {
    for (i, line) in reader.lines().enumerate() {
        load_record(table, &line?, i + 1)?;
    }
    Ok(())
}

/// Same as [`load_values`], reading from a string.
///
/// # Example
/// ```
/// use subscripta::interpreter::{discovery::discover, loader::load_values_str};
///
/// let mut table = discover("A[2] + B");
/// load_values_str(&mut table, "A 3 (2,7)\nB 5").unwrap();
/// assert_eq!(table.array_value("A", 2), Some(7));
/// assert_eq!(table.scalar_value("B"), Some(5));
/// ```
pub fn load_values_str(table: &mut VariableTable, source: &str) -> LoadResult<()> {
    load_values(table, source.as_bytes())
}

/// Applies one record to the table.
fn load_record(table: &mut VariableTable, record: &str, line: usize) -> LoadResult<()> {
    let mut tokens = record.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(());
    };

    if !table.contains(name) {
        debug!("line {line}: skipping unknown variable '{name}'");
        return Ok(());
    }

    let count = record.split_whitespace().count();
    let first = tokens.next()
                      .ok_or_else(|| LoadError::MissingToken { name: name.to_string(),
                                                               line })?;

    if count == 2 {
        let value = parse_integer(first, line)?;
        match table.scalar_mut(name) {
            Some(scalar) => scalar.value = value,
            None => debug!("line {line}: '{name}' is not a scalar, skipping"),
        }
        return Ok(());
    }

    let size = parse_size(first, line)?;
    let Some(array) = table.array_mut(name) else {
        debug!("line {line}: '{name}' is not an array, skipping");
        return Ok(());
    };
    array.allocate(size)
         .map_err(|_| LoadError::Allocation { name: name.to_string(),
                                              size,
                                              line })?;

    let mut numbers = tokens.flat_map(|t| t.split(PAIR_DELIMITERS))
                            .filter(|t| !t.is_empty());
    while let Some(index_token) = numbers.next() {
        let value_token =
            numbers.next()
                   .ok_or_else(|| LoadError::MissingToken { name: name.to_string(),
                                                            line })?;
        let index = parse_integer(index_token, line)?;
        let value = parse_integer(value_token, line)?;
        let slot = i64_to_index_checked(index, size).ok_or_else(|| {
                                                        LoadError::IndexOutOfRange { name: name.to_string(),
                                                                                     index,
                                                                                     size,
                                                                                     line }
                                                    })?;
        array.values[slot] = value;
    }
    Ok(())
}

/// Parses a value source integer.
///
/// Numbers are 32-bit signed; anything wider is a format error.
fn parse_integer(token: &str, line: usize) -> LoadResult<i64> {
    token.parse::<i32>()
         .map(i64::from)
         .map_err(|_| LoadError::Format { token: token.to_string(),
                                          line })
}

/// Parses a declared array size: a non-negative 32-bit integer.
fn parse_size(token: &str, line: usize) -> LoadResult<usize> {
    let size = parse_integer(token, line)?;
    usize::try_from(size).map_err(|_| LoadError::Format { token: token.to_string(),
                                                          line })
}
