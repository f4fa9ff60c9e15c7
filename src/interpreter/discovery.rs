use log::debug;

use crate::interpreter::variables::VariableTable;

/// Characters that end a candidate name.
const DELIMITERS: &str = " \t*+-/()[]";

/// Builds the variable table for `expression`.
///
/// Every maximal run of non-delimiter characters is a candidate name. A
/// candidate that is terminated by `[` becomes an array, any other
/// candidate becomes a scalar. Purely numeric candidates are constants
/// and are dropped. The first classification of a name wins, so a name
/// used both as `A[..]` and as a plain `A` takes the kind of whichever
/// occurrence comes first.
///
/// All values start at zero.
///
/// # Example
/// ```
/// use subscripta::interpreter::{discovery::discover, variables::VariableKind};
///
/// let table = discover("A[2] + b * 3");
/// assert_eq!(table.kind_of("A"), Some(VariableKind::Array));
/// assert_eq!(table.kind_of("b"), Some(VariableKind::Scalar));
/// assert!(!table.contains("3"));
/// ```
#[must_use]
pub fn discover(expression: &str) -> VariableTable {
    let mut table = VariableTable::new();
    let mut candidate = String::new();

    for c in expression.chars().filter(|c| *c != ' ' && *c != '\t') {
        if c == '[' {
            flush(&mut table, &mut candidate, true);
        } else if DELIMITERS.contains(c) {
            flush(&mut table, &mut candidate, false);
        } else {
            candidate.push(c);
        }
    }
    // A trailing name has no delimiter after it.
    flush(&mut table, &mut candidate, false);

    debug!("discovered {} scalar(s) and {} array(s) in '{expression}'",
           table.scalars().len(),
           table.arrays().len());
    table
}

/// Registers `candidate` (if it is a name) and clears it.
fn flush(table: &mut VariableTable, candidate: &mut String, is_array: bool) {
    if !candidate.is_empty() && !is_numeric(candidate) {
        if is_array {
            table.add_array(candidate);
        } else {
            table.add_scalar(candidate);
        }
    }
    candidate.clear();
}

fn is_numeric(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit())
}
