#[derive(Debug)]
/// Represents all errors that can occur while loading variable values.
pub enum LoadError {
    /// A token that should be an integer could not be parsed as one.
    Format {
        /// The token as it appeared in the source.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A record ended before all of its numbers were read.
    MissingToken {
        /// The variable the record belongs to.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `(index,value)` pair addressed a slot outside the declared size.
    IndexOutOfRange {
        /// The variable the record belongs to.
        name:  String,
        /// The index found in the pair.
        index: i64,
        /// The size declared by the record.
        size:  usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The storage for a declared array size could not be allocated.
    Allocation {
        /// The variable the record belongs to.
        name: String,
        /// The size declared by the record.
        size: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The underlying reader failed.
    Io(std::io::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format { token, line } => {
                write!(f, "Error on line {line}: '{token}' is not a valid integer.")
            },
            Self::MissingToken { name, line } => {
                write!(f, "Error on line {line}: Record for '{name}' is incomplete.")
            },
            Self::IndexOutOfRange { name,
                                    index,
                                    size,
                                    line, } => write!(f,
                                                      "Error on line {line}: Index {index} is out of range for array '{name}' of size {size}."),
            Self::Allocation { name, size, line } => write!(f,
                                                            "Error on line {line}: Cannot allocate {size} slots for array '{name}'."),
            Self::Io(e) => write!(f, "Failed to read variable values: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
