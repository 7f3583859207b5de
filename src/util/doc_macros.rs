//! Macros for reducing doc comment boilerplate.

/// Documents [`crate::Error::InvalidArgument`] returned by constructors.
///
/// You must provide the name of the capacity ceiling that bounds the size.
macro_rules! errors_invalid_argument {
    ($max:expr) => {
        concat!(
            "- `InvalidArgument`: the size is zero, negative or larger than [`crate::Scalar::",
            $max,
            "`], or a start index is negative.\n"
        )
    };
}
pub(crate) use errors_invalid_argument;

/// Documents [`crate::Error::IndexOutOfRange`].
macro_rules! errors_index_out_of_range {
    () => {
        "- `IndexOutOfRange`: the index is negative or falls outside the valid range.\n"
    };
}
pub(crate) use errors_index_out_of_range;

/// Documents [`crate::Error::SizeMismatch`] for binary operations.
macro_rules! errors_size_mismatch {
    () => {
        "- `SizeMismatch`: the operands have different sizes. Neither operand is modified.\n"
    };
}
pub(crate) use errors_size_mismatch;

/// Documents the panics of the `[]` operators.
macro_rules! panic_index_operator {
    () => {
        "Panics if the index is out of range. Use the fallible accessors to handle this case without panicking.\n\n"
    };
}
pub(crate) use panic_index_operator;
