use thiserror::Error;

use crate::result_set::TypeTag;

/// A variation of things which can go wrong then constructing a stream adapter
/// or pulling items from it.
///
/// `E` is the error type of the underlying [`crate::ResultSet`]
/// implementation. Driver errors are carried verbatim as the source of the
/// fetch and read variants; this crate never retries and never swallows them.
#[derive(Error, Debug)]
pub enum Error<E> {
    /// The LOB adapter was pointed at a column which does not exist.
    #[error(
        "Column index {column_index} is out of range. The result set has {column_count} columns."
    )]
    ColumnIndexOutOfRange {
        /// Zero based index requested by the caller.
        column_index: usize,
        /// Number of columns in the result set.
        column_count: usize,
    },
    /// The LOB adapter was pointed at a column which exists, but does not hold
    /// large object data.
    #[error(
        "The column '{name}' at index {column_index} is not a LOB column. Its native type tag is \
        {type_tag}."
    )]
    NotALobColumn {
        /// Name of the offending column.
        name: String,
        /// Zero based index of the offending column.
        column_index: usize,
        /// Native type tag reported by the driver for the column.
        type_tag: TypeTag,
    },
    /// The driver reported an error fetching the next row of the result set.
    /// Terminal for the stream which observed it.
    #[error("Unable to fetch the next row from the result set.\n{0}")]
    FetchRow(#[source] E),
    /// The driver reported an error reading a chunk of LOB data. Terminal for
    /// the stream which observed it.
    #[error("Unable to read data from the LOB column at index {column_index}.\n{source}")]
    ReadLob {
        /// Zero based index of the column the read was issued against.
        column_index: usize,
        /// Cause of the error as reported by the driver.
        source: E,
    },
}
