use std::{collections::HashMap, fmt};

/// Native type tag of a result set column, using the numeric encoding of the
/// database driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag(pub u8);

impl TypeTag {
    /// Character large object.
    pub const CLOB: TypeTag = TypeTag(25);
    /// National character large object.
    pub const NCLOB: TypeTag = TypeTag(26);
    /// Binary large object.
    pub const BLOB: TypeTag = TypeTag(27);

    /// `true` if a column with this tag holds large object data and supports
    /// chunked reads via [`ResultSet::read_lob`].
    pub fn is_lob(self) -> bool {
        matches!(self, Self::CLOB | Self::NCLOB | Self::BLOB)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CLOB => write!(f, "25 (CLOB)"),
            Self::NCLOB => write!(f, "26 (NCLOB)"),
            Self::BLOB => write!(f, "27 (BLOB)"),
            Self(other) => write!(f, "{other}"),
        }
    }
}

/// Name and native type of one result set column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Column name as reported by the driver.
    pub name: String,
    /// Native type tag as reported by the driver.
    pub type_tag: TypeTag,
}

/// Cursor over an in-progress query result, as exposed by the native driver.
///
/// The cursor is stateful and supports only one outstanding operation at a
/// time. Both asynchronous operations therefore take `&mut self`, so a second
/// fetch can not even be issued while one is in flight.
///
/// Implement this trait for the result set handle of your driver. The stream
/// adapters in this crate are generic over it and never assume anything about
/// the wire protocol behind it.
#[allow(async_fn_in_trait)]
pub trait ResultSet {
    /// Cell value type produced by the driver.
    type Value;
    /// Error type reported by the driver. Carried verbatim as the source of
    /// [`crate::Error::FetchRow`] and [`crate::Error::ReadLob`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Metadata for the columns of the result set, in ascending column order.
    fn column_info(&self) -> &[ColumnInfo];

    /// Advance the cursor to the next row. `Ok(true)` means a row is now
    /// current, `Ok(false)` means the result set is exhausted.
    async fn next_row(&mut self) -> Result<bool, Self::Error>;

    /// The current row as a mapping from column name to value.
    fn row_record(&self) -> HashMap<String, Self::Value>;

    /// The value of the current row at `column_index`.
    fn value_at(&self, column_index: usize) -> Self::Value;

    /// Read a chunk of the LOB value in the current row at `column_index`,
    /// starting `offset` bytes into the value, into the front of `buffer`.
    /// At most `buffer.len()` bytes are requested. Returns the number of
    /// bytes actually retrieved; `0` indicates the end of the value.
    async fn read_lob(
        &mut self,
        column_index: usize,
        offset: u64,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

/// Allows the adapters to borrow a result set instead of consuming it, e.g. to
/// stream one LOB column and afterwards keep using the cursor.
impl<S> ResultSet for &mut S
where
    S: ResultSet,
{
    type Value = S::Value;
    type Error = S::Error;

    fn column_info(&self) -> &[ColumnInfo] {
        (**self).column_info()
    }

    async fn next_row(&mut self) -> Result<bool, Self::Error> {
        (**self).next_row().await
    }

    fn row_record(&self) -> HashMap<String, Self::Value> {
        (**self).row_record()
    }

    fn value_at(&self, column_index: usize) -> Self::Value {
        (**self).value_at(column_index)
    }

    async fn read_lob(
        &mut self,
        column_index: usize,
        offset: u64,
        buffer: &mut [u8],
    ) -> Result<usize, Self::Error> {
        (**self).read_lob(column_index, offset, buffer).await
    }
}
