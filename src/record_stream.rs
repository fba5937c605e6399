use std::collections::HashMap;

use async_stream::try_stream;
use futures_core::Stream;

use crate::{Error, ResultSet};

/// Streams each row of a result set as a mapping from column name to value.
///
/// The mapping is produced by the driver itself via
/// [`ResultSet::row_record`], so value conversion rules are entirely the
/// driver's. Rows are fetched one at a time, only when the stream is polled,
/// which keeps memory usage independent of the size of the result set.
///
/// # Example
///
/// ```
/// use futures_util::{StreamExt, pin_mut};
/// use hdb_stream::{RecordStream, ResultSet};
///
/// async fn print_all_rows<R>(result_set: R) -> Result<(), anyhow::Error>
/// where
///     R: ResultSet,
///     R::Value: std::fmt::Debug,
/// {
///     let stream = RecordStream::new(result_set).into_stream();
///     pin_mut!(stream);
///     while let Some(row) = stream.next().await {
///         println!("{:?}", row?);
///     }
///     Ok(())
/// }
/// ```
pub struct RecordStream<R> {
    result_set: R,
}

impl<R> RecordStream<R>
where
    R: ResultSet,
{
    /// Construct a record stream over `result_set`. Construction itself never
    /// fails; errors surface as items of the stream.
    pub fn new(result_set: R) -> Self {
        Self { result_set }
    }

    /// Destroy the adapter and yield the underlying result set.
    ///
    /// One application of this is to process more than one result set in case
    /// you executed a stored procedure.
    pub fn into_inner(self) -> R {
        self.result_set
    }

    /// Turn the adapter into a stream of rows, consuming it.
    pub fn into_stream(
        mut self,
    ) -> impl Stream<Item = Result<HashMap<String, R::Value>, Error<R::Error>>> {
        try_stream! {
            loop {
                match self.result_set.next_row().await {
                    // A row is current now. Hand it downstream in the shape the
                    // driver reports it in.
                    Ok(true) => yield self.result_set.row_record(),
                    // We ran out of rows in the result set. End the stream.
                    Ok(false) => break,
                    // Report the fetch failure downstream and issue no further
                    // requests against the cursor.
                    Err(driver_error) => Err(Error::FetchRow(driver_error))?,
                }
            }
        }
    }

    /// Like [`Self::into_stream`], but borrows the adapter, so the result set
    /// can be recovered after the stream is dropped.
    pub fn as_stream(
        &mut self,
    ) -> impl Stream<Item = Result<HashMap<String, R::Value>, Error<R::Error>>> + '_ {
        try_stream! {
            loop {
                match self.result_set.next_row().await {
                    Ok(true) => yield self.result_set.row_record(),
                    Ok(false) => break,
                    Err(driver_error) => Err(Error::FetchRow(driver_error))?,
                }
            }
        }
    }
}
