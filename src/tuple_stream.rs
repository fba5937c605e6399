use async_stream::try_stream;
use futures_core::Stream;
use log::debug;

use crate::{Error, ResultSet};

/// Streams each row of a result set as its column values in ascending column
/// order.
///
/// Same control flow as [`crate::RecordStream`], differing only in payload
/// shape: each row is built by asking the driver for the value of every column
/// index in turn. The column count is snapshotted from the result set metadata
/// at construction and stays fixed for the lifetime of the adapter.
pub struct TupleStream<R> {
    result_set: R,
    column_count: usize,
}

impl<R> TupleStream<R>
where
    R: ResultSet,
{
    /// Construct a tuple stream over `result_set`. Construction itself never
    /// fails; errors surface as items of the stream.
    pub fn new(result_set: R) -> Self {
        let column_count = result_set.column_info().len();
        debug!("Streaming rows as tuples of {column_count} column values.");
        Self {
            result_set,
            column_count,
        }
    }

    /// Destroy the adapter and yield the underlying result set.
    pub fn into_inner(self) -> R {
        self.result_set
    }

    /// Turn the adapter into a stream of rows, consuming it.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<Vec<R::Value>, Error<R::Error>>> {
        try_stream! {
            loop {
                match self.result_set.next_row().await {
                    Ok(true) => {
                        let values: Vec<R::Value> = (0..self.column_count)
                            .map(|column_index| self.result_set.value_at(column_index))
                            .collect();
                        yield values;
                    }
                    // We ran out of rows in the result set. End the stream.
                    Ok(false) => break,
                    Err(driver_error) => Err(Error::FetchRow(driver_error))?,
                }
            }
        }
    }

    /// Like [`Self::into_stream`], but borrows the adapter, so the result set
    /// can be recovered after the stream is dropped.
    pub fn as_stream(
        &mut self,
    ) -> impl Stream<Item = Result<Vec<R::Value>, Error<R::Error>>> + '_ {
        try_stream! {
            loop {
                match self.result_set.next_row().await {
                    Ok(true) => {
                        let values: Vec<R::Value> = (0..self.column_count)
                            .map(|column_index| self.result_set.value_at(column_index))
                            .collect();
                        yield values;
                    }
                    Ok(false) => break,
                    Err(driver_error) => Err(Error::FetchRow(driver_error))?,
                }
            }
        }
    }
}
