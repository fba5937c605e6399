use async_stream::try_stream;
use futures_core::Stream;
use log::debug;

use crate::{DEFAULT_READ_SIZE, Error, MAX_READ_SIZE, ResultSet};

/// Options for constructing a [`LobStream`].
#[derive(Debug, Clone, Copy)]
pub struct LobStreamOptions {
    /// Bytes requested per read operation. Values beyond
    /// [`crate::MAX_READ_SIZE`] are clamped to it.
    pub read_size: usize,
}

impl Default for LobStreamOptions {
    fn default() -> Self {
        Self {
            read_size: DEFAULT_READ_SIZE,
        }
    }
}

/// Streams the value of one large object (LOB) column of the current row as a
/// sequence of byte chunks.
///
/// LOB values can be arbitrarily large. Materializing one eagerly would defeat
/// the point of streaming the result set in the first place, so the value is
/// read through a window of at most [`crate::MAX_READ_SIZE`] bytes, one chunk
/// per poll of the stream. Every chunk has the exact length the driver
/// reported for the read; a chunk shorter than the configured read size is a
/// normal terminal chunk, and a read returning zero bytes ends the stream.
///
/// # Example
///
/// ```
/// use futures_util::{StreamExt, pin_mut};
/// use hdb_stream::{LobStream, ResultSet};
///
/// /// Collect the entire LOB value at `column_index` into memory.
/// async fn lob_to_vec<R>(result_set: R, column_index: usize) -> Result<Vec<u8>, anyhow::Error>
/// where
///     R: ResultSet,
/// {
///     let stream = LobStream::new(result_set, column_index)?.into_stream();
///     pin_mut!(stream);
///     let mut value = Vec::new();
///     while let Some(chunk) = stream.next().await {
///         value.extend_from_slice(&chunk?);
///     }
///     Ok(value)
/// }
/// ```
pub struct LobStream<R> {
    result_set: R,
    column_index: usize,
    /// Bytes requested per read, after clamping.
    read_size: usize,
    /// Bytes of the LOB value retrieved so far. Next read starts here.
    offset: u64,
}

impl<R> LobStream<R>
where
    R: ResultSet,
{
    /// Construct a LOB stream over the column at `column_index`, requesting
    /// [`crate::DEFAULT_READ_SIZE`] bytes per read.
    ///
    /// Fails if the column index is out of range, or if the column does not
    /// hold large object data.
    pub fn new(result_set: R, column_index: usize) -> Result<Self, Error<R::Error>> {
        Self::with_options(result_set, column_index, LobStreamOptions::default())
    }

    /// Construct a LOB stream over the column at `column_index` with an
    /// explicit read size.
    ///
    /// Fails if the column index is out of range, or if the column does not
    /// hold large object data.
    pub fn with_options(
        result_set: R,
        column_index: usize,
        options: LobStreamOptions,
    ) -> Result<Self, Error<R::Error>> {
        let column_info = result_set.column_info();
        let column = column_info
            .get(column_index)
            .ok_or(Error::ColumnIndexOutOfRange {
                column_index,
                column_count: column_info.len(),
            })?;
        if !column.type_tag.is_lob() {
            return Err(Error::NotALobColumn {
                name: column.name.clone(),
                column_index,
                type_tag: column.type_tag,
            });
        }
        let read_size = options.read_size.min(MAX_READ_SIZE);
        debug!(
            "Streaming LOB column '{}' at index {column_index} in chunks of up to {read_size} \
            bytes.",
            column.name
        );
        Ok(Self {
            result_set,
            column_index,
            read_size,
            offset: 0,
        })
    }

    /// Effective bytes requested per read operation, after clamping the
    /// configured value to [`crate::MAX_READ_SIZE`].
    pub fn read_size(&self) -> usize {
        self.read_size
    }

    /// Bytes of the LOB value retrieved so far. Advances by exactly the
    /// number of bytes each read reported.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Destroy the adapter and yield the underlying result set, e.g. to keep
    /// iterating rows after draining one LOB column.
    pub fn into_inner(self) -> R {
        self.result_set
    }

    /// Turn the adapter into a stream of byte chunks, consuming it.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<Vec<u8>, Error<R::Error>>> {
        try_stream! {
            loop {
                // A fresh buffer per read. The previous chunk is owned by the
                // consumer by now.
                let mut buffer = vec![0; self.read_size];
                match self
                    .result_set
                    .read_lob(self.column_index, self.offset, &mut buffer)
                    .await
                {
                    // Zero bytes is the sole end-of-data signal.
                    Ok(0) => break,
                    Ok(bytes_retrieved) => {
                        self.offset += bytes_retrieved as u64;
                        // Downstream must see exact byte counts. A short read
                        // is handed over right-sized, never padded.
                        if bytes_retrieved < self.read_size {
                            buffer.truncate(bytes_retrieved);
                        }
                        yield buffer;
                    }
                    Err(driver_error) => Err(Error::ReadLob {
                        column_index: self.column_index,
                        source: driver_error,
                    })?,
                }
            }
        }
    }

    /// Like [`Self::into_stream`], but borrows the adapter, so the result set
    /// and the final read offset can be recovered after the stream is dropped.
    pub fn as_stream(&mut self) -> impl Stream<Item = Result<Vec<u8>, Error<R::Error>>> + '_ {
        try_stream! {
            loop {
                let mut buffer = vec![0; self.read_size];
                match self
                    .result_set
                    .read_lob(self.column_index, self.offset, &mut buffer)
                    .await
                {
                    Ok(0) => break,
                    Ok(bytes_retrieved) => {
                        self.offset += bytes_retrieved as u64;
                        if bytes_retrieved < self.read_size {
                            buffer.truncate(bytes_retrieved);
                        }
                        yield buffer;
                    }
                    Err(driver_error) => Err(Error::ReadLob {
                        column_index: self.column_index,
                        source: driver_error,
                    })?,
                }
            }
        }
    }
}
