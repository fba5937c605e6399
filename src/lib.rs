//! Stream rows and large object (LOB) values out of a database result set
//! without materializing the entire result in memory.
//!
//! The native driver speaks the wire protocol and exposes a stateful cursor
//! over the result of a query. This crate adapts such a cursor, abstracted as
//! the [`ResultSet`] trait, into asynchronous streams:
//!
//! * [`RecordStream`] emits each row as a mapping from column name to value.
//! * [`TupleStream`] emits each row as its column values in ascending column
//!   order.
//! * [`LobStream`] emits the value of one LOB column as a sequence of byte
//!   chunks of bounded size.
//!
//! The consumer paces the work: an adapter issues at most one fetch or read
//! request against the result set at a time, and only when the stream is
//! polled for the next item. This matters because the underlying cursor is
//! stateful and does not support concurrent outstanding operations. Once a
//! fetch or read fails, the error is the last item of the stream and no
//! further requests are issued.

mod config;
mod error;
mod lob_stream;
mod record_stream;
mod result_set;
mod tuple_stream;

// Reexport futures_core so downstream crates can name the `Stream` trait
// without depending on it directly and risking a version mismatch.
pub use futures_core;

pub use self::{
    config::{DEFAULT_READ_SIZE, MAX_READ_SIZE},
    error::Error,
    lob_stream::{LobStream, LobStreamOptions},
    record_stream::RecordStream,
    result_set::{ColumnInfo, ResultSet, TypeTag},
    tuple_stream::TupleStream,
};
