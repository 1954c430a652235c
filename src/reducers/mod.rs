//! Shared reducers plugged into a [`TaggedRouter`](crate::router::TaggedRouter).
//!
//! A reducer here only ever sees one partition; deciding *which* partition an
//! action belongs to is the router's job.

pub mod social_preview;
