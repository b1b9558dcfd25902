// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Store access for the Seva citizen-services portal.
//!
//! The portal delegates all persistence to an external managed platform:
//! a document database holding one collection per request type and a blob
//! store holding uploaded attachments. This crate expresses those
//! collaborators as the [`DocumentStore`] and [`BlobStore`] traits and
//! builds the request repository on top of them.
//!
//! The in-memory backends here are the reference implementations used for
//! development and tests; production deployments provide the managed
//! platform's client behind the same traits.

mod attachment;
mod blob;
mod document;
mod error;
mod memory;
mod repository;

#[cfg(test)]
mod tests;

pub use attachment::{PendingAttachment, upload_attachment};
pub use blob::{BlobStore, MemoryBlobStore};
pub use document::{DocumentRecord, DocumentStore};
pub use error::{RepositoryError, StoreError};
pub use memory::MemoryStore;
pub use repository::{CreatedRequest, RequestRepository};
