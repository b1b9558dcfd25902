// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The blob-store interface for uploaded attachments.

use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// The external blob store: upload a file, get back a resolvable URL.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Uploads a file under `path` and returns its URL.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UploadFailed` if the upload does not complete.
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StoreError>;
}

#[derive(Debug, Clone)]
struct StoredBlob {
    content_type: String,
    bytes: Vec<u8>,
}

/// In-memory [`BlobStore`] backend.
///
/// URLs use the `memblob://` scheme. Uploads can be switched to fail to
/// exercise the abort-before-create path of submissions.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    objects: Mutex<HashMap<String, StoredBlob>>,
    fail_uploads: AtomicBool,
}

impl MemoryBlobStore {
    /// Creates an empty blob store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent upload fail when `fail` is true.
    pub fn fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::Relaxed);
    }

    /// Returns the number of stored objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.lock().map(|objects| objects.len()).unwrap_or(0)
    }

    /// Returns the content type of a stored object, if present.
    #[must_use]
    pub fn content_type(&self, path: &str) -> Option<String> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(path).map(|blob| blob.content_type.clone()))
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StoreError> {
        if self.fail_uploads.load(Ordering::Relaxed) {
            return Err(StoreError::UploadFailed(String::from(
                "simulated upload failure",
            )));
        }
        let mut objects = self
            .objects
            .lock()
            .map_err(|_| StoreError::UploadFailed(String::from("blob store lock poisoned")))?;
        objects.insert(
            path.to_string(),
            StoredBlob {
                content_type: content_type.to_string(),
                bytes: bytes.to_vec(),
            },
        );
        Ok(format!("memblob://{path}"))
    }
}
