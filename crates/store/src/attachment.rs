// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attachment upload helper.
//!
//! Uploads the citizen's selected file under a collision-resistant path
//! and returns the URL stored as `documentUrl` on the request record.
//! The upload completes (or fails) before any record write is attempted;
//! upload and record creation are two sequential operations, not one
//! transaction.

use crate::blob::BlobStore;
use crate::error::StoreError;
use seva_portal_domain::AttachmentMeta;
use time::OffsetDateTime;

/// A file selected by the citizen, waiting to be uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    /// Original file name as selected.
    pub file_name: String,
    /// MIME content type reported by the client.
    pub content_type: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl PendingAttachment {
    /// Returns the metadata checked by the submission validator.
    #[must_use]
    pub fn meta(&self) -> AttachmentMeta {
        AttachmentMeta {
            file_name: self.file_name.clone(),
            size_bytes: self.bytes.len() as u64,
        }
    }
}

/// Uploads an attachment and returns its URL.
///
/// The blob path is prefixed with the upload instant (millisecond
/// resolution) and a random suffix so that two citizens uploading files
/// with the same name cannot collide.
///
/// # Errors
///
/// Returns `StoreError::UploadFailed` if the blob store rejects the
/// upload. The caller must abort the submission; no record may reference
/// a URL that was never returned.
pub async fn upload_attachment<B: BlobStore + ?Sized>(
    blobs: &B,
    attachment: &PendingAttachment,
) -> Result<String, StoreError> {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let suffix: u32 = rand::random();
    let path: String = format!(
        "uploads/{millis}-{suffix:08x}-{}",
        sanitize_file_name(&attachment.file_name)
    );
    blobs
        .upload(&path, &attachment.content_type, &attachment.bytes)
        .await
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `-`.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
