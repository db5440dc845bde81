//! Cloud storage references.
//!
//! Tale reads audio from Google Cloud Storage. Inputs are `gs://bucket/object`
//! references, validated up front so a mistyped reference fails before any
//! recognition request is made.

use crate::error::TaleError;
use std::fmt;
use std::str::FromStr;

/// A validated `gs://bucket/object` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcsUri {
    bucket: String,
    object: String,
}

impl GcsUri {
    /// Scheme prefix for Google Cloud Storage references.
    pub const SCHEME: &'static str = "gs://";

    /// Bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object path within the bucket.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Final path component of the object (the audio file name).
    pub fn file_name(&self) -> &str {
        self.object.rsplit('/').next().unwrap_or(&self.object)
    }

    /// File name encoded for safe use in a directory name.
    pub fn encoded_file_name(&self) -> String {
        url::form_urlencoded::byte_serialize(self.file_name().as_bytes()).collect()
    }
}

impl FromStr for GcsUri {
    type Err = TaleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let rest = s.strip_prefix(Self::SCHEME).ok_or_else(|| {
            TaleError::InvalidUri(format!("{}: only gs:// references are allowed", s))
        })?;

        let (bucket, object) = rest
            .split_once('/')
            .ok_or_else(|| TaleError::InvalidUri(format!("{}: missing object path", s)))?;

        if bucket.is_empty() || object.is_empty() {
            return Err(TaleError::InvalidUri(format!(
                "{}: bucket and object must be non-empty",
                s
            )));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            object: object.to_string(),
        })
    }
}

impl fmt::Display for GcsUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}/{}", Self::SCHEME, self.bucket, self.object)
    }
}
