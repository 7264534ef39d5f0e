//! # Design Records
//!
//! A `DesignRecord` pairs one request with its computed result and enough
//! metadata to find it again later. Records serialize to human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! DesignRecord
//! ├── meta: RecordMetadata (version, id, label, created)
//! ├── request: DesignRequest
//! └── result: DesignResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::calculations::{calculate, DesignRequest};
//! use rocket_core::record::DesignRecord;
//!
//! let request = DesignRequest::default();
//! let result = calculate(&request).unwrap();
//! let record = DesignRecord::new("bench engine", request, result);
//!
//! let json = serde_json::to_string_pretty(&record).unwrap();
//! assert!(json.contains("bench engine"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{DesignRequest, DesignResult};

/// Current schema version for record files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One stored engine design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub meta: RecordMetadata,
    pub request: DesignRequest,
    pub result: DesignResult,
}

impl DesignRecord {
    /// Wrap a computed design with fresh metadata.
    pub fn new(label: impl Into<String>, request: DesignRequest, result: DesignResult) -> Self {
        DesignRecord {
            meta: RecordMetadata {
                version: SCHEMA_VERSION.to_string(),
                id: Uuid::new_v4(),
                label: label.into(),
                created: Utc::now(),
            },
            request,
            result,
        }
    }

    /// Deterministic file stem derived from the request inputs
    pub fn stem(&self) -> String {
        self.request.record_stem()
    }

    /// Default JSON file name for this record, e.g. `alcohol_200_500_1.2_60_3_record.json`
    pub fn file_name(&self) -> String {
        format!("{}_record.json", self.stem())
    }
}

/// Record header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub id: Uuid,

    /// Free-form user label
    pub label: String,

    /// When the design was computed
    pub created: DateTime<Utc>,
}
