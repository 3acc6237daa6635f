// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::result::AvailabilityResult;
use sha2::{Digest, Sha256};

/// Computes the content hash of an availability result.
///
/// The hash covers the JSON serialization of the result with its `hash`
/// field cleared, so a populated result hashes identically to the value
/// computed before the field was set. Clients use it purely for change
/// detection; the exact algorithm is not a compatibility surface.
///
/// # Errors
///
/// Returns `CoreError::Serialization` if the result cannot be serialized.
pub fn result_hash(result: &AvailabilityResult) -> Result<String, CoreError> {
    let mut unhashed: AvailabilityResult = result.clone();
    unhashed.hash = String::new();
    let payload: String =
        serde_json::to_string(&unhashed).map_err(|err| CoreError::Serialization(err.to_string()))?;
    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
