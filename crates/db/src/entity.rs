//! Record type traits.
//!
//! An [`Entity`] is a keyed record type stored many-per-kind; a
//! [`SingletonEntity`] has exactly one stored value per kind (settings, the
//! weekly menu). Both are serde documents, which lets every backend persist
//! them the same way.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// A named record type addressed by a string id.
///
/// `Default` is the initial state returned when a requested id is absent.
pub trait Entity: Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static {
    /// Storage kind, unique per record type (e.g. `"complaint"`).
    const NAME: &'static str;

    fn id(&self) -> &str;

    /// Records inserted by `ensure_seed` into an empty store.
    fn seed_data() -> Vec<Self> {
        Vec::new()
    }
}

/// A record type with a single stored value.
pub trait SingletonEntity:
    Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
    const NAME: &'static str;

    fn seed_data() -> Option<Self> {
        None
    }
}

/// Shallow-merge the top-level fields of `patch` into `current`.
///
/// The `id` field is never overwritten. The merged document must still
/// deserialize into `T`; otherwise the patch is rejected and `current` is
/// left as it was.
pub fn merge_patch<T: Entity>(current: &T, patch: &serde_json::Value) -> Result<T, StoreError> {
    let fields = patch
        .as_object()
        .ok_or_else(|| StoreError::InvalidPatch("patch must be a JSON object".into()))?;

    let mut document = serde_json::to_value(current)?;
    let target = document
        .as_object_mut()
        .ok_or_else(|| StoreError::InvalidPatch(format!("{} is not an object record", T::NAME)))?;

    for (key, value) in fields {
        if key == "id" {
            continue;
        }
        target.insert(key.clone(), value.clone());
    }

    serde_json::from_value(document).map_err(|e| StoreError::InvalidPatch(e.to_string()))
}
