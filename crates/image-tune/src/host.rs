use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cropper::CropperProvider;

/// Editor-level services the host exposes to the tune.
pub trait EditorApi: Send + Sync {
    fn is_read_only(&self) -> bool {
        false
    }

    fn container_width(&self) -> f64;

    fn translate(&self, key: &str) -> String {
        key.to_string()
    }

    fn tooltip_on_hover(&self, _button: &str, _text: &str) {}
}

pub trait BlockApi: Send + Sync {
    fn dispatch_change(&self);
}

/// Capability defaults, applied only to flags the block never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TuneConfig {
    #[serde(default)]
    pub resize: bool,
    #[serde(default)]
    pub crop: bool,
}

pub struct TuneContext {
    pub api: Arc<dyn EditorApi>,
    pub block: Arc<dyn BlockApi>,
    pub cropper: Arc<dyn CropperProvider>,
    /// Record persisted for this block, if any.
    pub data: Option<Value>,
    pub config: TuneConfig,
}
