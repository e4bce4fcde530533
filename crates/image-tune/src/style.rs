use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dom::Element;
use crate::state::TuneData;

// Class names are a wire contract with host stylesheets; none of them may
// drift.
pub const WRAPPER_CLASS: &str = "cdx-image-tool-tune";
pub const SETTINGS_BUTTON_CLASS: &str = "cdx-settings-button";
pub const SETTINGS_BUTTON_ACTIVE_CLASS: &str = "cdx-settings-button--active";

pub const FLOAT_LEFT_CLASS: &str = "cdx-image-tool-tune--floatLeft";
pub const FLOAT_RIGHT_CLASS: &str = "cdx-image-tool-tune--floatRight";
pub const CENTER_CLASS: &str = "cdx-image-tool-tune--center";
pub const SIZE_SMALL_CLASS: &str = "cdx-image-tool-tune--sizeSmall";
pub const SIZE_MIDDLE_CLASS: &str = "cdx-image-tool-tune--sizeMiddle";
pub const SIZE_LARGE_CLASS: &str = "cdx-image-tool-tune--sizeLarge";
pub const RESIZE_CLASS: &str = "cdx-image-tool-tune--resize";
pub const CROP_CLASS: &str = "cdx-image-tool-tune--crop";

pub const CROPPING_CLASS: &str = "isCropping";
pub const CROPPED_CLASS: &str = "isCropped";
pub const CROP_BUTTON_CLASS: &str = "crop-btn";
pub const CROP_SAVE_CLASS: &str = "crop-save";
pub const CROP_ACTION_CLASS: &str = "btn-crop-action";

pub const RESIZABLE_CLASS: &str = "resizable";
pub const RESIZERS_CLASS: &str = "resizers";
pub const RESIZER_CLASS: &str = "resizer";
pub const RESIZER_TOP_RIGHT_CLASS: &str = "top-right";
pub const RESIZER_BOTTOM_RIGHT_CLASS: &str = "bottom-right";

// Structure the host renders around the image; the tune only queries these.
pub const BLOCK_CONTENT_CLASS: &str = "ce-block__content";
pub const CDX_BLOCK_CLASS: &str = "cdx-block";
pub const IMAGE_WRAPPER_CLASS: &str = "image-tool__image";
pub const EDITOR_CONTAINER_CLASS: &str = "codex-editor";

/// Classes applied to settings buttons; hosts override to restyle the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    pub button: String,
    pub button_active: String,
    pub button_modifier: Option<String>,
    pub button_modifier_active: Option<String>,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            button: SETTINGS_BUTTON_CLASS.to_string(),
            button_active: SETTINGS_BUTTON_ACTIVE_CLASS.to_string(),
            button_modifier: None,
            button_modifier_active: None,
        }
    }
}

fn mode_class_pairs(data: &TuneData) -> [(&'static str, bool); 8] {
    [
        (FLOAT_LEFT_CLASS, data.float_left),
        (FLOAT_RIGHT_CLASS, data.float_right),
        (CENTER_CLASS, data.center),
        (SIZE_SMALL_CLASS, data.size_small),
        (SIZE_MIDDLE_CLASS, data.size_middle),
        (SIZE_LARGE_CLASS, data.size_large),
        (RESIZE_CLASS, data.resize),
        (CROP_CLASS, data.crop),
    ]
}

/// The exact set of mode classes a block in this state carries.
pub fn mode_classes(data: &TuneData) -> BTreeSet<&'static str> {
    mode_class_pairs(data)
        .into_iter()
        .filter(|(_, on)| *on)
        .map(|(class, _)| class)
        .collect()
}

/// Sets or removes every mode class to match its flag; other classes are
/// left alone.
pub fn apply_mode_classes(block_root: &mut Element, data: &TuneData) {
    for (class, on) in mode_class_pairs(data) {
        block_root.set_class(class, on);
    }
}
