use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::host::TuneConfig;

/// Every key the tune persists; hosts whitelist these during sanitization.
pub const PERSISTED_FIELDS: [&str; 15] = [
    "floatLeft",
    "floatRight",
    "center",
    "sizeSmall",
    "sizeMiddle",
    "sizeLarge",
    "resize",
    "resizeSize",
    "crop",
    "cropperFrameHeight",
    "cropperFrameWidth",
    "cropperFrameLeft",
    "cropperFrameTop",
    "cropperImageHeight",
    "cropperImageWidth",
];

/// Flat per-block layout record, persisted exactly as named on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuneData {
    #[serde(default)]
    pub float_left: bool,
    #[serde(default)]
    pub float_right: bool,
    #[serde(default)]
    pub center: bool,
    #[serde(default)]
    pub size_small: bool,
    #[serde(default)]
    pub size_middle: bool,
    #[serde(default)]
    pub size_large: bool,
    #[serde(default)]
    pub resize: bool,
    #[serde(default)]
    pub resize_size: u32,
    #[serde(default)]
    pub crop: bool,
    #[serde(default)]
    pub cropper_frame_height: f64,
    #[serde(default)]
    pub cropper_frame_width: f64,
    #[serde(default)]
    pub cropper_frame_left: f64,
    #[serde(default)]
    pub cropper_frame_top: f64,
    #[serde(default)]
    pub cropper_image_height: f64,
    #[serde(default)]
    pub cropper_image_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    FloatLeft,
    FloatRight,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    #[default]
    None,
    Small,
    Middle,
    Large,
    Resize,
    Crop,
}

impl TuneData {
    /// Missing keys fall back to their defaults; the `resize` and `crop`
    /// flags fall back to the tune configuration instead.
    pub fn from_persisted(data: Option<&Value>, config: &TuneConfig) -> Self {
        let get_bool = |key: &str| data.and_then(|v| v.get(key)).and_then(Value::as_bool);
        let get_f64 = |key: &str| {
            data.and_then(|v| v.get(key))
                .and_then(Value::as_f64)
                .unwrap_or(0.0)
        };

        Self {
            float_left: get_bool("floatLeft").unwrap_or(false),
            float_right: get_bool("floatRight").unwrap_or(false),
            center: get_bool("center").unwrap_or(false),
            size_small: get_bool("sizeSmall").unwrap_or(false),
            size_middle: get_bool("sizeMiddle").unwrap_or(false),
            size_large: get_bool("sizeLarge").unwrap_or(false),
            resize: get_bool("resize").unwrap_or(config.resize),
            resize_size: data
                .and_then(|v| v.get("resizeSize"))
                .and_then(Value::as_u64)
                .unwrap_or(0) as u32,
            crop: get_bool("crop").unwrap_or(config.crop),
            cropper_frame_height: get_f64("cropperFrameHeight"),
            cropper_frame_width: get_f64("cropperFrameWidth"),
            cropper_frame_left: get_f64("cropperFrameLeft"),
            cropper_frame_top: get_f64("cropperFrameTop"),
            cropper_image_height: get_f64("cropperImageHeight"),
            cropper_image_width: get_f64("cropperImageWidth"),
        }
    }

    /// Flips one mode flag and clears the rest of its exclusivity group. An
    /// unrecognized name clears both groups except `center`. Dependent
    /// geometry is zeroed whenever its owning flag ends up off.
    pub fn toggle(&mut self, name: &str) {
        match name {
            "floatLeft" => {
                self.float_left = !self.float_left;
                self.float_right = false;
                self.center = false;
            }
            "floatRight" => {
                self.float_left = false;
                self.float_right = !self.float_right;
                self.center = false;
            }
            "center" => {
                self.float_left = false;
                self.float_right = false;
                self.center = !self.center;
            }
            "sizeSmall" => {
                self.size_small = !self.size_small;
                self.size_middle = false;
                self.size_large = false;
                self.resize = false;
                self.crop = false;
            }
            "sizeMiddle" => {
                self.size_small = false;
                self.size_middle = !self.size_middle;
                self.size_large = false;
                self.resize = false;
                self.crop = false;
            }
            "sizeLarge" => {
                self.size_small = false;
                self.size_middle = false;
                self.size_large = !self.size_large;
                self.resize = false;
                self.crop = false;
            }
            "resize" => {
                self.size_small = false;
                self.size_middle = false;
                self.size_large = false;
                self.resize = !self.resize;
                self.crop = false;
            }
            "crop" => {
                self.size_small = false;
                self.size_middle = false;
                self.size_large = false;
                self.resize = false;
                self.resize_size = 0;
                self.crop = !self.crop;
            }
            _ => {
                self.float_left = false;
                self.float_right = false;
                self.size_small = false;
                self.size_middle = false;
                self.size_large = false;
                self.resize = false;
                self.crop = false;
            }
        }

        if !self.resize {
            self.resize_size = 0;
        }
        if !self.crop {
            self.clear_crop_geometry();
        }
    }

    pub fn is_mode_active(&self, name: &str) -> bool {
        match name {
            "floatLeft" => self.float_left,
            "floatRight" => self.float_right,
            "center" => self.center,
            "sizeSmall" => self.size_small,
            "sizeMiddle" => self.size_middle,
            "sizeLarge" => self.size_large,
            "resize" => self.resize,
            "crop" => self.crop,
            _ => false,
        }
    }

    pub fn clear_crop_geometry(&mut self) {
        self.cropper_frame_height = 0.0;
        self.cropper_frame_width = 0.0;
        self.cropper_frame_left = 0.0;
        self.cropper_frame_top = 0.0;
        self.cropper_image_height = 0.0;
        self.cropper_image_width = 0.0;
    }

    /// A crop has been committed once the stored frame has positive extent.
    pub fn has_committed_crop(&self) -> bool {
        self.cropper_frame_height > 0.0 && self.cropper_frame_width > 0.0
    }

    pub fn alignment(&self) -> Alignment {
        if self.float_left {
            Alignment::FloatLeft
        } else if self.float_right {
            Alignment::FloatRight
        } else if self.center {
            Alignment::Center
        } else {
            Alignment::None
        }
    }

    pub fn size_mode(&self) -> SizeMode {
        if self.size_small {
            SizeMode::Small
        } else if self.size_middle {
            SizeMode::Middle
        } else if self.size_large {
            SizeMode::Large
        } else if self.resize {
            SizeMode::Resize
        } else if self.crop {
            SizeMode::Crop
        } else {
            SizeMode::None
        }
    }
}
