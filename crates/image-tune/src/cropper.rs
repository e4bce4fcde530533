use serde::{Deserialize, Serialize};

use crate::dom::Element;

#[derive(Debug, Clone)]
pub struct CropperError {
    message: String,
}

impl CropperError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropBoxData {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasData {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageData {
    pub width: f64,
    pub height: f64,
}

/// Selection box, canvas and natural image size, all in widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropGeometry {
    pub crop_box: CropBoxData,
    pub canvas: CanvasData,
    pub image: ImageData,
}

/// Live cropping session over one image.
pub trait CropperHandle: Send + Sync {
    fn geometry(&self) -> CropGeometry;

    /// Tears the widget down. Called exactly once per session.
    fn destroy(&mut self) -> Result<(), CropperError>;
}

/// Factory for cropping sessions; hosts inject whichever widget they render
/// with.
pub trait CropperProvider: Send + Sync {
    fn attach(&self, image: &Element) -> Box<dyn CropperHandle>;
}

/// Provider whose sessions always report the same geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedCropper {
    pub geometry: CropGeometry,
}

impl FixedCropper {
    pub fn new(geometry: CropGeometry) -> Self {
        Self { geometry }
    }
}

impl CropperProvider for FixedCropper {
    fn attach(&self, _image: &Element) -> Box<dyn CropperHandle> {
        Box::new(FixedHandle {
            geometry: self.geometry,
        })
    }
}

#[derive(Debug)]
struct FixedHandle {
    geometry: CropGeometry,
}

impl CropperHandle for FixedHandle {
    fn geometry(&self) -> CropGeometry {
        self.geometry
    }

    fn destroy(&mut self) -> Result<(), CropperError> {
        Ok(())
    }
}
