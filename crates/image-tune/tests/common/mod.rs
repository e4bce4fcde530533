#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use plate_image_tune::{
    BLOCK_CONTENT_CLASS, BlockApi, CDX_BLOCK_CLASS, CanvasData, CropBoxData, CropGeometry,
    CropperError, CropperHandle, CropperProvider, EditorApi, Element, IMAGE_WRAPPER_CLASS,
    ImageData, ImageTune, TuneConfig, TuneContext,
};
use serde_json::Value;

/// Editor fake: records tooltip registrations and lets tests flip read-only.
pub struct TestEditor {
    pub read_only: bool,
    pub container_width: f64,
    pub tooltips: Mutex<Vec<(String, String)>>,
}

impl TestEditor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            read_only: false,
            container_width: 800.0,
            tooltips: Mutex::new(Vec::new()),
        })
    }

    pub fn read_only() -> Arc<Self> {
        Arc::new(Self {
            read_only: true,
            container_width: 800.0,
            tooltips: Mutex::new(Vec::new()),
        })
    }

    pub fn tooltip_count(&self) -> usize {
        self.tooltips.lock().unwrap().len()
    }
}

impl EditorApi for TestEditor {
    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn tooltip_on_hover(&self, button: &str, text: &str) {
        self.tooltips
            .lock()
            .unwrap()
            .push((button.to_string(), text.to_string()));
    }
}

/// Block fake counting change notifications.
#[derive(Default)]
pub struct TestBlock {
    changes: Mutex<usize>,
}

impl TestBlock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn change_count(&self) -> usize {
        *self.changes.lock().unwrap()
    }
}

impl BlockApi for TestBlock {
    fn dispatch_change(&self) {
        *self.changes.lock().unwrap() += 1;
    }
}

/// Cropper fake: counts attaches and teardowns, reports fixed geometry.
pub struct TestCropper {
    pub geometry: CropGeometry,
    pub attached: Mutex<usize>,
    pub destroyed: Arc<Mutex<usize>>,
}

impl TestCropper {
    pub fn new(geometry: CropGeometry) -> Arc<Self> {
        Arc::new(Self {
            geometry,
            attached: Mutex::new(0),
            destroyed: Arc::new(Mutex::new(0)),
        })
    }

    pub fn attach_count(&self) -> usize {
        *self.attached.lock().unwrap()
    }

    pub fn destroy_count(&self) -> usize {
        *self.destroyed.lock().unwrap()
    }
}

impl CropperProvider for TestCropper {
    fn attach(&self, _image: &Element) -> Box<dyn CropperHandle> {
        *self.attached.lock().unwrap() += 1;
        Box::new(TestHandle {
            geometry: self.geometry,
            destroyed: Arc::clone(&self.destroyed),
        })
    }
}

struct TestHandle {
    geometry: CropGeometry,
    destroyed: Arc<Mutex<usize>>,
}

impl CropperHandle for TestHandle {
    fn geometry(&self) -> CropGeometry {
        self.geometry
    }

    fn destroy(&mut self) -> Result<(), CropperError> {
        *self.destroyed.lock().unwrap() += 1;
        Ok(())
    }
}

/// Geometry with offsets that exercise negative frame positions.
pub fn sample_geometry() -> CropGeometry {
    CropGeometry {
        crop_box: CropBoxData {
            left: 40.0,
            top: 30.0,
            width: 320.0,
            height: 240.0,
        },
        canvas: CanvasData {
            left: 10.0,
            top: 5.0,
            width: 640.0,
            height: 480.0,
        },
        image: ImageData {
            width: 640.0,
            height: 480.0,
        },
    }
}

/// Block markup the way the editor renders an image block.
pub fn image_block() -> Element {
    image_block_with_width(200.0)
}

pub fn image_block_with_width(width: f64) -> Element {
    Element::new("div").with_class(BLOCK_CONTENT_CLASS).with_child(
        Element::new("div")
            .with_class(CDX_BLOCK_CLASS)
            .with_layout_width(width)
            .with_child(
                Element::new("div")
                    .with_class(IMAGE_WRAPPER_CLASS)
                    .with_child(Element::new("img")),
            ),
    )
}

pub struct Fixture {
    pub api: Arc<TestEditor>,
    pub block: Arc<TestBlock>,
    pub cropper: Arc<TestCropper>,
    pub tune: ImageTune,
}

pub fn fixture() -> Fixture {
    fixture_with(TestEditor::new(), None, TuneConfig::default())
}

pub fn fixture_with(api: Arc<TestEditor>, data: Option<Value>, config: TuneConfig) -> Fixture {
    let block = TestBlock::new();
    let cropper = TestCropper::new(sample_geometry());
    let tune = ImageTune::new(TuneContext {
        api: api.clone(),
        block: block.clone(),
        cropper: cropper.clone(),
        data,
        config,
    });

    Fixture {
        api,
        block,
        cropper,
        tune,
    }
}
