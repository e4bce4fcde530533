use std::sync::Arc;

use crate::cropper::{CropperHandle, CropperProvider};
use crate::dom::{Element, PointerEvent};
use crate::host::{BlockApi, EditorApi, TuneContext};
use crate::resize::ResizeSession;
use crate::state::{PERSISTED_FIELDS, TuneData};
use crate::style::{
    ButtonStyles, CDX_BLOCK_CLASS, CROP_ACTION_CLASS, CROP_BUTTON_CLASS, CROP_SAVE_CLASS,
    CROPPED_CLASS, CROPPING_CLASS, IMAGE_WRAPPER_CLASS, RESIZABLE_CLASS, RESIZER_BOTTOM_RIGHT_CLASS,
    RESIZER_CLASS, RESIZER_TOP_RIGHT_CLASS, RESIZERS_CLASS, WRAPPER_CLASS, apply_mode_classes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuneSetting {
    pub name: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub group: &'static str,
    pub i18n_key: &'static str,
}

const FLOAT_LEFT_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M3 5h8v8H3V5zm10 2h8v2h-8V7zm0 4h8v2h-8v-2zM3 15h18v2H3v-2zm0 4h18v2H3v-2z"></path></svg>"#;
const FLOAT_RIGHT_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M13 5h8v8h-8V5zM3 7h8v2H3V7zm0 4h8v2H3v-2zm0 4h18v2H3v-2zm0 4h18v2H3v-2z"></path></svg>"#;
const CENTER_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M7 5h10v8H7V5zM3 15h18v2H3v-2zm2 4h14v2H5v-2z"></path></svg>"#;
const SIZE_SMALL_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M9 9h6v6H9V9z"></path></svg>"#;
const SIZE_MIDDLE_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M6 6h12v12H6V6z"></path></svg>"#;
const SIZE_LARGE_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M3 3h18v18H3V3z"></path></svg>"#;
const RESIZE_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 512 512" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M29 30l1 90h36V66h26V30H29zm99 0v36h72V30h-72zm108 0v36h72V30h-72zm108 0v36h72V30h-72zm102 0v78h36V30h-36zm-206 80v36h100.543l-118 118H30v218h218V289.457l118-118V272h36V110H240zm206 34v72h36v-72h-36zM30 156v72h36v-72H30zm416 96v72h36v-72h-36zm0 108v72h36v-72h-36zm-166 86v36h72v-36h-72zm108 0v36h72v-36h-72z"></path></svg>"#;
const CROP_ICON: &str = r#"<svg stroke="currentColor" fill="currentColor" stroke-width="0" viewBox="0 0 24 24" height="1em" width="1em" xmlns="http://www.w3.org/2000/svg"><path d="M21 15h2v2h-2v-2zm0-4h2v2h-2v-2zm2 8h-2v2c1 0 2-1 2-2zM13 3h2v2h-2V3zm8 4h2v2h-2V7zm0-4v2h2c0-1-1-2-2-2zM1 7h2v2H1V7zm16-4h2v2h-2V3zm0 16h2v2h-2v-2zM3 3C2 3 1 4 1 5h2V3zm6 0h2v2H9V3zM5 3h2v2H5V3zm-4 8v8c0 1.1.9 2 2 2h12V11H1zm2 8l2.5-3.21 1.79 2.15 2.5-3.22L13 19H3z"></path></svg>"#;

const SETTINGS: [TuneSetting; 8] = [
    TuneSetting {
        name: "floatLeft",
        icon: FLOAT_LEFT_ICON,
        label: "",
        group: "align",
        i18n_key: "Float left",
    },
    TuneSetting {
        name: "floatRight",
        icon: FLOAT_RIGHT_ICON,
        label: "",
        group: "align",
        i18n_key: "Float right",
    },
    TuneSetting {
        name: "center",
        icon: CENTER_ICON,
        label: "",
        group: "align",
        i18n_key: "Center",
    },
    TuneSetting {
        name: "sizeSmall",
        icon: SIZE_SMALL_ICON,
        label: "",
        group: "size",
        i18n_key: "Small",
    },
    TuneSetting {
        name: "sizeMiddle",
        icon: SIZE_MIDDLE_ICON,
        label: "",
        group: "size",
        i18n_key: "Middle",
    },
    TuneSetting {
        name: "sizeLarge",
        icon: SIZE_LARGE_ICON,
        label: "",
        group: "size",
        i18n_key: "Large",
    },
    TuneSetting {
        name: "resize",
        icon: RESIZE_ICON,
        label: "",
        group: "size",
        i18n_key: "Resize",
    },
    TuneSetting {
        name: "crop",
        icon: CROP_ICON,
        label: "",
        group: "size",
        i18n_key: "Crop",
    },
];

/// Image block tune: alignment, preset sizes, free resize and cropping,
/// persisted as a flat record on the block.
pub struct ImageTune {
    api: Arc<dyn EditorApi>,
    block: Arc<dyn BlockApi>,
    cropper: Arc<dyn CropperProvider>,
    data: TuneData,
    styles: ButtonStyles,
    view: Option<Element>,
    crop_session: Option<Box<dyn CropperHandle>>,
    resize_session: Option<ResizeSession>,
}

impl ImageTune {
    pub fn new(ctx: TuneContext) -> Self {
        let TuneContext { api, block, cropper, data, config } = ctx;
        let data = TuneData::from_persisted(data.as_ref(), &config);

        Self {
            api,
            block,
            cropper,
            data,
            styles: ButtonStyles::default(),
            view: None,
            crop_session: None,
            resize_session: None,
        }
    }

    pub fn with_button_styles(mut self, styles: ButtonStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn is_tune() -> bool {
        true
    }

    /// Keys the host must let through when sanitizing saved blocks.
    pub fn sanitize() -> &'static [&'static str] {
        &PERSISTED_FIELDS
    }

    pub fn settings() -> &'static [TuneSetting] {
        &SETTINGS
    }

    pub fn data(&self) -> &TuneData {
        &self.data
    }

    pub fn save(&self) -> TuneData {
        self.data.clone()
    }

    pub fn crop_session_open(&self) -> bool {
        self.crop_session.is_some()
    }

    pub fn view(&mut self) -> &Element {
        if self.view.is_none() {
            self.view = Some(self.create_view());
        }
        self.view.as_ref().expect("view initialized above")
    }

    pub fn render(&mut self) -> &Element {
        if self.view.is_none() {
            self.view = Some(self.create_view());
        }
        self.sync_button_state();
        self.view.as_ref().expect("view initialized above")
    }

    fn create_view(&self) -> Element {
        let mut wrapper = Element::new("div");
        wrapper.add_class(WRAPPER_CLASS);

        for setting in &SETTINGS {
            let mut button = Element::new("div");
            button.add_class(&self.styles.button);
            if let Some(modifier) = &self.styles.button_modifier {
                button.add_class(modifier);
            }

            let icon = Element::new("span").with_text(setting.icon);
            let mut label = Element::new("span").with_text(setting.label);
            label.set_style("font-size", "8px");
            button.append_child(icon);
            button.append_child(label);

            button.set_attr("data-tune", setting.name);
            button.set_attr("title", setting.label);
            self.api
                .tooltip_on_hover(setting.name, &self.api.translate(setting.i18n_key));

            wrapper.append_child(button);
        }

        wrapper
    }

    fn sync_button_state(&mut self) {
        let Some(view) = self.view.as_mut() else {
            return;
        };
        for button in &mut view.children {
            let Some(name) = button.attr("data-tune").map(str::to_string) else {
                continue;
            };
            let active = self.data.is_mode_active(&name);
            button.set_class(&self.styles.button_active, active);
            if let Some(modifier_active) = &self.styles.button_modifier_active {
                button.set_class(modifier_active, active);
            }
        }
    }

    pub fn handle_toggle_click(&mut self, name: &str, block_root: &mut Element) {
        self.data.toggle(name);
        self.sync_button_state();
        self.apply(block_root);
        self.block.dispatch_change();
    }

    /// Brings the block markup in line with the record; safe to call
    /// repeatedly.
    pub fn apply(&mut self, block_root: &mut Element) {
        apply_mode_classes(block_root, &self.data);

        if self.data.resize {
            if self.data.resize_size > 0 {
                if let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) {
                    block.set_style("width", format!("{}px", self.data.resize_size));
                }
            }
            self.attach_resize_handles(block_root);
        } else {
            self.detach_resize_handles(block_root);
        }

        if self.data.crop {
            // An open session owns the image; its affordances stay as they are.
            if self.crop_session.is_none() {
                self.attach_crop_button(block_root);
                if self.data.has_committed_crop() {
                    self.apply_committed_crop(block_root);
                }
            }
        } else {
            self.uncrop(block_root);
        }
    }

    pub fn wrap(&mut self, block_root: &mut Element) {
        if self.view.is_none() {
            self.view = Some(self.create_view());
        }
        self.apply(block_root);
    }

    /// Strips everything the tune ever attached. Mode flags and the stored
    /// resize width survive; crop geometry does not.
    pub fn unwrap(&mut self, block_root: &mut Element) {
        if let Some(view) = self.view.as_mut() {
            for button in &mut view.children {
                button.remove_class(&self.styles.button_active);
                if let Some(modifier_active) = &self.styles.button_modifier_active {
                    button.remove_class(modifier_active);
                }
            }
        }

        let cleared = TuneData::default();
        apply_mode_classes(block_root, &cleared);
        block_root.remove_class(CROPPING_CLASS);

        if let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) {
            block.remove_class(CROPPING_CLASS);
            block.clear_style("min-width");
            block.clear_style("max-width");
            if let Some(image) = block.find_tag_mut("img") {
                image.remove_class(CROPPED_CLASS);
                image.clear_style("left");
                image.clear_style("top");
                image.clear_style("width");
                image.clear_style("height");
            }
        }

        if let Some(image_wrapper) = block_root.find_class_mut(IMAGE_WRAPPER_CLASS) {
            image_wrapper.clear_style("width");
            image_wrapper.clear_style("height");
            while image_wrapper.remove_child_by_class(CROP_ACTION_CLASS).is_some() {}
        }

        self.detach_resize_handles(block_root);
        self.destroy_crop_session();
        self.data.clear_crop_geometry();
    }

    pub fn destroy(&mut self) {
        self.view = None;
    }

    fn attach_crop_button(&self, block_root: &mut Element) {
        if self.api.is_read_only() {
            return;
        }
        let Some(image_wrapper) = block_root.find_class_mut(IMAGE_WRAPPER_CLASS) else {
            log::debug!("image wrapper missing, crop button not attached");
            return;
        };
        if image_wrapper.find_class(CROP_ACTION_CLASS).is_some() {
            return;
        }

        let mut button = Element::new("div").with_text(self.api.translate("Crop"));
        button.add_class(CROP_BUTTON_CLASS);
        button.add_class(CROP_ACTION_CLASS);
        image_wrapper.append_child(button);
    }

    /// Hands the image to the cropping widget. Ignored in read-only mode and
    /// while a session is already open.
    pub fn begin_crop_session(&mut self, block_root: &mut Element) {
        if self.api.is_read_only() {
            return;
        }
        if self.crop_session.is_some() {
            return;
        }

        self.uncrop(block_root);

        let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) else {
            log::debug!("cdx block missing, crop session not started");
            return;
        };
        block.add_class(CROPPING_CLASS);
        let Some(image) = block.find_tag("img") else {
            block.remove_class(CROPPING_CLASS);
            log::debug!("image element missing, crop session not started");
            return;
        };
        let handle = self.cropper.attach(image);
        self.crop_session = Some(handle);

        let mut save = Element::new("div").with_text(self.api.translate("Apply"));
        save.add_class(CROP_SAVE_CLASS);
        save.add_class(CROP_ACTION_CLASS);
        if let Some(image_wrapper) = block_root.find_class_mut(IMAGE_WRAPPER_CLASS) {
            image_wrapper.append_child(save);
        }

        // Lifts the block above its neighbors while the widget is open.
        block_root.add_class(CROPPING_CLASS);
    }

    /// Records the widget geometry into the block and tears the widget down.
    /// Without an open session the stored geometry is re-applied as is.
    pub fn commit_crop(&mut self, block_root: &mut Element) {
        if let Some(handle) = &self.crop_session {
            let geometry = handle.geometry();
            self.data.cropper_frame_height = geometry.crop_box.height;
            self.data.cropper_frame_width = geometry.crop_box.width;
            self.data.cropper_frame_left = geometry.canvas.left - geometry.crop_box.left;
            self.data.cropper_frame_top = geometry.canvas.top - geometry.crop_box.top;
            self.data.cropper_image_height = geometry.image.height;
            self.data.cropper_image_width = geometry.image.width;
        }

        self.apply_committed_crop(block_root);

        if let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) {
            block.remove_class(CROPPING_CLASS);
        }
        if let Some(image_wrapper) = block_root.find_class_mut(IMAGE_WRAPPER_CLASS) {
            while image_wrapper.remove_child_by_class(CROP_ACTION_CLASS).is_some() {}
        }

        self.destroy_crop_session();
        self.attach_crop_button(block_root);
        block_root.remove_class(CROPPING_CLASS);
        self.block.dispatch_change();
    }

    fn apply_committed_crop(&self, block_root: &mut Element) {
        let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) else {
            return;
        };
        block.set_style("min-width", format!("{}px", self.data.cropper_frame_width));
        block.set_style("max-width", format!("{}px", self.data.cropper_frame_width));

        if let Some(image) = block.find_tag_mut("img") {
            image.set_style("width", format!("{}px", self.data.cropper_image_width));
            image.set_style("height", format!("{}px", self.data.cropper_image_height));
            image.set_style("left", format!("{}px", self.data.cropper_frame_left));
            image.set_style("top", format!("{}px", self.data.cropper_frame_top));
            image.add_class(CROPPED_CLASS);
        }

        let Some(image_wrapper) = block_root.find_class_mut(IMAGE_WRAPPER_CLASS) else {
            return;
        };
        image_wrapper.set_style("width", format!("{}px", self.data.cropper_frame_width));
        image_wrapper.set_style("height", format!("{}px", self.data.cropper_frame_height));
    }

    /// Reverts every crop effect; a no-op in read-only mode.
    pub fn uncrop(&mut self, block_root: &mut Element) {
        if self.api.is_read_only() {
            return;
        }

        if let Some(image_wrapper) = block_root.find_class_mut(IMAGE_WRAPPER_CLASS) {
            while image_wrapper.remove_child_by_class(CROP_ACTION_CLASS).is_some() {}
            image_wrapper.clear_style("width");
            image_wrapper.clear_style("height");
            if let Some(image) = image_wrapper.find_tag_mut("img") {
                image.remove_class(CROPPED_CLASS);
                image.clear_style("left");
                image.clear_style("top");
                image.clear_style("width");
                image.clear_style("height");
            }
        }

        if let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) {
            block.remove_class(CROPPING_CLASS);
            block.clear_style("min-width");
            block.clear_style("max-width");
        }

        block_root.remove_class(CROPPING_CLASS);
        self.destroy_crop_session();
        self.data.clear_crop_geometry();
    }

    fn destroy_crop_session(&mut self) {
        let Some(mut handle) = self.crop_session.take() else {
            return;
        };
        if let Err(err) = handle.destroy() {
            log::warn!("cropper teardown failed: {}", err.message());
        }
    }

    fn attach_resize_handles(&self, block_root: &mut Element) {
        if self.api.is_read_only() {
            return;
        }
        let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) else {
            log::debug!("cdx block missing, resize handles not attached");
            return;
        };
        if block.find_class(RESIZABLE_CLASS).is_some() {
            return;
        }

        let mut resizers = Element::new("div");
        resizers.add_class(RESIZERS_CLASS);
        for corner in [RESIZER_TOP_RIGHT_CLASS, RESIZER_BOTTOM_RIGHT_CLASS] {
            let mut handle = Element::new("div");
            handle.add_class(RESIZER_CLASS);
            handle.add_class(corner);
            resizers.append_child(handle);
        }

        let mut resizable = Element::new("div");
        resizable.add_class(RESIZABLE_CLASS);
        resizable.append_child(resizers);
        block.append_child(resizable);
    }

    fn detach_resize_handles(&self, block_root: &mut Element) {
        let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) else {
            return;
        };
        while block.remove_child_by_class(RESIZABLE_CLASS).is_some() {}
        block.set_style("width", "auto");
    }

    /// The container width is sampled once here as the clamp for the drag.
    pub fn begin_resize_drag(&mut self, block_root: &Element, event: &PointerEvent) {
        let max_width = self.api.container_width();
        let Some(block) = block_root.find_class(CDX_BLOCK_CLASS) else {
            log::debug!("cdx block missing, resize drag not started");
            return;
        };
        let start_width = block.computed_width().unwrap_or(0.0);
        self.resize_session = Some(ResizeSession::start(event, start_width, max_width));
    }

    pub fn pointer_moved(&mut self, block_root: &mut Element, event: &PointerEvent) {
        let Some(session) = self.resize_session else {
            return;
        };
        let Some(block) = block_root.find_class_mut(CDX_BLOCK_CLASS) else {
            return;
        };
        session.update(event, block);
    }

    /// Records the width the block settled on; releasing twice is harmless.
    pub fn pointer_released(&mut self, block_root: &mut Element) {
        let Some(session) = self.resize_session.take() else {
            return;
        };
        if let Some(block) = block_root.find_class(CDX_BLOCK_CLASS) {
            if let Some(width) = session.end(block) {
                self.data.resize_size = width;
            }
        }
        self.block.dispatch_change();
    }
}
