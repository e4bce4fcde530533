mod common;

use common::{TestEditor, fixture_with, image_block};
use plate_image_tune::{ImageTune, PointerEvent, TuneConfig, TuneData};
use serde_json::json;

#[test]
fn save_returns_the_record_with_wire_names() {
    let mut fx = fixture_with(TestEditor::new(), None, TuneConfig::default());
    let mut block = image_block();

    fx.tune.handle_toggle_click("floatRight", &mut block);
    fx.tune.handle_toggle_click("resize", &mut block);
    fx.tune.begin_resize_drag(&block, &PointerEvent::new(0.0, 0.0));
    fx.tune.pointer_moved(&mut block, &PointerEvent::new(60.0, 0.0));
    fx.tune.pointer_released(&mut block);

    let saved = serde_json::to_value(fx.tune.save()).unwrap();
    assert_eq!(saved["floatRight"], json!(true));
    assert_eq!(saved["floatLeft"], json!(false));
    assert_eq!(saved["resize"], json!(true));
    assert_eq!(saved["resizeSize"], json!(260));
    assert_eq!(saved["crop"], json!(false));
    assert_eq!(saved["cropperFrameWidth"], json!(0.0));

    let object = saved.as_object().unwrap();
    assert_eq!(object.len(), ImageTune::sanitize().len());
    for key in ImageTune::sanitize() {
        assert!(object.contains_key(*key), "missing {key}");
    }
}

#[test]
fn a_saved_record_reloads_identically() {
    let mut fx = fixture_with(TestEditor::new(), None, TuneConfig::default());
    let mut block = image_block();
    fx.tune.handle_toggle_click("center", &mut block);
    fx.tune.handle_toggle_click("sizeMiddle", &mut block);
    let saved = fx.tune.save();

    let reloaded = fixture_with(
        TestEditor::new(),
        Some(serde_json::to_value(&saved).unwrap()),
        TuneConfig::default(),
    );

    assert_eq!(reloaded.tune.data(), &saved);
}

#[test]
fn partial_records_fall_back_field_by_field() {
    let stored = json!({ "sizeLarge": true, "resizeSize": 90 });
    let fx = fixture_with(
        TestEditor::new(),
        Some(stored),
        TuneConfig { resize: true, crop: false },
    );

    let data = fx.tune.data();
    assert!(data.size_large);
    // Absent flags take the config default, absent numbers take zero.
    assert!(data.resize);
    assert_eq!(data.resize_size, 90);
    assert!(!data.crop);
    assert_eq!(data.cropper_frame_width, 0.0);
}

#[test]
fn malformed_values_are_treated_as_absent() {
    let stored = json!({
        "floatLeft": "yes",
        "resizeSize": "wide",
        "cropperFrameWidth": true,
    });
    let fx = fixture_with(TestEditor::new(), Some(stored), TuneConfig::default());

    let data = fx.tune.data();
    assert!(!data.float_left);
    assert_eq!(data.resize_size, 0);
    assert_eq!(data.cropper_frame_width, 0.0);
}

#[test]
fn tune_record_deserializes_from_camel_case() {
    let record: TuneData = serde_json::from_value(json!({
        "floatLeft": true,
        "resize": true,
        "resizeSize": 120,
        "cropperFrameTop": -12.5,
    }))
    .unwrap();

    assert!(record.float_left);
    assert_eq!(record.resize_size, 120);
    assert_eq!(record.cropper_frame_top, -12.5);
    assert!(!record.size_small);
}

#[test]
fn declares_itself_a_tune() {
    assert!(ImageTune::is_tune());
}
