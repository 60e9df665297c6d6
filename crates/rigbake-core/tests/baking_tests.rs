use rigbake_core::host::KeyframeStore;
use rigbake_core::{
    bake_transforms, export_curve_json, fix_transform, BakeError, BakeRequest, RotationCurve,
    TransformStatus, SAMPLING_SURFACE,
};
use rigbake_test_fixtures::{MockScene, MockTransform};

fn six_channel_transform(
    base_frame: i64,
    rx: Vec<f64>,
    ry: Vec<f64>,
    rz: Vec<f64>,
) -> MockTransform {
    let n = rx.len();
    MockTransform::new(base_frame)
        .with_channel("tx", vec![1.0; n])
        .with_channel("ty", vec![2.0; n])
        .with_channel("tz", vec![3.0; n])
        .with_channel("rx", rx)
        .with_channel("ry", ry)
        .with_channel("rz", rz)
}

/// it should be a no-op for an empty transform set
#[test]
fn empty_transform_set_is_noop() {
    let mut scene = MockScene::new((0.0, 10.0));
    let report = bake_transforms(&mut scene, &BakeRequest::default()).expect("no-op");
    assert!(report.is_empty());
    assert!(scene.sample_log.is_empty());
    assert!(scene.surface_history.is_empty());
}

/// it should reject a reversed or non-finite time range up front
#[test]
fn rejects_bad_time_range() {
    let mut scene = MockScene::new((0.0, 10.0));
    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.time_range = Some((10.0, 0.0));
    assert!(matches!(
        bake_transforms(&mut scene, &request),
        Err(BakeError::Configuration(_))
    ));

    request.time_range = Some((0.0, f64::NAN));
    assert!(matches!(
        bake_transforms(&mut scene, &request),
        Err(BakeError::Configuration(_))
    ));
    // the fatal path never touched the viewport
    assert!(scene.surface_history.is_empty());
}

/// it should reject a zero sample step and an empty attribute set
#[test]
fn rejects_degenerate_requests() {
    let mut scene = MockScene::new((0.0, 10.0));

    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.sample_step = 0;
    assert!(matches!(
        bake_transforms(&mut scene, &request),
        Err(BakeError::Configuration(_))
    ));

    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.attributes.clear();
    assert!(matches!(
        bake_transforms(&mut scene, &request),
        Err(BakeError::Configuration(_))
    ));
}

/// it should bake one key per frame per attribute over the playback range
#[test]
fn bakes_dense_keys_over_playback_range() {
    // fractional playback endpoints truncate to frames 2..=6
    let mut scene = MockScene::new((2.7, 6.2));
    scene.add_transform(
        "joint1",
        six_channel_transform(
            2,
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0; 5],
            vec![0.0; 5],
        ),
    );
    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.apply_continuity_fix = false;

    let report = bake_transforms(&mut scene, &request).expect("bake");
    assert_eq!(report.status_of("joint1"), Some(&TransformStatus::Baked));
    assert_eq!(scene.sample_log.first(), Some(&("joint1".to_string(), 2)));
    assert_eq!(scene.sample_log.last(), Some(&("joint1".to_string(), 6)));
    assert_eq!(scene.written("joint1", "rx"), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(scene.written("joint1", "tx"), &[1.0; 5]);
}

/// it should stride the range by sample_step
#[test]
fn sample_step_strides_frames() {
    let mut scene = MockScene::new((0.0, 10.0));
    scene.add_transform(
        "joint1",
        six_channel_transform(
            0,
            (0..11).map(f64::from).collect(),
            vec![0.0; 11],
            vec![0.0; 11],
        ),
    );
    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.sample_step = 2;
    request.apply_continuity_fix = false;

    bake_transforms(&mut scene, &request).expect("bake");
    let frames: Vec<i64> = scene.sample_log.iter().map(|(_, f)| *f).collect();
    assert_eq!(frames, vec![0, 2, 4, 6, 8, 10]);
    assert_eq!(
        scene.written("joint1", "rx"),
        &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
    );
}

/// it should repair a baked gimbal flip when the fix is enabled
#[test]
fn applies_continuity_fix_after_bake() {
    let mut scene = MockScene::new((0.0, 1.0));
    scene.add_transform(
        "joint1",
        six_channel_transform(0, vec![170.0, -170.0], vec![0.0, 0.0], vec![0.0, 0.0]),
    );
    let request = BakeRequest::for_transforms(["joint1"]);

    let report = bake_transforms(&mut scene, &request).expect("bake");
    assert_eq!(report.status_of("joint1"), Some(&TransformStatus::Corrected));
    assert_eq!(scene.written("joint1", "rx"), &[170.0, 190.0]);
    assert_eq!(scene.written("joint1", "ry"), &[0.0, 0.0]);
}

/// it should exempt skip-list transforms from the fix but still bake them
#[test]
fn skip_list_exempts_from_fix() {
    let mut scene = MockScene::new((0.0, 1.0));
    scene.add_transform(
        "fixed",
        six_channel_transform(0, vec![170.0, -170.0], vec![0.0, 0.0], vec![0.0, 0.0]),
    );
    scene.add_transform(
        "raw",
        six_channel_transform(0, vec![170.0, -170.0], vec![0.0, 0.0], vec![0.0, 0.0]),
    );
    let mut request = BakeRequest::for_transforms(["fixed", "raw"]);
    request.skip_list = vec!["raw".to_string()];

    let report = bake_transforms(&mut scene, &request).expect("bake");
    assert_eq!(report.status_of("fixed"), Some(&TransformStatus::Corrected));
    assert_eq!(
        report.status_of("raw"),
        Some(&TransformStatus::CorrectionSkipped)
    );
    assert_eq!(scene.written("fixed", "rx"), &[170.0, 190.0]);
    assert_eq!(scene.written("raw", "rx"), &[170.0, -170.0]);
}

/// it should keep baking the batch when one transform fails
#[test]
fn best_effort_across_transforms() {
    let mut scene = MockScene::new((0.0, 1.0));
    scene.add_transform(
        "good",
        six_channel_transform(0, vec![10.0, 20.0], vec![0.0, 0.0], vec![0.0, 0.0]),
    );
    let request = BakeRequest::for_transforms(["missing", "good"]);

    let report = bake_transforms(&mut scene, &request).expect("batch");
    assert!(matches!(
        report.status_of("missing"),
        Some(TransformStatus::Failed(BakeError::Evaluation { .. }))
    ));
    assert_eq!(report.status_of("good"), Some(&TransformStatus::Corrected));
    assert!(!report.all_ok());
    assert_eq!(report.failures().count(), 1);
    // surface swapped out for sampling and restored afterwards
    assert_eq!(scene.active_surface, "perspective");
    assert_eq!(
        scene.surface_history,
        vec![SAMPLING_SURFACE.to_string(), "perspective".to_string()]
    );
}

/// it should fail a transform lacking a requested channel without aborting others
#[test]
fn missing_channel_fails_single_transform() {
    let mut scene = MockScene::new((0.0, 1.0));
    scene.add_transform(
        "incomplete",
        MockTransform::new(0).with_channel("tx", vec![0.0, 0.0]),
    );
    scene.add_transform(
        "good",
        six_channel_transform(0, vec![0.0, 1.0], vec![0.0, 0.0], vec![0.0, 0.0]),
    );
    let request = BakeRequest::for_transforms(["incomplete", "good"]);

    let report = bake_transforms(&mut scene, &request).expect("batch");
    assert!(matches!(
        report.status_of("incomplete"),
        Some(TransformStatus::Failed(BakeError::ChannelNotFound { .. }))
    ));
    assert_eq!(report.status_of("good"), Some(&TransformStatus::Corrected));
}

/// it should leave partial keys when evaluation fails mid-range
#[test]
fn partial_bake_has_no_rollback() {
    let mut scene = MockScene::new((0.0, 4.0));
    scene.add_transform(
        "joint1",
        six_channel_transform(0, vec![0.0; 5], vec![0.0; 5], vec![0.0; 5]).failing_from(2),
    );
    let request = BakeRequest::for_transforms(["joint1"]);

    let report = bake_transforms(&mut scene, &request).expect("batch");
    assert!(matches!(
        report.status_of("joint1"),
        Some(TransformStatus::Failed(BakeError::Evaluation {
            frame: 2,
            ..
        }))
    ));
    // frames 0 and 1 were written before the failure; nothing rolls back
    assert_eq!(scene.written("joint1", "rx").len(), 2);
    assert_eq!(scene.active_surface, "perspective");
}

/// it should record a correction failure and keep the baked keys
#[test]
fn correction_failure_is_recorded() {
    let mut scene = MockScene::new((0.0, 1.0));
    scene.add_transform(
        "joint1",
        MockTransform::new(0).with_channel("tx", vec![5.0, 6.0]),
    );
    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.attributes = vec!["tx".to_string()];

    let report = bake_transforms(&mut scene, &request).expect("batch");
    assert!(matches!(
        report.status_of("joint1"),
        Some(TransformStatus::CorrectionFailed(
            BakeError::ChannelNotFound { .. }
        ))
    ));
    assert_eq!(scene.written("joint1", "tx"), &[5.0, 6.0]);
}

/// it should forward evaluator options unchanged
#[test]
fn forwards_sample_options() {
    let mut scene = MockScene::new((0.0, 0.0));
    scene.add_transform(
        "joint1",
        six_channel_transform(0, vec![0.0], vec![0.0], vec![0.0]),
    );
    let mut request = BakeRequest::for_transforms(["joint1"]);
    request.minimize_rotation = true;
    request.preserve_outside_keys = true;

    bake_transforms(&mut scene, &request).expect("bake");
    let options = scene.last_options.expect("at least one evaluation");
    assert!(options.minimize_rotation);
    assert!(options.disable_implicit_control);
    assert!(options.preserve_outside_keys);
}

/// it should correct an already-baked transform via fix_transform alone
#[test]
fn fix_transform_standalone() {
    let mut scene = MockScene::new((0.0, 1.0));
    for (index, value) in [170.0, -170.0].iter().enumerate() {
        scene.write_key("joint1", "rx", index, *value).unwrap();
        scene.write_key("joint1", "ry", index, 0.0).unwrap();
        scene.write_key("joint1", "rz", index, 0.0).unwrap();
    }
    fix_transform(&mut scene, "joint1").expect("fix");
    assert_eq!(scene.written("joint1", "rx"), &[170.0, 190.0]);
}

/// it should not write anything for curves with fewer than two keys
#[test]
fn single_key_curve_writes_nothing() {
    let mut scene = MockScene::new((0.0, 0.0));
    scene.write_key("joint1", "rx", 0, 42.0).unwrap();
    scene.write_key("joint1", "ry", 0, 7.0).unwrap();
    scene.write_key("joint1", "rz", 0, -3.0).unwrap();
    let writes_before = scene.write_log.len();

    fix_transform(&mut scene, "joint1").expect("no-op");
    assert_eq!(scene.write_log.len(), writes_before);
}

/// it should reject misaligned channels and non-increasing frames
#[test]
fn curve_validation() {
    assert!(matches!(
        RotationCurve::new(vec![0, 1], vec![0.0], vec![0.0, 0.0], vec![0.0, 0.0]),
        Err(BakeError::Configuration(_))
    ));
    assert!(matches!(
        RotationCurve::new(vec![1, 1], vec![0.0, 0.0], vec![0.0, 0.0], vec![0.0, 0.0]),
        Err(BakeError::Configuration(_))
    ));
}

/// it should round-trip the request and curve through serde
#[test]
fn request_and_curve_serde_roundtrip() {
    let request = BakeRequest::for_transforms(["a", "b"]);
    let s = serde_json::to_string(&request).unwrap();
    let parsed: BakeRequest = serde_json::from_str(&s).unwrap();
    assert_eq!(parsed.transforms, vec!["a", "b"]);
    assert_eq!(parsed.sample_step, 1);
    assert!(parsed.apply_continuity_fix);

    let curve = RotationCurve::new(
        vec![0, 1],
        vec![170.0, -170.0],
        vec![0.0, 0.0],
        vec![0.0, 0.0],
    )
    .unwrap();
    let json = export_curve_json(&curve);
    assert!(json.is_object());
    let parsed: RotationCurve = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, curve);
}
