use super::*;
use crate::timeline::cuts::generate_cut_windows;
use assert_matches::assert_matches;

fn timeline(total: f64, scene: f64, overlap: f64) -> VideoCompositionTimeline {
    let scenes = generate_cut_windows(total, scene)
        .unwrap()
        .into_iter()
        .map(|cut| SceneRenderConfig {
            cut,
            animation: SceneAnimationConfig::default(),
            narration: None,
        })
        .collect();
    VideoCompositionTimeline {
        fps: Fps::default(),
        aspect_ratio: AspectRatio::default(),
        scenes,
        opening: None,
        ending: None,
        transition_overlap_sec: overlap,
        seed: 7,
    }
}

#[test]
fn total_duration_subtracts_interior_overlaps() {
    let tl = timeline(20.0, 5.0, 0.5);
    assert_eq!(tl.scenes.len(), 4);
    assert!((tl.total_duration_secs() - 18.5).abs() < 1e-12);
    assert_eq!(tl.frame_count(), 555);
}

#[test]
fn bumpers_extend_the_output() {
    let mut tl = timeline(20.0, 5.0, 0.5);
    tl.opening = Some(Bumper::new(2.0));
    tl.ending = Some(Bumper::new(1.0));
    assert!((tl.total_duration_secs() - 21.5).abs() < 1e-12);
    // Scenes shift forward by the opening length.
    assert_eq!(tl.scene_start_secs(0), 2.0);
    assert!((tl.scene_start_secs(1) - 6.5).abs() < 1e-12);
}

#[test]
fn scene_starts_shift_back_one_overlap_per_boundary() {
    let tl = timeline(20.0, 5.0, 0.5);
    assert_eq!(tl.scene_start_secs(0), 0.0);
    assert!((tl.scene_start_secs(1) - 4.5).abs() < 1e-12);
    assert!((tl.scene_start_secs(2) - 9.0).abs() < 1e-12);
    assert!((tl.scene_start_secs(3) - 13.5).abs() < 1e-12);
    // The last scene ends exactly at the total.
    let last_end = tl.scene_start_secs(3) + tl.scenes[3].cut.duration_secs();
    assert!((last_end - tl.total_duration_secs()).abs() < 1e-12);
}

#[test]
fn scene_ctx_is_deterministic_and_seeded_per_scene() {
    let tl = timeline(20.0, 5.0, 0.5);
    let a = tl.scene_ctx(1, FrameIndex(140)).unwrap();
    let b = tl.scene_ctx(1, FrameIndex(140)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.scene_start, FrameIndex(135));
    assert_eq!(a.scene_frames, 150);

    // Sibling scenes and reseeded timelines draw different noise streams.
    let sibling = tl.scene_ctx(2, FrameIndex(140)).unwrap();
    assert_ne!(a.seed, sibling.seed);

    let mut reseeded = timeline(20.0, 5.0, 0.5);
    reseeded.seed = 8;
    assert_ne!(a.seed, reseeded.scene_ctx(1, FrameIndex(140)).unwrap().seed);

    assert!(tl.scene_ctx(4, FrameIndex(0)).is_none());
}

#[test]
fn scenes_at_reports_the_overlap_pair() {
    let tl = timeline(20.0, 5.0, 0.5);
    // Scene 0 spans frames [0, 150), scene 1 spans [135, 285).
    assert_eq!(tl.scenes_at(FrameIndex(100)), vec![0]);
    assert_eq!(tl.scenes_at(FrameIndex(140)), vec![0, 1]);
    assert_eq!(tl.scenes_at(FrameIndex(200)), vec![1]);
    assert_eq!(tl.scenes_at(FrameIndex(10_000)), Vec::<usize>::new());
}

#[test]
fn caption_chars_counts_the_attached_text() {
    let mut tl = timeline(10.0, 5.0, 0.5);
    assert_eq!(tl.scenes[0].caption_chars(), 0);
    tl.scenes[0].narration = Some(TimesheetEntry {
        id: 1,
        start_sec: 0.0,
        end_sec: 2.0,
        duration_sec: 2.0,
        audio_url: "mem://clip".to_string(),
        text: "héllo".to_string(),
    });
    // Characters, not bytes.
    assert_eq!(tl.scenes[0].caption_chars(), 5);
}

#[test]
fn validate_accepts_assembled_shapes() {
    timeline(20.0, 5.0, 0.5).validate().unwrap();
    timeline(7.0, 5.0, 0.5).validate().unwrap();
    timeline(600.0, 5.0, 0.5).validate().unwrap();
}

#[test]
fn validate_rejects_structural_damage() {
    let mut tl = timeline(20.0, 5.0, 0.5);
    tl.scenes[2].cut.start_sec += 0.01;
    assert_matches!(tl.validate(), Err(CinegridError::Validation(_)));

    let mut tl = timeline(20.0, 5.0, 0.5);
    tl.scenes[1].cut.id = 9;
    assert_matches!(tl.validate(), Err(CinegridError::Validation(_)));

    let mut tl = timeline(20.0, 5.0, 0.5);
    tl.scenes.clear();
    assert_matches!(tl.validate(), Err(CinegridError::Validation(_)));

    // An overlap longer than the shortest scene cannot play inside it.
    let tl = timeline(5.2, 5.0, 0.5);
    assert_matches!(tl.validate(), Err(CinegridError::Validation(_)));

    let mut tl = timeline(20.0, 5.0, 0.5);
    tl.fps.den = 0;
    assert_matches!(tl.validate(), Err(CinegridError::Validation(_)));
}

#[test]
fn timeline_json_roundtrips() {
    let mut tl = timeline(20.0, 5.0, 0.5);
    tl.opening = Some(Bumper::new(1.5));
    let json = serde_json::to_string(&tl).unwrap();
    let back: VideoCompositionTimeline = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tl);
}
