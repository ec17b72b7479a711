use super::*;
use crate::{
    animation::config::Intensity,
    effects::image::ImageEffect,
    effects::text::TextAnimation,
    effects::transition::SceneTransition,
    style::intent::CutStyle,
};
use assert_matches::assert_matches;

fn lines(n: u32) -> Vec<NarrationLine> {
    (1..=n)
        .map(|i| NarrationLine::new(i, format!("scene {i} narration text")))
        .collect()
}

fn estimate_for(brief: &VideoBrief) -> Timesheet {
    Timesheet::estimate(&brief.narration, brief.timesheet)
}

#[test]
fn assembles_scenes_with_narration_by_id() {
    let brief = VideoBrief::new(20.0, 5.0)
        .with_narration(lines(4))
        .with_seed(11);
    let tl = assemble(&brief, &estimate_for(&brief)).unwrap();

    assert_eq!(tl.scenes.len(), 4);
    for (i, scene) in tl.scenes.iter().enumerate() {
        assert_eq!(scene.cut.id as usize, i + 1);
        let entry = scene.narration.as_ref().unwrap();
        assert_eq!(entry.id, scene.cut.id);
    }
    assert_eq!(tl.seed, 11);
    assert!((tl.total_duration_secs() - 18.5).abs() < 1e-12);
}

#[test]
fn missing_narration_leaves_scenes_silent() {
    let brief =
        VideoBrief::new(20.0, 5.0).with_narration(vec![NarrationLine::new(2, "just this one")]);
    let tl = assemble(&brief, &estimate_for(&brief)).unwrap();
    assert!(tl.scenes[0].narration.is_none());
    assert!(tl.scenes[1].narration.is_some());
    assert!(tl.scenes[2].narration.is_none());
    assert!(tl.scenes[3].narration.is_none());
}

#[test]
fn unmatched_ids_fall_back_to_positional_attachment() {
    let brief = VideoBrief::new(15.0, 5.0).with_narration(vec![
        NarrationLine::new(100, "first"),
        NarrationLine::new(200, "second"),
    ]);
    let tl = assemble(&brief, &estimate_for(&brief)).unwrap();
    assert_eq!(tl.scenes[0].narration.as_ref().unwrap().text, "first");
    assert_eq!(tl.scenes[1].narration.as_ref().unwrap().text, "second");
    assert!(tl.scenes[2].narration.is_none());
}

#[test]
fn adjacent_boundaries_play_the_same_transition_kind() {
    // The varied pattern changes transitions cut to cut, which would tear
    // the overlap if exits were not paired with the next entrance.
    let brief = VideoBrief::new(30.0, 5.0);
    let tl = assemble(&brief, &Timesheet::default()).unwrap();

    for pair in tl.scenes.windows(2) {
        assert_eq!(pair[0].animation.scene_exit, pair[1].animation.scene_entrance);
    }
    for scene in &tl.scenes {
        assert_eq!(scene.animation.scene_entrance, scene.cut.transition);
    }
    // The last scene exits with the hard default.
    assert_eq!(
        tl.scenes.last().unwrap().animation.scene_exit,
        SceneTransition::Fade
    );
}

#[test]
fn styles_flow_from_the_intent_to_cuts_and_configs() {
    let brief = VideoBrief::new(15.0, 5.0).with_style(StyleIntent::Keyword("tech".to_string()));
    let tl = assemble(&brief, &Timesheet::default()).unwrap();

    assert_eq!(tl.scenes[0].cut.image_effect, ImageEffect::ZoomIn);
    assert_eq!(tl.scenes[0].cut.transition, SceneTransition::Glitch);
    assert_eq!(tl.scenes[0].animation.image_effect, ImageEffect::ZoomIn);
    assert_eq!(tl.scenes[0].animation.text_entrance, TextAnimation::Typewriter);
    assert_eq!(tl.scenes[1].animation.scene_entrance, SceneTransition::Slide);
}

#[test]
fn explicit_styles_pad_to_the_grid() {
    let one = CutStyle::new(ImageEffect::Pulse, SceneTransition::Zoom, TextAnimation::Glow);
    let brief = VideoBrief::new(20.0, 5.0).with_style(StyleIntent::Explicit(vec![one]));
    let tl = assemble(&brief, &Timesheet::default()).unwrap();

    assert_eq!(tl.scenes.len(), 4);
    for scene in &tl.scenes {
        assert_eq!(scene.cut.image_effect, ImageEffect::Pulse);
        assert_eq!(scene.animation.scene_entrance, SceneTransition::Zoom);
        assert_eq!(scene.animation.text_entrance, TextAnimation::Glow);
    }
}

#[test]
fn global_overrides_sit_under_per_scene_styles() {
    let brief = VideoBrief {
        animation: Some(SceneAnimationOverrides {
            // Loses to the style tier on every scene.
            image_effect: Some(ImageEffect::Static),
            text_delay_sec: Some(1.25),
            intensity: Some(Intensity::Strong),
            ..SceneAnimationOverrides::default()
        }),
        ..VideoBrief::new(15.0, 5.0)
    };
    let tl = assemble(&brief, &Timesheet::default()).unwrap();
    for scene in &tl.scenes {
        assert_ne!(scene.animation.image_effect, ImageEffect::Static);
        assert_eq!(scene.animation.text_delay_sec, 1.25);
        assert_eq!(scene.animation.intensity, Intensity::Strong);
    }
}

#[test]
fn boundary_windows_track_the_overlap() {
    let brief = VideoBrief {
        transition_overlap_sec: 0.8,
        ..VideoBrief::new(20.0, 5.0)
    };
    let tl = assemble(&brief, &Timesheet::default()).unwrap();
    assert_eq!(tl.transition_overlap_sec, 0.8);
    for scene in &tl.scenes {
        assert_eq!(scene.animation.transition_duration_sec, 0.8);
    }

    // An explicit global window wins over overlap tracking.
    let brief = VideoBrief {
        transition_overlap_sec: 0.8,
        animation: Some(SceneAnimationOverrides {
            transition_duration_sec: Some(0.3),
            ..SceneAnimationOverrides::default()
        }),
        ..VideoBrief::new(20.0, 5.0)
    };
    let tl = assemble(&brief, &Timesheet::default()).unwrap();
    for scene in &tl.scenes {
        assert_eq!(scene.animation.transition_duration_sec, 0.3);
    }
}

#[test]
fn bumpers_pass_through_to_the_timeline() {
    let brief = VideoBrief {
        opening: Some(Bumper::new(2.0)),
        ending: Some(Bumper::new(1.5)),
        ..VideoBrief::new(20.0, 5.0)
    };
    let tl = assemble(&brief, &Timesheet::default()).unwrap();
    assert_eq!(tl.opening, Some(Bumper::new(2.0)));
    assert_eq!(tl.ending, Some(Bumper::new(1.5)));
    assert!((tl.total_duration_secs() - 22.0).abs() < 1e-12);
}

#[test]
fn broken_briefs_fail_validation() {
    assert_matches!(
        assemble(&VideoBrief::new(0.0, 5.0), &Timesheet::default()),
        Err(CinegridError::InvalidDuration(_))
    );
    assert_matches!(
        assemble(&VideoBrief::new(f64::NAN, 5.0), &Timesheet::default()),
        Err(CinegridError::InvalidDuration(_))
    );

    let brief = VideoBrief {
        transition_overlap_sec: -0.5,
        ..VideoBrief::new(20.0, 5.0)
    };
    assert_matches!(
        assemble(&brief, &Timesheet::default()),
        Err(CinegridError::Validation(_))
    );

    let brief = VideoBrief {
        transition_overlap_sec: 6.0,
        ..VideoBrief::new(20.0, 5.0)
    };
    assert_matches!(
        assemble(&brief, &Timesheet::default()),
        Err(CinegridError::Validation(_))
    );

    let brief = VideoBrief {
        opening: Some(Bumper::new(0.0)),
        ..VideoBrief::new(20.0, 5.0)
    };
    assert_matches!(
        assemble(&brief, &Timesheet::default()),
        Err(CinegridError::Validation(_))
    );
}

#[test]
fn brief_json_fills_defaults() {
    let brief: VideoBrief = serde_json::from_str(
        r#"{"totalDurationSecs": 24, "sceneDurationSecs": 6, "style": "nature"}"#,
    )
    .unwrap();
    assert_eq!(brief.style, StyleIntent::Keyword("nature".to_string()));
    assert_eq!(brief.fps, Fps::default());
    assert_eq!(brief.transition_overlap_sec, TRANSITION_OVERLAP_SECS);
    assert!(brief.narration.is_empty());

    let tl = assemble(&brief, &Timesheet::default()).unwrap();
    assert_eq!(tl.scenes.len(), 4);
    assert_eq!(tl.scenes[0].animation.image_effect, ImageEffect::KenBurns);
}
