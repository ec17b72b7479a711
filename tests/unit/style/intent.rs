use super::*;
use assert_matches::assert_matches;

#[test]
fn ai_json_parses_fields_leniently() {
    let intent = StyleIntent::from_ai_json(
        r#"[{"imageEffect":"Ken Burns","transition":"whoosh","textAnimation":"TYPEWRITER"},
            {"transition":"slide"}]"#,
    );
    let StyleIntent::Explicit(styles) = intent else {
        panic!("expected explicit styles");
    };
    assert_eq!(styles.len(), 2);
    assert_eq!(styles[0].image_effect, ImageEffect::KenBurns);
    // Unrecognized names fall back to the field default, never an error.
    assert_eq!(styles[0].transition, SceneTransition::Fade);
    assert_eq!(styles[0].text_animation, TextAnimation::Typewriter);
    // Missing fields take defaults.
    assert_eq!(styles[1].image_effect, ImageEffect::ZoomIn);
    assert_eq!(styles[1].transition, SceneTransition::Slide);
    assert_eq!(styles[1].text_animation, TextAnimation::FadeIn);
}

#[test]
fn unusable_ai_json_degrades_to_varied() {
    assert_eq!(
        StyleIntent::from_ai_json("not json at all"),
        StyleIntent::Varied
    );
    // An object is not an array of styles.
    assert_eq!(
        StyleIntent::from_ai_json(r#"{"imageEffect":"zoom-in"}"#),
        StyleIntent::Varied
    );
    assert_eq!(StyleIntent::from_ai_json("[]"), StyleIntent::Varied);
}

#[test]
fn untagged_serde_distinguishes_the_three_shapes() {
    let explicit: StyleIntent = serde_json::from_str(r#"[{"imageEffect":"pulse"}]"#).unwrap();
    assert_matches!(
        explicit,
        StyleIntent::Explicit(ref styles) if styles[0].image_effect == ImageEffect::Pulse
    );

    let keyword: StyleIntent = serde_json::from_str(r#""tech startup""#).unwrap();
    assert_eq!(keyword, StyleIntent::Keyword("tech startup".to_string()));

    let varied: StyleIntent = serde_json::from_str("null").unwrap();
    assert_eq!(varied, StyleIntent::Varied);
}

#[test]
fn untagged_serde_roundtrips() {
    for intent in [
        StyleIntent::Explicit(vec![CutStyle::default()]),
        StyleIntent::Keyword("nature".to_string()),
        StyleIntent::Varied,
    ] {
        let json = serde_json::to_string(&intent).unwrap();
        let back: StyleIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }
}
