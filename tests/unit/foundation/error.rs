use super::*;
use assert_matches::assert_matches;

#[test]
fn constructors_build_the_matching_variant() {
    assert_matches!(
        CinegridError::invalid_duration("x"),
        CinegridError::InvalidDuration(_)
    );
    assert_matches!(CinegridError::validation("x"), CinegridError::Validation(_));
    assert_matches!(
        CinegridError::style_intent("x"),
        CinegridError::StyleIntent(_)
    );
    assert_matches!(CinegridError::serde("x"), CinegridError::Serde(_));
}

#[test]
fn display_includes_the_message() {
    let err = CinegridError::invalid_duration("total duration must be positive");
    assert_eq!(
        err.to_string(),
        "invalid duration: total duration must be positive"
    );
    let err = CinegridError::validation("cut grid has a gap");
    assert_eq!(err.to_string(), "validation error: cut grid has a gap");
}

#[test]
fn anyhow_errors_convert_through_question_mark() {
    fn inner() -> CinegridResult<()> {
        let failing: Result<(), anyhow::Error> = Err(anyhow::anyhow!("backend exploded"));
        failing?;
        Ok(())
    }
    let err = inner().unwrap_err();
    assert_matches!(err, CinegridError::Other(_));
    // Transparent: the wrapped message is the whole display.
    assert_eq!(err.to_string(), "backend exploded");
}
