use super::*;
use assert_matches::assert_matches;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone)]
enum Outcome {
    Succeed(f64),
    Quota,
    Timeout,
    Reject,
}

#[derive(Clone)]
struct Mock {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl Mock {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpeechSynthesizer for Mock {
    async fn synthesize(
        &self,
        text: &str,
        _voice: &VoiceSpec,
    ) -> Result<SynthesizedClip, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Succeed(secs) => Ok(SynthesizedClip {
                audio_url: format!("mem://{}", text.len()),
                duration_secs: *secs,
            }),
            Outcome::Quota => Err(SynthesisError::QuotaExhausted(
                "monthly characters spent".to_string(),
            )),
            Outcome::Timeout => Err(SynthesisError::Timeout("no response in 30s".to_string())),
            Outcome::Reject => Err(SynthesisError::Provider("unknown voice id".to_string())),
        }
    }
}

#[tokio::test]
async fn capacity_failure_falls_through_to_the_next_provider() {
    let first = Mock::new(Outcome::Quota);
    let second = Mock::new(Outcome::Succeed(2.5));
    let chain = FallbackChain::new(vec![first.clone(), second.clone()]);

    let clip = chain.synthesize("hello", &VoiceSpec::default()).await.unwrap();
    assert_eq!(clip.duration_secs, 2.5);
    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 1);
}

#[tokio::test]
async fn transient_failure_falls_through() {
    let chain = FallbackChain::new(vec![
        Mock::new(Outcome::Timeout),
        Mock::new(Outcome::Succeed(1.0)),
    ]);
    assert!(chain.synthesize("hi", &VoiceSpec::default()).await.is_ok());
}

#[tokio::test]
async fn request_rejection_is_terminal() {
    let second = Mock::new(Outcome::Succeed(2.0));
    let chain = FallbackChain::new(vec![Mock::new(Outcome::Reject), second.clone()]);

    let err = chain
        .synthesize("hello", &VoiceSpec::default())
        .await
        .unwrap_err();
    assert_matches!(err, SynthesisError::Provider(_));
    // The rest of the chain is never consulted.
    assert_eq!(second.calls(), 0);
}

#[tokio::test]
async fn exhausted_chain_returns_the_final_error() {
    let chain = FallbackChain::new(vec![Mock::new(Outcome::Quota), Mock::new(Outcome::Timeout)]);
    let err = chain
        .synthesize("hello", &VoiceSpec::default())
        .await
        .unwrap_err();
    assert_matches!(err, SynthesisError::Timeout(_));
}

#[tokio::test]
async fn empty_chain_reports_unavailable() {
    let chain: FallbackChain<Mock> = FallbackChain::new(Vec::new());
    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
    let err = chain
        .synthesize("hello", &VoiceSpec::default())
        .await
        .unwrap_err();
    assert_matches!(err, SynthesisError::Unavailable(_));
}

#[tokio::test]
async fn custom_predicate_replaces_the_classification() {
    // Nothing falls through: even a quota failure is terminal.
    let second = Mock::new(Outcome::Succeed(1.0));
    let chain =
        FallbackChain::with_predicate(vec![Mock::new(Outcome::Quota), second.clone()], |_| false);

    let err = chain
        .synthesize("hello", &VoiceSpec::default())
        .await
        .unwrap_err();
    assert_matches!(err, SynthesisError::QuotaExhausted(_));
    assert_eq!(second.calls(), 0);
}

#[test]
fn classification_table() {
    assert!(SynthesisError::QuotaExhausted(String::new()).falls_through_chain());
    assert!(SynthesisError::RateLimited(String::new()).falls_through_chain());
    assert!(SynthesisError::Timeout(String::new()).falls_through_chain());
    assert!(SynthesisError::Unavailable(String::new()).falls_through_chain());
    assert!(!SynthesisError::Provider(String::new()).falls_through_chain());

    assert!(SynthesisError::QuotaExhausted(String::new()).is_capacity());
    assert!(!SynthesisError::QuotaExhausted(String::new()).is_transient());
    assert!(SynthesisError::Unavailable(String::new()).is_transient());
}
