use std::future::Future;

/// Voice parameters forwarded untouched to a synthesis provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoiceSpec {
    /// Provider-specific voice identifier.
    pub voice_id: Option<String>,
    /// Emotional register hint, e.g. `"excited"`.
    pub emotion: Option<String>,
}

/// One synthesized narration clip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedClip {
    /// Where the rendered audio lives (object storage URL, file path, ...).
    pub audio_url: String,
    /// Measured duration of the produced audio in seconds.
    ///
    /// Contract: this must come from decoding or probing the actual clip,
    /// not from a text-length heuristic. Narration length varies with voice,
    /// language and provider pacing, and every downstream offset depends on
    /// this number. A provider that cannot measure must return an error so
    /// the builder can fall back explicitly.
    pub duration_secs: f64,
}

/// Why a synthesis call failed, classified for fallback decisions.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SynthesisError {
    /// The provider's quota for this account is exhausted.
    #[error("provider quota exhausted: {0}")]
    QuotaExhausted(String),

    /// The provider asked us to slow down.
    #[error("provider rate limited: {0}")]
    RateLimited(String),

    /// The call did not complete in time.
    #[error("synthesis timed out: {0}")]
    Timeout(String),

    /// The provider could not be reached or returned a server error.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The provider rejected this request itself (bad voice id, content
    /// policy, unsupported language). Another attempt with the same input
    /// will fail the same way.
    #[error("synthesis failed: {0}")]
    Provider(String),
}

impl SynthesisError {
    /// Quota or rate-limit failure: the account hit a ceiling, the request
    /// itself is fine.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::QuotaExhausted(_) | Self::RateLimited(_))
    }

    /// Timeout or outage: trying again, or somewhere else, may work.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Unavailable(_))
    }

    /// Whether a fallback chain should move on to its next provider.
    ///
    /// Capacity and transient failures fall through; request-level
    /// rejections are terminal since any provider would refuse the same
    /// input.
    pub fn falls_through_chain(&self) -> bool {
        self.is_capacity() || self.is_transient()
    }
}

/// The injected text-to-speech seam.
///
/// The timesheet builder awaits exactly one call per narration line and
/// treats the implementation as a black box: no retry policy is layered on
/// top beyond what [`FallbackChain`] makes explicit. Implementations are
/// expected to perform their own IO (HTTP, disk cache, ...); the core never
/// does.
pub trait SpeechSynthesizer {
    /// Synthesize one line of narration.
    fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSpec,
    ) -> impl Future<Output = Result<SynthesizedClip, SynthesisError>> + Send;
}

/// Ordered provider list tried in sequence.
///
/// A shared classification predicate decides which failures move on to the
/// next provider (default: [`SynthesisError::falls_through_chain`]). The
/// chain is homogeneous over `S`; orchestration layers with several concrete
/// providers wrap them in an enum that implements [`SpeechSynthesizer`].
pub struct FallbackChain<S> {
    providers: Vec<S>,
    fall_through: fn(&SynthesisError) -> bool,
}

impl<S> FallbackChain<S> {
    /// Chain with the default fall-through classification.
    pub fn new(providers: Vec<S>) -> Self {
        Self {
            providers,
            fall_through: SynthesisError::falls_through_chain,
        }
    }

    /// Chain with a custom fall-through predicate.
    pub fn with_predicate(providers: Vec<S>, fall_through: fn(&SynthesisError) -> bool) -> Self {
        Self {
            providers,
            fall_through,
        }
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no providers at all.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<S> SpeechSynthesizer for FallbackChain<S>
where
    S: SpeechSynthesizer + Sync,
{
    fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSpec,
    ) -> impl Future<Output = Result<SynthesizedClip, SynthesisError>> + Send {
        async move {
            let mut last_err =
                SynthesisError::Unavailable("fallback chain has no providers".to_string());
            for (index, provider) in self.providers.iter().enumerate() {
                match provider.synthesize(text, voice).await {
                    Ok(clip) => return Ok(clip),
                    Err(err) if (self.fall_through)(&err) && index + 1 < self.providers.len() => {
                        tracing::warn!(provider = index, error = %err, "provider failed, trying next");
                        last_err = err;
                    }
                    Err(err) => return Err(err),
                }
            }
            Err(last_err)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/speech/provider.rs"]
mod tests;
