// Humanizer Module
// Rewrites AI-flavoured text through an intensity-graded pipeline:
// - substitution: light first-occurrence swaps and the ratio pass
// - syntax: list scaffold, 不仅…而且…, long-sentence split
// - expression: first person, intensifiers, hedges, particles
// - comparison: before/after report

pub mod comparison;
pub mod expression;
pub mod substitution;
pub mod syntax;

pub use comparison::compare;

use crate::error::Result;
use crate::models::{Change, HumanizeResult, Intensity};
use crate::services::random_source::{RandomSource, RngSource};
use crate::services::rules::{Lexicon, PatternLibrary};
use crate::services::segmenter::{JiebaSegmenter, Segmenter};
use crate::services::text_processor::{char_len, preview};
use rand::rngs::StdRng;
use tracing::{debug, info};

const MEDIUM_RATIO: f64 = 0.6;
const HEAVY_RATIO: f64 = 0.9;
const MEDIUM_PARTICLES: usize = 2;
const HEAVY_PARTICLES: usize = 5;

/// Intensity-graded rewriter. Owns its randomness stream; the rule corpus is borrowed.
pub struct Humanizer<'a, R: RandomSource> {
    lexicon: &'a Lexicon,
    patterns: &'a PatternLibrary,
    segmenter: &'a dyn Segmenter,
    rng: R,
}

impl Humanizer<'static, RngSource<StdRng>> {
    /// Process-wide rule corpus with an entropy-seeded stream.
    pub fn new() -> Self {
        Self::with_rng(RngSource::from_entropy())
    }

    /// Reproducible rewrites for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(RngSource::seeded(seed))
    }
}

impl Default for Humanizer<'static, RngSource<StdRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Humanizer<'static, R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_parts(
            Lexicon::global(),
            PatternLibrary::global(),
            JiebaSegmenter::global(),
            rng,
        )
    }
}

impl<'a, R: RandomSource> Humanizer<'a, R> {
    pub fn with_parts(
        lexicon: &'a Lexicon,
        patterns: &'a PatternLibrary,
        segmenter: &'a dyn Segmenter,
        rng: R,
    ) -> Self {
        Self {
            lexicon,
            patterns,
            segmenter,
            rng,
        }
    }

    /// Rewrite `text` at `intensity`. Blank input comes back unchanged with no changes.
    pub fn humanize(&mut self, text: &str, intensity: Intensity) -> HumanizeResult {
        if text.trim().is_empty() {
            return HumanizeResult {
                text: text.to_string(),
                original_length: 0,
                modified_length: 0,
                changes: Vec::new(),
                change_count: 0,
                intensity,
            };
        }

        let (out, changes) = match intensity {
            Intensity::Light => self.light(text),
            Intensity::Medium => self.medium(text),
            Intensity::Heavy => self.heavy(text),
        };

        info!(
            "[humanize] \"{}\" intensity={} changes={} chars {} -> {}",
            preview(text, 20),
            intensity,
            changes.len(),
            char_len(text),
            char_len(&out)
        );

        HumanizeResult {
            original_length: char_len(text),
            modified_length: char_len(&out),
            change_count: changes.len(),
            text: out,
            changes,
            intensity,
        }
    }

    /// String-keyed entry point; an unknown intensity fails before any text is touched.
    pub fn humanize_str(&mut self, text: &str, intensity: &str) -> Result<HumanizeResult> {
        let intensity: Intensity = intensity.parse()?;
        Ok(self.humanize(text, intensity))
    }

    /// Independent calls in order, sharing one intensity and this humanizer's stream.
    pub fn batch_humanize<S: AsRef<str>>(
        &mut self,
        texts: &[S],
        intensity: Intensity,
    ) -> Vec<HumanizeResult> {
        debug!("[humanize] batch of {} at {}", texts.len(), intensity);
        texts
            .iter()
            .map(|text| self.humanize(text.as_ref(), intensity))
            .collect()
    }

    pub fn batch_humanize_str<S: AsRef<str>>(
        &mut self,
        texts: &[S],
        intensity: &str,
    ) -> Result<Vec<HumanizeResult>> {
        let intensity: Intensity = intensity.parse()?;
        Ok(self.batch_humanize(texts, intensity))
    }

    fn light(&mut self, text: &str) -> (String, Vec<Change>) {
        substitution::light_substitution(text, self.lexicon, &mut self.rng)
    }

    fn medium(&mut self, text: &str) -> (String, Vec<Change>) {
        let (out, mut changes) = self.substitute(text, MEDIUM_RATIO);
        let (out, syntax) = syntax::adjust_syntax(&out, self.patterns, &mut self.rng);
        debug!("[humanize] syntax changes={}", syntax.len());
        changes.extend(syntax);
        let (out, particles) =
            expression::add_colloquial_particles(&out, MEDIUM_PARTICLES, &mut self.rng);
        changes.extend(particles);
        (out, changes)
    }

    fn heavy(&mut self, text: &str) -> (String, Vec<Change>) {
        let (out, mut changes) = self.substitute(text, HEAVY_RATIO);
        let (out, syntax) = syntax::adjust_syntax(&out, self.patterns, &mut self.rng);
        debug!("[humanize] syntax changes={}", syntax.len());
        changes.extend(syntax);

        let (out, voice) = expression::add_personal_voice(&out, &mut self.rng);
        changes.extend(voice);
        let (out, emotion) = expression::add_emotion_markers(&out, &mut self.rng);
        changes.extend(emotion);
        let (out, hedges) = expression::soften_certainty(&out, &mut self.rng);
        changes.extend(hedges);
        let (out, particles) =
            expression::add_colloquial_particles(&out, HEAVY_PARTICLES, &mut self.rng);
        changes.extend(particles);
        (out, changes)
    }

    fn substitute(&mut self, text: &str, ratio: f64) -> (String, Vec<Change>) {
        let tokens = self.segmenter.segment(text);
        let (out, changes) =
            substitution::ratio_substitution(text, &tokens, self.lexicon, ratio, &mut self.rng);
        debug!("[humanize] ratio={} tokens={} substitutions={}", ratio, tokens.len(), changes.len());
        (out, changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HumanizerError;
    use crate::models::ChangeKind;
    use crate::services::random_source::ScriptedSource;

    const AI_TEXT: &str = "首先，人工智能显而易见地改变了生活。其次，我们必须进行深入研究，不仅要提升效率而且要确保安全。最后，这一定具有重要意义。";

    #[test]
    fn test_blank_input_is_identity() {
        let mut humanizer = Humanizer::seeded(1);
        for intensity in [Intensity::Light, Intensity::Medium, Intensity::Heavy] {
            let result = humanizer.humanize("  ", intensity);
            assert_eq!(result.text, "  ");
            assert_eq!(result.change_count, 0);
            assert_eq!(result.original_length, 0);
            assert_eq!(result.intensity, intensity);
        }
    }

    #[test]
    fn test_invalid_intensity_rejected_even_for_empty_text() {
        let mut humanizer = Humanizer::seeded(1);
        for text in ["", AI_TEXT] {
            let err = humanizer.humanize_str(text, "extreme").unwrap_err();
            assert!(matches!(err, HumanizerError::InvalidIntensity(_)));
        }
        assert!(humanizer.batch_humanize_str(&[AI_TEXT], "nope").is_err());
    }

    #[test]
    fn test_change_count_matches_log() {
        let mut humanizer = Humanizer::seeded(7);
        for intensity in [Intensity::Light, Intensity::Medium, Intensity::Heavy] {
            let result = humanizer.humanize(AI_TEXT, intensity);
            assert_eq!(result.change_count, result.changes.len());
            assert_eq!(result.original_length, char_len(AI_TEXT));
            assert_eq!(result.modified_length, char_len(&result.text));
        }
    }

    #[test]
    fn test_scripted_heavy_pipeline_order() {
        let mut humanizer = Humanizer::with_rng(ScriptedSource::always());
        let result = humanizer.humanize(AI_TEXT, Intensity::Heavy);
        let kinds: Vec<_> = result.changes.iter().map(|c| c.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| *k as u8);
        assert_eq!(kinds, sorted, "stages must log in pipeline order");
        assert!(result.change_count > 0);
    }

    #[test]
    fn test_scripted_medium_pipeline_order() {
        let mut humanizer = Humanizer::with_rng(ScriptedSource::always());
        let result = humanizer.humanize(AI_TEXT, Intensity::Medium);
        let kinds: Vec<_> = result.changes.iter().map(|c| c.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| *k as u8);
        assert_eq!(kinds, sorted, "stages must log in pipeline order");
        assert_eq!(kinds.first(), Some(&ChangeKind::WordSubstitution));

        let particles = kinds.iter().filter(|k| **k == ChangeKind::ColloquialParticle).count();
        assert!(particles <= MEDIUM_PARTICLES);
        for heavy_only in [
            ChangeKind::PersonalVoice,
            ChangeKind::EmotionMarker,
            ChangeKind::CertaintySoftening,
        ] {
            assert!(!kinds.contains(&heavy_only), "{:?} in medium output", heavy_only);
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = Humanizer::seeded(42).humanize(AI_TEXT, Intensity::Heavy);
        let b = Humanizer::seeded(42).humanize(AI_TEXT, Intensity::Heavy);
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_preserves_order() {
        let mut humanizer = Humanizer::seeded(3);
        let results = humanizer.batch_humanize(&["", AI_TEXT], Intensity::Medium);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].text, "");
        assert_eq!(results[1].intensity, Intensity::Medium);
    }
}
