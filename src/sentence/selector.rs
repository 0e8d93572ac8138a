use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one sentence uniformly at random; `None` when there is nothing to pick
pub fn select_sentence<S: AsRef<str>>(sentences: &[S]) -> Option<String> {
    select_sentence_with(sentences, &mut rand::rng())
}

/// Same as [`select_sentence`] with a caller-provided generator
pub fn select_sentence_with<S: AsRef<str>, R: Rng + ?Sized>(sentences: &[S], rng: &mut R) -> Option<String> {
    sentences.choose(rng).map(|sentence| sentence.as_ref().to_string())
}
