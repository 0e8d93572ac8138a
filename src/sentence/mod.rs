/*!
 * Sentence extraction pipeline.
 *
 * This module turns subtitle text into learner-sized sentences:
 * - `cleaner`: strip subtitle artifacts and merge broken lines
 * - `segmenter`: split the cleaned corpus into sentences
 * - `analyzer`: tag terms with parts of speech (lexicon in `lexicon`)
 * - `proficiency`: tier thresholds and sentence filtering
 * - `selector`: uniform random choice among qualifying sentences
 * - `cache`: time-limited corpus cache keyed by subtitle path
 * - `service`: request entry point tying the stages together
 */

pub mod analyzer;
pub mod cache;
pub mod cleaner;
pub mod lexicon;
pub mod proficiency;
pub mod segmenter;
pub mod selector;
pub mod service;

pub use analyzer::{analyze, AnalyzedSentence, PartOfSpeech, TaggedTerm};
pub use cache::{corpus_cache_key, CorpusCache, CorpusStore};
pub use cleaner::{clean_line, clean_lines};
pub use proficiency::{filter_sentences, ProficiencyLevel, ProficiencyThreshold};
pub use segmenter::segment;
pub use selector::select_sentence;
pub use service::{SentenceResult, SentenceService};
