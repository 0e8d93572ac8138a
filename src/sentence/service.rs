/*!
 * Sentence service: the request-level entry point of the pipeline.
 *
 * A request loads the candidate sentences of a subtitle file (from the
 * corpus store, or by ingesting, cleaning and segmenting the file on a
 * miss), filters them for the requested tier and picks one at random.
 */

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use futures::future::join_all;
use log::{debug, warn};
use tokio::task::JoinError;
use serde::Serialize;

use crate::app_config::AnalysisConfig;
use crate::errors::SubtitleError;
use crate::subtitle_processor::SubtitleReader;
use super::analyzer::analyze;
use super::cache::{corpus_cache_key, CorpusCache, CorpusStore};
use super::cleaner::clean_lines;
use super::proficiency::{filter_sentences, filter_sentences_by_name, ProficiencyLevel};
use super::segmenter::segment;
use super::selector::select_sentence;

/// Outcome of one sentence request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceResult {
    /// The selected sentence, or `None` when no candidate qualifies
    pub sentence: Option<String>,
    /// Whether the candidate list came from the corpus store
    pub from_cache: bool,
}

/// Sentence extraction service over an injected corpus store
pub struct SentenceService<S: CorpusStore = CorpusCache> {
    store: S,
    parallel_threshold: usize,
}

impl<S: CorpusStore> SentenceService<S> {
    pub fn new(store: S, config: &AnalysisConfig) -> Self {
        Self {
            store,
            parallel_threshold: config.parallel_threshold,
        }
    }

    /// Create a service with default analysis settings
    pub fn with_store(store: S) -> Self {
        Self::new(store, &AnalysisConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch one sentence for a tier given by name.
    ///
    /// Unknown tier names are not an error: the file is still loaded and the
    /// result carries no sentence.
    pub async fn fetch_sentence<P: AsRef<Path>>(&self, path: P, level: &str) -> Result<SentenceResult, SubtitleError> {
        let path = path.as_ref();
        match ProficiencyLevel::parse(level) {
            Some(level) => self.fetch_sentence_for(path, level).await,
            None => {
                let (candidates, from_cache) = self.load_candidates(path).await?;
                let accepted = filter_sentences_by_name(candidates.as_slice(), level);
                Ok(SentenceResult { sentence: select_sentence(&accepted), from_cache })
            }
        }
    }

    /// Fetch one sentence for a tier
    pub async fn fetch_sentence_for<P: AsRef<Path>>(&self, path: P, level: ProficiencyLevel) -> Result<SentenceResult, SubtitleError> {
        let path = path.as_ref();
        let started = Instant::now();

        let (candidates, from_cache) = self.load_candidates(path).await?;
        let accepted = self.filter_candidates(candidates, level).await;
        let sentence = select_sentence(&accepted);

        debug!(
            "Sentence fetch for {:?} ({}) took {}ms, {} qualifying, from cache: {}",
            path,
            level,
            started.elapsed().as_millis(),
            accepted.len(),
            from_cache
        );

        Ok(SentenceResult { sentence, from_cache })
    }

    /// Get the candidate sentences of a file and whether they came from the store
    pub async fn load_candidates(&self, path: &Path) -> Result<(Arc<Vec<String>>, bool), SubtitleError> {
        let key = corpus_cache_key(path);
        if let Some(candidates) = self.store.get(&key) {
            return Ok((candidates, true));
        }

        let raw_lines = SubtitleReader::read_cue_texts(path).await?;
        let corpus = clean_lines(&raw_lines);
        let candidates = Arc::new(segment(&corpus));
        debug!("Segmented {:?} into {} candidate sentences", path, candidates.len());

        // Concurrent misses may both store; the values are identical
        self.store.set(&key, candidates.clone());
        Ok((candidates, false))
    }

    /// Filter candidates for a tier, analyzing large batches on blocking workers
    async fn filter_candidates(&self, candidates: Arc<Vec<String>>, level: ProficiencyLevel) -> Vec<String> {
        let survivors: Vec<String> = candidates
            .iter()
            .filter(|sentence| level.word_count_prefilter(sentence))
            .cloned()
            .collect();

        if survivors.len() <= self.parallel_threshold {
            return filter_sentences(&survivors, level);
        }

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);
        let chunk_size = survivors.len().div_ceil(workers);

        let chunks: Vec<&[String]> = survivors.chunks(chunk_size).collect();
        let tasks = chunks.iter().map(|chunk| {
            let chunk = chunk.to_vec();
            tokio::task::spawn_blocking(move || analyze_chunk(&chunk, level))
        });

        // join_all keeps task order, so the output keeps candidate order
        let results = join_all(tasks).await;
        let accepted = merge_chunk_results(&chunks, results, level);

        debug!(
            "{} of {} sentences qualify for {} ({} workers)",
            accepted.len(),
            candidates.len(),
            level,
            workers
        );
        accepted
    }
}

/// Sentences of a chunk that qualify, assuming the word-count pre-filter ran
fn analyze_chunk(chunk: &[String], level: ProficiencyLevel) -> Vec<String> {
    chunk
        .iter()
        .filter(|sentence| level.accepts(&analyze(sentence)))
        .cloned()
        .collect()
}

/// Concatenate per-chunk results in chunk order.
///
/// A panicking analysis task resumes its panic here. A task that was
/// cancelled before finishing has its chunk analyzed on the current thread.
fn merge_chunk_results(
    chunks: &[&[String]],
    results: Vec<Result<Vec<String>, JoinError>>,
    level: ProficiencyLevel,
) -> Vec<String> {
    let mut accepted = Vec::new();
    for (chunk, result) in chunks.iter().zip(results) {
        match result {
            Ok(qualifying) => accepted.extend(qualifying),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                warn!("Sentence analysis task did not finish ({}), analyzing {} sentences inline", e, chunk.len());
                accepted.extend(analyze_chunk(chunk, level));
            }
        }
    }
    accepted
}
