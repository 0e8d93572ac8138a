/*!
 * Integration tests for the sentence extraction workflow
 */

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;

use linguaflix::app_config::AnalysisConfig;
use linguaflix::errors::SubtitleError;
use linguaflix::sentence::{corpus_cache_key, CorpusCache, CorpusStore, SentenceService};
use crate::common;

/// Store that records every key it is asked for
#[derive(Default)]
struct RecordingStore {
    entries: Mutex<HashMap<String, Arc<Vec<String>>>>,
    requested: Mutex<Vec<String>>,
}

impl CorpusStore for RecordingStore {
    fn get(&self, key: &str) -> Option<Arc<Vec<String>>> {
        self.requested.lock().push(key.to_string());
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, sentences: Arc<Vec<String>>) {
        self.entries.lock().insert(key.to_string(), sentences);
    }
}

fn service() -> SentenceService<CorpusCache> {
    common::init_test_logging();
    SentenceService::with_store(CorpusCache::default())
}

#[tokio::test]
async fn test_fetchSentence_withRepeatedPath_shouldReportCacheOnSecondCall() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "show.srt", &["Love is strange."])?;
    let service = service();

    let first = service.fetch_sentence(&path, "beginner").await?;
    assert!(!first.from_cache);
    assert_eq!(first.sentence.as_deref(), Some("Love is strange."));

    let second = service.fetch_sentence(&path, "beginner").await?;
    assert!(second.from_cache);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withDifferentTiers_shouldShareCorpusEntry() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "show.srt", &["Love is strange."])?;
    let service = service();

    assert!(!service.fetch_sentence(&path, "beginner").await?.from_cache);
    assert!(service.fetch_sentence(&path, "intermediate").await?.from_cache);
    assert_eq!(service.store().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_afterTtlExpiry_shouldReloadFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "show.srt", &["Love is strange."])?;
    let cache = CorpusCache::with_ttl(Duration::from_millis(50), Duration::from_millis(10));
    let _sweeper = cache.start_sweeper();
    let service = SentenceService::with_store(cache);

    assert!(!service.fetch_sentence(&path, "beginner").await?.from_cache);
    assert!(service.fetch_sentence(&path, "beginner").await?.from_cache);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!service.fetch_sentence(&path, "beginner").await?.from_cache);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withSingleQualifyingSentence_shouldAlwaysReturnIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(
        temp_dir.path(),
        "show.srt",
        &["I love you.", "Love is strange.", "Call me."],
    )?;
    let service = service();

    for _ in 0..20 {
        let result = service.fetch_sentence(&path, "beginner").await?;
        assert_eq!(result.sentence.as_deref(), Some("Love is strange."));
    }
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withNoQualifyingSentence_shouldReturnNone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "show.srt", &["I love you.", "Call me."])?;

    let result = service().fetch_sentence(&path, "beginner").await?;
    assert_eq!(result.sentence, None);
    assert!(!result.from_cache);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withEmptyFile_shouldReturnNone() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "empty.srt", "")?;

    let result = service().fetch_sentence(&path, "intermediate").await?;
    assert_eq!(result.sentence, None);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withUnknownTier_shouldReturnNoneAndStillCache() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_subtitle(temp_dir.path(), "show.srt", &["Love is strange."])?;
    let service = service();

    let result = service.fetch_sentence(&path, "expert").await?;
    assert_eq!(result.sentence, None);
    assert!(!result.from_cache);
    assert!(service.fetch_sentence(&path, "beginner").await?.from_cache);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withMissingFile_shouldReturnIoError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let result = service().fetch_sentence(temp_dir.path().join("missing.srt"), "beginner").await;
    assert!(matches!(result, Err(SubtitleError::Io { .. })));
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withBinaryFile_shouldReturnDecodeError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("binary.srt");
    std::fs::write(&path, [0x31, 0x0a, 0xff, 0xfe, 0xfd, 0x0a])?;

    let result = service().fetch_sentence(&path, "beginner").await;
    assert!(matches!(result, Err(SubtitleError::Decode { .. })));
    Ok(())
}

#[tokio::test]
async fn test_loadCandidates_withScenarioFile_shouldSegmentMergedCorpus() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "scenario.srt", common::SCENARIO_SRT)?;
    let service = service();

    let (candidates, from_cache) = service.load_candidates(&path).await?;
    assert!(!from_cache);
    assert_eq!(candidates.as_slice(), ["Hello there.", "how are you today?"]);
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_aboveParallelThreshold_shouldMatchSequentialResult() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut cue = String::new();
    for _ in 0..40 {
        cue.push_str("I love you. Call me. ");
    }
    cue.push_str("Love is strange.");
    let path = common::create_test_subtitle(temp_dir.path(), "long.srt", &[cue.as_str()])?;

    let service = SentenceService::new(CorpusCache::default(), &AnalysisConfig { parallel_threshold: 0 });
    for _ in 0..5 {
        let result = service.fetch_sentence(&path, "beginner").await?;
        assert_eq!(result.sentence.as_deref(), Some("Love is strange."));
    }
    Ok(())
}

#[tokio::test]
async fn test_fetchSentence_withInjectedStore_shouldSkipFileOnHit() -> Result<()> {
    let path = Path::new("never/written.srt");
    let store = RecordingStore::default();
    store.set(&corpus_cache_key(path), Arc::new(vec!["Love is strange.".to_string()]));
    let service = SentenceService::with_store(store);

    let result = service.fetch_sentence(path, "beginner").await?;
    assert!(result.from_cache);
    assert_eq!(result.sentence.as_deref(), Some("Love is strange."));
    assert_eq!(service.store().requested.lock().as_slice(), [corpus_cache_key(path)]);
    Ok(())
}

#[test]
fn test_sentenceResult_shouldSerializeCamelCase() {
    let result = linguaflix::SentenceResult { sentence: None, from_cache: true };
    assert_eq!(serde_json::to_string(&result).unwrap(), r#"{"sentence":null,"fromCache":true}"#);
}
