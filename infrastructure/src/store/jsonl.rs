//! Append-only JSON Lines question store.
//!
//! Each stored question is one line:
//!
//! ```json
//! {"topic":"Rust","scale":"simple","difficulty":"easy","question":{...},"stored_at":"2026-01-01T00:00:00.000Z"}
//! ```
//!
//! The file is read once on open to build an in-memory index; appends go to
//! the end of the file first and are indexed only after the write succeeded.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use quizforge_application::ports::question_store::{QuestionStore, StoreError};
use quizforge_domain::{DifficultyScale, Question, QuestionKey, Topic};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

/// One line of the store file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    topic: Topic,
    scale: DifficultyScale,
    difficulty: String,
    question: Question,
    stored_at: DateTime<Utc>,
}

impl StoredRecord {
    fn key(&self) -> QuestionKey {
        QuestionKey {
            topic: self.topic.clone(),
            scale: self.scale,
            level: self.difficulty.clone(),
        }
    }
}

/// Append handle for the store file
struct Appender {
    file: File,
    /// Last line in the file is unterminated (interrupted write)
    torn_tail: bool,
}

/// JSONL-backed question store.
pub struct JsonlQuestionStore {
    path: PathBuf,
    index: RwLock<HashMap<QuestionKey, Vec<Question>>>,
    writer: Mutex<Appender>,
}

impl JsonlQuestionStore {
    /// Open (or create) the store file at `path`.
    ///
    /// Lines that cannot be parsed are skipped with a warning.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut index: HashMap<QuestionKey, Vec<Question>> = HashMap::new();
        let mut loaded = 0usize;
        let mut skipped = 0usize;
        let mut torn_tail = false;

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                torn_tail = !contents.is_empty() && !contents.ends_with('\n');
                for (line_no, line) in contents.lines().enumerate() {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match serde_json::from_str::<StoredRecord>(line) {
                        Ok(record) => {
                            index.entry(record.key()).or_default().push(record.question);
                            loaded += 1;
                        }
                        Err(e) => {
                            warn!("{}:{}: skipping record: {}", path.display(), line_no + 1, e);
                            skipped += 1;
                        }
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        info!(
            "Opened question store {} ({} questions, {} partitions, {} skipped)",
            path.display(),
            loaded,
            index.len(),
            skipped
        );

        Ok(Self {
            path,
            index: RwLock::new(index),
            writer: Mutex::new(Appender { file, torn_tail }),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionStore for JsonlQuestionStore {
    async fn count_for(&self, key: &QuestionKey) -> Result<usize, StoreError> {
        Ok(self.index.read().await.get(key).map_or(0, Vec::len))
    }

    async fn fetch(&self, key: &QuestionKey, limit: usize) -> Result<Vec<Question>, StoreError> {
        let index = self.index.read().await;
        let Some(questions) = index.get(key) else {
            return Ok(Vec::new());
        };
        let mut rng = rand::thread_rng();
        Ok(questions.choose_multiple(&mut rng, limit).cloned().collect())
    }

    async fn append(&self, key: &QuestionKey, questions: &[Question]) -> Result<(), StoreError> {
        if questions.is_empty() {
            return Ok(());
        }

        let stored_at = Utc::now();
        // Hold the writer while indexing so file order and index order agree
        let mut writer = self.writer.lock().await;

        let mut buffer = String::new();
        if writer.torn_tail {
            buffer.push('\n');
        }
        for question in questions {
            let record = StoredRecord {
                topic: key.topic.clone(),
                scale: key.scale,
                difficulty: key.level.clone(),
                question: question.clone(),
                stored_at,
            };
            let line = serde_json::to_string(&record)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?;
            buffer.push_str(&line);
            buffer.push('\n');
        }

        // A failed write may leave a partial line behind
        writer.torn_tail = true;
        writer.file.write_all(buffer.as_bytes()).await?;
        writer.file.flush().await?;
        writer.torn_tail = false;

        self.index
            .write()
            .await
            .entry(key.clone())
            .or_default()
            .extend_from_slice(questions);

        debug!("Appended {} questions to {}", questions.len(), key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_domain::{BulkDifficulty, Difficulty};

    fn questions(prefix: &str, n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                Question::new(
                    format!("{} {}", prefix, i),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    "d",
                )
                .unwrap()
            })
            .collect()
    }

    #[tokio::test]
    async fn test_append_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("questions.jsonl");
        let key = QuestionKey::new(Topic::new("Biology").unwrap(), Difficulty::Medium);

        {
            let store = JsonlQuestionStore::open(&path).await.unwrap();
            store.append(&key, &questions("cell", 3)).await.unwrap();
            assert_eq!(store.count_for(&key).await.unwrap(), 3);
        }

        let reopened = JsonlQuestionStore::open(&path).await.unwrap();
        assert_eq!(reopened.count_for(&key).await.unwrap(), 3);
        let fetched = reopened.fetch(&key, 10).await.unwrap();
        assert_eq!(fetched.len(), 3);
        assert!(fetched.iter().all(|q| q.correct_answer() == "d"));
    }

    #[tokio::test]
    async fn test_scales_stay_separate_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.jsonl");
        let topic = Topic::new("Music").unwrap();
        let simple = QuestionKey::new(topic.clone(), Difficulty::Easy);
        let bulk = QuestionKey::new(topic, BulkDifficulty::Easy);

        let store = JsonlQuestionStore::open(&path).await.unwrap();
        store.append(&simple, &questions("s", 2)).await.unwrap();
        store.append(&bulk, &questions("b", 5)).await.unwrap();
        drop(store);

        let reopened = JsonlQuestionStore::open(&path).await.unwrap();
        assert_eq!(reopened.count_for(&simple).await.unwrap(), 2);
        assert_eq!(reopened.count_for(&bulk).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_corrupt_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.jsonl");
        let key = QuestionKey::new(Topic::new("Art").unwrap(), Difficulty::Hard);

        let store = JsonlQuestionStore::open(&path).await.unwrap();
        store.append(&key, &questions("ok", 2)).await.unwrap();
        drop(store);

        let mut contents = tokio::fs::read_to_string(&path).await.unwrap();
        contents.push_str("{not json}\n");
        contents.push_str(
            r#"{"topic":"Art","scale":"simple","difficulty":"hard","question":{"question":"Q?","options":["a","b"],"correctAnswer":"a"},"stored_at":"2026-01-01T00:00:00Z"}"#,
        );
        contents.push('\n');
        tokio::fs::write(&path, contents).await.unwrap();

        let reopened = JsonlQuestionStore::open(&path).await.unwrap();
        assert_eq!(reopened.count_for(&key).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_append_after_unterminated_line_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.jsonl");
        let key = QuestionKey::new(Topic::new("Art").unwrap(), Difficulty::Easy);
        tokio::fs::write(&path, r#"{"topic":"Art","scale":"simple","diff"#)
            .await
            .unwrap();

        let store = JsonlQuestionStore::open(&path).await.unwrap();
        assert_eq!(store.count_for(&key).await.unwrap(), 0);
        store.append(&key, &questions("after", 2)).await.unwrap();
        assert_eq!(store.count_for(&key).await.unwrap(), 2);
        drop(store);

        let reopened = JsonlQuestionStore::open(&path).await.unwrap();
        assert_eq!(reopened.count_for(&key).await.unwrap(), 2);

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_record_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.jsonl");
        let key = QuestionKey::new(Topic::new("Go").unwrap(), BulkDifficulty::Extreme);

        let store = JsonlQuestionStore::open(&path).await.unwrap();
        store.append(&key, &questions("q", 1)).await.unwrap();

        let contents = tokio::fs::read_to_string(store.path()).await.unwrap();
        let line: serde_json::Value = serde_json::from_str(contents.trim()).unwrap();
        assert_eq!(line["topic"], "Go");
        assert_eq!(line["scale"], "bulk");
        assert_eq!(line["difficulty"], "extreme");
        assert_eq!(line["question"]["correctAnswer"], "d");
        assert!(line["stored_at"].is_string());
    }
}
