use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::config::EmbeddingsConfig;
use crate::error::{FueroError, Result};

/// Turns free text into fixed-length vectors comparable under L2 distance.
///
/// Deterministic for a fixed model version, and tolerant of empty or very
/// short input (some vector comes back, quality unspecified).
#[async_trait]
pub trait TextEncoder: Send + Sync {
    async fn encode_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>>;

    fn dimensions(&self) -> usize;

    async fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.encode_batch(vec![text.to_string()]).await?;
        if embeddings.is_empty() {
            return Err(FueroError::Embedding("No embedding generated".to_string()));
        }
        Ok(embeddings.remove(0))
    }
}

/// Local fastembed-backed encoder. Inference is blocking, so it runs on the
/// blocking thread pool; the model itself is shared behind a mutex.
pub struct LocalEncoder {
    model: Arc<Mutex<TextEmbedding>>,
    batch_size: usize,
    dimensions: usize,
}

impl LocalEncoder {
    pub fn new(config: &EmbeddingsConfig) -> Result<Self> {
        let model = build_model(resolve_embedding_model(&config.model))?;

        Ok(Self {
            model: Arc::new(Mutex::new(model)),
            batch_size: config.batch_size.max(1),
            dimensions: config.dimensions,
        })
    }
}

#[async_trait]
impl TextEncoder for LocalEncoder {
    async fn encode_batch(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let model = Arc::clone(&self.model);
        let batch_size = self.batch_size;
        tokio::task::spawn_blocking(move || {
            let mut model = model.lock().map_err(|e| {
                FueroError::Embedding(format!("Embedding model lock poisoned: {e}"))
            })?;
            model
                .embed(texts, Some(batch_size))
                .map_err(|e| FueroError::Embedding(e.to_string()))
        })
        .await
        .map_err(|e| FueroError::Embedding(format!("Embedding worker failed: {e}")))?
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

impl Clone for LocalEncoder {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            batch_size: self.batch_size,
            dimensions: self.dimensions,
        }
    }
}

fn resolve_embedding_model(model_name: &str) -> EmbeddingModel {
    match model_name {
        "intfloat/multilingual-e5-small" | "multilingual-e5-small" => {
            EmbeddingModel::MultilingualE5Small
        }
        "intfloat/multilingual-e5-base" | "multilingual-e5-base" => {
            EmbeddingModel::MultilingualE5Base
        }
        "intfloat/multilingual-e5-large" | "multilingual-e5-large" => {
            EmbeddingModel::MultilingualE5Large
        }
        "all-MiniLM-L6-v2" | "sentence-transformers/all-MiniLM-L6-v2" => {
            EmbeddingModel::AllMiniLML6V2
        }
        "BAAI/bge-small-en-v1.5" | "bge-small-en-v1.5" => EmbeddingModel::BGESmallENV15,
        _ => EmbeddingModel::MultilingualE5Small,
    }
}

fn build_model(embedding_model: EmbeddingModel) -> Result<TextEmbedding> {
    TextEmbedding::try_new(InitOptions::new(embedding_model).with_show_download_progress(true))
        .map_err(|e| FueroError::Embedding(e.to_string()))
}
