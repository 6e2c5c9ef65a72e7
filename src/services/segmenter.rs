// Word Segmentation
// The core only needs `segment(text) -> tokens`; jieba is the default dictionary segmenter.

use jieba_rs::Jieba;
use std::sync::OnceLock;
use tracing::debug;

/// Splits text into an ordered sequence of tokens. Repeats are preserved.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// jieba dictionary segmenter with HMM enabled for unknown words.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        Self { jieba: Jieba::new() }
    }

    /// Loading the dictionary is expensive; share one instance per process.
    pub fn global() -> &'static JiebaSegmenter {
        static SEGMENTER: OnceLock<JiebaSegmenter> = OnceLock::new();
        SEGMENTER.get_or_init(|| {
            debug!("[segmenter] loading jieba dictionary");
            JiebaSegmenter::new()
        })
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
