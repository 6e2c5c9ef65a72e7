// zh-humanizer Core Services

pub mod config_store;
pub mod detection;
pub mod humanizer;
pub mod random_source;
pub mod rules;
pub mod segmenter;
pub mod text_processor;

pub use config_store::*;
pub use random_source::{RandomSource, RngSource, ScriptedSource};
pub use rules::{Lexicon, PatternLibrary};
pub use segmenter::{JiebaSegmenter, Segmenter};

pub use detection::{generate_report, Detector};
pub use humanizer::{compare, Humanizer};
