use crate::InferenceError;

/// Checkpoint the BART backend loads at startup.
pub const DEFAULT_MODEL_NAME: &str = "facebook/bart-large-cnn";

/// Beam-search generation parameters, fixed for the life of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryParams {
    pub max_length: i64,
    pub min_length: i64,
    pub num_beams: i64,
    pub length_penalty: f64,
    pub early_stopping: bool,
}

impl Default for SummaryParams {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            num_beams: 4,
            length_penalty: 2.0,
            early_stopping: true,
        }
    }
}

impl SummaryParams {
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.num_beams < 1 {
            return Err(InferenceError::InvalidParams(format!(
                "num_beams must be at least 1, got {}",
                self.num_beams
            )));
        }
        if self.min_length < 0 || self.max_length < 1 {
            return Err(InferenceError::InvalidParams(format!(
                "lengths must be positive (min {}, max {})",
                self.min_length, self.max_length
            )));
        }
        if self.min_length > self.max_length {
            return Err(InferenceError::InvalidParams(format!(
                "min_length {} exceeds max_length {}",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }
}

/// A loaded abstractive summarization model.
///
/// Implementations are constructed once on the inference worker and only
/// borrowed afterwards; they are never shared across threads.
///
/// Generation parameters (`max_length`, `min_length`, `num_beams`, length
/// penalty, early stopping) are bound when the model is loaded from
/// [`SummaryParams`]; `summarize` takes only the text.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> Result<String, InferenceError>;
}

/// Builds the summarizer on the thread that will own it.
pub type SummarizerFactory =
    Box<dyn FnOnce() -> Result<Box<dyn Summarizer>, InferenceError> + Send + 'static>;

/// Turns the raw generator output into the user-facing summary.
#[cfg_attr(not(feature = "bart"), allow(dead_code))]
pub(crate) fn finish_summary(generated: Option<String>) -> Result<String, InferenceError> {
    let summary = generated.map(|s| s.trim().to_string()).unwrap_or_default();
    if summary.is_empty() {
        return Err(InferenceError::EmptySummary);
    }
    Ok(summary)
}

#[cfg(feature = "bart")]
mod bart {
    use rust_bert::pipelines::summarization::{SummarizationConfig, SummarizationModel};
    use summarizer_logging::{engine_debug, engine_info, OperationTimer};

    use super::{finish_summary, Summarizer, SummaryParams, DEFAULT_MODEL_NAME};
    use crate::InferenceError;

    /// `facebook/bart-large-cnn` through rust-bert.
    ///
    /// Weights, vocabulary and merges are fetched by rust-bert's remote
    /// resource cache on first use. The pipeline truncates encoder input at
    /// the model's 1024 positions.
    pub struct BartSummarizer {
        model: SummarizationModel,
    }

    impl BartSummarizer {
        pub fn load(params: &SummaryParams) -> Result<Self, InferenceError> {
            params.validate()?;
            let timer = OperationTimer::start(format!("loading {DEFAULT_MODEL_NAME}"));
            let config = SummarizationConfig {
                min_length: params.min_length,
                max_length: Some(params.max_length),
                num_beams: params.num_beams,
                length_penalty: params.length_penalty,
                early_stopping: params.early_stopping,
                do_sample: false,
                ..Default::default()
            };
            let model = SummarizationModel::new(config)
                .map_err(|err| InferenceError::ModelUnavailable(err.to_string()))?;
            timer.finish();
            engine_info!("Model {} ready with {:?}", DEFAULT_MODEL_NAME, params);
            Ok(Self { model })
        }
    }

    impl Summarizer for BartSummarizer {
        fn summarize(&self, text: &str) -> Result<String, InferenceError> {
            engine_debug!("Summarizing {} chars", text.len());
            let output = self
                .model
                .summarize(&[text])
                .map_err(|err| InferenceError::Generation(err.to_string()))?;
            finish_summary(output.into_iter().next())
        }
    }
}

#[cfg(feature = "bart")]
pub use bart::BartSummarizer;

/// Stand-in used when the crate is built without the `bart` feature.
#[cfg(not(feature = "bart"))]
pub struct BartSummarizer;

#[cfg(not(feature = "bart"))]
impl BartSummarizer {
    pub fn load(params: &SummaryParams) -> Result<Self, InferenceError> {
        params.validate()?;
        Err(InferenceError::ModelUnavailable(format!(
            "{DEFAULT_MODEL_NAME} support was not compiled in (enable the `bart` feature)"
        )))
    }
}

#[cfg(not(feature = "bart"))]
impl Summarizer for BartSummarizer {
    fn summarize(&self, _text: &str) -> Result<String, InferenceError> {
        Err(InferenceError::ModelUnavailable(
            "summarization backend not compiled in".to_string(),
        ))
    }
}

/// Factory for the default BART backend.
pub fn bart_factory(params: SummaryParams) -> SummarizerFactory {
    Box::new(move || {
        let model = BartSummarizer::load(&params)?;
        Ok(Box::new(model) as Box<dyn Summarizer>)
    })
}
