//! Predictor process runner
//!
//! Launches the external estimation model once per request, hands it the
//! positional feature arguments and parses the first line of stdout as the
//! annual emission estimate. Every attempt is bounded by a hard timeout;
//! transient failures (timeout, killed by a signal) get a bounded number of
//! retries, everything else fails immediately.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

use super::estimate::{InvalidEstimate, RawEstimate};
use super::features::FeatureVector;

/// Longest stderr excerpt carried inside an error
const STDERR_EXCERPT_CHARS: usize = 2_000;

/// How to launch the predictor
#[derive(Debug, Clone)]
pub struct PredictorConfig {
    /// Interpreter or executable, e.g. `python3`
    pub program: String,
    /// Arguments placed ahead of the feature values, e.g. the model script
    pub leading_args: Vec<String>,
    /// Hard limit per attempt
    pub timeout: Duration,
    /// Extra attempts allowed after a transient failure
    pub retries: u32,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            program: "python3".to_string(),
            leading_args: vec!["ml/predict.py".to_string()],
            timeout: Duration::from_secs(10),
            retries: 1,
        }
    }
}

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("failed to launch predictor `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("predictor timed out after {0:?}")]
    Timeout(Duration),

    #[error("predictor exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    #[error("predictor was terminated by a signal: {stderr}")]
    Terminated { stderr: String },

    #[error("could not parse predictor output {output:?}")]
    Parse { output: String },

    #[error("predictor returned an invalid estimate: {0}")]
    InvalidEstimate(#[from] InvalidEstimate),
}

impl PredictorError {
    /// Failures worth one more attempt
    pub fn is_transient(&self) -> bool {
        matches!(self, PredictorError::Timeout(_) | PredictorError::Terminated { .. })
    }
}

pub struct PredictorRunner {
    config: PredictorConfig,
}

impl PredictorRunner {
    pub fn new(config: PredictorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    /// Run the predictor for one feature vector, retrying transient failures
    pub async fn estimate(&self, features: &FeatureVector) -> Result<RawEstimate, PredictorError> {
        let args = features.to_args();
        tracing::debug!("Predictor features: {}", features.describe());
        let mut attempt: u32 = 0;

        loop {
            match self.run_once(&args).await {
                Ok(estimate) => return Ok(estimate),
                Err(e) if e.is_transient() && attempt < self.config.retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Predictor attempt {} failed ({}), retrying",
                        attempt, e
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn run_once(&self, args: &[String]) -> Result<RawEstimate, PredictorError> {
        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.leading_args)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|source| PredictorError::Spawn {
            program: self.config.program.clone(),
            source,
        })?;

        // Dropping the wait future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.config.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| PredictorError::Spawn {
                program: self.config.program.clone(),
                source,
            })?,
            Err(_) => return Err(PredictorError::Timeout(self.config.timeout)),
        };

        if !output.status.success() {
            let stderr = excerpt(&String::from_utf8_lossy(&output.stderr));
            return Err(match output.status.code() {
                Some(status) => PredictorError::Failed { status, stderr },
                None => PredictorError::Terminated { stderr },
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::debug!("Predictor stdout: {}", stdout.trim());
        parse_estimate(&stdout)
    }
}

/// Parse the first stdout line as the estimate
pub fn parse_estimate(stdout: &str) -> Result<RawEstimate, PredictorError> {
    let first_line = stdout.lines().next().unwrap_or("").trim();
    let value = first_line
        .parse::<f64>()
        .map_err(|_| PredictorError::Parse { output: excerpt(stdout) })?;
    Ok(RawEstimate::new(value)?)
}

fn excerpt(text: &str) -> String {
    text.trim().chars().take(STDERR_EXCERPT_CHARS).collect()
}
