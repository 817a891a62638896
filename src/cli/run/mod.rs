//! Run command - one-shot `run` against the remote executor

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::info;

use crate::client::{listen, ActionListener, RunArgs};
use crate::domain::MlInput;

#[derive(Args, Debug, Clone)]
pub struct RunCommandArgs {
    /// train, predict or trainAndPredict
    #[arg(long)]
    pub action: String,

    /// Overrides the algorithm of the input file
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Model to predict with
    #[arg(long = "model-id")]
    pub model_id: Option<String>,

    /// Queue training and return the task handle
    #[arg(long = "async")]
    pub is_async: bool,

    /// Algorithm parameter, repeatable (`--param k=3`)
    #[arg(long = "param", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,

    /// ML input as JSON
    #[arg(long)]
    pub input: PathBuf,
}

impl RunCommandArgs {
    pub fn to_run_args(&self) -> RunArgs {
        let mut args = RunArgs::new(self.action.clone());

        if let Some(algorithm) = &self.algorithm {
            args = args.with_algorithm(algorithm.clone());
        }
        if let Some(model_id) = &self.model_id {
            args = args.with_model_id(model_id.clone());
        }
        if self.is_async {
            args = args.with_async(true);
        }

        self.params
            .iter()
            .fold(args, |args, (key, value)| args.with_parameter(key.clone(), value.clone()))
    }
}

pub async fn run(args: RunCommandArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();

    let raw = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let input: MlInput = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid ML input in {}", args.input.display()))?;

    let client = crate::create_client(&config.remote)?;
    let run_args = args.to_run_args();

    info!(action = %args.action, algorithm = %input.algorithm(), "Running");

    let (tx, rx) = oneshot::channel();
    listen(
        async move { client.run(input, run_args).await },
        ActionListener::from_sender(tx),
    );

    let output = rx.await.context("Run was dropped before completing")??;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// `key=value`; values that parse as JSON keep their type
fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    if key.is_empty() {
        return Err(format!("empty parameter name in '{}'", raw));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
