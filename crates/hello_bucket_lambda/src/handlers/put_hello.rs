use std::future::Future;
use std::time::Instant;

use hello_bucket_core::config::{BucketTarget, FixtureProfile};
use hello_bucket_core::payload::{new_object_key, HELLO_WORLD_PAYLOAD};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::adapters::object_store::{ObjectWriter, WriteReceipt};
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "put_hello";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PutHelloResponse {
    pub bucket: String,
    pub key: String,
    pub receipt: WriteReceipt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Configuration,
    Connect,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    pub message: String,
    pub stage: FailureStage,
}

/// Writes `Hello World` under a fresh key. Exactly one write is issued.
pub fn handle_put_hello(
    target: &BucketTarget,
    writer: &impl ObjectWriter,
) -> Result<PutHelloResponse, HandlerError> {
    let started_at = Instant::now();
    let key = new_object_key();

    let receipt = match writer.write_object(&key, HELLO_WORLD_PAYLOAD) {
        Ok(value) => value,
        Err(message) => {
            log_error(
                COMPONENT,
                "invocation_failed",
                json!({
                    "stage": FailureStage::Write,
                    "bucket": target.bucket.clone(),
                    "key": key,
                    "error": message.clone(),
                }),
            );
            return Err(HandlerError {
                message,
                stage: FailureStage::Write,
            });
        }
    };

    log_info(
        COMPONENT,
        "object_written",
        json!({
            "bucket": target.bucket.clone(),
            "region": target.region.clone(),
            "addressing": target.addressing,
            "key": key.clone(),
            "bytes": HELLO_WORLD_PAYLOAD.len(),
            "duration_ms": started_at.elapsed().as_millis(),
            "receipt": receipt.clone(),
        }),
    );

    Ok(PutHelloResponse {
        bucket: target.bucket.clone(),
        key,
        receipt,
    })
}

/// Resolves the fixture's target and performs the write. Configuration is
/// resolved before `connect` runs, so a missing variable never reaches storage.
pub async fn handle_invocation<W, F, Fut>(
    profile: &FixtureProfile,
    lookup: impl Fn(&str) -> Option<String>,
    connect: F,
) -> Result<PutHelloResponse, HandlerError>
where
    W: ObjectWriter,
    F: FnOnce(&BucketTarget) -> Fut,
    Fut: Future<Output = Result<W, String>>,
{
    let target = BucketTarget::resolve(profile, lookup)
        .map_err(|error| fail(profile, FailureStage::Configuration, error.to_string()))?;

    let writer = connect(&target)
        .await
        .map_err(|message| fail(profile, FailureStage::Connect, message))?;

    handle_put_hello(&target, &writer)
}

fn fail(profile: &FixtureProfile, stage: FailureStage, message: String) -> HandlerError {
    log_error(
        COMPONENT,
        "invocation_failed",
        json!({
            "fixture": profile.name,
            "stage": stage,
            "error": message.clone(),
        }),
    );
    HandlerError { message, stage }
}
