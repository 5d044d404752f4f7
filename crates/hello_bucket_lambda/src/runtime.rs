use hello_bucket_core::config::FixtureProfile;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

use crate::adapters::s3::{connect, S3ObjectWriter};
use crate::handlers::put_hello::{handle_invocation, PutHelloResponse};
use crate::logging::log_info;

/// Runs the Lambda event loop for one fixture. The event payload is ignored.
pub async fn run(profile: FixtureProfile) -> Result<(), Error> {
    lambda_runtime::run(service_fn(move |event| handle_request(profile, event))).await
}

async fn handle_request(
    profile: FixtureProfile,
    event: LambdaEvent<Value>,
) -> Result<PutHelloResponse, Error> {
    log_info(
        "runtime",
        "invocation_started",
        json!({
            "fixture": profile.name,
            "request_id": event.context.request_id,
        }),
    );

    handle_invocation(
        &profile,
        |name| std::env::var(name).ok(),
        |target| {
            let target = target.clone();
            async move {
                let s3_client = connect(&target).await;
                Ok(S3ObjectWriter::new(target.bucket, s3_client))
            }
        },
    )
    .await
    .map_err(|error| Error::from(error.message))
}
