use hello_bucket_core::config::DEFAULT_STYLE_FIXTURE;
use hello_bucket_lambda::runtime;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::run(DEFAULT_STYLE_FIXTURE).await
}
