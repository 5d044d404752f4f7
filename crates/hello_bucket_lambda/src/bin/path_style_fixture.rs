use hello_bucket_core::config::PATH_STYLE_FIXTURE;
use hello_bucket_lambda::runtime;
use lambda_runtime::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    runtime::run(PATH_STYLE_FIXTURE).await
}
