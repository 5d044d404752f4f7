use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use hello_bucket_core::config::BucketTarget;

use crate::adapters::object_store::{ObjectWriter, WriteReceipt};

/// Builds an S3 client for the target's region, forcing path-style requests
/// when the fixture asks for them.
pub async fn connect(target: &BucketTarget) -> aws_sdk_s3::Client {
    let shared_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(target.region.clone()))
        .load()
        .await;

    aws_sdk_s3::Client::from_conf(client_config(&shared_config, target).build())
}

fn client_config(
    shared_config: &SdkConfig,
    target: &BucketTarget,
) -> aws_sdk_s3::config::Builder {
    aws_sdk_s3::config::Builder::from(shared_config)
        .force_path_style(target.addressing.forces_path_style())
}

pub struct S3ObjectWriter {
    bucket: String,
    s3_client: aws_sdk_s3::Client,
}

impl S3ObjectWriter {
    pub fn new(bucket: impl Into<String>, s3_client: aws_sdk_s3::Client) -> Self {
        Self {
            bucket: bucket.into(),
            s3_client,
        }
    }
}

impl ObjectWriter for S3ObjectWriter {
    fn write_object(&self, key: &str, body: &[u8]) -> Result<WriteReceipt, String> {
        let bucket = self.bucket.clone();
        let object_key = key.to_string();
        let body_bytes = body.to_vec();
        let client = self.s3_client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_object()
                    .bucket(bucket)
                    .key(object_key)
                    .body(ByteStream::from(body_bytes))
                    .send()
                    .await
                    .map(|output| WriteReceipt {
                        e_tag: output.e_tag().map(str::to_string),
                        version_id: output.version_id().map(str::to_string),
                        checksum_crc32: output.checksum_crc32().map(str::to_string),
                        server_side_encryption: output
                            .server_side_encryption()
                            .map(|value| value.as_str().to_string()),
                    })
                    .map_err(|error| {
                        format!(
                            "failed to write object to s3: {}",
                            DisplayErrorContext(&error)
                        )
                    })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use aws_sdk_s3::config::interceptors::BeforeTransmitInterceptorContextRef;
    use aws_sdk_s3::config::{ConfigBag, Credentials, Intercept, RuntimeComponents};
    use aws_sdk_s3::error::BoxError;
    use hello_bucket_core::config::AddressingStyle;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct UriRecorder {
        uris: Arc<Mutex<Vec<String>>>,
    }

    impl UriRecorder {
        fn uris(&self) -> Vec<String> {
            self.uris.lock().expect("poisoned mutex").clone()
        }
    }

    impl Intercept for UriRecorder {
        fn name(&self) -> &'static str {
            "UriRecorder"
        }

        fn read_before_transmit(
            &self,
            context: &BeforeTransmitInterceptorContextRef<'_>,
            _runtime_components: &RuntimeComponents,
            _cfg: &mut ConfigBag,
        ) -> Result<(), BoxError> {
            self.uris
                .lock()
                .expect("poisoned mutex")
                .push(context.request().uri().to_string());
            Err("request captured before transmit".into())
        }
    }

    async fn captured_put_uri(addressing: AddressingStyle) -> String {
        let target = BucketTarget {
            bucket: "fixture-bucket".to_string(),
            region: "eu-west-1".to_string(),
            addressing,
        };
        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(target.region.clone()))
            .credentials_provider(Credentials::new(
                "AKIDFIXTURE",
                "fixture-secret",
                None,
                None,
                "fixture",
            ))
            .load()
            .await;

        let recorder = UriRecorder::default();
        let s3_config = client_config(&shared_config, &target)
            .interceptor(recorder.clone())
            .build();
        let writer = S3ObjectWriter::new(
            target.bucket.clone(),
            aws_sdk_s3::Client::from_conf(s3_config),
        );

        let error = writer
            .write_object("hello-key", b"Hello World")
            .expect_err("request is stopped before transmit");
        assert!(error.starts_with("failed to write object to s3"));

        recorder
            .uris()
            .into_iter()
            .next()
            .expect("put_object should reach the transmit stage")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn path_addressing_puts_bucket_in_the_path() {
        let uri = captured_put_uri(AddressingStyle::Path).await;

        assert!(
            uri.starts_with("https://s3.eu-west-1.amazonaws.com/fixture-bucket/hello-key"),
            "unexpected uri: {uri}"
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn auto_addressing_uses_virtual_hosted_bucket() {
        let uri = captured_put_uri(AddressingStyle::Auto).await;

        assert!(
            uri.starts_with("https://fixture-bucket.s3.eu-west-1.amazonaws.com/hello-key"),
            "unexpected uri: {uri}"
        );
    }
}
