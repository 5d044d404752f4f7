use serde::{Deserialize, Serialize};

/// Fields of a storage write response that end up in the invocation log.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WriteReceipt {
    pub e_tag: Option<String>,
    pub version_id: Option<String>,
    pub checksum_crc32: Option<String>,
    pub server_side_encryption: Option<String>,
}

pub trait ObjectWriter {
    fn write_object(&self, key: &str, body: &[u8]) -> Result<WriteReceipt, String>;
}
