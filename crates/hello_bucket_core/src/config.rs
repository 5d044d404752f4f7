use serde::Serialize;
use thiserror::Error;

/// How a fixture names its bucket and region variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvConvention {
    /// `BucketName` / `RegionName`
    PascalCase,
    /// `BUCKET_NAME` / `REGION_NAME`
    ScreamingSnake,
}

impl EnvConvention {
    pub fn bucket_var(self) -> &'static str {
        match self {
            Self::PascalCase => "BucketName",
            Self::ScreamingSnake => "BUCKET_NAME",
        }
    }

    pub fn region_var(self) -> &'static str {
        match self {
            Self::PascalCase => "RegionName",
            Self::ScreamingSnake => "REGION_NAME",
        }
    }
}

/// Bucket addressing used by the storage client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressingStyle {
    /// Leave the choice to the SDK (virtual-hosted where the bucket name allows it).
    Auto,
    /// Bucket in the URL path. S3 VPC endpoints need this to avoid global URL resolution.
    Path,
}

impl AddressingStyle {
    pub fn forces_path_style(self) -> bool {
        matches!(self, Self::Path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixtureProfile {
    pub name: &'static str,
    pub convention: EnvConvention,
    pub addressing: AddressingStyle,
}

pub const PATH_STYLE_FIXTURE: FixtureProfile = FixtureProfile {
    name: "path_style_fixture",
    convention: EnvConvention::PascalCase,
    addressing: AddressingStyle::Path,
};

pub const DEFAULT_STYLE_FIXTURE: FixtureProfile = FixtureProfile {
    name: "default_style_fixture",
    convention: EnvConvention::ScreamingSnake,
    addressing: AddressingStyle::Auto,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be configured")]
    MissingVariable { name: &'static str },
}

/// Per-invocation storage target resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketTarget {
    pub bucket: String,
    pub region: String,
    pub addressing: AddressingStyle,
}

impl BucketTarget {
    /// Resolves the target through `lookup`. The bucket variable is checked
    /// before the region variable. Values are trimmed and empty values count
    /// as missing.
    pub fn resolve(
        profile: &FixtureProfile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let bucket = required(&lookup, profile.convention.bucket_var())?;
        let region = required(&lookup, profile.convention.region_var())?;

        Ok(Self {
            bucket,
            region,
            addressing: profile.addressing,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name).as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ConfigError::MissingVariable { name }),
    }
}
