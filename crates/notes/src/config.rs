use std::env;

/// Region used when talking to a local DynamoDB endpoint.
pub const LOCAL_REGION: &str = "us-east-1";

/// Function configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table written by the notes writer (default: empty)
    pub writer_table_name: String,
    /// Table read by the notes reader (default: empty)
    pub reader_table_name: String,
    pub aws: AwsConfig,
}

/// AWS client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom DynamoDB endpoint (LocalStack, DynamoDB Local).
    pub endpoint_url: Option<String>,
    /// Explicit region; `None` defers to the SDK provider chain.
    pub region: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WRITER_TABLE_NAME` - Table used by the writer
    /// - `READER_TABLE_NAME` - Table used by the reader
    /// - `DYNAMODB_API_URL_OVERRIDE` - Send DynamoDB calls to this endpoint
    /// - `AWS_REGION` - AWS region
    ///
    /// Missing table names are not an error here: the repository rejects an
    /// empty table name on every call.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            writer_table_name: lookup("WRITER_TABLE_NAME").unwrap_or_default(),
            reader_table_name: lookup("READER_TABLE_NAME").unwrap_or_default(),
            aws: AwsConfig {
                endpoint_url: non_empty("DYNAMODB_API_URL_OVERRIDE"),
                region: non_empty("AWS_REGION"),
            },
        }
    }
}

impl AwsConfig {
    /// True when DynamoDB calls go to a custom endpoint.
    pub fn is_local(&self) -> bool {
        self.endpoint_url.is_some()
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match (&self.endpoint_url, &self.region) {
            (Some(url), _) => format!("Local DynamoDB ({})", url),
            (None, Some(region)) => format!("AWS DynamoDB (region: {})", region),
            (None, None) => "AWS DynamoDB (default region)".to_string(),
        }
    }
}
