use serde::Serialize;

/// An IAM role the pipeline assumes to read and write the buckets.
/// Must pre-exist; this workflow never creates or modifies it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AccessRole {
    pub name: String,
    pub arn: String,
}
