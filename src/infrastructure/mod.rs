pub mod aws;
pub mod iam;
pub mod s3;
pub mod sns;
pub mod transcoder;
