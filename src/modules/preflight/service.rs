use async_trait::async_trait;
use tracing::{error, info};

use super::model::AccessRole;
use crate::common::error::WorkflowError;

#[async_trait]
pub trait RoleChecker: Send + Sync {
    async fn get_role(&self, name: &str) -> Result<AccessRole, WorkflowError>;
}

#[async_trait]
pub trait BucketChecker: Send + Sync {
    async fn head_bucket(&self, name: &str) -> Result<(), WorkflowError>;
}

pub async fn verify_role(
    roles: &dyn RoleChecker,
    name: &str,
) -> Result<AccessRole, WorkflowError> {
    match roles.get_role(name).await {
        Ok(role) => Ok(role),
        Err(e) => {
            error!("No such role exists. role_name={}", name);
            Err(e)
        }
    }
}

pub async fn verify_bucket(buckets: &dyn BucketChecker, name: &str) -> Result<(), WorkflowError> {
    match buckets.head_bucket(name).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("No such bucket exists. bucket_name={}", name);
            Err(e)
        }
    }
}

/// Checks the role and both buckets, stopping at the first missing
/// resource. Nothing is created here; absence is always fatal.
pub async fn run_preflight(
    roles: &dyn RoleChecker,
    buckets: &dyn BucketChecker,
    role_name: &str,
    input_bucket: &str,
    output_bucket: &str,
) -> Result<AccessRole, WorkflowError> {
    let role = verify_role(roles, role_name).await?;
    verify_bucket(buckets, input_bucket).await?;
    verify_bucket(buckets, output_bucket).await?;
    info!("✅ Preflight passed: role={} buckets={},{}", role.arn, input_bucket, output_bucket);
    Ok(role)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::common::error::ResourceKind;

    pub struct FakeRoles {
        roles: HashMap<String, String>,
    }

    impl FakeRoles {
        pub fn with(entries: &[(&str, &str)]) -> Self {
            Self {
                roles: entries
                    .iter()
                    .map(|(n, a)| (n.to_string(), a.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl RoleChecker for FakeRoles {
        async fn get_role(&self, name: &str) -> Result<AccessRole, WorkflowError> {
            match self.roles.get(name) {
                Some(arn) => Ok(AccessRole {
                    name: name.to_string(),
                    arn: arn.clone(),
                }),
                None => Err(WorkflowError::ResourceNotFound {
                    kind: ResourceKind::Role,
                    name: name.to_string(),
                    detail: "NoSuchEntity".to_string(),
                }),
            }
        }
    }

    pub struct FakeBuckets {
        buckets: HashSet<String>,
    }

    impl FakeBuckets {
        pub fn with(names: &[&str]) -> Self {
            Self {
                buckets: names.iter().map(|n| n.to_string()).collect(),
            }
        }
    }

    #[async_trait]
    impl BucketChecker for FakeBuckets {
        async fn head_bucket(&self, name: &str) -> Result<(), WorkflowError> {
            if self.buckets.contains(name) {
                Ok(())
            } else {
                Err(WorkflowError::ResourceNotFound {
                    kind: ResourceKind::Bucket,
                    name: name.to_string(),
                    detail: "404 Not Found".to_string(),
                })
            }
        }
    }

    #[tokio::test]
    async fn verify_role_resolves_arn() {
        let roles = FakeRoles::with(&[(
            "Elastic_Transcoder_Default_Role",
            "arn:aws:iam::123456789012:role/Elastic_Transcoder_Default_Role",
        )]);
        let role = verify_role(&roles, "Elastic_Transcoder_Default_Role")
            .await
            .unwrap();
        assert_eq!(
            role.arn,
            "arn:aws:iam::123456789012:role/Elastic_Transcoder_Default_Role"
        );
    }

    #[tokio::test]
    async fn missing_role_is_not_found() {
        let roles = FakeRoles::with(&[]);
        let err = verify_role(&roles, "missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn missing_bucket_is_not_found() {
        let buckets = FakeBuckets::with(&["boto3-transcoder-in"]);
        assert!(verify_bucket(&buckets, "boto3-transcoder-in").await.is_ok());
        let err = verify_bucket(&buckets, "boto3-transcoder-out")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn preflight_checks_role_before_buckets() {
        let roles = FakeRoles::with(&[]);
        let buckets = FakeBuckets::with(&["in", "out"]);
        let err = run_preflight(&roles, &buckets, "missing", "in", "out")
            .await
            .unwrap_err();
        match err {
            WorkflowError::ResourceNotFound { kind, .. } => assert_eq!(kind, ResourceKind::Role),
            other => panic!("unexpected error: {other}"),
        }
    }
}
