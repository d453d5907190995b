use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_iam::Client;
use aws_sdk_iam::error::DisplayErrorContext;

use crate::common::error::{ResourceKind, WorkflowError};
use crate::modules::preflight::model::AccessRole;
use crate::modules::preflight::service::RoleChecker;

#[derive(Clone)]
pub struct IamService {
    client: Client,
}

impl IamService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl RoleChecker for IamService {
    async fn get_role(&self, name: &str) -> Result<AccessRole, WorkflowError> {
        // Any probe failure is treated as the role being unusable, not
        // just NoSuchEntity; the diagnostic says which it was.
        let out = self
            .client
            .get_role()
            .role_name(name)
            .send()
            .await
            .map_err(|e| WorkflowError::ResourceNotFound {
                kind: ResourceKind::Role,
                name: name.to_string(),
                detail: format!("{}", DisplayErrorContext(&e)),
            })?;

        let role = out.role().ok_or_else(|| WorkflowError::ResourceNotFound {
            kind: ResourceKind::Role,
            name: name.to_string(),
            detail: "response carried no role".to_string(),
        })?;

        Ok(AccessRole {
            name: name.to_string(),
            arn: role.arn().to_string(),
        })
    }
}
