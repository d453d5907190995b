use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Topic {
    pub name: String,
    pub arn: String,
}

/// Provider acknowledgement of an accepted publish. Delivery to
/// subscribers is at-least-once and never observed here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublishReceipt {
    pub message_id: String,
}
