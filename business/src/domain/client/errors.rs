#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("client.no_photo")]
    NoPhoto,
}
