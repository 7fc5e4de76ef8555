/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when parsing personnel data at the content boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The name does not match any attribute.
    #[error("unknown attribute: \"{0}\"")]
    UnknownAttribute(String),

    /// The name does not match any skill in the closed skill set.
    #[error("unknown skill: \"{0}\"")]
    UnknownSkill(String),
}
