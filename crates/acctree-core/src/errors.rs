use std::error::Error;

/// Base trait for all acctree errors
pub trait AccError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by the caller rather than the target application
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the library
pub type AccResult<T> = Result<T, Box<dyn AccError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeError;

    #[test]
    fn test_acc_result() {
        let _result: AccResult<i32> = Ok(42);
    }

    #[test]
    fn test_boxed_error_keeps_code() {
        let boxed: Box<dyn AccError> = Box::new(NodeError::IndexOutOfRange { index: 3, len: 2 });
        assert_eq!(boxed.error_code(), "NODE_INDEX_OUT_OF_RANGE");
        assert!(boxed.is_user_error());
        assert_eq!(boxed.to_string(), "Index 3 out of range for 2 children");
    }
}
