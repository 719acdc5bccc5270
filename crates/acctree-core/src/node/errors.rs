use crate::errors::AccError;
use crate::provider::ProviderError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("Node unusable during {operation}: {source}")]
    Unusable {
        operation: &'static str,
        #[source]
        source: ProviderError,
    },

    #[error("Index {index} out of range for {len} children")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("Unsupported attribute: '{attribute}'")]
    Unsupported { attribute: String },
}

impl AccError for NodeError {
    fn error_code(&self) -> &'static str {
        match self {
            NodeError::Unusable { .. } => "NODE_UNUSABLE",
            NodeError::IndexOutOfRange { .. } => "NODE_INDEX_OUT_OF_RANGE",
            NodeError::Unsupported { .. } => "NODE_UNSUPPORTED_ATTRIBUTE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            NodeError::IndexOutOfRange { .. } | NodeError::Unsupported { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unusable_display_and_source() {
        let error = NodeError::Unusable {
            operation: "accName",
            source: ProviderError::disconnected(),
        };
        assert_eq!(
            error.to_string(),
            "Node unusable during accName: object is no longer connected to its server (code 0x80010108)"
        );
        assert_eq!(error.error_code(), "NODE_UNUSABLE");
        assert!(!error.is_user_error());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_index_out_of_range() {
        let error = NodeError::IndexOutOfRange { index: -4, len: 3 };
        assert_eq!(error.to_string(), "Index -4 out of range for 3 children");
        assert!(error.is_user_error());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_unsupported() {
        let error = NodeError::Unsupported {
            attribute: "focus".to_string(),
        };
        assert_eq!(error.to_string(), "Unsupported attribute: 'focus'");
        assert_eq!(error.error_code(), "NODE_UNSUPPORTED_ATTRIBUTE");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NodeError>();
    }
}
