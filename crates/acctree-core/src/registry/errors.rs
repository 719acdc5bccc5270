use crate::errors::AccError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Event pump failed: {message}")]
    PumpFailed { message: String },

    #[error("Failed to install interrupt handler: {message}")]
    InterruptHandlerFailed { message: String },
}

impl AccError for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::PumpFailed { .. } => "REGISTRY_PUMP_FAILED",
            RegistryError::InterruptHandlerFailed { .. } => "REGISTRY_INTERRUPT_HANDLER_FAILED",
        }
    }
}
