use std::borrow::Cow;

/// Errors raised while configuring a telemetry sink.
#[ignite_derive::ignite_error]
pub enum TelemetryError {
    /// Capacity must be greater than zero for bounded channels.
    #[error("Invalid capacity{}: {message}", format_context(.context))]
    InvalidCapacity { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
