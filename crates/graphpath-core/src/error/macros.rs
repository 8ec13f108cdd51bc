//! Error macros for graphpath

/// Macro for returning an invalid-argument error for an absent vertex
#[macro_export]
macro_rules! bail_invalid {
    ($vertex:expr) => {
        return Err($crate::error::GraphError::invalid_vertex($vertex))
    };
    ($vertex:expr, $reason:expr) => {
        return Err($crate::error::GraphError::InvalidArgument {
            vertex: $vertex,
            reason: $reason.to_string(),
        })
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
