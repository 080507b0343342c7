//! Error handling and exit codes.

use lucasfib_core::calculator::FibError;
use lucasfib_core::constants::exit_codes;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidIndex(_) => exit_codes::ERROR_INVALID_INDEX,
        FibError::ResourceExhaustion { .. } => exit_codes::ERROR_RESOURCE_EXHAUSTION,
    }
}

/// Exit code for an application error; errors that are not a
/// [`FibError`] map to the generic code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FibError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
