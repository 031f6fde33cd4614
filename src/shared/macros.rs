/***************************************/
/*               Macros                */
/***************************************/

/// Logs the error with some context and terminates the process.
/// Only meant for startup code in the binary.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit(1);
            }
        }
    };
}
