/// Macros for properly formatted console logging.
///
/// On wasm32 these wrap gloo_console and prefix every line with a timestamp
/// and the crate tag. Everywhere else they forward to `tracing`, so the pure
/// video logic can run (and be tested) outside a browser.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_emit!(info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_emit!(warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_emit!(error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_emit!(debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(debug, format!($fmt, $($arg)*))
    };
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $message:expr) => {
        gloo_console::$level!(format!(
            "[{}] {} {}",
            js_sys::Date::now(),
            $crate::utils::LOG_TAG,
            $message
        ))
    };
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
#[macro_export]
macro_rules! __console_emit {
    ($level:ident, $message:expr) => {
        tracing::$level!(target: "lazy_video", "{} {}", $crate::utils::LOG_TAG, $message)
    };
}
