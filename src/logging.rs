/*!
Crate-internal logging macros.

Each macro expands to a call into the `log` crate when the `logging` feature
is enabled, and to nothing otherwise. Callers don't need to sprinkle `cfg`
attributes around every log statement.

Messages are only emitted for lenient resolution (for example, February 29
being moved to February 28) and for odd clock readings. Errors are returned,
never logged.
*/

// Some feature combinations result in some of these macros never being used.
// Which is fine. Just squash the warnings.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!(target: "calendrical", $($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "calendrical", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "calendrical", $($tt)*)) }
}
