#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! strace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "sticky_header_footer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! strace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! sdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "sticky_header_footer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! sdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
#[allow(unused_macros)]
macro_rules! swarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "sticky_header_footer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[allow(unused_macros)]
macro_rules! swarn {
    ($($tt:tt)*) => {};
}
