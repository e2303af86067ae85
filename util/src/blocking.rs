//! Drive the async client API from synchronous call sites.

use std::future::Future;

use tokio::runtime::Builder;

/// Run `future` to completion on a fresh single-threaded runtime and return
/// its output.
///
/// Intended for one-shot calls from synchronous code. The runtime is built
/// and torn down on every call, so this has no place in a hot loop, and it
/// must not be called from inside an async context (tokio panics there).
/// Whatever the future resolves to, including an `Err`, comes back as-is.
pub fn run<F: Future>(future: F) -> F::Output {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build blocking runtime")
        .block_on(future)
}
