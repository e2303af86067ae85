use util::blocking;

async fn double(n: u32) -> u32 {
    n * 2
}

#[test]
fn returns_the_future_output() {
    assert_eq!(blocking::run(double(21)), 42);
}

// The two halves of this pair pin the adapter to plain awaiting: the same
// future yields the same value either way.
#[tokio::test]
async fn agrees_with_direct_await() {
    assert_eq!(double(7).await, 14);
}

#[test]
fn agrees_from_sync_callers() {
    assert_eq!(blocking::run(double(7)), 14);
}

#[test]
fn err_output_passes_through() {
    let out: Result<(), String> = blocking::run(async { Err("device unreachable".to_string()) });
    assert_eq!(out, Err("device unreachable".to_string()));
}
