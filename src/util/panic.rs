/// Asserts that a block panics. With a second argument, also asserts that the panic message
/// contains that text.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $expected:literal) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic, expected \"{}\"", $expected),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($expected),
                    "panicked with \"{}\", expected \"{}\"",
                    message,
                    $expected
                );
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
