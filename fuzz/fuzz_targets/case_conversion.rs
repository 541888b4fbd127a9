#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_codegen::utils::{to_camel_case, to_snake_case};

// Fuzz the identifier case converters.
fuzz_target!(|name: String| {
    let snake = to_snake_case(&name);
    assert!(!snake.starts_with('_') && !snake.ends_with('_'));
    assert!(!snake.chars().any(|c| c.is_ascii_uppercase()));
    assert_eq!(to_camel_case(&name).is_err(), name.is_empty());
});
