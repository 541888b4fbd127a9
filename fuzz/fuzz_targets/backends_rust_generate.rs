#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_codegen::{analyzer, ast, backends, parser};

// Fuzz packet_codegen::backends::rust::generate.
fuzz_target!(|source: String| {
    let mut sources = ast::SourceDatabase::new();
    let Ok(file) = parser::parse_inline(&mut sources, "input.json", source) else {
        return;
    };
    let Ok(schema) = analyzer::analyze(&file) else {
        return;
    };
    let _ = backends::rust::generate(&sources, &schema);
});
