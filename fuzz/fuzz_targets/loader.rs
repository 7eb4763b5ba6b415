#![no_main]

use libfuzzer_sys::fuzz_target;

use waypath::{algo::shortest_path, io::load_str};

fuzz_target!(|input: &str| {
    let Ok(document) = load_str::<u32>(input) else {
        return;
    };

    for query in &document.queries {
        // Overflow is a legitimate outcome for arbitrary weights.
        let _ = shortest_path(&document.graph, &query.start, &query.finish);
    }
});
