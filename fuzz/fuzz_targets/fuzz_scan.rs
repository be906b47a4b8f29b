#![no_main]

use dix::index::PatternAutomaton;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, String)| {
    let (patterns, text) = input;
    // Scans are bounded by input length and must never panic or report
    // an out-of-range start offset
    let automaton = PatternAutomaton::new(patterns.iter());
    let text_len = text.chars().count();
    for m in automaton.scan(&text) {
        assert!(m.start + m.pattern.chars().count() <= text_len);
    }
});
