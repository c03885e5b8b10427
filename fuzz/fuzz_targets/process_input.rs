#![no_main]

use libfuzzer_sys::fuzz_target;
use uniqn::config::ReportConfig;
use uniqn::{report, Statistics};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes are a valid token stream; counting and rendering must
    // never fail or panic on them
    let mut stats = Statistics::new();
    let outcome = stats.process(data).expect("in-memory reads cannot fail");

    if !outcome.is_exhausted() {
        assert!(stats.total_unigrams() >= 1);
    }

    let mut out = Vec::new();
    report::write_report(&stats, &ReportConfig::default(), &mut out)
        .expect("every table key decodes");
});
