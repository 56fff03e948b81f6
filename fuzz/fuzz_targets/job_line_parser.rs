#![no_main]

use jobtimer::classify;
use jobtimer::correlator::Correlation;
use jobtimer::parsers::parse_line;
use libfuzzer_sys::fuzz_target;

const MAX_INPUT_LEN: usize = 4096;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_LEN {
        return;
    }

    let text = String::from_utf8_lossy(data);
    let mut correlation = Correlation::new();

    for line in text.lines() {
        let parsed = parse_line(line);
        let ingested = correlation.ingest(line);
        assert_eq!(parsed.is_ok(), ingested.is_ok());

        if let Ok(event) = parsed {
            // A rendered event must parse back to itself unless the
            // description or pid smuggled in a separator.
            if !event.job_description.contains(',') && !event.pid.contains(',') {
                assert_eq!(parse_line(&event.to_line()).ok(), Some(event));
            }
        }
    }

    let classification = classify(&correlation);
    let s = classification.summary;
    assert_eq!(s.total_jobs, correlation.start_times().len());
    assert_eq!(s.missing_end + s.passed + s.warned + s.failed, s.total_jobs);
});
