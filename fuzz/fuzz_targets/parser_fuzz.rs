#![no_main]
use geodelta::cli::MeasurementDoc;
use geodelta::format::Measurement;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Command lines built from whitespace-separated tokens.
    let text = String::from_utf8_lossy(data);
    let args: Vec<String> = text.split_whitespace().take(32).map(str::to_string).collect();
    geodelta::cli::fuzz_try_parse_args(&args);

    // The same bytes as a JSON measurement document.
    if let Ok(doc) = serde_json::from_slice::<MeasurementDoc>(data) {
        if let Ok(m) = Measurement::try_from(doc) {
            let bytes = m.encode();
            assert_eq!(Measurement::decode(&bytes).as_ref(), Ok(&m));
        }
    }
});
