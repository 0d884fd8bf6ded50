use crate::{Error, Imsi, next_identifier};

fn assert_malformed(input: &str) {
    match Imsi::parse(input) {
        Err(Error::MalformedIdentifier { id, .. }) => assert_eq!(id, input),
        other => panic!("expected MalformedIdentifier for {input:?}, got {other:?}"),
    }
}

#[test]
fn next_increments_fifteen_digit_identifier() {
    assert_eq!(
        next_identifier("imsi-208930000000001").unwrap(),
        "imsi-208930000000002"
    );
}

#[test]
fn next_carries_into_higher_digits() {
    assert_eq!(
        next_identifier("imsi-208930000000999").unwrap(),
        "imsi-208930000001000"
    );
    assert_eq!(
        next_identifier("imsi-208930999999999").unwrap(),
        "imsi-208931000000000"
    );
}

#[test]
fn next_preserves_leading_and_middle_segments() {
    let imsi = Imsi::parse("imsi-20893123450000000041").unwrap();
    assert_eq!(imsi.leading(), "20893");
    assert_eq!(imsi.middle(), "12345");
    assert_eq!(imsi.subscriber_number(), 41);

    let next = imsi.next().unwrap();
    assert_eq!(next.leading(), "20893");
    assert_eq!(next.middle(), "12345");
    assert_eq!(next.subscriber_number(), 42);
    assert_eq!(next.to_string(), "imsi-20893123450000000042");
}

#[test]
fn middle_segment_keeps_leading_zeros() {
    assert_eq!(
        next_identifier("imsi-2089300700000000009").unwrap(),
        "imsi-2089300700000000010"
    );
}

#[test]
fn next_fails_with_overflow_at_max_subscriber_number() {
    match next_identifier("imsi-208939999999999") {
        Err(Error::Overflow { id }) => assert_eq!(id, "imsi-208939999999999"),
        other => panic!("expected Overflow, got {other:?}"),
    }
}

#[test]
fn next_reaches_max_subscriber_number() {
    assert_eq!(
        next_identifier("imsi-208939999999998").unwrap(),
        "imsi-208939999999999"
    );
}

#[test]
fn rejects_missing_prefix() {
    assert_malformed("208930000000001");
    assert_malformed("IMSI-208930000000001");
    assert_malformed("nai-208930000000001");
}

#[test]
fn rejects_short_identifiers() {
    assert_malformed("imsi-");
    assert_malformed("imsi-20893000000001");
}

#[test]
fn rejects_non_digit_characters() {
    assert_malformed("imsi-2089300000000a1");
    assert_malformed("imsi-20893-0000000001");
    assert_malformed("imsi-208930000000001 ");
}

#[test]
fn next_identifier_propagates_malformed_input() {
    assert!(matches!(
        next_identifier("imsi-123"),
        Err(Error::MalformedIdentifier { .. })
    ));
}

#[test]
fn repeated_next_is_a_deterministic_sequence() {
    let mut id = String::from("imsi-208930000000001");
    for expected in 2..=20_u64 {
        id = next_identifier(&id).unwrap();
        assert_eq!(id, format!("imsi-20893{expected:010}"));
    }
}

#[test]
fn iter_yields_start_and_successors() {
    let start = Imsi::parse("imsi-208930000000001").unwrap();
    let ids: Vec<String> = start.iter().take(3).map(|id| id.to_string()).collect();
    assert_eq!(
        ids,
        [
            "imsi-208930000000001",
            "imsi-208930000000002",
            "imsi-208930000000003"
        ]
    );
}

#[test]
fn iter_stops_after_last_representable_number() {
    let start = Imsi::parse("imsi-208939999999998").unwrap();
    assert_eq!(start.iter().count(), 2);
}

#[test]
fn display_round_trips_through_parse() {
    for raw in ["imsi-208930000000001", "imsi-0010100000000000000123"] {
        let imsi: Imsi = raw.parse().unwrap();
        assert_eq!(imsi.to_string(), raw);
    }
}

#[test]
fn serde_uses_string_form() {
    let imsi = Imsi::parse("imsi-208930000000007").unwrap();
    let json = serde_json::to_string(&imsi).unwrap();
    assert_eq!(json, "\"imsi-208930000000007\"");
    let back: Imsi = serde_json::from_str(&json).unwrap();
    assert_eq!(back, imsi);
    assert!(serde_json::from_str::<Imsi>("\"imsi-1\"").is_err());
}
