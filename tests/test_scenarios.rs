//! End-to-end correlation scenarios
//!
//! Documents are assembled from literal parts and `.` padding so every offset
//! and distance below can be checked by hand.

use fontcorr::{
    correlate, scan_bytes, ByteDocument, Confidence, LayerFonts, MemorySink, Method, NullSink,
    Override, ScanConfig, ScanEvent, ScanInput, TokenVocabulary,
};

fn padded(parts: &[(&str, usize)]) -> Vec<u8> {
    let mut raw = Vec::new();
    for (part, pad) in parts {
        raw.extend_from_slice(part.as_bytes());
        raw.extend(std::iter::repeat(b'.').take(*pad));
    }
    raw
}

fn input(texts: &[&str], fonts: &[&str]) -> ScanInput {
    ScanInput::new(
        TokenVocabulary::texts(texts.iter().copied()),
        TokenVocabulary::fonts(fonts.iter().copied()),
    )
}

#[test]
fn test_adjacent_font_is_high_confidence() {
    let raw = b"...AvianoSansBold......WOQM TESTE DE FONT...";
    let report = scan_bytes(
        raw,
        &input(&["WOQM TESTE DE FONT"], &["AvianoSansBold"]),
        &ScanConfig::default(),
        &mut NullSink,
    );

    let a = report.association("WOQM TESTE DE FONT").unwrap();
    assert_eq!(a.font.as_deref(), Some("AvianoSansBold"));
    assert_eq!(a.method, Method::Proximity);
    assert_eq!(a.confidence, Confidence::High);
    assert_eq!(a.stats.as_ref().unwrap().min_distance, 20);
    assert_eq!(report.fonts_found, vec!["AvianoSansBold"]);
    assert_eq!(report.summary.proximity_associations, 1);
}

#[test]
fn test_distant_text_falls_back_to_only_font() {
    // LIGHT at 10, the font at 60, WOQM at 5060
    let raw = padded(&[("", 10), ("LIGHT", 45), ("MyriadPro-Regular", 4983), ("WOQM", 10)]);
    let report = scan_bytes(
        &raw,
        &input(&["LIGHT", "WOQM"], &["MyriadPro-Regular"]),
        &ScanConfig::default(),
        &mut NullSink,
    );

    let light = report.association("LIGHT").unwrap();
    assert_eq!(light.font.as_deref(), Some("MyriadPro-Regular"));
    assert_eq!(light.method, Method::Proximity);
    assert_eq!(light.stats.as_ref().unwrap().min_distance, 50);

    let woqm = report.association("WOQM").unwrap();
    assert_eq!(woqm.font.as_deref(), Some("MyriadPro-Regular"));
    assert_eq!(woqm.method, Method::FallbackFirst);
    assert_eq!(woqm.confidence, Confidence::Low);
    assert!(woqm.stats.is_none());
    assert_eq!(report.summary.fallback_associations, 1);
}

#[test]
fn test_fallback_prefers_unused_fonts_then_repeats_first() {
    let raw = padded(&[("FontA", 3), ("T1", 3)]);
    let report = scan_bytes(
        &raw,
        &input(&["T1", "T2", "T3"], &["FontA", "FontB"]),
        &ScanConfig::default(),
        &mut NullSink,
    );

    let mapping = report.mapping();
    let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["T1", "T2", "T3"]);
    assert_eq!(report.font_for("T1"), Some("FontA"));
    assert_eq!(report.font_for("T2"), Some("FontB"));
    assert_eq!(report.font_for("T3"), Some("FontA"));
    assert_eq!(report.association("T2").unwrap().method, Method::FallbackDistribution);
    assert_eq!(report.association("T3").unwrap().method, Method::FallbackFirst);
}

/// Three votes for FontX at distance 100 against one for FontY at `y_distance`
fn voting_document(y_distance: usize) -> Vec<u8> {
    let mut parts = Vec::new();
    for _ in 0..3 {
        parts.push(("FontX", 95));
        parts.push(("HEADLINE", 2000));
    }
    parts.push(("FontY", y_distance - 5));
    parts.push(("HEADLINE", 10));
    padded(&parts)
}

#[test]
fn test_single_close_vote_beats_frequent_far_votes() {
    // X = 1000/101 + 3*10 = 39.90, Y = 1000/11 + 10 = 100.91
    let config = ScanConfig::default().with_window_radius(150);
    let report = scan_bytes(
        &voting_document(10),
        &input(&["HEADLINE"], &["FontX", "FontY"]),
        &config,
        &mut NullSink,
    );

    let a = report.association("HEADLINE").unwrap();
    assert_eq!(a.font.as_deref(), Some("FontY"));
    assert!((a.stats.as_ref().unwrap().score - 100.909).abs() < 0.01);
    // the losing font stays visible as a runner-up
    assert_eq!(a.candidates.len(), 1);
    assert_eq!(a.candidates[0].font, "FontX");
    assert_eq!(a.candidates[0].count, 3);
    assert!((a.candidates[0].score - 39.901).abs() < 0.01);
}

#[test]
fn test_frequency_overturns_minimum_distance() {
    // X = 39.90, Y = 1000/51 + 10 = 29.61
    let config = ScanConfig::default().with_window_radius(150);
    let report = scan_bytes(
        &voting_document(50),
        &input(&["HEADLINE"], &["FontX", "FontY"]),
        &config,
        &mut NullSink,
    );

    let a = report.association("HEADLINE").unwrap();
    assert_eq!(a.font.as_deref(), Some("FontX"));
    let stats = a.stats.as_ref().unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.min_distance, 100);
    assert!((stats.mean_distance - 100.0).abs() < f64::EPSILON);
    assert_eq!(a.confidence, Confidence::High);
}

#[test]
fn test_confidence_follows_configured_thresholds() {
    let raw = padded(&[("FontA", 295), ("TEXT", 0)]);
    let fonts = input(&["TEXT"], &["FontA"]);

    let default = scan_bytes(&raw, &fonts, &ScanConfig::default(), &mut NullSink);
    assert_eq!(default.association("TEXT").unwrap().confidence, Confidence::Medium);

    let strict = ScanConfig::default().with_confidence_distances(100, 200);
    let report = scan_bytes(&raw, &fonts, &strict, &mut NullSink);
    assert_eq!(report.association("TEXT").unwrap().confidence, Confidence::Low);
}

#[test]
fn test_equal_scores_resolve_by_vocabulary_order() {
    // both fonts sit 10 away, one on each side
    let raw = padded(&[("FontB", 5), ("TEXT", 6), ("FontA", 0)]);
    let report = scan_bytes(
        &raw,
        &input(&["TEXT"], &["FontA", "FontB"]),
        &ScanConfig::default(),
        &mut NullSink,
    );
    assert_eq!(report.font_for("TEXT"), Some("FontA"));
}

#[test]
fn test_repeated_scans_are_identical() {
    let raw = padded(&[("FontA", 40), ("T1", 700), ("FontB", 12), ("T2", 3), ("T1", 0)]);
    let scan_input = input(&["T1", "T2", "T3"], &["FontA", "FontB", "FontC"]);
    let config = ScanConfig::default();

    let first = scan_bytes(&raw, &scan_input, &config, &mut NullSink);
    let second = scan_bytes(&raw, &scan_input, &config, &mut NullSink);
    assert_eq!(first, second);
    assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());
}

#[test]
fn test_every_text_is_reported_once() {
    let raw = padded(&[("FontA", 5), ("T1", 5), ("T1", 5)]);
    let report = scan_bytes(
        &raw,
        &input(&["T1", "T2", "T1"], &["FontA"]),
        &ScanConfig::default(),
        &mut NullSink,
    );
    assert_eq!(report.associations.len(), 2);
    assert_eq!(report.summary.total_text_layers, 2);
    assert_eq!(report.summary.association_success, 2);
}

#[test]
fn test_empty_font_vocabulary_leaves_texts_unassigned() {
    let vocab = input(&["T1", "T2"], &[]);
    let report = scan_bytes(b"T1 T2", &vocab, &ScanConfig::default(), &mut NullSink);
    for association in report.associations.values() {
        assert_eq!(association.font, None);
        assert_eq!(association.method, Method::Unassigned);
    }
    assert_eq!(report.summary.association_success, 0);
}

#[test]
fn test_metadata_layers_then_overrides_then_proximity() {
    let doc = ByteDocument::normalize(&padded(&[("FontA", 3), ("T1", 3), ("T2", 3), ("T3", 0)]));
    let scan_input = input(&["T1", "T2", "T3"], &["FontA", "FontB", "FontC"])
        .with_layers(vec![LayerFonts {
            text: "T1".to_string(),
            fonts: vec!["Helvetica".to_string()],
        }])
        .with_overrides(vec![Override::new("T2", "FontC"), Override::new("T3", "Unknown")]);
    let mut sink = MemorySink::new();
    let report = correlate(&doc, &scan_input, &ScanConfig::default(), &mut sink);

    let t1 = report.association("T1").unwrap();
    assert_eq!((t1.font.as_deref(), t1.method), (Some("Helvetica"), Method::Metadata));
    let t2 = report.association("T2").unwrap();
    assert_eq!((t2.font.as_deref(), t2.method), (Some("FontC"), Method::Override));
    assert_eq!(t2.confidence, Confidence::High);
    // the override names a font outside the vocabulary, so proximity decides
    let t3 = report.association("T3").unwrap();
    assert_eq!((t3.font.as_deref(), t3.method), (Some("FontA"), Method::Proximity));

    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, ScanEvent::HintRejected { text, .. } if text == "T3")));
}

#[test]
fn test_zero_bytes_do_not_separate_tokens() {
    // UTF-16BE style storage of both tokens
    let mut raw = Vec::new();
    for b in b"FontA..TEXT" {
        raw.push(0);
        raw.push(*b);
    }
    let vocab = input(&["TEXT"], &["FontA"]);
    let report = scan_bytes(&raw, &vocab, &ScanConfig::default(), &mut NullSink);
    assert_eq!(report.document_length, 11);
    let a = report.association("TEXT").unwrap();
    assert_eq!(a.method, Method::Proximity);
    assert_eq!(a.stats.as_ref().unwrap().min_distance, 7);
}
