use bunner_trie_router::{
    MatchOutcome, RouteTable, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};

fn table_with(options: RouterOptions) -> RouteTable<&'static str> {
    RouteTable::with_options(options)
}

#[test]
fn router_options_when_default_then_values_match_documentation() {
    let options = RouterOptions::default();
    assert!(options.case_sensitive);
    assert!(!options.strict_trailing_slash);
    assert!(!options.allow_duplicate_slash);
    assert_eq!(options.max_segment_length, 255);
    assert!(!options.debug);
}

#[test]
fn router_options_when_all_fields_customized_then_values_are_assigned() {
    let options = RouterOptionsBuilder::default()
        .case_sensitive(false)
        .strict_trailing_slash(true)
        .allow_duplicate_slash(true)
        .max_segment_length(64)
        .debug(true)
        .build()
        .expect("options should build");

    assert!(!options.case_sensitive);
    assert!(options.strict_trailing_slash);
    assert!(options.allow_duplicate_slash);
    assert_eq!(options.max_segment_length, 64);
    assert!(options.debug);
}

#[test]
fn router_options_when_segment_length_zero_then_build_fails() {
    match RouterOptions::builder()
        .max_segment_length(0)
        .build()
        .expect_err("expected validation error")
    {
        RouterOptionsError::MaxSegmentLengthInvalid { provided } => assert_eq!(provided, 0),
    }
}

#[test]
fn router_options_when_deserialized_partially_then_defaults_fill_in() {
    let options: RouterOptions =
        serde_json::from_str(r#"{ "case_sensitive": false }"#).expect("json should parse");

    assert!(!options.case_sensitive);
    assert_eq!(options.max_segment_length, 255);

    let json = serde_json::to_string(&options).expect("serialize");
    let back: RouterOptions = serde_json::from_str(&json).expect("round trip");
    assert_eq!(back, options);
}

#[test]
fn router_options_when_case_insensitive_then_literals_ignore_case() {
    let mut table = table_with(RouterOptions::builder().case_sensitive(false).build().expect("options should build"));
    table.insert("/Users/Profile", "GET", "profile").expect("insert");
    table.insert("/files/IMG:id::Thumb", "GET", "thumb").expect("insert");

    assert!(table.match_route("/users/profile", "GET").expect("lookup").is_matched());
    assert!(table.match_route("/USERS/PROFILE", "GET").expect("lookup").is_matched());

    match table.match_route("/FILES/img42:thumb", "GET").expect("lookup") {
        MatchOutcome::Matched { bindings, .. } => assert_eq!(bindings.get("id"), Some("42")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn router_options_when_case_sensitive_then_literals_must_match_exactly() {
    let mut table = table_with(RouterOptions::default());
    table.insert("/Users", "GET", "users").expect("insert");

    assert!(table.match_route("/Users", "GET").expect("lookup").is_matched());
    assert_eq!(
        table.match_route("/users", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
}

#[test]
fn router_options_when_strict_trailing_slash_then_slash_is_significant() {
    let mut table = table_with(
        RouterOptions::builder()
            .strict_trailing_slash(true)
            .build()
            .expect("options should build"),
    );
    table.insert("/dir/", "GET", "dir").expect("insert");
    table.insert("/file", "GET", "file").expect("insert");

    assert!(table.match_route("/dir/", "GET").expect("lookup").is_matched());
    assert_eq!(
        table.match_route("/dir", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
    assert_eq!(
        table.match_route("/file/", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
}

#[test]
fn router_options_when_lenient_trailing_slash_then_both_forms_match() {
    let mut table = table_with(RouterOptions::default());
    table.insert("/file", "GET", "file").expect("insert");

    assert!(table.match_route("/file/", "GET").expect("lookup").is_matched());
}

#[test]
fn router_options_when_duplicate_slashes_then_collapse_unless_allowed() {
    let mut lenient = table_with(RouterOptions::default());
    lenient.insert("/a/b", "GET", "ab").expect("insert");
    assert!(lenient.match_route("/a//b", "GET").expect("lookup").is_matched());

    let mut strict = table_with(
        RouterOptions::builder()
            .allow_duplicate_slash(true)
            .build()
            .expect("options should build"),
    );
    strict.insert("/a/b", "GET", "ab").expect("insert");
    assert_eq!(
        strict.match_route("/a//b", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
}

#[test]
fn router_options_when_capture_exceeds_limit_then_not_found() {
    let mut table = table_with(RouterOptions::builder().max_segment_length(4).build().expect("options should build"));
    table.insert("/u/:id", "GET", "user").expect("insert");
    table.insert("/w/*", "GET", "wild").expect("insert");

    assert!(table.match_route("/u/1234", "GET").expect("lookup").is_matched());
    assert_eq!(
        table.match_route("/u/12345", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
    // wildcard remainders are not limited
    assert!(table.match_route("/w/abcdefgh/ijkl", "GET").expect("lookup").is_matched());
}

#[test]
fn router_options_when_debug_enabled_then_lookups_still_resolve() {
    let mut table = table_with(RouterOptions::builder().debug(true).build().expect("options should build"));
    table.insert("/x", "GET", "x").expect("insert");
    assert!(table.match_route("/x", "GET").expect("lookup").is_matched());
}

#[test]
fn router_options_when_case_insensitive_then_regex_constraints_ignore_case() {
    let mut table = table_with(RouterOptions::builder().case_sensitive(false).build().expect("options should build"));
    table.insert("/x/(ABC)", "GET", "abc").expect("insert");
    table.insert("/codes/:code([A-Z]{2})", "GET", "code").expect("insert");

    assert!(table.match_route("/x/abc", "GET").expect("lookup").is_matched());
    match table.match_route("/codes/gB", "GET").expect("lookup") {
        MatchOutcome::Matched { bindings, .. } => assert_eq!(bindings.get("code"), Some("gB")),
        other => panic!("unexpected outcome: {other:?}"),
    }

    let mut sensitive = table_with(RouterOptions::default());
    sensitive.insert("/x/(ABC)", "GET", "abc").expect("insert");
    assert_eq!(
        sensitive.match_route("/x/abc", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
}

#[test]
fn router_options_when_duplicate_slashes_collapse_then_wildcard_skips_them() {
    let mut lenient = table_with(RouterOptions::default());
    lenient.insert("/w/*", "GET", "wild").expect("insert");
    let outcome = lenient.match_route("/w/a//b", "GET").expect("lookup");
    assert_eq!(outcome.bindings().and_then(|b| b.get("*")), Some("a/b"));

    let mut raw = table_with(
        RouterOptions::builder()
            .allow_duplicate_slash(true)
            .build()
            .expect("options should build"),
    );
    raw.insert("/w/*", "GET", "wild").expect("insert");
    let outcome = raw.match_route("/w/a//b", "GET").expect("lookup");
    assert_eq!(outcome.bindings().and_then(|b| b.get("*")), Some("a//b"));
}
