use bunner_trie_router::{HttpMethod, MatchOutcome, Params, RouteTable};

fn bindings<H: Clone>(table: &RouteTable<H>, path: &str) -> Params {
    match table.match_route(path, "GET").expect("lookup should not error") {
        MatchOutcome::Matched { bindings, .. } => bindings,
        other => panic!("expected a match for {path}, got {:?}", other.as_str()),
    }
}

#[test]
fn table_when_parameter_route_registered_then_extracts_values() {
    let mut table = RouteTable::new();
    table.insert("/users/:id/profile", "GET", 1).expect("insert");

    let params = bindings(&table, "/users/123/profile");
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("id"), Some("123"));
}

#[test]
fn table_when_several_parameters_then_binds_in_pattern_order() {
    let mut table = RouteTable::new();
    table
        .insert("/orgs/:org/repos/:repo", "GET", 1)
        .expect("insert");

    let params = bindings(&table, "/orgs/acme/repos/router");
    let pairs: Vec<(&str, &str)> = params.iter().collect();
    assert_eq!(pairs, vec![("org", "acme"), ("repo", "router")]);
}

#[test]
fn table_when_optional_parameter_then_matches_with_and_without_value() {
    let mut table = RouteTable::new();
    table.insert("/users/:id?", "GET", 1).expect("insert");

    assert_eq!(bindings(&table, "/users/42").get("id"), Some("42"));
    assert!(bindings(&table, "/users").is_empty());
}

#[test]
fn table_when_optional_parameter_skipped_then_deeper_segments_still_match() {
    let mut table = RouteTable::new();
    table
        .insert("/posts/:page?/comments", "GET", 1)
        .expect("insert");

    assert_eq!(bindings(&table, "/posts/3/comments").get("page"), Some("3"));
    assert!(bindings(&table, "/posts/comments").is_empty());
}

#[test]
fn table_when_multi_parameter_then_splits_on_separator() {
    let mut table = RouteTable::new();
    table
        .insert("/near/:lat-:lng/radius/:r", "GET", 1)
        .expect("insert");

    let params = bindings(&table, "/near/40.7-(-73.9)/radius/5");
    assert_eq!(params.get("lat"), Some("40.7"));
    assert_eq!(params.get("lng"), Some("-73.9"));
    assert_eq!(params.get("r"), Some("5"));
}

#[test]
fn table_when_multi_parameter_arity_differs_then_not_found() {
    let mut table = RouteTable::new();
    table.insert("/near/:lat-:lng", "GET", 1).expect("insert");

    for path in ["/near/1-2-3", "/near/1", "/near/-2"] {
        assert_eq!(
            table.match_route(path, "GET").expect("lookup"),
            MatchOutcome::NotFound,
            "{path}"
        );
    }
}

#[test]
fn table_when_parameter_has_prefix_then_prefix_is_stripped() {
    let mut table = RouteTable::new();
    table.insert("/api/v:version/items", "GET", 1).expect("insert");

    assert_eq!(bindings(&table, "/api/v2/items").get("version"), Some("2"));
    assert_eq!(
        table.match_route("/api/v/items", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
}

#[test]
fn table_when_parameter_has_colon_suffix_then_suffix_is_stripped() {
    let mut table = RouteTable::new();
    table.insert("/tasks/:id::cancel", "POST", 1).expect("insert");

    match table.match_route("/tasks/9:cancel", "POST").expect("lookup") {
        MatchOutcome::Matched { bindings, .. } => assert_eq!(bindings.get("id"), Some("9")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn table_when_parameter_value_has_mixed_case_then_case_is_preserved() {
    let mut table = RouteTable::new();
    table.insert("/users/:name", "GET", 1).expect("insert");

    assert_eq!(bindings(&table, "/users/MixedCase").get("name"), Some("MixedCase"));
}

#[test]
fn table_when_parameter_segment_empty_then_not_found() {
    let mut table = RouteTable::new();
    table.insert("/users/:id/edit", "GET", 1).expect("insert");

    assert_eq!(
        table.match_route("/users//edit", "GET").expect("lookup"),
        MatchOutcome::NotFound
    );
}

#[test]
fn table_when_params_converted_then_map_holds_every_binding() {
    let mut table = RouteTable::new();
    table.insert("/a/:x/b/:y", "GET", 1).expect("insert");

    let map = bindings(&table, "/a/1/b/2").into_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("x").map(String::as_str), Some("1"));
    assert_eq!(map.get("y").map(String::as_str), Some("2"));
}

#[test]
fn table_when_same_kind_siblings_overlap_then_registration_order_is_irrelevant() {
    let cases = [
        (["/api/:id", "/api/v:ver"], "/api/v2", "/api/v:ver"),
        (["/f/:id", "/f/:name::json"], "/f/5:json", "/f/:name::json"),
    ];

    for (patterns, path, expected) in cases {
        for order in [[0, 1], [1, 0]] {
            let mut table = RouteTable::new();
            for i in order {
                table.insert(patterns[i], "GET", patterns[i]).expect("insert");
            }
            assert_eq!(
                table.match_route(path, "GET").expect("lookup").handler(),
                Some(&expected),
                "{path} with {order:?}"
            );
        }
    }
}

#[test]
fn table_when_parameter_route_lacks_method_then_reports_allowed_methods() {
    let mut table = RouteTable::new();
    table.insert("/users/:id", "GET", 1).expect("insert");

    match table.match_route("/users/1", "POST").expect("lookup") {
        MatchOutcome::MethodNotAllowed { allowed_methods } => {
            assert_eq!(allowed_methods, vec![HttpMethod::Get]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn table_when_skipped_optional_lacks_method_then_reports_allowed_methods() {
    let mut table = RouteTable::new();
    table.insert("/users/:id?", "GET", 1).expect("insert");

    match table.match_route("/users", "DELETE").expect("lookup") {
        MatchOutcome::MethodNotAllowed { allowed_methods } => {
            assert_eq!(allowed_methods, vec![HttpMethod::Get]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
