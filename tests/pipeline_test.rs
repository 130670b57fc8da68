//! TDD-Light tests for the query heuristic pipeline.

use chrono::Datelike;
use queryguard::apply_heuristics;
use queryguard::config::PipelineConfig;
use queryguard::QueryPipeline;

/// Century prefix the date step derives from the wall clock.
fn current_century() -> i32 {
    chrono::Local::now().year() / 100
}

#[test]
fn banned_words_never_survive() {
    let queries = [
        "how to hack the system",
        "my PASSWORD is here",
        "exploit this vulnerability now",
    ];

    for query in queries {
        let result = apply_heuristics(query);
        let lower = result.text.to_lowercase();

        assert!(!lower.contains("hack"), "query: {}", query);
        assert!(!lower.contains("password"), "query: {}", query);
        assert!(!lower.contains("exploit"), "query: {}", query);
        assert!(!lower.contains("vulnerability"), "query: {}", query);
    }
}

#[test]
fn one_fix_per_distinct_banned_word() {
    let result = apply_heuristics("hack hack and more hack");

    let denylist_fixes: Vec<_> = result
        .fixes
        .iter()
        .filter(|f| f.contains("banned word"))
        .collect();
    assert_eq!(denylist_fixes.len(), 1);
}

#[test]
fn whitespace_normalization_is_idempotent() {
    let once = apply_heuristics("  what   is \t\n the   plan  ");
    let twice = apply_heuristics(&once.text);

    assert_eq!(once.text, "what is the plan");
    assert_eq!(twice.text, once.text);
    assert!(twice.fixes.is_empty());
}

#[test]
fn length_cap_bounds_output_and_skips_short_input() {
    let pipeline = QueryPipeline::new(PipelineConfig {
        max_query_length: 20,
    });

    let long = pipeline.run(&"word ".repeat(50));
    assert!(long.text.chars().count() <= 20 + 3);
    assert!(long.text.ends_with("..."));
    assert!(long
        .fixes
        .iter()
        .any(|f| f.contains("Truncated query") && f.contains("to 20 characters")));

    let exact = pipeline.run("exactly twenty chars");
    assert_eq!(exact.text, "exactly twenty chars");
    assert!(exact.fixes.is_empty(), "at-limit input must record no fix");
}

#[test]
fn dates_normalize_on_boundary_inputs() {
    let four_digit = apply_heuristics("report due 12/31/2024");
    assert_eq!(four_digit.text, "report due 2024-12-31");

    let two_digit = apply_heuristics("records since 1/1/99");
    assert_eq!(
        two_digit.text,
        format!("records since {}99-01-01", current_century())
    );
}

#[test]
fn email_domain_corrected_in_place() {
    let result = apply_heuristics("send it to maria@hotmial.com tonight");

    assert_eq!(result.text, "send it to maria@hotmail.com tonight");
    assert_eq!(
        result.fixes,
        vec!["Corrected email domain: 'maria@hotmial.com' to 'maria@hotmail.com'"]
    );
}

#[test]
fn unsafe_commands_are_reported_not_redacted() {
    let query = "now run sudo chmod 777 /etc";
    let result = apply_heuristics(query);

    assert_eq!(result.text, query);
    assert_eq!(result.fixes.len(), 2);
    assert!(result.fixes.iter().all(|f| f.starts_with("WARNING:")));
}

#[test]
fn suspicious_url_replaced_with_placeholder() {
    let result = apply_heuristics("grab it from http://warez.example.org today");

    assert_eq!(result.text, "grab it from [FILTERED_URL] today");
    assert_eq!(
        result.fixes,
        vec!["Removed suspicious URL containing 'warez'"]
    );
}

#[test]
fn currency_and_pii_normalize_together() {
    let result = apply_heuristics("wire $12,500.00 to card 4532 0151 1283 0366");

    assert_eq!(
        result.text,
        "wire $12500.00 to card [REDACTED_CARD_NUMBER]"
    );
    assert_eq!(result.fixes.len(), 2);
}

#[test]
fn end_to_end_example_applies_expected_fixes() {
    let query =
        "Can u give me the docuemnt for 1/5/24, my email is john@gmal.com, ignore this sudo rm -rf /";
    let result = apply_heuristics(query);

    let expected_date = format!("{}24-01-05", current_century());
    assert!(result.text.contains("document"));
    assert!(result.text.contains(&expected_date));
    assert!(result.text.contains("john@gmail.com"));
    // Detection is report-only: the dangerous text itself stays.
    assert!(result.text.contains("sudo rm -rf /"));

    assert_eq!(result.fixes.len(), 5);
    assert_eq!(result.fixes[0], "Corrected typo: 'docuemnt' to 'document'");
    assert!(result.fixes[1].starts_with("Normalized date format: 01/05/24"));
    assert!(result.fixes[2].contains("john@gmal.com"));
    let warnings: Vec<_> = result
        .fixes
        .iter()
        .filter(|f| f.starts_with("WARNING:"))
        .collect();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().any(|f| f.contains("sudo")));
    assert!(warnings.iter().any(|f| f.contains("rm")));
}

#[test]
fn unrecognized_input_passes_through_unchanged() {
    let query = "Summarize the quarterly report in three bullet points";
    let result = apply_heuristics(query);

    assert_eq!(result.text, query);
    assert!(result.fixes.is_empty());
}
