//! Property-based tests for url-checker using proptest
//!
//! These tests generate random URLs and status codes to check the table
//! layout and the success predicate across a wide range of inputs.

use proptest::prelude::*;
use reqwest::StatusCode;
use url_checker::{CheckFailure, CheckResult, Palette, RequestErrorKind, TableFormatter};

/// Generate arbitrary URL-ish strings, including short and non-ASCII ones
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec("[a-z]{3,10}", 1..5)
            .prop_map(|parts| format!("https://{}.com", parts.join("."))),
        (r"[a-z]{3,8}", 1024..65535u16)
            .prop_map(|(domain, port)| format!("http://{}:{}", domain, port)),
        r"[a-z]{0,2}",
        Just("https://例え.テスト".to_string()),
        Just("not a url".to_string()),
    ]
}

fn failure_strategy() -> impl Strategy<Value = CheckFailure> {
    prop_oneof![
        Just(CheckFailure::Timeout),
        Just(CheckFailure::Connection),
        Just(CheckFailure::Request(RequestErrorKind::Builder)),
        Just(CheckFailure::Request(RequestErrorKind::Redirect)),
        r"[A-Za-z]{1,12}".prop_map(CheckFailure::Unexpected),
    ]
}

fn result_strategy() -> impl Strategy<Value = CheckResult> {
    prop_oneof![
        (url_strategy(), 100..600u16).prop_map(|(url, code)| {
            CheckResult::from_status(url, StatusCode::from_u16(code).unwrap())
        }),
        (url_strategy(), failure_strategy())
            .prop_map(|(url, failure)| CheckResult::from_failure(url, &failure)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_is_success_iff_2xx(code in 100..600u16) {
        let result = CheckResult::from_status("u", StatusCode::from_u16(code).unwrap());

        prop_assert_eq!(result.is_success(), (200..300).contains(&code));
        prop_assert_eq!(result.status_code(), Some(code));
        let expected_prefix = format!("{} ", code);
        prop_assert!(result.status().starts_with(&expected_prefix));
    }

    #[test]
    fn test_failures_have_no_code_and_a_sentinel(failure in failure_strategy()) {
        let result = CheckResult::from_failure("u", &failure);
        let status = result.status();

        prop_assert_eq!(result.status_code(), None);
        prop_assert!(!result.is_success());
        prop_assert!(
            status == "TIMEOUT"
                || status == "CONNECTION_ERROR"
                || status.starts_with("REQUEST_ERROR: ")
                || status.starts_with("ERROR: ")
        );
    }

    #[test]
    fn test_render_layout(results in prop::collection::vec(result_strategy(), 1..8)) {
        let rendered = TableFormatter::plain().render(&results);
        let lines: Vec<&str> = rendered.split('\n').collect();
        let width = results
            .iter()
            .map(|r| r.url().chars().count())
            .max()
            .unwrap()
            .max(3);

        prop_assert_eq!(TableFormatter::url_column_width(&results), width);
        prop_assert_eq!(lines.len(), results.len() + 2);
        prop_assert_eq!(lines[0].to_string(), format!("{:<width$} | Status", "URL"));
        prop_assert_eq!(lines[1].to_string(), "=".repeat(width + 23));
        for (line, result) in lines[2..].iter().zip(&results) {
            prop_assert_eq!(
                line.to_string(),
                format!("{:<width$} | {}", result.url(), result.status())
            );
        }
    }

    #[test]
    fn test_colors_do_not_change_layout(results in prop::collection::vec(result_strategy(), 1..8)) {
        let palette = Palette::ansi();
        let plain = TableFormatter::plain().render(&results);
        let colored = TableFormatter::new(palette).render(&results);
        let stripped = colored
            .replace(palette.success, "")
            .replace(palette.failure, "")
            .replace(palette.reset, "");

        prop_assert_eq!(stripped, plain);
    }
}
