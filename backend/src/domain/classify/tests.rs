//! Regression coverage for this module.

use super::*;
use rstest::rstest;

#[rstest]
#[case(Failure::database("Database connection failed"), 503, "Database Connection Error", DB_CONNECTION_FAILED)]
#[case(Failure::cache("Redis connection failed"), 503, "Redis Connection Error", REDIS_CONNECTION_FAILED)]
#[case(Failure::health_check("Health check failed"), 503, "Health Check Error", HEALTH_CHECK_FAILED)]
#[case(Failure::service_unavailable("identity provider"), 503, "Service Unavailable", SERVICE_UNAVAILABLE)]
fn canonical_table_is_exact(
    #[case] failure: Failure,
    #[case] status: u16,
    #[case] category: &'static str,
    #[case] code: &'static str,
) {
    let classification = Classification::of_failure(&failure);
    assert_eq!(classification.status, status);
    assert_eq!(classification.category, category);
    assert_eq!(classification.code, code);
    assert_eq!(classification.message, failure.message());
}

#[test]
fn health_check_carries_its_own_status() {
    let failure = Failure::health_check_with_status("Health check failed: boom", 500);
    let classification = Classification::of_failure(&failure);
    assert_eq!(classification.status, 500);
    assert_eq!(classification.code, HEALTH_CHECK_FAILED);
}

#[test]
fn unclassified_takes_the_generic_branch() {
    let classification = Classification::of_failure(&Failure::unclassified("boom"));
    assert_eq!(classification.status, 500);
    assert_eq!(classification.category, "Internal Server Error");
    assert_eq!(classification.code, INTERNAL_ERROR);
    assert_eq!(classification.message, "boom");
}

#[test]
fn generic_errors_keep_their_message() {
    let error = std::io::Error::other("disk on fire");
    let classification = Classification::of_error(&error);
    assert_eq!(classification.status, 500);
    assert_eq!(classification.code, INTERNAL_ERROR);
    assert_eq!(classification.message, "disk on fire");
}

#[test]
fn of_error_preserves_recognised_failures() {
    let failure = Failure::cache("Redis connection check failed");
    let via_error = Classification::of_error(&failure);
    assert_eq!(via_error, Classification::of_failure(&failure));
    assert_eq!(via_error.code, REDIS_CONNECTION_FAILED);
}

#[test]
fn opaque_discards_the_original_payload() {
    let classification = Classification::opaque();
    assert_eq!(classification.status, 500);
    assert_eq!(classification.code, UNKNOWN_ERROR);
    assert_eq!(classification.message, "An unexpected error occurred");
}

#[rstest]
#[case(Failure::database("down"), true)]
#[case(Failure::cache("down"), true)]
#[case(Failure::service_unavailable("identity provider"), true)]
#[case(Failure::health_check("down"), false)]
#[case(Failure::unclassified("boom"), false)]
fn recoverability_follows_the_code(#[case] failure: Failure, #[case] recoverable: bool) {
    assert_eq!(
        Classification::of_failure(&failure).is_recoverable(),
        recoverable
    );
}

#[rstest]
#[case(400)]
#[case(404)]
#[case(499)]
#[case(500)]
#[case(503)]
#[case(599)]
fn client_and_server_predicates_partition_at_500(#[case] status: u16) {
    let classification = Classification {
        status,
        message: "x".into(),
        category: "Internal Server Error",
        code: INTERNAL_ERROR,
    };
    assert_ne!(
        classification.is_client_error(),
        classification.is_server_error()
    );
    assert_eq!(classification.is_server_error(), status >= 500);
}

#[test]
fn classification_is_idempotent() {
    let failure = Failure::database("Database connection failed");
    assert_eq!(
        Classification::of_failure(&failure),
        Classification::of_failure(&failure)
    );
}
