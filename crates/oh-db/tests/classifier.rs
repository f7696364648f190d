use oh_db::{
    translate, translate_async, DataAccessError, DomainFailure, FailureCategory, MessageKey,
    Severity, TranslateExt, Translator, TranslatorConfig, Versioned,
};
use oh_error::{FallbackCatalog, MessageCatalog};
use oh_test_utils::{
    hospital_store, Admission, CapturedLogs, TestAdmission, TestDeliveryType, TestDischargeType,
    TestWard, Ward,
};
use tracing::Level;

const UNCLASSIFIED_LINE: &str = "unexpected failure in translatable operation";

/// Store holding a ward that an admission points at.
fn store_with_admitted_ward() -> (oh_db::MemoryStore, Ward) {
    let store = hospital_store();
    let ward = TestWard::default().setup(false);
    let dis_type = TestDischargeType::default().setup(false);
    let delivery_type = TestDeliveryType::default().setup(false);
    store.insert(&ward).unwrap();
    store.insert(&dis_type).unwrap();
    store.insert(&delivery_type).unwrap();
    let admission =
        TestAdmission::default().setup(&ward, Some(&dis_type), Some(&delivery_type), false);
    store.insert(&admission).unwrap();
    (store, ward)
}

fn expect_failure<T: std::fmt::Debug>(result: Result<T, DomainFailure>) -> DomainFailure {
    match result {
        Ok(v) => panic!("expected a translated failure, got Ok({v:?})"),
        Err(failure) => failure,
    }
}

#[test]
fn deleting_a_referenced_ward_is_a_referential_integrity_violation() {
    let (store, ward) = store_with_admitted_ward();

    let failure = expect_failure(translate(|| store.delete::<Ward>(&ward.code)));

    assert_eq!(
        failure.category(),
        FailureCategory::ReferentialIntegrityViolation
    );
    assert_eq!(failure.message_key(), MessageKey::StillReferenced);
    assert_eq!(failure.severity(), Severity::Error);
    assert_eq!(
        FallbackCatalog.resolve(failure.message_key()),
        "item still referenced elsewhere"
    );
    match failure.cause_as::<DataAccessError>() {
        Some(DataAccessError::IntegrityViolation { relation, detail }) => {
            assert_eq!(relation, "ward");
            assert!(detail.contains("admission/1"), "{detail}");
        }
        other => panic!("expected integrity violation as cause, got {other:?}"),
    }
    assert!(store.exists::<Ward>(&ward.code).unwrap());
}

#[test]
fn dangling_reference_is_a_referential_integrity_violation() {
    let store = hospital_store();
    let ward = TestWard::default().setup(false);
    let admission = TestAdmission::default().setup(&ward, None, None, false);

    let failure = expect_failure(store.insert(&admission).translate());
    assert_eq!(
        failure.category(),
        FailureCategory::ReferentialIntegrityViolation
    );
}

#[test]
fn unknown_relation_is_a_malformed_query() {
    let store = oh_db::MemoryStore::new();

    let failure = expect_failure(translate(|| store.find::<Ward>("Z")));

    assert_eq!(failure.category(), FailureCategory::MalformedQuery);
    assert_eq!(failure.message_key(), MessageKey::QueryProblem);
    assert!(matches!(
        failure.cause_as::<DataAccessError>(),
        Some(DataAccessError::InvalidResourceUsage { .. })
    ));
}

#[test]
fn closed_store_is_connection_unavailable() {
    let (store, ward) = store_with_admitted_ward();
    store.close();

    let failure = expect_failure(translate(|| store.find::<Ward>(&ward.code)));

    assert_eq!(failure.category(), FailureCategory::ConnectionUnavailable);
    assert_eq!(failure.message_key(), MessageKey::ServerConnection);
}

#[test]
fn stale_update_is_an_optimistic_lock_conflict() {
    let (store, ward) = store_with_admitted_ward();
    let first = store.find::<Ward>(&ward.code).unwrap().unwrap();
    let mut second = first.clone();

    let mut edited = first.clone();
    edited.record.description = "Update".to_string();
    let saved = store.update(&edited).unwrap();
    assert_eq!(saved.version, 1);

    second.record.beds = 1;
    let failure = expect_failure(translate(|| store.update(&second)));

    assert_eq!(failure.category(), FailureCategory::OptimisticLockConflict);
    assert_eq!(failure.message_key(), MessageKey::UpdatedBySomeoneElse);
    assert!(matches!(
        failure.cause_as::<DataAccessError>(),
        Some(DataAccessError::OptimisticLockFailure {
            expected: 0,
            actual: 1,
            ..
        })
    ));

    let current = store.find::<Ward>(&ward.code).unwrap().unwrap();
    assert_eq!(current.record.description, "Update");
}

#[test]
fn unclassified_failure_is_logged_exactly_once() {
    let store = hospital_store();
    let ghost = Versioned {
        version: 0,
        record: TestWard::default().setup(true),
    };
    let logs = CapturedLogs::default();

    let failure = tracing::subscriber::with_default(logs.subscriber(Level::TRACE), || {
        expect_failure(translate(|| store.update(&ghost)))
    });

    assert_eq!(failure.category(), FailureCategory::Unclassified);
    assert_eq!(failure.message_key(), MessageKey::UnexpectedError);
    assert!(matches!(
        failure.cause_as::<DataAccessError>(),
        Some(DataAccessError::NotFound { .. })
    ));

    assert_eq!(logs.count(UNCLASSIFIED_LINE), 1, "{}", logs.contents());
    assert!(logs.contents().contains("No row Z in ward"));
}

#[test]
fn classified_failures_do_not_log_diagnostics() {
    let (store, ward) = store_with_admitted_ward();
    let logs = CapturedLogs::default();

    tracing::subscriber::with_default(logs.subscriber(Level::TRACE), || {
        let _ = translate(|| store.delete::<Ward>(&ward.code));
        store.close();
        let _ = translate(|| store.exists::<Ward>(&ward.code));
    });

    assert_eq!(logs.count(UNCLASSIFIED_LINE), 0, "{}", logs.contents());
}

#[test]
fn success_constructs_nothing_and_logs_nothing() {
    let (store, ward) = store_with_admitted_ward();
    let logs = CapturedLogs::default();

    let found = tracing::subscriber::with_default(logs.subscriber(Level::TRACE), || {
        translate(|| store.find::<Ward>(&ward.code))
    })
    .expect("lookup succeeds")
    .expect("ward present");

    assert_eq!(found.record, ward);
    assert_eq!(logs.count(UNCLASSIFIED_LINE), 0);
}

#[test]
fn cause_chain_is_logged_when_enabled() {
    #[derive(Debug, thiserror::Error)]
    #[error("admission export failed")]
    struct Export(#[source] std::io::Error);

    let translator = Translator::new(TranslatorConfig {
        log_cause_chain: true,
        capture_backtrace: false,
    });
    let logs = CapturedLogs::default();

    let failure = tracing::subscriber::with_default(logs.subscriber(Level::ERROR), || {
        let err = DataAccessError::Other(Box::new(Export(std::io::Error::other("disk full"))));
        translator.translate_err(err)
    });

    assert!(failure.is_unclassified());
    assert_eq!(logs.count(UNCLASSIFIED_LINE), 1);
    assert!(logs.contents().contains("disk full"));
}

#[tokio::test]
async fn async_operations_are_translated_too() {
    let (store, ward) = store_with_admitted_ward();

    let ok = translate_async(async { store.exists::<Ward>(&ward.code) }).await;
    assert!(ok.expect("exists succeeds"));

    let failure = translate_async(async { store.delete::<Ward>(&ward.code) })
        .await
        .expect_err("ward is referenced");
    assert_eq!(
        failure.category(),
        FailureCategory::ReferentialIntegrityViolation
    );
}

#[tokio::test]
async fn async_unclassified_failure_is_logged_once() {
    let logs = CapturedLogs::default();
    let _guard = tracing::subscriber::set_default(logs.subscriber(Level::TRACE));

    let failure = Translator::default()
        .run_async(async { Err::<(), _>(std::io::Error::other("socket reset")) })
        .await
        .expect_err("io error is translated");

    assert!(failure.is_unclassified());
    assert_eq!(logs.count(UNCLASSIFIED_LINE), 1);
    assert!(logs.contents().contains("socket reset"));
}

#[test]
fn translated_failures_are_independent_across_threads() {
    let (store, ward) = store_with_admitted_ward();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            let code = ward.code.clone();
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    translate(|| store.delete::<Ward>(&code)).map(|_| ())
                } else {
                    translate(|| store.find::<Admission>("404")).map(|_| ())
                }
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("thread finished");
        if i % 2 == 0 {
            assert_eq!(
                result.unwrap_err().category(),
                FailureCategory::ReferentialIntegrityViolation
            );
        } else {
            assert!(result.is_ok());
        }
    }
}

#[test]
fn tracing_policy_reports_translated_failures_at_the_boundary() {
    use oh_error::{ResultExt, TracingPolicy};

    let (store, ward) = store_with_admitted_ward();
    let logs = CapturedLogs::default();

    let result = tracing::subscriber::with_default(logs.subscriber(Level::INFO), || {
        translate(|| store.delete::<Ward>(&ward.code)).emit_error(&TracingPolicy)
    });

    assert!(result.is_err());
    assert_eq!(logs.count("category=\"referential_integrity_violation\""), 1);
    assert!(logs
        .contents()
        .contains("key=\"angal.sql.theselecteditemisstillusedsomewhere\""));
    assert_eq!(logs.count(UNCLASSIFIED_LINE), 0);
}
