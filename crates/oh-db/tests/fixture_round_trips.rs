use oh_db::{MemoryStore, Record};
use oh_test_utils::{
    hospital_store, init_tracing_tests, Admission, DeliveryType, DischargeType, ExamType,
    TestAdmission, TestDeliveryType, TestDischargeType, TestExamType, TestWard, Ward,
};
use tracing::Level;

fn persist<R: Record>(store: &MemoryStore, record: &R) -> String {
    store.insert(record).expect("insert fixture");
    record.key()
}

#[test]
fn ward_gets_and_sets() {
    let _ = init_tracing_tests(Level::DEBUG);
    let fixture = TestWard::default();
    for using_set in [false, true] {
        let store = hospital_store();
        let code = persist(&store, &fixture.setup(using_set));
        let found = store.find::<Ward>(&code).unwrap().expect("ward stored");
        fixture.check(&found.record);
    }
}

#[test]
fn discharge_type_gets_and_sets() {
    let fixture = TestDischargeType::default();
    for using_set in [false, true] {
        let store = hospital_store();
        let code = persist(&store, &fixture.setup(using_set));
        let found = store
            .find::<DischargeType>(&code)
            .unwrap()
            .expect("discharge type stored");
        fixture.check(&found.record);
    }
}

#[test]
fn delivery_type_gets_and_sets() {
    let fixture = TestDeliveryType::default();
    for using_set in [false, true] {
        let store = hospital_store();
        let code = persist(&store, &fixture.setup(using_set));
        let found = store
            .find::<DeliveryType>(&code)
            .unwrap()
            .expect("delivery type stored");
        fixture.check(&found.record);
    }
}

#[test]
fn exam_type_gets_and_sets() {
    let fixture = TestExamType::default();
    for using_set in [false, true] {
        let store = hospital_store();
        let code = persist(&store, &fixture.setup(using_set));
        let found = store.find::<ExamType>(&code).unwrap().expect("exam type stored");
        fixture.check(&found.record);
    }
}

#[test]
fn admission_round_trips_with_its_references() {
    let fixture = TestAdmission::default();
    for using_set in [false, true] {
        let store = hospital_store();
        let ward = TestWard::default().setup(false);
        let dis_type = TestDischargeType::default().setup(false);
        let delivery_type = TestDeliveryType::default().setup(true);
        persist(&store, &ward);
        persist(&store, &dis_type);
        persist(&store, &delivery_type);

        let admission = fixture.setup(&ward, Some(&dis_type), Some(&delivery_type), using_set);
        let id = persist(&store, &admission);

        let found = store
            .find::<Admission>(&id)
            .unwrap()
            .expect("admission stored");
        fixture.check(&found.record, &ward, Some(&dis_type), Some(&delivery_type));
        assert_eq!(found.record.dis_type.as_deref(), Some("ZZ"));
        assert_eq!(found.record.delivery_type.as_deref(), Some("Z"));
    }
}

#[test]
fn admission_without_optional_references_round_trips() {
    let store = hospital_store();
    let ward = TestWard::default().setup(true);
    persist(&store, &ward);

    let fixture = TestAdmission::default();
    let id = persist(&store, &fixture.setup(&ward, None, None, false));

    let found = store.find::<Admission>(&id).unwrap().expect("admission stored");
    fixture.check(&found.record, &ward, None, None);
    assert_eq!(found.record.references().len(), 1);
}

#[test]
fn hospital_store_registers_every_relation() {
    let store = hospital_store();
    assert!(store.is_open());
    assert_eq!(
        store.relations().unwrap(),
        vec!["admission", "delivery_type", "discharge_type", "exam_type", "ward"]
    );
}

#[test]
fn find_all_is_ordered_by_key() {
    let store = hospital_store();
    for code in ["C", "A", "B"] {
        let mut ward = TestWard::default().setup(true);
        ward.code = code.to_string();
        store.insert(&ward).unwrap();
    }
    let codes: Vec<_> = store
        .find_all::<Ward>()
        .unwrap()
        .into_iter()
        .map(|w| w.record.code)
        .collect();
    assert_eq!(codes, vec!["A", "B", "C"]);
}
