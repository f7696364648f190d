pub mod fixtures;
pub mod logs;

pub use fixtures::{
    admission::TestAdmission, disctype::TestDischargeType, dlvrtype::TestDeliveryType,
    exatype::TestExamType, hospital_store, ward::TestWard, Admission, DeliveryType,
    DischargeType, ExamType, Ward,
};
pub use logs::{init_tracing_tests, CapturedLogs};
