use super::DischargeType;

#[derive(Debug, Clone)]
pub struct TestDischargeType {
    pub code: &'static str,
    pub description: &'static str,
}

impl Default for TestDischargeType {
    fn default() -> Self {
        Self {
            code: "ZZ",
            description: "TestDescription",
        }
    }
}

impl TestDischargeType {
    pub fn setup(&self, using_set: bool) -> DischargeType {
        if using_set {
            let mut value = DischargeType::default();
            value.code = self.code.to_string();
            value.description = self.description.to_string();
            value
        } else {
            DischargeType {
                code: self.code.to_string(),
                description: self.description.to_string(),
            }
        }
    }

    pub fn check(&self, value: &DischargeType) {
        assert_eq!(value.code, self.code);
        assert_eq!(value.description, self.description);
    }
}
