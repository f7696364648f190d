use super::ExamType;

#[derive(Debug, Clone)]
pub struct TestExamType {
    pub code: &'static str,
    pub description: &'static str,
}

impl Default for TestExamType {
    fn default() -> Self {
        Self {
            code: "ZZ",
            description: "TestExamTypeDescription",
        }
    }
}

impl TestExamType {
    pub fn setup(&self, using_set: bool) -> ExamType {
        if using_set {
            let mut value = ExamType::default();
            value.code = self.code.to_string();
            value.description = self.description.to_string();
            value
        } else {
            ExamType {
                code: self.code.to_string(),
                description: self.description.to_string(),
            }
        }
    }

    pub fn check(&self, value: &ExamType) {
        assert_eq!(value.code, self.code);
        assert_eq!(value.description, self.description);
    }
}
