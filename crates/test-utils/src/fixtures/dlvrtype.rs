use super::DeliveryType;

#[derive(Debug, Clone)]
pub struct TestDeliveryType {
    pub code: &'static str,
    pub description: &'static str,
}

impl Default for TestDeliveryType {
    fn default() -> Self {
        Self {
            code: "Z",
            description: "TestDescription",
        }
    }
}

impl TestDeliveryType {
    pub fn setup(&self, using_set: bool) -> DeliveryType {
        if using_set {
            let mut value = DeliveryType::default();
            value.code = self.code.to_string();
            value.description = self.description.to_string();
            value
        } else {
            DeliveryType {
                code: self.code.to_string(),
                description: self.description.to_string(),
            }
        }
    }

    pub fn check(&self, value: &DeliveryType) {
        assert_eq!(value.code, self.code);
        assert_eq!(value.description, self.description);
    }
}
