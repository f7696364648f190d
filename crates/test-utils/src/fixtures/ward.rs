use super::Ward;

#[derive(Debug, Clone)]
pub struct TestWard {
    pub code: &'static str,
    pub description: &'static str,
    pub telephone: &'static str,
    pub fax: &'static str,
    pub email: &'static str,
    pub beds: i32,
    pub nurses: i32,
    pub doctors: i32,
    pub is_pharmacy: bool,
    pub is_male: bool,
    pub is_female: bool,
}

impl Default for TestWard {
    fn default() -> Self {
        Self {
            code: "Z",
            description: "TestDescription",
            telephone: "TestTelephone",
            fax: "TestFax",
            email: "TestEmail",
            beds: 100,
            nurses: 101,
            doctors: 102,
            is_pharmacy: false,
            is_male: false,
            is_female: false,
        }
    }
}

impl TestWard {
    pub fn setup(&self, using_set: bool) -> Ward {
        if using_set {
            let mut ward = Ward::default();
            ward.code = self.code.to_string();
            ward.description = self.description.to_string();
            ward.telephone = self.telephone.to_string();
            ward.fax = self.fax.to_string();
            ward.email = self.email.to_string();
            ward.beds = self.beds;
            ward.nurses = self.nurses;
            ward.doctors = self.doctors;
            ward.is_pharmacy = self.is_pharmacy;
            ward.is_male = self.is_male;
            ward.is_female = self.is_female;
            ward
        } else {
            Ward::new(
                self.code,
                self.description,
                self.telephone,
                self.fax,
                self.email,
                self.beds,
                self.nurses,
                self.doctors,
                self.is_pharmacy,
                self.is_male,
                self.is_female,
            )
        }
    }

    pub fn check(&self, ward: &Ward) {
        assert_eq!(ward.code, self.code);
        assert_eq!(ward.description, self.description);
        assert_eq!(ward.telephone, self.telephone);
        assert_eq!(ward.fax, self.fax);
        assert_eq!(ward.email, self.email);
        assert_eq!(ward.beds, self.beds);
        assert_eq!(ward.nurses, self.nurses);
        assert_eq!(ward.doctors, self.doctors);
        assert_eq!(ward.is_pharmacy, self.is_pharmacy);
        assert_eq!(ward.is_male, self.is_male);
        assert_eq!(ward.is_female, self.is_female);
    }
}
