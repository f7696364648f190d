use chrono::{Datelike, Local, NaiveDate};

use super::{Admission, DeliveryType, DischargeType, Ward};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct TestAdmission {
    pub id: i32,
    pub admitted: i32,
    pub kind: &'static str,
    pub year_prog: i32,
    pub adm_date: NaiveDate,
    pub fhu: &'static str,
    pub op_result: &'static str,
    pub op_date: NaiveDate,
    pub dis_date: NaiveDate,
    pub note: &'static str,
    pub trans_unit: f32,
    pub visit_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub weight: f32,
    pub ctrl_date1: NaiveDate,
    pub ctrl_date2: NaiveDate,
    pub abort_date: NaiveDate,
    pub user_id: &'static str,
    pub deleted: &'static str,
}

impl Default for TestAdmission {
    fn default() -> Self {
        Self {
            id: 1,
            admitted: 1,
            kind: "T",
            year_prog: 0,
            adm_date: date(Local::now().year(), 10, 8),
            fhu: "TestFHU",
            op_result: "Result",
            op_date: date(2007, 7, 5),
            dis_date: date(2004, 4, 2),
            note: "TestNote",
            trans_unit: 10.10,
            visit_date: date(2001, 1, 1),
            delivery_date: date(2002, 4, 4),
            weight: 20.20,
            ctrl_date1: date(2005, 7, 7),
            ctrl_date2: date(2008, 10, 10),
            abort_date: date(2009, 9, 7),
            user_id: "TestUserId",
            deleted: "N",
        }
    }
}

impl TestAdmission {
    pub fn setup(
        &self,
        ward: &Ward,
        dis_type: Option<&DischargeType>,
        delivery_type: Option<&DeliveryType>,
        using_set: bool,
    ) -> Admission {
        let dis_type = dis_type.map(|d| d.code.clone());
        let delivery_type = delivery_type.map(|d| d.code.clone());

        if using_set {
            let mut admission = Admission::default();
            admission.abort_date = Some(self.abort_date);
            admission.adm_date = Some(self.adm_date);
            admission.admitted = self.admitted;
            admission.ctrl_date1 = Some(self.ctrl_date1);
            admission.ctrl_date2 = Some(self.ctrl_date2);
            admission.deleted = self.deleted.to_string();
            admission.delivery_date = Some(self.delivery_date);
            admission.delivery_type = delivery_type;
            admission.dis_date = Some(self.dis_date);
            admission.dis_type = dis_type;
            admission.fhu = self.fhu.to_string();
            admission.id = self.id;
            admission.note = self.note.to_string();
            admission.op_date = Some(self.op_date);
            admission.op_result = self.op_result.to_string();
            admission.trans_unit = self.trans_unit;
            admission.kind = self.kind.to_string();
            admission.user_id = self.user_id.to_string();
            admission.visit_date = Some(self.visit_date);
            admission.ward = ward.code.clone();
            admission.weight = self.weight;
            admission.year_prog = self.year_prog;
            admission
        } else {
            Admission {
                id: self.id,
                admitted: self.admitted,
                kind: self.kind.to_string(),
                ward: ward.code.clone(),
                year_prog: self.year_prog,
                adm_date: Some(self.adm_date),
                fhu: self.fhu.to_string(),
                op_result: self.op_result.to_string(),
                op_date: Some(self.op_date),
                dis_date: Some(self.dis_date),
                dis_type,
                note: self.note.to_string(),
                trans_unit: self.trans_unit,
                visit_date: Some(self.visit_date),
                delivery_date: Some(self.delivery_date),
                delivery_type,
                weight: self.weight,
                ctrl_date1: Some(self.ctrl_date1),
                ctrl_date2: Some(self.ctrl_date2),
                abort_date: Some(self.abort_date),
                user_id: self.user_id.to_string(),
                deleted: self.deleted.to_string(),
            }
        }
    }

    /// Compare a stored admission with the fixture values and the rows it was set up against.
    pub fn check(
        &self,
        admission: &Admission,
        ward: &Ward,
        dis_type: Option<&DischargeType>,
        delivery_type: Option<&DeliveryType>,
    ) {
        assert_eq!(admission.abort_date, Some(self.abort_date));
        assert_eq!(admission.adm_date, Some(self.adm_date));
        assert_eq!(admission.admitted, self.admitted);
        assert_eq!(admission.ctrl_date1, Some(self.ctrl_date1));
        assert_eq!(admission.ctrl_date2, Some(self.ctrl_date2));
        assert_eq!(admission.deleted, self.deleted);
        assert_eq!(admission.delivery_date, Some(self.delivery_date));
        assert_eq!(admission.dis_date, Some(self.dis_date));
        assert_eq!(admission.fhu, self.fhu);
        assert_eq!(admission.id, self.id);
        assert_eq!(admission.note, self.note);
        assert_eq!(admission.op_date, Some(self.op_date));
        assert_eq!(admission.op_result, self.op_result);
        assert_eq!(admission.trans_unit, self.trans_unit);
        assert_eq!(admission.kind, self.kind);
        assert_eq!(admission.user_id, self.user_id);
        assert_eq!(admission.visit_date, Some(self.visit_date));
        assert_eq!(admission.weight, self.weight);
        assert_eq!(admission.year_prog, self.year_prog);

        assert_eq!(admission.ward, ward.code);
        assert_eq!(admission.dis_type.as_deref(), dis_type.map(|d| d.code.as_str()));
        assert_eq!(
            admission.delivery_type.as_deref(),
            delivery_type.map(|d| d.code.as_str())
        );
    }
}
