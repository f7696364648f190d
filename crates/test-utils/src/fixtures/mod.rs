//! Hospital entities and their fixture helpers.
//!
//! Every `TestX` helper builds an entity with known values, either through the entity's
//! constructor or by filling a default value field by field (`using_set`), and can check
//! an entity read back from the store against those values.

use chrono::NaiveDate;
use oh_db::{MemoryStore, Record, RowRef, StoreConfig};
use serde::{Deserialize, Serialize};

pub mod admission;
pub mod disctype;
pub mod dlvrtype;
pub mod exatype;
pub mod ward;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub code: String,
    pub description: String,
    pub telephone: String,
    pub fax: String,
    pub email: String,
    pub beds: i32,
    pub nurses: i32,
    pub doctors: i32,
    pub is_pharmacy: bool,
    pub is_male: bool,
    pub is_female: bool,
}

impl Ward {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        telephone: impl Into<String>,
        fax: impl Into<String>,
        email: impl Into<String>,
        beds: i32,
        nurses: i32,
        doctors: i32,
        is_pharmacy: bool,
        is_male: bool,
        is_female: bool,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            telephone: telephone.into(),
            fax: fax.into(),
            email: email.into(),
            beds,
            nurses,
            doctors,
            is_pharmacy,
            is_male,
            is_female,
        }
    }
}

impl Record for Ward {
    const RELATION: &'static str = "ward";

    fn key(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DischargeType {
    pub code: String,
    pub description: String,
}

impl Record for DischargeType {
    const RELATION: &'static str = "discharge_type";

    fn key(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryType {
    pub code: String,
    pub description: String,
}

impl Record for DeliveryType {
    const RELATION: &'static str = "delivery_type";

    fn key(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamType {
    pub code: String,
    pub description: String,
}

impl Record for ExamType {
    const RELATION: &'static str = "exam_type";

    fn key(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    pub id: i32,
    pub admitted: i32,
    pub kind: String,
    pub ward: String,
    pub year_prog: i32,
    pub adm_date: Option<NaiveDate>,
    pub fhu: String,
    pub op_result: String,
    pub op_date: Option<NaiveDate>,
    pub dis_date: Option<NaiveDate>,
    pub dis_type: Option<String>,
    pub note: String,
    pub trans_unit: f32,
    pub visit_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub delivery_type: Option<String>,
    pub weight: f32,
    pub ctrl_date1: Option<NaiveDate>,
    pub ctrl_date2: Option<NaiveDate>,
    pub abort_date: Option<NaiveDate>,
    pub user_id: String,
    pub deleted: String,
}

impl Record for Admission {
    const RELATION: &'static str = "admission";

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn references(&self) -> Vec<RowRef> {
        let mut refs = vec![RowRef::new(Ward::RELATION, self.ward.clone())];
        if let Some(code) = &self.dis_type {
            refs.push(RowRef::new(DischargeType::RELATION, code.clone()));
        }
        if let Some(code) = &self.delivery_type {
            refs.push(RowRef::new(DeliveryType::RELATION, code.clone()));
        }
        refs
    }
}

/// A store with every hospital relation registered.
pub fn hospital_store() -> MemoryStore {
    let tables = [
        Ward::RELATION,
        DischargeType::RELATION,
        DeliveryType::RELATION,
        ExamType::RELATION,
        Admission::RELATION,
    ];
    MemoryStore::from_config(&StoreConfig {
        tables: tables.into_iter().map(String::from).collect(),
        open: true,
    })
}
