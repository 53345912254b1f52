// 🏥 Patient + Prescription Entities
//
// Both are immutable once constructed. Prescriptions reference their patient
// by id only; grouping happens in a derived index, not here.

use crate::repository::Entity;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PATIENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Patient {
    pub fn new(id: i64, name: &str, age: u32, gender: &str) -> Self {
        Patient {
            id,
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }
}

impl Entity for Patient {
    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient {{ Id = {}, Name = {}, Age = {}, Gender = {} }}",
            self.id, self.name, self.age, self.gender
        )
    }
}

// ============================================================================
// PRESCRIPTION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub patient_id: i64,
    pub medication_name: String,
    pub date_issued: NaiveDate,
}

impl Prescription {
    pub fn new(id: i64, patient_id: i64, medication_name: &str, date_issued: NaiveDate) -> Self {
        Prescription {
            id,
            patient_id,
            medication_name: medication_name.to_string(),
            date_issued,
        }
    }

    /// Index key: the owning patient
    pub fn patient_key(&self) -> i64 {
        self.patient_id
    }
}

impl Entity for Prescription {
    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription {{ Id = {}, PatientId = {}, Medication = {}, DateIssued = {} }}",
            self.id,
            self.patient_id,
            self.medication_name,
            self.date_issued.format("%Y-%m-%d")
        )
    }
}
