// 🏥 Healthcare Program - Patients, prescriptions, and a per-patient index

use crate::entities::{Patient, Prescription};
use crate::index::GroupIndex;
use crate::repository::Repository;
use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;

// ============================================================================
// SEED DATA
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct HealthcareSeed {
    pub patients: Vec<Patient>,
    pub prescriptions: Vec<Prescription>,
}

impl HealthcareSeed {
    /// Three patients, five prescriptions
    pub fn sample() -> Self {
        let date = |m, d| NaiveDate::from_ymd_opt(2025, m, d).unwrap_or_default();

        HealthcareSeed {
            patients: vec![
                Patient::new(1, "Alice Johnson", 34, "Female"),
                Patient::new(2, "Bob Smith", 45, "Male"),
                Patient::new(3, "Carol Lee", 29, "Female"),
            ],
            prescriptions: vec![
                Prescription::new(1, 1, "Amoxicillin", date(1, 10)),
                Prescription::new(2, 1, "Ibuprofen", date(3, 5)),
                Prescription::new(3, 2, "Lisinopril", date(2, 20)),
                Prescription::new(4, 3, "Metformin", date(4, 1)),
                Prescription::new(5, 2, "Atorvastatin", date(5, 12)),
            ],
        }
    }
}

// ============================================================================
// APP
// ============================================================================

pub struct HealthSystemApp {
    patient_repo: Repository<Patient>,
    prescription_repo: Repository<Prescription>,
    prescription_map: GroupIndex<i64, Prescription>,
}

impl HealthSystemApp {
    pub fn new() -> Self {
        HealthSystemApp {
            patient_repo: Repository::new(),
            prescription_repo: Repository::new(),
            prescription_map: GroupIndex::new(Prescription::patient_key),
        }
    }

    pub fn seed_data(&mut self, seed: HealthcareSeed) {
        for patient in seed.patients {
            self.patient_repo.add(patient);
        }
        for prescription in seed.prescriptions {
            self.prescription_repo.add(prescription);
        }
    }

    /// Regroup prescriptions by patient from the current repository contents
    pub fn build_prescription_map(&mut self) {
        self.prescription_map
            .rebuild(&self.prescription_repo.get_all());
    }

    pub fn patients(&self) -> &Repository<Patient> {
        &self.patient_repo
    }

    pub fn prescriptions(&self) -> &Repository<Prescription> {
        &self.prescription_repo
    }

    pub fn prescriptions_mut(&mut self) -> &mut Repository<Prescription> {
        &mut self.prescription_repo
    }

    /// Copy of a patient's prescriptions; empty when the patient has none
    pub fn get_prescriptions_by_patient_id(&self, patient_id: i64) -> Vec<Prescription> {
        self.prescription_map.get(&patient_id).to_vec()
    }

    pub fn print_all_patients<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "All Patients:")?;
        for patient in self.patient_repo.iter() {
            writeln!(out, "{}", patient)?;
        }
        Ok(())
    }

    pub fn print_prescriptions_for_patient<W: Write>(&self, out: &mut W, patient_id: i64) -> Result<()> {
        writeln!(out, "\nPrescriptions for PatientId {}:", patient_id)?;

        let prescriptions = self.prescription_map.get(&patient_id);
        if prescriptions.is_empty() {
            writeln!(out, "No prescriptions found for this patient.")?;
        }
        for prescription in prescriptions {
            writeln!(out, "{}", prescription)?;
        }
        Ok(())
    }

    /// Seed, index, print every patient, then one patient's prescriptions
    pub fn run<W: Write>(&mut self, out: &mut W, seed: HealthcareSeed, selected_patient_id: i64) -> Result<()> {
        self.seed_data(seed);
        self.build_prescription_map();
        self.print_all_patients(out)?;
        self.print_prescriptions_for_patient(out, selected_patient_id)
    }
}

impl Default for HealthSystemApp {
    fn default() -> Self {
        Self::new()
    }
}
