use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

pub const AGE_RANGE: (u32, u32) = (10, 100);
pub const SLEEP_HOURS_RANGE: (u32, u32) = (0, 12);
pub const ACTIVITY_DAYS_RANGE: (u32, u32) = (0, 7);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EmploymentStatus {
    Student,
    Employed,
    #[serde(rename = "Self-Employed")]
    SelfEmployed,
    Unemployed,
}

impl EmploymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Student => "Student",
            EmploymentStatus::Employed => "Employed",
            EmploymentStatus::SelfEmployed => "Self-Employed",
            EmploymentStatus::Unemployed => "Unemployed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum WorkEnvironment {
    #[serde(rename = "On-site")]
    OnSite,
    Hybrid,
    Remote,
}

impl WorkEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkEnvironment::OnSite => "On-site",
            WorkEnvironment::Hybrid => "Hybrid",
            WorkEnvironment::Remote => "Remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

/// Demographic and lifestyle answers from the intake sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Demographics {
    pub age: u32,
    pub gender: Gender,
    pub employment_status: EmploymentStatus,
    pub work_environment: WorkEnvironment,
    pub mental_health_history: YesNo,
    pub seeks_treatment: YesNo,
    pub sleep_hours: u32,
    pub physical_activity_days: u32,
}

impl Demographics {
    /// Check the numeric fields against the ranges the intake form allows.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_range("age", self.age, AGE_RANGE)?;
        check_range("sleep_hours", self.sleep_hours, SLEEP_HOURS_RANGE)?;
        check_range(
            "physical_activity_days",
            self.physical_activity_days,
            ACTIVITY_DAYS_RANGE,
        )?;
        Ok(())
    }
}

fn check_range(field: &'static str, value: u32, (min, max): (u32, u32)) -> Result<(), CoreError> {
    if value < min || value > max {
        return Err(CoreError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
