use crate::models::irregularity::IrregularityRecord;
use crate::models::punch::PunchEvent;
use serde::Serialize;

/// Flat row for punch-log export.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub employee_id: String,
    pub employee_name: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub source: String,
}

impl From<&PunchEvent> for PunchExport {
    fn from(ev: &PunchEvent) -> Self {
        Self {
            id: ev.id,
            employee_id: ev.employee_id.clone(),
            employee_name: ev.employee_name.clone().unwrap_or_default(),
            date: ev.date_str(),
            time: ev.time_str(),
            kind: ev.kind.to_db_str().to_string(),
            source: ev.source.clone(),
        }
    }
}

/// Flat row for irregularity-report export. Optional fields export as
/// empty strings so the CSV keeps a fixed column set.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: String,
    pub kind: String,
    pub details: String,
    pub expected: String,
    pub actual: String,
    pub expected_duration: String,
    pub duration: String,
}

impl From<&IrregularityRecord> for ReportExport {
    fn from(rec: &IrregularityRecord) -> Self {
        Self {
            employee_id: rec.employee_id.clone(),
            employee_name: rec.employee_name.clone(),
            department: rec.department_name.clone().unwrap_or_default(),
            date: rec.date.format("%Y-%m-%d").to_string(),
            kind: rec.kind.label().to_string(),
            details: rec.details.clone(),
            expected: rec.expected.clone().unwrap_or_default(),
            actual: rec.actual.clone().unwrap_or_default(),
            expected_duration: rec.expected_duration.clone().unwrap_or_default(),
            duration: rec.duration.clone().unwrap_or_default(),
        }
    }
}
