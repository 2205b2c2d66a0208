use chrono::NaiveDate;
use serde::Serialize;

/// The six deviation categories produced by the classifier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum IrregularityKind {
    LateArrival,
    EarlyDeparture,
    LongLunch,
    ShortWorkDay,
    MissingCheckRecord,
    MissingLunchRecord,
}

impl IrregularityKind {
    /// Report label, as shown in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            IrregularityKind::LateArrival => "Geç Giriş",
            IrregularityKind::EarlyDeparture => "Erken Çıkış",
            IrregularityKind::LongLunch => "Uzun Mola",
            IrregularityKind::ShortWorkDay => "Kısa Çalışma Günü",
            IrregularityKind::MissingCheckRecord => "Eksik Giriş/Çıkış Kaydı",
            IrregularityKind::MissingLunchRecord => "Eksik Mola Kaydı",
        }
    }

    /// Parse a CLI filter value. Accepts the Turkish label or an ASCII
    /// alias (late, early, long-lunch, short-day, missing-check,
    /// missing-lunch).
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "late" | "geç giriş" => Some(IrregularityKind::LateArrival),
            "early" | "erken çıkış" => Some(IrregularityKind::EarlyDeparture),
            "long-lunch" | "uzun mola" => Some(IrregularityKind::LongLunch),
            "short-day" | "kısa çalışma günü" => Some(IrregularityKind::ShortWorkDay),
            "missing-check" | "eksik giriş/çıkış kaydı" => {
                Some(IrregularityKind::MissingCheckRecord)
            }
            "missing-lunch" | "eksik mola kaydı" => Some(IrregularityKind::MissingLunchRecord),
            _ => None,
        }
    }
}

/// One detected deviation for one employee on one date.
///
/// Several records may exist for the same employee/date (late arrival and
/// a long lunch can co-occur); the classifier deliberately does not
/// deduplicate across categories.
#[derive(Debug, Clone, Serialize)]
pub struct IrregularityRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub department_name: Option<String>,
    pub date: NaiveDate,
    pub kind: IrregularityKind,
    pub details: String,
    /// Expected wall-clock value ("09:00") or a waiting-marker phrase.
    pub expected: Option<String>,
    /// Actual wall-clock value.
    pub actual: Option<String>,
    /// Expected duration, formatted ("1 saat 0 dakika").
    pub expected_duration: Option<String>,
    /// Actual duration, formatted.
    pub duration: Option<String>,
}
