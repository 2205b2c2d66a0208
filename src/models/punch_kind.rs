use serde::Serialize;

/// The four punch actions an employee can record during a workday.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum PunchKind {
    CheckIn,
    CheckOut,
    LunchStart,
    LunchEnd,
}

impl PunchKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::CheckIn => "check-in",
            PunchKind::CheckOut => "check-out",
            PunchKind::LunchStart => "lunch-start",
            PunchKind::LunchEnd => "lunch-end",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "check-in" => Some(PunchKind::CheckIn),
            "check-out" => Some(PunchKind::CheckOut),
            "lunch-start" => Some(PunchKind::LunchStart),
            "lunch-end" => Some(PunchKind::LunchEnd),
            _ => None,
        }
    }

    /// Lenient parsing for CLI input: accepts the canonical strings
    /// plus short aliases ("in", "out").
    pub fn from_cli_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" | "check-in" | "checkin" => Some(PunchKind::CheckIn),
            "out" | "check-out" | "checkout" => Some(PunchKind::CheckOut),
            "lunch-start" | "lunchstart" => Some(PunchKind::LunchStart),
            "lunch-end" | "lunchend" => Some(PunchKind::LunchEnd),
            _ => None,
        }
    }

    /// Short status label shown in tables.
    pub fn status_text(&self) -> &'static str {
        match self {
            PunchKind::CheckIn => "Giriş",
            PunchKind::CheckOut => "Çıkış",
            PunchKind::LunchStart => "Öğle Arası Başlangıç",
            PunchKind::LunchEnd => "Öğle Arası Bitiş",
        }
    }

    /// Sentence used when showing an employee's latest punch.
    pub fn latest_status_text(&self) -> &'static str {
        match self {
            PunchKind::CheckIn => "İşe giriş yaptınız",
            PunchKind::CheckOut => "İşten çıkış yaptınız",
            PunchKind::LunchStart => "Öğle arasına çıktınız",
            PunchKind::LunchEnd => "Öğle arasından döndünüz",
        }
    }

    pub fn is_check_in(&self) -> bool {
        matches!(self, PunchKind::CheckIn)
    }

    pub fn is_check_out(&self) -> bool {
        matches!(self, PunchKind::CheckOut)
    }
}
