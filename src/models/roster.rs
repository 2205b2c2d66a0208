use serde::Serialize;

/// A department, identified by a short code chosen at creation time.
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: String,   // ⇔ departments.id (TEXT, short code)
    pub name: String, // ⇔ departments.name
    pub created_at: String,
}

/// An employee. `department_id` is optional: an employee without a
/// department is legal but excluded from the irregularity report.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String, // ⇔ employees.id (TEXT, short code)
    pub name: String,
    pub department_id: Option<String>,
    pub created_at: String,
}
