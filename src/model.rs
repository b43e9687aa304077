use serde::{Deserialize, Serialize};

/// Badge color used whenever a status string is not one of the known
/// variants. The UI must render unrecognized values, never reject them.
pub const DEFAULT_BADGE_COLOR: &str = "#6B7280";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassStatus {
    Active,
    Upcoming,
    Completed,
    Other(String),
}

impl From<String> for ClassStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => Self::Active,
            "Upcoming" => Self::Upcoming,
            "Completed" => Self::Completed,
            _ => Self::Other(s),
        }
    }
}

impl From<ClassStatus> for String {
    fn from(v: ClassStatus) -> Self {
        v.label().to_string()
    }
}

impl ClassStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Other(s) => s,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Active => "#10B981",
            Self::Upcoming => "#F59E0B",
            Self::Completed => "#6B7280",
            Self::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClassMode {
    Online,
    Offline,
    Hybrid,
    Other(String),
}

impl From<String> for ClassMode {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Online" => Self::Online,
            "Offline" => Self::Offline,
            "Hybrid" => Self::Hybrid,
            _ => Self::Other(s),
        }
    }
}

impl From<ClassMode> for String {
    fn from(v: ClassMode) -> Self {
        v.label().to_string()
    }
}

impl ClassMode {
    pub fn label(&self) -> &str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Hybrid => "Hybrid",
            Self::Other(s) => s,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Online => "#8B5CF6",
            Self::Offline => "#10B981",
            Self::Hybrid => "#F59E0B",
            Self::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }
}

/// Per-student fee standing shown on the students screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeeStatus {
    Paid,
    Pending,
    Overdue,
    Other(String),
}

impl From<String> for FeeStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Paid" => Self::Paid,
            "Pending" => Self::Pending,
            "Overdue" => Self::Overdue,
            _ => Self::Other(s),
        }
    }
}

impl From<FeeStatus> for String {
    fn from(v: FeeStatus) -> Self {
        v.label().to_string()
    }
}

impl FeeStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Overdue => "Overdue",
            Self::Other(s) => s,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Paid => "#10B981",
            Self::Pending => "#F59E0B",
            Self::Overdue => "#EF4444",
            Self::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    Active,
    Completed,
    Overdue,
    Other(String),
}

impl From<String> for RequestStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Active" => Self::Active,
            "Completed" => Self::Completed,
            "Overdue" => Self::Overdue,
            _ => Self::Other(s),
        }
    }
}

impl From<RequestStatus> for String {
    fn from(v: RequestStatus) -> Self {
        v.label().to_string()
    }
}

impl RequestStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Overdue => "Overdue",
            Self::Other(s) => s,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Active => "#3B82F6",
            Self::Completed => "#10B981",
            Self::Overdue => "#EF4444",
            Self::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }
}

/// Outcome of an individual payment on the recent-payments tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentOutcome {
    Paid,
    Pending,
    Failed,
    Other(String),
}

impl From<String> for PaymentOutcome {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Paid" => Self::Paid,
            "Pending" => Self::Pending,
            "Failed" => Self::Failed,
            _ => Self::Other(s),
        }
    }
}

impl From<PaymentOutcome> for String {
    fn from(v: PaymentOutcome) -> Self {
        v.label().to_string()
    }
}

impl PaymentOutcome {
    pub fn label(&self) -> &str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
            Self::Other(s) => s,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Paid => "#10B981",
            Self::Pending => "#F59E0B",
            Self::Failed => "#EF4444",
            Self::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Upi,
    Cash,
    BankTransfer,
    Other(String),
}

impl From<String> for PaymentMethod {
    fn from(s: String) -> Self {
        match s.as_str() {
            "UPI" => Self::Upi,
            "Cash" => Self::Cash,
            "Bank Transfer" => Self::BankTransfer,
            _ => Self::Other(s),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(v: PaymentMethod) -> Self {
        v.label().to_string()
    }
}

impl PaymentMethod {
    pub fn label(&self) -> &str {
        match self {
            Self::Upi => "UPI",
            Self::Cash => "Cash",
            Self::BankTransfer => "Bank Transfer",
            Self::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Performance {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
    Other(String),
}

impl From<String> for Performance {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Excellent" => Self::Excellent,
            "Good" => Self::Good,
            "Average" => Self::Average,
            "Needs Improvement" => Self::NeedsImprovement,
            _ => Self::Other(s),
        }
    }
}

impl From<Performance> for String {
    fn from(v: Performance) -> Self {
        v.label().to_string()
    }
}

impl Performance {
    pub fn label(&self) -> &str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Other(s) => s,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Excellent => "#10B981",
            Self::Good => "#3B82F6",
            Self::Average => "#F59E0B",
            Self::NeedsImprovement => "#EF4444",
            Self::Other(_) => DEFAULT_BADGE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MaterialKind {
    Pdf,
    Video,
    Link,
    Audio,
    Other(String),
}

impl From<String> for MaterialKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "PDF" => Self::Pdf,
            "Video" => Self::Video,
            "Link" => Self::Link,
            "Audio" => Self::Audio,
            _ => Self::Other(s),
        }
    }
}

impl From<MaterialKind> for String {
    fn from(v: MaterialKind) -> Self {
        v.label().to_string()
    }
}

impl MaterialKind {
    pub fn label(&self) -> &str {
        match self {
            Self::Pdf => "PDF",
            Self::Video => "Video",
            Self::Link => "Link",
            Self::Audio => "Audio",
            Self::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classroom {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub student_count: i64,
    pub mode: ClassMode,
    pub timing: String,
    pub next_class: String,
    pub status: ClassStatus,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    /// Free-text class label, e.g. "Grade 10 - Mathematics".
    #[serde(rename = "class")]
    pub class_label: String,
    pub parent_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub enrollment_date: String,
    pub total_classes: i64,
    pub attended_classes: i64,
    pub payment_status: FeeStatus,
    #[serde(default)]
    pub last_payment: String,
    #[serde(default)]
    pub avatar: String,
    pub performance: Performance,
    #[serde(default)]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id: String,
    pub title: String,
    /// Whole rupees; no fractional amounts anywhere in the app.
    pub amount: i64,
    #[serde(default)]
    pub due_date: String,
    pub students_count: i64,
    pub paid_count: i64,
    pub status: RequestStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub student_name: String,
    pub amount: i64,
    pub request_title: String,
    #[serde(default)]
    pub payment_date: String,
    pub status: PaymentOutcome,
    pub method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherProfile {
    pub name: String,
    pub bio: String,
    pub subjects: String,
    pub experience: String,
    pub rating: f64,
    pub avatar: String,
}

/// One session's worth of data, supplied whole by the shell. The daemon
/// never mutates it; create/add acknowledgements do not write back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub classrooms: Vec<Classroom>,
    pub students: Vec<Student>,
    pub payment_requests: Vec<PaymentRequest>,
    pub recent_payments: Vec<Payment>,
    pub materials: Vec<Material>,
    pub profile: TeacherProfile,
}
