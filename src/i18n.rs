//! Display languages and translated UI strings.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language '{}', expected ar or en", other)),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Ar => write!(f, "ar"),
            Language::En => write!(f, "en"),
        }
    }
}

/// Every translatable string the client shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Text {
    FieldRequired,
    InvalidEmail,
    InvalidPhone,
    EnrollmentSent,
    GenericError,
    LessonCompleted,
    DataRefreshed,
    RefreshFailed,
    NoRecentActivity,
    Loading,
    AutoRefreshOn,
    AutoRefreshOff,
    StatsTitle,
    ActivityTitle,
    TestimonialsTitle,
}

pub fn tr(lang: Language, text: Text) -> &'static str {
    match lang {
        Language::En => match text {
            Text::FieldRequired => "This field is required",
            Text::InvalidEmail => "Please enter a valid email address",
            Text::InvalidPhone => "Please enter a valid phone number",
            Text::EnrollmentSent => "Your enrollment request was sent successfully",
            Text::GenericError => "Something went wrong, please try again",
            Text::LessonCompleted => "Lesson marked as completed",
            Text::DataRefreshed => "Data refreshed",
            Text::RefreshFailed => "Failed to refresh data",
            Text::NoRecentActivity => "No recent activity",
            Text::Loading => "Loading...",
            Text::AutoRefreshOn => "Auto-refresh enabled",
            Text::AutoRefreshOff => "Auto-refresh disabled",
            Text::StatsTitle => "MY PROGRESS",
            Text::ActivityTitle => "RECENT ACTIVITY",
            Text::TestimonialsTitle => "TESTIMONIALS",
        },
        Language::Ar => match text {
            Text::FieldRequired => "هذا الحقل مطلوب",
            Text::InvalidEmail => "يرجى إدخال بريد إلكتروني صحيح",
            Text::InvalidPhone => "يرجى إدخال رقم هاتف صحيح",
            Text::EnrollmentSent => "تم إرسال طلب التسجيل بنجاح",
            Text::GenericError => "حدث خطأ، يرجى المحاولة مرة أخرى",
            Text::LessonCompleted => "تم إكمال الدرس",
            Text::DataRefreshed => "تم تحديث البيانات",
            Text::RefreshFailed => "فشل تحديث البيانات",
            Text::NoRecentActivity => "لا يوجد نشاط حديث",
            Text::Loading => "جارٍ التحميل...",
            Text::AutoRefreshOn => "تم تفعيل التحديث التلقائي",
            Text::AutoRefreshOff => "تم إيقاف التحديث التلقائي",
            Text::StatsTitle => "تقدمي",
            Text::ActivityTitle => "النشاط الأخير",
            Text::TestimonialsTitle => "آراء الطلاب",
        },
    }
}

/// Text of the toast announcing unread notifications.
pub fn new_notifications(lang: Language, count: u32) -> String {
    match lang {
        Language::En => format!("You have {} new notifications", count),
        Language::Ar => format!("لديك {} إشعارات جديدة", count),
    }
}

/// Label of a dashboard stat counter. Unknown keys are shown as-is.
pub fn stat_label(lang: Language, key: &str) -> String {
    let label = match (lang, key) {
        (Language::En, "courses_enrolled") => "Courses",
        (Language::En, "achievements") => "Achievements",
        (Language::En, "study_hours") => "Study hours",
        (Language::En, "points") => "Points",
        (Language::Ar, "courses_enrolled") => "الدورات",
        (Language::Ar, "achievements") => "الإنجازات",
        (Language::Ar, "study_hours") => "ساعات الدراسة",
        (Language::Ar, "points") => "النقاط",
        _ => key,
    };
    label.to_string()
}
