//! Arabic / English strings and locale negotiation.
//!
//! Arabic is the fallback language. Detection order: `lang` query parameter,
//! `lang` cookie, `Accept-Language` header, configured default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cookies::cookie_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    /// Accepts bare codes and region-tagged codes (`en-US`, `ar_SA`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    /// Text direction for the `<html dir>` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }

    /// Resolves the request locale. Each source is only used when it names a
    /// supported language.
    pub fn detect(
        query: Option<&str>,
        cookie_header: Option<&str>,
        accept_language: Option<&str>,
        default: Locale,
    ) -> Locale {
        query
            .and_then(Locale::from_code)
            .or_else(|| {
                cookie_header
                    .and_then(|header| cookie_value(header, "lang"))
                    .and_then(Locale::from_code)
            })
            .or_else(|| accept_language.and_then(from_accept_language))
            .unwrap_or(default)
    }
}

/// First supported language in header order; quality weights are not re-sorted.
fn from_accept_language(header: &str) -> Option<Locale> {
    header
        .split(',')
        .filter_map(|part| part.split(';').next())
        .find_map(Locale::from_code)
}

/// Every user-visible string of the rendered pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    SeekerHeading,
    SeekerSubheading,
    CompanyHeading,
    CompanySubheading,
    QueryLabel,
    QueryPlaceholder,
    LocationLabel,
    LocationPlaceholder,
    SearchButton,
    EmploymentTypeLabel,
    TypeAll,
    TypeFullTime,
    TypePartTime,
    TypeContract,
    RemoteOnly,
    LoginRequiredTitle,
    LoginRequiredBody,
    NoResultsTitle,
    NoResultsBody,
    ErrorTitle,
    BackendNotConfigured,
    QueryFailed,
    SkillsLabel,
    ViewMore,
    ViewProfile,
    NoLogo,
    SiteName,
    SignIn,
    SignOut,
    RoleSeeker,
    RoleCompany,
    SeekerSignInTitle,
    SeekerSignInBody,
    CompanySignInTitle,
    CompanySignInBody,
    EmailLabel,
    SwitchLanguage,
}

impl Msg {
    pub const ALL: [Msg; 37] = [
        Msg::SeekerHeading,
        Msg::SeekerSubheading,
        Msg::CompanyHeading,
        Msg::CompanySubheading,
        Msg::QueryLabel,
        Msg::QueryPlaceholder,
        Msg::LocationLabel,
        Msg::LocationPlaceholder,
        Msg::SearchButton,
        Msg::EmploymentTypeLabel,
        Msg::TypeAll,
        Msg::TypeFullTime,
        Msg::TypePartTime,
        Msg::TypeContract,
        Msg::RemoteOnly,
        Msg::LoginRequiredTitle,
        Msg::LoginRequiredBody,
        Msg::NoResultsTitle,
        Msg::NoResultsBody,
        Msg::ErrorTitle,
        Msg::BackendNotConfigured,
        Msg::QueryFailed,
        Msg::SkillsLabel,
        Msg::ViewMore,
        Msg::ViewProfile,
        Msg::NoLogo,
        Msg::SiteName,
        Msg::SignIn,
        Msg::SignOut,
        Msg::RoleSeeker,
        Msg::RoleCompany,
        Msg::SeekerSignInTitle,
        Msg::SeekerSignInBody,
        Msg::CompanySignInTitle,
        Msg::CompanySignInBody,
        Msg::EmailLabel,
        Msg::SwitchLanguage,
    ];
}

pub fn t(locale: Locale, msg: Msg) -> &'static str {
    match locale {
        Locale::Ar => ar(msg),
        Locale::En => en(msg),
    }
}

fn ar(msg: Msg) -> &'static str {
    match msg {
        Msg::SeekerHeading => "اعثر على وظيفة أحلامك",
        Msg::SeekerSubheading => "بوابتك إلى الفرص المهنية الواعدة.",
        Msg::CompanyHeading => "ابحث عن أفضل المواهب",
        Msg::CompanySubheading => "الآلاف من المرشحين المؤهلين في انتظارك.",
        Msg::QueryLabel => "المسمى الوظيفي أو الكلمة الرئيسية",
        Msg::QueryPlaceholder => "مثال: مهندس برمجيات",
        Msg::LocationLabel => "الموقع",
        Msg::LocationPlaceholder => "مثال: الرياض",
        Msg::SearchButton => "بحث",
        Msg::EmploymentTypeLabel => "نوع التوظيف",
        Msg::TypeAll => "الكل",
        Msg::TypeFullTime => "دوام كامل",
        Msg::TypePartTime => "دوام جزئي",
        Msg::TypeContract => "عقد",
        Msg::RemoteOnly => "عن بعد فقط",
        Msg::LoginRequiredTitle => "مطلوب تسجيل الدخول",
        Msg::LoginRequiredBody => "لعرض المرشحين، يجب عليك تسجيل الدخول كشركة أولاً.",
        Msg::NoResultsTitle => "لم يتم العثور على نتائج",
        Msg::NoResultsBody => "حاول توسيع نطاق البحث أو استخدام كلمات رئيسية مختلفة.",
        Msg::ErrorTitle => "حدث خطأ",
        Msg::BackendNotConfigured => "لم يتم إعداد الاتصال بقاعدة البيانات.",
        Msg::QueryFailed => "تعذر تنفيذ البحث. حاول مرة أخرى لاحقاً.",
        Msg::SkillsLabel => "المهارات:",
        Msg::ViewMore => "عرض المزيد",
        Msg::ViewProfile => "عرض الملف الشخصي",
        Msg::NoLogo => "لا يوجد شعار",
        Msg::SiteName => "بوابة التوظيف",
        Msg::SignIn => "تسجيل الدخول",
        Msg::SignOut => "تسجيل الخروج",
        Msg::RoleSeeker => "باحث عن عمل",
        Msg::RoleCompany => "شركة",
        Msg::SeekerSignInTitle => "تسجيل دخول كباحث عن عمل",
        Msg::SeekerSignInBody => "ابحث عن وظيفتك التالية الآن.",
        Msg::CompanySignInTitle => "تسجيل دخول كشركة",
        Msg::CompanySignInBody => "اعثر على أفضل المواهب لشركتك.",
        Msg::EmailLabel => "البريد الإلكتروني",
        Msg::SwitchLanguage => "English",
    }
}

fn en(msg: Msg) -> &'static str {
    match msg {
        Msg::SeekerHeading => "Find your dream job",
        Msg::SeekerSubheading => "Your gateway to promising career opportunities.",
        Msg::CompanyHeading => "Find the best talent",
        Msg::CompanySubheading => "Thousands of qualified candidates are waiting.",
        Msg::QueryLabel => "Job title or keyword",
        Msg::QueryPlaceholder => "e.g. Software Engineer",
        Msg::LocationLabel => "Location",
        Msg::LocationPlaceholder => "e.g. Riyadh",
        Msg::SearchButton => "Search",
        Msg::EmploymentTypeLabel => "Employment type",
        Msg::TypeAll => "All",
        Msg::TypeFullTime => "Full-time",
        Msg::TypePartTime => "Part-time",
        Msg::TypeContract => "Contract",
        Msg::RemoteOnly => "Remote only",
        Msg::LoginRequiredTitle => "Sign-in required",
        Msg::LoginRequiredBody => "To view candidates, sign in as a company first.",
        Msg::NoResultsTitle => "No results found",
        Msg::NoResultsBody => "Try broadening your search or using different keywords.",
        Msg::ErrorTitle => "Something went wrong",
        Msg::BackendNotConfigured => "The database connection is not configured.",
        Msg::QueryFailed => "The search could not be completed. Please try again later.",
        Msg::SkillsLabel => "Skills:",
        Msg::ViewMore => "View more",
        Msg::ViewProfile => "View profile",
        Msg::NoLogo => "No Logo",
        Msg::SiteName => "Job Portal",
        Msg::SignIn => "Sign in",
        Msg::SignOut => "Sign out",
        Msg::RoleSeeker => "Job seeker",
        Msg::RoleCompany => "Company",
        Msg::SeekerSignInTitle => "Sign in as a job seeker",
        Msg::SeekerSignInBody => "Find your next job now.",
        Msg::CompanySignInTitle => "Sign in as a company",
        Msg::CompanySignInBody => "Find the best talent for your company.",
        Msg::EmailLabel => "Email",
        Msg::SwitchLanguage => "العربية",
    }
}

/// Relative "posted" phrase. Empty or unparsable timestamps yield an empty string.
pub fn time_ago(posted_at: &str, now: DateTime<Utc>, locale: Locale) -> String {
    if posted_at.trim().is_empty() {
        return String::new();
    }
    let posted = match DateTime::parse_from_rfc3339(posted_at.trim()) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(e) => {
            debug!("Unparsable posted_at '{posted_at}': {e}");
            return String::new();
        }
    };

    let seconds = (now - posted).num_seconds().max(0);
    let (count, unit) = match seconds {
        s if s < 60 => return just_now(locale).to_string(),
        s if s < 3_600 => (s / 60, Unit::Minute),
        s if s < 86_400 => (s / 3_600, Unit::Hour),
        s if s < 30 * 86_400 => (s / 86_400, Unit::Day),
        s if s < 365 * 86_400 => (s / (30 * 86_400), Unit::Month),
        s => (s / (365 * 86_400), Unit::Year),
    };

    match locale {
        Locale::En => {
            let plural = if count == 1 { "" } else { "s" };
            format!("{count} {}{plural} ago", unit.en())
        }
        Locale::Ar => format!("منذ {}", unit.ar(count)),
    }
}

fn just_now(locale: Locale) -> &'static str {
    match locale {
        Locale::Ar => "الآن",
        Locale::En => "just now",
    }
}

#[derive(Clone, Copy)]
enum Unit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    fn en(self) -> &'static str {
        match self {
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Arabic singular, dual and 3–10 plural forms; larger counts use the singular.
    fn ar(self, count: i64) -> String {
        let (one, two, few, many) = match self {
            Unit::Minute => ("دقيقة", "دقيقتين", "دقائق", "دقيقة"),
            Unit::Hour => ("ساعة", "ساعتين", "ساعات", "ساعة"),
            Unit::Day => ("يوم", "يومين", "أيام", "يوماً"),
            Unit::Month => ("شهر", "شهرين", "أشهر", "شهراً"),
            Unit::Year => ("سنة", "سنتين", "سنوات", "سنة"),
        };
        match count {
            1 => one.to_string(),
            2 => two.to_string(),
            3..=10 => format!("{count} {few}"),
            _ => format!("{count} {many}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 18, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_from_code_accepts_region_tags() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("ar_SA"), Some(Locale::Ar));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn test_detect_prefers_query_then_cookie_then_header() {
        assert_eq!(
            Locale::detect(Some("en"), Some("lang=ar"), Some("ar"), Locale::Ar),
            Locale::En
        );
        assert_eq!(
            Locale::detect(None, Some("theme=dark; lang=en"), Some("ar"), Locale::Ar),
            Locale::En
        );
        assert_eq!(
            Locale::detect(None, None, Some("fr-FR,en;q=0.8"), Locale::Ar),
            Locale::En
        );
        assert_eq!(Locale::detect(Some("de"), None, None, Locale::Ar), Locale::Ar);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
    }

    #[test]
    fn test_time_ago_english() {
        assert_eq!(time_ago("2024-05-15T09:00:00Z", now(), Locale::En), "3 days ago");
        assert_eq!(time_ago("2024-05-18T08:00:00Z", now(), Locale::En), "1 hour ago");
        assert_eq!(time_ago("2024-05-18T08:59:30Z", now(), Locale::En), "just now");
    }

    #[test]
    fn test_time_ago_arabic_forms() {
        assert_eq!(time_ago("2024-05-17T09:00:00Z", now(), Locale::Ar), "منذ يوم");
        assert_eq!(time_ago("2024-05-16T09:00:00Z", now(), Locale::Ar), "منذ يومين");
        assert_eq!(time_ago("2024-05-15T09:00:00Z", now(), Locale::Ar), "منذ 3 أيام");
    }

    #[test]
    fn test_time_ago_invalid_is_empty() {
        assert_eq!(time_ago("", now(), Locale::En), "");
        assert_eq!(time_ago("yesterday", now(), Locale::Ar), "");
    }

    #[test]
    fn test_every_message_has_both_languages() {
        for msg in Msg::ALL {
            assert!(!t(Locale::Ar, msg).is_empty(), "{msg:?} has no Arabic text");
            assert!(!t(Locale::En, msg).is_empty(), "{msg:?} has no English text");
            assert_ne!(t(Locale::Ar, msg), t(Locale::En, msg), "{msg:?} is untranslated");
        }
    }

    #[test]
    fn test_message_list_has_no_duplicates() {
        for (i, msg) in Msg::ALL.iter().enumerate() {
            assert!(!Msg::ALL[i + 1..].contains(msg), "{msg:?} listed twice");
        }
    }
}
