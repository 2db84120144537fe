//! Demo rows for the in-memory backend, shaped like the hosted collections.

use crate::models::candidate::{CandidateRow, SkillJoin, UserSkillJoin};
use crate::models::job::{CompanyJoin, JobRow};

fn company(name_ar: &str, name_en: &str, logo: &str) -> Option<CompanyJoin> {
    Some(CompanyJoin {
        name: None,
        name_ar: Some(name_ar.to_string()),
        name_en: Some(name_en.to_string()),
        logo_url: Some(logo.to_string()),
    })
}

fn job(
    id: &str,
    title: &str,
    company: Option<CompanyJoin>,
    location: &str,
    description: &str,
    created_at: &str,
) -> JobRow {
    JobRow {
        id: id.to_string(),
        title: Some(title.to_string()),
        location: Some(location.to_string()),
        description: Some(description.to_string()),
        created_at: Some(created_at.to_string()),
        is_active: Some(true),
        companies: company,
    }
}

pub fn jobs() -> Vec<JobRow> {
    vec![
        job(
            "1",
            "مهندس برمجيات أول",
            company("حلول التقنية", "Tech Solutions Inc.", "company-logo-1"),
            "الرياض",
            "نبحث عن مهندس برمجيات أول ذو خبرة للانضمام إلى فريقنا المبتكر. ستعمل على تطوير وصيانة تطبيقات الويب.",
            "2024-05-15T09:00:00Z",
        ),
        job(
            "2",
            "مدير تسويق رقمي",
            company("ماركتنج برو", "Marketing Pro", "company-logo-2"),
            "جدة",
            "فرصة مثيرة لمدير تسويق رقمي لإدارة استراتيجياتنا التسويقية عبر الإنترنت وزيادة الوعي بعلامتنا التجارية.",
            "2024-05-14T14:30:00Z",
        ),
        job(
            "3",
            "مصمم واجهات مستخدم/تجربة مستخدم",
            company("العقول المبدعة", "Creative Minds", "company-logo-3"),
            "عن بعد",
            "انضم إلى فريقنا من المبدعين لتصميم واجهات جميلة وسهلة الاستخدام لمنتجاتنا الرقمية.",
            "2024-05-13T11:00:00Z",
        ),
        job(
            "4",
            "محلل بيانات",
            company("رؤى البيانات", "Data Insights", "company-logo-4"),
            "الدمام",
            "نحن نوظف محلل بيانات لتحليل مجموعات البيانات الكبيرة وتقديم رؤى قابلة للتنفيذ لدفع قرارات العمل.",
            "2024-05-12T16:45:00Z",
        ),
        job(
            "5",
            "مطور تطبيقات جوال",
            None,
            "الرياض",
            "مطلوب مطور تطبيقات جوال بخبرة في Flutter لبناء تطبيقات عالية الجودة.",
            "2024-05-11T08:15:00Z",
        ),
    ]
}

fn candidate(
    id: &str,
    name: &str,
    title: &str,
    country: &str,
    skills: &[&str],
    avatar: &str,
) -> CandidateRow {
    CandidateRow {
        id: id.to_string(),
        full_name: Some(name.to_string()),
        job_title: Some(title.to_string()),
        country: Some(country.to_string()),
        phone: None,
        email: None,
        nationality: Some("سعودي".to_string()),
        avatar_url: Some(avatar.to_string()),
        user_skills: Some(
            skills
                .iter()
                .map(|name| UserSkillJoin {
                    level: None,
                    skills: Some(SkillJoin {
                        name: Some((*name).to_string()),
                    }),
                })
                .collect(),
        ),
    }
}

pub fn candidates() -> Vec<CandidateRow> {
    vec![
        candidate(
            "c1",
            "أحمد المحمدي",
            "مطوّر Full-Stack",
            "الرياض",
            &["React", "Node.js", "PostgreSQL", "TypeScript"],
            "candidate-avatar-1",
        ),
        candidate(
            "c2",
            "فاطمة الزهراني",
            "خبيرة تسويق",
            "جدة",
            &["SEO", "SEM", "Social Media", "Content Marketing"],
            "candidate-avatar-2",
        ),
        candidate(
            "c3",
            "علياء الشمري",
            "مصممة منتجات",
            "عن بعد",
            &["Figma", "Sketch", "User Research", "Prototyping"],
            "candidate-avatar-3",
        ),
        candidate(
            "c4",
            "خالد الغامدي",
            "عالم بيانات",
            "الدمام",
            &["Python", "Pandas", "scikit-learn", "TensorFlow"],
            "candidate-avatar-4",
        ),
    ]
}
