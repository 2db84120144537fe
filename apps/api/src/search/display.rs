//! Display records: the one shape the renderer consumes, whichever collection
//! the rows came from. Mapping happens once per query and never yields nulls.

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateRow;
use crate::models::job::{CompanyJoin, JobRow};
use crate::render::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDisplay {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub posted_at: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDisplay {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    pub skills: Vec<String>,
    pub summary: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayRecord {
    Job(JobDisplay),
    Candidate(CandidateDisplay),
}

impl DisplayRecord {
    pub fn id(&self) -> &str {
        match self {
            DisplayRecord::Job(j) => &j.id,
            DisplayRecord::Candidate(c) => &c.id,
        }
    }

    /// Job title or candidate name.
    pub fn heading(&self) -> &str {
        match self {
            DisplayRecord::Job(j) => &j.title,
            DisplayRecord::Candidate(c) => &c.name,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            DisplayRecord::Job(j) => &j.location,
            DisplayRecord::Candidate(c) => &c.location,
        }
    }

    /// Job description or candidate summary.
    pub fn text(&self) -> &str {
        match self {
            DisplayRecord::Job(j) => &j.description,
            DisplayRecord::Candidate(c) => &c.summary,
        }
    }

    /// Skills for candidates; jobs carry no tags.
    pub fn tags(&self) -> &[String] {
        match self {
            DisplayRecord::Job(_) => &[],
            DisplayRecord::Candidate(c) => &c.skills,
        }
    }
}

/// Knobs the adapter needs beyond the row itself.
#[derive(Debug, Clone)]
pub struct AdaptOptions {
    pub company_fallback: String,
    pub locale: Locale,
}

pub fn adapt_job(row: JobRow, options: &AdaptOptions) -> JobDisplay {
    let company = row
        .companies
        .as_ref()
        .and_then(|c| company_name(c, options.locale))
        .unwrap_or_else(|| options.company_fallback.clone());
    let logo = row
        .companies
        .and_then(|c| c.logo_url)
        .unwrap_or_default();

    JobDisplay {
        id: row.id,
        title: row.title.unwrap_or_default(),
        company,
        location: row.location.unwrap_or_default(),
        description: row.description.unwrap_or_default(),
        posted_at: row.created_at.unwrap_or_default(),
        logo,
    }
}

/// Name variant for the locale first, then the other language, then the plain column.
fn company_name(company: &CompanyJoin, locale: Locale) -> Option<String> {
    let ordered = match locale {
        Locale::Ar => [&company.name_ar, &company.name_en, &company.name],
        Locale::En => [&company.name_en, &company.name_ar, &company.name],
    };
    ordered
        .into_iter()
        .flatten()
        .map(|name| name.trim())
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

pub fn adapt_candidate(row: CandidateRow) -> CandidateDisplay {
    let skills = row
        .user_skills
        .unwrap_or_default()
        .into_iter()
        .filter_map(|us| us.skills.and_then(|s| s.name))
        .filter(|name| !name.trim().is_empty())
        .collect();
    let title = row.job_title.unwrap_or_default();

    CandidateDisplay {
        id: row.id,
        name: row.full_name.unwrap_or_default(),
        // Profiles carry no bio column; the job title doubles as the summary line.
        summary: title.clone(),
        title,
        location: row.country.unwrap_or_default(),
        skills,
        avatar: row.avatar_url.unwrap_or_default(),
        email: row.email.unwrap_or_default(),
        phone: row.phone.unwrap_or_default(),
        nationality: row.nationality.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{SkillJoin, UserSkillJoin};

    fn options(locale: Locale) -> AdaptOptions {
        AdaptOptions {
            company_fallback: "Unknown company".to_string(),
            locale,
        }
    }

    fn bare_job() -> JobRow {
        JobRow {
            id: "j1".to_string(),
            title: None,
            location: None,
            description: None,
            created_at: None,
            is_active: None,
            companies: None,
        }
    }

    fn bare_candidate() -> CandidateRow {
        CandidateRow {
            id: "c1".to_string(),
            full_name: None,
            job_title: None,
            country: None,
            phone: None,
            email: None,
            nationality: None,
            avatar_url: None,
            user_skills: None,
        }
    }

    #[test]
    fn test_job_without_company_join_uses_fallback() {
        let job = adapt_job(bare_job(), &options(Locale::Ar));
        assert_eq!(job.company, "Unknown company");
        assert_eq!(job.title, "");
        assert_eq!(job.logo, "");
        assert_eq!(job.posted_at, "");
    }

    #[test]
    fn test_job_with_empty_company_names_uses_fallback() {
        let mut row = bare_job();
        row.companies = Some(CompanyJoin {
            name: Some("  ".to_string()),
            ..Default::default()
        });
        assert_eq!(adapt_job(row, &options(Locale::En)).company, "Unknown company");
    }

    #[test]
    fn test_company_name_follows_locale() {
        let mut row = bare_job();
        row.companies = Some(CompanyJoin {
            name: Some("legacy".to_string()),
            name_ar: Some("حلول التقنية".to_string()),
            name_en: Some("Tech Solutions".to_string()),
            logo_url: Some("logo-1".to_string()),
        });
        assert_eq!(adapt_job(row.clone(), &options(Locale::Ar)).company, "حلول التقنية");
        let job = adapt_job(row, &options(Locale::En));
        assert_eq!(job.company, "Tech Solutions");
        assert_eq!(job.logo, "logo-1");
    }

    #[test]
    fn test_candidate_with_null_skills_join_has_empty_list() {
        let candidate = adapt_candidate(bare_candidate());
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.name, "");
        assert_eq!(candidate.email, "");
    }

    #[test]
    fn test_candidate_skills_are_flattened_in_order() {
        let mut row = bare_candidate();
        row.job_title = Some("Backend Engineer".to_string());
        row.user_skills = Some(vec![
            UserSkillJoin {
                level: Some("expert".to_string()),
                skills: Some(SkillJoin {
                    name: Some("Rust".to_string()),
                }),
            },
            UserSkillJoin {
                level: None,
                skills: None,
            },
            UserSkillJoin {
                level: Some("junior".to_string()),
                skills: Some(SkillJoin {
                    name: Some("SQL".to_string()),
                }),
            },
        ]);
        let candidate = adapt_candidate(row);
        assert_eq!(candidate.skills, vec!["Rust", "SQL"]);
        assert_eq!(candidate.summary, "Backend Engineer");
    }

    #[test]
    fn test_uniform_accessors() {
        let job = DisplayRecord::Job(adapt_job(bare_job(), &options(Locale::Ar)));
        assert_eq!(job.id(), "j1");
        assert!(job.tags().is_empty());

        let mut row = bare_candidate();
        row.full_name = Some("Mona".to_string());
        let candidate = DisplayRecord::Candidate(adapt_candidate(row));
        assert_eq!(candidate.heading(), "Mona");
    }

    #[test]
    fn test_records_serialize_with_kind_tag() {
        let record = DisplayRecord::Job(adapt_job(bare_job(), &options(Locale::Ar)));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "job");
        assert_eq!(json["company"], "Unknown company");
    }
}
