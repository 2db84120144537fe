//! Result cards. One presentation per record kind, picked by the record itself;
//! input order is output order.

use chrono::{DateTime, Utc};

use super::escape_html as esc;
use super::i18n::{t, time_ago, Locale, Msg};
use crate::search::display::{CandidateDisplay, DisplayRecord, JobDisplay};

/// Image reference usable as `src`: an absolute http(s) URL or a site path.
/// Anything else (placeholder ids, `javascript:` and friends) renders as no image.
fn image_src(value: &str) -> Option<&str> {
    let value = value.trim();
    let usable = value.starts_with("https://")
        || value.starts_with("http://")
        || (value.starts_with('/') && !value.starts_with("//"));
    usable.then_some(value)
}

pub fn render_job_card(job: &JobDisplay, locale: Locale, now: DateTime<Utc>) -> String {
    let logo = match image_src(&job.logo) {
        Some(src) => format!(
            r#"<img class="logo" src="{}" alt="{} logo">"#,
            esc(src),
            esc(&job.company)
        ),
        None => format!(r#"<div class="logo no-logo">{}</div>"#, t(locale, Msg::NoLogo)),
    };

    format!(
        concat!(
            r#"<article class="card job-card" data-id="{id}">"#,
            r#"<header>{logo}<div><h2>{title}</h2><p class="company">{company}</p></div></header>"#,
            r#"<p class="description">{description}</p>"#,
            r#"<footer><span class="location">{location}</span>"#,
            r#"<time datetime="{posted_at}">{ago}</time>"#,
            r#"<button type="button">{view_more}</button></footer>"#,
            "</article>"
        ),
        id = esc(&job.id),
        logo = logo,
        title = esc(&job.title),
        company = esc(&job.company),
        description = esc(&job.description),
        location = esc(&job.location),
        posted_at = esc(&job.posted_at),
        ago = esc(&time_ago(&job.posted_at, now, locale)),
        view_more = t(locale, Msg::ViewMore),
    )
}

pub fn render_candidate_card(candidate: &CandidateDisplay, locale: Locale) -> String {
    let avatar = image_src(&candidate.avatar)
        .map(|src| {
            format!(
                r#"<img class="avatar" src="{}" alt="{} avatar">"#,
                esc(src),
                esc(&candidate.name)
            )
        })
        .unwrap_or_default();
    let skills: String = candidate
        .skills
        .iter()
        .map(|skill| format!(r#"<span class="badge">{}</span>"#, esc(skill)))
        .collect();

    format!(
        concat!(
            r#"<article class="card candidate-card" data-id="{id}">"#,
            r#"<header>{avatar}<div><h2>{name}</h2><p class="title">{title}</p></div></header>"#,
            r#"<p class="summary">{summary}</p>"#,
            r#"<div class="skills"><span class="label">{skills_label}</span>{skills}</div>"#,
            r#"<footer><span class="location">{location}</span>"#,
            r#"<button type="button">{view_profile}</button></footer>"#,
            "</article>"
        ),
        id = esc(&candidate.id),
        avatar = avatar,
        name = esc(&candidate.name),
        title = esc(&candidate.title),
        summary = esc(&candidate.summary),
        skills_label = t(locale, Msg::SkillsLabel),
        skills = skills,
        location = esc(&candidate.location),
        view_profile = t(locale, Msg::ViewProfile),
    )
}

pub fn render_card(record: &DisplayRecord, locale: Locale, now: DateTime<Utc>) -> String {
    match record {
        DisplayRecord::Job(job) => render_job_card(job, locale, now),
        DisplayRecord::Candidate(candidate) => render_candidate_card(candidate, locale),
    }
}

pub fn render_results(records: &[DisplayRecord], locale: Locale, now: DateTime<Utc>) -> String {
    let cards: String = records
        .iter()
        .map(|record| render_card(record, locale, now))
        .collect();
    format!(r#"<div class="results">{cards}</div>"#)
}
