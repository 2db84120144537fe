use chrono::{DateTime, Utc};

use super::cards::render_results;
use super::escape_html as esc;
use super::i18n::{t, Locale, Msg};
use crate::models::user::{Role, User};
use crate::search::display::DisplayRecord;
use crate::search::params::{EmploymentType, SearchParams};

/// What the body of the page shows below the form.
#[derive(Debug)]
pub enum PageView<'a> {
    Results(&'a [DisplayRecord]),
    LoginRequired,
    /// The search failed; results are cleared and a notice is shown.
    Failed(Msg),
}

#[derive(Debug)]
pub struct SearchPage<'a> {
    pub locale: Locale,
    pub role: Role,
    /// Set when the role came from the URL, so the form keeps it on resubmit.
    pub role_override: Option<Role>,
    pub params: &'a SearchParams,
    /// The signed-in user of this session, shown in the header.
    pub user: Option<&'a User>,
    pub view: PageView<'a>,
    pub now: DateTime<Utc>,
}

impl SearchPage<'_> {
    pub fn render(&self) -> String {
        let locale = self.locale;
        let (heading, subheading) = match self.role {
            Role::Seeker => (Msg::SeekerHeading, Msg::SeekerSubheading),
            Role::Company => (Msg::CompanyHeading, Msg::CompanySubheading),
        };

        let main = format!(
            r#"{}<h1>{}</h1><p class="subheading">{}</p>{}{}"#,
            self.render_language_switch(),
            t(locale, heading),
            t(locale, subheading),
            self.render_form(),
            self.render_body(),
        );
        document(locale, t(locale, heading), self.user, &main)
    }

    /// Link to the same search in the other language.
    fn render_language_switch(&self) -> String {
        let other = match self.locale {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        };
        let role = self
            .role_override
            .map(|role| format!("&role={}", role.as_str()))
            .unwrap_or_default();
        let href = format!(
            "/search?{}{role}&lang={}",
            self.params.to_query_string(),
            other.code()
        );
        format!(
            r#"<a class="lang-switch" lang="{}" href="{}">{}</a>"#,
            other.code(),
            esc(&href),
            t(self.locale, Msg::SwitchLanguage)
        )
    }

    fn render_form(&self) -> String {
        let locale = self.locale;
        let options: String = EmploymentType::ALL
            .into_iter()
            .map(|kind| {
                let selected = if kind == self.params.employment_type {
                    " selected"
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{selected}>{}</option>"#,
                    kind.as_str(),
                    t(locale, type_label(kind))
                )
            })
            .collect();
        let role_field = self
            .role_override
            .map(|role| format!(r#"<input type="hidden" name="role" value="{}">"#, role.as_str()))
            .unwrap_or_default();

        format!(
            concat!(
                r#"<form class="search-form" method="get" action="/search">"#,
                r#"<label for="q">{q_label}</label>"#,
                r#"<input id="q" name="q" value="{q}" placeholder="{q_placeholder}">"#,
                r#"<label for="loc">{loc_label}</label>"#,
                r#"<input id="loc" name="loc" value="{loc}" placeholder="{loc_placeholder}">"#,
                r#"<label for="type">{type_label}</label>"#,
                r#"<select id="type" name="type">{options}</select>"#,
                r#"<input type="checkbox" id="remote-only" name="remote" value="true"{remote}>"#,
                r#"<label for="remote-only">{remote_label}</label>"#,
                r#"<input type="hidden" name="lang" value="{lang}">{role_field}"#,
                r#"<button type="submit">{submit}</button>"#,
                "</form>"
            ),
            q_label = t(locale, Msg::QueryLabel),
            q = esc(&self.params.q),
            q_placeholder = t(locale, Msg::QueryPlaceholder),
            loc_label = t(locale, Msg::LocationLabel),
            loc = esc(&self.params.loc),
            loc_placeholder = t(locale, Msg::LocationPlaceholder),
            type_label = t(locale, Msg::EmploymentTypeLabel),
            options = options,
            remote = if self.params.remote { " checked" } else { "" },
            remote_label = t(locale, Msg::RemoteOnly),
            lang = locale.code(),
            role_field = role_field,
            submit = t(locale, Msg::SearchButton),
        )
    }

    fn render_body(&self) -> String {
        let locale = self.locale;
        match &self.view {
            PageView::LoginRequired => format!(
                concat!(
                    r#"<div class="alert login-required" role="alert">"#,
                    "<h2>{title}</h2><p>{body}</p>",
                    r#"<a class="button" href="/signin?role=company&amp;lang={lang}">{sign_in}</a>"#,
                    "</div>"
                ),
                title = t(locale, Msg::LoginRequiredTitle),
                body = t(locale, Msg::LoginRequiredBody),
                lang = locale.code(),
                sign_in = t(locale, Msg::SignIn),
            ),
            PageView::Failed(msg) => alert(
                "alert error",
                t(locale, Msg::ErrorTitle),
                t(locale, *msg),
            ),
            PageView::Results(records) if records.is_empty() => format!(
                r#"<section class="empty"><h2>{}</h2><p>{}</p></section>"#,
                t(locale, Msg::NoResultsTitle),
                t(locale, Msg::NoResultsBody)
            ),
            PageView::Results(records) => render_results(records, locale, self.now),
        }
    }
}

fn alert(class: &str, title: &str, body: &str) -> String {
    format!(r#"<div class="{class}" role="alert"><h2>{title}</h2><p>{body}</p></div>"#)
}

/// Role choice page. Each role posts its own form to `POST /signin`.
#[derive(Debug)]
pub struct SignInPage {
    pub locale: Locale,
    /// Role whose form is highlighted, from `?role=`.
    pub selected: Role,
}

impl SignInPage {
    pub fn render(&self) -> String {
        let locale = self.locale;
        let forms: String = [Role::Seeker, Role::Company]
            .into_iter()
            .map(|role| self.render_role_form(role))
            .collect();
        let main = format!(
            r#"<h1>{}</h1><div class="signin-options">{forms}</div>"#,
            t(locale, Msg::SignIn)
        );
        document(locale, t(locale, Msg::SignIn), None, &main)
    }

    fn render_role_form(&self, role: Role) -> String {
        let locale = self.locale;
        let (title, body) = match role {
            Role::Seeker => (Msg::SeekerSignInTitle, Msg::SeekerSignInBody),
            Role::Company => (Msg::CompanySignInTitle, Msg::CompanySignInBody),
        };
        let selected = if role == self.selected { " selected" } else { "" };
        let email = esc(&User::mock(role).email);

        format!(
            concat!(
                r#"<form class="card signin-card{selected}" method="post" action="/signin">"#,
                r#"<h2>{role_label}</h2><h3>{title}</h3><p>{body}</p>"#,
                r#"<label for="email-{role}">{email_label}</label>"#,
                r#"<input id="email-{role}" type="email" value="{email}" readonly>"#,
                r#"<input type="hidden" name="role" value="{role}">"#,
                r#"<input type="hidden" name="lang" value="{lang}">"#,
                r#"<button type="submit">{submit}</button>"#,
                "</form>"
            ),
            selected = selected,
            role_label = t(locale, role_label(role)),
            title = t(locale, title),
            body = t(locale, body),
            role = role.as_str(),
            email_label = t(locale, Msg::EmailLabel),
            email = email,
            lang = locale.code(),
            submit = t(locale, Msg::SignIn),
        )
    }
}

/// Full HTML document with the site header around `main`.
fn document(locale: Locale, title: &str, user: Option<&User>, main: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="{lang}" dir="{dir}">"#,
            r#"<head><meta charset="utf-8"><title>{title}</title></head>"#,
            "<body>{header}",
            r#"<main class="container">{main}</main>"#,
            "</body></html>"
        ),
        lang = locale.code(),
        dir = locale.dir(),
        title = title,
        header = render_header(locale, user),
        main = main,
    )
}

/// Site header: brand, search link, and sign-in or sign-out depending on the session.
fn render_header(locale: Locale, user: Option<&User>) -> String {
    let lang = locale.code();
    let account = match user {
        Some(user) => format!(
            concat!(
                r#"<span class="user">{email} ({role})</span>"#,
                r#"<form class="signout" method="post" action="/signout">"#,
                r#"<input type="hidden" name="lang" value="{lang}">"#,
                r#"<button type="submit">{sign_out}</button>"#,
                "</form>"
            ),
            email = esc(&user.email),
            role = t(locale, role_label(user.role)),
            lang = lang,
            sign_out = t(locale, Msg::SignOut),
        ),
        None => format!(
            r#"<a class="button" href="/signin?lang={lang}">{}</a>"#,
            t(locale, Msg::SignIn)
        ),
    };

    format!(
        concat!(
            r#"<header class="site-header">"#,
            r#"<a class="brand" href="/search?lang={lang}">{site}</a>"#,
            r#"<nav><a href="/search?lang={lang}">{search}</a></nav>"#,
            r#"<div class="account">{account}</div>"#,
            "</header>"
        ),
        lang = lang,
        site = t(locale, Msg::SiteName),
        search = t(locale, Msg::SearchButton),
        account = account,
    )
}

fn role_label(role: Role) -> Msg {
    match role {
        Role::Seeker => Msg::RoleSeeker,
        Role::Company => Msg::RoleCompany,
    }
}

fn type_label(kind: EmploymentType) -> Msg {
    match kind {
        EmploymentType::All => Msg::TypeAll,
        EmploymentType::FullTime => Msg::TypeFullTime,
        EmploymentType::PartTime => Msg::TypePartTime,
        EmploymentType::Contract => Msg::TypeContract,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::display::JobDisplay;

    fn page<'a>(params: &'a SearchParams, view: PageView<'a>, locale: Locale) -> SearchPage<'a> {
        SearchPage {
            locale,
            role: Role::Seeker,
            role_override: None,
            params,
            user: None,
            view,
            now: Utc::now(),
        }
    }

    #[test]
    fn test_arabic_page_is_rtl_with_seeker_heading() {
        let params = SearchParams::default();
        let html = page(&params, PageView::Results(&[]), Locale::Ar).render();
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains("اعثر على وظيفة أحلامك"));
        assert!(html.contains("لم يتم العثور على نتائج"));
    }

    #[test]
    fn test_form_is_prefilled_from_params() {
        let params = SearchParams {
            q: "data \"analyst\"".to_string(),
            loc: "جدة".to_string(),
            employment_type: EmploymentType::Contract,
            remote: true,
        };
        let html = page(&params, PageView::Results(&[]), Locale::En).render();
        assert!(html.contains(r#"value="data &quot;analyst&quot;""#));
        assert!(html.contains(r#"value="جدة""#));
        assert!(html.contains(r#"<option value="contract" selected>Contract</option>"#));
        assert!(html.contains(r#"value="true" checked>"#));
    }

    #[test]
    fn test_language_switch_keeps_the_search() {
        let params = SearchParams {
            q: "data analyst".to_string(),
            ..Default::default()
        };
        let mut p = page(&params, PageView::Results(&[]), Locale::Ar);
        p.role_override = Some(Role::Company);
        let html = p.render();
        assert!(html.contains(concat!(
            r#"<a class="lang-switch" lang="en" "#,
            r#"href="/search?q=data+analyst&amp;loc=&amp;type=all&amp;remote=false&amp;role=company&amp;lang=en">English</a>"#
        )));
    }

    #[test]
    fn test_login_required_view_shows_prompt_only() {
        let params = SearchParams::default();
        let mut p = page(&params, PageView::LoginRequired, Locale::Ar);
        p.role = Role::Company;
        p.role_override = Some(Role::Company);
        let html = p.render();
        assert!(html.contains("مطلوب تسجيل الدخول"));
        assert!(html.contains("ابحث عن أفضل المواهب"));
        assert!(html.contains(r#"name="role" value="company""#));
        assert!(html.contains(r#"href="/signin?role=company&amp;lang=ar""#));
        assert!(!html.contains("لم يتم العثور على نتائج"));
    }

    #[test]
    fn test_header_offers_sign_in_when_signed_out() {
        let params = SearchParams::default();
        let html = page(&params, PageView::Results(&[]), Locale::En).render();
        assert!(html.contains(r#"<a class="button" href="/signin?lang=en">Sign in</a>"#));
        assert!(!html.contains(r#"action="/signout""#));
    }

    #[test]
    fn test_header_offers_sign_out_when_signed_in() {
        let params = SearchParams::default();
        let user = User::mock(Role::Company);
        let mut p = page(&params, PageView::Results(&[]), Locale::Ar);
        p.user = Some(&user);
        let html = p.render();
        assert!(html.contains("company@example.com (شركة)"));
        assert!(html.contains(r#"<form class="signout" method="post" action="/signout">"#));
        assert!(html.contains("تسجيل الخروج"));
        assert!(!html.contains(r#"href="/signin?lang=ar""#));
    }

    #[test]
    fn test_sign_in_page_has_a_form_per_role() {
        let html = SignInPage {
            locale: Locale::Ar,
            selected: Role::Company,
        }
        .render();
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert_eq!(html.matches(r#"method="post" action="/signin""#).count(), 2);
        assert!(html.contains(r#"<input type="hidden" name="role" value="seeker">"#));
        assert!(html.contains(r#"<input type="hidden" name="role" value="company">"#));
        assert!(html.contains(r#"<form class="card signin-card selected" method="post" action="/signin"><h2>شركة</h2>"#));
        assert!(html.contains("تسجيل دخول كباحث عن عمل"));
        assert!(html.contains(r#"value="company@example.com" readonly"#));
    }

    #[test]
    fn test_failed_view_clears_results() {
        let params = SearchParams::default();
        let html = page(&params, PageView::Failed(Msg::BackendNotConfigured), Locale::En).render();
        assert!(html.contains("The database connection is not configured."));
        assert!(!html.contains(r#"class="results""#));
    }

    #[test]
    fn test_results_view_renders_cards() {
        let params = SearchParams::default();
        let records = vec![DisplayRecord::Job(JobDisplay {
            id: "1".to_string(),
            title: "محلل بيانات".to_string(),
            company: "Data Insights".to_string(),
            location: "الدمام".to_string(),
            description: String::new(),
            posted_at: String::new(),
            logo: String::new(),
        })];
        let html = page(&params, PageView::Results(&records), Locale::Ar).render();
        assert!(html.contains("محلل بيانات"));
        assert!(html.contains("job-card"));
    }
}
