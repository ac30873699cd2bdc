//! Server-rendered pages.
//!
//! Every renderer takes a [`View`] (the request's locale context, its
//! [`Translator`] and the link style) and returns a complete HTML document.
//! Rendering cannot fail.

mod dashboard;
mod guides;
mod home;
mod programs;

pub use dashboard::DashboardData;

use kku_core::{Locale, LocaleContext};
use kku_i18n::Translator;
use kku_services::programs::ProgramFilter;

/// A top-level site page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Preparation,
    Arrival,
    CampusLife,
    Dashboard,
    Programs,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Preparation,
        Page::Arrival,
        Page::CampusLife,
        Page::Dashboard,
        Page::Programs,
    ];

    /// URL path segment; empty for the home page.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Preparation => "preparation",
            Self::Arrival => "arrival",
            Self::CampusLife => "campus-life",
            Self::Dashboard => "dashboard",
            Self::Programs => "programs",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    fn nav_key(&self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Preparation => "nav.preparation",
            Self::Arrival => "nav.arrival",
            Self::CampusLife => "nav.campusLife",
            Self::Dashboard => "nav.dashboard",
            Self::Programs => "nav.findProgram",
        }
    }
}

/// How links between pages are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `/<page>?lang=<code>`, for the HTTP server.
    Query,
    /// `/<code>/<page>/`, matching the static export's directory layout.
    Static,
}

/// The locale and link style one render pass runs with.
#[derive(Debug, Clone, Copy)]
pub struct View {
    ctx: LocaleContext,
    t: Translator,
    links: LinkStyle,
}

impl View {
    pub fn new(ctx: LocaleContext, links: LinkStyle) -> Self {
        Self {
            ctx,
            t: Translator::new(ctx.current()),
            links,
        }
    }

    pub fn locale(&self) -> Locale {
        self.ctx.current()
    }

    pub fn translator(&self) -> &Translator {
        &self.t
    }

    /// Link to `page` in the current locale.
    fn href(&self, page: Page) -> String {
        self.href_in(page, self.locale())
    }

    /// Target of a GET form on `page`; query-style forms carry `lang` in a hidden field.
    fn form_action(&self, page: Page) -> String {
        match self.links {
            LinkStyle::Query => page.path(),
            LinkStyle::Static => self.href(page),
        }
    }

    fn href_in(&self, page: Page, locale: Locale) -> String {
        match self.links {
            LinkStyle::Query => format!("{}?lang={}", page.path(), locale.code()),
            LinkStyle::Static if page.slug().is_empty() => format!("/{}/", locale.code()),
            LinkStyle::Static => format!("/{}/{}/", locale.code(), page.slug()),
        }
    }
}

/// Render `page` with default data (seeded lists, unfiltered catalog).
pub fn render(page: Page, view: &View) -> String {
    match page {
        Page::Home => home::render(view),
        Page::Preparation => guides::preparation(view),
        Page::Arrival => guides::arrival(view),
        Page::CampusLife => guides::campus_life(view),
        Page::Dashboard => dashboard::render(view, &DashboardData::seeded(&view.t)),
        Page::Programs => programs::render(view, &ProgramFilter::default()),
    }
}

/// Dashboard with a client's stored lists.
pub fn render_dashboard(view: &View, data: &DashboardData) -> String {
    dashboard::render(view, data)
}

/// Program finder with the given filters applied.
pub fn render_programs(view: &View, criteria: &ProgramFilter) -> String {
    programs::render(view, criteria)
}

/// Minimal HTML escaping for text and attribute values.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// One entry per locale; each link is the current context switched to that locale.
fn language_selector(current: Page, view: &View) -> String {
    let mut out = format!(
        "<nav class=\"language-selector\" aria-label=\"{}\"><ul>",
        escape(view.t.text("nav.language"))
    );
    for option in Locale::ALL {
        let mut ctx = view.ctx;
        let target = ctx.switch(option.code());
        let marker = if target == view.locale() { " aria-current=\"true\"" } else { "" };
        out.push_str(&format!(
            "<li><a href=\"{}\" hreflang=\"{}\"{marker}>{} {}</a></li>",
            view.href_in(current, target),
            target.code(),
            target.flag(),
            escape(target.native_name()),
        ));
    }
    out.push_str("</ul></nav>");
    out
}

fn navigation(current: Page, view: &View) -> String {
    let mut out = String::from("<nav class=\"site-nav\"><ul>");
    for page in Page::ALL {
        let marker = if page == current { " aria-current=\"page\"" } else { "" };
        out.push_str(&format!(
            "<li><a href=\"{}\"{marker}>{}</a></li>",
            view.href(page),
            escape(view.t.text(page.nav_key())),
        ));
    }
    out.push_str("</ul></nav>");
    out
}

/// Wrap `body` in the shared document shell.
fn layout(page: Page, view: &View, title: &str, body: &str) -> String {
    let t = &view.t;
    let site = escape(t.text("site.name"));
    let mut out = String::with_capacity(body.len() + 4096);
    out.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} | {site}</title>\n</head>\n<body>\n",
        view.locale().code(),
        escape(title),
    ));
    out.push_str(&format!(
        "<div class=\"emergency-bar\" role=\"alert\">{}</div>\n<header>\n\
         <a class=\"brand\" href=\"{}\">{site}</a>\n{}\n{}\n</header>\n",
        escape(t.text("emergency.bar")),
        view.href(Page::Home),
        navigation(page, view),
        language_selector(page, view),
    ));
    out.push_str(&format!("<main>\n{body}\n</main>\n"));
    out.push_str(&format!(
        "<footer>\n<p>{}</p>\n<p>{}</p>\n</footer>\n</body>\n</html>\n",
        escape(t.text("footer.contact")),
        escape(t.text("footer.copyright")),
    ));
    out
}

/// `<section>` with a heading and optional description.
fn section(heading: &str, description: Option<&str>, inner: &str) -> String {
    let mut out = format!("<section>\n<h2>{}</h2>\n", escape(heading));
    if let Some(desc) = description {
        out.push_str(&format!("<p>{}</p>\n", escape(desc)));
    }
    out.push_str(inner);
    out.push_str("</section>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(super) fn view(locale: Locale) -> View {
        View::new(locale.into(), LinkStyle::Query)
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<a href=\"x\">&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("비자"), "비자");
    }

    #[test]
    fn test_every_page_renders_in_every_locale() {
        for locale in Locale::ALL {
            for page in Page::ALL {
                let html = render(page, &view(locale));
                assert!(html.starts_with("<!DOCTYPE html>"));
                assert!(html.contains(&format!("<html lang=\"{}\">", locale.code())));
                assert!(html.trim_end().ends_with("</html>"));
            }
        }
    }

    #[test]
    fn test_language_selector_lists_every_locale() {
        let html = render(Page::Arrival, &view(Locale::En));
        for locale in Locale::ALL {
            assert!(html.contains(&format!("href=\"/arrival?lang={}\"", locale.code())));
        }
        assert!(html.contains("hreflang=\"en\" aria-current=\"true\""));
    }

    #[test]
    fn test_navigation_keeps_locale() {
        let html = render(Page::Home, &view(Locale::Vi));
        assert!(html.contains("href=\"/dashboard?lang=vi\""));
        assert!(html.contains("href=\"/programs?lang=vi\""));
    }

    #[test]
    fn test_static_links_point_at_locale_directories() {
        let view = View::new(Locale::En.into(), LinkStyle::Static);
        let html = render(Page::Arrival, &view);
        assert!(html.contains("href=\"/ko/arrival/\" hreflang=\"ko\""));
        assert!(html.contains("href=\"/en/dashboard/\""));
        assert!(html.contains("class=\"brand\" href=\"/en/\""));
        assert!(!html.contains("?lang="));
    }

    #[test]
    fn test_untranslated_section_uses_central_table() {
        // Tagalog has no emergency section of its own.
        let html = render(Page::Home, &view(Locale::Tl));
        assert!(html.contains("Emergency? Call 112"));
    }

    #[test]
    fn test_paths() {
        assert_eq!(Page::Home.path(), "/");
        assert_eq!(Page::CampusLife.path(), "/campus-life");
    }
}
