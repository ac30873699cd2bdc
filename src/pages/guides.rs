//! The three guide pages: preparation, arrival, campus life.

use kku_i18n::Translator;
use kku_services::checklist::{filter, Category, ListKind};

use super::{escape, layout, section, Page, View};

fn item_list(t: &Translator, kind: ListKind, category: Category) -> String {
    let items = kind.seed(t);
    let mut out = String::from("<ul class=\"guide-list\">\n");
    for item in filter(&items, Some(category)) {
        out.push_str(&format!("<li>{}</li>\n", escape(&item.title)));
    }
    out.push_str("</ul>\n");
    out
}

fn header(title: &str, description: &str) -> String {
    format!(
        "<section class=\"page-header\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape(title),
        escape(description)
    )
}

fn help_footer(view: &View) -> String {
    let t = &view.t;
    let link = format!(
        "<a class=\"button\" href=\"{}\">{}</a>\n",
        view.href(Page::Dashboard),
        escape(t.text("cta.scheduleConsultation"))
    );
    section(t.text("cta.needHelp"), Some(t.text("progress.contactSupport")), &link)
}

pub(super) fn preparation(view: &View) -> String {
    let t = &view.t;
    let mut body = header(t.text("preparation.title"), t.text("preparation.description"));
    for topic in ["visa", "documents", "accommodation", "travel"] {
        body.push_str(&section(
            t.text(&format!("preparation.{topic}.title")),
            Some(t.text(&format!("preparation.{topic}.description"))),
            "",
        ));
    }
    body.push_str(&section(
        t.text("preparation.checklist.title"),
        None,
        &item_list(t, ListKind::Checklist, Category::Preparation),
    ));
    body.push_str(&help_footer(view));
    layout(Page::Preparation, view, t.text("preparation.title"), &body)
}

pub(super) fn arrival(view: &View) -> String {
    let t = &view.t;
    let mut body = header(t.text("arrival.title"), t.text("arrival.description"));
    body.push_str(&section(
        t.text("arrival.firstWeek.title"),
        None,
        &item_list(t, ListKind::Checklist, Category::Arrival),
    ));
    body.push_str(&section(
        t.text("arrival.firstMonth.title"),
        None,
        &item_list(t, ListKind::Progress, Category::Settlement),
    ));
    body.push_str(&help_footer(view));
    layout(Page::Arrival, view, t.text("arrival.title"), &body)
}

pub(super) fn campus_life(view: &View) -> String {
    let t = &view.t;
    let mut body = header(t.text("campusLife.title"), t.text("campusLife.description"));
    body.push_str(&section(
        t.text("campusLife.academics.title"),
        None,
        &item_list(t, ListKind::Checklist, Category::Academic),
    ));
    body.push_str(&section(
        t.text("campusLife.activities.title"),
        None,
        &item_list(t, ListKind::Checklist, Category::Life),
    ));
    body.push_str(&help_footer(view));
    layout(Page::CampusLife, view, t.text("campusLife.title"), &body)
}
