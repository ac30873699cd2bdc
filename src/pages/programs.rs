use kku_services::costs::{self, Currency};
use kku_services::programs::{self, ProgramFilter, ProgramLevel};

use super::{escape, layout, Page, View};

fn filter_form(view: &View, criteria: &ProgramFilter) -> String {
    let t = &view.t;
    let counts = programs::level_counts();
    let mut out = format!(
        "<form class=\"program-filter\" method=\"get\" action=\"{}\">\n\
         <input type=\"hidden\" name=\"lang\" value=\"{}\">\n<select name=\"level\">\n\
         <option value=\"all\">{} ({})</option>\n",
        view.form_action(Page::Programs),
        view.locale().code(),
        escape(t.text("programs.level.all")),
        counts.all,
    );
    for level in ProgramLevel::ALL {
        let count = match level {
            ProgramLevel::Bachelor => counts.bachelor,
            ProgramLevel::Master => counts.master,
            ProgramLevel::Doctoral => counts.doctoral,
        };
        let selected = if criteria.level == Some(level) { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{}\"{selected}>{} ({count})</option>\n",
            level.as_str(),
            escape(t.text(&format!("programs.level.{}", level.as_str()))),
        ));
    }
    out.push_str("</select>\n<select name=\"language\">\n");
    for value in ["all", "korean", "english"] {
        let selected = match criteria.language {
            Some(l) if l.as_str() == value => " selected",
            _ => "",
        };
        out.push_str(&format!(
            "<option value=\"{value}\"{selected}>{}</option>\n",
            escape(t.text(&format!("programs.language.{value}"))),
        ));
    }
    out.push_str(&format!(
        "</select>\n<input type=\"search\" name=\"q\" value=\"{}\">\n\
         <button type=\"submit\">{}</button>\n</form>\n",
        escape(&criteria.query),
        escape(t.text("programs.search")),
    ));
    out
}

pub(super) fn render(view: &View, criteria: &ProgramFilter) -> String {
    let t = &view.t;
    let mut body = format!(
        "<section class=\"page-header\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n\
         <section>\n<h2>{}</h2>\n{}</section>\n",
        escape(t.text("programs.title")),
        escape(t.text("programs.subtitle")),
        escape(t.text("programs.filter")),
        filter_form(view, criteria),
    );

    let found = programs::filter(criteria);
    body.push_str("<section class=\"programs\">\n");
    if found.is_empty() {
        body.push_str(&format!("<p>{}</p>\n", escape(t.text("programs.noResults"))));
    }
    for program in found {
        body.push_str(&format!(
            "<article data-id=\"{}\">\n<h3>{}</h3>\n<p>{} · {}</p>\n<p>{}</p>\n<dl>\n\
             <dt>{}</dt><dd>{}</dd>\n<dt>{}</dt><dd>{} ({})</dd>\n</dl>\n<ul>",
            program.id,
            escape(program.title),
            escape(t.text(&format!("programs.level.{}", program.level.as_str()))),
            escape(t.text(&format!("programs.language.{}", program.language.as_str()))),
            escape(program.description),
            escape(t.text("programs.duration")),
            escape(program.duration),
            escape(t.text("programs.tuition")),
            escape(&costs::format(program.tuition, Currency::Krw)),
            escape(&costs::format(program.tuition, Currency::Usd)),
        ));
        for feature in program.features {
            body.push_str(&format!("<li>{}</li>", escape(feature)));
        }
        body.push_str("</ul>\n</article>\n");
    }
    body.push_str("</section>\n");

    layout(Page::Programs, view, t.text("programs.title"), &body)
}
