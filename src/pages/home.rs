use super::{escape, layout, section, Page, View};

const STATS: &[(&str, &str)] = &[
    ("2,500+", "stats.students"),
    ("60+", "stats.countries"),
    ("120+", "stats.programs"),
    ("95%", "stats.satisfaction"),
];

const FEATURES: &[&str] = &[
    "features.programs",
    "features.scholarships",
    "features.support",
    "features.campus",
];

pub(super) fn render(view: &View) -> String {
    let t = &view.t;
    let mut body = format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n<p>{}</p>\n\
         <a class=\"button\" href=\"{}\">{}</a>\n</section>\n",
        escape(t.text("hero.title")),
        escape(t.text("hero.subtitle")),
        escape(t.text("hero.description")),
        view.href(Page::Programs),
        escape(t.text("hero.cta")),
    );

    body.push_str("<section class=\"stats\">\n<dl>\n");
    for (value, key) in STATS {
        body.push_str(&format!(
            "<div><dt>{}</dt><dd>{value}</dd></div>\n",
            escape(t.text(key))
        ));
    }
    body.push_str("</dl>\n</section>\n");

    let mut features = String::from("<ul>\n");
    for key in FEATURES {
        features.push_str(&format!("<li>{}</li>\n", escape(t.text(key))));
    }
    features.push_str("</ul>\n");
    body.push_str(&section(t.text("features.title"), None, &features));

    let actions = format!(
        "<a class=\"button\" href=\"{}\">{}</a>\n<a class=\"button\" href=\"{}\">{}</a>\n",
        view.href(Page::Preparation),
        escape(t.text("cta.startApplication")),
        view.href(Page::Dashboard),
        escape(t.text("cta.scheduleConsultation")),
    );
    body.push_str(&section(t.text("cta.ready"), Some(t.text("cta.description")), &actions));

    layout(Page::Home, view, t.text("site.tagline"), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::view;
    use kku_core::Locale;

    #[test]
    fn test_home_in_korean() {
        let html = render(&view(Locale::Ko));
        assert!(html.contains("경국대학교에서 공부하세요"));
        assert!(html.contains("href=\"/programs?lang=ko\""));
    }

    #[test]
    fn test_home_lists_stats_and_features() {
        let html = render(&view(Locale::En));
        assert!(html.contains("<dd>2,500+</dd>"));
        assert!(html.contains("Why KKU?"));
        assert!(html.contains("Generous scholarships for international students"));
    }
}
