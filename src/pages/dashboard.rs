use chrono::{Datelike, NaiveDate, Utc};
use kku_core::Locale;
use kku_i18n::Translator;
use kku_services::calendar::{self, CalendarEvent, Cell, MonthGrid};
use kku_services::checklist::{self, ChecklistItem, ListKind};
use kku_services::costs::{self, Conversion, CostEstimate, Currency};

use super::{escape, layout, section, Page, View};

/// Emergency numbers; labels exist in Korean and English only.
const EMERGENCY_CONTACTS: &[(&str, &str, &str)] = &[
    ("112", "경찰", "Police"),
    ("119", "화재/구급", "Fire/Ambulance"),
    ("02-450-3114", "KKU 국제교류처", "KKU International Office"),
    ("02-450-3500", "학생지원센터", "Student Support Center"),
    ("1345", "외국인 종합안내센터", "Foreigner Help Center"),
    ("1339", "응급의료정보센터", "Emergency Medical Info"),
];

/// An outbound link on the tools cards. Like the contacts, Korean and English only.
struct ToolLink {
    url: &'static str,
    icon: &'static str,
    title: (&'static str, &'static str),
    note: (&'static str, &'static str),
}

const TRANSPORT_LINKS: &[ToolLink] = &[
    ToolLink {
        url: "https://map.kakao.com",
        icon: "🗺️",
        title: ("카카오맵", "Kakao Map"),
        note: ("길찾기 및 지도", "Navigation & Maps"),
    },
    ToolLink {
        url: "https://www.subway.co.kr",
        icon: "🚇",
        title: ("지하철 노선도", "Subway Map"),
        note: ("서울 지하철 정보", "Seoul Subway Info"),
    },
    ToolLink {
        url: "https://www.bustago.or.kr",
        icon: "🚌",
        title: ("버스 정보", "Bus Info"),
        note: ("실시간 버스 위치", "Real-time Bus"),
    },
];

const USEFUL_LINKS: &[ToolLink] = &[
    ToolLink {
        url: "https://www.hikorea.go.kr",
        icon: "🏛️",
        title: ("Hi Korea", "Hi Korea"),
        note: ("출입국·외국인정책본부", "Immigration Office"),
    },
    ToolLink {
        url: "https://www.study.go.kr",
        icon: "📚",
        title: ("국립국제교육원", "NIIED"),
        note: ("유학생 지원 정보", "Student Support"),
    },
    ToolLink {
        url: "https://www.gukje.ac.kr",
        icon: "🏫",
        title: ("KKU 공식 사이트", "KKU Official"),
        note: ("학교 홈페이지", "University Website"),
    },
];

/// Fixed weather card; there is no live feed.
const WEATHER: (&str, &str, &str) = ("22°C", "맑음", "Clear");

fn ko_en(locale: Locale, (ko, en): (&'static str, &'static str)) -> &'static str {
    if locale == Locale::Ko {
        ko
    } else {
        en
    }
}

/// Everything the dashboard shows for one client.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub checklist: Vec<ChecklistItem>,
    pub tracker: Vec<ChecklistItem>,
    pub events: Vec<CalendarEvent>,
    pub month: Option<MonthGrid>,
    pub costs: CostEstimate,
    pub conversion: Conversion,
}

impl DashboardData {
    /// Fresh lists and the current month.
    pub fn seeded(t: &Translator) -> Self {
        Self::with_lists(
            t,
            ListKind::Checklist.seed(t),
            ListKind::Progress.seed(t),
            Utc::now().date_naive(),
        )
    }

    pub fn with_lists(
        t: &Translator,
        checklist: Vec<ChecklistItem>,
        tracker: Vec<ChecklistItem>,
        today: NaiveDate,
    ) -> Self {
        let events = calendar::sample_events(t);
        let month =
            calendar::build_month(today.year(), today.month(), &events, Some(today), None).ok();
        Self {
            checklist,
            tracker,
            events,
            month,
            costs: CostEstimate::default(),
            conversion: costs::convert("100", Currency::Usd),
        }
    }
}

fn task_list(t: &Translator, kind: ListKind, items: &[ChecklistItem]) -> String {
    let overall = checklist::progress(items, None);
    let mut out = format!(
        "<p class=\"progress\"><progress max=\"100\" value=\"{pct}\"></progress> \
         {pct}% ({}/{} {})</p>\n",
        overall.completed,
        overall.total,
        escape(t.text("checklist.completed")),
        pct = overall.percentage,
    );
    for &category in kind.categories() {
        let group = checklist::filter(items, Some(category));
        if group.is_empty() {
            continue;
        }
        let p = checklist::progress(items, Some(category));
        out.push_str(&format!(
            "<h3>{} <small>{}/{}</small></h3>\n<ul>\n",
            escape(t.text(&kind.category_label_key(category))),
            p.completed,
            p.total
        ));
        for item in group {
            let important = if item.important {
                format!(" <strong>{}</strong>", escape(t.text("checklist.important")))
            } else {
                String::new()
            };
            out.push_str(&format!(
                "<li data-id=\"{}\"><input type=\"checkbox\" disabled{}> {}{important}</li>\n",
                escape(&item.id),
                if item.completed { " checked" } else { "" },
                escape(&item.title),
            ));
        }
        out.push_str("</ul>\n");
    }
    out
}

fn month_table(t: &Translator, grid: &MonthGrid) -> String {
    let month_name = t
        .list("calendar.monthNames")
        .get(grid.month as usize - 1)
        .copied()
        .unwrap_or_default();
    let mut out = format!(
        "<table class=\"calendar\">\n<caption>{} {}</caption>\n<tr>",
        escape(month_name),
        grid.year
    );
    for name in t.list("calendar.dayNames") {
        out.push_str(&format!("<th>{}</th>", escape(name)));
    }
    out.push_str("</tr>\n<tr>");
    for (i, cell) in grid.cells.iter().enumerate() {
        if i > 0 && i % 7 == 0 {
            out.push_str("</tr>\n<tr>");
        }
        match cell {
            Cell::Blank => out.push_str("<td></td>"),
            Cell::Day(day) => {
                let class = if day.is_today { " class=\"today\"" } else { "" };
                let marks = if day.events.is_empty() { "" } else { " •" };
                out.push_str(&format!("<td{class}>{}{marks}</td>", day.day));
            }
        }
    }
    out.push_str("</tr>\n</table>\n");
    out
}

fn upcoming_events(t: &Translator, events: &[CalendarEvent]) -> String {
    let upcoming = calendar::upcoming(events, 3);
    if upcoming.is_empty() {
        return format!("<p>{}</p>\n", escape(t.text("calendar.noEvents")));
    }
    let mut out = format!("<h3>{}</h3>\n<ul>\n", escape(t.text("calendar.upcoming")));
    for event in upcoming {
        out.push_str(&format!(
            "<li><time datetime=\"{0}\">{0}</time> {1} <em>{2}</em></li>\n",
            escape(&event.date),
            escape(&event.title),
            escape(t.text(event.kind.label_key())),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn cost_table(t: &Translator, estimate: &CostEstimate) -> String {
    let rows = [
        ("calculator.tuition", estimate.tuition),
        ("calculator.housing", estimate.housing),
        ("calculator.food", estimate.food),
        ("calculator.transport", estimate.transport),
        ("calculator.books", estimate.books),
        ("calculator.misc", estimate.misc),
        ("calculator.monthlyTotal", estimate.monthly_total()),
        ("calculator.semesterTotal", estimate.semester_total()),
    ];
    let mut out = String::from("<table class=\"costs\">\n");
    for (key, amount) in rows {
        out.push_str(&format!(
            "<tr><th>{}</th><td>{}</td><td>{}</td></tr>\n",
            escape(t.text(key)),
            escape(&costs::format(amount, Currency::Krw)),
            escape(&costs::format(amount, Currency::Usd)),
        ));
    }
    out.push_str("</table>\n");
    out
}

fn emergency_contacts(locale: Locale) -> String {
    let mut out = String::from("<ul class=\"emergency\">\n");
    for &(number, ko, en) in EMERGENCY_CONTACTS {
        out.push_str(&format!(
            "<li><a href=\"tel:{number}\">{} ({number})</a></li>\n",
            escape(ko_en(locale, (ko, en)))
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn link_list(locale: Locale, links: &[ToolLink]) -> String {
    let mut out = String::from("<ul class=\"tool-links\">\n");
    for link in links {
        out.push_str(&format!(
            "<li><a href=\"{}\" rel=\"noopener noreferrer\">{} {}</a> <small>{}</small></li>\n",
            link.url,
            link.icon,
            escape(ko_en(locale, link.title)),
            escape(ko_en(locale, link.note)),
        ));
    }
    out.push_str("</ul>\n");
    out
}

fn currency_option(value: Currency, selected: Currency) -> String {
    let code = match value {
        Currency::Krw => "KRW",
        Currency::Usd => "USD",
    };
    let marker = if value == selected { " selected" } else { "" };
    format!("<option value=\"{code}\"{marker}>{code}</option>")
}

fn converter(view: &View, conversion: &Conversion) -> String {
    let locale = view.locale();
    format!(
        "<h3>{}</h3>\n<form class=\"converter\" method=\"get\" action=\"{}\">\n\
         <input type=\"hidden\" name=\"lang\" value=\"{}\">\n\
         <input type=\"number\" name=\"amount\" min=\"0\" value=\"{}\">\n\
         <select name=\"currency\">{}{}</select>\n<button type=\"submit\">=</button>\n</form>\n\
         <p class=\"converted\">{}: <output>{}</output></p>\n<p><small>{}: $1 = {}</small></p>\n",
        escape(ko_en(locale, ("환율 계산기", "Currency Converter"))),
        view.form_action(Page::Dashboard),
        locale.code(),
        conversion.amount,
        currency_option(Currency::Usd, conversion.from),
        currency_option(Currency::Krw, conversion.from),
        escape(ko_en(locale, ("환전 결과", "Converted Amount"))),
        escape(&conversion.formatted),
        escape(ko_en(locale, ("환율", "Rate"))),
        escape(&costs::format(costs::KRW_PER_USD, Currency::Krw)),
    )
}

fn weather(locale: Locale) -> String {
    let (temperature, ko, en) = WEATHER;
    let rows = [
        (("습도", "Humidity"), "60%"),
        (("바람", "Wind"), "5 m/s"),
        (("강수", "Rain"), "0%"),
    ];
    let mut out = format!(
        "<h3>{}</h3>\n<p class=\"weather\">☀️ {temperature} {}</p>\n<dl>\n",
        escape(ko_en(locale, ("날씨 정보", "Weather"))),
        escape(ko_en(locale, (ko, en))),
    );
    for (label, value) in rows {
        out.push_str(&format!("<dt>{}</dt><dd>{value}</dd>\n", escape(ko_en(locale, label))));
    }
    out.push_str(&format!(
        "</dl>\n<p><a href=\"https://weather.naver.com\" rel=\"noopener noreferrer\">{}</a></p>\n",
        escape(ko_en(locale, ("자세히 보기", "View More"))),
    ));
    out
}

fn useful_tools(view: &View, conversion: &Conversion) -> String {
    let locale = view.locale();
    let mut out = converter(view, conversion);
    out.push_str(&weather(locale));
    for (heading, links) in [
        (("교통 정보", "Transportation"), TRANSPORT_LINKS),
        (("유용한 링크", "Useful Links"), USEFUL_LINKS),
    ] {
        out.push_str(&format!("<h3>{}</h3>\n", escape(ko_en(locale, heading))));
        out.push_str(&link_list(locale, links));
    }
    out
}

pub(super) fn render(view: &View, data: &DashboardData) -> String {
    let t = &view.t;
    let mut body = format!(
        "<section class=\"page-header\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        escape(t.text("dashboard.title")),
        escape(t.text("dashboard.description")),
    );
    body.push_str(&section(
        t.text("progress.title"),
        Some(t.text("progress.subtitle")),
        &task_list(t, ListKind::Progress, &data.tracker),
    ));
    body.push_str(&section(
        t.text("checklist.title"),
        None,
        &task_list(t, ListKind::Checklist, &data.checklist),
    ));

    let mut calendar_html = data
        .month
        .as_ref()
        .map(|grid| month_table(t, grid))
        .unwrap_or_default();
    calendar_html.push_str(&upcoming_events(t, &data.events));
    body.push_str(&section(t.text("calendar.upcoming"), None, &calendar_html));

    body.push_str(&section(
        t.text("calculator.title"),
        Some(t.text("calculator.subtitle")),
        &cost_table(t, &data.costs),
    ));
    body.push_str(&section(
        ko_en(view.locale(), ("유용한 도구", "Useful Tools")),
        None,
        &useful_tools(view, &data.conversion),
    ));
    body.push_str(&section(
        t.text("emergency.title"),
        None,
        &emergency_contacts(view.locale()),
    ));

    layout(Page::Dashboard, view, t.text("dashboard.title"), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::view;

    fn november(t: &Translator) -> DashboardData {
        let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        DashboardData::with_lists(t, ListKind::Checklist.seed(t), ListKind::Progress.seed(t), today)
    }

    #[test]
    fn test_dashboard_shows_progress_and_calendar() {
        let view = view(Locale::En);
        let mut data = november(view.translator());
        data.tracker = checklist::toggle(&data.tracker, "visa-1");
        let html = render(&view, &data);
        assert!(html.contains("8% (1/12 completed)"));
        assert!(html.contains("<caption>November 2025</caption>"));
        assert!(html.contains("<td class=\"today\">3</td>"));
        assert!(html.contains("<td>1 •</td>"));
        assert!(html.contains("Foreign Registration Deadline"));
    }

    #[test]
    fn test_dashboard_costs_and_contacts() {
        let view = view(Locale::Ko);
        let html = render(&view, &november(view.translator()));
        assert!(html.contains("₩1,150,000"));
        assert!(html.contains("₩9,900,000"));
        assert!(html.contains("경찰 (112)"));

        let view = crate::pages::tests::view(Locale::Ru);
        let html = render(&view, &november(view.translator()));
        assert!(html.contains("Police (112)"));
    }

    #[test]
    fn test_useful_tools_default_conversion() {
        let view = view(Locale::Ko);
        let html = render(&view, &november(view.translator()));
        assert!(html.contains("환율 계산기"));
        assert!(html.contains("<output>₩130,000</output>"));
        assert!(html.contains("<option value=\"USD\" selected>"));
        assert!(html.contains("$1 = ₩1,300"));
        assert!(html.contains("22°C 맑음"));
        assert!(html.contains("https://www.hikorea.go.kr"));
    }

    #[test]
    fn test_useful_tools_with_krw_input() {
        let view = view(Locale::En);
        let mut data = november(view.translator());
        data.conversion = costs::convert("100000", Currency::Krw);
        let html = render(&view, &data);
        assert!(html.contains("Currency Converter"));
        assert!(html.contains("<output>$76.92</output>"));
        assert!(html.contains("name=\"amount\" min=\"0\" value=\"100000\""));
        assert!(html.contains("<option value=\"KRW\" selected>"));
        assert!(html.contains("Kakao Map"));
    }
}
