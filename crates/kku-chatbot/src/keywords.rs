//! Ordered topic → keyword table.
//!
//! Row order is the match priority: the first row with any keyword contained
//! in the lowercased message wins, even if a later row is a closer fit
//! ("한국어" hits `Korea` before `Language`). Keywords must be lowercase.

use crate::responses::Topic;

pub const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Admissions,
        &["입학", "지원", "admission", "apply", "application", "신청"],
    ),
    (
        Topic::Scholarships,
        &[
            "장학금",
            "scholarship",
            "학비",
            "tuition",
            "비용",
            "cost",
            "돈",
            "money",
        ],
    ),
    (
        Topic::Programs,
        &[
            "프로그램",
            "program",
            "전공",
            "major",
            "학과",
            "department",
            "과정",
            "course",
        ],
    ),
    (
        Topic::English,
        &["영어", "english", "수업", "class", "language"],
    ),
    (Topic::Visa, &["비자", "visa", "immigration", "이민"]),
    (
        Topic::Documents,
        &["서류", "document", "증명서", "certificate"],
    ),
    (
        Topic::Campus,
        &["캠퍼스", "campus", "생활", "life", "시설", "facility"],
    ),
    (
        Topic::Housing,
        &["기숙사", "dormitory", "housing", "숙소", "accommodation"],
    ),
    (
        Topic::Korea,
        &["한국", "korea", "생활", "living", "문화", "culture"],
    ),
    (
        Topic::Language,
        &["한국어", "korean language", "topik", "배우", "learn"],
    ),
    (
        Topic::Contact,
        &["연락", "contact", "전화", "phone", "이메일", "email"],
    ),
];

/// Check if any keyword in the list is contained in the lowercased message.
pub fn kw_match(msg_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| msg_lower.contains(kw))
}

/// First topic whose keywords match, in table order.
pub fn match_topic(message: &str) -> Option<Topic> {
    let lower = message.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| kw_match(&lower, keywords))
        .map(|(topic, _)| *topic)
}
