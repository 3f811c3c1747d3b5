use time::Date;

use crate::utils::time::format_report_day;

pub const ARTICLE_PATH_PREFIX: &str = "/article/";
pub const SUCCESS_STATUS_PREFIX: &str = "200";
pub const ERROR_STATUS_PREFIX: &str = "404";

/// Authored content rows as stored in the schema. Externally seeded and
/// immutable for the lifetime of a report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub author: i64,
}

/// One raw HTTP access record. There is no declared relation to `Article`;
/// the association is inferred at query time by matching `path` against the
/// article's derived request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub path: String,
    pub status: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleViews {
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorViews {
    pub name: String,
    pub views: i64,
}

/// A calendar day whose rounded 404 percentage exceeded the report threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorDay {
    pub day: Date,
    pub error_percent: f64,
}

impl ErrorDay {
    #[must_use]
    pub fn formatted_day(&self) -> String {
        format_report_day(self.day)
    }
}

/// The request path under which an article is served. The SQL join predicate
/// (`log.path = '/article/' || articles.slug`) mirrors this rule.
#[must_use]
pub fn article_request_path(slug: &str) -> String {
    format!("{ARTICLE_PATH_PREFIX}{slug}")
}

/// Statuses carry a trailing reason phrase ("200 OK"), so matching is on the
/// code prefix, never exact equality.
#[must_use]
pub fn is_success_status(status: &str) -> bool {
    status.starts_with(SUCCESS_STATUS_PREFIX)
}

#[must_use]
pub fn is_error_status(status: &str) -> bool {
    status.starts_with(ERROR_STATUS_PREFIX)
}
