use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::{ArticleViews, AuthorViews, ErrorDay};
use crate::utils::time::parse_report_day;

pub const TOP_ARTICLE_LIMIT: usize = 3;
pub const ERROR_PERCENT_THRESHOLD: f64 = 1.0;

// The status filter sits in the ON clause so the join stays outer: an
// article with no qualifying log rows keeps a count of 0 instead of being
// dropped by a WHERE over the joined columns. Ties are broken by title so
// output is deterministic.
const TOP_ARTICLES_SQL: &str = r#"
SELECT articles.title, COUNT(log.path) AS views
FROM articles
LEFT JOIN log
    ON log.path = '/article/' || articles.slug
   AND log.status LIKE '200%'
GROUP BY articles.title
ORDER BY views DESC, articles.title ASC
LIMIT 3;
"#;

// The author join is inner: an author with no articles has no traffic to
// attribute and is excluded from the ranking.
const TOP_AUTHORS_SQL: &str = r#"
SELECT authors.name, COUNT(log.path) AS views
FROM articles
JOIN authors ON authors.id = articles.author
LEFT JOIN log
    ON log.path = '/article/' || articles.slug
   AND log.status LIKE '200%'
GROUP BY authors.id
ORDER BY views DESC, authors.name ASC;
"#;

// One conditional-aggregation pass per day; the percentage and its rounding
// happen in Rust so the rounding rule is pinned rather than engine-default.
const DAY_REQUEST_COUNTS_SQL: &str = r#"
SELECT date(log.time) AS day,
       SUM(CASE WHEN log.status LIKE '404%' THEN 1 ELSE 0 END) AS error_count,
       COUNT(*) AS total_count
FROM log
GROUP BY day
ORDER BY day ASC;
"#;

/// The 3 articles with the most successful requests, descending by view
/// count. Articles with zero qualifying log rows are eligible with count 0.
pub fn top_articles(connection: &Connection) -> Result<Vec<ArticleViews>> {
    let mut statement = connection
        .prepare(TOP_ARTICLES_SQL)
        .context("failed to prepare top-articles query")?;
    let rows = statement
        .query_map([], |row| {
            Ok(ArticleViews {
                title: row.get(0)?,
                views: row.get(1)?,
            })
        })
        .context("failed to execute top-articles query")?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to decode top-articles row")
}

/// Every author with at least one article, with total successful views
/// across all their articles, descending. Full ranking, no limit.
pub fn top_authors(connection: &Connection) -> Result<Vec<AuthorViews>> {
    let mut statement = connection
        .prepare(TOP_AUTHORS_SQL)
        .context("failed to prepare top-authors query")?;
    let rows = statement
        .query_map([], |row| {
            Ok(AuthorViews {
                name: row.get(0)?,
                views: row.get(1)?,
            })
        })
        .context("failed to execute top-authors query")?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to decode top-authors row")
}

/// Every calendar day whose rounded 404 percentage exceeds the 1.0%
/// threshold, descending by percentage, ties by day ascending.
pub fn error_days(connection: &Connection) -> Result<Vec<ErrorDay>> {
    let mut statement = connection
        .prepare(DAY_REQUEST_COUNTS_SQL)
        .context("failed to prepare error-day query")?;
    let rows = statement
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .context("failed to execute error-day query")?;
    let counts = rows
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("failed to decode error-day row")?;

    let mut days = Vec::new();
    for (raw_day, error_count, total_count) in counts {
        let error_percent = round_to_tenth(error_count as f64 / total_count as f64 * 100.0);
        if error_percent > ERROR_PERCENT_THRESHOLD {
            days.push(ErrorDay {
                day: parse_report_day(&raw_day)?,
                error_percent,
            });
        }
    }

    days.sort_by(|left, right| {
        right
            .error_percent
            .total_cmp(&left.error_percent)
            .then_with(|| left.day.cmp(&right.day))
    });

    Ok(days)
}

// One decimal place, half away from zero (`f64::round` semantics).
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
