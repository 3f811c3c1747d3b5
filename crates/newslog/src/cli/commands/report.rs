use std::path::Path;

use anyhow::Result;

use crate::models::{ArticleViews, AuthorViews, ErrorDay};
use crate::reports;
use crate::sqlite::open_database;

pub const SECTION_SEPARATOR: &str =
    "--------------------------------------------------------------";

const TOP_ARTICLES_HEADER: &str = "1. What are the most popular three articles of all time?";
const TOP_AUTHORS_HEADER: &str = "2. Who are the most popular article authors of all time?";
const ERROR_DAYS_HEADER: &str = "3. On which days did more than 1% of requests lead to errors?";

/// Runs the three report sections in order. Each section opens and drops its
/// own connection; the sections share no state.
pub fn run(database: &Path) -> Result<()> {
    let articles = {
        let connection = open_database(database)?;
        reports::top_articles(&connection)?
    };
    print!("{}", render_top_articles(&articles));
    println!("{SECTION_SEPARATOR}");

    let authors = {
        let connection = open_database(database)?;
        reports::top_authors(&connection)?
    };
    print!("{}", render_top_authors(&authors));
    println!("{SECTION_SEPARATOR}");

    let days = {
        let connection = open_database(database)?;
        reports::error_days(&connection)?
    };
    print!("{}", render_error_days(&days));

    Ok(())
}

#[must_use]
pub fn render_top_articles(rows: &[ArticleViews]) -> String {
    let mut rendered = String::new();
    rendered.push_str(TOP_ARTICLES_HEADER);
    rendered.push('\n');
    for row in rows {
        rendered.push_str(&format!("- {} -- {} views\n", row.title, row.views));
    }
    rendered
}

#[must_use]
pub fn render_top_authors(rows: &[AuthorViews]) -> String {
    let mut rendered = String::new();
    rendered.push_str(TOP_AUTHORS_HEADER);
    rendered.push('\n');
    for row in rows {
        rendered.push_str(&format!("- {} -- {} views\n", row.name, row.views));
    }
    rendered
}

#[must_use]
pub fn render_error_days(rows: &[ErrorDay]) -> String {
    let mut rendered = String::new();
    rendered.push_str(ERROR_DAYS_HEADER);
    rendered.push('\n');
    for row in rows {
        rendered.push_str(&format!(
            "- {} -- {:.1} % errors\n",
            row.formatted_day(),
            row.error_percent
        ));
    }
    rendered
}
