//! ГОСТ Р 7.0.5-2008 style rules

use super::{edition_date_phrase, StyleRule};
use crate::template::Bindings;
use crate::CitationStandard;
use imcite_domain::{Category, SourceRecord};

pub const BOOK: &str = "$authors $title. – $edition$city: $publishing_house, $year. – $pages с.";

pub const INTERNET_RESOURCE: &str =
    "$article // $website URL: $link (дата обращения: $access_date).";

pub const ARTICLES_COLLECTION: &str =
    "$authors $article_title // $collection_title. – $city: $publishing_house, $year. – С. $pages.";

pub const DISSERTATION: &str =
    "$author $title : дис. ... $author_degree $science_branch наук: $branch_code. $city, $year. $page_count с.";

pub const NORMATIVE_ACT: &str =
    "$title : $type от $acceptance_date г. №$number // $publication_source. $publication_year. №$source_number. Ст. $article_number. $edition_date.";

/// Rule table for GOST, one rule per category
pub fn rules() -> Vec<StyleRule> {
    const S: CitationStandard = CitationStandard::Gost;
    vec![
        StyleRule::new(S, Category::Book, BOOK, bind_book),
        StyleRule::new(S, Category::InternetResource, INTERNET_RESOURCE, bind_internet_resource),
        StyleRule::new(
            S,
            Category::ArticlesCollection,
            ARTICLES_COLLECTION,
            bind_articles_collection,
        ),
        StyleRule::new(S, Category::Dissertation, DISSERTATION, bind_dissertation),
        StyleRule::new(S, Category::NormativeAct, NORMATIVE_ACT, bind_normative_act),
    ]
}

/// "3-е изд. – " or nothing
fn edition_phrase(edition: Option<&str>) -> String {
    edition
        .map(|edition| format!("{} изд. – ", edition))
        .unwrap_or_default()
}

fn bind_book(record: &SourceRecord) -> Option<Bindings> {
    let book = record.as_book()?;
    Some(
        Bindings::new()
            .bind("authors", book.authors())
            .bind("title", book.title())
            .bind("edition", edition_phrase(book.edition()))
            .bind("city", book.city())
            .bind("publishing_house", book.publishing_house())
            .bind("year", book.year())
            .bind("pages", book.pages()),
    )
}

fn bind_internet_resource(record: &SourceRecord) -> Option<Bindings> {
    let resource = record.as_internet_resource()?;
    Some(
        Bindings::new()
            .bind("article", resource.article())
            .bind("website", resource.website())
            .bind("link", resource.link())
            .bind("access_date", resource.access_date()),
    )
}

fn bind_articles_collection(record: &SourceRecord) -> Option<Bindings> {
    let article = record.as_articles_collection()?;
    Some(
        Bindings::new()
            .bind("authors", article.authors())
            .bind("article_title", article.article_title())
            .bind("collection_title", article.collection_title())
            .bind("city", article.city())
            .bind("publishing_house", article.publishing_house())
            .bind("year", article.year())
            .bind("pages", article.pages()),
    )
}

fn bind_dissertation(record: &SourceRecord) -> Option<Bindings> {
    let dissertation = record.as_dissertation()?;
    Some(
        Bindings::new()
            .bind("author", dissertation.author())
            .bind("title", dissertation.title())
            .bind("author_degree", dissertation.author_degree())
            .bind("science_branch", dissertation.science_branch())
            .bind("branch_code", dissertation.branch_code())
            .bind("city", dissertation.city())
            .bind("year", dissertation.year())
            .bind("page_count", dissertation.page_count()),
    )
}

fn bind_normative_act(record: &SourceRecord) -> Option<Bindings> {
    let act = record.as_normative_act()?;
    Some(
        Bindings::new()
            .bind("type", act.act_type())
            .bind("title", act.title())
            .bind("acceptance_date", act.acceptance_date())
            .bind("number", act.number())
            .bind("publication_source", act.publication_source())
            .bind("publication_year", act.publication_year())
            .bind("source_number", act.source_number())
            .bind("article_number", act.article_number())
            .bind("edition_date", edition_date_phrase(act.edition_date())),
    )
}
