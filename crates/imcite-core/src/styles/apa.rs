//! APA (7th edition) style rules

use super::StyleRule;
use crate::template::Bindings;
use crate::CitationStandard;
use imcite_domain::{Category, SourceRecord};

pub const BOOK: &str = "$authors ($year). $title $edition. $publishing_house.";

pub const INTERNET_RESOURCE: &str =
    "$article. (n.d.). $website. Retrieved $access_date, from $link";

pub const ARTICLES_COLLECTION: &str =
    "$authors ($year). $article_title. $collection_title, $pages.";

pub const DISSERTATION: &str = "$author ($year). $title [$author_degree, some university].";

pub const NORMATIVE_ACT: &str =
    "$title $publication_year ($type) s.$source_number.$article_number (Russia).";

/// Rule table for APA, one rule per category
pub fn rules() -> Vec<StyleRule> {
    const S: CitationStandard = CitationStandard::Apa;
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

/// "(3-е изд.)" or nothing
fn edition_phrase(edition: Option<&str>) -> String {
    edition
        .map(|edition| format!("({} изд.)", edition))
        .unwrap_or_default()
}

fn bind_book(record: &SourceRecord) -> Option<Bindings> {
    let book = record.as_book()?;
    Some(
        Bindings::new()
            .bind("authors", book.authors())
            .bind("year", book.year())
            .bind("title", book.title())
            .bind("edition", edition_phrase(book.edition()))
            .bind("publishing_house", book.publishing_house()),
    )
}

fn bind_internet_resource(record: &SourceRecord) -> Option<Bindings> {
    let resource = record.as_internet_resource()?;
    Some(
        Bindings::new()
            .bind("article", resource.article())
            .bind("website", resource.website())
            .bind("access_date", resource.access_date())
            .bind("link", resource.link()),
    )
}

fn bind_articles_collection(record: &SourceRecord) -> Option<Bindings> {
    let article = record.as_articles_collection()?;
    Some(
        Bindings::new()
            .bind("authors", article.authors())
            .bind("year", article.year())
            .bind("article_title", article.article_title())
            .bind("collection_title", article.collection_title())
            .bind("pages", article.pages()),
    )
}

fn bind_dissertation(record: &SourceRecord) -> Option<Bindings> {
    let dissertation = record.as_dissertation()?;
    Some(
        Bindings::new()
            .bind("author", dissertation.author())
            .bind("year", dissertation.year())
            .bind("title", dissertation.title())
            .bind("author_degree", dissertation.author_degree()),
    )
}

fn bind_normative_act(record: &SourceRecord) -> Option<Bindings> {
    let act = record.as_normative_act()?;
    Some(
        Bindings::new()
            .bind("title", act.title())
            .bind("publication_year", act.publication_year())
            .bind("type", act.act_type())
            .bind("source_number", act.source_number())
            .bind("article_number", act.article_number()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::fixtures;

    fn format(record: &SourceRecord) -> String {
        rules()
            .into_iter()
            .find(|rule| rule.category() == record.category())
            .unwrap()
            .format(record)
            .unwrap()
    }

    #[test]
    fn test_book_with_edition() {
        assert_eq!(
            format(&fixtures::book(Some("3-е"))),
            "Иванов И.М. (2020). Наука как искусство (3-е изд.). Просвещение."
        );
    }

    #[test]
    fn test_book_without_edition() {
        assert_eq!(
            format(&fixtures::book(None)),
            "Иванов И.М. (2020). Наука как искусство . Просвещение."
        );
    }

    #[test]
    fn test_internet_resource() {
        assert_eq!(
            format(&fixtures::internet_resource()),
            "Наука как искусство. (n.d.). Ведомости. Retrieved 01.01.2021, from https://www.vedomosti.ru/"
        );
    }

    #[test]
    fn test_articles_collection() {
        assert_eq!(
            format(&fixtures::articles_collection()),
            "Иванов И.М., Петров С.Н. (2020). Наука как искусство. Сборник научных трудов, 25-30."
        );
    }

    #[test]
    fn test_dissertation() {
        assert_eq!(
            format(&fixtures::dissertation()),
            "Иванов И.М. (2020). Наука как искусство [д-р. / канд., some university]."
        );
    }

    #[test]
    fn test_normative_act_ignores_edition_date() {
        let expected = "Наука как искусство 2020 (Конституция Российской Федерации) s.5.15 (Russia).";
        assert_eq!(format(&fixtures::normative_act(Some("11.09.2002"))), expected);
        assert_eq!(format(&fixtures::normative_act(None)), expected);
    }

    #[test]
    fn test_templates_differ_from_gost() {
        use crate::styles::gost;
        for (apa, gost) in [
            (BOOK, gost::BOOK),
            (INTERNET_RESOURCE, gost::INTERNET_RESOURCE),
            (ARTICLES_COLLECTION, gost::ARTICLES_COLLECTION),
            (DISSERTATION, gost::DISSERTATION),
            (NORMATIVE_ACT, gost::NORMATIVE_ACT),
        ] {
            assert_ne!(apa, gost);
        }
    }
}
