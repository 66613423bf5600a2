//! Player search results page.

use scraper::{ElementRef, Html};

use super::{selector, text_of};

#[derive(Debug, Clone, Copy)]
pub struct SearchPage<'a> {
    document: &'a Html,
}

impl<'a> SearchPage<'a> {
    #[must_use]
    pub const fn new(document: &'a Html) -> Self {
        Self { document }
    }

    /// Result items of the players section. Team, franchise and other
    /// sections are ignored.
    #[must_use]
    pub fn player_results(&self) -> Vec<SearchResultItem<'a>> {
        let items = selector("div#players div.search-item");
        self.document
            .select(&items)
            .map(|element| SearchResultItem { element })
            .collect()
    }

    /// The href of the "Next" pagination link, if there are more results.
    #[must_use]
    pub fn next_page_url(&self) -> Option<String> {
        let links = selector("div#players div.search-pagination a[href]");
        self.document
            .select(&links)
            .find(|link| text_of(*link).contains("Next"))
            .and_then(|link| link.value().attr("href"))
            .map(str::to_owned)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResultItem<'a> {
    element: ElementRef<'a>,
}

impl SearchResultItem<'_> {
    fn name_link(&self) -> Option<ElementRef<'_>> {
        let link = selector(".search-item-name a");
        self.element.select(&link).next()
    }

    /// The player name without the trailing `(1997-2016)` career span.
    #[must_use]
    pub fn name(&self) -> String {
        let text = self.name_link().map(text_of).unwrap_or_default();
        match text.find('(') {
            Some(index) => text[..index].trim().to_owned(),
            None => text,
        }
    }

    /// e.g. `/players/b/bryanko01.html`.
    #[must_use]
    pub fn url(&self) -> Option<String> {
        self.name_link()?.value().attr("href").map(str::to_owned)
    }

    /// The slug is the file name of the player page.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        let url = self.url()?;
        let file = url.rsplit('/').next()?;
        let slug = file.strip_suffix(".html").unwrap_or(file);
        (!slug.is_empty()).then(|| slug.to_owned())
    }

    /// League abbreviations as printed, e.g. `["NBA", "ABA"]`.
    #[must_use]
    pub fn league_abbreviations(&self) -> Vec<String> {
        let leagues = selector(".search-item-league");
        self.element
            .select(&leagues)
            .next()
            .map(text_of)
            .unwrap_or_default()
            .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
            .filter(|league| !league.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn reads_player_items_and_pagination() {
        let html = document(
            r#"<div id="players">
                 <div class="search-item">
                   <div class="search-item-name"><strong><a href="/players/b/bryanko01.html">Kobe Bryant (1997-2016)</a></strong></div>
                   <div class="search-item-league">NBA</div>
                 </div>
                 <div class="search-item">
                   <div class="search-item-name"><strong><a href="/players/e/ervinju01.html">Julius Erving (1972-1987)</a></strong></div>
                   <div class="search-item-league">NBA/ABA</div>
                 </div>
                 <div class="search-pagination"><a href="/search/search.fcgi?search=b&amp;offset=100">Next 100 Results</a></div>
               </div>
               <div id="teams"><div class="search-item"><div class="search-item-name"><a href="/teams/BOS/">Boston Celtics</a></div></div></div>"#,
        );
        let page = SearchPage::new(&html);
        let items = page.player_results();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name(), "Kobe Bryant");
        assert_eq!(items[0].slug().as_deref(), Some("bryanko01"));
        assert_eq!(items[1].league_abbreviations(), vec!["NBA", "ABA"]);
        assert_eq!(
            page.next_page_url().as_deref(),
            Some("/search/search.fcgi?search=b&offset=100")
        );
    }
}
