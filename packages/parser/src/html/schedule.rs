//! Monthly season schedule page.

use scraper::{ElementRef, Html};

use super::{RowView, RowWrapper, TableView, find_table, selector};

pub const SCHEDULE_TABLE_IDS: &[&str] = &["schedule"];

#[derive(Debug, Clone, Copy)]
pub struct SchedulePage<'a> {
    document: &'a Html,
}

impl<'a> SchedulePage<'a> {
    #[must_use]
    pub const fn new(document: &'a Html) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn table(&self) -> Option<ScheduleTable<'a>> {
        find_table(self.document, SCHEDULE_TABLE_IDS).map(|element| ScheduleTable { element })
    }

    /// Links to the season's other monthly schedule pages, as printed
    /// (usually site-relative).
    #[must_use]
    pub fn other_months_urls(&self) -> Vec<String> {
        let links = selector("div.filter a[href]");
        self.document
            .select(&links)
            .filter_map(|link| link.value().attr("href"))
            .map(str::to_owned)
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleTable<'a> {
    element: ElementRef<'a>,
}

impl<'a> ScheduleTable<'a> {
    #[must_use]
    pub fn game_rows(&self) -> Vec<ScheduleRow<'a>> {
        self.rows().into_iter().map(ScheduleRow).collect()
    }
}

impl<'a> TableView<'a> for ScheduleTable<'a> {
    fn element(&self) -> ElementRef<'a> {
        self.element
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ScheduleRow<'a>(pub RowView<'a>);

impl ScheduleRow<'_> {
    /// e.g. `"Tue, Oct 22, 2019"`.
    #[must_use]
    pub fn date(&self) -> String {
        self.0.stat("date_game")
    }

    /// e.g. `"8:00p"` (2018 onward) or `"8:00 pm"` (earlier seasons);
    /// empty when not yet published.
    #[must_use]
    pub fn start_time_of_day(&self) -> String {
        self.0.stat("game_start_time")
    }

    #[must_use]
    pub fn away_team_name(&self) -> String {
        self.0.stat("visitor_team_name")
    }

    #[must_use]
    pub fn away_team_score(&self) -> String {
        self.0.stat("visitor_pts")
    }

    #[must_use]
    pub fn home_team_name(&self) -> String {
        self.0.stat("home_team_name")
    }

    #[must_use]
    pub fn home_team_score(&self) -> String {
        self.0.stat("home_pts")
    }
}

impl<'a> RowWrapper<'a> for ScheduleRow<'a> {
    fn row(&self) -> RowView<'a> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::test_support::document;

    #[test]
    fn reads_rows_and_month_links() {
        let html = document(
            r#"<div class="filter"><div><a href="/leagues/NBA_2020_games-october.html">October</a></div>
               <div><a href="/leagues/NBA_2020_games-november.html">November</a></div></div>
               <table id="schedule"><tbody><tr>
                 <th data-stat="date_game">Tue, Oct 22, 2019</th>
                 <td data-stat="game_start_time">8:00p</td>
                 <td data-stat="visitor_team_name"><a>New Orleans Pelicans</a></td>
                 <td data-stat="visitor_pts">122</td>
                 <td data-stat="home_team_name"><a>Toronto Raptors</a></td>
                 <td data-stat="home_pts">130</td>
               </tr></tbody></table>"#,
        );
        let page = SchedulePage::new(&html);
        assert_eq!(page.other_months_urls().len(), 2);
        let row = page.table().unwrap().game_rows()[0];
        assert_eq!(row.date(), "Tue, Oct 22, 2019");
        assert_eq!(row.start_time_of_day(), "8:00p");
        assert_eq!(row.home_team_name(), "Toronto Raptors");
        assert_eq!(row.away_team_score(), "122");
    }
}
