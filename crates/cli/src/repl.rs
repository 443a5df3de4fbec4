//! Interactive command loop.
//!
//! Reads line commands from stdin and multiplexes them with the search
//! box's asynchronous city-suggestion events. All remote failures degrade
//! to a message plus the previous view; nothing past startup is fatal.

use std::io::Write as _;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::warn;

use pawfinder_core::{
    AdoptionCatalog, ApiError, Favorites, GeoPanel, MatchOutcome, SearchBox, SearchBoxEvent,
    SearchScreen, Session,
};

use crate::render;

/// How long the match success banner stays up.
const MATCH_NOTICE_TTL: Duration = Duration::from_secs(3);

pub struct Repl {
    api: Arc<dyn AdoptionCatalog>,
    session: Session,
    search_box: SearchBox,
    screen: SearchScreen,
    geo: GeoPanel,
    favorites: Favorites,
    events: UnboundedReceiver<SearchBoxEvent>,
    notice: Option<(String, Instant)>,
}

impl Repl {
    pub fn new(api: Arc<dyn AdoptionCatalog>, session: Session) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            api,
            session,
            search_box: SearchBox::new(Vec::new(), tx),
            screen: SearchScreen::new(),
            geo: GeoPanel::new(),
            favorites: Favorites::new(),
            events,
            notice: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        match self.session.display_name() {
            Some(name) => println!("Welcome back, {name}! Log in to start browsing."),
            None => println!("Welcome to pawfinder! Log in with: login <name> <email>"),
        }
        println!("Type `help` for commands.");
        prompt();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            if !self.handle_line(line.trim()).await {
                                break;
                            }
                            prompt();
                        }
                        None => break,
                    }
                }
                Some(event) = self.events.recv() => {
                    if self.search_box.apply_event(event) {
                        print!("{}", render::render_suggestions(&self.search_box.suggestions()));
                        prompt();
                    }
                }
            }
        }

        Ok(())
    }

    /// Dispatch one command line. Returns false to quit.
    async fn handle_line(&mut self, line: &str) -> bool {
        self.expire_notice();

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => print_help(),
            "quit" | "exit" => return false,
            "login" => self.login(rest).await,
            "whoami" => match self.session.display_name() {
                Some(name) if self.session.is_authenticated() => println!("{name}"),
                Some(name) => println!("{name} (not logged in)"),
                None => println!("not logged in"),
            },
            "logout" => self.logout().await,
            _ if !self.session.is_authenticated() => {
                println!("Please log in first: login <name> <email>");
            }
            "find" => self.find(rest).await,
            "pick" => self.pick(rest).await,
            "drop" => self.drop_chip(rest).await,
            "chips" => print!("{}", render::render_chips(self.search_box.selected())),
            "states" => self.set_states(rest).await,
            "sort" => {
                self.screen.toggle_sort();
                self.refresh_and_show().await;
            }
            "page" => self.page(rest).await,
            "next" => {
                if self.screen.next_page() {
                    self.refresh_and_show().await;
                } else {
                    println!("Already on the last page.");
                }
            }
            "prev" => {
                if self.screen.prev_page() {
                    self.refresh_and_show().await;
                } else {
                    println!("Already on the first page.");
                }
            }
            "show" => self.show(),
            "info" => self.info(rest).await,
            "fav" => self.fav(rest),
            "favs" => {
                let records = self.favorites.fetch_details(self.api.as_ref()).await;
                print!("{}", render::render_favorites(records));
            }
            "clear-favs" => {
                self.favorites.clear();
                println!("Favorites cleared.");
            }
            "match" => self.submit_match().await,
            "reset" => {
                self.search_box.reset();
                let _ = self.geo.reset();
                self.screen.reset();
                self.refresh_and_show().await;
            }
            other => println!("Unknown command `{other}`. Type `help` for commands."),
        }

        true
    }

    async fn login(&mut self, rest: &str) {
        let Some((name, email)) = rest.rsplit_once(char::is_whitespace) else {
            println!("Usage: login <name> <email>");
            return;
        };

        match self.api.login(name, email).await {
            Ok(()) => {
                self.session.login(name.trim());
                println!("Hi, {}!", name.trim());
                match self.api.breeds().await {
                    Ok(breeds) => self.search_box.set_breeds(breeds),
                    Err(e) => warn!(error = %e, "failed to fetch breed list"),
                }
                self.refresh_and_show().await;
            }
            // Surfaced inline, never propagated past the login flow.
            Err(ApiError::AuthFailed(message)) => println!("Login failed: {message}"),
            Err(e) => println!("Login failed: {e}"),
        }
    }

    async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            warn!(error = %e, "logout request failed");
        }
        self.session.logout();
        self.favorites.clear();
        self.search_box.reset();
        let _ = self.geo.reset();
        self.screen.reset();
        println!("Logged out.");
    }

    async fn find(&mut self, text: &str) {
        if let Some(criteria) = self.search_box.input(text, &self.api) {
            self.screen
                .apply_criteria(self.api.as_ref(), &criteria)
                .await;
            self.refresh_and_show().await;
        }
        print!("{}", render::render_chips(self.search_box.selected()));
        print!(
            "{}",
            render::render_suggestions(&self.search_box.suggestions())
        );
    }

    async fn pick(&mut self, rest: &str) {
        let suggestions = self.search_box.suggestions();
        let Some(criterion) = parse_index(rest, suggestions.len())
            .map(|i| suggestions[i].clone())
        else {
            println!("Usage: pick <suggestion number>");
            return;
        };

        if let Some(criteria) = self.search_box.select(criterion) {
            self.screen
                .apply_criteria(self.api.as_ref(), &criteria)
                .await;
            self.refresh_and_show().await;
        }
        print!("{}", render::render_chips(self.search_box.selected()));
    }

    async fn drop_chip(&mut self, rest: &str) {
        let chips = self.search_box.selected().to_vec();
        let Some(chip) = parse_index(rest, chips.len()).map(|i| chips[i].clone()) else {
            println!("Usage: drop <filter number>");
            return;
        };

        if let Some(criteria) = self.search_box.remove(&chip) {
            self.screen
                .apply_criteria(self.api.as_ref(), &criteria)
                .await;
            self.refresh_and_show().await;
        }
        print!("{}", render::render_chips(self.search_box.selected()));
    }

    async fn set_states(&mut self, rest: &str) {
        let states: Vec<String> = rest
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();

        match self.geo.set_states(self.api.as_ref(), states).await {
            Some(zip_codes) => {
                self.screen.set_geo_zip_codes(zip_codes);
                self.refresh_and_show().await;
            }
            None => println!("Location search failed; keeping previous filter."),
        }
    }

    async fn page(&mut self, rest: &str) {
        let Ok(page) = rest.parse() else {
            println!("Usage: page <number>");
            return;
        };

        if self.screen.go_to_page(page) {
            self.refresh_and_show().await;
        } else {
            println!(
                "Page {page} is out of range (1-{}).",
                self.screen.total_pages()
            );
        }
    }

    fn show(&mut self) {
        if let Some((notice, _)) = &self.notice {
            println!("{notice}");
        }
        print!("{}", render::render_page(&self.screen));
    }

    async fn info(&mut self, rest: &str) {
        let Some(dog) = parse_index(rest, self.screen.dogs().len())
            .map(|i| self.screen.dogs()[i].clone())
        else {
            println!("Usage: info <dog number>");
            return;
        };

        match self.api.locations(&[dog.zip_code.clone()]).await {
            Ok(locations) if !locations.is_empty() => {
                let loc = &locations[0];
                println!(
                    "{} - {}, {} ({}, {})",
                    dog.name, loc.city, loc.state, loc.county, dog.zip_code
                );
            }
            Ok(_) => println!("{} - ZIP: {}", dog.name, dog.zip_code),
            Err(e) => {
                warn!(error = %e, "location lookup failed");
                println!("{} - ZIP: {}", dog.name, dog.zip_code);
            }
        }
    }

    fn fav(&mut self, rest: &str) {
        let Some(dog) = parse_index(rest, self.screen.dogs().len())
            .map(|i| self.screen.dogs()[i].clone())
        else {
            println!("Usage: fav <dog number>");
            return;
        };

        if self.favorites.toggle(&dog.id) {
            println!("Added {} to favorites ({}).", dog.name, self.favorites.len());
        } else {
            println!(
                "Removed {} from favorites ({}).",
                dog.name,
                self.favorites.len()
            );
        }
    }

    async fn submit_match(&mut self) {
        match self.favorites.submit_match(self.api.as_ref()).await {
            Ok(MatchOutcome::NoFavorites) => {
                println!("No favorites yet - `fav` some dogs first.");
            }
            Ok(MatchOutcome::Matched { match_id, dog }) => {
                let banner = match dog {
                    Some(dog) => format!(
                        "Match generated! Meet {} - {}, age {} (ZIP {}).",
                        dog.name, dog.breed, dog.age, dog.zip_code
                    ),
                    None => format!("Match generated! Your match is {match_id}."),
                };
                println!("{banner}");
                self.notice = Some((banner, Instant::now() + MATCH_NOTICE_TTL));
            }
            Err(e) => {
                warn!(error = %e, "match submission failed");
                println!("Match submission failed; favorites kept.");
            }
        }
    }

    /// Refetch for the current filters and render; failures keep the
    /// previous view.
    async fn refresh_and_show(&mut self) {
        if let Err(e) = self.screen.refresh(self.api.as_ref()).await {
            warn!(error = %e, "search failed");
            println!("Search failed; showing previous results.");
        }
        self.show();
    }

    fn expire_notice(&mut self) {
        if let Some((_, expires_at)) = &self.notice {
            if Instant::now() >= *expires_at {
                self.notice = None;
            }
        }
    }
}

/// Parse a 1-based display index into a 0-based one, bounds-checked.
fn parse_index(rest: &str, len: usize) -> Option<usize> {
    let index: usize = rest.parse().ok()?;
    (1..=len).contains(&index).then(|| index - 1)
}

fn prompt() {
    print!("pawfinder> ");
    let _ = std::io::stdout().flush();
}

fn print_help() {
    println!(
        "\
Commands:
  login <name> <email>   log in to the adoption service
  logout                 log out and clear the cached name
  whoami                 show the current display name
  find <text>            search; comma-separated terms become filters
  pick <n>               select suggestion n
  drop <n>               remove filter chip n
  chips                  list active filter chips
  states <CA,NY,...>     filter by states (empty list clears)
  sort                   toggle breed sort order
  page <n> | next | prev navigate result pages
  show                   redisplay the current page
  info <n>               show dog n's city and state
  fav <n>                toggle dog n as a favorite
  favs                   list favorites
  clear-favs             clear all favorites
  match                  submit favorites for matching
  reset                  clear all filters
  quit                   exit"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_bounds() {
        assert_eq!(parse_index("1", 3), Some(0));
        assert_eq!(parse_index("3", 3), Some(2));
        assert_eq!(parse_index("0", 3), None);
        assert_eq!(parse_index("4", 3), None);
        assert_eq!(parse_index("x", 3), None);
        assert_eq!(parse_index("1", 0), None);
    }
}
