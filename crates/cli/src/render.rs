//! Plain-text rendering of screen state.

use pawfinder_core::{Criterion, Dog, PageItem, SearchScreen};

/// Render the current result page with its pagination bar.
pub fn render_page(screen: &SearchScreen) -> String {
    if screen.dogs().is_empty() {
        return "No dogs found. Try adjusting your filters.\n".to_string();
    }

    let mut out = String::new();
    for (i, dog) in screen.dogs().iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {:<12} {:<28} age {:>2}  ZIP {}\n",
            i + 1,
            dog.name,
            dog.breed,
            dog.age,
            dog.zip_code
        ));
    }
    out.push_str(&format!(
        "-- {} dogs total, page {} of {} --\n",
        screen.total(),
        screen.filters().page,
        screen.total_pages()
    ));
    if screen.total_pages() > 1 {
        out.push_str(&render_page_bar(screen));
        out.push('\n');
    }
    out
}

/// Render the compressed page-number bar, bracketing the current page.
pub fn render_page_bar(screen: &SearchScreen) -> String {
    let current = screen.filters().page;
    screen
        .page_items()
        .iter()
        .map(|item| match item {
            PageItem::Page(page) if *page == current => format!("[{page}]"),
            PageItem::Page(page) => page.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render suggestions as a numbered pick list.
pub fn render_suggestions(suggestions: &[Criterion]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let mut out = String::from("Suggestions:\n");
    for (i, suggestion) in suggestions.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. [{}] {}\n",
            i + 1,
            category_tag(suggestion),
            suggestion.label()
        ));
    }
    out
}

/// Render the selected criterion chips.
pub fn render_chips(chips: &[Criterion]) -> String {
    if chips.is_empty() {
        return "No active filters.\n".to_string();
    }

    let mut out = String::from("Filters:\n");
    for (i, chip) in chips.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. [{}] {}\n",
            i + 1,
            category_tag(chip),
            chip.label()
        ));
    }
    out
}

/// Render the favorites list.
pub fn render_favorites(dogs: &[Dog]) -> String {
    if dogs.is_empty() {
        return "No favorites yet.\n".to_string();
    }

    let mut out = String::from("Favorites:\n");
    for dog in dogs {
        out.push_str(&format!(
            "  {:<12} {:<28} age {:>2}  ZIP {}\n",
            dog.name, dog.breed, dog.age, dog.zip_code
        ));
    }
    out
}

fn category_tag(criterion: &Criterion) -> &'static str {
    match criterion {
        Criterion::Breed(_) => "breed",
        Criterion::State(_) => "state",
        Criterion::ZipCode(_) => "zip",
        Criterion::Age(_) => "age",
        Criterion::City { .. } => "city",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_page() {
        let screen = SearchScreen::new();
        assert!(render_page(&screen).contains("No dogs found"));
    }

    #[test]
    fn test_render_chips_with_tags() {
        let chips = vec![
            Criterion::Breed("Pug".to_string()),
            Criterion::Age(3),
        ];
        let out = render_chips(&chips);
        assert!(out.contains("[breed] Pug"));
        assert!(out.contains("[age] Age: 3 years"));
    }

    #[test]
    fn test_render_suggestions_numbered() {
        let suggestions = vec![
            Criterion::State("NY".to_string()),
            Criterion::ZipCode("10001".to_string()),
        ];
        let out = render_suggestions(&suggestions);
        assert!(out.contains("1. [state] NY"));
        assert!(out.contains("2. [zip] ZIP: 10001"));
    }

    #[test]
    fn test_render_no_filters() {
        assert!(render_chips(&[]).contains("No active filters"));
    }
}
