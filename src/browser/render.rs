//! Plain-text rendering of a browser session.

use super::{FolderBrowser, Listing, NavigationPath};

/// Breadcrumb line, e.g. `マイドライブ > Docs > [Contracts]`. The active crumb is bracketed.
pub fn render_breadcrumbs(path: &NavigationPath) -> String {
    let crumbs = path.breadcrumbs();
    let last = crumbs.len() - 1;
    crumbs
        .iter()
        .enumerate()
        .map(|(i, folder)| {
            if i == last {
                format!("[{}]", folder.name)
            } else {
                folder.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Body lines for the listing. Loading, empty and failed each get their own line.
pub fn render_listing(listing: &Listing) -> Vec<String> {
    match listing {
        Listing::Loading => vec!["Loading folders...".to_string()],
        Listing::Empty => vec!["No folders".to_string()],
        Listing::Failed(message) => vec![format!("Failed to load folders: {message}")],
        Listing::Folders(children) => children
            .iter()
            .enumerate()
            .map(|(i, folder)| format!("{:>3}. {}", i + 1, folder.name))
            .collect(),
    }
}

/// Full screen for a session: breadcrumbs, listing, and the key help.
pub fn render_browser(browser: &FolderBrowser) -> String {
    let mut out = String::new();
    out.push_str(&render_breadcrumbs(browser.path()));
    out.push('\n');
    out.push_str(&"-".repeat(40));
    out.push('\n');
    for line in render_listing(browser.listing()) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');

    let mut help = Vec::new();
    if !browser.listing().entries().is_empty() {
        help.push("<n> open");
        help.push("a <n> add");
    }
    if !browser.path().is_root() {
        help.push("b back");
    }
    help.push("r reload");
    help.push("q cancel");
    out.push_str(&help.join("  |  "));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{BrowserAction, BrowserOutcome, FolderRef};

    #[test]
    fn breadcrumbs_mark_active_folder() {
        let mut path = NavigationPath::new("Root");
        assert_eq!(render_breadcrumbs(&path), "[Root]");

        path.push(FolderRef::new("A", "Docs"));
        assert_eq!(render_breadcrumbs(&path), "Root > [Docs]");
    }

    #[test]
    fn listing_states_are_distinct() {
        assert_eq!(render_listing(&Listing::Loading), ["Loading folders..."]);
        assert_eq!(render_listing(&Listing::Empty), ["No folders"]);
        assert_eq!(
            render_listing(&Listing::Failed("HTTP 502".into())),
            ["Failed to load folders: HTTP 502"]
        );
    }

    #[test]
    fn populated_listing_is_numbered_from_one() {
        let listing = Listing::Folders(vec![FolderRef::new("A", "Docs"), FolderRef::new("B", "Media")]);
        assert_eq!(render_listing(&listing), ["  1. Docs", "  2. Media"]);
    }

    #[test]
    fn back_hint_only_below_root() {
        let (mut browser, ticket) = FolderBrowser::open("Root", false);
        browser.complete(ticket, Ok::<_, String>(vec![FolderRef::new("A", "Docs")]));
        assert!(!render_browser(&browser).contains("b back"));

        let outcome = browser.handle(BrowserAction::Descend(0));
        assert!(matches!(outcome, BrowserOutcome::Fetch(_)));
        let screen = render_browser(&browser);
        assert!(screen.contains("b back"));
        assert!(screen.contains("Loading folders..."));
        assert!(!screen.contains("a <n> add"));
    }
}
