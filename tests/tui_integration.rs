//! Integration tests for the TUI shell
//!
//! Drives TuiApp on a TestBackend with an in-process page fetcher, so the
//! full key → state → fetch → render path runs without a terminal or network.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use shelfview::config::ResolvedConfig;
use shelfview::model::{Book, BookKey, NetworkError, Page, PageNumber};
use shelfview::source::PageFetcher;
use shelfview::view::{Theme, TuiApp};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Page 1 always succeeds; later pages fail while `broken` is set.
struct FlakyFetcher {
    broken: AtomicBool,
}

impl PageFetcher for FlakyFetcher {
    fn fetch(&self, query: &str, page: PageNumber) -> Result<Page, NetworkError> {
        if page.get() > 1 && self.broken.load(Ordering::SeqCst) {
            return Err(NetworkError::new("HTTP 503 Service Unavailable"));
        }
        let first = (page.get() as usize - 1) * 4;
        let books = (first..first + 4)
            .map(|i| {
                Book::new(BookKey::new(format!("/works/OL{i}W")).unwrap(), format!("{query} {i}"))
                    .with_authors(["Ada Lovelace"])
            })
            .collect();
        Ok(Page::new(page, books).with_num_found(400))
    }
}

/// Every page fails.
struct DownFetcher;

impl PageFetcher for DownFetcher {
    fn fetch(&self, _query: &str, _page: PageNumber) -> Result<Page, NetworkError> {
        Err(NetworkError::new("dns error: no such host"))
    }
}

fn app(fetcher: Arc<dyn PageFetcher>) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    TuiApp::with_terminal(terminal, fetcher, &ResolvedConfig::default(), Theme::default())
}

fn settle(app: &mut TuiApp<TestBackend>) {
    for _ in 0..400 {
        app.tick(Instant::now());
        if app.fetches_in_flight() == 0 {
            return;
        }
        thread::sleep(Duration::from_millis(5));
    }
    panic!("fetches did not settle");
}

fn press(app: &mut TuiApp<TestBackend>, ch: char) -> bool {
    app.handle_event(
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
        Instant::now(),
    )
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn first_page_failure_shows_error_panel() {
    let mut app = app(Arc::new(DownFetcher));
    settle(&mut app);
    app.draw().unwrap();

    let screen = screen(&app);
    assert!(screen.contains("Error fetching books."), "{screen}");
    assert!(screen.contains("dns error: no such host"));
    assert!(screen.contains("Press r to retry"));
}

#[test]
fn later_page_failure_keeps_cards_and_retries() {
    let fetcher = Arc::new(FlakyFetcher {
        broken: AtomicBool::new(true),
    });
    let mut app = app(fetcher.clone());
    settle(&mut app);

    // Four books fill one row: the first frame already reaches the end.
    app.draw().unwrap();
    settle(&mut app);
    app.draw().unwrap();

    let failed = screen(&app);
    assert!(failed.contains("science 0"), "{failed}");
    assert!(failed.contains("Ada Lovelace"));
    assert!(!failed.contains("Error fetching books."));
    assert!(failed.contains("page 2 failed"));

    fetcher.broken.store(false, Ordering::SeqCst);
    assert!(!press(&mut app, 'r'));
    settle(&mut app);
    app.draw().unwrap();

    let recovered = screen(&app);
    assert!(recovered.contains("science 4"), "{recovered}");
    assert!(!recovered.contains("failed"));
}

#[test]
fn quitting_from_the_grid() {
    let mut app = app(Arc::new(DownFetcher));
    assert!(press(&mut app, 'q'));
}
