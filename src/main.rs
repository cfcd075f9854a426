mod build_info;
mod constants;
mod scene;
mod score_manager;
mod ui;

use chrono::Utc;
use constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICK_INTERVAL_MS};
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use scene::{advance, handle_tap, GameScene, Phase};
use score_manager::{BestScore, ScoreManager};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "tappy {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Tappy - Terminal Flappy Bird\n");
                println!("Usage: tappy [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("In game: Space/Up/Enter to tap, q or Esc to quit.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'tappy --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load the persisted best score before entering the alternate screen
    let score_manager = ScoreManager::new()?;
    let mut scene = GameScene::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
    if score_manager.score_exists() {
        if let Ok(best) = score_manager.load() {
            scene.best_score = best.score;
        }
    }
    let mut saved_best = scene.best_score;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut rng = rand::thread_rng();
    let tick = Duration::from_millis(TICK_INTERVAL_MS);
    let dt = TICK_INTERVAL_MS as f64 / 1000.0;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &scene))?;

        // Input: every key event is either a tap or a quit
        if event::poll(Duration::from_millis(5))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => {
                        handle_tap(&mut scene);
                    }
                    _ => {}
                }
            }
        }

        // Fixed-interval scene update
        if last_tick.elapsed() >= tick {
            let phase_before = scene.phase;
            advance(&mut scene, dt, &mut rng);
            last_tick = Instant::now();

            // Persist a new best when a run ends; a failed write never
            // interrupts play
            if phase_before == Phase::Running
                && scene.phase == Phase::Over
                && scene.best_score > saved_best
            {
                let record = BestScore {
                    score: scene.best_score,
                    recorded_at: Utc::now().timestamp(),
                };
                if score_manager.save(&record).is_ok() {
                    saved_best = scene.best_score;
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
