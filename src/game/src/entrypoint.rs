use std::io::BufRead;

use agent::Opponent;
use common::{message::game::MatchEvent, utility::create_shutdown_channel};
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::mpsc,
    task::JoinHandle,
};
use tracing::{debug, error, info};

use super::config::GameConfig;
use super::model::external::{render, BANNER};
use super::service::game_thread::{DriverError, MatchDriver, MatchSummary};

/// Play one match on the terminal.
pub async fn play(config: GameConfig) -> Result<MatchSummary, DriverError> {
    info!("Seed: {:?}", config.seed);
    let driver = MatchDriver::new(Opponent::random(config.seed)?);
    let mut shutdown_receiver = create_shutdown_channel();
    let (to_game_sender, to_game_receiver) = mpsc::channel::<String>(100);
    let (to_user_sender, to_user_receiver) = mpsc::channel::<MatchEvent>(100);

    // Stdin reads can't be cancelled, so they get a plain thread the
    // runtime doesn't wait on at exit
    std::thread::spawn(move || forward_lines(std::io::stdin().lock(), to_game_sender));

    let printer_handle: JoinHandle<()> =
        tokio::spawn(print_events(tokio::io::stdout(), to_user_receiver));

    let summary = driver
        .run(&mut shutdown_receiver, to_game_receiver, to_user_sender)
        .await;

    // Sender is gone, printer drains what is left and exits
    if let Err(e) = printer_handle.await {
        error!("Printer exited non-gracefully: {}", e);
    }
    summary
}

/// Forward raw lines to the match. Bytes that aren't UTF-8 are passed on
/// lossily so the validator can reject them like any other bad move.
fn forward_lines<R: BufRead>(mut reader: R, to_game: mpsc::Sender<String>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(|c: char| c == '\n' || c == '\r')
            .to_owned();
        if to_game.blocking_send(line).is_err() {
            break;
        }
    }
    debug!("Stopped reading stdin");
}

async fn print_events<W>(mut out: W, mut from_game: mpsc::Receiver<MatchEvent>)
where
    W: AsyncWrite + Unpin,
{
    if let Err(e) = write_flush(&mut out, BANNER).await {
        error!("Failed to write to terminal: {}", e);
        return;
    }
    while let Some(event) = from_game.recv().await {
        if let Err(e) = write_flush(&mut out, &render(&event)).await {
            error!("Failed to write to terminal: {}", e);
            return;
        }
    }
}

async fn write_flush<W>(out: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes()).await?;
    out.flush().await
}

#[cfg(test)]
mod tests {
    use common::model::game::{MatchResult, Move, Outcome};

    use std::io::Cursor;

    use super::*;

    #[test]
    fn non_utf8_line_is_forwarded_not_fatal() {
        let (sender, mut receiver) = mpsc::channel(8);
        forward_lines(Cursor::new(b"rock\n\xffrock\r\npaper".to_vec()), sender);
        assert_eq!(receiver.try_recv().unwrap(), "rock");
        assert_eq!(receiver.try_recv().unwrap(), "\u{FFFD}rock");
        assert_eq!(receiver.try_recv().unwrap(), "paper");
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn lossy_line_becomes_a_wasted_round() {
        let (sender, mut receiver) = mpsc::channel(8);
        forward_lines(Cursor::new(b"\xffrock\n".to_vec()), sender);
        let line = receiver.try_recv().unwrap();
        assert_eq!(
            common::validation::validate_move(&line, false),
            Err(common::validation::RejectionReason::UnrecognizedMove)
        );
    }

    #[tokio::test]
    async fn prints_banner_then_events() {
        let (sender, receiver) = mpsc::channel(8);
        sender
            .send(MatchEvent::PendingMove { round: 1 })
            .await
            .unwrap();
        sender
            .send(MatchEvent::RoundResult {
                round: 1,
                user_move: Move::Rock,
                bot_move: Move::Scissors,
                outcome: Outcome::UserWins,
                user_score: 1,
                bot_score: 0,
            })
            .await
            .unwrap();
        sender
            .send(MatchEvent::MatchOver {
                result: MatchResult::UserWinsMatch,
                user_score: 1,
                bot_score: 0,
            })
            .await
            .unwrap();
        drop(sender);

        let mut out: Vec<u8> = Vec::new();
        print_events(&mut out, receiver).await;
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(BANNER));
        assert!(text.contains("\nRound 1\nYour move: You played: rock\n"));
        assert!(text.contains("Result: You win this round"));
        assert!(text.ends_with("Final Result: You win the game\n"));
    }
}
