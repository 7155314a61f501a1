use std::time::Duration;

use simon_core::{FlashTiming, Move, RngOracle};
use simon_runtime::{Event, FlashCue, Runtime, RuntimeConfig, Topic};
use tokio::sync::broadcast;

struct AlwaysBlue;

impl RngOracle for AlwaysBlue {
    fn next_u32(&self, _seed: u64) -> u32 {
        1
    }
}

fn drain_cues(rx: &mut broadcast::Receiver<Event>) -> Vec<FlashCue> {
    let mut cues = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let Event::Flash(cue) = event {
            cues.push(cue);
        }
    }
    cues
}

async fn blue_runtime() -> Runtime {
    let config = RuntimeConfig::default().with_flash_timing(FlashTiming::default());
    Runtime::builder()
        .config(config)
        .rng(AlwaysBlue)
        .build()
        .await
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn replay_lights_each_move_then_reverts() {
    let runtime = blue_runtime().await;
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::Flash);

    let game = handle.start_game().await.unwrap();
    handle.press(Move::Blue).await.unwrap();

    tokio::time::sleep(Duration::from_secs(5)).await;
    let cues = drain_cues(&mut rx);

    // Round 1 replay, then round 2 replay.
    let summary: Vec<_> = cues.iter().map(|c| (c.round, c.index, c.lit)).collect();
    assert!(summary.contains(&(1, 0, true)));
    assert!(summary.contains(&(2, 0, true)));
    assert!(summary.contains(&(2, 1, true)));
    assert!(summary.contains(&(2, 1, false)));
    assert_eq!(cues.len(), 6);
    assert!(cues.iter().all(|c| c.game == game && c.mv == Move::Blue));

    // Each pad lights before it reverts.
    let lit_at = summary.iter().position(|&s| s == (2, 1, true)).unwrap();
    let off_at = summary.iter().position(|&s| s == (2, 1, false)).unwrap();
    assert!(lit_at < off_at);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn new_game_cancels_pending_flashes() {
    let runtime = blue_runtime().await;
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::Flash);

    let first = handle.start_game().await.unwrap();
    // One press clears round 1, two more clear round 2.
    for _ in 0..3 {
        handle.press(Move::Blue).await.unwrap();
    }
    assert_eq!(handle.query_state().await.unwrap().round, 3);

    // Round 3 is replaying; restart before its later flashes fire.
    let second = handle.start_game().await.unwrap();
    assert_ne!(first, second);

    tokio::time::sleep(Duration::from_secs(10)).await;
    let cues = drain_cues(&mut rx);

    assert!(
        !cues
            .iter()
            .any(|c| c.game == first && c.round == 3 && c.index > 0),
        "stale flashes leaked: {cues:?}"
    );
    assert!(cues.iter().any(|c| c.game == second && c.lit));
    assert!(cues.iter().any(|c| c.game == second && !c.lit));

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn shutdown_cancels_pending_flashes() {
    let runtime = blue_runtime().await;
    let handle = runtime.handle();
    let mut rx = handle.subscribe(Topic::Flash);

    handle.start_game().await.unwrap();
    handle.press(Move::Blue).await.unwrap();
    runtime.shutdown().await.unwrap();

    tokio::time::sleep(Duration::from_secs(10)).await;
    let cues = drain_cues(&mut rx);
    assert!(!cues.iter().any(|c| c.round == 2 && c.index == 1));
}
