use portal_dash::collision::*;
use portal_dash::config::GameConfig;
use portal_dash::entities::*;

fn config() -> GameConfig {
    GameConfig::for_playfield(800.0, 600.0)
}

/// Player parked at (100, 200) with a 100x100 box.
fn session() -> (GameSession, GameConfig) {
    let cfg = config();
    let mut s = GameSession::new(&cfg);
    s.player.rect = Rect::new(100.0, 200.0, 100.0, 100.0);
    (s, cfg)
}

fn coin_at(x: f32, y: f32) -> Coin {
    Coin {
        rect: Rect::new(x, y, 50.0, 50.0),
        frame: 0,
        collected: false,
    }
}

fn key_at(x: f32, y: f32) -> Key {
    Key {
        rect: Rect::new(x, y, 50.0, 50.0),
        collected: false,
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[test]
fn overlapping_obstacle_is_fatal() {
    let (mut s, cfg) = session();
    s.obstacles.push(Obstacle {
        rect: Rect::new(150.0, 250.0, 100.0, 100.0),
    });
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Fatal);
    assert_eq!(report.events, vec![CollisionEvent::ObstacleHit]);
    assert_eq!(s.obstacles.len(), 1); // fatal, not removing
}

#[test]
fn touching_obstacle_is_harmless() {
    let (mut s, cfg) = session();
    s.obstacles.push(Obstacle {
        rect: Rect::new(200.0, 200.0, 100.0, 100.0),
    });
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Continue);
    assert!(report.events.is_empty());
}

#[test]
fn coins_are_checked_before_obstacles() {
    let (mut s, cfg) = session();
    s.coins.push(coin_at(120.0, 220.0));
    s.obstacles.push(Obstacle {
        rect: Rect::new(150.0, 250.0, 100.0, 100.0),
    });
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(
        report.events,
        vec![CollisionEvent::CoinCollected, CollisionEvent::ObstacleHit]
    );
    assert_eq!(s.coins_collected, 1);
    assert!(s.coins.is_empty());
}

#[test]
fn obstacle_short_circuits_keys() {
    let (mut s, cfg) = session();
    s.coins_collected = cfg.coin_quota;
    s.obstacles.push(Obstacle {
        rect: Rect::new(150.0, 250.0, 100.0, 100.0),
    });
    s.keys.push(key_at(120.0, 220.0));
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Fatal);
    assert!(!s.key_collected);
    assert!(s.portal.is_none());
    assert_eq!(s.keys.len(), 1);
}

#[test]
fn fatal_beats_simultaneous_win() {
    let (mut s, cfg) = session();
    s.key_collected = true;
    s.portal = Some(Portal::open(&cfg)); // (650, 225)
    s.player.rect = Rect::new(600.0, 250.0, 100.0, 100.0);
    s.obstacles.push(Obstacle {
        rect: Rect::new(620.0, 260.0, 100.0, 100.0),
    });
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Fatal);
    assert!(!report.events.contains(&CollisionEvent::PortalReached));
}

// ── Coins ─────────────────────────────────────────────────────────────────────

#[test]
fn collected_coin_removed_in_same_phase() {
    let (mut s, cfg) = session();
    s.coins.push(coin_at(120.0, 220.0));
    s.coins.push(coin_at(600.0, 10.0));
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.events, vec![CollisionEvent::CoinCollected]);
    assert_eq!(report.outcome, Outcome::Continue);
    assert_eq!(s.coins_collected, 1);
    assert_eq!(s.coins.len(), 1);
    assert_eq!(s.coins[0].rect.x, 600.0);
    assert!(s.coins.iter().all(|c| !c.collected));
}

#[test]
fn several_coins_in_one_tick() {
    let (mut s, cfg) = session();
    s.coins.push(coin_at(100.0, 200.0));
    s.coins.push(coin_at(150.0, 250.0));
    s.coins.push(coin_at(120.0, 210.0));
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.events.len(), 3);
    assert_eq!(s.coins_collected, 3);
    assert!(s.coins.is_empty());
}

#[test]
fn coin_count_saturates_at_quota() {
    let (mut s, cfg) = session();
    s.coins_collected = cfg.coin_quota - 1;
    s.coins.push(coin_at(100.0, 200.0));
    s.coins.push(coin_at(150.0, 250.0));
    collision_phase(&mut s, &cfg);
    assert_eq!(s.coins_collected, cfg.coin_quota);
    assert!(s.coins.is_empty());
}

// ── Keys & portal ─────────────────────────────────────────────────────────────

#[test]
fn key_opens_portal() {
    let (mut s, cfg) = session();
    s.keys.push(key_at(120.0, 220.0));
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(
        report.events,
        vec![CollisionEvent::KeyCollected, CollisionEvent::PortalOpened]
    );
    assert_eq!(report.outcome, Outcome::Continue);
    assert!(s.key_collected);
    assert!(s.keys.is_empty());
    assert_eq!(
        s.portal.as_ref().map(|p| p.rect),
        Some(Rect::new(650.0, 225.0, 150.0, 150.0))
    );
}

#[test]
fn portal_created_only_once() {
    let (mut s, cfg) = session();
    s.keys.push(key_at(120.0, 220.0));
    s.keys.push(key_at(140.0, 240.0));
    let report = collision_phase(&mut s, &cfg);
    let opened = report
        .events
        .iter()
        .filter(|e| **e == CollisionEvent::PortalOpened)
        .count();
    assert_eq!(opened, 1);

    let portal = s.portal.clone();
    s.keys.push(key_at(120.0, 220.0));
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.events, vec![CollisionEvent::KeyCollected]);
    assert_eq!(s.portal, portal);
}

#[test]
fn reaching_portal_wins() {
    let (mut s, cfg) = session();
    s.key_collected = true;
    s.portal = Some(Portal::open(&cfg));
    s.player.rect = Rect::new(600.0, 250.0, 100.0, 100.0);
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.events, vec![CollisionEvent::PortalReached]);
}

#[test]
fn key_and_portal_in_same_tick_wins() {
    let (mut s, cfg) = session();
    s.player.rect = Rect::new(600.0, 250.0, 100.0, 100.0);
    s.keys.push(key_at(620.0, 260.0));
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(
        report.events,
        vec![
            CollisionEvent::KeyCollected,
            CollisionEvent::PortalOpened,
            CollisionEvent::PortalReached,
        ]
    );
    assert_eq!(report.outcome, Outcome::Won);
}

#[test]
fn portal_ignored_without_key_flag() {
    let (mut s, cfg) = session();
    s.portal = Some(Portal::open(&cfg));
    s.player.rect = Rect::new(600.0, 250.0, 100.0, 100.0);
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Continue);
}

#[test]
fn nothing_nearby_means_nothing_happens() {
    let (mut s, cfg) = session();
    s.coins.push(coin_at(500.0, 500.0));
    s.obstacles.push(Obstacle {
        rect: Rect::new(500.0, 0.0, 100.0, 100.0),
    });
    let before = s.clone();
    let report = collision_phase(&mut s, &cfg);
    assert_eq!(report.outcome, Outcome::Continue);
    assert!(report.events.is_empty());
    assert_eq!(s, before);
}
