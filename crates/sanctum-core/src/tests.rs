use glam::{Vec2, Vec3};

use crate::commands::PlayerCommand;
use crate::enums::*;
use crate::input::InputState;
use crate::state::GameStateSnapshot;
use crate::types::*;
use crate::weapons::{catalog, weapon_config};

// ---- Weapon catalog ----

#[test]
fn test_catalog_in_slot_order() {
    for (i, config) in catalog().iter().enumerate() {
        assert_eq!(config.id, WeaponId::ALL[i]);
        assert_eq!(weapon_config(config.id).id, config.id);
    }
}

#[test]
fn test_catalog_values() {
    let pistol = weapon_config(WeaponId::Pistol);
    assert_eq!(pistol.damage, 35);
    assert_eq!(pistol.max_ammo, 12);
    assert!(!pistol.automatic);

    let rifle = weapon_config(WeaponId::Rifle);
    assert!((rifle.fire_interval_secs - 0.1).abs() < 1e-12);
    assert_eq!(rifle.max_ammo, 30);
    assert!(rifle.automatic);

    let shotgun = weapon_config(WeaponId::Shotgun);
    assert_eq!(shotgun.pellets, 6);

    for config in catalog() {
        assert!(config.max_ammo > 0);
        assert!(config.pellets >= 1);
        assert!(config.fire_interval_secs > 0.0);
        assert!(config.reload_secs > 0.0);
    }
}

#[test]
fn test_slot_mapping() {
    assert_eq!(WeaponId::from_slot(1), Some(WeaponId::Pistol));
    assert_eq!(WeaponId::from_slot(5), Some(WeaponId::Laser));
    assert_eq!(WeaponId::from_slot(0), None);
    assert_eq!(WeaponId::from_slot(6), None);
}

// ---- Input ----

#[test]
fn test_intent_normalized_on_diagonal() {
    let input = InputState {
        forward: true,
        right: true,
        ..Default::default()
    };
    let intent = input.intent();
    assert!((intent.length() - 1.0).abs() < 1e-6);
    assert!(intent.x > 0.0 && intent.y > 0.0);
}

#[test]
fn test_opposing_keys_cancel() {
    let input = InputState {
        forward: true,
        back: true,
        ..Default::default()
    };
    assert_eq!(input.intent(), Vec2::ZERO);
}

// ---- Geometry helpers ----

#[test]
fn test_yaw_zero_faces_negative_z() {
    let dir = look_direction(0.0, 0.0);
    assert!((dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    let (forward, right) = ground_basis(0.0);
    assert!((forward - Vec2::new(0.0, -1.0)).length() < 1e-6);
    assert!((right - Vec2::new(1.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_yaw_towards_matches_look_direction() {
    let from = Vec2::new(3.0, -2.0);
    let to = Vec2::new(-7.0, 11.0);
    let yaw = yaw_towards(from, to);
    let dir = ground(look_direction(yaw, 0.0));
    let expected = (to - from).normalize();
    assert!((dir - expected).length() < 1e-5);
}

#[test]
fn test_sim_time_advance() {
    let mut t = SimTime::default();
    for _ in 0..60 {
        t.advance(1.0 / 60.0);
    }
    assert_eq!(t.tick, 60);
    assert!((t.elapsed_secs - 1.0).abs() < 1e-9);
}

// ---- Wire shape ----

#[test]
fn test_command_tagged_json() {
    let json = serde_json::to_string(&PlayerCommand::SwitchWeapon {
        weapon: WeaponId::Sniper,
    })
    .unwrap();
    assert_eq!(json, r#"{"type":"SwitchWeapon","weapon":"Sniper"}"#);

    let back: PlayerCommand = serde_json::from_str(r#"{"type":"SelectSlot","slot":3}"#).unwrap();
    assert!(matches!(back, PlayerCommand::SelectSlot { slot: 3 }));
}

#[test]
fn test_default_snapshot_is_menu() {
    let snap = GameStateSnapshot::default();
    assert_eq!(snap.phase, GamePhase::Menu);
    assert!(snap.enemies.is_empty());
    assert!(!snap.hit_marker_visible());
}
