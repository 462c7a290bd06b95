//! Traffic, lane geometry, collision boxes and scenery

use rand::rngs::StdRng;
use rand::SeedableRng;

use lane_racer::simulation::{
    CollisionJudge, GameState, InputVector, Lane, Position, Rect, SceneryField, SimConfig,
    SimWorld, SpriteSize, TrafficSimulator, FIELD_HEIGHT, FIELD_WIDTH, TREE_SHEET,
    VEHICLE_COUNT, VEHICLE_MAX_SPEED, VEHICLE_MIN_SPEED,
};

#[test]
fn test_lane_centers() {
    let width = 480.0;
    let sprite = 16.0;
    assert!((Lane::Left.sprite_x(width, sprite) - (160.0 + 480.0 / 18.0 - 8.0)).abs() < 1e-4);
    assert_eq!(Lane::Center.sprite_x(width, sprite), 232.0);
    assert!((Lane::Right.sprite_x(width, sprite) - (320.0 - 480.0 / 18.0 - 8.0)).abs() < 1e-4);
}

#[test]
fn test_lane_numbers_round_trip() {
    for lane in Lane::ALL {
        assert_eq!(Lane::from_number(lane.number()), Some(lane));
    }
    assert_eq!(Lane::from_number(0), None);
    assert_eq!(Lane::from_number(4), None);
}

#[test]
fn test_rect_overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(2.0, 2.0, 2.0, 2.0)));
    // Shared edges do not count
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(20.0, 20.0, 1.0, 1.0)));
}

#[test]
fn test_initial_traffic_is_above_the_field() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(3);
    let traffic = TrafficSimulator::new(&config, &mut rng);

    assert_eq!(traffic.vehicles.len(), VEHICLE_COUNT);
    for (index, vehicle) in traffic.vehicles.iter().enumerate() {
        assert_eq!(vehicle.sprite_index, index);
        assert!(vehicle.position.y <= -traffic.sprite().height);
        assert!(vehicle.position.y >= -FIELD_HEIGHT);
        assert!((VEHICLE_MIN_SPEED..=VEHICLE_MAX_SPEED).contains(&vehicle.speed));
        assert_eq!(vehicle.position.x, traffic.lane_x(vehicle.lane));
    }
}

#[test]
fn test_vehicle_hitbox_is_one_sheet_frame() {
    let config = SimConfig::default();
    let sprite = config.vehicle_sprite();
    assert_eq!(sprite, SpriteSize::new(16.0, 24.0));
}

#[test]
fn test_vehicle_moves_by_its_speed_per_frame() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut traffic = TrafficSimulator::new(&config, &mut rng);
    traffic.vehicles[0].position.y = 100.0;
    traffic.vehicles[0].speed = 7;

    traffic.advance(&mut rng);

    assert_eq!(traffic.vehicles[0].position.y, 107.0);
}

#[test]
fn test_vehicle_respawns_after_leaving_field() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut traffic = TrafficSimulator::new(&config, &mut rng);

    for _ in 0..50 {
        let vehicle = &mut traffic.vehicles[2];
        vehicle.position.y = FIELD_HEIGHT - 1.0;
        vehicle.speed = 6;

        let respawns = traffic.advance(&mut rng);

        let vehicle = &traffic.vehicles[2];
        assert!(respawns.iter().any(|r| r.vehicle == 2));
        assert_eq!(vehicle.position.y, -traffic.sprite().height);
        assert!((VEHICLE_MIN_SPEED..=VEHICLE_MAX_SPEED).contains(&vehicle.speed));
        assert!((1..=3).contains(&vehicle.lane.number()));
        assert_eq!(
            vehicle.position.x,
            vehicle.lane.sprite_x(FIELD_WIDTH, traffic.sprite().width)
        );
    }
}

#[test]
fn test_vehicle_at_field_bottom_does_not_respawn() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(13);
    let mut traffic = TrafficSimulator::new(&config, &mut rng);
    traffic.vehicles[1].position.y = FIELD_HEIGHT - 6.0;
    traffic.vehicles[1].speed = 6;

    let respawns = traffic.advance(&mut rng);

    assert!(!respawns.iter().any(|r| r.vehicle == 1));
    assert_eq!(traffic.vehicles[1].position.y, FIELD_HEIGHT);
}

#[test]
fn test_respawns_use_every_lane_and_speed() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(17);
    let mut traffic = TrafficSimulator::new(&config, &mut rng);
    let mut lanes = std::collections::HashSet::new();
    let mut speeds = std::collections::HashSet::new();

    for _ in 0..500 {
        traffic.vehicles[0].position.y = FIELD_HEIGHT;
        for respawn in traffic.advance(&mut rng) {
            lanes.insert(respawn.lane);
            speeds.insert(respawn.speed);
        }
    }

    assert_eq!(lanes.len(), 3);
    assert_eq!(speeds.len(), (VEHICLE_MAX_SPEED - VEHICLE_MIN_SPEED + 1) as usize);
}

#[test]
fn test_judge_nudges_once_per_overlapping_vehicle() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(19);
    let mut traffic = TrafficSimulator::new(&config, &mut rng);
    let mut state = GameState::new(&config);
    let player = state.player.position;

    for vehicle in &mut traffic.vehicles {
        vehicle.position = Position::new(-500.0, -500.0);
    }
    // Two stacked vehicles: the first nudge moves the player into the second
    traffic.vehicles[0].position = player;
    traffic.vehicles[1].position = Position::new(player.x, player.y - 14.0);

    let contacts = CollisionJudge::new(config.nudge_margin).judge(&mut state, &traffic);

    assert_eq!(contacts.len(), 2);
    assert!(contacts[0].hit);
    assert!(!contacts[1].hit);
    assert_eq!(state.lives, config.starting_lives - 1);
    assert_eq!(state.player.position.y, player.y - 28.0);
}

#[test]
fn test_tree_placement() {
    let config = SimConfig::default();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let scenery = SceneryField::new(&config, &mut rng);
        let count = scenery.trees.len();
        assert!(config.tree_count.contains(&count));

        for (i, tree) in scenery.trees.iter().enumerate() {
            if i < count / 2 {
                assert!(tree.position.x >= 1.0 && tree.position.x <= FIELD_WIDTH / 3.0);
            } else {
                assert!(tree.position.x >= FIELD_WIDTH * 2.0 / 3.0 && tree.position.x <= FIELD_WIDTH);
            }
            assert!(tree.position.y >= 0.0 && tree.position.y <= FIELD_HEIGHT);
            assert_eq!(tree.variant, i % 3);
        }
    }
}

#[test]
fn test_trees_scroll_and_wrap() {
    let config = SimConfig::default();
    let mut rng = StdRng::seed_from_u64(23);
    let mut scenery = SceneryField::new(&config, &mut rng);
    scenery.trees[0].position.y = 100.0;
    scenery.trees[1].position.y = FIELD_HEIGHT - 1.0;
    scenery.trees[2].position.y = FIELD_HEIGHT - 2.0;

    scenery.advance();

    assert_eq!(scenery.trees[0].position.y, 102.0);
    assert_eq!(scenery.trees[1].position.y, -TREE_SHEET.height);
    assert_eq!(scenery.trees[2].position.y, FIELD_HEIGHT);
}

#[test]
fn test_trees_never_collide() {
    let mut world = SimWorld::new_with_seed(29).expect("default config is valid");
    for vehicle in &mut world.traffic.vehicles {
        vehicle.position = Position::new(-1000.0, -100_000.0);
    }
    let tree = world.scenery.trees[0].position;
    world.state.player.position = Position::new(tree.x, tree.y + 2.0);

    world.tick(0.1, InputVector::NONE);

    assert_eq!(world.state.lives, world.config.starting_lives);
    assert!(world.state.player.vulnerable);
}

#[test]
fn test_config_validation() {
    assert!(SimConfig::default().validate().is_ok());

    let no_vehicles = SimConfig {
        vehicle_count: 0,
        ..SimConfig::default()
    };
    assert!(no_vehicles.validate().is_err());

    #[allow(clippy::reversed_empty_ranges)]
    let bad_speed = SimConfig {
        vehicle_speed: 10..=6,
        ..SimConfig::default()
    };
    assert!(bad_speed.validate().is_err());

    let no_ticks = SimConfig {
        tick_rate_hz: 0,
        ..SimConfig::default()
    };
    assert!(no_ticks.validate().is_err());
    assert!(SimWorld::with_config(no_ticks).is_err());
}

#[test]
fn test_input_vector_parsing() {
    let parsed: InputVector = "left, UP".parse().expect("valid directions");
    assert_eq!(parsed, InputVector::LEFT | InputVector::UP);
    assert!(parsed.left() && parsed.up());
    assert!(!parsed.right() && !parsed.down());

    let none: InputVector = "none".parse().expect("valid directions");
    assert!(none.is_empty());

    assert!("sideways".parse::<InputVector>().is_err());
}
