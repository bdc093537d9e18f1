use rc_core::{
    generate, generate_into, to_grid_key, GenerationConfig, GridPosition, LevelGenerator,
    PlacedRoom, PlacementKind, RoomSize, WorldPosition,
};

fn adjacent(a: &PlacedRoom, b: &PlacedRoom, size: RoomSize) -> bool {
    size.offsets()
        .iter()
        .any(|&offset| to_grid_key(a.world + offset, size) == b.position)
}

fn adjacent_to_any(room: &PlacedRoom, earlier: &[PlacedRoom], size: RoomSize) -> bool {
    earlier.iter().any(|other| adjacent(other, room, size))
}

#[test]
fn test_single_room_scenario() {
    let config = GenerationConfig::builder()
        .variants(["A"])
        .room_count(1)
        .seed(99)
        .build()
        .unwrap();

    let rooms = generate(&config);
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].variant, 0);
    assert_eq!(rooms[0].position, GridPosition::new(0, 0));
}

#[test]
fn test_no_branching_scenario() {
    let size = RoomSize::default();
    for seed in 0..10 {
        let config = GenerationConfig::builder()
            .variants(["a", "b"])
            .room_count(5)
            .dead_end_probability(0.0)
            .loop_probability(0.0)
            .seed(seed)
            .build()
            .unwrap();

        let rooms = generate(&config);
        assert_eq!(rooms.len(), 5);
        assert_eq!(rooms[0].kind, PlacementKind::Origin);
        for (i, room) in rooms.iter().enumerate().skip(1) {
            assert_eq!(room.kind, PlacementKind::Extension);
            assert!(adjacent_to_any(room, &rooms[..i], size), "seed {seed}: room {i} detached");
        }
    }
}

#[test]
fn test_second_room_cannot_dead_end() {
    let size = RoomSize::default();
    for seed in 0..10 {
        let config = GenerationConfig::builder()
            .variants(["a"])
            .room_count(3)
            .dead_end_probability(1.0)
            .loop_probability(0.0)
            .seed(seed)
            .build()
            .unwrap();

        let rooms = generate(&config);
        assert_eq!(rooms.len(), 3);
        assert_eq!(rooms[1].kind, PlacementKind::Extension);
        assert!(adjacent(&rooms[0], &rooms[1], size));
        assert_eq!(rooms[2].kind, PlacementKind::DeadEnd);
        assert!(adjacent_to_any(&rooms[2], &rooms[..2], size));
    }
}

#[test]
fn test_empty_catalog_scenario() {
    let config = GenerationConfig::builder()
        .variants(Vec::<String>::new())
        .room_count(5)
        .build()
        .unwrap();

    let mut received: Vec<PlacedRoom> = Vec::new();
    let level = generate_into(&config, &mut received);
    assert!(level.is_empty());
    assert!(received.is_empty());
}

#[test]
fn test_loops_appear_with_high_loop_probability() {
    let config = GenerationConfig::builder()
        .variants(["a", "b", "c"])
        .room_count(60)
        .dead_end_probability(0.5)
        .loop_probability(1.0)
        .seed(17)
        .build()
        .unwrap();

    let level = LevelGenerator::new(config).run();
    assert!(level.stats().loops > 0);
}

#[test]
fn test_dead_ends_stay_off_the_path_queue() {
    let config = GenerationConfig::builder()
        .room_count(20)
        .dead_end_probability(1.0)
        .loop_probability(0.0)
        .seed(5)
        .build()
        .unwrap();

    let mut generator = LevelGenerator::new(config);
    while !generator.is_finished() {
        generator.step();
    }
    // Only the second room is an extension; everything after is a dead end
    assert_eq!(generator.history().path_queue().len(), 1);
}

#[test]
fn test_fractional_room_size_keys_truncate() {
    let config = GenerationConfig::builder()
        .room_count(25)
        .room_size(2.5, 4.0)
        .seed(8)
        .build()
        .unwrap();
    let size = config.room_size();

    for room in generate(&config) {
        assert_eq!(room.position, to_grid_key(room.world, size));
        assert_eq!(room.position.z % 4, 0);
    }
}

#[test]
fn test_variants_cover_catalog() {
    let config = GenerationConfig::builder()
        .variants(["a", "b", "c", "d"])
        .room_count(80)
        .seed(3)
        .build()
        .unwrap();

    let rooms = generate(&config);
    assert!(rooms.iter().all(|r| r.variant < 4));
    for variant in 0..4 {
        assert!(rooms.iter().any(|r| r.variant == variant), "variant {variant} never used");
    }
}

#[test]
fn test_known_seed_layout() {
    use PlacementKind::*;

    let config = GenerationConfig::from_json(
        r#"{
            "variants": ["corridor", "hall", "crypt"],
            "room_count": 12,
            "seed": 2024,
            "dead_end_probability": 0.3,
            "loop_probability": 0.15,
            "room_size": { "x": 10.0, "z": 10.0 }
        }"#,
    )
    .unwrap();

    let expected: [(usize, (i32, i32), PlacementKind); 12] = [
        (0, (0, 0), Origin),
        (1, (0, 10), Extension),
        (1, (-10, 10), DeadEnd),
        (0, (-10, 0), Extension),
        (2, (-10, -10), Extension),
        (1, (-10, -20), Extension),
        (2, (-20, -10), DeadEnd),
        (1, (-10, -30), DeadEnd),
        (2, (0, -30), Extension),
        (1, (0, -10), DeadEnd),
        (1, (0, 20), Extension),
        (2, (-20, 10), Extension),
    ];

    let rooms = generate(&config);
    let actual: Vec<_> = rooms
        .iter()
        .map(|r| (r.variant, (r.position.x, r.position.z), r.kind))
        .collect();
    assert_eq!(actual, expected);
    assert_eq!(generate(&config), rooms);
}

#[test]
fn test_known_seed_layout_with_loops() {
    use PlacementKind::*;

    let config = GenerationConfig::builder()
        .variants(["a", "b", "c"])
        .room_count(15)
        .seed(1)
        .dead_end_probability(0.2)
        .loop_probability(0.5)
        .room_size(2.5, 4.0)
        .build()
        .unwrap();

    let expected: [(usize, (f32, f32), (i32, i32), PlacementKind); 15] = [
        (1, (0.0, 0.0), (0, 0), Origin),
        (0, (2.5, 0.0), (2, 0), Extension),
        (2, (-2.5, 0.0), (-2, 0), Extension),
        (2, (0.0, 4.0), (0, 4), DeadEnd),
        (0, (0.0, -4.0), (0, -4), DeadEnd),
        (2, (2.5, -4.0), (2, -4), Loop),
        (2, (-2.5, -4.0), (-2, -4), Loop),
        (0, (2.5, 4.0), (2, 4), Loop),
        (0, (-2.5, 4.0), (-2, 4), Loop),
        (0, (0.0, 8.0), (0, 8), Extension),
        (2, (-5.0, 4.0), (-5, 4), DeadEnd),
        (1, (-5.0, 0.0), (-5, 0), Loop),
        (2, (-2.5, -8.0), (-2, -8), Extension),
        (2, (0.0, -8.0), (0, -8), Extension),
        (2, (-2.5, 8.0), (-2, 8), Extension),
    ];

    let rooms = generate(&config);
    assert_eq!(rooms.len(), expected.len());
    for (room, &(variant, (wx, wz), (x, z), kind)) in rooms.iter().zip(&expected) {
        assert_eq!(room.variant, variant);
        assert_eq!(room.world, WorldPosition::new(wx, wz));
        assert_eq!(room.position, GridPosition::new(x, z));
        assert_eq!(room.kind, kind);
    }
}

#[test]
fn test_room_size_below_one_collapses() {
    // Every neighbour of the origin truncates back onto key (0, 0)
    for seed in 0..10 {
        let config = GenerationConfig::builder()
            .room_count(5)
            .seed(seed)
            .room_size(0.5, 0.5)
            .build()
            .unwrap();

        let level = LevelGenerator::new(config).run();
        assert_eq!(level.len(), 1);
        assert_eq!(level.stats().skipped, 4);
    }
}
