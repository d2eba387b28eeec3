use std::collections::HashMap;

use proptest::prelude::*;
use tgl_core::map::{
    AreaSkeleton, ContentKind, ContentTables, Direction, GenericRoom, Grid, Layout, Pos, RoomType,
    build_hub_ring, entrance_candidates, open_entrances,
};
use tgl_core::{AREA_COUNT, GameRng, MapConfig, MapError, MapGenerator, STARTING_TEXT_ROOM};

fn start() -> Pos {
    Pos::new(STARTING_TEXT_ROOM.0, STARTING_TEXT_ROOM.1)
}

fn built_grid(seed: u64) -> Grid {
    let generator = MapGenerator::default();
    let mut rng = GameRng::new(seed);
    let (_, grid) = generator.build_grid(&mut rng).expect("default config builds");
    grid
}

/// How often each content id of a room type appears
fn content_counts(grid: &Grid, room_type: RoomType) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for (_, room) in grid.iter() {
        if room.accessible && room.room_type == room_type {
            *counts.entry(room.content_id).or_insert(0) += 1;
        }
    }
    counts
}

#[test]
fn test_every_room_reachable_from_start() {
    for seed in [1, 42, 123, 999, 2026] {
        let grid = built_grid(seed);
        let reached = grid.reachable_from(start());
        assert_eq!(
            reached.len(),
            grid.accessible_count(),
            "seed {}: unreachable rooms\n{}",
            seed,
            grid.access_map()
        );
    }
}

#[test]
fn test_same_seed_same_map() {
    let generator = MapGenerator::default();
    for seed in [7, 77, 777] {
        let first = generator.generate(&mut GameRng::new(seed));
        let second = generator.generate(&mut GameRng::new(seed));
        assert_eq!(first, second, "seed {}", seed);
    }
    let a = built_grid(5);
    let b = built_grid(6);
    assert_ne!(a, b);
}

#[test]
fn test_content_placed_exactly_once() {
    let tables = ContentTables::default();
    for seed in [3, 33, 333] {
        let grid = built_grid(seed);

        let corridors = content_counts(&grid, RoomType::Corridor);
        assert_eq!(corridors.len(), 21, "seed {}", seed);
        for id in 1..=21u8 {
            assert_eq!(corridors.get(&id), Some(&1), "seed {} corridor {}", seed, id);
        }

        let bosses = content_counts(&grid, RoomType::Miniboss);
        for area in 0..AREA_COUNT as u8 {
            for id in ContentTables::minibosses_for(area) {
                assert_eq!(bosses.get(&id), Some(&1), "seed {} miniboss {:#04X}", seed, id);
            }
        }

        let items = content_counts(&grid, RoomType::Item);
        for &id in tables.items.iter().flatten() {
            assert_eq!(items.get(&id), Some(&1), "seed {} item {:#04X}", seed, id);
        }
        assert_eq!(items.len(), 34);

        let singles = content_counts(&grid, RoomType::SingleShop);
        assert_eq!(singles.len(), 5);
        let multis = content_counts(&grid, RoomType::MultiShop);
        assert_eq!(multis.len(), 5);
        assert!(multis.values().all(|&n| n == 1));
    }
}

#[test]
fn test_content_stays_in_its_area() {
    let tables = ContentTables::default();
    let grid = built_grid(11);
    for (_, room) in grid.iter() {
        if room.room_type == RoomType::Item {
            let area = room.area as u8;
            assert!(tables.items_for(area).contains(&room.content_id));
        }
        if room.room_type == RoomType::Miniboss {
            let area = room.area as u8;
            assert!(ContentTables::minibosses_for(area).contains(&room.content_id));
        }
    }
}

#[test]
fn test_exits_are_symmetric() {
    for seed in [2, 22, 222] {
        let grid = built_grid(seed);
        // The default config adds no one-way extras
        assert!(grid.one_way_exits.is_empty());
        for (pos, room) in grid.iter() {
            if !room.accessible {
                assert!(room.exits.is_empty(), "seed {} {:?}", seed, pos);
                continue;
            }
            for dir in Direction::ALL {
                if !room.has_exit(dir) {
                    continue;
                }
                let (next, other) = grid
                    .neighbor(pos, dir)
                    .unwrap_or_else(|| panic!("seed {} exit off grid at {:?}", seed, pos));
                assert!(other.accessible, "seed {} {:?} -> {:?}", seed, pos, next);
                assert!(other.has_exit(dir.opposite()), "seed {} {:?} -> {:?}", seed, pos, next);
            }
        }
    }
}

#[test]
fn test_size_ceiling_over_many_seeds() {
    let generator = MapGenerator::default();
    let limit = generator.config().max_room_bytes;
    for seed in 0..100 {
        match generator.generate(&mut GameRng::new(seed)) {
            Ok(map) => {
                assert!(map.room_bytes() <= limit, "seed {}", seed);
                assert_eq!(map.bytes.last(), Some(&0));
            }
            Err(MapError::SizeBudget { size, limit: l }) => {
                assert!(size > l, "seed {}", seed);
            }
            Err(err) => panic!("seed {}: {}", seed, err),
        }
    }
}

#[test]
fn test_hub_grows_past_target_with_ten_seams() {
    for seed in [4, 44, 444] {
        let grid = built_grid(seed);
        let hub = grid.accessible_in(0);
        assert!(hub.len() >= 50, "seed {}: hub has {} rooms", seed, hub.len());

        let reached = grid.reachable_from(start());
        assert!(hub.iter().all(|p| reached.contains(p)));

        let seams = hub.iter().filter(|&&p| grid.room(p).is_entrance).count();
        assert_eq!(seams, 10, "seed {}", seed);
    }
}

#[test]
fn test_starting_points_are_typed() {
    let grid = built_grid(8);
    for (_, room) in grid.iter() {
        if room.is_entrance && room.area == 1 {
            assert_eq!(room.room_type, RoomType::Corridor);
            assert_eq!(room.content_id, 1);
        }
    }
    let text = grid.room(start());
    assert_eq!(text.room_type, RoomType::Text);
    assert_eq!(text.content_id, 0);
}

#[test]
fn test_undersized_areas_are_capacity_errors() {
    let config = MapConfig {
        area_size_min: 2,
        area_size_max: 2,
        ..MapConfig::default()
    };
    let generator = MapGenerator::new(config, ContentTables::default()).unwrap();
    let result = generator.generate(&mut GameRng::new(10));
    assert!(
        matches!(result, Err(MapError::Capacity { .. })),
        "{:?}",
        result.map(|m| m.room_bytes())
    );
}

#[test]
fn test_hub_too_small_to_reach_start_is_rejected() {
    let config = MapConfig {
        hub_size: 14,
        ..MapConfig::default()
    };
    assert!(matches!(
        MapGenerator::new(config, ContentTables::default()),
        Err(MapError::InvalidConfig(_))
    ));

    // The smallest accepted hub still connects the start to every seam
    let config = MapConfig {
        hub_size: 48,
        ..MapConfig::default()
    };
    let generator = MapGenerator::new(config, ContentTables::default()).unwrap();
    for seed in 0..50 {
        let (_, grid) = generator.build_grid(&mut GameRng::new(seed)).unwrap();
        assert_eq!(
            grid.reachable_from(start()).len(),
            grid.accessible_count(),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_portal_only_one_way_connections_take_effect() {
    let config = MapConfig {
        area_one_way_connections: 5,
        hub_one_way_connections: 5,
        portal_only_one_way: true,
        ..MapConfig::default()
    };
    let generator = MapGenerator::new(config, ContentTables::default()).unwrap();
    let mut total = 0;
    for seed in 0..10 {
        let (_, grid) = generator.build_grid(&mut GameRng::new(seed)).unwrap();
        for &(pos, dir) in &grid.one_way_exits {
            let (_, other) = grid.neighbor(pos, dir).unwrap();
            let eligible = grid.room(pos).room_type.is_portal_eligible()
                || other.room_type.is_portal_eligible();
            assert!(
                eligible,
                "seed {} {:?} {:?}",
                seed,
                pos,
                dir
            );
        }
        total += grid.one_way_exits.len();
    }
    assert!(total > 0);
}

#[test]
fn test_tight_budget_is_size_error() {
    let config = MapConfig {
        max_room_bytes: 600,
        ..MapConfig::default()
    };
    let generator = MapGenerator::new(config, ContentTables::default()).unwrap();
    assert!(matches!(
        generator.generate(&mut GameRng::new(10)),
        Err(MapError::SizeBudget { limit: 600, .. })
    ));
}

#[test]
fn test_retries_advance_the_seed() {
    let config = MapConfig {
        area_size_min: 2,
        area_size_max: 2,
        ..MapConfig::default()
    };
    let failing = MapGenerator::new(config, ContentTables::default()).unwrap();
    assert!(matches!(
        failing.generate_with_retries(100, 3),
        Err(MapError::Capacity { .. })
    ));

    let generator = MapGenerator::default();
    let retried = generator.generate_with_retries(100, 5);
    if let Ok(map) = &retried {
        assert!(map.room_bytes() <= generator.config().max_room_bytes);
    }
}

#[test]
fn test_lookup_resolves_every_slot() {
    let generator = MapGenerator::default();
    let map = match generator.generate(&mut GameRng::new(12)) {
        Ok(map) => map,
        Err(MapError::SizeBudget { .. }) => return,
        Err(err) => panic!("{}", err),
    };
    let tables = generator.tables();

    // 34 items, 22 minibosses, 21 corridors, 5 single and 5 multi shops
    assert_eq!(map.lookup.len(), 34 + 22 + 21 + 5 + 5);
    for area in 0..AREA_COUNT as u8 {
        for slot in 0..tables.items_for(area).len() {
            let room = GenericRoom::new(area, ContentKind::GroundItem, slot);
            let placement = map.lookup.get(&room).unwrap();
            assert_eq!(placement.content_id, tables.items_for(area)[slot]);
            assert!(placement.location.starts_with(&format!("A{} ", area)));
        }
    }

    let json = serde_json::to_value(&map.lookup).unwrap();
    assert!(json.get("A0 Corridor A").is_some());
    assert!(json.get("A10 Multi Shop A").is_some());
}

#[test]
fn test_dump_has_every_section() {
    let grid = built_grid(9);
    let dump = grid.to_string();
    assert!(dump.contains("TX"));
    assert!(dump.contains("XF"));
    assert!(dump.contains("SV"));
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    (
        any::<bool>(),
        0u8..4,
        Just((1..=10u8).collect::<Vec<u8>>()).prop_shuffle(),
    )
        .prop_map(|(flip, rotation, perm)| {
            let mut permutation = [0u8; 10];
            permutation.copy_from_slice(&perm);
            Layout {
                flip,
                rotation,
                permutation,
            }
        })
}

fn one_way_config() -> impl Strategy<Value = MapConfig> {
    (1u32..6, 1u32..6, any::<bool>()).prop_map(|(area, hub, portal_only)| MapConfig {
        area_one_way_connections: area,
        hub_one_way_connections: hub,
        portal_only_one_way: portal_only,
        ..MapConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_asymmetric_exits_are_one_way_extras(config in one_way_config(), seed in any::<u64>()) {
        let generator = match MapGenerator::new(config, ContentTables::default()) {
            Ok(generator) => generator,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        let grid = match generator.build_grid(&mut GameRng::new(seed)) {
            Ok((_, grid)) => grid,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        for (pos, room) in grid.iter() {
            for dir in Direction::ALL {
                if !room.has_exit(dir) {
                    continue;
                }
                let Some((_, other)) = grid.neighbor(pos, dir) else {
                    return Err(TestCaseError::fail(format!("exit off grid at {:?}", pos)));
                };
                prop_assert!(other.accessible);
                if !other.has_exit(dir.opposite()) {
                    prop_assert!(grid.one_way_exits.contains(&(pos, dir)), "{:?} {:?}", pos, dir);
                }
            }
        }
        prop_assert_eq!(grid.reachable_from(start()).len(), grid.accessible_count());
    }

    #[test]
    fn prop_every_layout_has_entrances(layout in layout_strategy(), seed in any::<u64>()) {
        let skeleton = AreaSkeleton::standard().transformed(&layout).unwrap();
        let mut grid = Grid::from_skeleton(&skeleton);
        build_hub_ring(&mut grid);
        for list in entrance_candidates(&grid) {
            prop_assert!(!list.is_empty());
        }
        prop_assert!(open_entrances(&mut grid, &mut GameRng::new(seed)).is_ok());
    }

    #[test]
    fn prop_every_layout_builds(layout in layout_strategy(), seed in any::<u64>()) {
        let generator = MapGenerator::default();
        let grid = match generator.build_grid_with_layout(&mut GameRng::new(seed), &layout) {
            Ok(grid) => grid,
            Err(err) => return Err(TestCaseError::fail(err.to_string())),
        };
        prop_assert_eq!(grid.reachable_from(start()).len(), grid.accessible_count());
    }
}
